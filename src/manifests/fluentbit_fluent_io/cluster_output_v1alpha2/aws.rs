//! Output plugins shipping records to AWS services: CloudWatch Logs,
//! Kinesis Data Firehose, Kinesis Data Streams and S3.
//!
//! The S3 plugin keeps the CRD's PascalCase keys (`Bucket`, `Region`, ...).

use serde::{Deserialize, Serialize};

use crate::manifests::common::{
    bool_attr, enum_attr, int64_attr, required_string_attr, string_attr, tls_block, Tls,
};
use crate::schema::{Block, NestedBlock};
use crate::validators::Validator;

/// Amazon CloudWatch output plugin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct CloudWatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_create_group: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_retry_requests: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_group_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_retention_days: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_stream_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_stream_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_stream_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_dimensions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_namespace: Option<String>,
    pub region: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sts_endpoint: Option<String>,
}

/// Amazon Kinesis Data Firehose output plugin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Firehose {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_retry_requests: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_keys: Option<String>,
    pub delivery_stream: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_key: Option<String>,
    pub region: String,
    #[serde(rename(serialize = "roleARN"), skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sts_endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_key_format: Option<String>,
}

/// Amazon Kinesis Data Streams output plugin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Kinesis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_retry_requests: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_key: Option<String>,
    pub region: String,
    #[serde(rename(serialize = "roleARN"), skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    pub stream: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sts_endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_key_format: Option<String>,
}

/// Amazon S3 output plugin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct S3 {
    #[serde(rename(serialize = "AutoRetryRequests"), skip_serializing_if = "Option::is_none")]
    pub auto_retry_requests: Option<bool>,
    #[serde(rename(serialize = "Bucket"))]
    pub bucket: String,
    #[serde(rename(serialize = "CannedAcl"), skip_serializing_if = "Option::is_none")]
    pub canned_acl: Option<String>,
    #[serde(rename(serialize = "Compression"), skip_serializing_if = "Option::is_none")]
    pub compression: Option<String>,
    #[serde(rename(serialize = "ContentType"), skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(rename(serialize = "Endpoint"), skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(rename(serialize = "ExternalId"), skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(rename(serialize = "JsonDateFormat"), skip_serializing_if = "Option::is_none")]
    pub json_date_format: Option<String>,
    #[serde(rename(serialize = "JsonDateKey"), skip_serializing_if = "Option::is_none")]
    pub json_date_key: Option<String>,
    #[serde(rename(serialize = "LogKey"), skip_serializing_if = "Option::is_none")]
    pub log_key: Option<String>,
    #[serde(rename(serialize = "PreserveDataOrdering"), skip_serializing_if = "Option::is_none")]
    pub preserve_data_ordering: Option<bool>,
    #[serde(rename(serialize = "Profile"), skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    #[serde(rename(serialize = "Region"))]
    pub region: String,
    #[serde(rename(serialize = "RoleArn"), skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    #[serde(rename(serialize = "S3KeyFormat"), skip_serializing_if = "Option::is_none")]
    pub s3_key_format: Option<String>,
    #[serde(rename(serialize = "S3KeyFormatTagDelimiters"), skip_serializing_if = "Option::is_none")]
    pub s3_key_format_tag_delimiters: Option<String>,
    #[serde(rename(serialize = "SendContentMd5"), skip_serializing_if = "Option::is_none")]
    pub send_content_md5: Option<bool>,
    #[serde(rename(serialize = "StaticFilePath"), skip_serializing_if = "Option::is_none")]
    pub static_file_path: Option<bool>,
    #[serde(rename(serialize = "StorageClass"), skip_serializing_if = "Option::is_none")]
    pub storage_class: Option<String>,
    #[serde(rename(serialize = "StoreDir"), skip_serializing_if = "Option::is_none")]
    pub store_dir: Option<String>,
    #[serde(rename(serialize = "StoreDirLimitSize"), skip_serializing_if = "Option::is_none")]
    pub store_dir_limit_size: Option<String>,
    #[serde(rename(serialize = "StsEndpoint"), skip_serializing_if = "Option::is_none")]
    pub sts_endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls: Option<Tls>,
    #[serde(rename(serialize = "TotalFileSize"), skip_serializing_if = "Option::is_none")]
    pub total_file_size: Option<String>,
    #[serde(rename(serialize = "UploadChunkSize"), skip_serializing_if = "Option::is_none")]
    pub upload_chunk_size: Option<String>,
    #[serde(rename(serialize = "UploadTimeout"), skip_serializing_if = "Option::is_none")]
    pub upload_timeout: Option<String>,
    #[serde(rename(serialize = "UsePutObject"), skip_serializing_if = "Option::is_none")]
    pub use_put_object: Option<bool>,
}

pub(super) fn cloud_watch_block() -> NestedBlock {
    NestedBlock::single(
        Block::new()
            .with_description("CloudWatch defines CloudWatch Output Configuration")
            .with_attribute(
                "auto_create_group",
                bool_attr("Automatically create the log group. Defaults to False."),
            )
            .with_attribute(
                "auto_retry_requests",
                bool_attr("Automatically retry failed requests to CloudWatch once. Defaults to True."),
            )
            .with_attribute(
                "endpoint",
                string_attr("Specify a custom endpoint for the CloudWatch Logs API"),
            )
            .with_attribute(
                "external_id",
                string_attr("Specify an external ID for the STS API."),
            )
            .with_attribute(
                "log_format",
                string_attr("Optional parameter to tell CloudWatch the format of the data"),
            )
            .with_attribute(
                "log_group_name",
                string_attr("Name of Cloudwatch Log Group to send log records to"),
            )
            .with_attribute(
                "log_group_template",
                string_attr("Template for Log Group name, overrides LogGroupName if set."),
            )
            .with_attribute(
                "log_key",
                string_attr("If set, only the value of the key will be sent to CloudWatch"),
            )
            .with_attribute(
                "log_retention_days",
                int64_attr("Number of days logs are retained for")
                    .with_validator(Validator::one_of_int64([1, 3, 5, 7, 14, 30, 60, 90, 120, 150, 180, 365, 400, 545, 731, 1827, 3653])),
            )
            .with_attribute(
                "log_stream_name",
                string_attr("The name of the CloudWatch Log Stream to send log records to"),
            )
            .with_attribute(
                "log_stream_prefix",
                string_attr("Prefix for the Log Stream name. Not compatible with LogStreamName setting"),
            )
            .with_attribute(
                "log_stream_template",
                string_attr("Template for Log Stream name. Overrides LogStreamPrefix and LogStreamName if set."),
            )
            .with_attribute(
                "metric_dimensions",
                string_attr("Optional lists of lists for dimension keys to be added to all metrics. Use comma separated strings for one list of dimensions and semicolon separated strings for list of lists dimensions."),
            )
            .with_attribute(
                "metric_namespace",
                string_attr("Optional string to represent the CloudWatch namespace."),
            )
            .with_attribute(
                "region",
                required_string_attr("AWS Region"),
            )
            .with_attribute(
                "role_arn",
                string_attr("Role ARN to use for cross-account access"),
            )
            .with_attribute(
                "sts_endpoint",
                string_attr("Specify a custom STS endpoint for the AWS STS API"),
            )
    )
}

pub(super) fn firehose_block() -> NestedBlock {
    NestedBlock::single(
        Block::new()
            .with_description("Firehose defines Firehose Output configuration.")
            .with_attribute(
                "auto_retry_requests",
                bool_attr("Immediately retry failed requests to AWS services once. This option does not affect the normal Fluent Bit retry mechanism with backoff."),
            )
            .with_attribute(
                "data_keys",
                string_attr("By default, the whole log record will be sent to Kinesis. If you specify a key name(s) with this option, then only those keys and values will be sent to Kinesis."),
            )
            .with_attribute(
                "delivery_stream",
                required_string_attr("The name of the Kinesis Firehose Delivery stream that you want log records sent to."),
            )
            .with_attribute(
                "endpoint",
                string_attr("Specify a custom endpoint for the Kinesis Firehose API."),
            )
            .with_attribute(
                "log_key",
                string_attr("By default, the whole log record will be sent to Firehose. If you specify a key name with this option, then only the value of that key will be sent to Firehose."),
            )
            .with_attribute(
                "region",
                required_string_attr("The AWS region."),
            )
            .with_attribute(
                "role_arn",
                string_attr("ARN of an IAM role to assume (for cross account access)."),
            )
            .with_attribute(
                "sts_endpoint",
                string_attr("Specify a custom endpoint for the STS API; used to assume your custom role provided with role_arn."),
            )
            .with_attribute(
                "time_key",
                string_attr("Add the timestamp to the record under this key. By default the timestamp from Fluent Bit will not be added to records sent to Kinesis."),
            )
            .with_attribute(
                "time_key_format",
                string_attr("strftime compliant format string for the timestamp; for example, %Y-%m-%dT%H *string This option is used with time_key."),
            )
    )
}

pub(super) fn kinesis_block() -> NestedBlock {
    NestedBlock::single(
        Block::new()
            .with_description("The Kinesis output plugin, allows to ingest your records into AWS Kinesis.")
            .with_attribute(
                "auto_retry_requests",
                bool_attr("Immediately retry failed requests to AWS services once."),
            )
            .with_attribute(
                "endpoint",
                string_attr("Specify a custom endpoint for the Kinesis API."),
            )
            .with_attribute(
                "log_key",
                string_attr("By default, the whole log record will be sent to Kinesis. If you specify a key name with this option, then only the value of that key will be sent to Kinesis."),
            )
            .with_attribute(
                "region",
                required_string_attr("The AWS region."),
            )
            .with_attribute(
                "role_arn",
                string_attr("ARN of an IAM role to assume (for cross account access)."),
            )
            .with_attribute(
                "stream",
                required_string_attr("The name of the Kinesis Streams Delivery Stream that you want log records send to."),
            )
            .with_attribute(
                "sts_endpoint",
                string_attr("Custom endpoint for the STS API."),
            )
            .with_attribute(
                "time_key",
                string_attr("Add the timestamp to the record under this key. By default the timestamp from Fluent Bit will not be added to records sent to Kinesis."),
            )
            .with_attribute(
                "time_key_format",
                string_attr("strftime compliant format string for the timestamp; for example, the default is %Y-%m-%dT%H:%M:%S."),
            )
    )
}

pub(super) fn s3_block() -> NestedBlock {
    NestedBlock::single(
        Block::new()
            .with_description("S3 defines the S3 Output configuration.")
            .with_attribute(
                "auto_retry_requests",
                bool_attr("Immediately retry failed requests to AWS services once."),
            )
            .with_attribute(
                "bucket",
                required_string_attr("S3 Bucket name"),
            )
            .with_attribute(
                "canned_acl",
                string_attr("Predefined Canned ACL Policy for S3 objects."),
            )
            .with_attribute(
                "compression",
                enum_attr("Compression type for S3 objects.", ["gzip", "arrow"]),
            )
            .with_attribute(
                "content_type",
                string_attr("A standard MIME type for the S3 object; this will be set as the Content-Type HTTP header."),
            )
            .with_attribute(
                "endpoint",
                string_attr("Custom endpoint for the S3 API."),
            )
            .with_attribute(
                "external_id",
                string_attr("Specify an external ID for the STS API, can be used with the role_arn parameter if your role requires an external ID."),
            )
            .with_attribute(
                "json_date_format",
                enum_attr("Specify the format of the date. Supported formats are double, epoch, iso8601 (eg: 2018-05-30T09:39:52.000681Z) and java_sql_timestamp (eg: 2018-05-30 09:39:52.000681)", ["double", "epoch", "iso8601", "java_sql_timestamp"]),
            )
            .with_attribute(
                "json_date_key",
                string_attr("Specify the name of the time key in the output record. To disable the time key just set the value to false."),
            )
            .with_attribute(
                "log_key",
                string_attr("By default, the whole log record will be sent to S3. If you specify a key name with this option, then only the value of that key will be sent to S3."),
            )
            .with_attribute(
                "preserve_data_ordering",
                bool_attr("Normally, when an upload request fails, there is a high chance for the last received chunk to be swapped with a later chunk, resulting in data shuffling. This feature prevents this shuffling by using a queue logic for uploads."),
            )
            .with_attribute(
                "profile",
                string_attr("Option to specify an AWS Profile for credentials."),
            )
            .with_attribute(
                "region",
                required_string_attr("The AWS region of your S3 bucket"),
            )
            .with_attribute(
                "role_arn",
                string_attr("ARN of an IAM role to assume"),
            )
            .with_attribute(
                "s3_key_format",
                string_attr("Format string for keys in S3."),
            )
            .with_attribute(
                "s3_key_format_tag_delimiters",
                string_attr("A series of characters which will be used to split the tag into parts for use with the s3_key_format option."),
            )
            .with_attribute(
                "send_content_md5",
                bool_attr("Send the Content-MD5 header with PutObject and UploadPart requests, as is required when Object Lock is enabled."),
            )
            .with_attribute(
                "static_file_path",
                bool_attr("Disables behavior where UUID string is automatically appended to end of S3 key name when $UUID is not provided in s3_key_format. $UUID, time formatters, $TAG, and other dynamic key formatters all work as expected while this feature is set to true."),
            )
            .with_attribute(
                "storage_class",
                string_attr("Specify the storage class for S3 objects. If this option is not specified, objects will be stored with the default STANDARD storage class."),
            )
            .with_attribute(
                "store_dir",
                string_attr("Directory to locally buffer data before sending."),
            )
            .with_attribute(
                "store_dir_limit_size",
                string_attr("The size of the limitation for disk usage in S3."),
            )
            .with_attribute(
                "sts_endpoint",
                string_attr("Custom endpoint for the STS API."),
            )
            .with_block("tls", tls_block())
            .with_attribute(
                "total_file_size",
                string_attr("Specifies the size of files in S3. Minimum size is 1M. With use_put_object On the maximum size is 1G. With multipart upload mode, the maximum size is 50G."),
            )
            .with_attribute(
                "upload_chunk_size",
                string_attr("The size of each part for multipart uploads. Max: 50M"),
            )
            .with_attribute(
                "upload_timeout",
                string_attr("Whenever this amount of time has elapsed, Fluent Bit will complete an upload and create a new file in S3. For example, set this value to 60m and you will get a new file every hour."),
            )
            .with_attribute(
                "use_put_object",
                bool_attr("Use the S3 PutObject API, instead of the multipart upload API."),
            )
    )
}

#[cfg(test)]
mod tests {
    use super::super::{render_plugin, sorted_keys};
    use serde_json::json;

    #[test]
    fn test_cloud_watch_renders_every_field() {
        let cloud_watch = render_plugin(
            "cloud_watch",
            json!({
                "auto_create_group": true,
                "auto_retry_requests": true,
                "endpoint": "endpoint",
                "external_id": "external_id",
                "log_format": "log_format",
                "log_group_name": "log_group_name",
                "log_group_template": "log_group_template",
                "log_key": "log_key",
                "log_retention_days": 14,
                "log_stream_name": "log_stream_name",
                "log_stream_prefix": "log_stream_prefix",
                "log_stream_template": "log_stream_template",
                "metric_dimensions": "metric_dimensions",
                "metric_namespace": "metric_namespace",
                "region": "region",
                "role_arn": "role_arn",
                "sts_endpoint": "sts_endpoint",
            }),
        );

        assert_eq!(
            sorted_keys(&cloud_watch),
            [
                "autoCreateGroup",
                "autoRetryRequests",
                "endpoint",
                "externalId",
                "logFormat",
                "logGroupName",
                "logGroupTemplate",
                "logKey",
                "logRetentionDays",
                "logStreamName",
                "logStreamPrefix",
                "logStreamTemplate",
                "metricDimensions",
                "metricNamespace",
                "region",
                "roleArn",
                "stsEndpoint",
            ]
        );
    }

    #[test]
    fn test_firehose_renders_every_field() {
        let firehose = render_plugin(
            "firehose",
            json!({
                "auto_retry_requests": true,
                "data_keys": "data_keys",
                "delivery_stream": "delivery_stream",
                "endpoint": "endpoint",
                "log_key": "log_key",
                "region": "region",
                "role_arn": "role_arn",
                "sts_endpoint": "sts_endpoint",
                "time_key": "time_key",
                "time_key_format": "time_key_format",
            }),
        );

        assert_eq!(
            sorted_keys(&firehose),
            [
                "autoRetryRequests",
                "dataKeys",
                "deliveryStream",
                "endpoint",
                "logKey",
                "region",
                "roleARN",
                "stsEndpoint",
                "timeKey",
                "timeKeyFormat",
            ]
        );
        assert_eq!(firehose["roleARN"], "role_arn");
    }

    #[test]
    fn test_kinesis_renders_every_field() {
        let kinesis = render_plugin(
            "kinesis",
            json!({
                "auto_retry_requests": true,
                "endpoint": "endpoint",
                "log_key": "log_key",
                "region": "region",
                "role_arn": "role_arn",
                "stream": "stream",
                "sts_endpoint": "sts_endpoint",
                "time_key": "time_key",
                "time_key_format": "time_key_format",
            }),
        );

        assert_eq!(
            sorted_keys(&kinesis),
            [
                "autoRetryRequests",
                "endpoint",
                "logKey",
                "region",
                "roleARN",
                "stream",
                "stsEndpoint",
                "timeKey",
                "timeKeyFormat",
            ]
        );
        assert_eq!(kinesis["roleARN"], "role_arn");
    }

    #[test]
    fn test_s3_renders_every_field() {
        let s3 = render_plugin(
            "s3",
            json!({
                "auto_retry_requests": true,
                "bucket": "bucket",
                "canned_acl": "canned_acl",
                "compression": "gzip",
                "content_type": "content_type",
                "endpoint": "endpoint",
                "external_id": "external_id",
                "json_date_format": "double",
                "json_date_key": "json_date_key",
                "log_key": "log_key",
                "preserve_data_ordering": true,
                "profile": "profile",
                "region": "region",
                "role_arn": "role_arn",
                "s3_key_format": "s3_key_format",
                "s3_key_format_tag_delimiters": "s3_key_format_tag_delimiters",
                "send_content_md5": true,
                "static_file_path": true,
                "storage_class": "storage_class",
                "store_dir": "store_dir",
                "store_dir_limit_size": "store_dir_limit_size",
                "sts_endpoint": "sts_endpoint",
                "tls": {"verify": true},
                "total_file_size": "total_file_size",
                "upload_chunk_size": "upload_chunk_size",
                "upload_timeout": "upload_timeout",
                "use_put_object": true,
            }),
        );

        assert_eq!(
            sorted_keys(&s3),
            [
                "AutoRetryRequests",
                "Bucket",
                "CannedAcl",
                "Compression",
                "ContentType",
                "Endpoint",
                "ExternalId",
                "JsonDateFormat",
                "JsonDateKey",
                "LogKey",
                "PreserveDataOrdering",
                "Profile",
                "Region",
                "RoleArn",
                "S3KeyFormat",
                "S3KeyFormatTagDelimiters",
                "SendContentMd5",
                "StaticFilePath",
                "StorageClass",
                "StoreDir",
                "StoreDirLimitSize",
                "StsEndpoint",
                "TotalFileSize",
                "UploadChunkSize",
                "UploadTimeout",
                "UsePutObject",
                "tls",
            ]
        );
        assert_eq!(s3["AutoRetryRequests"].as_bool(), Some(true));
        assert_eq!(s3["Bucket"], "bucket");
        assert_eq!(s3["CannedAcl"], "canned_acl");
        assert_eq!(s3["Compression"], "gzip");
        assert_eq!(s3["ContentType"], "content_type");
        assert_eq!(s3["Endpoint"], "endpoint");
        assert_eq!(s3["ExternalId"], "external_id");
        assert_eq!(s3["JsonDateFormat"], "double");
        assert_eq!(s3["JsonDateKey"], "json_date_key");
        assert_eq!(s3["LogKey"], "log_key");
        assert_eq!(s3["PreserveDataOrdering"].as_bool(), Some(true));
        assert_eq!(s3["Profile"], "profile");
        assert_eq!(s3["Region"], "region");
        assert_eq!(s3["RoleArn"], "role_arn");
        assert_eq!(s3["S3KeyFormat"], "s3_key_format");
        assert_eq!(s3["S3KeyFormatTagDelimiters"], "s3_key_format_tag_delimiters");
        assert_eq!(s3["SendContentMd5"].as_bool(), Some(true));
        assert_eq!(s3["StaticFilePath"].as_bool(), Some(true));
        assert_eq!(s3["StorageClass"], "storage_class");
        assert_eq!(s3["StoreDir"], "store_dir");
        assert_eq!(s3["StoreDirLimitSize"], "store_dir_limit_size");
        assert_eq!(s3["StsEndpoint"], "sts_endpoint");
        assert_eq!(s3["TotalFileSize"], "total_file_size");
        assert_eq!(s3["UploadChunkSize"], "upload_chunk_size");
        assert_eq!(s3["UploadTimeout"], "upload_timeout");
        assert_eq!(s3["UsePutObject"].as_bool(), Some(true));
    }
}
