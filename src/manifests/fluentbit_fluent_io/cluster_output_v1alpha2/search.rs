//! Elasticsearch and OpenSearch output plugins.

use serde::{Deserialize, Serialize};

use crate::manifests::common::{
    bool_attr, enum_attr, int64_attr, port_attr, secret_block, string_attr, tls_block, Secret, Tls,
};
use crate::schema::{Block, NestedBlock};
use crate::validators::Validator;

/// Elasticsearch output plugin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Elasticsearch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_auth: Option<String>,
    #[serde(rename(serialize = "awsExternalID"), skip_serializing_if = "Option::is_none")]
    pub aws_external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_region: Option<String>,
    #[serde(rename(serialize = "awsRoleARN"), skip_serializing_if = "Option::is_none")]
    pub aws_role_arn: Option<String>,
    #[serde(rename(serialize = "awsSTSEndpoint"), skip_serializing_if = "Option::is_none")]
    pub aws_sts_endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buffer_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_auth: Option<String>,
    #[serde(rename(serialize = "cloudID"), skip_serializing_if = "Option::is_none")]
    pub cloud_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compress: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_time_index: Option<bool>,
    #[serde(rename(serialize = "generateID"), skip_serializing_if = "Option::is_none")]
    pub generate_id: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hosts: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_password: Option<Secret>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_user: Option<Secret>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_tag_key: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logstash_date_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logstash_format: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logstash_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logstash_prefix_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipeline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replace_dots: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suppress_type_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_key_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_key_nanos: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls: Option<Tls>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_error: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_output: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_operation: Option<String>,
}

/// OpenSearch output plugin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct OpenSearch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_auth: Option<String>,
    #[serde(rename(serialize = "awsExternalID"), skip_serializing_if = "Option::is_none")]
    pub aws_external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_region: Option<String>,
    #[serde(rename(serialize = "awsRoleARN"), skip_serializing_if = "Option::is_none")]
    pub aws_role_arn: Option<String>,
    #[serde(rename(serialize = "awsSTSEndpoint"), skip_serializing_if = "Option::is_none")]
    pub aws_sts_endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buffer_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_time_index: Option<bool>,
    #[serde(rename(serialize = "generateID"), skip_serializing_if = "Option::is_none")]
    pub generate_id: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_password: Option<Secret>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_user: Option<Secret>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_tag_key: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logstash_date_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logstash_format: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logstash_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logstash_prefix_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipeline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replace_dots: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suppress_type_name: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_key_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_key_nanos: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls: Option<Tls>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_error: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_output: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    #[serde(rename(serialize = "Workers"), skip_serializing_if = "Option::is_none")]
    pub workers: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_operation: Option<String>,
}

pub(super) fn elasticsearch_block() -> NestedBlock {
    NestedBlock::single(
        Block::new()
            .with_description("Elasticsearch defines Elasticsearch Output configuration.")
            .with_attribute(
                "aws_auth",
                string_attr("Enable AWS Sigv4 Authentication for Amazon ElasticSearch Service."),
            )
            .with_attribute(
                "aws_external_id",
                string_attr("External ID for the AWS IAM Role specified with aws_role_arn."),
            )
            .with_attribute(
                "aws_region",
                string_attr("Specify the AWS region for Amazon ElasticSearch Service."),
            )
            .with_attribute(
                "aws_role_arn",
                string_attr("AWS IAM Role to assume to put records to your Amazon cluster."),
            )
            .with_attribute(
                "aws_sts_endpoint",
                string_attr("Specify the custom sts endpoint to be used with STS API for Amazon ElasticSearch Service."),
            )
            .with_attribute(
                "buffer_size",
                string_attr("Specify the buffer size used to read the response from the Elasticsearch HTTP service. This option is useful for debugging purposes where is required to read full responses, note that response size grows depending of the number of records inserted. To set an unlimited amount of memory set this value to False, otherwise the value must be according to the Unit Size specification.")
                    .with_validator(Validator::regex_matches(r"^\d+(k|K|KB|kb|m|M|MB|mb|g|G|GB|gb)?$", "must be a size such as 512k, 5MB or 1G")),
            )
            .with_attribute(
                "cloud_auth",
                string_attr("Specify the credentials to use to connect to Elastic's Elasticsearch Service running on Elastic Cloud"),
            )
            .with_attribute(
                "cloud_id",
                string_attr("If you are using Elastic's Elasticsearch Service you can specify the cloud_id of the cluster running."),
            )
            .with_attribute(
                "compress",
                enum_attr("Set payload compression mechanism.", ["gzip"]),
            )
            .with_attribute(
                "current_time_index",
                bool_attr("Use current time for index generation instead of message record"),
            )
            .with_attribute(
                "generate_id",
                bool_attr("When enabled, generate _id for outgoing records. This prevents duplicate records when retrying ES."),
            )
            .with_attribute(
                "host",
                string_attr("IP address or hostname of the target Elasticsearch instance"),
            )
            .with_attribute(
                "hosts",
                string_attr("IP address or hostname of the target Elasticsearch instance, default `127.0.0.1`"),
            )
            .with_block("http_password", secret_block("Password for user defined in HTTP_User"))
            .with_block("http_user", secret_block("Optional username credential for Elastic X-Pack access"))
            .with_attribute(
                "id_key",
                string_attr("If set, _id will be the value of the key from incoming record and Generate_ID option is ignored."),
            )
            .with_attribute(
                "include_tag_key",
                bool_attr("When enabled, it append the Tag name to the record."),
            )
            .with_attribute(
                "index",
                string_attr("Index name"),
            )
            .with_attribute(
                "logstash_date_format",
                string_attr("Time format (based on strftime) to generate the second part of the Index name."),
            )
            .with_attribute(
                "logstash_format",
                bool_attr("Enable Logstash format compatibility. This option takes a boolean value: True/False, On/Off"),
            )
            .with_attribute(
                "logstash_prefix",
                string_attr("When Logstash_Format is enabled, the Index name is composed using a prefix and the date, e.g: If Logstash_Prefix is equals to 'mydata' your index will become 'mydata-YYYY.MM.DD'. The last string appended belongs to the date when the data is being generated."),
            )
            .with_attribute(
                "logstash_prefix_key",
                string_attr("Prefix keys with this string"),
            )
            .with_attribute(
                "path",
                string_attr("Elasticsearch accepts new data on HTTP query path /_bulk. But it is also possible to serve Elasticsearch behind a reverse proxy on a subpath. This option defines such path on the fluent-bit side. It simply adds a path prefix in the indexing HTTP POST URI."),
            )
            .with_attribute(
                "pipeline",
                string_attr("Newer versions of Elasticsearch allows setting up filters called pipelines. This option allows defining which pipeline the database should use. For performance reasons is strongly suggested parsing and filtering on Fluent Bit side, avoid pipelines."),
            )
            .with_attribute(
                "port",
                port_attr("TCP port of the target Elasticsearch instance"),
            )
            .with_attribute(
                "replace_dots",
                bool_attr("When enabled, replace field name dots with underscore, required by Elasticsearch 2.0-2.3."),
            )
            .with_attribute(
                "suppress_type_name",
                string_attr("When enabled, mapping types is removed and Type option is ignored. Types are deprecated in APIs in v7.0. This options is for v7.0 or later."),
            )
            .with_attribute(
                "tag_key",
                string_attr("When Include_Tag_Key is enabled, this property defines the key name for the tag."),
            )
            .with_attribute(
                "time_key",
                string_attr("When Logstash_Format is enabled, each record will get a new timestamp field. The Time_Key property defines the name of that field."),
            )
            .with_attribute(
                "time_key_format",
                string_attr("When Logstash_Format is enabled, this property defines the format of the timestamp."),
            )
            .with_attribute(
                "time_key_nanos",
                bool_attr("When Logstash_Format is enabled, enabling this property sends nanosecond precision timestamps."),
            )
            .with_block("tls", tls_block())
            .with_attribute(
                "trace_error",
                bool_attr("When enabled print the elasticsearch API calls to stdout when elasticsearch returns an error"),
            )
            .with_attribute(
                "trace_output",
                bool_attr("When enabled print the elasticsearch API calls to stdout (for diag only)"),
            )
            .with_attribute(
                "type",
                string_attr("Type name"),
            )
            .with_attribute(
                "write_operation",
                enum_attr("Operation to use to write in bulk requests.", ["create", "index", "update", "upsert"]),
            )
    )
}

pub(super) fn open_search_block() -> NestedBlock {
    NestedBlock::single(
        Block::new()
            .with_description("OpenSearch defines OpenSearch Output configuration.")
            .with_attribute(
                "aws_auth",
                string_attr("Enable AWS Sigv4 Authentication for Amazon ElasticSearch Service."),
            )
            .with_attribute(
                "aws_external_id",
                string_attr("External ID for the AWS IAM Role specified with aws_role_arn."),
            )
            .with_attribute(
                "aws_region",
                string_attr("Specify the AWS region for Amazon ElasticSearch Service."),
            )
            .with_attribute(
                "aws_role_arn",
                string_attr("AWS IAM Role to assume to put records to your Amazon cluster."),
            )
            .with_attribute(
                "aws_sts_endpoint",
                string_attr("Specify the custom sts endpoint to be used with STS API for Amazon ElasticSearch Service."),
            )
            .with_attribute(
                "buffer_size",
                string_attr("Specify the buffer size used to read the response from the Elasticsearch HTTP service. This option is useful for debugging purposes where is required to read full responses, note that response size grows depending of the number of records inserted. To set an unlimited amount of memory set this value to False, otherwise the value must be according to the Unit Size specification.")
                    .with_validator(Validator::regex_matches(r"^\d+(k|K|KB|kb|m|M|MB|mb|g|G|GB|gb)?$", "must be a size such as 512k, 5MB or 1G")),
            )
            .with_attribute(
                "current_time_index",
                bool_attr("Use current time for index generation instead of message record"),
            )
            .with_attribute(
                "generate_id",
                bool_attr("When enabled, generate _id for outgoing records. This prevents duplicate records when retrying ES."),
            )
            .with_attribute(
                "host",
                string_attr("IP address or hostname of the target Elasticsearch instance"),
            )
            .with_block("http_password", secret_block("Password for user defined in HTTP_User"))
            .with_block("http_user", secret_block("Optional username credential for Elastic X-Pack access"))
            .with_attribute(
                "id_key",
                string_attr("If set, _id will be the value of the key from incoming record and Generate_ID option is ignored."),
            )
            .with_attribute(
                "include_tag_key",
                bool_attr("When enabled, it append the Tag name to the record."),
            )
            .with_attribute(
                "index",
                string_attr("Index name"),
            )
            .with_attribute(
                "logstash_date_format",
                string_attr("Time format (based on strftime) to generate the second part of the Index name."),
            )
            .with_attribute(
                "logstash_format",
                bool_attr("Enable Logstash format compatibility. This option takes a boolean value: True/False, On/Off"),
            )
            .with_attribute(
                "logstash_prefix",
                string_attr("When Logstash_Format is enabled, the Index name is composed using a prefix and the date, e.g: If Logstash_Prefix is equals to 'mydata' your index will become 'mydata-YYYY.MM.DD'. The last string appended belongs to the date when the data is being generated."),
            )
            .with_attribute(
                "logstash_prefix_key",
                string_attr("Prefix keys with this string"),
            )
            .with_attribute(
                "path",
                string_attr("Elasticsearch accepts new data on HTTP query path /_bulk. But it is also possible to serve Elasticsearch behind a reverse proxy on a subpath. This option defines such path on the fluent-bit side. It simply adds a path prefix in the indexing HTTP POST URI."),
            )
            .with_attribute(
                "pipeline",
                string_attr("Newer versions of Elasticsearch allows setting up filters called pipelines. This option allows defining which pipeline the database should use. For performance reasons is strongly suggested parsing and filtering on Fluent Bit side, avoid pipelines."),
            )
            .with_attribute(
                "port",
                port_attr("TCP port of the target Elasticsearch instance"),
            )
            .with_attribute(
                "replace_dots",
                bool_attr("When enabled, replace field name dots with underscore, required by Elasticsearch 2.0-2.3."),
            )
            .with_attribute(
                "suppress_type_name",
                bool_attr("When enabled, mapping types is removed and Type option is ignored."),
            )
            .with_attribute(
                "tag_key",
                string_attr("When Include_Tag_Key is enabled, this property defines the key name for the tag."),
            )
            .with_attribute(
                "time_key",
                string_attr("When Logstash_Format is enabled, each record will get a new timestamp field. The Time_Key property defines the name of that field."),
            )
            .with_attribute(
                "time_key_format",
                string_attr("When Logstash_Format is enabled, this property defines the format of the timestamp."),
            )
            .with_attribute(
                "time_key_nanos",
                bool_attr("When Logstash_Format is enabled, enabling this property sends nanosecond precision timestamps."),
            )
            .with_block("tls", tls_block())
            .with_attribute(
                "trace_error",
                bool_attr("When enabled print the elasticsearch API calls to stdout when elasticsearch returns an error"),
            )
            .with_attribute(
                "trace_output",
                bool_attr("When enabled print the elasticsearch API calls to stdout (for diag only)"),
            )
            .with_attribute(
                "type",
                string_attr("Type name"),
            )
            .with_attribute(
                "workers",
                int64_attr("Enables dedicated thread(s) for this output. Default value is set since version 1.8.13. For previous versions is 0."),
            )
            .with_attribute(
                "write_operation",
                enum_attr("Operation to use to write in bulk requests.", ["create", "index", "update", "upsert"]),
            )
    )
}

#[cfg(test)]
mod tests {
    use super::super::{render_plugin, sorted_keys};
    use serde_json::json;

    #[test]
    fn test_elasticsearch_renders_every_field() {
        let es = render_plugin(
            "es",
            json!({
                "aws_auth": "aws_auth",
                "aws_external_id": "aws_external_id",
                "aws_region": "aws_region",
                "aws_role_arn": "aws_role_arn",
                "aws_sts_endpoint": "aws_sts_endpoint",
                "buffer_size": "5MB",
                "cloud_auth": "cloud_auth",
                "cloud_id": "cloud_id",
                "compress": "gzip",
                "current_time_index": true,
                "generate_id": true,
                "host": "host",
                "hosts": "hosts",
                "http_password": {"value_from": {"secret_key_ref": {"key": "http_password", "name": "credentials"}}},
                "http_user": {"value_from": {"secret_key_ref": {"key": "http_user", "name": "credentials"}}},
                "id_key": "id_key",
                "include_tag_key": true,
                "index": "index",
                "logstash_date_format": "logstash_date_format",
                "logstash_format": true,
                "logstash_prefix": "logstash_prefix",
                "logstash_prefix_key": "logstash_prefix_key",
                "path": "path",
                "pipeline": "pipeline",
                "port": 9200,
                "replace_dots": true,
                "suppress_type_name": "suppress_type_name",
                "tag_key": "tag_key",
                "time_key": "time_key",
                "time_key_format": "time_key_format",
                "time_key_nanos": true,
                "tls": {"verify": true},
                "trace_error": true,
                "trace_output": true,
                "type": "type",
                "write_operation": "create",
            }),
        );

        assert_eq!(
            sorted_keys(&es),
            [
                "awsAuth",
                "awsExternalID",
                "awsRegion",
                "awsRoleARN",
                "awsSTSEndpoint",
                "bufferSize",
                "cloudAuth",
                "cloudID",
                "compress",
                "currentTimeIndex",
                "generateID",
                "host",
                "hosts",
                "httpPassword",
                "httpUser",
                "idKey",
                "includeTagKey",
                "index",
                "logstashDateFormat",
                "logstashFormat",
                "logstashPrefix",
                "logstashPrefixKey",
                "path",
                "pipeline",
                "port",
                "replaceDots",
                "suppressTypeName",
                "tagKey",
                "timeKey",
                "timeKeyFormat",
                "timeKeyNanos",
                "tls",
                "traceError",
                "traceOutput",
                "type",
                "writeOperation",
            ]
        );
        assert_eq!(es["awsExternalID"], "aws_external_id");
        assert_eq!(es["awsRoleARN"], "aws_role_arn");
        assert_eq!(es["awsSTSEndpoint"], "aws_sts_endpoint");
        assert_eq!(es["cloudID"], "cloud_id");
        assert_eq!(es["generateID"].as_bool(), Some(true));
    }

    #[test]
    fn test_open_search_renders_every_field() {
        let open_search = render_plugin(
            "open_search",
            json!({
                "aws_auth": "aws_auth",
                "aws_external_id": "aws_external_id",
                "aws_region": "aws_region",
                "aws_role_arn": "aws_role_arn",
                "aws_sts_endpoint": "aws_sts_endpoint",
                "buffer_size": "5MB",
                "current_time_index": true,
                "generate_id": true,
                "host": "host",
                "http_password": {"value_from": {"secret_key_ref": {"key": "http_password", "name": "credentials"}}},
                "http_user": {"value_from": {"secret_key_ref": {"key": "http_user", "name": "credentials"}}},
                "id_key": "id_key",
                "include_tag_key": true,
                "index": "index",
                "logstash_date_format": "logstash_date_format",
                "logstash_format": true,
                "logstash_prefix": "logstash_prefix",
                "logstash_prefix_key": "logstash_prefix_key",
                "path": "path",
                "pipeline": "pipeline",
                "port": 9200,
                "replace_dots": true,
                "suppress_type_name": true,
                "tag_key": "tag_key",
                "time_key": "time_key",
                "time_key_format": "time_key_format",
                "time_key_nanos": true,
                "tls": {"verify": true},
                "trace_error": true,
                "trace_output": true,
                "type": "type",
                "workers": 3,
                "write_operation": "create",
            }),
        );

        assert_eq!(
            sorted_keys(&open_search),
            [
                "Workers",
                "awsAuth",
                "awsExternalID",
                "awsRegion",
                "awsRoleARN",
                "awsSTSEndpoint",
                "bufferSize",
                "currentTimeIndex",
                "generateID",
                "host",
                "httpPassword",
                "httpUser",
                "idKey",
                "includeTagKey",
                "index",
                "logstashDateFormat",
                "logstashFormat",
                "logstashPrefix",
                "logstashPrefixKey",
                "path",
                "pipeline",
                "port",
                "replaceDots",
                "suppressTypeName",
                "tagKey",
                "timeKey",
                "timeKeyFormat",
                "timeKeyNanos",
                "tls",
                "traceError",
                "traceOutput",
                "type",
                "writeOperation",
            ]
        );
        assert_eq!(open_search["awsExternalID"], "aws_external_id");
        assert_eq!(open_search["awsRoleARN"], "aws_role_arn");
        assert_eq!(open_search["awsSTSEndpoint"], "aws_sts_endpoint");
        assert_eq!(open_search["generateID"].as_bool(), Some(true));
        assert_eq!(open_search["Workers"].as_i64(), Some(3));
    }
}
