//! Output plugins for log and metrics backends: Datadog, InfluxDB, Loki,
//! OpenTelemetry, Prometheus and Splunk.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::manifests::common::{
    bool_attr, enum_attr, int64_attr, is_empty_list, is_empty_map, networking_block, port_attr,
    required_string_attr, secret_block, string_attr, string_list_attr, string_map_attr, tls_block,
    Networking, Secret, Tls,
};
use crate::schema::{Block, NestedBlock};
use crate::validators::Validator;

/// Datadog output plugin. The CRD uses snake_case keys here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Datadog {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apikey: Option<Secret>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compress: Option<String>,
    #[serde(rename(serialize = "dd_message_key"), skip_serializing_if = "Option::is_none")]
    pub dd_message_key: Option<String>,
    #[serde(rename(serialize = "dd_service"), skip_serializing_if = "Option::is_none")]
    pub dd_service: Option<String>,
    #[serde(rename(serialize = "dd_source"), skip_serializing_if = "Option::is_none")]
    pub dd_source: Option<String>,
    #[serde(rename(serialize = "dd_tags"), skip_serializing_if = "Option::is_none")]
    pub dd_tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(rename(serialize = "include_tag_key"), skip_serializing_if = "Option::is_none")]
    pub include_tag_key: Option<bool>,
    #[serde(rename(serialize = "json_date_key"), skip_serializing_if = "Option::is_none")]
    pub json_date_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy: Option<String>,
    #[serde(rename(serialize = "tag_key"), skip_serializing_if = "Option::is_none")]
    pub tag_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls: Option<bool>,
}

/// InfluxDB output plugin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct InfluxDb {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_tags: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    pub host: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_passwd: Option<Secret>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_token: Option<Secret>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_user: Option<Secret>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub networking: Option<Networking>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence_tag: Option<String>,
    #[serde(default, skip_serializing_if = "is_empty_list")]
    pub tag_keys: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags_list_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags_list_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls: Option<Tls>,
}

/// Grafana Loki output plugin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Loki {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_kubernetes_labels: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bearer_token: Option<Secret>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drop_single_key: Option<String>,
    pub host: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_password: Option<Secret>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_user: Option<Secret>,
    #[serde(default, skip_serializing_if = "is_empty_list")]
    pub label_keys: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_map_path: Option<String>,
    #[serde(default, skip_serializing_if = "is_empty_list")]
    pub labels: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub networking: Option<Networking>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,
    #[serde(default, skip_serializing_if = "is_empty_list")]
    pub remove_keys: Option<Vec<String>>,
    #[serde(rename(serialize = "tenantID"), skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<Secret>,
    #[serde(rename(serialize = "tenantIDKey"), skip_serializing_if = "Option::is_none")]
    pub tenant_id_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls: Option<Tls>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

/// OpenTelemetry output plugin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct OpenTelemetry {
    #[serde(default, skip_serializing_if = "is_empty_map")]
    pub add_label: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "is_empty_map")]
    pub header: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_password: Option<Secret>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_user: Option<Secret>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_response_payload: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logs_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub networking: Option<Networking>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls: Option<Tls>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traces_uri: Option<String>,
}

/// Prometheus exporter output plugin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct PrometheusExporter {
    #[serde(default, skip_serializing_if = "is_empty_map")]
    pub add_labels: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,
}

/// Prometheus remote write output plugin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct PrometheusRemoteWrite {
    #[serde(default, skip_serializing_if = "is_empty_map")]
    pub add_labels: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "is_empty_map")]
    pub headers: Option<BTreeMap<String, String>>,
    pub host: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_passwd: Option<Secret>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_user: Option<Secret>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_response_payload: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub networking: Option<Networking>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls: Option<Tls>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workers: Option<i64>,
}

/// Splunk HTTP Event Collector output plugin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Splunk {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compress: Option<String>,
    #[serde(default, skip_serializing_if = "is_empty_list")]
    pub event_fields: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_index: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_index_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_sourcetype: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_sourcetype_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_buffer_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_debug_bad_request: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_password: Option<Secret>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_user: Option<Secret>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub networking: Option<Networking>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub splunk_send_raw: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub splunk_token: Option<Secret>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls: Option<Tls>,
    #[serde(rename(serialize = "Workers"), skip_serializing_if = "Option::is_none")]
    pub workers: Option<i64>,
}

pub(super) fn datadog_block() -> NestedBlock {
    NestedBlock::single(
        Block::new()
            .with_description("DataDog output plugin configuration.")
            .with_block("apikey", secret_block("Your Datadog API key."))
            .with_attribute(
                "compress",
                enum_attr("Compress the payload in GZIP format. Datadog supports and recommends setting this to gzip.", ["gzip"]),
            )
            .with_attribute(
                "dd_message_key",
                string_attr("By default, the plugin searches for the key 'log' and remap the value to the key 'message'. If the property is set, the plugin will search the property name key."),
            )
            .with_attribute(
                "dd_service",
                string_attr("The human readable name for your service generating the logs."),
            )
            .with_attribute(
                "dd_source",
                string_attr("A human readable name for the underlying technology of your service."),
            )
            .with_attribute(
                "dd_tags",
                string_attr("The tags you want to assign to your logs in Datadog."),
            )
            .with_attribute(
                "host",
                string_attr("Host is the Datadog server where you are sending your logs."),
            )
            .with_attribute(
                "include_tag_key",
                bool_attr("If enabled, a tag is appended to output. The key name is used tag_key property."),
            )
            .with_attribute(
                "json_date_key",
                string_attr("Date key name for output."),
            )
            .with_attribute(
                "provider",
                string_attr("To activate the remapping, specify configuration flag provider with value ecs."),
            )
            .with_attribute(
                "proxy",
                string_attr("Specify an HTTP Proxy."),
            )
            .with_attribute(
                "tag_key",
                string_attr("The key name of tag. If include_tag_key is false, This property is ignored."),
            )
            .with_attribute(
                "tls",
                bool_attr("TLS controls whether to use end-to-end security communications security protocol. Datadog recommends setting this to on."),
            )
    )
}

pub(super) fn influx_db_block() -> NestedBlock {
    NestedBlock::single(
        Block::new()
            .with_description("InfluxDB defines InfluxDB Output configuration.")
            .with_attribute(
                "auto_tags",
                bool_attr("Automatically tag keys where value is string."),
            )
            .with_attribute(
                "bucket",
                string_attr("InfluxDB bucket name where records will be inserted - if specified, database is ignored and v2 of API is used"),
            )
            .with_attribute(
                "database",
                string_attr("InfluxDB database name where records will be inserted."),
            )
            .with_attribute(
                "host",
                required_string_attr("IP address or hostname of the target InfluxDB service."),
            )
            .with_block("http_passwd", secret_block("Password for user defined in HTTP_User"))
            .with_block("http_token", secret_block("Authentication token used with InfluxDB v2 - if specified, both HTTPUser and HTTPPasswd are ignored"))
            .with_block("http_user", secret_block("Optional username for HTTP Basic Authentication"))
            .with_block("networking", networking_block())
            .with_attribute(
                "org",
                string_attr("InfluxDB organization name where the bucket is (v2 only)"),
            )
            .with_attribute(
                "port",
                port_attr("TCP port of the target InfluxDB service."),
            )
            .with_attribute(
                "sequence_tag",
                string_attr("The name of the tag whose value is incremented for the consecutive simultaneous events."),
            )
            .with_attribute(
                "tag_keys",
                string_list_attr("List of keys that needs to be tagged"),
            )
            .with_attribute(
                "tags_list_enabled",
                bool_attr("Dynamically tag keys which are in the string array at Tags_List_Key key."),
            )
            .with_attribute(
                "tags_list_key",
                string_attr("Key of the string array optionally contained within each log record that contains tag keys for that record"),
            )
            .with_block("tls", tls_block())
    )
}

pub(super) fn loki_block() -> NestedBlock {
    NestedBlock::single(
        Block::new()
            .with_description("Loki defines Loki Output configuration.")
            .with_attribute(
                "auto_kubernetes_labels",
                enum_attr("If set to true, it will add all Kubernetes labels to the Stream labels.", ["on", "off"]),
            )
            .with_block("bearer_token", secret_block("Set bearer token authentication token value. Can be used as alterntative to HTTP basic authentication"))
            .with_attribute(
                "drop_single_key",
                enum_attr("If set to true and after extracting labels only a single key remains, the log line sent to Loki will be the value of that key in line_format.", ["on", "off", "raw"]),
            )
            .with_attribute(
                "host",
                required_string_attr("Loki hostname or IP address."),
            )
            .with_block("http_password", secret_block("Password for user defined in HTTP_User Set HTTP basic authentication password"))
            .with_block("http_user", secret_block("Set HTTP basic authentication user name."))
            .with_attribute(
                "label_keys",
                string_list_attr("Optional list of record keys that will be placed as stream labels. This configuration property is for records key only."),
            )
            .with_attribute(
                "label_map_path",
                string_attr("Specify the label map file path. The file defines how to extract labels from each record."),
            )
            .with_attribute(
                "labels",
                string_list_attr("Stream labels for API request. It can be multiple comma separated of strings specifying  key=value pairs. In addition to fixed parameters, it also allows to add custom record keys (similar to label_keys property)."),
            )
            .with_attribute(
                "line_format",
                enum_attr("Format to use when flattening the record to a log line. Valid values are json or key_value. If set to json, the log line sent to Loki will be the Fluent Bit record dumped as JSON. If set to key_value, the log line will be each item in the record concatenated together (separated by a single space) in the format.", ["json", "key_value"]),
            )
            .with_block("networking", networking_block())
            .with_attribute(
                "port",
                port_attr("Loki TCP port"),
            )
            .with_attribute(
                "remove_keys",
                string_list_attr("Optional list of keys to remove."),
            )
            .with_block("tenant_id", secret_block("Tenant ID used by default to push logs to Loki. If omitted or empty it assumes Loki is running in single-tenant mode and no X-Scope-OrgID header is sent."))
            .with_attribute(
                "tenant_id_key",
                string_attr("Specify the name of the key from the original record that contains the Tenant ID. The value of the key is set as X-Scope-OrgID of HTTP header. It is useful to set Tenant ID dynamically."),
            )
            .with_block("tls", tls_block())
            .with_attribute(
                "uri",
                string_attr("Specify a custom HTTP URI. It must start with forward slash."),
            )
    )
}

pub(super) fn open_telemetry_block() -> NestedBlock {
    NestedBlock::single(
        Block::new()
            .with_description("The OpenTelemetry plugin allows you to take logs, metrics, and traces from Fluent Bit and submit them to an OpenTelemetry HTTP endpoint.")
            .with_attribute(
                "add_label",
                string_map_attr("This allows you to add custom labels to all metrics exposed through the OpenTelemetry exporter. You may have multiple of these fields."),
            )
            .with_attribute(
                "header",
                string_map_attr("Add a HTTP header key/value pair. Multiple headers can be set."),
            )
            .with_attribute(
                "host",
                string_attr("IP address or hostname of the target HTTP Server, default `127.0.0.1`"),
            )
            .with_block("http_password", secret_block("Password for user defined in HTTP_User"))
            .with_block("http_user", secret_block("Optional username credential for access"))
            .with_attribute(
                "log_response_payload",
                bool_attr("Log the response payload within the Fluent Bit log."),
            )
            .with_attribute(
                "logs_uri",
                string_attr("Specify an optional HTTP URI for the target web server listening for logs, e.g: /v1/logs"),
            )
            .with_attribute(
                "metrics_uri",
                string_attr("Specify an optional HTTP URI for the target web server listening for metrics, e.g: /v1/metrics"),
            )
            .with_block("networking", networking_block())
            .with_attribute(
                "port",
                port_attr("TCP port of the target OpenSearch instance, default `80`"),
            )
            .with_attribute(
                "proxy",
                string_attr("Specify an HTTP Proxy. The expected format of this value is http://HOST:PORT. Note that HTTPS is not currently supported. It is recommended not to set this and to configure the HTTP proxy environment variables instead as they support both HTTP and HTTPS."),
            )
            .with_block("tls", tls_block())
            .with_attribute(
                "traces_uri",
                string_attr("Specify an optional HTTP URI for the target web server listening for traces, e.g: /v1/traces"),
            )
    )
}

pub(super) fn prometheus_exporter_block() -> NestedBlock {
    NestedBlock::single(
        Block::new()
            .with_description("PrometheusExporter An output plugin to expose Prometheus Metrics.")
            .with_attribute(
                "add_labels",
                string_map_attr("This allows you to add custom labels to all metrics exposed through the prometheus exporter. You may have multiple of these fields"),
            )
            .with_attribute(
                "host",
                string_attr("IP address or hostname of the target HTTP Server, default: 0.0.0.0"),
            )
            .with_attribute(
                "port",
                port_attr("This is the port Fluent Bit will bind to when hosting prometheus metrics."),
            )
    )
}

pub(super) fn prometheus_remote_write_block() -> NestedBlock {
    NestedBlock::single(
        Block::new()
            .with_description("An output plugin to submit Prometheus Metrics using the remote write protocol")
            .with_attribute(
                "add_labels",
                string_map_attr("This allows you to add custom labels to all metrics exposed through the prometheus exporter. You may have multiple of these fields"),
            )
            .with_attribute(
                "headers",
                string_map_attr("Add a HTTP header key/value pair. Multiple headers can be set."),
            )
            .with_attribute(
                "host",
                required_string_attr("IP address or hostname of the target HTTP Server, default: 127.0.0.1"),
            )
            .with_block("http_passwd", secret_block("Password for user defined in HTTP_User"))
            .with_block("http_user", secret_block("Optional username credential for access"))
            .with_attribute(
                "log_response_payload",
                bool_attr("Log the response payload within the Fluent Bit log,default: false"),
            )
            .with_block("networking", networking_block())
            .with_attribute(
                "port",
                port_attr("TCP port of the target HTTP Server, default:80"),
            )
            .with_attribute(
                "proxy",
                string_attr("Specify an HTTP Proxy. The expected format of this value is http://HOST:PORT."),
            )
            .with_block("tls", tls_block())
            .with_attribute(
                "uri",
                string_attr("Specify an optional HTTP URI for the target web server, e.g: /something ,default: /"),
            )
            .with_attribute(
                "workers",
                int64_attr("Enables dedicated thread(s) for this output. Default value (2) is set since version 1.8.13. For previous versions is 0,default : 2")
                    .with_validator(Validator::at_least(0)),
            )
    )
}

pub(super) fn splunk_block() -> NestedBlock {
    NestedBlock::single(
        Block::new()
            .with_description("Splunk defines Splunk Output Configuration")
            .with_attribute(
                "channel",
                string_attr("Specify X-Splunk-Request-Channel Header for the HTTP Event Collector interface."),
            )
            .with_attribute(
                "compress",
                enum_attr("Set payload compression mechanism. The only available option is gzip.", ["gzip"]),
            )
            .with_attribute(
                "event_fields",
                string_list_attr("Set event fields for the record. This option is an array and the format is \"key_name record_accessor_pattern\"."),
            )
            .with_attribute(
                "event_host",
                string_attr("Specify the key name that contains the host value. This option allows a record accessors pattern."),
            )
            .with_attribute(
                "event_index",
                string_attr("The name of the index by which the event data is to be indexed."),
            )
            .with_attribute(
                "event_index_key",
                string_attr("Set a record key that will populate the index field. If the key is found, it will have precedence over the value set in event_index."),
            )
            .with_attribute(
                "event_key",
                string_attr("Specify the key name that will be used to send a single value as part of the record."),
            )
            .with_attribute(
                "event_source",
                string_attr("Set the source value to assign to the event data."),
            )
            .with_attribute(
                "event_sourcetype",
                string_attr("Set the sourcetype value to assign to the event data."),
            )
            .with_attribute(
                "event_sourcetype_key",
                string_attr("Set a record key that will populate 'sourcetype'. If the key is found, it will have precedence over the value set in event_sourcetype."),
            )
            .with_attribute(
                "host",
                string_attr("IP address or hostname of the target Splunk service."),
            )
            .with_attribute(
                "http_buffer_size",
                string_attr("Buffer size used to receive Splunk HTTP responses: Default `2M`")
                    .with_validator(Validator::regex_matches(r"^\d+(k|K|KB|kb|m|M|MB|mb|g|G|GB|gb)?$", "must be a size such as 512k, 5MB or 1G")),
            )
            .with_attribute(
                "http_debug_bad_request",
                bool_attr("If the HTTP server response code is 400 (bad request) and this flag is enabled, it will print the full HTTP request and response to the stdout interface. This feature is available for debugging purposes."),
            )
            .with_block("http_password", secret_block("Password for user defined in HTTP_User"))
            .with_block("http_user", secret_block("Optional username credential for access"))
            .with_block("networking", networking_block())
            .with_attribute(
                "port",
                port_attr("TCP port of the target Splunk service."),
            )
            .with_attribute(
                "splunk_send_raw",
                bool_attr("When enabled, the record keys and values are set in the top level of the map instead of under the event key. Refer to the Sending Raw Events section from the docs more details to make this option work properly."),
            )
            .with_block("splunk_token", secret_block("Specify the Authentication Token for the HTTP Event Collector interface."))
            .with_block("tls", tls_block())
            .with_attribute(
                "workers",
                int64_attr("Enables dedicated thread(s) for this output. Default value `2` is set since version 1.8.13. For previous versions is 0.")
                    .with_validator(Validator::at_least(0)),
            )
    )
}

#[cfg(test)]
mod tests {
    use super::super::{render_plugin, sorted_keys};
    use serde_json::json;

    #[test]
    fn test_datadog_renders_every_field() {
        let datadog = render_plugin(
            "datadog",
            json!({
                "apikey": {"value_from": {"secret_key_ref": {"key": "apikey", "name": "credentials"}}},
                "compress": "gzip",
                "dd_message_key": "dd_message_key",
                "dd_service": "dd_service",
                "dd_source": "dd_source",
                "dd_tags": "dd_tags",
                "host": "host",
                "include_tag_key": true,
                "json_date_key": "json_date_key",
                "provider": "provider",
                "proxy": "proxy",
                "tag_key": "tag_key",
                "tls": true,
            }),
        );

        assert_eq!(
            sorted_keys(&datadog),
            [
                "apikey",
                "compress",
                "dd_message_key",
                "dd_service",
                "dd_source",
                "dd_tags",
                "host",
                "include_tag_key",
                "json_date_key",
                "provider",
                "proxy",
                "tag_key",
                "tls",
            ]
        );
        assert_eq!(datadog["dd_message_key"], "dd_message_key");
        assert_eq!(datadog["dd_service"], "dd_service");
        assert_eq!(datadog["dd_source"], "dd_source");
        assert_eq!(datadog["dd_tags"], "dd_tags");
        assert_eq!(datadog["include_tag_key"].as_bool(), Some(true));
        assert_eq!(datadog["json_date_key"], "json_date_key");
        assert_eq!(datadog["tag_key"], "tag_key");
    }

    #[test]
    fn test_influx_db_renders_every_field() {
        let influx_db = render_plugin(
            "influx_db",
            json!({
                "auto_tags": true,
                "bucket": "bucket",
                "database": "database",
                "host": "host",
                "http_passwd": {"value_from": {"secret_key_ref": {"key": "http_passwd", "name": "credentials"}}},
                "http_token": {"value_from": {"secret_key_ref": {"key": "http_token", "name": "credentials"}}},
                "http_user": {"value_from": {"secret_key_ref": {"key": "http_user", "name": "credentials"}}},
                "networking": {"keepalive": "on"},
                "org": "org",
                "port": 9200,
                "sequence_tag": "sequence_tag",
                "tag_keys": ["tag_keys"],
                "tags_list_enabled": true,
                "tags_list_key": "tags_list_key",
                "tls": {"verify": true},
            }),
        );

        assert_eq!(
            sorted_keys(&influx_db),
            [
                "autoTags",
                "bucket",
                "database",
                "host",
                "httpPasswd",
                "httpToken",
                "httpUser",
                "networking",
                "org",
                "port",
                "sequenceTag",
                "tagKeys",
                "tagsListEnabled",
                "tagsListKey",
                "tls",
            ]
        );
    }

    #[test]
    fn test_loki_renders_every_field() {
        let loki = render_plugin(
            "loki",
            json!({
                "auto_kubernetes_labels": "on",
                "bearer_token": {"value_from": {"secret_key_ref": {"key": "bearer_token", "name": "credentials"}}},
                "drop_single_key": "on",
                "host": "host",
                "http_password": {"value_from": {"secret_key_ref": {"key": "http_password", "name": "credentials"}}},
                "http_user": {"value_from": {"secret_key_ref": {"key": "http_user", "name": "credentials"}}},
                "label_keys": ["label_keys"],
                "label_map_path": "label_map_path",
                "labels": ["labels"],
                "line_format": "json",
                "networking": {"keepalive": "on"},
                "port": 9200,
                "remove_keys": ["remove_keys"],
                "tenant_id": {"value_from": {"secret_key_ref": {"key": "tenant_id", "name": "credentials"}}},
                "tenant_id_key": "tenant_id_key",
                "tls": {"verify": true},
                "uri": "uri",
            }),
        );

        assert_eq!(
            sorted_keys(&loki),
            [
                "autoKubernetesLabels",
                "bearerToken",
                "dropSingleKey",
                "host",
                "httpPassword",
                "httpUser",
                "labelKeys",
                "labelMapPath",
                "labels",
                "lineFormat",
                "networking",
                "port",
                "removeKeys",
                "tenantID",
                "tenantIDKey",
                "tls",
                "uri",
            ]
        );
        assert_eq!(loki["tenantID"]["valueFrom"]["secretKeyRef"]["key"], "tenant_id");
        assert_eq!(loki["tenantIDKey"], "tenant_id_key");
    }

    #[test]
    fn test_open_telemetry_renders_every_field() {
        let open_telemetry = render_plugin(
            "open_telemetry",
            json!({
                "add_label": {"add_label": "value"},
                "header": {"header": "value"},
                "host": "host",
                "http_password": {"value_from": {"secret_key_ref": {"key": "http_password", "name": "credentials"}}},
                "http_user": {"value_from": {"secret_key_ref": {"key": "http_user", "name": "credentials"}}},
                "log_response_payload": true,
                "logs_uri": "logs_uri",
                "metrics_uri": "metrics_uri",
                "networking": {"keepalive": "on"},
                "port": 9200,
                "proxy": "proxy",
                "tls": {"verify": true},
                "traces_uri": "traces_uri",
            }),
        );

        assert_eq!(
            sorted_keys(&open_telemetry),
            [
                "addLabel",
                "header",
                "host",
                "httpPassword",
                "httpUser",
                "logResponsePayload",
                "logsUri",
                "metricsUri",
                "networking",
                "port",
                "proxy",
                "tls",
                "tracesUri",
            ]
        );
    }

    #[test]
    fn test_prometheus_exporter_renders_every_field() {
        let prometheus_exporter = render_plugin(
            "prometheus_exporter",
            json!({
                "add_labels": {"add_labels": "value"},
                "host": "host",
                "port": 9200,
            }),
        );

        assert_eq!(
            sorted_keys(&prometheus_exporter),
            ["addLabels", "host", "port"]
        );
    }

    #[test]
    fn test_prometheus_remote_write_renders_every_field() {
        let prometheus_remote_write = render_plugin(
            "prometheus_remote_write",
            json!({
                "add_labels": {"add_labels": "value"},
                "headers": {"headers": "value"},
                "host": "host",
                "http_passwd": {"value_from": {"secret_key_ref": {"key": "http_passwd", "name": "credentials"}}},
                "http_user": {"value_from": {"secret_key_ref": {"key": "http_user", "name": "credentials"}}},
                "log_response_payload": true,
                "networking": {"keepalive": "on"},
                "port": 9200,
                "proxy": "proxy",
                "tls": {"verify": true},
                "uri": "uri",
                "workers": 2,
            }),
        );

        assert_eq!(
            sorted_keys(&prometheus_remote_write),
            [
                "addLabels",
                "headers",
                "host",
                "httpPasswd",
                "httpUser",
                "logResponsePayload",
                "networking",
                "port",
                "proxy",
                "tls",
                "uri",
                "workers",
            ]
        );
    }

    #[test]
    fn test_splunk_renders_every_field() {
        let splunk = render_plugin(
            "splunk",
            json!({
                "channel": "channel",
                "compress": "gzip",
                "event_fields": ["event_fields"],
                "event_host": "event_host",
                "event_index": "event_index",
                "event_index_key": "event_index_key",
                "event_key": "event_key",
                "event_source": "event_source",
                "event_sourcetype": "event_sourcetype",
                "event_sourcetype_key": "event_sourcetype_key",
                "host": "host",
                "http_buffer_size": "5MB",
                "http_debug_bad_request": true,
                "http_password": {"value_from": {"secret_key_ref": {"key": "http_password", "name": "credentials"}}},
                "http_user": {"value_from": {"secret_key_ref": {"key": "http_user", "name": "credentials"}}},
                "networking": {"keepalive": "on"},
                "port": 9200,
                "splunk_send_raw": true,
                "splunk_token": {"value_from": {"secret_key_ref": {"key": "splunk_token", "name": "credentials"}}},
                "tls": {"verify": true},
                "workers": 2,
            }),
        );

        assert_eq!(
            sorted_keys(&splunk),
            [
                "Workers",
                "channel",
                "compress",
                "eventFields",
                "eventHost",
                "eventIndex",
                "eventIndexKey",
                "eventKey",
                "eventSource",
                "eventSourcetype",
                "eventSourcetypeKey",
                "host",
                "httpBufferSize",
                "httpDebugBadRequest",
                "httpPassword",
                "httpUser",
                "networking",
                "port",
                "splunkSendRaw",
                "splunkToken",
                "tls",
            ]
        );
        assert_eq!(splunk["Workers"].as_i64(), Some(2));
    }
}
