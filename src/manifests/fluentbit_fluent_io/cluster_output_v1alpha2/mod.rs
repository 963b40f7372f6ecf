//! `ClusterOutput`: a cluster-wide Fluent Bit output. Its `spec` routes
//! matching records to exactly the plugins configured in it.

mod aws;
mod forwarding;
mod local;
mod observability;
mod search;

use serde::{Deserialize, Serialize};

pub use aws::{CloudWatch, Firehose, Kinesis, S3};
pub use forwarding::{Forward, Gelf, Http, Kafka, Syslog, Tcp};
pub use local::{CustomPlugin, File, Null, Stdout};
pub use observability::{
    Datadog, InfluxDb, Loki, OpenTelemetry, PrometheusExporter, PrometheusRemoteWrite, Splunk,
};
pub use search::{Elasticsearch, OpenSearch};

use crate::manifests::common::{cluster_metadata_block, enum_attr, string_attr, ClusterMetadata};
use crate::manifests::Manifest;
use crate::schema::{Attribute, Block, NestedBlock, Schema};

/// Manifest model of a `ClusterOutput`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ClusterOutput {
    #[serde(skip_deserializing)]
    pub api_version: String,
    #[serde(skip_deserializing)]
    pub kind: String,
    pub metadata: ClusterMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec: Option<ClusterOutputSpec>,
    #[serde(skip_serializing)]
    pub yaml: Option<String>,
}

/// OutputSpec defines the desired state of ClusterOutput.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ClusterOutputSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_watch: Option<CloudWatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_plugin: Option<CustomPlugin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datadog: Option<Datadog>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub es: Option<Elasticsearch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<File>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firehose: Option<Firehose>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forward: Option<Forward>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gelf: Option<Gelf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http: Option<Http>,
    #[serde(rename(serialize = "influxDB"), skip_serializing_if = "Option::is_none")]
    pub influx_db: Option<InfluxDb>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kafka: Option<Kafka>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kinesis: Option<Kinesis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loki: Option<Loki>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#match: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_regex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub null: Option<Null>,
    #[serde(rename(serialize = "opensearch"), skip_serializing_if = "Option::is_none")]
    pub open_search: Option<OpenSearch>,
    #[serde(rename(serialize = "opentelemetry"), skip_serializing_if = "Option::is_none")]
    pub open_telemetry: Option<OpenTelemetry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prometheus_exporter: Option<PrometheusExporter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prometheus_remote_write: Option<PrometheusRemoteWrite>,
    #[serde(rename(serialize = "retry_limit"), skip_serializing_if = "Option::is_none")]
    pub retry_limit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3: Option<S3>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub splunk: Option<Splunk>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stdout: Option<Stdout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub syslog: Option<Syslog>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tcp: Option<Tcp>,
}

fn spec_block() -> NestedBlock {
    NestedBlock::single(
        Block::new()
            .with_description("OutputSpec defines the desired state of ClusterOutput")
            .with_attribute("alias", string_attr("A user friendly alias name for this output plugin. Used in metrics for distinction of each configured output."))
            .with_block("cloud_watch", aws::cloud_watch_block())
            .with_block("custom_plugin", local::custom_plugin_block())
            .with_block("datadog", observability::datadog_block())
            .with_block("es", search::elasticsearch_block())
            .with_block("file", local::file_block())
            .with_block("firehose", aws::firehose_block())
            .with_block("forward", forwarding::forward_block())
            .with_block("gelf", forwarding::gelf_block())
            .with_block("http", forwarding::http_block())
            .with_block("influx_db", observability::influx_db_block())
            .with_block("kafka", forwarding::kafka_block())
            .with_block("kinesis", aws::kinesis_block())
            .with_attribute(
                "log_level",
                enum_attr(
                    "Set the plugin's logging verbosity level. Allowed values are: off, error, warn, info, debug and trace, Defaults to the SERVICE section's Log_Level",
                    ["off", "error", "warning", "info", "debug", "trace"],
                ),
            )
            .with_block("loki", observability::loki_block())
            .with_attribute("match", string_attr("A pattern to match against the tags of incoming records. It's case sensitive and support the star (*) character as a wildcard."))
            .with_attribute("match_regex", string_attr("A regular expression to match against the tags of incoming records. Use this option if you want to use the full regex syntax."))
            .with_block("null", local::null_block())
            .with_block("open_search", search::open_search_block())
            .with_block("open_telemetry", observability::open_telemetry_block())
            .with_block("prometheus_exporter", observability::prometheus_exporter_block())
            .with_block("prometheus_remote_write", observability::prometheus_remote_write_block())
            .with_attribute("retry_limit", string_attr("RetryLimit represents configuration for the scheduler which can be set independently on each output section. This option allows to disable retries or impose a limit to try N times and then discard the data after reaching that limit."))
            .with_block("s3", aws::s3_block())
            .with_block("splunk", observability::splunk_block())
            .with_block("stdout", local::stdout_block())
            .with_block("syslog", forwarding::syslog_block())
            .with_block("tcp", forwarding::tcp_block()),
    )
}

impl Manifest for ClusterOutput {
    const GROUP: &'static str = super::GROUP;
    const VERSION: &'static str = super::VERSION;
    const KIND: &'static str = "ClusterOutput";

    fn schema() -> Schema {
        Schema::v0()
            .with_description("ClusterOutput is the Schema for the cluster-level outputs API")
            .with_attribute(
                "yaml",
                Attribute::computed_string().with_description("The generated manifest in YAML format."),
            )
            .with_block("metadata", cluster_metadata_block())
            .with_block("spec", spec_block())
    }

    fn set_type_meta(&mut self, api_version: String, kind: String) {
        self.api_version = api_version;
        self.kind = kind;
    }
}

/// Validate and render a `ClusterOutput` whose spec holds only `plugin`,
/// returning that plugin's entry of the manifest.
#[cfg(test)]
fn render_plugin(plugin: &str, settings: serde_json::Value) -> serde_yaml::Value {
    use crate::manifests::{render, YAML_ATTRIBUTE};
    use crate::validation::validate;

    let mut spec = serde_json::Map::new();
    spec.insert(plugin.to_string(), settings);
    let config = serde_json::json!({"metadata": {"name": "my-output"}, "spec": spec});

    let diagnostics = validate(&ClusterOutput::schema(), &config);
    assert!(diagnostics.is_empty(), "{plugin}: {diagnostics:?}");

    let state = render::<ClusterOutput>(config).unwrap();
    let manifest: serde_yaml::Value =
        serde_yaml::from_str(state[YAML_ATTRIBUTE].as_str().unwrap()).unwrap();
    let spec = manifest["spec"].as_mapping().unwrap();
    assert_eq!(spec.len(), 1);
    spec.values().next().unwrap().clone()
}

#[cfg(test)]
fn sorted_keys(value: &serde_yaml::Value) -> Vec<String> {
    let mut keys: Vec<String> = value
        .as_mapping()
        .unwrap()
        .keys()
        .filter_map(|key| key.as_str().map(str::to_string))
        .collect();
    keys.sort();
    keys
}
