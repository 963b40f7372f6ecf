//! `ClusterFluentBitConfig`: the cluster-wide Fluent Bit configuration,
//! holding the `[SERVICE]` section and the label selectors that pick the
//! cluster inputs, filters, outputs and parsers.

use serde::{Deserialize, Serialize};

use crate::manifests::common::{
    bool_attr, cluster_metadata_block, enum_attr, float64_attr, int64_attr, is_empty_list,
    label_selector_block, on_off_attr, port_attr, string_attr, string_list_attr, ClusterMetadata,
    LabelSelector,
};
use crate::manifests::Manifest;
use crate::schema::{Attribute, Block, NestedBlock, Schema};
use crate::validators::Validator;

/// Manifest model of a `ClusterFluentBitConfig`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ClusterFluentBitConfig {
    #[serde(skip_deserializing)]
    pub api_version: String,
    #[serde(skip_deserializing)]
    pub kind: String,
    pub metadata: ClusterMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec: Option<ClusterFluentBitConfigSpec>,
    #[serde(skip_serializing)]
    pub yaml: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ClusterFluentBitConfigSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_selector: Option<LabelSelector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_selector: Option<LabelSelector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiline_parser_selector: Option<LabelSelector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_selector: Option<LabelSelector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parser_selector: Option<LabelSelector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<Service>,
}

/// The `[SERVICE]` section of the Fluent Bit configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Service {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daemon: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emitter_mem_buf_limit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emitter_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emitter_storage_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flush_seconds: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grace_seconds: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hc_errors_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hc_period: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hc_retry_failure_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hot_reload: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_listen: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_port: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_server: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parsers_file: Option<String>,
    #[serde(default, skip_serializing_if = "is_empty_list")]
    pub parsers_files: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<Storage>,
}

/// Buffering and storage settings of the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Storage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backlog_mem_limit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_irrecoverable_chunks: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_chunks_up: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync: Option<String>,
}

fn storage_block() -> NestedBlock {
    NestedBlock::single(
        Block::new()
            .with_description("Configure a global environment for the storage layer in Service. It is recommended to configure the volume and volumeMount separately for this storage. The hostPath type should be used for that Volume in Fluentbit daemon set.")
            .with_attribute("backlog_mem_limit", string_attr("This option configure a hint of maximum value of memory to use when processing these records"))
            .with_attribute("checksum", on_off_attr("Enable the data integrity check when writing and reading data from the filesystem"))
            .with_attribute("delete_irrecoverable_chunks", on_off_attr("When enabled, irrecoverable chunks will be deleted during runtime, and any other irrecoverable chunk located in the configured storage path directory will be deleted when Fluent-Bit starts."))
            .with_attribute("max_chunks_up", int64_attr("If the input plugin has enabled filesystem storage type, this property sets the maximum number of Chunks that can be up in memory"))
            .with_attribute("metrics", on_off_attr("If http_server option has been enabled in the main Service configuration section, this option registers a new endpoint where internal metrics of the storage layer can be consumed"))
            .with_attribute("path", string_attr("Select an optional location in the file system to store streams and chunks of data/"))
            .with_attribute("sync", enum_attr("Configure the synchronization mode used to store the data into the file system", ["normal", "full"])),
    )
}

fn service_block() -> NestedBlock {
    NestedBlock::single(
        Block::new()
            .with_description("Service defines the global behaviour of the Fluent-Bit engine.")
            .with_attribute("daemon", bool_attr("If true go to background on start"))
            .with_attribute("emitter_mem_buf_limit", string_attr("Per-namespace re-emitter configuration"))
            .with_attribute("emitter_name", string_attr("Per-namespace re-emitter configuration"))
            .with_attribute("emitter_storage_type", string_attr("Per-namespace re-emitter configuration"))
            .with_attribute("flush_seconds", float64_attr("Interval to flush output"))
            .with_attribute("grace_seconds", int64_attr("Wait time on exit"))
            .with_attribute("hc_errors_count", int64_attr("the error count to meet the unhealthy requirement, this is a sum for all output plugins in a defined HC_Period"))
            .with_attribute("hc_period", int64_attr("The time period by second to count the error and retry failure data point"))
            .with_attribute("hc_retry_failure_count", int64_attr("the retry failure count to meet the unhealthy requirement, this is a sum for all output plugins in a defined HC_Period"))
            .with_attribute("health_check", bool_attr("enable Health check feature at http://127.0.0.1:2020/api/v1/health Note: Enabling this will not automatically configure kubernetes to use fluentbit's healthcheck endpoint"))
            .with_attribute("hot_reload", bool_attr("If true enable reloading via HTTP"))
            .with_attribute("http_listen", string_attr("Address to listen"))
            .with_attribute("http_port", port_attr("Port to listen"))
            .with_attribute("http_server", bool_attr("If true enable statistics HTTP server"))
            .with_attribute("log_file", string_attr("File to log diagnostic output"))
            .with_attribute(
                "log_level",
                enum_attr("Diagnostic level (error/warning/info/debug/trace)", ["off", "error", "warning", "info", "debug", "trace"]),
            )
            .with_attribute("parsers_file", string_attr("Optional 'parsers' config file (can be multiple)"))
            .with_attribute("parsers_files", string_list_attr("backward compatible"))
            .with_block("storage", storage_block()),
    )
}

impl Manifest for ClusterFluentBitConfig {
    const GROUP: &'static str = super::GROUP;
    const VERSION: &'static str = super::VERSION;
    const KIND: &'static str = "ClusterFluentBitConfig";

    fn schema() -> Schema {
        Schema::v0()
            .with_description("ClusterFluentBitConfig is the Schema for the cluster-level fluentbitconfigs API")
            .with_attribute(
                "yaml",
                Attribute::computed_string().with_description("The generated manifest in YAML format."),
            )
            .with_block("metadata", cluster_metadata_block())
            .with_block(
                "spec",
                NestedBlock::single(
                    Block::new()
                        .with_description("FluentBitConfigSpec defines the desired state of ClusterFluentBitConfig")
                        .with_block("filter_selector", label_selector_block("Select filter plugins"))
                        .with_block("input_selector", label_selector_block("Select input plugins"))
                        .with_block(
                            "multiline_parser_selector",
                            label_selector_block("Select multiline parser plugins"),
                        )
                        .with_attribute(
                            "namespace",
                            string_attr("If namespace is defined, then the configmap and secret for fluent-bit is in this namespace. If it is not defined, it is in the namespace of the fluentd-operator")
                                .with_validator(Validator::Namespace),
                        )
                        .with_block("output_selector", label_selector_block("Select output plugins"))
                        .with_block("parser_selector", label_selector_block("Select parser plugins"))
                        .with_block("service", service_block()),
                ),
            )
    }

    fn set_type_meta(&mut self, api_version: String, kind: String) {
        self.api_version = api_version;
        self.kind = kind;
    }
}
