//! `FluentBitConfig`: a namespaced Fluent Bit configuration that selects
//! the filters, outputs and parsers of a namespace by label.

use serde::{Deserialize, Serialize};

use crate::manifests::common::{
    label_selector_block, namespaced_metadata_block, LabelSelector, NamespacedMetadata,
};
use crate::manifests::Manifest;
use crate::schema::{Attribute, Block, NestedBlock, Schema};

/// Manifest model of a `FluentBitConfig`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct FluentBitConfig {
    #[serde(skip_deserializing)]
    pub api_version: String,
    #[serde(skip_deserializing)]
    pub kind: String,
    pub metadata: NamespacedMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec: Option<FluentBitConfigSpec>,
    #[serde(skip_serializing)]
    pub yaml: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct FluentBitConfigSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_multiline_parser_selector: Option<LabelSelector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_parser_selector: Option<LabelSelector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_selector: Option<LabelSelector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiline_parser_selector: Option<LabelSelector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_selector: Option<LabelSelector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parser_selector: Option<LabelSelector>,
}

impl Manifest for FluentBitConfig {
    const GROUP: &'static str = super::GROUP;
    const VERSION: &'static str = super::VERSION;
    const KIND: &'static str = "FluentBitConfig";

    fn schema() -> Schema {
        Schema::v0()
            .with_description("FluentBitConfig is the Schema for the API")
            .with_attribute(
                "yaml",
                Attribute::computed_string().with_description("The generated manifest in YAML format."),
            )
            .with_block("metadata", namespaced_metadata_block())
            .with_block(
                "spec",
                NestedBlock::single(
                    Block::new()
                        .with_description("NamespacedFluentBitCfgSpec defines the desired state of FluentBit")
                        .with_block(
                            "cluster_multiline_parser_selector",
                            label_selector_block("Select cluster level multiline parser config"),
                        )
                        .with_block(
                            "cluster_parser_selector",
                            label_selector_block("Select cluster level parser config"),
                        )
                        .with_block(
                            "filter_selector",
                            label_selector_block("Select filter plugins"),
                        )
                        .with_block(
                            "multiline_parser_selector",
                            label_selector_block("Select multiline parser plugins"),
                        )
                        .with_block(
                            "output_selector",
                            label_selector_block("Select output plugins"),
                        )
                        .with_block(
                            "parser_selector",
                            label_selector_block("Select parser plugins"),
                        ),
                ),
            )
    }

    fn set_type_meta(&mut self, api_version: String, kind: String) {
        self.api_version = api_version;
        self.kind = kind;
    }
}
