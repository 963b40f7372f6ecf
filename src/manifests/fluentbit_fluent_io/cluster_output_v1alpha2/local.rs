//! Output plugins that stay on the node (file, stdout, null) and the
//! pass-through custom plugin.

use serde::{Deserialize, Serialize};

use crate::manifests::common::{enum_attr, string_attr};
use crate::schema::{Block, NestedBlock};

/// A raw plugin configuration passed through as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct CustomPlugin {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<String>,
}

/// File output plugin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct File {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_delimiter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

/// Null output plugin. It has no settings and discards every record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Null {}

/// Standard output plugin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Stdout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_date_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_date_key: Option<String>,
}

pub(super) fn custom_plugin_block() -> NestedBlock {
    NestedBlock::single(
        Block::new()
            .with_description("CustomPlugin defines Custom Output configuration.")
            .with_attribute(
                "config",
                string_attr("Config holds any unsupported plugins classic configurations, if ConfigFileFormat is set to yaml, this filed will be ignored"),
            )
    )
}

pub(super) fn file_block() -> NestedBlock {
    NestedBlock::single(
        Block::new()
            .with_description("File defines File Output configuration.")
            .with_attribute(
                "delimiter",
                string_attr("The character to separate each pair. Applicable only if format is csv or ltsv."),
            )
            .with_attribute(
                "file",
                string_attr("Set file name to store the records. If not set, the file name will be the tag associated with the records."),
            )
            .with_attribute(
                "format",
                enum_attr("The format of the file content. See also Format section. Default: out_file.", ["out_file", "plain", "csv", "ltsv", "template"]),
            )
            .with_attribute(
                "label_delimiter",
                string_attr("The character to separate each pair. Applicable only if format is ltsv."),
            )
            .with_attribute(
                "path",
                string_attr("Absolute directory path to store files. If not set, Fluent Bit will write the files on it's own positioned directory."),
            )
            .with_attribute(
                "template",
                string_attr("The format string. Applicable only if format is template."),
            )
    )
}

pub(super) fn null_block() -> NestedBlock {
    NestedBlock::single(
        Block::new()
            .with_description("Null defines Null Output configuration.")
    )
}

pub(super) fn stdout_block() -> NestedBlock {
    NestedBlock::single(
        Block::new()
            .with_description("Stdout defines Stdout Output configuration.")
            .with_attribute(
                "format",
                enum_attr("Specify the data format to be printed. Supported formats are msgpack json, json_lines and json_stream.", ["msgpack", "json", "json_lines", "json_stream"]),
            )
            .with_attribute(
                "json_date_format",
                enum_attr("Specify the format of the date. Supported formats are double, iso8601 (eg: 2018-05-30T09:39:52.000681Z) and epoch.", ["double", "iso8601", "epoch"]),
            )
            .with_attribute(
                "json_date_key",
                string_attr("Specify the name of the date field in output."),
            )
    )
}

#[cfg(test)]
mod tests {
    use super::super::{render_plugin, sorted_keys};
    use serde_json::json;

    #[test]
    fn test_custom_plugin_renders_every_field() {
        let custom_plugin = render_plugin(
            "custom_plugin",
            json!({
                "config": "config",
            }),
        );

        assert_eq!(
            sorted_keys(&custom_plugin),
            ["config"]
        );
    }

    #[test]
    fn test_file_renders_every_field() {
        let file = render_plugin(
            "file",
            json!({
                "delimiter": "delimiter",
                "file": "file",
                "format": "out_file",
                "label_delimiter": "label_delimiter",
                "path": "path",
                "template": "template",
            }),
        );

        assert_eq!(
            sorted_keys(&file),
            ["delimiter", "file", "format", "labelDelimiter", "path", "template"]
        );
    }

    #[test]
    fn test_stdout_renders_every_field() {
        let stdout = render_plugin(
            "stdout",
            json!({
                "format": "msgpack",
                "json_date_format": "double",
                "json_date_key": "json_date_key",
            }),
        );

        assert_eq!(
            sorted_keys(&stdout),
            ["format", "jsonDateFormat", "jsonDateKey"]
        );
    }
}
