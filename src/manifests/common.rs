//! Shapes shared by every Fluent Bit manifest: object metadata, secret
//! references, TLS and networking settings, and label selectors.
//!
//! Each model field deserializes from its snake_case configuration key and
//! serializes under the CRD's JSON key.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::schema::{Attribute, Block, NestedBlock};
use crate::validators::Validator;

/// Returns true for an absent or empty map.
pub(crate) fn is_empty_map(map: &Option<BTreeMap<String, String>>) -> bool {
    map.as_ref().is_none_or(BTreeMap::is_empty)
}

/// Returns true for an absent or empty list.
pub(crate) fn is_empty_list<T>(list: &Option<Vec<T>>) -> bool {
    list.as_ref().is_none_or(Vec::is_empty)
}

// Attribute shorthands used by the generated-style schema tables.

pub(crate) fn string_attr(description: &str) -> Attribute {
    Attribute::optional_string().with_description(description)
}

pub(crate) fn required_string_attr(description: &str) -> Attribute {
    Attribute::required_string().with_description(description)
}

pub(crate) fn int64_attr(description: &str) -> Attribute {
    Attribute::optional_int64().with_description(description)
}

pub(crate) fn float64_attr(description: &str) -> Attribute {
    Attribute::optional_float64().with_description(description)
}

pub(crate) fn bool_attr(description: &str) -> Attribute {
    Attribute::optional_bool().with_description(description)
}

pub(crate) fn string_list_attr(description: &str) -> Attribute {
    Attribute::optional_string_list().with_description(description)
}

pub(crate) fn string_map_attr(description: &str) -> Attribute {
    Attribute::optional_string_map().with_description(description)
}

pub(crate) fn port_attr(description: &str) -> Attribute {
    int64_attr(description).with_validator(Validator::port())
}

pub(crate) fn enum_attr<const N: usize>(description: &str, values: [&str; N]) -> Attribute {
    string_attr(description).with_validator(Validator::one_of(values))
}

pub(crate) fn on_off_attr(description: &str) -> Attribute {
    enum_attr(description, ["on", "off"])
}

/// `metadata` of a cluster-scoped object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClusterMetadata {
    pub name: String,
    #[serde(default, skip_serializing_if = "is_empty_map")]
    pub labels: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "is_empty_map")]
    pub annotations: Option<BTreeMap<String, String>>,
}

/// `metadata` of a namespaced object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NamespacedMetadata {
    pub name: String,
    pub namespace: String,
    #[serde(default, skip_serializing_if = "is_empty_map")]
    pub labels: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "is_empty_map")]
    pub annotations: Option<BTreeMap<String, String>>,
}

fn name_attr() -> Attribute {
    required_string_attr(
        "Unique identifier for this object within its scope. It must be a valid DNS subdomain.",
    )
    .with_validator(Validator::Name)
}

fn labels_attr() -> Attribute {
    string_map_attr(
        "Map of string keys and values that can be used to organize and categorize objects.",
    )
    .with_validator(Validator::Labels)
}

fn annotations_attr() -> Attribute {
    string_map_attr(
        "Unstructured key value map stored with a resource that may be set by external tools.",
    )
    .with_validator(Validator::Annotations)
}

/// Schema of [`ClusterMetadata`].
pub fn cluster_metadata_block() -> NestedBlock {
    NestedBlock::required(
        Block::new()
            .with_description("Data that helps uniquely identify this object.")
            .with_attribute("name", name_attr())
            .with_attribute("labels", labels_attr())
            .with_attribute("annotations", annotations_attr()),
    )
}

/// Schema of [`NamespacedMetadata`].
pub fn namespaced_metadata_block() -> NestedBlock {
    NestedBlock::required(
        Block::new()
            .with_description("Data that helps uniquely identify this object.")
            .with_attribute("name", name_attr())
            .with_attribute(
                "namespace",
                required_string_attr(
                    "Namespaces provides a mechanism for isolating groups of resources within a single cluster.",
                )
                .with_validator(Validator::Namespace),
            )
            .with_attribute("labels", labels_attr())
            .with_attribute("annotations", annotations_attr()),
    )
}

/// A value read from a key of a Kubernetes secret.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Secret {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_from: Option<ValueFrom>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ValueFrom {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_key_ref: Option<SecretKeyRef>,
}

/// Selects a key of a secret in the pod's namespace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SecretKeyRef {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optional: Option<bool>,
}

/// Schema of [`Secret`].
pub fn secret_block(description: &str) -> NestedBlock {
    NestedBlock::single(
        Block::new().with_description(description).with_block(
            "value_from",
            NestedBlock::single(
                Block::new()
                    .with_description("ValueSource represents a source for the value of a string.")
                    .with_block(
                        "secret_key_ref",
                        NestedBlock::single(
                            Block::new()
                                .with_description("Selects a key of a secret in the pod's namespace")
                                .with_attribute(
                                    "key",
                                    required_string_attr(
                                        "The key of the secret to select from. Must be a valid secret key.",
                                    ),
                                )
                                .with_attribute(
                                    "name",
                                    string_attr("Name of the referent."),
                                )
                                .with_attribute(
                                    "optional",
                                    bool_attr("Specify whether the Secret or its key must be defined"),
                                ),
                        ),
                    ),
            ),
        ),
    )
}

/// TLS settings of a network output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Tls {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crt_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_password: Option<Secret>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verify: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vhost: Option<String>,
}

/// Schema of [`Tls`].
pub fn tls_block() -> NestedBlock {
    NestedBlock::single(
        Block::new()
            .with_description("Fluent Bit provides integrated support for Transport Layer Security (TLS) and it predecessor Secure Sockets Layer (SSL) respectively.")
            .with_attribute("ca_file", string_attr("Absolute path to CA certificate file"))
            .with_attribute("ca_path", string_attr("Absolute path to scan for certificate files"))
            .with_attribute("crt_file", string_attr("Absolute path to Certificate file"))
            .with_attribute(
                "debug",
                int64_attr("Set TLS debug verbosity level. It accept the following values: 0 (No debug), 1 (Error), 2 (State change), 3 (Informational) and 4 Verbose")
                    .with_validator(Validator::between(0, 4)),
            )
            .with_attribute("key_file", string_attr("Absolute path to private Key file"))
            .with_block("key_password", secret_block("Optional password for tls.key_file file"))
            .with_attribute("verify", bool_attr("Force certificate validation"))
            .with_attribute("vhost", string_attr("Hostname to be used for TLS SNI extension")),
    )
}

/// Network connection settings of an output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Networking {
    #[serde(rename(serialize = "DNSMode"), skip_serializing_if = "Option::is_none")]
    pub dns_mode: Option<String>,
    #[serde(rename(serialize = "DNSPreferIPv4"), skip_serializing_if = "Option::is_none")]
    pub dns_prefer_i_pv4: Option<bool>,
    #[serde(rename(serialize = "DNSResolver"), skip_serializing_if = "Option::is_none")]
    pub dns_resolver: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connect_timeout: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connect_timeout_log_error: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keepalive: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keepalive_idle_timeout: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keepalive_max_recycle: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_worker_connections: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_address: Option<String>,
}

/// Schema of [`Networking`].
pub fn networking_block() -> NestedBlock {
    NestedBlock::single(
        Block::new()
            .with_description("Include fluentbit networking options for this output-plugin")
            .with_attribute(
                "dns_mode",
                enum_attr("Sets the primary transport layer protocol used by the asynchronous DNS resolver for connections established", ["TCP", "UDP"]),
            )
            .with_attribute(
                "dns_prefer_i_pv4",
                bool_attr("Prioritize IPv4 DNS results when trying to establish a connection."),
            )
            .with_attribute(
                "dns_resolver",
                enum_attr("Select the primary DNS resolver type (LEGACY or ASYNC).", ["LEGACY", "ASYNC"]),
            )
            .with_attribute(
                "connect_timeout",
                int64_attr("Set maximum time expressed in seconds to wait for a TCP connection to be established, this include the TLS handshake time."),
            )
            .with_attribute(
                "connect_timeout_log_error",
                bool_attr("On connection timeout, specify if it should log an error. When disabled, the timeout is logged as a debug message."),
            )
            .with_attribute(
                "keepalive",
                on_off_attr("Enable or disable connection keepalive support."),
            )
            .with_attribute(
                "keepalive_idle_timeout",
                int64_attr("Set maximum time expressed in seconds for an idle keepalive connection."),
            )
            .with_attribute(
                "keepalive_max_recycle",
                int64_attr("Set maximum number of times a keepalive connection can be used before it is retired."),
            )
            .with_attribute(
                "max_worker_connections",
                int64_attr("Set maximum number of TCP connections that can be established per worker."),
            )
            .with_attribute(
                "source_address",
                string_attr("Specify network address to bind for data traffic"),
            ),
    )
}

/// Selects objects by labels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct LabelSelector {
    #[serde(default, skip_serializing_if = "is_empty_list")]
    pub match_expressions: Option<Vec<LabelSelectorRequirement>>,
    #[serde(default, skip_serializing_if = "is_empty_map")]
    pub match_labels: Option<BTreeMap<String, String>>,
}

/// A single `key operator values` selector term.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LabelSelectorRequirement {
    pub key: String,
    pub operator: String,
    #[serde(default, skip_serializing_if = "is_empty_list")]
    pub values: Option<Vec<String>>,
}

/// Schema of [`LabelSelector`].
pub fn label_selector_block(description: &str) -> NestedBlock {
    NestedBlock::single(
        Block::new()
            .with_description(description)
            .with_block(
                "match_expressions",
                NestedBlock::list(
                    Block::new()
                        .with_description("A label selector requirement is a selector that contains values, a key, and an operator that relates the key and values.")
                        .with_attribute(
                            "key",
                            required_string_attr("key is the label key that the selector applies to."),
                        )
                        .with_attribute(
                            "operator",
                            required_string_attr("operator represents a key's relationship to a set of values.")
                                .with_validator(Validator::one_of(["In", "NotIn", "Exists", "DoesNotExist"])),
                        )
                        .with_attribute(
                            "values",
                            string_list_attr("values is an array of string values. If the operator is In or NotIn, the values array must be non-empty."),
                        ),
                ),
            )
            .with_attribute(
                "match_labels",
                string_map_attr("matchLabels is a map of {key,value} pairs."),
            ),
    )
}
