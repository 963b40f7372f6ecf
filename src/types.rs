//! Convenience types for provider implementations.
//!
//! These types provide a more ergonomic API over the raw protobuf types.

use serde::{Deserialize, Serialize};

/// Provider metadata returned by GetMetadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProviderMetadata {
    /// List of data source type names.
    pub data_sources: Vec<String>,
}

impl ProviderMetadata {
    /// Create metadata listing the given data source type names, sorted.
    pub fn new<I, S>(data_sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut data_sources: Vec<String> = data_sources.into_iter().map(Into::into).collect();
        data_sources.sort();
        Self { data_sources }
    }
}

impl From<ProviderMetadata> for crate::generated::GetMetadataResponse {
    fn from(metadata: ProviderMetadata) -> Self {
        Self {
            data_sources: metadata.data_sources,
            diagnostics: vec![],
        }
    }
}

/// The protocol version for the handshake.
pub const PROTOCOL_VERSION: u32 = 1;

/// The handshake prefix output by the provider.
pub const HANDSHAKE_PREFIX: &str = "K8S_PROVIDER";

/// Prefix of every data source type name served by this provider.
pub const PROVIDER_TYPE_NAME: &str = "k8s";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_metadata() {
        let metadata = ProviderMetadata::new([
            "k8s_fluentbit_fluent_io_cluster_output_v1alpha2_manifest",
            "k8s_fluentbit_fluent_io_fluent_bit_config_v1alpha2_manifest",
        ]);
        assert_eq!(metadata.data_sources.len(), 2);

        let proto: crate::generated::GetMetadataResponse = metadata.clone().into();
        assert_eq!(proto.data_sources, metadata.data_sources);
        assert!(proto.diagnostics.is_empty());
    }

    #[test]
    fn test_default_metadata_is_empty() {
        assert!(ProviderMetadata::default().data_sources.is_empty());
    }

    #[test]
    fn test_protocol_constants() {
        assert_eq!(PROTOCOL_VERSION, 1);
        assert_eq!(HANDSHAKE_PREFIX, "K8S_PROVIDER");
        assert_eq!(PROVIDER_TYPE_NAME, "k8s");
    }
}
