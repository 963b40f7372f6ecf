//! The provider served by the binary: a registry of manifest data sources.

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::ProviderError;
use crate::manifests::{all_data_sources, DataSource};
use crate::schema::{has_errors, Diagnostic, ProviderSchema, Schema};
use crate::server::ProviderService;
use crate::types::PROVIDER_TYPE_NAME;
use crate::validation::validate;

/// Serves every registered [`DataSource`] under its type name.
pub struct FluentBitManifestProvider {
    data_sources: BTreeMap<String, Box<dyn DataSource>>,
}

impl FluentBitManifestProvider {
    /// Create a provider serving all Fluent Bit manifests.
    pub fn new() -> Self {
        Self::with_data_sources(PROVIDER_TYPE_NAME, all_data_sources())
    }

    /// Create a provider serving `data_sources`, named with `provider_type_name`.
    pub fn with_data_sources(
        provider_type_name: &str,
        data_sources: impl IntoIterator<Item = Box<dyn DataSource>>,
    ) -> Self {
        let data_sources = data_sources
            .into_iter()
            .map(|ds| (ds.metadata(provider_type_name), ds))
            .collect();
        Self { data_sources }
    }

    /// Look up a data source by its full type name.
    pub fn data_source(&self, data_source_type: &str) -> Result<&dyn DataSource, ProviderError> {
        self.data_sources
            .get(data_source_type)
            .map(|ds| ds.as_ref())
            .ok_or_else(|| ProviderError::UnknownDataSource(data_source_type.to_string()))
    }
}

impl Default for FluentBitManifestProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ProviderService for FluentBitManifestProvider {
    fn schema(&self) -> ProviderSchema {
        let provider = Schema::v0()
            .with_description("Renders Fluent Bit operator custom resources as Kubernetes manifests.");

        self.data_sources.iter().fold(
            ProviderSchema::new().with_provider_config(provider),
            |schema, (name, ds)| schema.with_data_source(name.clone(), ds.schema()),
        )
    }

    async fn validate_data_source_config(
        &self,
        data_source_type: &str,
        config: Value,
    ) -> Result<Vec<Diagnostic>, ProviderError> {
        let data_source = self.data_source(data_source_type)?;
        Ok(validate(&data_source.schema(), &config))
    }

    async fn read_data_source(
        &self,
        data_source_type: &str,
        config: Value,
    ) -> Result<Value, ProviderError> {
        let data_source = self.data_source(data_source_type)?;

        let diagnostics = validate(&data_source.schema(), &config);
        if has_errors(&diagnostics) {
            warn!(
                data_source_type,
                diagnostics = diagnostics.len(),
                "Refusing to render invalid configuration"
            );
            return Err(ProviderError::Invalid(diagnostics));
        }

        debug!(data_source_type, "Rendering manifest");
        let state = data_source.read(config)?;
        info!(data_source_type, "Manifest rendered");
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifests::YAML_ATTRIBUTE;
    use crate::testing::{assert_error_contains, ProviderTester, TestError};
    use serde_json::json;

    const CLUSTER_OUTPUT: &str = "k8s_fluentbit_fluent_io_cluster_output_v1alpha2_manifest";
    const FLUENT_BIT_CONFIG: &str = "k8s_fluentbit_fluent_io_fluent_bit_config_v1alpha2_manifest";

    #[test]
    fn test_metadata_lists_all_kinds() {
        let tester = ProviderTester::new(FluentBitManifestProvider::new());
        assert_eq!(
            tester.data_source_types(),
            vec![
                "k8s_fluentbit_fluent_io_cluster_fluent_bit_config_v1alpha2_manifest".to_string(),
                CLUSTER_OUTPUT.to_string(),
                FLUENT_BIT_CONFIG.to_string(),
            ]
        );
    }

    #[test]
    fn test_schema_marks_yaml_computed() {
        let schema = FluentBitManifestProvider::new().schema();
        assert_eq!(schema.data_sources.len(), 3);
        for (name, ds) in &schema.data_sources {
            let yaml = &ds.block.attributes[YAML_ATTRIBUTE];
            assert!(yaml.flags.computed, "{name} yaml is not computed");
            assert!(ds.block.blocks["metadata"].min_items == 1);
        }
    }

    #[tokio::test]
    async fn test_read_cluster_output() {
        let tester = ProviderTester::new(FluentBitManifestProvider::new());
        let manifest = tester
            .read_manifest(
                CLUSTER_OUTPUT,
                json!({
                    "metadata": {"name": "my-output"},
                    "spec": {"match": "*", "s3": {"bucket": "logs", "region": "us-east-1"}},
                }),
            )
            .await
            .unwrap();

        assert_eq!(manifest["apiVersion"], "fluentbit.fluent.io/v1alpha2");
        assert_eq!(manifest["kind"], "ClusterOutput");
        assert_eq!(manifest["metadata"]["name"], "my-output");
        assert_eq!(manifest["spec"]["match"], "*");
        assert_eq!(manifest["spec"]["s3"]["Bucket"], "logs");
        assert_eq!(manifest["spec"]["s3"]["Region"], "us-east-1");
    }

    #[tokio::test]
    async fn test_rejected_values_never_reach_read() {
        let tester = ProviderTester::new(FluentBitManifestProvider::new());
        let config = json!({
            "metadata": {"name": "cw"},
            "spec": {"cloud_watch": {"region": "eu-west-1", "log_retention_days": 2}},
        });

        let err = tester
            .validate_data_source_config(CLUSTER_OUTPUT, config.clone())
            .await
            .unwrap_err();
        assert!(matches!(err, TestError::Diagnostics(ref d) if d.len() == 1));

        let err = tester
            .read_data_source(CLUSTER_OUTPUT, config)
            .await
            .unwrap_err();
        let diagnostics = err.to_diagnostics();
        assert_error_contains(&diagnostics, "Invalid value");
        assert_eq!(
            diagnostics[0].attribute.as_deref(),
            Some("spec.cloud_watch.log_retention_days")
        );
    }

    #[test]
    fn test_unknown_data_source() {
        let provider = FluentBitManifestProvider::new();

        let err = tokio_test::block_on(provider.read_data_source("k8s_nope_manifest", json!({})))
            .unwrap_err();
        assert!(matches!(err, ProviderError::UnknownDataSource(ref name) if name == "k8s_nope_manifest"));

        let err = tokio_test::block_on(
            provider.validate_data_source_config("k8s_nope_manifest", json!({})),
        )
        .unwrap_err();
        assert!(matches!(err, ProviderError::UnknownDataSource(_)));
    }

    #[test]
    fn test_provider_config_is_empty() {
        let tester = ProviderTester::new(FluentBitManifestProvider::new());
        assert!(tokio_test::block_on(tester.validate_provider_config(json!({}))).is_ok());
        assert!(tokio_test::block_on(tester.configure(json!({}))).is_ok());
        assert!(tokio_test::block_on(tester.validate_provider_config(json!({"token": "x"}))).is_err());
    }

    #[tokio::test]
    async fn test_read_returns_configuration_with_yaml() {
        let tester = ProviderTester::new(FluentBitManifestProvider::new());
        let config = json!({
            "metadata": {"name": "fluent-bit-config", "namespace": "logging"},
            "spec": {"output_selector": {"match_labels": {"fluentbit.fluent.io/enabled": "true"}}},
            "yaml": null,
        });

        let state = tester
            .read_data_source(FLUENT_BIT_CONFIG, config)
            .await
            .unwrap();
        assert_eq!(state["metadata"]["namespace"], "logging");
        assert!(state[YAML_ATTRIBUTE]
            .as_str()
            .unwrap()
            .contains("outputSelector:"));
    }
}
