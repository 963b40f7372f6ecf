//! Testing utilities for provider implementations.
//!
//! This module provides utilities to test `ProviderService` implementations
//! without spinning up a full gRPC server.
//!
//! # Example
//!
//! ```ignore
//! use fluentbit_manifest_provider::testing::ProviderTester;
//! use fluentbit_manifest_provider::FluentBitManifestProvider;
//! use serde_json::json;
//!
//! #[tokio::test]
//! async fn test_render_output() {
//!     let tester = ProviderTester::new(FluentBitManifestProvider::new());
//!
//!     let manifest = tester
//!         .read_manifest(
//!             "k8s_fluentbit_fluent_io_cluster_output_v1alpha2_manifest",
//!             json!({"metadata": {"name": "stdout"}, "spec": {"stdout": {}}}),
//!         )
//!         .await
//!         .unwrap();
//!
//!     assert_eq!(manifest["kind"], "ClusterOutput");
//! }
//! ```

use crate::error::ProviderError;
use crate::manifests::YAML_ATTRIBUTE;
use crate::schema::{Diagnostic, DiagnosticSeverity, ProviderSchema};
use crate::server::ProviderService;
use serde_json::Value;

/// A test harness for provider implementations.
///
/// This wraps a `ProviderService` implementation and provides
/// simplified methods for testing without a gRPC server.
pub struct ProviderTester<P: ProviderService> {
    provider: P,
}

impl<P: ProviderService> ProviderTester<P> {
    /// Create a new tester for the given provider.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Get a reference to the underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    // =========================================================================
    // Schema & Metadata
    // =========================================================================

    /// Get the provider's schema.
    pub fn schema(&self) -> ProviderSchema {
        self.provider.schema()
    }

    /// Get the sorted list of data source type names.
    pub fn data_source_types(&self) -> Vec<String> {
        self.provider.metadata().data_sources
    }

    // =========================================================================
    // Provider Lifecycle
    // =========================================================================

    /// Validate provider configuration.
    ///
    /// Returns `Err` with the error diagnostics if there are any.
    pub async fn validate_provider_config(&self, config: Value) -> Result<(), TestError> {
        let diagnostics = self.provider.validate_provider_config(config).await?;
        check_diagnostics(diagnostics)
    }

    /// Configure the provider.
    pub async fn configure(&self, config: Value) -> Result<(), TestError> {
        let diagnostics = self.provider.configure(config).await?;
        check_diagnostics(diagnostics)
    }

    /// Stop the provider.
    pub async fn stop(&self) -> Result<(), ProviderError> {
        self.provider.stop().await
    }

    // =========================================================================
    // Data Source Operations
    // =========================================================================

    /// Validate a data source configuration.
    pub async fn validate_data_source_config(
        &self,
        data_source_type: &str,
        config: Value,
    ) -> Result<(), TestError> {
        let diagnostics = self
            .provider
            .validate_data_source_config(data_source_type, config)
            .await?;
        check_diagnostics(diagnostics)
    }

    /// Read data from a data source.
    pub async fn read_data_source(
        &self,
        data_source_type: &str,
        config: Value,
    ) -> Result<Value, ProviderError> {
        self.provider
            .read_data_source(data_source_type, config)
            .await
    }

    /// Validate then read a manifest data source, returning the parsed
    /// document from its `yaml` attribute.
    pub async fn read_manifest(
        &self,
        data_source_type: &str,
        config: Value,
    ) -> Result<serde_yaml::Value, TestError> {
        self.validate_data_source_config(data_source_type, config.clone())
            .await?;
        let state = self.read_data_source(data_source_type, config).await?;

        let yaml = state
            .get(YAML_ATTRIBUTE)
            .and_then(Value::as_str)
            .ok_or_else(|| {
                TestError::Diagnostics(vec![Diagnostic::error(
                    "State has no rendered manifest",
                )
                .with_attribute(YAML_ATTRIBUTE)])
            })?;
        serde_yaml::from_str(yaml).map_err(|e| TestError::Provider(ProviderError::Yaml(e)))
    }
}

/// Error type for test operations that may fail with diagnostics.
#[derive(Debug)]
pub enum TestError {
    /// The operation failed with diagnostics.
    Diagnostics(Vec<Diagnostic>),
    /// The operation failed with a provider error.
    Provider(ProviderError),
}

impl TestError {
    /// Diagnostics describing the failure.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        match self {
            TestError::Diagnostics(diags) => diags.clone(),
            TestError::Provider(e) => e.to_diagnostics(),
        }
    }
}

impl std::fmt::Display for TestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TestError::Diagnostics(diags) => {
                writeln!(f, "Operation failed with {} diagnostic(s):", diags.len())?;
                for diag in diags {
                    write!(f, "  [{:?}] {}", diag.severity, diag.summary)?;
                    if let Some(detail) = &diag.detail {
                        write!(f, ": {}", detail)?;
                    }
                    if let Some(attr) = &diag.attribute {
                        write!(f, " (at {})", attr)?;
                    }
                    writeln!(f)?;
                }
                Ok(())
            },
            TestError::Provider(e) => write!(f, "Provider error: {}", e),
        }
    }
}

impl std::error::Error for TestError {}

impl From<ProviderError> for TestError {
    fn from(e: ProviderError) -> Self {
        TestError::Provider(e)
    }
}

/// Check diagnostics and return an error if there are any errors.
fn check_diagnostics(diagnostics: Vec<Diagnostic>) -> Result<(), TestError> {
    let errors: Vec<_> = diagnostics
        .into_iter()
        .filter(|d| matches!(d.severity, DiagnosticSeverity::Error))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(TestError::Diagnostics(errors))
    }
}

// =========================================================================
// Assertion Helpers
// =========================================================================

/// Assert that diagnostics contain no errors.
///
/// # Panics
///
/// Panics if there are any error diagnostics.
pub fn assert_no_errors(diagnostics: &[Diagnostic]) {
    let errors: Vec<_> = diagnostics
        .iter()
        .filter(|d| matches!(d.severity, DiagnosticSeverity::Error))
        .collect();

    assert!(
        errors.is_empty(),
        "Expected no errors, but got {} error(s): {:?}",
        errors.len(),
        errors.iter().map(|d| &d.summary).collect::<Vec<_>>()
    );
}

/// Assert that diagnostics contain at least one error.
///
/// # Panics
///
/// Panics if there are no error diagnostics.
pub fn assert_has_errors(diagnostics: &[Diagnostic]) {
    let has_errors = diagnostics
        .iter()
        .any(|d| matches!(d.severity, DiagnosticSeverity::Error));

    assert!(has_errors, "Expected at least one error, but got none");
}

/// Assert that diagnostics contain an error with the given summary substring.
///
/// # Panics
///
/// Panics if no error diagnostic contains the given substring.
pub fn assert_error_contains(diagnostics: &[Diagnostic], substring: &str) {
    let has_matching_error = diagnostics
        .iter()
        .any(|d| matches!(d.severity, DiagnosticSeverity::Error) && d.summary.contains(substring));

    assert!(
        has_matching_error,
        "Expected an error containing '{}', but no matching error found. Errors: {:?}",
        substring,
        diagnostics
            .iter()
            .filter(|d| matches!(d.severity, DiagnosticSeverity::Error))
            .map(|d| &d.summary)
            .collect::<Vec<_>>()
    );
}

/// Assert that diagnostics contain an error reported at `path`.
///
/// # Panics
///
/// Panics if no error diagnostic is attached to the given attribute path.
pub fn assert_error_at(diagnostics: &[Diagnostic], path: &str) {
    let found = diagnostics.iter().any(|d| {
        matches!(d.severity, DiagnosticSeverity::Error) && d.attribute.as_deref() == Some(path)
    });

    assert!(
        found,
        "Expected an error at '{}', but errors were reported at {:?}",
        path,
        diagnostics
            .iter()
            .filter(|d| matches!(d.severity, DiagnosticSeverity::Error))
            .map(|d| d.attribute.as_deref())
            .collect::<Vec<_>>()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Attribute, Schema};
    use serde_json::json;

    // Renders `name` into a one-line document, or nothing when `broken` is set.
    struct TestProvider;

    #[async_trait::async_trait]
    impl ProviderService for TestProvider {
        fn schema(&self) -> ProviderSchema {
            ProviderSchema::new()
                .with_provider_config(
                    Schema::v0().with_attribute("context", Attribute::optional_string()),
                )
                .with_data_source(
                    "k8s_test_manifest",
                    Schema::v0()
                        .with_attribute("name", Attribute::required_string())
                        .with_attribute("broken", Attribute::optional_bool())
                        .with_attribute("yaml", Attribute::computed_string()),
                )
        }

        async fn read_data_source(
            &self,
            data_source_type: &str,
            mut config: Value,
        ) -> Result<Value, ProviderError> {
            if data_source_type != "k8s_test_manifest" {
                return Err(ProviderError::UnknownDataSource(data_source_type.to_string()));
            }
            if config["broken"] != json!(true) {
                let yaml = format!("name: {}\n", config["name"].as_str().unwrap_or_default());
                config["yaml"] = Value::String(yaml);
            }
            Ok(config)
        }
    }

    #[tokio::test]
    async fn test_tester_configure() {
        let tester = ProviderTester::new(TestProvider);
        tester.validate_provider_config(json!({"context": "kind"})).await.unwrap();
        tester.configure(json!({"context": "kind"})).await.unwrap();
        tester.stop().await.unwrap();
    }

    #[tokio::test]
    async fn test_tester_rejects_unknown_provider_attribute() {
        let tester = ProviderTester::new(TestProvider);
        let err = tester
            .validate_provider_config(json!({"token": "x"}))
            .await
            .unwrap_err();
        assert_error_at(&err.diagnostics(), "token");
    }

    #[test]
    fn test_tester_schema() {
        let tester = ProviderTester::new(TestProvider);
        assert!(tester.schema().data_sources.contains_key("k8s_test_manifest"));
        assert_eq!(tester.data_source_types(), vec!["k8s_test_manifest"]);
        assert!(tester.provider().schema().provider.block.attributes.contains_key("context"));
    }

    #[tokio::test]
    async fn test_tester_read_manifest() {
        let tester = ProviderTester::new(TestProvider);
        let manifest = tester
            .read_manifest("k8s_test_manifest", json!({"name": "demo"}))
            .await
            .unwrap();
        assert_eq!(manifest["name"], "demo");
    }

    #[tokio::test]
    async fn test_tester_read_manifest_validates_first() {
        let tester = ProviderTester::new(TestProvider);
        let err = tester
            .read_manifest("k8s_test_manifest", json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, TestError::Diagnostics(_)));
        assert_error_contains(&err.diagnostics(), "Missing required attribute");
        assert_error_at(&err.diagnostics(), "name");
    }

    #[tokio::test]
    async fn test_tester_read_manifest_without_yaml() {
        let tester = ProviderTester::new(TestProvider);
        let err = tester
            .read_manifest("k8s_test_manifest", json!({"name": "demo", "broken": true}))
            .await
            .unwrap_err();
        assert_error_contains(&err.diagnostics(), "no rendered manifest");
    }

    #[tokio::test]
    async fn test_tester_unknown_data_source() {
        let tester = ProviderTester::new(TestProvider);
        let err = tester
            .validate_data_source_config("k8s_other_manifest", json!({}))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            TestError::Provider(ProviderError::UnknownDataSource(_))
        ));
    }

    #[test]
    fn test_assert_no_errors() {
        let diagnostics = vec![Diagnostic::warning("Just a warning")];
        assert_no_errors(&diagnostics);
    }

    #[test]
    #[should_panic(expected = "Expected no errors")]
    fn test_assert_no_errors_fails() {
        let diagnostics = vec![Diagnostic::error("An error")];
        assert_no_errors(&diagnostics);
    }

    #[test]
    fn test_assert_has_errors() {
        let diagnostics = vec![Diagnostic::error("An error")];
        assert_has_errors(&diagnostics);
    }

    #[test]
    fn test_assert_error_contains() {
        let diagnostics = vec![Diagnostic::error("Invalid configuration value")];
        assert_error_contains(&diagnostics, "Invalid");
        assert_error_contains(&diagnostics, "configuration");
    }

    #[test]
    #[should_panic(expected = "Expected an error at 'spec.match'")]
    fn test_assert_error_at_fails() {
        let diagnostics = vec![Diagnostic::error("Invalid value").with_attribute("spec.alias")];
        assert_error_at(&diagnostics, "spec.match");
    }

    #[test]
    fn test_test_error_display() {
        let err = TestError::Diagnostics(vec![
            Diagnostic::error("First error").with_attribute("field1"),
            Diagnostic::error("Second error").with_detail("More info"),
        ]);

        let display = format!("{}", err);
        assert!(display.contains("First error"));
        assert!(display.contains("Second error"));
        assert!(display.contains("field1"));
        assert!(display.contains("More info"));
    }
}
