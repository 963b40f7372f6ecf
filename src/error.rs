//! Error types for the Fluent Bit manifest provider.

use thiserror::Error;

use crate::schema::Diagnostic;
use crate::utilities::marshal_yaml_error;

/// Errors that can occur while serving data sources.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The configuration failed schema validation.
    ///
    /// Carries every diagnostic produced by the validator so callers can
    /// surface them individually.
    #[error("Invalid configuration: {} error(s)", .0.len())]
    Invalid(Vec<Diagnostic>),

    /// A configuration error occurred.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The requested data source type is unknown.
    #[error("Unknown data source type: {0}")]
    UnknownDataSource(String),

    /// A JSON serialization/deserialization error occurred.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The manifest could not be rendered as YAML.
    #[error("Unable to marshal YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The gRPC server failed while serving or draining.
    #[error("Transport error: {0}")]
    Transport(#[from] tonic::transport::Error),

    /// Invalid request from client.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ProviderError {
    /// Get the error message as a string.
    pub fn message(&self) -> &str {
        match self {
            Self::Configuration(msg) | Self::UnknownDataSource(msg) | Self::InvalidRequest(msg) => {
                msg
            },
            Self::Invalid(_) => "configuration failed validation",
            Self::Serialization(_) => "serialization error (see Debug output)",
            Self::Yaml(_) => "yaml marshal error (see Debug output)",
            Self::Transport(_) => "transport error (see Debug output)",
        }
    }

    /// Convert the error into the diagnostics reported back to the host.
    ///
    /// Validation failures keep their individual diagnostics and YAML
    /// failures use the shared marshal diagnostic. Everything else becomes a
    /// single error diagnostic carrying the display message.
    pub fn to_diagnostics(&self) -> Vec<Diagnostic> {
        match self {
            Self::Invalid(diagnostics) => diagnostics.clone(),
            Self::Yaml(err) => vec![marshal_yaml_error(err)],
            Self::Serialization(err) => vec![Diagnostic::error("Unable to decode configuration")
                .with_detail(format!(
                    "The configuration could not be mapped onto the manifest model.\n\nDecode Error: {}",
                    err
                ))],
            other => vec![Diagnostic::error(other.to_string())],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::DiagnosticSeverity;

    #[test]
    fn test_error_display() {
        let err = ProviderError::UnknownDataSource("k8s_unknown_manifest".to_string());
        assert_eq!(
            format!("{}", err),
            "Unknown data source type: k8s_unknown_manifest"
        );

        let err = ProviderError::Invalid(vec![
            Diagnostic::error("first"),
            Diagnostic::error("second"),
        ]);
        assert_eq!(format!("{}", err), "Invalid configuration: 2 error(s)");
    }

    #[test]
    fn test_message_method() {
        let err = ProviderError::Configuration("invalid config".to_string());
        assert_eq!(err.message(), "invalid config");

        let err = ProviderError::InvalidRequest("bad request".to_string());
        assert_eq!(err.message(), "bad request");

        let err = ProviderError::UnknownDataSource("k8s_nope_manifest".to_string());
        assert_eq!(err.message(), "k8s_nope_manifest");
    }

    #[test]
    fn test_invalid_keeps_individual_diagnostics() {
        let err = ProviderError::Invalid(vec![
            Diagnostic::error("Missing required attribute 'metadata'").with_attribute("metadata"),
            Diagnostic::error("Invalid value").with_attribute("spec.log_level"),
        ]);

        let diagnostics = err.to_diagnostics();
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics[1].attribute, Some("spec.log_level".to_string()));
    }

    #[test]
    fn test_decode_error_diagnostic() {
        let decode_err = serde_json::from_str::<u8>("\"not a number\"").unwrap_err();
        let diagnostics = ProviderError::from(decode_err).to_diagnostics();

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, DiagnosticSeverity::Error);
        assert_eq!(diagnostics[0].summary, "Unable to decode configuration");
        assert!(diagnostics[0]
            .detail
            .as_deref()
            .is_some_and(|detail| detail.contains("Decode Error")));
    }

    #[test]
    fn test_generic_error_diagnostic() {
        let diagnostics = ProviderError::UnknownDataSource("k8s_nope".to_string()).to_diagnostics();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].summary, "Unknown data source type: k8s_nope");
    }
}
