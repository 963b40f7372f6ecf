//! Diagnostic helpers shared by every manifest data source.

use crate::schema::Diagnostic;

/// Wrap a YAML marshal failure into the diagnostic reported to the host.
pub fn marshal_yaml_error(err: &serde_yaml::Error) -> Diagnostic {
    Diagnostic::error("Unable to marshal YAML").with_detail(format!(
        "An unexpected error occurred while marshalling the manifest. \
         Please report this issue to the provider developers.\n\n\
         Marshal Error: {}",
        err
    ))
}
