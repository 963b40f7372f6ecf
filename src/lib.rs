//! Fluent Bit manifest provider
//!
//! A provider plugin that renders Fluent Bit operator custom resources
//! (`fluentbit.fluent.io/v1alpha2`) as Kubernetes manifests. Each supported
//! kind is exposed as a read-only data source whose configuration mirrors the
//! custom resource in snake_case and whose computed `yaml` attribute holds the
//! rendered manifest.
//!
//! # Data Sources
//!
//! - `k8s_fluentbit_fluent_io_cluster_output_v1alpha2_manifest`
//! - `k8s_fluentbit_fluent_io_cluster_fluent_bit_config_v1alpha2_manifest`
//! - `k8s_fluentbit_fluent_io_fluent_bit_config_v1alpha2_manifest`
//!
//! # Quick Start
//!
//! ```ignore
//! use fluentbit_manifest_provider::{serve, FluentBitManifestProvider};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     serve(FluentBitManifestProvider::new()).await
//! }
//! ```
//!
//! # Handshake Protocol
//!
//! When the provider starts via [`serve`], it outputs a handshake string to stdout:
//!
//! ```text
//! K8S_PROVIDER|1|127.0.0.1:50051
//! ```
//!
//! Format: `K8S_PROVIDER|<protocol_version>|<address>`
//!
//! This allows a host to spawn the provider as a subprocess and connect via gRPC.
//!
//! # Provider Protocol
//!
//! - **GetMetadata**: Returns the data source type names
//! - **GetSchema**: Returns the schemas of the provider config and data sources
//! - **ValidateProviderConfig**: Validates provider configuration
//! - **Configure**: Configures the provider
//! - **Stop**: Gracefully shuts down the provider
//! - **ValidateDataSourceConfig**: Validates data source configuration
//! - **ReadDataSource**: Renders the configured manifest

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod logging;
#[allow(missing_docs)]
pub mod manifests;
pub mod provider;
pub mod schema;
pub mod server;
pub mod testing;
pub mod types;
pub mod utilities;
pub mod validation;
pub mod validators;

#[allow(missing_docs)]
#[allow(clippy::all)]
pub mod generated;

// Re-export main types at crate root
pub use error::ProviderError;
pub use logging::{init_logging, init_logging_with_default, try_init_logging};
pub use manifests::{DataSource, Manifest};
pub use provider::FluentBitManifestProvider;
pub use schema::ProviderSchema;
pub use server::{
    serve, serve_on, serve_on_with_options, serve_with_options, ProviderService, ServeOptions,
};
pub use types::{ProviderMetadata, HANDSHAKE_PREFIX, PROTOCOL_VERSION, PROVIDER_TYPE_NAME};
pub use validation::{is_valid, validate, validate_result};

// Re-export async_trait for convenience
pub use async_trait::async_trait;

// Re-export commonly used external types
pub use serde_json;
pub use tonic;
pub use tracing;
