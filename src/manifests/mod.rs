//! Manifest data sources.
//!
//! Every Kubernetes kind served by the provider is a [`Manifest`]: a serde
//! model of the custom resource plus its static schema. [`ManifestDataSource`]
//! turns a manifest model into a [`DataSource`] whose `read` renders the
//! configured object as YAML into the computed `yaml` attribute.

pub mod common;
pub mod fluentbit_fluent_io;

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::ProviderError;
use crate::schema::Schema;

/// Name of the computed attribute holding the rendered manifest.
pub const YAML_ATTRIBUTE: &str = "yaml";

/// A read-only data source served by the provider.
pub trait DataSource: Send + Sync {
    /// Full type name of the data source, e.g.
    /// `k8s_fluentbit_fluent_io_cluster_output_v1alpha2_manifest`.
    fn metadata(&self, provider_type_name: &str) -> String;

    /// Schema of the data source configuration.
    fn schema(&self) -> Schema;

    /// Compute the data source state from a validated configuration.
    fn read(&self, config: Value) -> Result<Value, ProviderError>;
}

/// A custom resource model that can be rendered as a manifest.
pub trait Manifest: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// API group, e.g. `fluentbit.fluent.io`.
    const GROUP: &'static str;
    /// API version, e.g. `v1alpha2`.
    const VERSION: &'static str;
    /// Kind, e.g. `ClusterOutput`.
    const KIND: &'static str;

    /// Schema of the configuration this model is decoded from.
    fn schema() -> Schema;

    /// Stamp `apiVersion` and `kind` before serialization.
    fn set_type_meta(&mut self, api_version: String, kind: String);

    /// `<group>/<version>`.
    fn api_version() -> String {
        format!("{}/{}", Self::GROUP, Self::VERSION)
    }
}

/// Type name of the data source rendering `M`.
pub fn type_name<M: Manifest>(provider_type_name: &str) -> String {
    format!(
        "{}_{}_{}_{}_manifest",
        provider_type_name,
        M::GROUP.replace(['.', '-'], "_"),
        snake_case(M::KIND),
        M::VERSION
    )
}

/// Render a configuration as a manifest of kind `M`.
///
/// Returns the configuration object with the `yaml` attribute set.
pub fn render<M: Manifest>(config: Value) -> Result<Value, ProviderError> {
    let mut state = match config {
        Value::Object(map) => map,
        Value::Null => serde_json::Map::new(),
        other => {
            return Err(ProviderError::InvalidRequest(format!(
                "expected a configuration object for {}, got {}",
                M::KIND,
                other
            )))
        },
    };

    let mut manifest: M = serde_json::from_value(Value::Object(state.clone()))?;
    manifest.set_type_meta(M::api_version(), M::KIND.to_string());

    let yaml = serde_yaml::to_string(&manifest)?;
    debug!(kind = M::KIND, bytes = yaml.len(), "Rendered manifest");

    state.insert(YAML_ATTRIBUTE.to_string(), Value::String(yaml));
    Ok(Value::Object(state))
}

/// Adapts a [`Manifest`] model to the [`DataSource`] contract.
pub struct ManifestDataSource<M> {
    _manifest: PhantomData<fn() -> M>,
}

impl<M: Manifest> ManifestDataSource<M> {
    /// Create the data source.
    pub fn new() -> Self {
        Self {
            _manifest: PhantomData,
        }
    }
}

impl<M: Manifest> Default for ManifestDataSource<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Manifest> DataSource for ManifestDataSource<M> {
    fn metadata(&self, provider_type_name: &str) -> String {
        type_name::<M>(provider_type_name)
    }

    fn schema(&self) -> Schema {
        M::schema()
    }

    fn read(&self, config: Value) -> Result<Value, ProviderError> {
        render::<M>(config)
    }
}

/// Every data source served by the provider.
pub fn all_data_sources() -> Vec<Box<dyn DataSource>> {
    use fluentbit_fluent_io::{
        cluster_fluent_bit_config_v1alpha2::ClusterFluentBitConfig,
        cluster_output_v1alpha2::ClusterOutput, fluent_bit_config_v1alpha2::FluentBitConfig,
    };

    vec![
        Box::new(ManifestDataSource::<ClusterFluentBitConfig>::new()),
        Box::new(ManifestDataSource::<ClusterOutput>::new()),
        Box::new(ManifestDataSource::<FluentBitConfig>::new()),
    ]
}

fn snake_case(kind: &str) -> String {
    let mut out = String::with_capacity(kind.len() + 4);
    for (i, c) in kind.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
