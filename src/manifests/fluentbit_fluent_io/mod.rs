//! Custom resources of the Fluent Bit operator (`fluentbit.fluent.io`).

pub mod cluster_fluent_bit_config_v1alpha2;
pub mod cluster_output_v1alpha2;
pub mod fluent_bit_config_v1alpha2;

/// API group of every kind in this module.
pub const GROUP: &str = "fluentbit.fluent.io";

/// API version of every kind in this module.
pub const VERSION: &str = "v1alpha2";
