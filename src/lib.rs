//! sumbu-rs: workspace facade re-exporting [`sumbu_core`] for the demos.

pub use sumbu_core::*;
