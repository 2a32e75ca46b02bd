pub mod classifier;
pub mod config;
pub mod dataset;
pub mod grouping;

#[cfg(target_arch = "wasm32")]
pub mod wasm;
