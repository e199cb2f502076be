//! Error handling for stepviz.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod engine_error;

pub use config_error::ConfigError;
pub use engine_error::EngineError;
