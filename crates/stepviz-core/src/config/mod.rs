//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::types::NodeId;

/// Tunables for the trace engine.
///
/// Every field has a compiled default; a TOML file only needs to name
/// the fields it overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Binary search gives up after `multiplier * (floor(log2(n)) + 1)`
    /// iterations, so a malformed working copy can never loop forever.
    pub binary_search_cap_multiplier: usize,

    /// Start node used for graph tracers when the caller supplies none.
    pub graph_default_start: NodeId,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            binary_search_cap_multiplier: 2,
            graph_default_start: 0,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that would defeat the termination guard.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.binary_search_cap_multiplier == 0 {
            return Err(ConfigError::Invalid(
                "binary_search_cap_multiplier must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
