//! Dispatch errors.

/// The only error the engine itself raises.
///
/// Degenerate inputs (empty arrays, unreachable nodes, search misses)
/// are regular terminal step kinds, never errors.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Algorithm '{0}' is not implemented")]
    UnsupportedAlgorithm(String),
}
