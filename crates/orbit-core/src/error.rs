use std::time::Duration;

/// Rejected scene configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("orbit needs at least one item")]
    NoOrbitItems,
    #[error("transition duration must be positive, got {0:?}")]
    InvalidDuration(Duration),
    #[error("breakpoint widths must be strictly ascending (offending index {index})")]
    UnsortedBreakpoints { index: usize },
    #[error("orbit radius must be positive and finite, got {0}")]
    InvalidRadius(f32),
}
