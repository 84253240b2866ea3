/// Error types for the matcher.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MatchError {
    /// The tolerance is negative or not a finite number.
    #[error("Tolerance must be finite and non-negative, got {0}")]
    InvalidTolerance(f64),

    /// The strategy name does not name a known candidate strategy.
    #[error("Unknown candidate strategy: {0}")]
    UnknownStrategy(String),
}
