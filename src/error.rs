//! Error type shared by the simulation core and the scenario loader

/// Everything that can abort a body update or a scenario build
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    /// Zero-length vector normalized, or a body with zero mass divided through
    #[error("division by zero: {0}")]
    DivisionByZero(&'static str),

    #[error("no body at index {0}")]
    NoSuchBody(usize),

    #[error("invalid scenario: {0}")]
    InvalidScenario(String),
}
