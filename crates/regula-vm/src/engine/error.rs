//! Errors that can occur during simulation.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// Execution fuel exhausted. Carries the configured limit.
    #[error("runtime execution limit of {0} steps exceeded")]
    ExecFuelExhausted(u32),
}
