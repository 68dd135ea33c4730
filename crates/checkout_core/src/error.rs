use thiserror::Error;

/// Rejected simulation parameters. Raised before any event runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("simulation horizon must be a positive number of minutes")]
    ZeroHorizon,
    #[error("arrival interval must be a positive number of minutes")]
    ZeroArrivalInterval,
    #[error("at least one checker is required")]
    NoCheckers,
}
