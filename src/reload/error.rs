use thiserror::Error;

/// The component was configured without anything to reload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("You must provide either a `data` or `params` prop.")]
    MissingDataAndParams,
}

/// Failures reported by a [`Transport`](crate::state_management::Transport)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("reload request failed: {0}")]
    Request(String),
    #[error("reload request returned HTTP status {0}")]
    Status(u16),
    #[error("could not decode reload response: {0}")]
    Decode(String),
    #[error("reload request was cancelled")]
    Cancelled,
}
