use thiserror::Error;

/// Errors that can occur while talking to the recipe service
#[derive(Error, Debug)]
pub enum WidgetError {
    /// Query was empty after trimming
    #[error("Please enter a valid recipe name")]
    EmptyQuery,

    /// Network failure, timeout or undecodable response body
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Service answered with a non-success status
    #[error("Unexpected HTTP status: {0}")]
    Status(u16),

    /// HTTP client could not be constructed
    #[error("Client error: {0}")]
    Client(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl WidgetError {
    /// Transport-class failures are the ones shown to the user as a generic message.
    pub fn is_transport(&self) -> bool {
        matches!(self, WidgetError::Transport(_) | WidgetError::Status(_))
    }
}
