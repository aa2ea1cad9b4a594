//! Error types for sqltemplate

use thiserror::Error;

/// Result type alias for template rendering
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Errors raised while rendering a template
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// The builder is missing configuration it needs to render
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl TemplateError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Check if this is a configuration error
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}
