//! Domain errors for content generation
//!
//! The two generation failure kinds are deliberately distinguishable: a
//! missing credential is a configuration problem the operator must fix,
//! while a remote failure is transient. Neither is retried.

use thiserror::Error;

/// Errors that can occur during a content generation call
#[derive(Error, Debug)]
pub enum ContentError {
    /// No generation credential is configured
    #[error("Generation credential is missing; configure the API key")]
    MissingCredential,

    /// The remote generation call failed
    #[error("Content generation failed: {0}")]
    Remote(String),
}

impl ContentError {
    /// Create a remote failure error with a message
    pub fn remote(msg: impl Into<String>) -> Self {
        Self::Remote(msg.into())
    }
}

/// Errors that can occur in the post editor workflow
#[derive(Error, Debug)]
pub enum EditorError {
    /// Generation needs a topic, and the topic is the post title
    #[error("A title is required before content can be generated or saved")]
    EmptyTitle,

    /// The underlying generation call failed
    #[error(transparent)]
    Generation(#[from] ContentError),
}

/// Result type alias for editor operations
pub type Result<T> = std::result::Result<T, EditorError>;
