// =============================================================================
// Scenario Common - Error Types
// =============================================================================
// Table of Contents:
// 1. API Errors
// 2. Store Errors
// 3. Identifier Errors
// =============================================================================

use std::fmt;

use thiserror::Error;

// -----------------------------------------------------------------------------
// 1. API Errors
// -----------------------------------------------------------------------------

/// API error types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error: {status} - {message}")]
    Server { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialize(String),

    #[error("Encoding error: {0}")]
    Encode(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found")]
    NotFound,
}

// -----------------------------------------------------------------------------
// 2. Store Errors
// -----------------------------------------------------------------------------

/// Store action that issued a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Load,
    Fetch,
    Save,
    Update,
    Delete,
    Duplicate,
    Upload,
}

impl Action {
    /// Human readable verb phrase, used in logs and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Load => "load scenarios",
            Action::Fetch => "fetch scenario",
            Action::Save => "save scenario",
            Action::Update => "update scenario",
            Action::Delete => "delete scenario",
            Action::Duplicate => "duplicate scenario",
            Action::Upload => "upload scenario",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure of a store action.
///
/// Callers only need to know that the action failed; the wrapped
/// [`ApiError`] is kept for display.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Failed to {action}: {source}")]
    Request {
        action: Action,
        #[source]
        source: ApiError,
    },

    #[error("Scenario has no id")]
    MissingId,

    #[error("Invalid upload: {0}")]
    InvalidUpload(String),
}

impl StoreError {
    /// The action that failed, if the failure came from a request.
    pub fn action(&self) -> Option<Action> {
        match self {
            StoreError::Request { action, .. } => Some(*action),
            _ => None,
        }
    }
}

/// Result alias for store actions.
pub type Result<T> = std::result::Result<T, StoreError>;

// -----------------------------------------------------------------------------
// 3. Identifier Errors
// -----------------------------------------------------------------------------

/// Raised when text cannot be used as a scenario id.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScenarioIdError {
    #[error("Scenario id is empty")]
    Empty,
}
