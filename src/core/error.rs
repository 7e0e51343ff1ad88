//! Error types for the sync boundary
//!
//! Every failure the sync adapters can produce is represented by
//! [`SyncError`]. Callers branch on the variant (a 404 on update/delete
//! surfaces as [`SyncError::NotFound`]); on any error the local
//! collection is left untouched.

use uuid::Uuid;

/// Result alias used across the sync boundary
pub type SyncResult<T> = Result<T, SyncError>;

/// Errors returned by [`SyncService`](crate::core::service::SyncService)
/// and [`UploadService`](crate::core::service::UploadService) implementations
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// The API answered with a non-success status
    #[error("{resource} request failed with status {status}: {message}")]
    Api {
        resource: &'static str,
        status: u16,
        message: String,
    },

    /// Update or delete targeted an id the server does not know
    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: Uuid },

    /// The request never produced an HTTP response
    #[cfg(feature = "rest")]
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A request or response body failed to (de)serialize
    #[error("invalid {resource} payload: {message}")]
    Payload {
        resource: &'static str,
        message: String,
    },
}

impl SyncError {
    /// Shorthand for an [`SyncError::Api`] value
    pub fn api(resource: &'static str, status: u16, message: impl Into<String>) -> Self {
        SyncError::Api {
            resource,
            status,
            message: message.into(),
        }
    }

    /// Shorthand for a [`SyncError::Payload`] value
    pub fn payload(resource: &'static str, message: impl std::fmt::Display) -> Self {
        SyncError::Payload {
            resource,
            message: message.to_string(),
        }
    }

    /// Classify a non-success HTTP status.
    ///
    /// A 404 with a known target id becomes [`SyncError::NotFound`];
    /// everything else is an [`SyncError::Api`].
    pub fn from_status(
        resource: &'static str,
        status: u16,
        message: String,
        id: Option<Uuid>,
    ) -> Self {
        match (status, id) {
            (404, Some(id)) => SyncError::NotFound { resource, id },
            _ => SyncError::Api {
                resource,
                status,
                message,
            },
        }
    }

    /// The HTTP status this error corresponds to, when one exists
    pub fn status(&self) -> Option<u16> {
        match self {
            SyncError::Api { status, .. } => Some(*status),
            SyncError::NotFound { .. } => Some(404),
            #[cfg(feature = "rest")]
            SyncError::Transport(err) => err.status().map(|s| s.as_u16()),
            SyncError::Payload { .. } => None,
        }
    }

    /// Check whether this error means the target record does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, SyncError::NotFound { .. })
    }
}
