//! Controller error types.

use std::fmt;

use catalog_core::ProductId;
use catalog_data::ApiError;
use thiserror::Error;

/// Kind of mutation holding a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationKind {
    Create,
    Update,
    Delete,
}

impl fmt::Display for MutationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MutationKind::Create => "create",
            MutationKind::Update => "update",
            MutationKind::Delete => "delete",
        };
        f.write_str(s)
    }
}

/// Why a controller operation did not commit.
///
/// Every variant has already been shown to the user through the dialog
/// boundary by the time the caller sees it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ControllerError {
    /// The gateway failed; state was restored.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Another mutation of the same record has not settled yet.
    #[error("product {id} has a pending {kind}")]
    MutationInFlight { id: ProductId, kind: MutationKind },
}

impl ControllerError {
    /// The gateway error, if this was one.
    pub fn api(&self) -> Option<&ApiError> {
        match self {
            ControllerError::Api(e) => Some(e),
            ControllerError::MutationInFlight { .. } => None,
        }
    }
}

/// Result of a delete request.
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    /// The record was removed and the service confirmed it.
    Deleted,
    /// The user declined the confirmation; nothing changed.
    Declined,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_is_transparent() {
        let err = ControllerError::from(ApiError::from_status(500));
        assert_eq!(err.to_string(), "HTTP error! status: 500");
        assert_eq!(err.api().and_then(|e| e.status), Some(500));
    }

    #[test]
    fn test_in_flight_message() {
        let err = ControllerError::MutationInFlight {
            id: ProductId::new(7),
            kind: MutationKind::Update,
        };
        assert_eq!(err.to_string(), "product 7 has a pending update");
        assert!(err.api().is_none());
    }
}
