//! Error types for the reserve service client

use mvtk_soap::SoapError;
use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by the reserve service operations
///
/// `Transport` is the raw transport tier; `BackendStatus` and
/// `ReservationResult` are the structured tiers carrying an HTTP-style
/// classification and the backend status code.
#[derive(Debug, Error)]
pub enum ReserveError {
    /// Missing `MVTK_RESERVE_ENDPOINT` environment variable
    #[error("Missing MVTK_RESERVE_ENDPOINT environment variable")]
    MissingEndpoint,

    /// Remote call failed (message of the underlying error, unmodified)
    #[error(transparent)]
    Transport(#[from] SoapError),

    /// Result envelope carried a non-success status
    #[error("{message}")]
    BackendStatus {
        /// Backend status code
        status: String,
        /// Backend message
        message: String,
    },

    /// Envelope succeeded but the seat reservation result is not a success
    #[error("ReservationResult {code}")]
    ReservationResult {
        /// Envelope status code (a success code)
        status: String,
        /// Reservation result code returned by the backend
        code: String,
    },
}

impl ReserveError {
    /// HTTP-style classification of the structured tiers (always 400)
    #[must_use]
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::BackendStatus { .. } | Self::ReservationResult { .. } => {
                Some(StatusCode::BAD_REQUEST.as_u16())
            }
            Self::MissingEndpoint | Self::Transport(_) => None,
        }
    }

    /// Backend status code of the structured tiers
    #[must_use]
    pub fn backend_status(&self) -> Option<&str> {
        match self {
            Self::BackendStatus { status, .. } | Self::ReservationResult { status, .. } => {
                Some(status)
            }
            Self::MissingEndpoint | Self::Transport(_) => None,
        }
    }

    /// Whether this is a raw transport failure
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

/// A code string that does not belong to an enumeration
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("Unknown {kind} code: {code:?}")]
pub struct UnknownCode {
    /// Enumeration name
    pub kind: &'static str,
    /// Offending code
    pub code: String,
}

/// A wire request that does not map back to its typed form
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MappingError {
    /// A code field outside its enumeration
    #[error(transparent)]
    UnknownCode(#[from] UnknownCode),

    /// A count field that is not a non-negative integer
    #[error("Invalid {name} count: {value:?}")]
    InvalidCount {
        /// Field name
        name: &'static str,
        /// Offending value
        value: String,
    },
}
