#![forbid(unsafe_code)]

//! View-state vocabulary for the health-pass client.
//!
//! The remote API speaks in integer result codes and loosely-typed JSON
//! records; screens speak in labeled, colored, strongly-typed values. This
//! crate is the translation layer: status enumerations with their display
//! mapping tables, the listing record shapes, the point-registration
//! submission payload, and the session context that authorizes requests.

mod record;
mod session;
mod status;

pub use record::{PointRegistration, TestingInstitute, VaccinationSite};
pub use session::Session;
pub use status::{HealthCodeStatus, TestResult};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors raised while interpreting API payloads or building submissions.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown status code: {code}")]
    UnknownStatusCode { code: i64 },

    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("area selection is not fully resolved")]
    UnresolvedArea,

    #[error("malformed listing record: {0}")]
    Decode(#[from] serde_json::Error),
}
