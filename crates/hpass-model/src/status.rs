//! Status enumerations and their display mapping tables.
//!
//! The API encodes these as small integers. Decoding goes through
//! `from_code` so an unexpected value surfaces as an error instead of an
//! out-of-bounds table lookup.

use crate::{ModelError, Result};

/// Health-code color status carried by the QR screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HealthCodeStatus {
    Green,
    Yellow,
    Red,
}

impl HealthCodeStatus {
    /// Decode the API's integer status.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownStatusCode`] for anything outside `0..=2`.
    pub fn from_code(code: i64) -> Result<Self> {
        match code {
            0 => Ok(Self::Green),
            1 => Ok(Self::Yellow),
            2 => Ok(Self::Red),
            _ => Err(ModelError::UnknownStatusCode { code }),
        }
    }

    /// The wire code for this status.
    #[must_use]
    pub fn code(self) -> i64 {
        match self {
            Self::Green => 0,
            Self::Yellow => 1,
            Self::Red => 2,
        }
    }

    /// Short display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Red => "red",
        }
    }

    /// QR foreground color used when rendering the code.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Green => "#1b824d",
            Self::Yellow => "#FFD700",
            Self::Red => "#f60909",
        }
    }
}

/// Nucleic-acid test result shown on the testing-record screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TestResult {
    Negative,
    Positive,
    Pending,
}

impl TestResult {
    /// Decode the API's integer result.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownStatusCode`] for anything outside `0..=2`.
    pub fn from_code(code: i64) -> Result<Self> {
        match code {
            0 => Ok(Self::Negative),
            1 => Ok(Self::Positive),
            2 => Ok(Self::Pending),
            _ => Err(ModelError::UnknownStatusCode { code }),
        }
    }

    /// The wire code for this result.
    #[must_use]
    pub fn code(self) -> i64 {
        match self {
            Self::Negative => 0,
            Self::Positive => 1,
            Self::Pending => 2,
        }
    }

    /// Short display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Negative => "negative",
            Self::Positive => "positive",
            Self::Pending => "pending",
        }
    }

    /// Display color for the result text.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Negative => "green",
            Self::Positive => "red",
            Self::Pending => "orange",
        }
    }
}
