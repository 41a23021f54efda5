//! Wire shapes for the listing query.

use hpass_region::AreaCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A listing request, either unscoped (all records) or filtered by the
/// resolved area codes.
///
/// Absent segments are omitted from the serialized form entirely; omission
/// is not the same thing as sending code `0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingRequest {
    scoped: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    district: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    street: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    community: Option<i64>,
}

impl ListingRequest {
    /// The unfiltered listing request.
    #[must_use]
    pub fn unscoped() -> Self {
        Self {
            scoped: false,
            district: None,
            street: None,
            community: None,
        }
    }

    /// A request filtered by whichever area segments resolved.
    #[must_use]
    pub fn scoped(area: AreaCode) -> Self {
        Self {
            scoped: true,
            district: area.district,
            street: area.street,
            community: area.community,
        }
    }

    /// Whether this request carries an area filter.
    #[must_use]
    pub fn is_scoped(&self) -> bool {
        self.scoped
    }

    /// District filter code, if present.
    #[must_use]
    pub fn district(&self) -> Option<i64> {
        self.district
    }

    /// Street filter code, if present.
    #[must_use]
    pub fn street(&self) -> Option<i64> {
        self.street
    }

    /// Community filter code, if present.
    #[must_use]
    pub fn community(&self) -> Option<i64> {
        self.community
    }
}

/// A listing response: an application status code plus opaque records.
///
/// Status `200` means success; anything else is an application-level
/// failure the dispatcher surfaces as [`QueryError::Status`].
///
/// [`QueryError::Status`]: crate::QueryError::Status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingResponse {
    status_code: u16,
    items: Vec<Value>,
}

impl ListingResponse {
    /// Success status code.
    pub const OK: u16 = 200;

    /// Build a response.
    #[must_use]
    pub fn new(status_code: u16, items: Vec<Value>) -> Self {
        Self { status_code, items }
    }

    /// A successful response carrying `items`.
    #[must_use]
    pub fn ok(items: Vec<Value>) -> Self {
        Self::new(Self::OK, items)
    }

    /// The application status code.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// True when the application reported success.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status_code == Self::OK
    }

    /// The records, in server order.
    #[must_use]
    pub fn items(&self) -> &[Value] {
        &self.items
    }

    /// Consume the response, keeping the records.
    #[must_use]
    pub fn into_items(self) -> Vec<Value> {
        self.items
    }
}
