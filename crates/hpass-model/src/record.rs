//! Listing records and the point-registration payload.
//!
//! Listing responses carry opaque JSON items; the screens that know their
//! shape decode them here. Field names follow the remote API's camelCase.

use hpass_region::AreaCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{ModelError, Result};

/// A nucleic-acid testing institution row from the listing query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestingInstitute {
    pub name: String,
    pub district: i64,
    pub street: i64,
    pub community: i64,
    pub address: String,
    pub test_time: String,
    pub contact_number: String,
}

impl TestingInstitute {
    /// Decode one opaque listing item.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Decode`] when the item does not match the
    /// institution shape.
    pub fn from_item(item: &Value) -> Result<Self> {
        Ok(serde_json::from_value(item.clone())?)
    }
}

/// A vaccination site row from the listing query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaccinationSite {
    pub name: String,
    pub district: String,
    pub street: String,
    pub community: String,
    pub address: String,
    pub appointment_time: String,
}

impl VaccinationSite {
    /// Decode one opaque listing item.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Decode`] when the item does not match the site
    /// shape.
    pub fn from_item(item: &Value) -> Result<Self> {
        Ok(serde_json::from_value(item.clone())?)
    }
}

/// Submission payload registering a new testing point.
///
/// Built through [`PointRegistration::new`], which enforces the form rules:
/// no blank fields and a fully resolved area selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointRegistration {
    pub name: String,
    pub address: String,
    pub test_time: String,
    pub contact_number: String,
    pub district: i64,
    pub street: i64,
    pub community: i64,
}

impl PointRegistration {
    /// Validate the form fields and bind the resolved area codes.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::MissingField`] for any blank text field and
    /// [`ModelError::UnresolvedArea`] unless all three area segments
    /// resolved.
    pub fn new(
        name: &str,
        address: &str,
        test_time: &str,
        contact_number: &str,
        area: AreaCode,
    ) -> Result<Self> {
        let required = [
            ("name", name),
            ("address", address),
            ("testTime", test_time),
            ("contactNumber", contact_number),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ModelError::MissingField { field });
            }
        }
        let AreaCode {
            district: Some(district),
            street: Some(street),
            community: Some(community),
        } = area
        else {
            return Err(ModelError::UnresolvedArea);
        };
        Ok(Self {
            name: name.to_string(),
            address: address.to_string(),
            test_time: test_time.to_string(),
            contact_number: contact_number.to_string(),
            district,
            street,
            community,
        })
    }
}
