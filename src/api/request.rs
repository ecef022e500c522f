//! Request types for the Staffing Savings Engine API.
//!
//! This module defines the JSON request structures for the `/calculate`
//! endpoint and the query parameters of the hospital listing.

use serde::{Deserialize, Serialize};

use crate::models::OrganizationKind;

/// Request body for the `/calculate` endpoint.
///
/// Names the organization to evaluate and, optionally, edited values for
/// the three inputs. An edited value that does not parse as a number is
/// ignored and the record default is used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Which table the organization comes from.
    pub kind: OrganizationKind,
    /// Health-system ID or hospital CCN.
    pub id: String,
    /// Edited staff labor rate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staff_rate: Option<FieldValue>,
    /// Edited agency labor rate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agency_rate: Option<FieldValue>,
    /// Edited estimated RN need.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rn_need: Option<FieldValue>,
}

/// An edited input as sent by the client, either as typed text or as a
/// JSON number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A JSON number.
    Number(serde_json::Number),
    /// Raw text from an input field.
    Text(String),
}

impl FieldValue {
    /// Returns the value as text to be parsed by the session.
    pub fn as_text(&self) -> String {
        match self {
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Text(s) => s.clone(),
        }
    }
}

/// Query parameters for `GET /hospitals`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HospitalQuery {
    /// Restrict the listing to one state.
    #[serde(default)]
    pub state: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_request() {
        let json = r#"{ "kind": "hospital", "id": "160045" }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.kind, OrganizationKind::Hospital);
        assert_eq!(request.id, "160045");
        assert!(request.staff_rate.is_none());
        assert!(request.rn_need.is_none());
    }

    #[test]
    fn test_deserialize_text_and_number_edits() {
        let json = r#"{
            "kind": "health_system",
            "id": "HSI00000001",
            "staff_rate": "41.50",
            "agency_rate": 95.25,
            "rn_need": "abc"
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.kind, OrganizationKind::HealthSystem);
        assert_eq!(request.staff_rate.unwrap().as_text(), "41.50");
        assert_eq!(request.agency_rate.unwrap().as_text(), "95.25");
        assert_eq!(request.rn_need.unwrap().as_text(), "abc");
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let json = r#"{ "kind": "clinic", "id": "1" }"#;
        assert!(serde_json::from_str::<CalculationRequest>(json).is_err());
    }
}
