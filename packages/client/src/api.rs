//! Request and response shapes for the thin HTTP layer in front of the
//! protocol.
//!
//! These are plain serde types, not a server framework: the routes are
//! `GET /items`, `POST /add`, `POST /update`, `POST /remove` and
//! `POST /clear`. Validation runs before any ledger interaction, so a
//! malformed body never costs a transaction.

use serde::{Deserialize, Serialize};
use slotlist_model::ListState;

use crate::ClientError;

/// Body of `POST /add`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddRequest {
    pub name: String,
    pub qty: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl AddRequest {
    pub fn validate(&self) -> Result<(), ClientError> {
        require_non_empty("name", &self.name)?;
        require_non_empty("qty", &self.qty)?;
        require_non_empty("category", &self.category)?;
        Ok(())
    }

    /// The note field as stored: empty string when unset.
    pub fn note_or_default(&self) -> &str {
        self.note.as_deref().unwrap_or("")
    }
}

/// Body of `POST /update`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRequest {
    pub index: u64,
    pub name: String,
    pub qty: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl UpdateRequest {
    pub fn validate(&self) -> Result<(), ClientError> {
        require_non_empty("name", &self.name)?;
        require_non_empty("qty", &self.qty)?;
        require_non_empty("category", &self.category)?;
        Ok(())
    }

    pub fn note_or_default(&self) -> &str {
        self.note.as_deref().unwrap_or("")
    }
}

/// Body of `POST /remove`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveRequest {
    pub index: u64,
}

/// Response of `GET /items`: the freshly decoded list.
pub type ItemsResponse = ListState;

/// Response of every mutating route.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationResponse {
    /// Gateway-assigned id of the submitted operation.
    pub operation_id: String,
    /// List state re-read after confirmation.
    pub state: ListState,
}

fn require_non_empty(field: &'static str, value: &str) -> Result<(), ClientError> {
    if value.trim().is_empty() {
        return Err(ClientError::Validation {
            field,
            message: "must be a non-empty string".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_request_note_defaults() {
        let request: AddRequest =
            serde_json::from_str(r#"{"name":"Eggs","qty":"12","category":"Dairy"}"#).unwrap();
        assert!(request.validate().is_ok());
        assert_eq!(request.note_or_default(), "");
    }

    #[test]
    fn empty_required_field_fails_validation() {
        let request = AddRequest {
            name: "  ".to_string(),
            qty: "1".to_string(),
            category: "Dairy".to_string(),
            note: None,
        };
        let err = request.validate().unwrap_err();
        assert!(matches!(err, ClientError::Validation { field: "name", .. }));
    }

    #[test]
    fn update_request_round_trips_index_as_number() {
        let request: UpdateRequest = serde_json::from_str(
            r#"{"index":2,"name":"Bread","qty":"2","category":"Bakery","note":"Whole wheat"}"#,
        )
        .unwrap();
        assert_eq!(request.index, 2);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn non_numeric_index_is_rejected_by_deserialization() {
        let result: Result<RemoveRequest, _> = serde_json::from_str(r#"{"index":"1"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn mutation_response_uses_camel_case() {
        let response = MutationResponse {
            operation_id: "TX1".to_string(),
            state: ListState::default(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["operationId"], "TX1");
        assert_eq!(json["state"]["count"], 0);
    }
}
