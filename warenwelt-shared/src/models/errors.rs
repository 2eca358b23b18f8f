use serde::{Deserialize, Serialize};

/// Error body returned by the Warenwelt API.
///
/// The `detail` field is a plain message for most errors, but request
/// validation failures carry a list of per-field issues instead.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ErrorResponse {
    pub detail: ErrorDetail,
}

/// The two shapes the API uses for `detail`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Issues(Vec<ValidationIssue>),
}

/// One field-level request validation issue.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ValidationIssue {
    /// Location path of the offending field, mixed strings and indices.
    #[serde(default)]
    pub loc: Vec<serde_json::Value>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl ErrorResponse {
    /// Creates an error response with a plain message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            detail: ErrorDetail::Message(message.into()),
        }
    }

    /// Flattens `detail` into a single displayable message.
    #[must_use]
    pub fn message(&self) -> String {
        match &self.detail {
            ErrorDetail::Message(message) => message.clone(),
            ErrorDetail::Issues(issues) => issues
                .iter()
                .map(|issue| {
                    let field = issue
                        .loc
                        .iter()
                        .filter_map(serde_json::Value::as_str)
                        .filter(|part| *part != "body")
                        .collect::<Vec<_>>()
                        .join(".");
                    if field.is_empty() {
                        issue.msg.clone()
                    } else {
                        format!("{field}: {}", issue.msg)
                    }
                })
                .collect::<Vec<_>>()
                .join("; "),
        }
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for ErrorResponse {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_detail_message() {
        let json = r#"{"detail": "Sale not found"}"#;
        let error: ErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(error.message(), "Sale not found");
        assert_eq!(error.to_string(), "Sale not found");
    }

    #[test]
    fn validation_detail_flattens_to_field_messages() {
        let json = r#"{
            "detail": [
                {
                    "loc": ["body", "monthly_rent_price"],
                    "msg": "ensure this value is greater than 0",
                    "type": "value_error.number.not_gt"
                },
                {
                    "loc": ["body", "name"],
                    "msg": "field required",
                    "type": "value_error.missing"
                }
            ]
        }"#;
        let error: ErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            error.message(),
            "monthly_rent_price: ensure this value is greater than 0; name: field required"
        );
    }

    #[test]
    fn numeric_loc_parts_are_skipped() {
        let json = r#"{
            "detail": [
                {
                    "loc": ["body", "items", 0, "quantity"],
                    "msg": "field required",
                    "type": "value_error.missing"
                }
            ]
        }"#;
        let error: ErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(error.message(), "items.quantity: field required");
    }

    #[test]
    fn constructor_produces_plain_detail() {
        let error = ErrorResponse::new("Kein Zugriff");
        assert_eq!(
            serde_json::to_string(&error).unwrap(),
            r#"{"detail":"Kein Zugriff"}"#
        );
    }
}
