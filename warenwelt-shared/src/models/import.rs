use serde::{Deserialize, Serialize};

/// One rejected CSV row with the reason and the raw row data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImportRowError {
    pub row: i64,
    pub message: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

/// Outcome of a CSV bulk import.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImportResult {
    pub imported_count: i64,
    pub skipped_count: i64,
    #[serde(default)]
    pub errors: Vec<ImportRowError>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_api_shape() {
        let json = r#"{
            "imported_count": 12,
            "skipped_count": 2,
            "errors": [
                {
                    "row": 4,
                    "message": "Lieferantennummer 'LF-0007' existiert bereits.",
                    "data": {"supplier_number": "LF-0007"}
                },
                {
                    "row": 9,
                    "message": "Fehlende Pflichtwert: supplier_number",
                    "data": {}
                }
            ]
        }"#;
        let result: ImportResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.imported_count, 12);
        assert_eq!(result.errors.len(), 2);
        assert_eq!(result.errors[0].row, 4);
        assert_eq!(result.errors[0].data["supplier_number"], "LF-0007");
    }

    #[test]
    fn clean_import_has_no_errors() {
        let json = r#"{"imported_count": 5, "skipped_count": 0, "errors": []}"#;
        let result: ImportResult = serde_json::from_str(json).unwrap();
        assert!(result.errors.is_empty());
    }
}
