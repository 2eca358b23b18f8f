use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A VAT rate; read-only from the front-end, maintained on the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaxRateRead {
    pub id: i64,
    pub name: String,
    /// Percentage, e.g. `19.00` for the regular German rate.
    pub rate_percent: f64,
    #[serde(default)]
    pub is_default_rate: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_api_shape() {
        let json = r#"{
            "id": 1,
            "name": "Regelsatz",
            "rate_percent": 19.0,
            "is_default_rate": true,
            "created_at": "2024-01-01T00:00:00",
            "updated_at": "2024-01-01T00:00:00"
        }"#;
        let rate: TaxRateRead = serde_json::from_str(json).unwrap();
        assert_eq!(rate.name, "Regelsatz");
        assert!(rate.is_default_rate);
        assert!((rate.rate_percent - 19.0).abs() < f64::EPSILON);
    }
}
