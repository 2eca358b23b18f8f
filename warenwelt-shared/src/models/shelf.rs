use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Occupancy state of a rental shelf.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShelfStatus {
    #[default]
    Available,
    Rented,
    Maintenance,
}

impl ShelfStatus {
    /// All states, in display order.
    pub const ALL: [ShelfStatus; 3] = [
        ShelfStatus::Available,
        ShelfStatus::Rented,
        ShelfStatus::Maintenance,
    ];

    /// Wire representation used by the API.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "AVAILABLE",
            Self::Rented => "RENTED",
            Self::Maintenance => "MAINTENANCE",
        }
    }
}

impl fmt::Display for ShelfStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShelfStatus {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "AVAILABLE" => Ok(Self::Available),
            "RENTED" => Ok(Self::Rented),
            "MAINTENANCE" => Ok(Self::Maintenance),
            _ => Err("unknown shelf status"),
        }
    }
}

/// A rentable shelf.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShelfRead {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_description: Option<String>,
    pub monthly_rent_price: f64,
    pub status: ShelfStatus,
    pub is_active: bool,
}

/// Payload for creating a shelf.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShelfCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_description: Option<String>,
    pub monthly_rent_price: f64,
    pub status: ShelfStatus,
    pub is_active: bool,
}

/// Payload for updating a shelf; only the set fields are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ShelfUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_rent_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ShelfStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Minimal shelf record embedded in rental contracts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShelfBasicRead {
    pub id: i64,
    pub name: String,
    pub monthly_rent_price: f64,
    pub status: ShelfStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_wire_roundtrip() {
        for (text, status) in [
            ("AVAILABLE", ShelfStatus::Available),
            ("RENTED", ShelfStatus::Rented),
            ("MAINTENANCE", ShelfStatus::Maintenance),
        ] {
            assert_eq!(status.as_str(), text);
            assert_eq!(status.to_string(), text);
            assert_eq!(ShelfStatus::from_str(text).unwrap(), status);
            assert_eq!(
                serde_json::to_string(&status).unwrap(),
                format!("\"{text}\"")
            );
        }
    }

    #[test]
    fn status_invalid() {
        assert!(ShelfStatus::from_str("BROKEN").is_err());
    }

    #[test]
    fn status_defaults_to_available() {
        assert_eq!(ShelfStatus::default(), ShelfStatus::Available);
    }

    #[test]
    fn read_deserializes_api_shape() {
        let json = r#"{
            "id": 12,
            "name": "Regal A1",
            "location_description": "Fensterseite",
            "size_description": "100x50cm",
            "monthly_rent_price": 50.0,
            "status": "AVAILABLE",
            "is_active": true
        }"#;
        let shelf: ShelfRead = serde_json::from_str(json).unwrap();
        assert_eq!(shelf.name, "Regal A1");
        assert_eq!(shelf.status, ShelfStatus::Available);
        assert!(shelf.is_active);
    }

    #[test]
    fn update_sends_only_set_fields() {
        let update = ShelfUpdate {
            status: Some(ShelfStatus::Maintenance),
            ..ShelfUpdate::default()
        };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"status":"MAINTENANCE"}"#);
    }
}
