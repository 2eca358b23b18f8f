use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{shelf::ShelfBasicRead, supplier::SupplierBasicRead};

/// Lifecycle state of a shelf rental contract.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RentalContractStatus {
    Active,
    Expired,
    Terminated,
    #[default]
    Pending,
}

impl RentalContractStatus {
    /// All states, in display order.
    pub const ALL: [RentalContractStatus; 4] = [
        RentalContractStatus::Pending,
        RentalContractStatus::Active,
        RentalContractStatus::Expired,
        RentalContractStatus::Terminated,
    ];

    /// Wire representation used by the API.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Expired => "EXPIRED",
            Self::Terminated => "TERMINATED",
            Self::Pending => "PENDING",
        }
    }
}

impl fmt::Display for RentalContractStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RentalContractStatus {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "ACTIVE" => Ok(Self::Active),
            "EXPIRED" => Ok(Self::Expired),
            "TERMINATED" => Ok(Self::Terminated),
            "PENDING" => Ok(Self::Pending),
            _ => Err("unknown rental contract status"),
        }
    }
}

/// A shelf rental contract between the shop and a supplier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RentalContractRead {
    pub id: i64,
    pub shelf_id: i64,
    pub tenant_supplier_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub rent_price_at_signing: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_terms: Option<String>,
    pub status: RentalContractStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shelf: Option<ShelfBasicRead>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant: Option<SupplierBasicRead>,
}

/// Payload for creating a rental contract.
///
/// The contract number may be left empty; the back end then assigns one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RentalContractCreate {
    pub shelf_id: i64,
    pub tenant_supplier_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub rent_price_at_signing: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_terms: Option<String>,
    pub status: RentalContractStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_number: Option<String>,
}

/// Payload for updating a rental contract; only the set fields are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RentalContractUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shelf_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_supplier_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rent_price_at_signing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_terms: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RentalContractStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_number: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_wire_roundtrip() {
        for (text, status) in [
            ("ACTIVE", RentalContractStatus::Active),
            ("EXPIRED", RentalContractStatus::Expired),
            ("TERMINATED", RentalContractStatus::Terminated),
            ("PENDING", RentalContractStatus::Pending),
        ] {
            assert_eq!(status.as_str(), text);
            assert_eq!(RentalContractStatus::from_str(text).unwrap(), status);
            assert_eq!(
                serde_json::to_string(&status).unwrap(),
                format!("\"{text}\"")
            );
        }
    }

    #[test]
    fn status_defaults_to_pending() {
        assert_eq!(RentalContractStatus::default(), RentalContractStatus::Pending);
    }

    #[test]
    fn read_deserializes_api_shape() {
        let json = r#"{
            "id": 3,
            "shelf_id": 12,
            "tenant_supplier_id": 7,
            "start_date": "2024-01-01",
            "end_date": "2024-12-31",
            "rent_price_at_signing": 45.0,
            "payment_terms": "Monatlich im Voraus",
            "status": "ACTIVE",
            "contract_number": "RC-2024-001",
            "shelf": {
                "id": 12,
                "name": "Regal A1",
                "monthly_rent_price": 50.0,
                "status": "RENTED"
            },
            "tenant": {
                "id": 7,
                "supplier_number": "LF-0007",
                "company_name": "Trödel & Co"
            }
        }"#;
        let contract: RentalContractRead = serde_json::from_str(json).unwrap();
        assert_eq!(contract.status, RentalContractStatus::Active);
        assert_eq!(
            contract.end_date,
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
        );
        assert_eq!(contract.shelf.unwrap().name, "Regal A1");
        assert_eq!(contract.tenant.unwrap().display_name(), "Trödel & Co");
    }

    #[test]
    fn create_omits_unset_optionals() {
        let create = RentalContractCreate {
            shelf_id: 1,
            tenant_supplier_id: 2,
            start_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 5, 31).unwrap(),
            rent_price_at_signing: 40.0,
            payment_terms: None,
            status: RentalContractStatus::Pending,
            contract_number: None,
        };
        let json = serde_json::to_string(&create).unwrap();
        assert!(!json.contains("payment_terms"));
        assert!(!json.contains("contract_number"));
        assert!(json.contains(r#""status":"PENDING""#));
    }

    #[test]
    fn update_sends_only_set_fields() {
        let update = RentalContractUpdate {
            status: Some(RentalContractStatus::Terminated),
            ..RentalContractUpdate::default()
        };
        assert_eq!(
            serde_json::to_string(&update).unwrap(),
            r#"{"status":"TERMINATED"}"#
        );
    }
}
