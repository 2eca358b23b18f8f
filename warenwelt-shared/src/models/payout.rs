use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::{sale::SaleItemRead, supplier::SupplierRead};

/// One commission item still owed to a supplier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayoutSummaryItem {
    pub product_id: i64,
    pub product_sku: String,
    pub product_name: String,
    pub sale_id: i64,
    pub sale_transaction_number: String,
    pub sale_date: NaiveDateTime,
    pub commission_amount: f64,
}

/// What a supplier is currently owed across all unpaid sale items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SupplierPayoutSummary {
    pub supplier_id: i64,
    pub supplier_name: String,
    pub total_due: f64,
    pub eligible_items_count: i64,
    #[serde(default)]
    pub items_preview: Vec<PayoutSummaryItem>,
}

/// Payload for paying out everything a supplier is currently owed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayoutCreate {
    pub supplier_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A completed supplier payout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayoutRead {
    pub id: i64,
    pub payout_number: String,
    pub supplier_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payout_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub total_amount: f64,
    pub supplier: SupplierRead,
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub items_paid_out: Vec<SaleItemRead>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_deserializes_api_shape() {
        let json = r#"{
            "supplier_id": 7,
            "supplier_name": "Trödel & Co",
            "total_due": 33.5,
            "eligible_items_count": 2,
            "items_preview": [
                {
                    "product_id": 3,
                    "product_sku": "WW-000003",
                    "product_name": "Vase, blau",
                    "sale_id": 9,
                    "sale_transaction_number": "TRX-0A1B2C3D4E5F",
                    "sale_date": "2024-05-04T13:37:00",
                    "commission_amount": 11.0
                }
            ]
        }"#;
        let summary: SupplierPayoutSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.eligible_items_count, 2);
        assert_eq!(summary.items_preview[0].product_sku, "WW-000003");
    }

    #[test]
    fn summary_tolerates_missing_preview() {
        let json = r#"{
            "supplier_id": 7,
            "supplier_name": "Trödel & Co",
            "total_due": 0,
            "eligible_items_count": 0
        }"#;
        let summary: SupplierPayoutSummary = serde_json::from_str(json).unwrap();
        assert!(summary.items_preview.is_empty());
    }

    #[test]
    fn create_omits_unset_optionals() {
        let create = PayoutCreate {
            supplier_id: 7,
            payout_date: None,
            notes: None,
        };
        assert_eq!(
            serde_json::to_string(&create).unwrap(),
            r#"{"supplier_id":7}"#
        );
    }
}
