use std::{fmt, str::FromStr};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// How a sale was paid.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    #[default]
    Cash,
    Card,
    Voucher,
    Mixed,
}

impl PaymentMethod {
    /// All methods, in display order.
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Cash,
        PaymentMethod::Card,
        PaymentMethod::Voucher,
        PaymentMethod::Mixed,
    ];

    /// Wire representation used by the API.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cash => "CASH",
            Self::Card => "CARD",
            Self::Voucher => "VOUCHER",
            Self::Mixed => "MIXED",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "CASH" => Ok(Self::Cash),
            "CARD" => Ok(Self::Card),
            "VOUCHER" => Ok(Self::Voucher),
            "MIXED" => Ok(Self::Mixed),
            _ => Err("unknown payment method"),
        }
    }
}

/// One line of a sale to be recorded.
///
/// The product is addressed either by SKU (scanner input) or by id.
/// Prices are never sent; the back end snapshots them from the product.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SaleItemCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i64>,
    pub quantity: i64,
}

/// Payload for recording a sale at the register.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SaleCreate {
    pub items: Vec<SaleItemCreate>,
    pub payment_method: PaymentMethod,
}

/// A recorded sale line with prices frozen at transaction time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SaleItemRead {
    pub id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub price_at_sale: f64,
    pub commission_amount_at_sale: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payout_id: Option<i64>,
}

/// A completed register transaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SaleRead {
    pub id: i64,
    pub transaction_number: String,
    pub user_id: i64,
    pub total_amount: f64,
    pub payment_method: PaymentMethod,
    pub transaction_time: NaiveDateTime,
    #[serde(default)]
    pub items: Vec<SaleItemRead>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_method_wire_roundtrip() {
        for (text, method) in [
            ("CASH", PaymentMethod::Cash),
            ("CARD", PaymentMethod::Card),
            ("VOUCHER", PaymentMethod::Voucher),
            ("MIXED", PaymentMethod::Mixed),
        ] {
            assert_eq!(method.as_str(), text);
            assert_eq!(PaymentMethod::from_str(text).unwrap(), method);
            assert_eq!(
                serde_json::to_string(&method).unwrap(),
                format!("\"{text}\"")
            );
        }
        assert!(PaymentMethod::from_str("BARTER").is_err());
    }

    #[test]
    fn create_payload_by_sku() {
        let sale = SaleCreate {
            items: vec![SaleItemCreate {
                sku: Some("WW-000123".into()),
                product_id: None,
                quantity: 1,
            }],
            payment_method: PaymentMethod::Cash,
        };
        let json = serde_json::to_string(&sale).unwrap();
        assert!(json.contains(r#""sku":"WW-000123""#));
        assert!(!json.contains("product_id"));
        assert!(json.contains(r#""payment_method":"CASH""#));
    }

    #[test]
    fn read_deserializes_api_shape() {
        let json = r#"{
            "id": 9,
            "transaction_number": "TRX-0A1B2C3D4E5F",
            "user_id": 1,
            "total_amount": 27.5,
            "payment_method": "CARD",
            "transaction_time": "2024-05-04T13:37:00",
            "items": [
                {
                    "id": 14,
                    "product_id": 3,
                    "quantity": 1,
                    "price_at_sale": 27.5,
                    "commission_amount_at_sale": 11.0,
                    "payout_id": null
                }
            ]
        }"#;
        let sale: SaleRead = serde_json::from_str(json).unwrap();
        assert_eq!(sale.payment_method, PaymentMethod::Card);
        assert_eq!(sale.items.len(), 1);
        assert_eq!(sale.items[0].payout_id, None);
        assert!((sale.total_amount - 27.5).abs() < f64::EPSILON);
    }
}
