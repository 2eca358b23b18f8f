use std::{fmt, str::FromStr};

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::category::ProductCategoryRead;
use super::supplier::SupplierRead;
use super::tax_rate::TaxRateRead;

/// How an article entered the shop: on commission for a supplier, or bought
/// in as new ware.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductType {
    #[default]
    Commission,
    NewWare,
}

impl ProductType {
    /// Both kinds, in display order.
    pub const ALL: [ProductType; 2] = [ProductType::Commission, ProductType::NewWare];

    /// Wire representation used by the API.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Commission => "COMMISSION",
            Self::NewWare => "NEW_WARE",
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductType {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "COMMISSION" => Ok(Self::Commission),
            "NEW_WARE" => Ok(Self::NewWare),
            _ => Err("unknown product type"),
        }
    }
}

/// Sale lifecycle of an article.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductStatus {
    #[default]
    InStock,
    Sold,
    Returned,
    Donated,
    Reserved,
}

impl ProductStatus {
    /// All states, in display order.
    pub const ALL: [ProductStatus; 5] = [
        ProductStatus::InStock,
        ProductStatus::Sold,
        ProductStatus::Returned,
        ProductStatus::Donated,
        ProductStatus::Reserved,
    ];

    /// Wire representation used by the API.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InStock => "IN_STOCK",
            Self::Sold => "SOLD",
            Self::Returned => "RETURNED",
            Self::Donated => "DONATED",
            Self::Reserved => "RESERVED",
        }
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductStatus {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "IN_STOCK" => Ok(Self::InStock),
            "SOLD" => Ok(Self::Sold),
            "RETURNED" => Ok(Self::Returned),
            "DONATED" => Ok(Self::Donated),
            "RESERVED" => Ok(Self::Reserved),
            _ => Err("unknown product status"),
        }
    }
}

/// An article in the catalog, with its related records embedded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductRead {
    pub id: i64,
    pub name: String,
    pub sku: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub supplier_id: i64,
    pub category_id: i64,
    pub tax_rate_id: i64,
    pub purchase_price: f64,
    pub selling_price: f64,
    pub product_type: ProductType,
    pub status: ProductStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shelf_location: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub supplier: SupplierRead,
    pub category: ProductCategoryRead,
    pub tax_rate: TaxRateRead,
}

/// Payload for creating an article. The SKU is generated server-side when
/// omitted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub supplier_id: i64,
    pub category_id: i64,
    pub tax_rate_id: i64,
    pub purchase_price: f64,
    pub selling_price: f64,
    pub product_type: ProductType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProductStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shelf_location: Option<String>,
}

/// Payload for updating an article; only the set fields are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_rate_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selling_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<ProductType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProductStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shelf_location: Option<String>,
}

/// Data for a printable price tag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceTagData {
    pub product_name: String,
    pub sku: String,
    pub selling_price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_type_wire_strings() {
        assert_eq!(
            serde_json::to_string(&ProductType::Commission).unwrap(),
            "\"COMMISSION\""
        );
        assert_eq!(
            serde_json::to_string(&ProductType::NewWare).unwrap(),
            "\"NEW_WARE\""
        );
        let parsed: ProductType = serde_json::from_str("\"NEW_WARE\"").unwrap();
        assert_eq!(parsed, ProductType::NewWare);
    }

    #[test]
    fn enum_helpers_round_trip() {
        for kind in ProductType::ALL {
            assert_eq!(kind.as_str().parse::<ProductType>(), Ok(kind));
        }
        for status in ProductStatus::ALL {
            assert_eq!(status.as_str().parse::<ProductStatus>(), Ok(status));
        }
        assert!("GONE".parse::<ProductStatus>().is_err());
        assert_eq!(ProductType::default(), ProductType::Commission);
        assert_eq!(ProductStatus::default(), ProductStatus::InStock);
    }

    #[test]
    fn product_status_wire_strings() {
        for (status, wire) in [
            (ProductStatus::InStock, "\"IN_STOCK\""),
            (ProductStatus::Sold, "\"SOLD\""),
            (ProductStatus::Returned, "\"RETURNED\""),
            (ProductStatus::Donated, "\"DONATED\""),
            (ProductStatus::Reserved, "\"RESERVED\""),
        ] {
            assert_eq!(serde_json::to_string(&status).unwrap(), wire);
        }
    }

    #[test]
    fn create_payload_skips_unset_optionals() {
        let payload = ProductCreate {
            name: "Vase, blau".to_string(),
            sku: None,
            description: None,
            supplier_id: 3,
            category_id: 2,
            tax_rate_id: 1,
            purchase_price: 4.0,
            selling_price: 9.5,
            product_type: ProductType::Commission,
            status: None,
            entry_date: None,
            shelf_location: None,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("sku").is_none());
        assert!(json.get("status").is_none());
        assert_eq!(json["product_type"], "COMMISSION");
        assert_eq!(json["selling_price"], 9.5);
    }

    #[test]
    fn price_tag_deserializes() {
        let json = r#"{"product_name": "Vase, blau", "sku": "WW-000123", "selling_price": 9.5}"#;
        let tag: PriceTagData = serde_json::from_str(json).unwrap();
        assert_eq!(tag.sku, "WW-000123");
    }
}
