use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A supplier (consignor) as returned by the API.
///
/// Suppliers are either companies or private persons; the API guarantees that
/// at least a company name or a first/last name pair is present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SupplierRead {
    pub id: i64,
    pub supplier_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub is_internal: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl SupplierRead {
    /// Human-readable name: the company name, else "first last", else
    /// whichever half exists, else the supplier number.
    #[must_use]
    pub fn display_name(&self) -> String {
        display_name(
            self.company_name.as_deref(),
            self.first_name.as_deref(),
            self.last_name.as_deref(),
            &self.supplier_number,
        )
    }
}

/// Payload for creating a supplier.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SupplierCreate {
    pub supplier_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub is_internal: bool,
}

/// Payload for updating a supplier; only the set fields are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SupplierUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_internal: Option<bool>,
}

/// Minimal supplier record embedded in other responses, e.g. rental contracts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SupplierBasicRead {
    pub id: i64,
    pub supplier_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl SupplierBasicRead {
    /// Same display rules as [`SupplierRead::display_name`].
    #[must_use]
    pub fn display_name(&self) -> String {
        display_name(
            self.company_name.as_deref(),
            self.first_name.as_deref(),
            self.last_name.as_deref(),
            &self.supplier_number,
        )
    }
}

fn display_name(
    company: Option<&str>,
    first: Option<&str>,
    last: Option<&str>,
    number: &str,
) -> String {
    if let Some(company) = company {
        return company.to_string();
    }
    match (first, last) {
        (Some(first), Some(last)) => format!("{first} {last}"),
        (Some(first), None) => first.to_string(),
        (None, Some(last)) => last.to_string(),
        (None, None) => number.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basic(
        company: Option<&str>,
        first: Option<&str>,
        last: Option<&str>,
    ) -> SupplierBasicRead {
        SupplierBasicRead {
            id: 1,
            supplier_number: "LF-0001".to_string(),
            company_name: company.map(str::to_string),
            first_name: first.map(str::to_string),
            last_name: last.map(str::to_string),
        }
    }

    #[test]
    fn display_name_prefers_company() {
        let supplier = basic(Some("Trödel & Co."), Some("Hans"), Some("Wurst"));
        assert_eq!(supplier.display_name(), "Trödel & Co.");
    }

    #[test]
    fn display_name_joins_person_names() {
        assert_eq!(basic(None, Some("Hans"), Some("Wurst")).display_name(), "Hans Wurst");
        assert_eq!(basic(None, Some("Hans"), None).display_name(), "Hans");
        assert_eq!(basic(None, None, Some("Wurst")).display_name(), "Wurst");
    }

    #[test]
    fn display_name_falls_back_to_number() {
        assert_eq!(basic(None, None, None).display_name(), "LF-0001");
    }

    #[test]
    fn create_omits_unset_fields() {
        let payload = SupplierCreate {
            supplier_number: "LF-0002".to_string(),
            company_name: Some("Antik GmbH".to_string()),
            ..SupplierCreate::default()
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["supplier_number"], "LF-0002");
        assert_eq!(json["company_name"], "Antik GmbH");
        assert!(json.get("first_name").is_none());
        assert!(json.get("email").is_none());
    }

    #[test]
    fn read_deserializes_api_shape() {
        let json = r#"{
            "id": 3,
            "supplier_number": "LF-0003",
            "company_name": null,
            "first_name": "Maria",
            "last_name": "Krause",
            "email": "maria@example.org",
            "phone": null,
            "is_internal": false,
            "created_at": "2024-04-02T09:30:00",
            "updated_at": "2024-04-02T09:30:00"
        }"#;
        let supplier: SupplierRead = serde_json::from_str(json).unwrap();
        assert_eq!(supplier.display_name(), "Maria Krause");
        assert!(!supplier.is_internal);
    }
}
