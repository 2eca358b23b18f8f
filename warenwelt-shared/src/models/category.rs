use serde::{Deserialize, Serialize};

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductCategoryRead {
    pub id: i64,
    pub name: String,
}

/// Payload for creating a category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductCategoryCreate {
    pub name: String,
}

/// Payload for renaming a category.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductCategoryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_roundtrip() {
        let category = ProductCategoryRead {
            id: 4,
            name: "Bücher".to_string(),
        };
        let json = serde_json::to_string(&category).unwrap();
        let back: ProductCategoryRead = serde_json::from_str(&json).unwrap();
        assert_eq!(back, category);
    }

    #[test]
    fn empty_update_serializes_to_empty_object() {
        let json = serde_json::to_string(&ProductCategoryUpdate::default()).unwrap();
        assert_eq!(json, "{}");
    }
}
