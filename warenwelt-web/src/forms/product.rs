use shared::models::{ProductCreate, ProductRead, ProductStatus, ProductType, ProductUpdate};

use super::validation::{
    ValidationError, optional_trimmed, parse_optional_date, parse_required_id,
    parse_strictly_positive_price, validate_required,
};

/// Raw state of the article form. Select values arrive as strings straight
/// from the DOM and are only parsed during validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub supplier_id: String,
    pub category_id: String,
    pub tax_rate_id: String,
    pub purchase_price: String,
    pub selling_price: String,
    pub product_type: ProductType,
    pub status: ProductStatus,
    pub entry_date: String,
    pub shelf_location: String,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            supplier_id: String::new(),
            category_id: String::new(),
            tax_rate_id: String::new(),
            purchase_price: String::new(),
            selling_price: String::new(),
            product_type: ProductType::Commission,
            status: ProductStatus::InStock,
            entry_date: String::new(),
            shelf_location: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFormErrors {
    pub name: Option<ValidationError>,
    pub supplier_id: Option<ValidationError>,
    pub category_id: Option<ValidationError>,
    pub tax_rate_id: Option<ValidationError>,
    pub purchase_price: Option<ValidationError>,
    pub selling_price: Option<ValidationError>,
    pub entry_date: Option<ValidationError>,
}

impl ProductFormErrors {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl ProductDraft {
    pub fn from_product(product: &ProductRead) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone().unwrap_or_default(),
            supplier_id: product.supplier_id.to_string(),
            category_id: product.category_id.to_string(),
            tax_rate_id: product.tax_rate_id.to_string(),
            purchase_price: product.purchase_price.to_string(),
            selling_price: product.selling_price.to_string(),
            product_type: product.product_type,
            status: product.status,
            entry_date: product
                .entry_date
                .map(|date| date.to_string())
                .unwrap_or_default(),
            shelf_location: product.shelf_location.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<ProductCreate, ProductFormErrors> {
        let mut errors = ProductFormErrors::default();

        let name = match validate_required(&self.name) {
            Ok(name) => name,
            Err(err) => {
                errors.name = Some(err);
                String::new()
            }
        };
        let supplier_id = parse_required_id(&self.supplier_id).unwrap_or_else(|err| {
            errors.supplier_id = Some(err);
            0
        });
        let category_id = parse_required_id(&self.category_id).unwrap_or_else(|err| {
            errors.category_id = Some(err);
            0
        });
        let tax_rate_id = parse_required_id(&self.tax_rate_id).unwrap_or_else(|err| {
            errors.tax_rate_id = Some(err);
            0
        });
        let purchase_price = parse_strictly_positive_price(&self.purchase_price)
            .unwrap_or_else(|err| {
                errors.purchase_price = Some(err);
                0.0
            });
        let selling_price = parse_strictly_positive_price(&self.selling_price)
            .unwrap_or_else(|err| {
                errors.selling_price = Some(err);
                0.0
            });
        let entry_date = parse_optional_date(&self.entry_date).unwrap_or_else(|err| {
            errors.entry_date = Some(err);
            None
        });

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(ProductCreate {
            name,
            sku: None,
            description: optional_trimmed(&self.description),
            supplier_id,
            category_id,
            tax_rate_id,
            purchase_price,
            selling_price,
            product_type: self.product_type,
            status: Some(self.status),
            entry_date,
            shelf_location: optional_trimmed(&self.shelf_location),
        })
    }

    /// Full-state update payload; every field the form carries is sent.
    pub fn validate_update(&self) -> Result<ProductUpdate, ProductFormErrors> {
        let create = self.validate()?;
        Ok(ProductUpdate {
            name: Some(create.name),
            description: create.description,
            supplier_id: Some(create.supplier_id),
            category_id: Some(create.category_id),
            tax_rate_id: Some(create.tax_rate_id),
            purchase_price: Some(create.purchase_price),
            selling_price: Some(create.selling_price),
            product_type: Some(create.product_type),
            status: create.status,
            entry_date: create.entry_date,
            shelf_location: create.shelf_location,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> ProductDraft {
        ProductDraft {
            name: "Vase, blau".to_string(),
            supplier_id: "3".to_string(),
            category_id: "2".to_string(),
            tax_rate_id: "1".to_string(),
            purchase_price: "4,00".to_string(),
            selling_price: "9,50".to_string(),
            ..ProductDraft::default()
        }
    }

    #[test]
    fn empty_form_flags_all_required_fields() {
        let errors = ProductDraft::default().validate().unwrap_err();
        assert_eq!(errors.name, Some(ValidationError::Required));
        assert_eq!(errors.supplier_id, Some(ValidationError::Required));
        assert_eq!(errors.category_id, Some(ValidationError::Required));
        assert_eq!(errors.tax_rate_id, Some(ValidationError::Required));
        assert_eq!(errors.purchase_price, Some(ValidationError::Required));
        assert_eq!(errors.selling_price, Some(ValidationError::Required));
    }

    #[test]
    fn prices_must_be_strictly_positive() {
        let draft = ProductDraft {
            purchase_price: "0".to_string(),
            selling_price: "-2".to_string(),
            ..valid_draft()
        };
        let errors = draft.validate().unwrap_err();
        assert_eq!(
            errors.purchase_price,
            Some(ValidationError::NotAPositiveNumber)
        );
        assert_eq!(
            errors.selling_price,
            Some(ValidationError::NotAPositiveNumber)
        );
    }

    #[test]
    fn valid_form_builds_the_payload() {
        let payload = valid_draft().validate().unwrap();
        assert_eq!(payload.name, "Vase, blau");
        assert_eq!(payload.supplier_id, 3);
        assert_eq!(payload.sku, None);
        assert_eq!(payload.product_type, ProductType::Commission);
        assert_eq!(payload.status, Some(ProductStatus::InStock));
        assert!((payload.selling_price - 9.5).abs() < f64::EPSILON);
    }

    #[test]
    fn bad_entry_date_is_flagged() {
        let draft = ProductDraft {
            entry_date: "04.05.2024".to_string(),
            ..valid_draft()
        };
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.entry_date, Some(ValidationError::InvalidDate));
    }
}
