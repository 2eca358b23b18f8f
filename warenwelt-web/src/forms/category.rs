use shared::models::{ProductCategoryCreate, ProductCategoryRead, ProductCategoryUpdate};

use super::validation::{ValidationError, validate_required};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryDraft {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryFormErrors {
    pub name: Option<ValidationError>,
}

impl CategoryDraft {
    pub fn from_category(category: &ProductCategoryRead) -> Self {
        Self {
            name: category.name.clone(),
        }
    }

    pub fn validate(&self) -> Result<ProductCategoryCreate, CategoryFormErrors> {
        match validate_required(&self.name) {
            Ok(name) => Ok(ProductCategoryCreate { name }),
            Err(err) => Err(CategoryFormErrors { name: Some(err) }),
        }
    }

    pub fn validate_update(&self) -> Result<ProductCategoryUpdate, CategoryFormErrors> {
        let create = self.validate()?;
        Ok(ProductCategoryUpdate {
            name: Some(create.name),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_required() {
        let errors = CategoryDraft::default().validate().unwrap_err();
        assert_eq!(errors.name, Some(ValidationError::Required));
    }

    #[test]
    fn name_is_trimmed() {
        let draft = CategoryDraft {
            name: "  Bücher ".to_string(),
        };
        assert_eq!(draft.validate().unwrap().name, "Bücher");
    }
}
