use shared::models::{ShelfCreate, ShelfRead, ShelfStatus, ShelfUpdate};

use super::validation::{ValidationError, optional_trimmed, parse_required_price, validate_required};

/// Raw state of the shelf form dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct ShelfDraft {
    pub name: String,
    pub monthly_rent_price: String,
    pub status: ShelfStatus,
    pub is_active: bool,
    pub location_description: String,
    pub size_description: String,
}

impl Default for ShelfDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            monthly_rent_price: String::new(),
            status: ShelfStatus::Available,
            is_active: true,
            location_description: String::new(),
            size_description: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShelfFormErrors {
    pub name: Option<ValidationError>,
    pub monthly_rent_price: Option<ValidationError>,
}

impl ShelfFormErrors {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl ShelfDraft {
    pub fn from_shelf(shelf: &ShelfRead) -> Self {
        Self {
            name: shelf.name.clone(),
            monthly_rent_price: shelf.monthly_rent_price.to_string(),
            status: shelf.status,
            is_active: shelf.is_active,
            location_description: shelf.location_description.clone().unwrap_or_default(),
            size_description: shelf.size_description.clone().unwrap_or_default(),
        }
    }

    /// A rent of zero is allowed; internal shelves are rented out for free.
    pub fn validate(&self) -> Result<ShelfCreate, ShelfFormErrors> {
        let mut errors = ShelfFormErrors::default();

        let name = match validate_required(&self.name) {
            Ok(name) => name,
            Err(err) => {
                errors.name = Some(err);
                String::new()
            }
        };
        let monthly_rent_price = match parse_required_price(&self.monthly_rent_price) {
            Ok(price) => price,
            Err(err) => {
                errors.monthly_rent_price = Some(err);
                0.0
            }
        };

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(ShelfCreate {
            name,
            location_description: optional_trimmed(&self.location_description),
            size_description: optional_trimmed(&self.size_description),
            monthly_rent_price,
            status: self.status,
            is_active: self.is_active,
        })
    }

    /// Full-state update payload; every field the form carries is sent.
    pub fn validate_update(&self) -> Result<ShelfUpdate, ShelfFormErrors> {
        let create = self.validate()?;
        Ok(ShelfUpdate {
            name: Some(create.name),
            location_description: create.location_description,
            size_description: create.size_description,
            monthly_rent_price: Some(create.monthly_rent_price),
            status: Some(create.status),
            is_active: Some(create.is_active),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> ShelfDraft {
        ShelfDraft {
            name: "Regal A1".to_string(),
            monthly_rent_price: "25,00".to_string(),
            ..ShelfDraft::default()
        }
    }

    #[test]
    fn new_draft_starts_available_and_active() {
        let draft = ShelfDraft::default();
        assert_eq!(draft.status, ShelfStatus::Available);
        assert!(draft.is_active);
    }

    #[test]
    fn empty_form_flags_name_and_price() {
        let draft = ShelfDraft {
            name: String::new(),
            monthly_rent_price: String::new(),
            ..ShelfDraft::default()
        };
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.name, Some(ValidationError::Required));
        assert_eq!(
            errors.monthly_rent_price,
            Some(ValidationError::Required)
        );
    }

    #[test]
    fn negative_rent_is_not_a_positive_number() {
        let draft = ShelfDraft {
            monthly_rent_price: "-10".to_string(),
            ..valid_draft()
        };
        let errors = draft.validate().unwrap_err();
        assert_eq!(
            errors.monthly_rent_price,
            Some(ValidationError::NotAPositiveNumber)
        );
        assert_eq!(errors.name, None);
    }

    #[test]
    fn small_rent_amounts_are_fine() {
        let draft = ShelfDraft {
            monthly_rent_price: "0.50".to_string(),
            ..valid_draft()
        };
        let payload = draft.validate().unwrap();
        assert!((payload.monthly_rent_price - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn valid_form_builds_the_payload() {
        let payload = valid_draft().validate().unwrap();
        assert_eq!(payload.name, "Regal A1");
        assert!((payload.monthly_rent_price - 25.0).abs() < f64::EPSILON);
        assert_eq!(payload.status, ShelfStatus::Available);
        assert!(payload.is_active);
        assert_eq!(payload.location_description, None);
    }

    #[test]
    fn edit_round_trips_through_the_draft() {
        let shelf = ShelfRead {
            id: 3,
            name: "Regal B2".to_string(),
            location_description: Some("Fenster links".to_string()),
            size_description: None,
            monthly_rent_price: 30.0,
            status: ShelfStatus::Rented,
            is_active: true,
        };
        let update = ShelfDraft::from_shelf(&shelf).validate_update().unwrap();
        assert_eq!(update.name.as_deref(), Some("Regal B2"));
        assert_eq!(update.status, Some(ShelfStatus::Rented));
        assert_eq!(
            update.location_description.as_deref(),
            Some("Fenster links")
        );
    }
}
