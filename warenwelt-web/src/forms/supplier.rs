use shared::models::{SupplierCreate, SupplierRead, SupplierUpdate};

use super::validation::{ValidationError, optional_trimmed, validate_optional_email};

/// Raw state of the supplier form.
///
/// A supplier needs either a company name or a complete person name; the
/// `name` error slot covers that rule as a group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupplierDraft {
    pub supplier_number: String,
    pub company_name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub is_internal: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupplierFormErrors {
    pub supplier_number: Option<ValidationError>,
    pub name: Option<ValidationError>,
    pub email: Option<ValidationError>,
}

impl SupplierFormErrors {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl SupplierDraft {
    pub fn from_supplier(supplier: &SupplierRead) -> Self {
        Self {
            supplier_number: supplier.supplier_number.clone(),
            company_name: supplier.company_name.clone().unwrap_or_default(),
            first_name: supplier.first_name.clone().unwrap_or_default(),
            last_name: supplier.last_name.clone().unwrap_or_default(),
            email: supplier.email.clone().unwrap_or_default(),
            phone: supplier.phone.clone().unwrap_or_default(),
            is_internal: supplier.is_internal,
        }
    }

    fn check(&self) -> Result<SupplierCreate, SupplierFormErrors> {
        let mut errors = SupplierFormErrors::default();

        let supplier_number = self.supplier_number.trim().to_string();
        if supplier_number.is_empty() {
            errors.supplier_number = Some(ValidationError::Required);
        }

        let company_name = optional_trimmed(&self.company_name);
        let first_name = optional_trimmed(&self.first_name);
        let last_name = optional_trimmed(&self.last_name);
        let has_person_name = first_name.is_some() && last_name.is_some();
        if company_name.is_none() && !has_person_name {
            errors.name = Some(ValidationError::Required);
        }

        let email = match validate_optional_email(&self.email) {
            Ok(email) => email,
            Err(err) => {
                errors.email = Some(err);
                None
            }
        };

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(SupplierCreate {
            supplier_number,
            company_name,
            first_name,
            last_name,
            email,
            phone: optional_trimmed(&self.phone),
            is_internal: self.is_internal,
        })
    }

    pub fn validate(&self) -> Result<SupplierCreate, SupplierFormErrors> {
        self.check()
    }

    /// Full-state update payload; every field the form carries is sent.
    pub fn validate_update(&self) -> Result<SupplierUpdate, SupplierFormErrors> {
        let create = self.check()?;
        Ok(SupplierUpdate {
            supplier_number: Some(create.supplier_number),
            company_name: create.company_name,
            first_name: create.first_name,
            last_name: create.last_name,
            email: create.email,
            phone: create.phone,
            is_internal: Some(create.is_internal),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person_draft() -> SupplierDraft {
        SupplierDraft {
            supplier_number: "LF-0005".to_string(),
            first_name: "Maria".to_string(),
            last_name: "Krause".to_string(),
            ..SupplierDraft::default()
        }
    }

    #[test]
    fn empty_form_rejects_number_and_name() {
        let errors = SupplierDraft::default().validate().unwrap_err();
        assert_eq!(errors.supplier_number, Some(ValidationError::Required));
        assert_eq!(errors.name, Some(ValidationError::Required));
        assert_eq!(errors.email, None);
    }

    #[test]
    fn company_name_alone_is_enough() {
        let draft = SupplierDraft {
            supplier_number: "LF-0001".to_string(),
            company_name: "Trödel & Co.".to_string(),
            ..SupplierDraft::default()
        };
        let payload = draft.validate().unwrap();
        assert_eq!(payload.company_name.as_deref(), Some("Trödel & Co."));
        assert_eq!(payload.first_name, None);
    }

    #[test]
    fn half_a_person_name_is_not_enough() {
        let draft = SupplierDraft {
            supplier_number: "LF-0002".to_string(),
            first_name: "Maria".to_string(),
            ..SupplierDraft::default()
        };
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.name, Some(ValidationError::Required));
    }

    #[test]
    fn bad_email_is_flagged() {
        let draft = SupplierDraft {
            email: "maria.example.org".to_string(),
            ..person_draft()
        };
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.email, Some(ValidationError::InvalidEmail));
    }

    #[test]
    fn update_sends_full_state() {
        let update = person_draft().validate_update().unwrap();
        assert_eq!(update.supplier_number.as_deref(), Some("LF-0005"));
        assert_eq!(update.first_name.as_deref(), Some("Maria"));
        assert_eq!(update.is_internal, Some(false));
    }
}
