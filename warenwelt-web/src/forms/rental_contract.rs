use shared::models::{
    RentalContractCreate, RentalContractRead, RentalContractStatus, RentalContractUpdate,
};

use super::validation::{
    ValidationError, optional_trimmed, parse_required_date, parse_required_id,
    parse_strictly_positive_price,
};

/// Raw state of the rental contract form dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct RentalContractDraft {
    pub shelf_id: String,
    pub tenant_supplier_id: String,
    pub start_date: String,
    pub end_date: String,
    pub rent_price_at_signing: String,
    pub payment_terms: String,
    pub status: RentalContractStatus,
    pub contract_number: String,
}

impl Default for RentalContractDraft {
    fn default() -> Self {
        Self {
            shelf_id: String::new(),
            tenant_supplier_id: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            rent_price_at_signing: String::new(),
            payment_terms: String::new(),
            status: RentalContractStatus::Pending,
            contract_number: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RentalContractFormErrors {
    pub shelf_id: Option<ValidationError>,
    pub tenant_supplier_id: Option<ValidationError>,
    pub start_date: Option<ValidationError>,
    pub end_date: Option<ValidationError>,
    pub rent_price_at_signing: Option<ValidationError>,
}

impl RentalContractFormErrors {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl RentalContractDraft {
    pub fn from_contract(contract: &RentalContractRead) -> Self {
        Self {
            shelf_id: contract.shelf_id.to_string(),
            tenant_supplier_id: contract.tenant_supplier_id.to_string(),
            start_date: contract.start_date.to_string(),
            end_date: contract.end_date.to_string(),
            rent_price_at_signing: contract.rent_price_at_signing.to_string(),
            payment_terms: contract.payment_terms.clone().unwrap_or_default(),
            status: contract.status,
            contract_number: contract.contract_number.clone().unwrap_or_default(),
        }
    }

    /// The contract must run for at least a day; equal start and end dates
    /// are rejected along with inverted ranges.
    pub fn validate(&self) -> Result<RentalContractCreate, RentalContractFormErrors> {
        let mut errors = RentalContractFormErrors::default();

        let shelf_id = parse_required_id(&self.shelf_id).unwrap_or_else(|err| {
            errors.shelf_id = Some(err);
            0
        });
        let tenant_supplier_id =
            parse_required_id(&self.tenant_supplier_id).unwrap_or_else(|err| {
                errors.tenant_supplier_id = Some(err);
                0
            });
        let start_date = match parse_required_date(&self.start_date) {
            Ok(date) => Some(date),
            Err(err) => {
                errors.start_date = Some(err);
                None
            }
        };
        let end_date = match parse_required_date(&self.end_date) {
            Ok(date) => Some(date),
            Err(err) => {
                errors.end_date = Some(err);
                None
            }
        };
        if let (Some(start), Some(end)) = (start_date, end_date)
            && end <= start
        {
            errors.end_date = Some(ValidationError::EndNotAfterStart);
        }
        let rent_price_at_signing = parse_strictly_positive_price(&self.rent_price_at_signing)
            .unwrap_or_else(|err| {
                errors.rent_price_at_signing = Some(err);
                0.0
            });

        if !errors.is_empty() {
            return Err(errors);
        }
        let (Some(start_date), Some(end_date)) = (start_date, end_date) else {
            return Err(errors);
        };
        Ok(RentalContractCreate {
            shelf_id,
            tenant_supplier_id,
            start_date,
            end_date,
            rent_price_at_signing,
            payment_terms: optional_trimmed(&self.payment_terms),
            status: self.status,
            contract_number: optional_trimmed(&self.contract_number),
        })
    }

    /// Full-state update payload; every field the form carries is sent.
    pub fn validate_update(&self) -> Result<RentalContractUpdate, RentalContractFormErrors> {
        let create = self.validate()?;
        Ok(RentalContractUpdate {
            shelf_id: Some(create.shelf_id),
            tenant_supplier_id: Some(create.tenant_supplier_id),
            start_date: Some(create.start_date),
            end_date: Some(create.end_date),
            rent_price_at_signing: Some(create.rent_price_at_signing),
            payment_terms: create.payment_terms,
            status: Some(create.status),
            contract_number: create.contract_number,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> RentalContractDraft {
        RentalContractDraft {
            shelf_id: "3".to_string(),
            tenant_supplier_id: "7".to_string(),
            start_date: "2024-07-01".to_string(),
            end_date: "2024-12-31".to_string(),
            rent_price_at_signing: "25,00".to_string(),
            ..RentalContractDraft::default()
        }
    }

    #[test]
    fn empty_form_flags_every_required_field() {
        let errors = RentalContractDraft::default().validate().unwrap_err();
        assert_eq!(errors.shelf_id, Some(ValidationError::Required));
        assert_eq!(errors.tenant_supplier_id, Some(ValidationError::Required));
        assert_eq!(errors.start_date, Some(ValidationError::Required));
        assert_eq!(errors.end_date, Some(ValidationError::Required));
        assert_eq!(
            errors.rent_price_at_signing,
            Some(ValidationError::Required)
        );
    }

    #[test]
    fn end_date_must_come_after_start() {
        let draft = RentalContractDraft {
            end_date: "2024-07-01".to_string(),
            ..valid_draft()
        };
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.end_date, Some(ValidationError::EndNotAfterStart));
        assert_eq!(errors.start_date, None);
    }

    #[test]
    fn rent_must_be_strictly_positive() {
        let draft = RentalContractDraft {
            rent_price_at_signing: "0".to_string(),
            ..valid_draft()
        };
        let errors = draft.validate().unwrap_err();
        assert_eq!(
            errors.rent_price_at_signing,
            Some(ValidationError::NotAPositiveNumber)
        );
    }

    #[test]
    fn valid_form_builds_the_payload() {
        let payload = valid_draft().validate().unwrap();
        assert_eq!(payload.shelf_id, 3);
        assert_eq!(payload.tenant_supplier_id, 7);
        assert_eq!(payload.status, RentalContractStatus::Pending);
        assert_eq!(payload.contract_number, None);
        assert!((payload.rent_price_at_signing - 25.0).abs() < f64::EPSILON);
    }
}
