use chrono::NaiveDate;

/// Why a single form field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    Required,
    NotAPositiveNumber,
    InvalidEmail,
    InvalidDate,
    EndNotAfterStart,
}

impl ValidationError {
    /// Translation key for the matching message, e.g. German "Pflichtfeld".
    pub fn message_key(self) -> &'static str {
        match self {
            Self::Required => "form.errors.required",
            Self::NotAPositiveNumber => "form.errors.positive_number",
            Self::InvalidEmail => "form.errors.email",
            Self::InvalidDate => "form.errors.date",
            Self::EndNotAfterStart => "form.errors.end_before_start",
        }
    }
}

pub fn validate_required(value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::Required)
    } else {
        Ok(trimmed.to_string())
    }
}

/// Trimmed value, or `None` when the field was left blank.
pub fn optional_trimmed(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parse a price field. A comma works as decimal separator, since that is
/// what German keyboards produce. Zero is allowed here; use
/// [`parse_strictly_positive_price`] where it is not.
pub fn parse_required_price(value: &str) -> Result<f64, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required);
    }
    let normalized = trimmed.replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => Ok(price),
        _ => Err(ValidationError::NotAPositiveNumber),
    }
}

pub fn parse_strictly_positive_price(value: &str) -> Result<f64, ValidationError> {
    let price = parse_required_price(value)?;
    if price > 0.0 {
        Ok(price)
    } else {
        Err(ValidationError::NotAPositiveNumber)
    }
}

/// Empty is fine; anything else must at least look like an address.
pub fn validate_optional_email(value: &str) -> Result<Option<String>, ValidationError> {
    match optional_trimmed(value) {
        None => Ok(None),
        Some(email) if email.contains('@') => Ok(Some(email)),
        Some(_) => Err(ValidationError::InvalidEmail),
    }
}

/// Parse the value of a date input (`YYYY-MM-DD`).
pub fn parse_required_date(value: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| ValidationError::InvalidDate)
}

pub fn parse_optional_date(value: &str) -> Result<Option<NaiveDate>, ValidationError> {
    match optional_trimmed(value) {
        None => Ok(None),
        Some(text) => NaiveDate::parse_from_str(&text, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| ValidationError::InvalidDate),
    }
}

/// Parse the value of a record select. The empty "please choose" option
/// counts as a missing required field.
pub fn parse_required_id(value: &str) -> Result<i64, ValidationError> {
    match value.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ValidationError::Required),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_blank_input() {
        assert_eq!(validate_required(""), Err(ValidationError::Required));
        assert_eq!(validate_required("   "), Err(ValidationError::Required));
        assert_eq!(validate_required(" Regal A1 "), Ok("Regal A1".to_string()));
    }

    #[test]
    fn price_accepts_comma_separator() {
        assert_eq!(parse_required_price("0,50"), Ok(0.5));
        assert_eq!(parse_required_price("19.99"), Ok(19.99));
        assert_eq!(parse_required_price(" 5 "), Ok(5.0));
    }

    #[test]
    fn price_rejects_negative_and_garbage() {
        assert_eq!(parse_required_price(""), Err(ValidationError::Required));
        assert_eq!(
            parse_required_price("-10"),
            Err(ValidationError::NotAPositiveNumber)
        );
        assert_eq!(
            parse_required_price("zehn"),
            Err(ValidationError::NotAPositiveNumber)
        );
    }

    #[test]
    fn price_zero_only_where_allowed() {
        assert_eq!(parse_required_price("0"), Ok(0.0));
        assert_eq!(
            parse_strictly_positive_price("0"),
            Err(ValidationError::NotAPositiveNumber)
        );
        assert_eq!(parse_strictly_positive_price("0,01"), Ok(0.01));
    }

    #[test]
    fn email_is_optional_but_checked() {
        assert_eq!(validate_optional_email(""), Ok(None));
        assert_eq!(
            validate_optional_email("maria@example.org"),
            Ok(Some("maria@example.org".to_string()))
        );
        assert_eq!(
            validate_optional_email("maria.example.org"),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn dates_parse_the_input_format() {
        assert_eq!(
            parse_required_date("2024-07-01"),
            Ok(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap())
        );
        assert_eq!(parse_required_date(""), Err(ValidationError::Required));
        assert_eq!(
            parse_required_date("01.07.2024"),
            Err(ValidationError::InvalidDate)
        );
        assert_eq!(parse_optional_date(""), Ok(None));
    }

    #[test]
    fn select_ids_must_be_chosen() {
        assert_eq!(parse_required_id("7"), Ok(7));
        assert_eq!(parse_required_id(""), Err(ValidationError::Required));
        assert_eq!(parse_required_id("0"), Err(ValidationError::Required));
        assert_eq!(parse_required_id("abc"), Err(ValidationError::Required));
    }

    #[test]
    fn message_keys_are_stable() {
        assert_eq!(
            ValidationError::Required.message_key(),
            "form.errors.required"
        );
        assert_eq!(
            ValidationError::NotAPositiveNumber.message_key(),
            "form.errors.positive_number"
        );
    }
}
