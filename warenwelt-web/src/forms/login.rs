use super::validation::ValidationError;

/// Raw state of the login form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginDraft {
    pub email: String,
    pub password: String,
}

/// Checked credentials, ready for the token endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginFormErrors {
    pub email: Option<ValidationError>,
    pub password: Option<ValidationError>,
}

impl LoginDraft {
    pub fn validate(&self) -> Result<LoginCredentials, LoginFormErrors> {
        let mut errors = LoginFormErrors::default();

        let email = self.email.trim();
        if email.is_empty() {
            errors.email = Some(ValidationError::Required);
        } else if !email.contains('@') {
            errors.email = Some(ValidationError::InvalidEmail);
        }
        if self.password.is_empty() {
            errors.password = Some(ValidationError::Required);
        }

        if errors != LoginFormErrors::default() {
            return Err(errors);
        }
        Ok(LoginCredentials {
            email: email.to_string(),
            password: self.password.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_form_reports_both_fields() {
        let errors = LoginDraft::default().validate().unwrap_err();
        assert_eq!(errors.email, Some(ValidationError::Required));
        assert_eq!(errors.password, Some(ValidationError::Required));
    }

    #[test]
    fn email_needs_an_at_sign() {
        let draft = LoginDraft {
            email: "admin.example.org".to_string(),
            password: "secret".to_string(),
        };
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.email, Some(ValidationError::InvalidEmail));
        assert_eq!(errors.password, None);
    }

    #[test]
    fn valid_form_passes_through_trimmed() {
        let draft = LoginDraft {
            email: " admin@warenwelt.de ".to_string(),
            password: "secret".to_string(),
        };
        let credentials = draft.validate().unwrap();
        assert_eq!(credentials.email, "admin@warenwelt.de");
        assert_eq!(credentials.password, "secret");
    }
}
