use serde::{Deserialize, Serialize};

/// A role assigned to a back-office account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoleRead {
    /// Unique identifier of the role.
    pub id: i64,

    /// Role name, e.g. `Admin` or `Mitarbeiter`.
    pub name: String,

    /// Optional free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The authenticated employee as returned by `/auth/me`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserRead {
    /// Unique identifier of the user.
    pub id: i64,

    /// Login email address.
    pub email: String,

    /// Display name, when the account has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    /// Whether the account may sign in.
    #[serde(default = "default_active")]
    pub is_active: bool,

    /// The role attached to this account.
    pub role: RoleRead,
}

impl UserRead {
    /// Name shown in the header dropdown: the full name when present,
    /// otherwise the email address.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(&self.email)
    }
}

fn default_active() -> bool {
    true
}

/// Bearer token issued by `/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Token {
    /// The opaque access token.
    pub access_token: String,

    /// Token scheme, always `bearer`.
    pub token_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> UserRead {
        UserRead {
            id: 7,
            email: "kasse@warenwelt.example".to_string(),
            full_name: Some("Erika Muster".to_string()),
            is_active: true,
            role: RoleRead {
                id: 2,
                name: "Mitarbeiter".to_string(),
                description: None,
            },
        }
    }

    #[test]
    fn user_roundtrip() {
        let user = sample_user();
        let json = serde_json::to_string(&user).unwrap();
        let back: UserRead = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn user_deserializes_api_shape() {
        let json = r#"{
            "id": 1,
            "email": "chef@warenwelt.example",
            "full_name": null,
            "is_active": true,
            "role": {"id": 1, "name": "Admin", "description": "Vollzugriff"}
        }"#;
        let user: UserRead = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.full_name, None);
        assert_eq!(user.role.name, "Admin");
        assert_eq!(user.display_name(), "chef@warenwelt.example");
    }

    #[test]
    fn display_name_prefers_full_name() {
        let user = sample_user();
        assert_eq!(user.display_name(), "Erika Muster");
    }

    #[test]
    fn token_deserializes() {
        let json = r#"{"access_token": "abc.def.ghi", "token_type": "bearer"}"#;
        let token: Token = serde_json::from_str(json).unwrap();
        assert_eq!(token.access_token, "abc.def.ghi");
        assert_eq!(token.token_type, "bearer");
    }
}
