use shared::models::{Token, UserRead};

use crate::api::{ApiClient, ApiError};

impl ApiClient {
    /// Exchange credentials for a bearer token.
    ///
    /// The endpoint implements the OAuth2 password grant, so the email is
    /// sent as the `username` form field.
    pub async fn login_with_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Token, ApiError> {
        self.post_form("auth/login", &[("username", email), ("password", password)])
            .await
    }

    /// Fetch the profile belonging to the current token.
    pub async fn get_current_user(&self) -> Result<UserRead, ApiError> {
        self.get_json("auth/me").await
    }
}
