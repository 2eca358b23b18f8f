use gloo_storage::{LocalStorage, Storage};
use shared::models::UserRead;
use yewdux::prelude::*;

use crate::api::{ApiClient, ApiError};

pub const TOKEN_KEY: &str = "accessToken";
pub const USER_KEY: &str = "user";

/// Authentication state shared across the app.
///
/// `return_url` remembers where an unauthenticated visitor was headed so the
/// login page can send them back there afterwards.
#[derive(Default, Clone, PartialEq, Store)]
pub struct SessionState {
    pub access_token: Option<String>,
    pub user: Option<UserRead>,
    pub return_url: Option<String>,
}

impl SessionState {
    /// A session counts as authenticated as soon as a token is present.
    /// The profile may still be loading at that point.
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    /// Rebuild the session from local storage on app start.
    pub fn restored() -> Self {
        Self {
            access_token: LocalStorage::get(TOKEN_KEY).ok(),
            user: LocalStorage::get(USER_KEY).ok(),
            return_url: None,
        }
    }
}

fn persist_token(token: &str) {
    let _ = LocalStorage::set(TOKEN_KEY, token);
}

fn persist_user(user: &UserRead) {
    let _ = LocalStorage::set(USER_KEY, user);
}

fn clear_storage() {
    LocalStorage::delete(TOKEN_KEY);
    LocalStorage::delete(USER_KEY);
}

/// Exchange credentials for a token, then load the user profile.
///
/// Any failure tears the half-built session down again before the error is
/// returned.
pub async fn login(
    dispatch: &Dispatch<SessionState>,
    email: &str,
    password: &str,
) -> Result<(), ApiError> {
    let client = ApiClient::shared();
    let token = match client.login_with_credentials(email, password).await {
        Ok(token) => token,
        Err(err) => {
            clear(dispatch);
            return Err(err);
        }
    };
    client.set_access_token(Some(token.access_token.clone()));
    persist_token(&token.access_token);
    dispatch.reduce_mut(|state| state.access_token = Some(token.access_token.clone()));
    fetch_current_user(dispatch).await
}

/// Load `auth/me` into the store. Does nothing without a token; any failure
/// clears the whole session, since a token we cannot use is worthless.
pub async fn fetch_current_user(dispatch: &Dispatch<SessionState>) -> Result<(), ApiError> {
    if dispatch.get().access_token.is_none() {
        return Ok(());
    }
    match ApiClient::shared().get_current_user().await {
        Ok(user) => {
            persist_user(&user);
            dispatch.reduce_mut(|state| state.user = Some(user));
            Ok(())
        }
        Err(err) => {
            clear(dispatch);
            Err(err)
        }
    }
}

/// Drop the session locally. There is no server-side logout endpoint; the
/// token simply expires.
pub fn clear(dispatch: &Dispatch<SessionState>) {
    ApiClient::shared().set_access_token(None);
    clear_storage();
    dispatch.reduce_mut(|state| {
        state.access_token = None;
        state.user = None;
    });
}

/// Complete a restored session: a stored token without a cached user means
/// the profile fetch was interrupted, so finish it now.
pub async fn init(dispatch: &Dispatch<SessionState>) {
    let state = dispatch.get();
    if state.access_token.is_some() && state.user.is_none() {
        let _ = fetch_current_user(dispatch).await;
    }
}

/// Consume the stored return URL, if any.
pub fn take_return_url(dispatch: &Dispatch<SessionState>) -> Option<String> {
    let mut taken = None;
    dispatch.reduce_mut(|state| taken = state.return_url.take());
    taken
}
