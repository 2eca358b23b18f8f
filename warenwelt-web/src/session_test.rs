#[cfg(test)]
mod tests {
    use shared::models::{RoleRead, UserRead};

    use crate::session::SessionState;

    fn sample_user() -> UserRead {
        UserRead {
            id: 1,
            email: "admin@warenwelt.de".into(),
            full_name: Some("Anna Admin".into()),
            is_active: true,
            role: RoleRead {
                id: 1,
                name: "admin".into(),
                description: None,
            },
        }
    }

    /// Test that a fresh session is signed out.
    #[test]
    fn test_default_session_is_unauthenticated() {
        let state = SessionState::default();
        assert!(state.access_token.is_none());
        assert!(state.user.is_none());
        assert!(state.return_url.is_none());
        assert!(!state.is_authenticated());
    }

    /// Test that a token alone counts as signed in; the profile fetch may
    /// still be in flight after a page reload.
    #[test]
    fn test_token_without_user_is_authenticated() {
        let state = SessionState {
            access_token: Some("abc123".into()),
            user: None,
            return_url: None,
        };
        assert!(state.is_authenticated());
    }

    /// Test that the cached profile does not keep a cleared session alive.
    #[test]
    fn test_user_without_token_is_unauthenticated() {
        let state = SessionState {
            access_token: None,
            user: Some(sample_user()),
            return_url: None,
        };
        assert!(!state.is_authenticated());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use gloo_storage::{LocalStorage, Storage};
    use wasm_bindgen_test::*;

    use crate::session::{SessionState, TOKEN_KEY, USER_KEY};

    wasm_bindgen_test_configure!(run_in_browser);

    /// Test that a persisted token survives a page reload.
    #[wasm_bindgen_test]
    fn test_restored_session_picks_up_persisted_token() {
        LocalStorage::set(TOKEN_KEY, "abc123").unwrap();
        LocalStorage::delete(USER_KEY);

        let state = SessionState::restored();
        assert_eq!(state.access_token.as_deref(), Some("abc123"));
        assert!(state.user.is_none());
        assert!(state.is_authenticated());

        LocalStorage::delete(TOKEN_KEY);
    }

    /// Test that empty storage restores a signed-out session.
    #[wasm_bindgen_test]
    fn test_restored_session_is_empty_without_storage() {
        LocalStorage::delete(TOKEN_KEY);
        LocalStorage::delete(USER_KEY);

        let state = SessionState::restored();
        assert!(!state.is_authenticated());
        assert!(state.return_url.is_none());
    }
}
