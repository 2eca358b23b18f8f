#[cfg(test)]
mod tests {
    use crate::api::{ApiClient, ApiError, encode_form, require_id};

    /// Test that path joining tolerates slashes on either side.
    #[test]
    fn test_api_url_joins_base_and_path() {
        let client = ApiClient::new("http://localhost:8000/api/v1/");
        assert_eq!(
            client.api_url("suppliers"),
            "http://localhost:8000/api/v1/suppliers"
        );
        assert_eq!(
            client.api_url("/products/42"),
            "http://localhost:8000/api/v1/products/42"
        );
    }

    /// Test that the bearer token round-trips through the client.
    #[test]
    fn test_access_token_round_trip() {
        let client = ApiClient::new("http://localhost:8000/api/v1");
        assert_eq!(client.current_access_token(), None);
        client.set_access_token(Some("abc123".into()));
        assert_eq!(client.current_access_token(), Some("abc123".to_string()));
        client.set_access_token(None);
        assert_eq!(client.current_access_token(), None);
    }

    /// Test that status errors render the server detail when present.
    #[test]
    fn test_status_error_display() {
        let with_detail = ApiError::Status {
            status: 404,
            detail: Some("Produkt nicht gefunden".into()),
        };
        assert_eq!(with_detail.to_string(), "HTTP 404: Produkt nicht gefunden");
        assert_eq!(with_detail.status(), Some(404));
        assert_eq!(with_detail.detail(), Some("Produkt nicht gefunden"));

        let bare = ApiError::Status {
            status: 500,
            detail: None,
        };
        assert_eq!(bare.to_string(), "HTTP 500: request failed");
        assert_eq!(bare.detail(), None);
    }

    /// Test that only 401 responses count as unauthorized.
    #[test]
    fn test_is_unauthorized() {
        let unauthorized = ApiError::Status {
            status: 401,
            detail: None,
        };
        assert!(unauthorized.is_unauthorized());

        let forbidden = ApiError::Status {
            status: 403,
            detail: None,
        };
        assert!(!forbidden.is_unauthorized());
        assert!(!ApiError::InvalidParameter("supplier_id").is_unauthorized());
    }

    /// Test that form bodies are percent-encoded like the login endpoint expects.
    #[test]
    fn test_encode_form_escapes_values() {
        let body = encode_form(&[
            ("username", "admin@warenwelt.de"),
            ("password", "ge heim&42"),
        ]);
        assert_eq!(
            body,
            "username=admin%40warenwelt.de&password=ge+heim%2642"
        );
    }

    /// Test that non-positive ids are rejected before a request is built.
    #[test]
    fn test_require_id_rejects_non_positive() {
        assert_eq!(require_id(7, "supplier_id").ok(), Some(7));
        assert!(matches!(
            require_id(0, "supplier_id"),
            Err(ApiError::InvalidParameter("supplier_id"))
        ));
        assert!(matches!(
            require_id(-3, "shelf_id"),
            Err(ApiError::InvalidParameter("shelf_id"))
        ));
    }
}
