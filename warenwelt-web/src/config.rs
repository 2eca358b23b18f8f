//! Frontend configuration module
//!
//! Provides the base URL of the Warenwelt API and related settings.

const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api/v1";

/// Frontend configuration for API endpoints and external links.
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Base URL of the Warenwelt REST API, without a trailing slash.
    pub api_base_url: String,
    /// Base URL the backend serves static files (product images) from.
    pub static_base_url: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        let api_base_url = option_env!("WARENWELT_API_BASE_URL")
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_string();
        let static_base_url = option_env!("WARENWELT_STATIC_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| derive_static_base(&api_base_url));
        Self {
            api_base_url,
            static_base_url,
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// The API base URL.
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Absolute URL for a backend-served image path.
    pub fn image_url(&self, relative: &str) -> String {
        format!(
            "{}/static/{}",
            self.static_base_url,
            relative.trim_start_matches('/')
        )
    }
}

/// The API lives under `/api/v1`; static files are served from the host root.
fn derive_static_base(api_base_url: &str) -> String {
    api_base_url
        .strip_suffix("/api/v1")
        .unwrap_or(api_base_url)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_api() {
        let config = FrontendConfig::default();
        assert!(config.api_base_url().starts_with("http"));
        assert!(!config.api_base_url().ends_with('/'));
    }

    #[test]
    fn static_base_strips_api_prefix() {
        assert_eq!(
            derive_static_base("http://localhost:8000/api/v1"),
            "http://localhost:8000"
        );
        assert_eq!(
            derive_static_base("https://warenwelt.example"),
            "https://warenwelt.example"
        );
    }

    #[test]
    fn image_url_joins_cleanly() {
        let config = FrontendConfig {
            api_base_url: "http://localhost:8000/api/v1".into(),
            static_base_url: "http://localhost:8000".into(),
        };
        assert_eq!(
            config.image_url("product_images/42.jpg"),
            "http://localhost:8000/static/product_images/42.jpg"
        );
        assert_eq!(
            config.image_url("/product_images/42.jpg"),
            "http://localhost:8000/static/product_images/42.jpg"
        );
    }
}
