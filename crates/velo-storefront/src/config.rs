//! Storefront configuration.

use velo_catalog::AUTH_TOKEN_COOKIE;

/// Configuration for the storefront application.
///
/// Provided to the component tree via Leptos context by [`crate::App`];
/// components fall back to the defaults when no context is present.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Application name, used for the document title.
    pub name: String,
    /// Base URL of the catalog API.
    pub api_base_url: String,
    /// Path of the products listing; the "Continue Shopping" target.
    pub products_path: String,
    /// Cookie that holds the bearer token.
    pub auth_cookie: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: "VeloCart".to_string(),
            api_base_url: "https://apis.velocart.dev".to_string(),
            products_path: "/products".to_string(),
            auth_cookie: AUTH_TOKEN_COOKIE.to_string(),
        }
    }
}

impl StoreConfig {
    /// Create a configuration with the given app name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the catalog API base URL.
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Set the products listing path.
    pub fn with_products_path(mut self, path: impl Into<String>) -> Self {
        self.products_path = path.into();
        self
    }

    /// Set the auth cookie name.
    pub fn with_auth_cookie(mut self, name: impl Into<String>) -> Self {
        self.auth_cookie = name.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = StoreConfig::default();
        assert_eq!(config.products_path, "/products");
        assert_eq!(config.auth_cookie, "jwt_token");
    }

    #[test]
    fn builder_overrides_fields() {
        let config = StoreConfig::new("TestStore")
            .with_api_base_url("https://api.test")
            .with_products_path("/catalog")
            .with_auth_cookie("session");
        assert_eq!(config.name, "TestStore");
        assert_eq!(config.api_base_url, "https://api.test");
        assert_eq!(config.products_path, "/catalog");
        assert_eq!(config.auth_cookie, "session");
    }
}
