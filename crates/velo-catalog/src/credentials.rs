//! Credential lookup.
//!
//! The storefront keeps its auth token in a cookie. The fetch path never
//! reads it implicitly: the caller looks the token up here and passes it
//! into [`crate::ProductDetailApi::fetch_detail`] explicitly.

/// Cookie that holds the bearer token.
pub const AUTH_TOKEN_COOKIE: &str = "jwt_token";

/// Extract a cookie value from a `Cookie`-header-shaped string
/// (`"a=1; jwt_token=abc; b=2"`).
pub fn token_from_cookie_header(header: &str, name: &str) -> Option<String> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then(|| value.to_string())
    })
}
