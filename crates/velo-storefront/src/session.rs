//! Ambient credential lookup.
//!
//! The browser's cookie jar is the only ambient storage the storefront
//! touches, and only here: the token is read once per load and passed into
//! the fetch path explicitly.

/// Read the auth token from `document.cookie`.
#[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
pub fn ambient_auth_token(cookie_name: &str) -> Option<String> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()?.document()?;
    let html_document = document.dyn_into::<web_sys::HtmlDocument>().ok()?;
    let cookies = html_document.cookie().ok()?;
    velo_catalog::token_from_cookie_header(&cookies, cookie_name)
}

/// There is no ambient cookie jar off-browser.
#[cfg(not(all(target_arch = "wasm32", target_os = "unknown")))]
pub fn ambient_auth_token(_cookie_name: &str) -> Option<String> {
    None
}
