//! Catalog domain layer for the VeloCart storefront.
//!
//! Wire and normalized product models, the detail page's view-state machine,
//! the quantity counter, credential lookup, and the product-detail API
//! facade. Everything here is UI-framework-free; the storefront crate wires
//! these types into Leptos.

mod credentials;
mod detail;
mod product;
mod quantity;
mod state;

pub use credentials::{token_from_cookie_header, AUTH_TOKEN_COOKIE};
pub use detail::ProductDetailApi;
pub use product::{ApiProduct, Product, ProductDetail};
pub use quantity::Quantity;
pub use state::ViewState;

// Re-export the error type callers see from `fetch_detail`.
pub use velo_data::FetchError;
