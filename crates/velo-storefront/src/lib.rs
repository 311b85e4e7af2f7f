//! VeloCart storefront.
//!
//! A client-side Leptos application. Its one real page fetches a product's
//! detail plus similar products from the catalog API and renders it through
//! the four-state view machine in `velo-catalog`.

pub mod app;
mod components;
pub mod config;
pub mod session;

pub use app::App;
pub use config::StoreConfig;
