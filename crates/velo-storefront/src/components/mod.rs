//! UI components.

mod header;
mod product_item_details;
mod similar_product_item;

pub use header::Header;
pub use product_item_details::ProductItemDetails;
pub use similar_product_item::SimilarProductItem;

/// Star icon shown next to ratings.
pub(crate) const STAR_IMAGE_URL: &str = "/assets/star.png";
