//! Card for one similar product.

use leptos::prelude::*;
use velo_catalog::Product;

use super::STAR_IMAGE_URL;

/// Renders one normalized similar product.
#[component]
pub fn SimilarProductItem(product: Product) -> impl IntoView {
    let price = product.price_display();

    view! {
        <li class="similar-product-item">
            <img src=product.image_url alt="similar product" class="similar-product-image"/>
            <p class="similar-product-title">{product.title}</p>
            <p class="similar-product-brand">"by " {product.brand}</p>
            <div class="similar-product-row">
                <p class="similar-product-price">{price}</p>
                <div class="rating-container">
                    <p class="rating">{product.rating}</p>
                    <img src=STAR_IMAGE_URL alt="star" class="star"/>
                </div>
            </div>
        </li>
    }
}
