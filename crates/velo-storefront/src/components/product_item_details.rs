//! The product detail page.
//!
//! Mounting starts exactly one detail fetch. The page renders whichever view
//! the state machine is in: nothing, a spinner, the full detail, or the
//! failure view.

use leptos::logging;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};
use leptos_router::NavigateOptions;

use velo_catalog::{Product, ProductDetail, ProductDetailApi, Quantity, ViewState};

use super::{Header, SimilarProductItem, STAR_IMAGE_URL};
use crate::config::StoreConfig;
use crate::session;

/// Error illustration on the failure view.
const FAILURE_IMAGE_URL: &str = "/assets/error-view.png";

#[component]
pub fn ProductItemDetails() -> impl IntoView {
    let params = use_params_map();
    let product_id = params.get_untracked().get("id").unwrap_or_default();
    let config = use_context::<StoreConfig>().unwrap_or_default();

    let state = RwSignal::new(ViewState::Initial);
    let quantity = RwSignal::new(Quantity::default());

    // One load per page instance; re-fetch requires a fresh instance. The
    // spinner state is set synchronously so it covers the whole round trip.
    state.update(|s| s.begin_load());

    let api = ProductDetailApi::new(config.api_base_url.clone());
    let auth_cookie = config.auth_cookie.clone();
    spawn_local(async move {
        // An absent token is sent as an empty bearer value; the server's
        // rejection surfaces as an ordinary failure status.
        let token = session::ambient_auth_token(&auth_cookie).unwrap_or_default();
        let next = match api.fetch_detail(&product_id, &token).await {
            Ok(next) => next,
            Err(err) => {
                logging::error!("product detail fetch failed: {err}");
                ViewState::Failure
            }
        };
        // The page may have been torn down while the request was in flight;
        // a disposed signal drops the write.
        if state.try_set(next).is_some() {
            logging::warn!("dropping detail response for unmounted page");
        }
    });

    view! {
        {move || match state.get() {
            ViewState::Initial => ().into_any(),
            ViewState::Loading => view! { <LoadingView/> }.into_any(),
            ViewState::Failure => view! { <FailureView/> }.into_any(),
            ViewState::Success(detail) => view! { <DetailView detail quantity/> }.into_any(),
        }}
    }
}

/// Spinner placeholder shown while the request is in flight.
#[component]
fn LoadingView() -> impl IntoView {
    view! {
        <div class="product-details-container">
            <div class="loader-container" data-testid="loader">
                <div class="loader-spinner"></div>
            </div>
        </div>
    }
}

/// Target and options for the "Continue Shopping" action. Replace rather
/// than push: the failure view must not be revisitable via back-navigation.
fn continue_shopping_nav(config: &StoreConfig) -> (String, NavigateOptions) {
    (
        config.products_path.clone(),
        NavigateOptions {
            replace: true,
            ..Default::default()
        },
    )
}

/// Failure view with the one recovery path back to the products listing.
#[component]
fn FailureView() -> impl IntoView {
    let config = use_context::<StoreConfig>().unwrap_or_default();
    let navigate = use_navigate();
    let (target, options) = continue_shopping_nav(&config);
    let on_continue = move |_| {
        navigate(&target, options.clone());
    };

    view! {
        <div class="failure-view">
            <img src=FAILURE_IMAGE_URL alt="failure view" class="error-image"/>
            <h1>"Product Not Found"</h1>
            <button type="button" class="continue-shopping-btn" on:click=on_continue>
                "Continue Shopping"
            </button>
        </div>
    }
}

/// The loaded detail view.
#[component]
fn DetailView(detail: ProductDetail, quantity: RwSignal<Quantity>) -> impl IntoView {
    let ProductDetail {
        detail: product,
        similar,
    } = detail;
    let price = product.price_display();

    view! {
        <div class="product-details-container">
            <Header/>
            <div class="product-container">
                <img src=product.image_url alt="product" class="detailed-product-image"/>
                <div class="description-container">
                    <h1 class="title">{product.title}</h1>
                    <p class="price">{price}</p>
                    <div class="set-in-row">
                        <div class="rating-container">
                            <p class="rating">{product.rating}</p>
                            <img src=STAR_IMAGE_URL alt="star" class="star"/>
                        </div>
                        <p class="review">{product.total_reviews} " Reviews"</p>
                    </div>
                    <p class="description">{product.description}</p>
                    <p class="highlighted-text">"Available : " {product.availability}</p>
                    <p class="highlighted-text">"Brand : " {product.brand}</p>
                    <hr class="horizontal-line"/>
                    <div class="quantity-container">
                        <button
                            type="button"
                            class="quantity-btn"
                            data-testid="minus"
                            on:click=move |_| quantity.update(|q| q.decrease())
                        >
                            "−"
                        </button>
                        <p class="count">{move || quantity.get().to_string()}</p>
                        <button
                            type="button"
                            class="quantity-btn"
                            data-testid="plus"
                            on:click=move |_| quantity.update(|q| q.increase())
                        >
                            "+"
                        </button>
                    </div>
                    <button type="button" class="add-to-cart-btn">"ADD TO CART"</button>
                </div>
            </div>
            <SimilarProducts similar/>
        </div>
    }
}

/// The "Similar Products" section, one card per product, keyed by id.
#[component]
fn SimilarProducts(similar: Vec<Product>) -> impl IntoView {
    view! {
        <div class="similar-products-container">
            <h1 class="similar-products-heading">"Similar Products"</h1>
            <ul class="products-list">
                <For each=move || similar.clone() key=similar_product_key let:product>
                    <SimilarProductItem product/>
                </For>
            </ul>
        </div>
    }
}

/// Key for one entry of the similar-products list.
fn similar_product_key(product: &Product) -> String {
    product.id.clone()
}
