//! Application shell and routing.

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{Header, ProductItemDetails};
use crate::config::StoreConfig;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(StoreConfig::default());

    let fallback = || view! { <NotFound/> }.into_view();

    view! {
        <Title text="VeloCart"/>
        <Meta name="description" content="VeloCart - e-commerce storefront built with Leptos"/>

        <Router>
            <main>
                <Routes fallback>
                    <Route path=path!("/products") view=ProductsPage/>
                    <Route path=path!("/products/:id") view=ProductItemDetails/>
                    <Route path=path!("/*any") view=NotFound/>
                </Routes>
            </main>
        </Router>
    }
}

/// Static listing shell; the "Continue Shopping" action lands here.
#[component]
fn ProductsPage() -> impl IntoView {
    view! {
        <div class="products-page">
            <Header/>
            <h1 class="products-heading">"All Products"</h1>
            <p class="products-note">"Pick a product to see its details."</p>
        </div>
    }
}

/// Catch-all 404 page.
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a href="/products">"Back to Products"</a>
        </div>
    }
}
