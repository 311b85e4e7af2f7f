//! Site header.

use leptos::prelude::*;

/// Fixed navigation header. Takes no parameters.
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="site-header">
            <a href="/products" class="site-logo">"VeloCart"</a>
            <nav class="site-nav">
                <a href="/products">"Products"</a>
                <a href="/cart">"Cart"</a>
            </nav>
        </header>
    }
}
