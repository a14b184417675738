//! Vitrine storefront demo
//!
//! Browser storefront over a remote product catalog: listing with filter and
//! sort selectors, product details, create/edit/delete forms, and an
//! in-memory session cart.

use leptos::prelude::*;
use leptos_router::{
    components::{A, Route, Router, Routes},
    path,
};

use vitrine_app::context::AppContext;

mod cart;
mod home;
mod product_details;
mod product_form;
mod products;
mod remote;
mod session;
mod widgets;

use session::CartHandle;

/// Top navigation chrome with the reactive cart badge.
#[component]
fn Navigation() -> impl IntoView {
    let cart = expect_context::<CartHandle>();

    view! {
        <nav class="navbar">
            <span class="navbar-brand">
                <A href="/">"Vitrine"</A>
            </span>
            <ul class="nav-links">
                <li class="nav-item">
                    <A href="/">"Home"</A>
                </li>
                <li class="nav-item">
                    <A href="/products">"Products"</A>
                </li>
                <li class="nav-item">
                    <A href="/product/new">"Add Product"</A>
                </li>
                <li class="nav-item">
                    <A href="/cart">
                        "Cart " <span class="cart-badge">{move || cart.count()}</span>
                    </A>
                </li>
            </ul>
        </nav>
    }
}

/// App shell: injected services, router, and the route table.
///
/// The cart handle and catalog context live exactly as long as this
/// component; navigating between routes swaps views without touching them.
#[component]
fn App() -> impl IntoView {
    provide_context(AppContext::default());
    provide_context(CartHandle::new());

    view! {
        <Router>
            <div class="app-shell">
                <Navigation />
                <main>
                    <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                        <Route path=path!("/") view=home::HomePage />
                        <Route path=path!("/products") view=products::ProductsPage />
                        <Route path=path!("/product/new") view=product_form::NewProductPage />
                        <Route path=path!("/product/:id/edit") view=product_form::EditProductPage />
                        <Route path=path!("/product/:id") view=product_details::ProductDetailsPage />
                        <Route path=path!("/cart") view=cart::CartPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(App);
}
