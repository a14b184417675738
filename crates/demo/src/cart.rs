//! Cart page

use leptos::prelude::*;
use leptos_router::components::A;

use vitrine::prices::format_usd;

use crate::session::CartHandle;

/// Shopping cart view: empty state or the entry table with line subtotals
/// and the grand total.
#[component]
pub fn CartPage() -> impl IntoView {
    let cart = expect_context::<CartHandle>();

    view! {
        <div class="cart-page">
            {move || {
                if cart.is_empty() {
                    view! {
                        <div class="cart-empty">
                            <h2>"Your Cart is Empty"</h2>
                            <p class="cart-empty-lead">
                                "Browse products and add them to your cart."
                            </p>
                            <A href="/products">"Shop Now"</A>
                        </div>
                    }
                        .into_any()
                } else {
                    view! {
                        <div class="cart-contents">
                            <h2 class="cart-title">"Shopping Cart"</h2>
                            <table class="cart-table">
                                <thead>
                                    <tr>
                                        <th>"Product"</th>
                                        <th>"Price"</th>
                                        <th>"Quantity"</th>
                                        <th>"Subtotal"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {cart
                                        .entries()
                                        .into_iter()
                                        .map(|entry| {
                                            let image = entry.product.image.clone();
                                            let image_alt = entry.product.title.clone();
                                            let title = entry.product.title.clone();
                                            let price = format_usd(entry.product.price);
                                            let subtotal = format_usd(entry.subtotal());
                                            let quantity = entry.quantity;

                                            view! {
                                                <tr>
                                                    <td>
                                                        <div class="cart-product-cell">
                                                            <img
                                                                src=image
                                                                alt=image_alt
                                                                class="cart-product-image"
                                                            />
                                                            <span>{title}</span>
                                                        </div>
                                                    </td>
                                                    <td>{price}</td>
                                                    <td>{quantity}</td>
                                                    <td>{subtotal}</td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                            <div class="cart-total">
                                <h3>"Total: " {format_usd(cart.total())}</h3>
                            </div>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
