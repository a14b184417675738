//! Product detail page

use std::sync::Arc;

use leptos::{prelude::*, task};
use leptos_router::{
    NavigateOptions,
    components::A,
    hooks::{use_navigate, use_params_map},
};
use rust_decimal::Decimal;

use vitrine::{prices::format_usd, products::Product};
use vitrine_app::context::AppContext;

use crate::{
    remote::{REDIRECT_DELAY_MS, RemoteState, confirm, load_remote, wait_for_timeout},
    session::CartHandle,
    widgets::{LoadingNotice, StarRow},
};

/// Detail page: fetches the product for the `:id` route parameter and
/// re-fetches when the parameter changes.
#[component]
pub fn ProductDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let context = expect_context::<AppContext>();

    let state = RwSignal::new(RemoteState::<Product>::Loading);
    let generation = RwSignal::new(0_u64);

    let product_id = Memo::new(move |_| {
        params
            .get()
            .get("id")
            .and_then(|raw| raw.parse::<u64>().ok())
    });

    Effect::new(move |_| match product_id.get() {
        Some(id) => {
            let catalog = Arc::clone(&context.catalog);

            load_remote(state, generation, async move {
                catalog.get_product(id).await
            });
        }
        None => state.set(RemoteState::Failed(
            "The requested product could not be found.".to_string(),
        )),
    });

    view! {
        <div class="product-details-page">
            {move || match state.get() {
                RemoteState::Loading => {
                    view! { <LoadingNotice message="Loading Product Details..." /> }.into_any()
                }
                RemoteState::Failed(message) => {
                    view! { <DetailsError message=message /> }.into_any()
                }
                RemoteState::Loaded(product) => {
                    view! { <ProductDetails product=product /> }.into_any()
                }
            }}
        </div>
    }
}

/// Failure view for a missing or unfetchable product.
#[component]
fn DetailsError(message: String) -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="error-notice" role="alert">
            <h4 class="error-heading">"Product Not Found"</h4>
            <p class="error-message">{message}</p>
            <button
                type="button"
                class="button button-primary"
                on:click=move |_| navigate("/products", NavigateOptions::default())
            >
                "Back to Products"
            </button>
        </div>
    }
}

/// The loaded product: purchase options plus edit and delete actions.
#[component]
fn ProductDetails(product: Product) -> impl IntoView {
    let context = expect_context::<AppContext>();
    let cart = expect_context::<CartHandle>();
    let navigate = use_navigate();

    let quantity = RwSignal::new(1_u32);
    let deleting = RwSignal::new(false);
    let delete_success = RwSignal::new(false);
    let action_message = RwSignal::new(None::<String>);
    let action_error = RwSignal::new(None::<String>);

    let id = product.id;
    let price = product.price;
    let rating = product.rating;
    let title = product.title.clone();
    let title_for_crumb = product.title.clone();
    let title_for_add = product.title.clone();
    let category_for_crumb = product.category.clone();
    let category_for_badge = product.category.clone();
    let description = product.description.clone();
    let image = product.image.clone();
    let image_alt = product.title.clone();
    let edit_href = format!("/product/{id}/edit");
    let product_for_add = product.clone();

    let on_add = move |_| {
        let count = quantity.get_untracked();

        cart.add(product_for_add.clone(), count);
        action_message.set(Some(format!(
            "Added {count} × \"{title_for_add}\" to cart."
        )));
    };

    let delete_context = context.clone();
    let delete_navigate = navigate.clone();
    let on_delete = move |_| {
        if !confirm("Are you sure you want to delete this product? This action cannot be undone.")
        {
            return;
        }

        deleting.set(true);
        action_error.set(None);

        let catalog = Arc::clone(&delete_context.catalog);
        let navigate = delete_navigate.clone();

        task::spawn_local(async move {
            let result = catalog.delete_product(id).await;

            deleting.set(false);

            match result {
                Ok(()) => {
                    delete_success.set(true);
                    wait_for_timeout(REDIRECT_DELAY_MS).await;
                    navigate("/products", NavigateOptions::default());
                }
                Err(error) => action_error.set(Some(error.to_string())),
            }
        });
    };

    let edit_navigate = navigate.clone();
    let on_edit = move |_| edit_navigate(&edit_href, NavigateOptions::default());

    let back_navigate = navigate.clone();

    view! {
        <div class="product-details">
            <nav class="breadcrumb" aria-label="breadcrumb">
                <A href="/">"Home"</A>
                <A href="/products">"Products"</A>
                <span class="breadcrumb-category">{category_for_crumb}</span>
                <span class="breadcrumb-current">{title_for_crumb}</span>
            </nav>

            {move || {
                delete_success
                    .get()
                    .then(|| {
                        view! {
                            <div class="success-notice" role="alert">
                                <h5 class="success-heading">"Product Deleted Successfully!"</h5>
                                <p>
                                    "The product has been removed from the store. Redirecting to products page..."
                                </p>
                            </div>
                        }
                    })
            }}

            <div class="product-details-layout">
                <div class="product-details-media">
                    <img src=image alt=image_alt class="product-details-image" />
                    <button
                        type="button"
                        class="button button-outline"
                        on:click=move |_| back_navigate("/products", NavigateOptions::default())
                    >
                        "← Back to Products"
                    </button>
                </div>

                <div class="product-details-info">
                    <span class="product-details-category">{category_for_badge}</span>
                    <h1 class="product-details-title">{title}</h1>

                    <div class="product-details-description">
                        <h4>"Product Description"</h4>
                        <p>{description}</p>
                    </div>

                    <div class="product-details-rating">
                        <StarRow rating=rating />
                        <span class="product-details-reviews">
                            "(" {rating.count} " reviews) · " {rating.rate.to_string()} "/5"
                        </span>
                    </div>

                    <p class="product-details-price">{format_usd(price)}</p>

                    <div class="purchase-panel">
                        <div class="purchase-row">
                            <label class="purchase-label">
                                "Quantity"
                                <div class="quantity-stepper">
                                    <button
                                        type="button"
                                        class="stepper-button"
                                        on:click=move |_| {
                                            quantity.update(|q| *q = q.saturating_sub(1).max(1));
                                        }
                                    >
                                        "−"
                                    </button>
                                    <input
                                        type="number"
                                        class="stepper-input"
                                        min="1"
                                        prop:value=move || quantity.get().to_string()
                                        on:input=move |ev| {
                                            let parsed =
                                                event_target_value(&ev).parse::<u32>().unwrap_or(1);
                                            quantity.set(parsed.max(1));
                                        }
                                    />
                                    <button
                                        type="button"
                                        class="stepper-button"
                                        on:click=move |_| {
                                            quantity.update(|q| *q = q.saturating_add(1));
                                        }
                                    >
                                        "+"
                                    </button>
                                </div>
                            </label>
                            <div class="purchase-total">
                                <span class="purchase-total-label">"Total Price"</span>
                                <span class="purchase-total-value">
                                    {move || format_usd(price * Decimal::from(quantity.get()))}
                                </span>
                            </div>
                        </div>

                        <div class="purchase-actions">
                            <button type="button" class="button button-primary" on:click=on_add>
                                "Add to Cart (" {move || quantity.get()} " items)"
                            </button>
                            <button type="button" class="button button-warning" on:click=on_edit>
                                "Edit Product"
                            </button>
                            <button
                                type="button"
                                class="button button-danger"
                                disabled=move || deleting.get() || delete_success.get()
                                on:click=on_delete
                            >
                                {move || {
                                    if deleting.get() {
                                        "Deleting Product..."
                                    } else if delete_success.get() {
                                        "Deleted Successfully"
                                    } else {
                                        "Delete Product"
                                    }
                                }}
                            </button>
                        </div>

                        {move || {
                            action_message
                                .get()
                                .map(|message| {
                                    view! { <p class="action-message" role="status">{message}</p> }
                                })
                        }}
                        {move || {
                            action_error
                                .get()
                                .map(|message| {
                                    view! { <p class="action-error" role="alert">{message}</p> }
                                })
                        }}
                    </div>
                </div>
            </div>
        </div>
    }
}
