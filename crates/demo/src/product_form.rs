//! Product create/edit form page

use std::sync::Arc;

use leptos::{ev::SubmitEvent, prelude::*, task};
use leptos_router::{
    NavigateOptions,
    components::A,
    hooks::{use_navigate, use_params_map},
};

use vitrine::{
    drafts::{CATEGORIES, ProductDraft},
    prices::format_usd,
    products::Product,
};
use vitrine_app::context::AppContext;

use crate::widgets::capitalize;

/// Route component for `/product/new`.
#[component]
pub fn NewProductPage() -> impl IntoView {
    view! { <ProductFormPage editing=None /> }
}

/// Route component for `/product/:id/edit`.
#[component]
pub fn EditProductPage() -> impl IntoView {
    let params = use_params_map();

    let product_id = Memo::new(move |_| {
        params
            .get()
            .get("id")
            .and_then(|raw| raw.parse::<u64>().ok())
    });

    view! {
        {move || match product_id.get() {
            Some(id) => view! { <ProductFormPage editing=Some(id) /> }.into_any(),
            None => {
                view! {
                    <div class="error-notice" role="alert">
                        <p class="error-message">"The requested product could not be found."</p>
                    </div>
                }
                    .into_any()
            }
        }}
    }
}

/// Shared form for creating and editing products.
///
/// Validation runs locally and collects every violation before anything is
/// sent; mutation failures keep the draft so the user can retry without
/// re-entering it. Creating resets the form on success, editing keeps it.
#[component]
fn ProductFormPage(editing: Option<u64>) -> impl IntoView {
    let context = expect_context::<AppContext>();
    let navigate = use_navigate();

    let draft = RwSignal::new(ProductDraft::default());
    let fetch_loading = RwSignal::new(false);
    let saving = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let saved = RwSignal::new(None::<Product>);

    if let Some(id) = editing {
        fetch_loading.set(true);

        let catalog = Arc::clone(&context.catalog);

        task::spawn_local(async move {
            match catalog.get_product(id).await {
                Ok(product) => {
                    draft.set(ProductDraft::from_product(&product));
                    error.set(None);
                }
                Err(fetch_error) => {
                    error.set(Some(format!("Failed to load product: {fetch_error}")));
                }
            }

            fetch_loading.set(false);
        });
    }

    let submit_context = context.clone();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let input = match draft.get_untracked().validate() {
            Ok(input) => input,
            Err(violations) => {
                error.set(Some(violations.to_string()));
                return;
            }
        };

        saving.set(true);
        error.set(None);

        let catalog = Arc::clone(&submit_context.catalog);

        task::spawn_local(async move {
            let result = match editing {
                Some(id) => catalog.update_product(id, input).await,
                None => catalog.create_product(input).await,
            };

            saving.set(false);

            match result {
                Ok(product) => {
                    saved.set(Some(product));

                    if editing.is_none() {
                        draft.set(ProductDraft::default());
                    }
                }
                // The draft stays as typed so a rejected save can be retried.
                Err(save_error) => error.set(Some(save_error.to_string())),
            }
        });
    };

    let reset = move |_| {
        draft.set(ProductDraft::default());
        saved.set(None);
        error.set(None);
    };

    let cancel_navigate = navigate.clone();
    let success_navigate = navigate.clone();

    let heading = match editing {
        Some(id) => format!("Edit Product #{id}"),
        None => "Add New Product".to_string(),
    };
    let lead = if editing.is_some() {
        "Update the product information below"
    } else {
        "Create a new product for your store"
    };

    let category_option_views = CATEGORIES
        .iter()
        .map(|category| {
            let label = capitalize(category);

            view! { <option value=*category>{label}</option> }
        })
        .collect_view();

    view! {
        <div class="product-form-page">
            <nav class="breadcrumb" aria-label="breadcrumb">
                <A href="/">"Home"</A>
                <A href="/products">"Products"</A>
                {match editing {
                    Some(id) => view! {
                        <A href=format!("/product/{id}")>{format!("Product #{id}")}</A>
                        <span class="breadcrumb-current">"Edit Product"</span>
                    }
                        .into_any(),
                    None => view! { <span class="breadcrumb-current">"Add New Product"</span> }
                        .into_any(),
                }}
            </nav>

            <header class="form-header">
                <h1 class="form-title">{heading}</h1>
                <p class="form-lead">{lead}</p>
            </header>

            {move || {
                fetch_loading
                    .get()
                    .then(|| {
                        view! {
                            <div class="info-notice" role="status">
                                <span class="spinner" aria-hidden="true"></span>
                                "Loading product data..."
                            </div>
                        }
                    })
            }}

            {move || {
                saved
                    .get()
                    .map(|product| {
                        let view_navigate = success_navigate.clone();
                        let back_navigate = success_navigate.clone();
                        let product_id = product.id;
                        let price = format_usd(product.price);

                        view! {
                            <div class="success-notice" role="alert">
                                <h5 class="success-heading">
                                    {if editing.is_some() {
                                        "Product Updated Successfully!"
                                    } else {
                                        "Product Created Successfully!"
                                    }}
                                </h5>
                                <p>"Product ID: " {product.id}</p>
                                <p>"Title: " {product.title}</p>
                                <p>"Price: " {price}</p>
                                <p>"Category: " {product.category}</p>
                                <div class="success-actions">
                                    {if editing.is_some() {
                                        view! {
                                            <button
                                                type="button"
                                                class="button button-primary"
                                                on:click=move |_| {
                                                    view_navigate(
                                                        &format!("/product/{product_id}"),
                                                        NavigateOptions::default(),
                                                    );
                                                }
                                            >
                                                "View Product"
                                            </button>
                                        }
                                            .into_any()
                                    } else {
                                        view! {
                                            <button
                                                type="button"
                                                class="button button-primary"
                                                on:click=reset
                                            >
                                                "Add Another Product"
                                            </button>
                                        }
                                            .into_any()
                                    }}
                                    <button
                                        type="button"
                                        class="button button-outline"
                                        on:click=move |_| {
                                            back_navigate("/products", NavigateOptions::default());
                                        }
                                    >
                                        "Back to Products"
                                    </button>
                                </div>
                            </div>
                        }
                    })
            }}

            {move || {
                error
                    .get()
                    .map(|message| {
                        view! {
                            <div class="error-notice" role="alert">
                                <h5 class="error-heading">"Could Not Save Product"</h5>
                                <p class="error-message">{message}</p>
                            </div>
                        }
                    })
            }}

            <form class="product-form" on:submit=on_submit>
                <div class="form-field">
                    <label class="form-label">
                        "Product Title *"
                        <input
                            type="text"
                            class="form-input"
                            placeholder="Enter product title"
                            prop:value=move || draft.with(|d| d.title.clone())
                            on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                        />
                    </label>
                </div>

                <div class="form-row">
                    <div class="form-field">
                        <label class="form-label">
                            "Price ($) *"
                            <input
                                type="number"
                                class="form-input"
                                placeholder="0.00"
                                min="0"
                                step="0.01"
                                prop:value=move || draft.with(|d| d.price.clone())
                                on:input=move |ev| {
                                    draft.update(|d| d.price = event_target_value(&ev));
                                }
                            />
                        </label>
                    </div>

                    <div class="form-field">
                        <label class="form-label">
                            "Category *"
                            <select
                                class="select"
                                prop:value=move || draft.with(|d| d.category.clone())
                                on:change=move |ev| {
                                    draft.update(|d| d.category = event_target_value(&ev));
                                }
                            >
                                <option value="">"Select a category"</option>
                                {category_option_views}
                            </select>
                        </label>
                    </div>
                </div>

                <div class="form-field">
                    <label class="form-label">
                        "Product Image URL (optional)"
                        <input
                            type="url"
                            class="form-input"
                            placeholder="https://example.com/product-image.jpg"
                            prop:value=move || draft.with(|d| d.image.clone())
                            on:input=move |ev| draft.update(|d| d.image = event_target_value(&ev))
                        />
                    </label>
                    <p class="form-hint">"Leave blank to use a default placeholder image"</p>
                </div>

                <div class="form-field">
                    <label class="form-label">
                        "Product Description *"
                        <textarea
                            class="form-textarea"
                            rows="4"
                            placeholder="Enter detailed product description"
                            prop:value=move || draft.with(|d| d.description.clone())
                            on:input=move |ev| {
                                draft.update(|d| d.description = event_target_value(&ev));
                            }
                        ></textarea>
                    </label>
                </div>

                <div class="form-actions">
                    <button
                        type="button"
                        class="button button-outline"
                        on:click=move |_| cancel_navigate("/products", NavigateOptions::default())
                    >
                        "Cancel"
                    </button>
                    <div class="form-actions-right">
                        <button type="button" class="button button-outline" on:click=reset>
                            "Reset Form"
                        </button>
                        <button
                            type="submit"
                            class="button button-primary"
                            disabled=move || saving.get() || fetch_loading.get()
                        >
                            {move || {
                                if saving.get() {
                                    if editing.is_some() {
                                        "Updating Product..."
                                    } else {
                                        "Creating Product..."
                                    }
                                } else if editing.is_some() {
                                    "Update Product"
                                } else {
                                    "Create Product"
                                }
                            }}
                        </button>
                    </div>
                </div>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use vitrine::drafts::ProductDraft;
    use vitrine_app::catalog::MockCatalogService;

    // Submitting an invalid draft must surface every violation together and
    // issue no catalog request at all.
    #[test]
    fn invalid_draft_is_rejected_without_any_catalog_call() {
        let mut catalog = MockCatalogService::new();

        catalog.expect_list_products().never();
        catalog.expect_get_product().never();
        catalog.expect_create_product().never();
        catalog.expect_update_product().never();
        catalog.expect_delete_product().never();

        let draft = ProductDraft {
            title: String::new(),
            price: "0".to_string(),
            description: "A sturdy desk.".to_string(),
            category: "electronics".to_string(),
            image: String::new(),
        };

        let message = draft
            .validate()
            .expect_err("blank title and zero price must not validate")
            .to_string();

        assert!(
            message.contains("Product title is required"),
            "missing title violation in {message:?}"
        );
        assert!(
            message.contains("Valid price is required"),
            "missing price violation in {message:?}"
        );

        // Dropping the mock verifies that nothing touched the catalog.
        drop(catalog);
    }
}
