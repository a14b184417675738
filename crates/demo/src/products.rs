//! Product listing page

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::components::A;

use vitrine::{
    catalog::{
        CategoryCount, CategoryFilter, SortMode, category_counts, category_options, derive_listing,
    },
    prices::{format_usd, truncate_text},
    products::Product,
};
use vitrine_app::context::AppContext;

use crate::{
    remote::{RemoteState, load_remote},
    session::CartHandle,
    widgets::{LoadingNotice, StarRow, capitalize},
};

/// Product listing page: fetches the snapshot, then renders a derived view
/// of it under the category and sort selectors.
#[component]
pub fn ProductsPage() -> impl IntoView {
    let context = expect_context::<AppContext>();

    let snapshot = RwSignal::new(RemoteState::<Vec<Product>>::Loading);
    let generation = RwSignal::new(0_u64);
    let category = RwSignal::new(CategoryFilter::All);
    let sort = RwSignal::new(SortMode::Default);

    let fetch = move || {
        let catalog = Arc::clone(&context.catalog);

        load_remote(snapshot, generation, async move {
            catalog.list_products().await
        });
    };

    fetch();

    let retry = fetch.clone();

    view! {
        <div class="products-page">
            <nav class="breadcrumb" aria-label="breadcrumb">
                <A href="/">"Home"</A>
                <span class="breadcrumb-current">"Products"</span>
            </nav>
            {move || match snapshot.get() {
                RemoteState::Loading => {
                    view! { <LoadingNotice message="Loading Products..." /> }.into_any()
                }
                RemoteState::Failed(message) => {
                    let retry = retry.clone();

                    view! {
                        <div class="error-notice" role="alert">
                            <h4 class="error-heading">"Error Loading Products"</h4>
                            <p class="error-message">{message}</p>
                            <button
                                type="button"
                                class="button button-outline"
                                on:click=move |_| retry()
                            >
                                "Try Again"
                            </button>
                        </div>
                    }
                        .into_any()
                }
                RemoteState::Loaded(products) => {
                    view! { <CatalogView products=products category=category sort=sort /> }
                        .into_any()
                }
            }}
        </div>
    }
}

/// The loaded listing: selectors, grid, and the per-category browse strip.
#[component]
fn CatalogView(
    /// The snapshot as last fetched; rendering only ever derives from it.
    products: Vec<Product>,
    /// Shared category selector.
    category: RwSignal<CategoryFilter>,
    /// Shared sort selector.
    sort: RwSignal<SortMode>,
) -> impl IntoView {
    let total = products.len();
    let options = category_options(&products);
    let counts = category_counts(&products);

    let listing_snapshot = products.clone();
    let listing = Memo::new(move |_| derive_listing(&listing_snapshot, &category.get(), sort.get()));

    let category_option_views = options
        .iter()
        .map(|option| {
            let value = option.clone();
            let label = if value == CategoryFilter::ALL {
                "All Categories".to_string()
            } else {
                capitalize(&value)
            };

            view! { <option value=value>{label}</option> }
        })
        .collect_view();

    let sort_option_views = SortMode::all()
        .into_iter()
        .map(|mode| view! { <option value=mode.as_str()>{mode.label()}</option> })
        .collect_view();

    view! {
        <section class="catalog">
            <header class="catalog-header">
                <div>
                    <h2 class="catalog-title">"Our Products"</h2>
                    <p class="catalog-summary">
                        "Showing " {move || listing.get().len()} " of " {total} " products"
                    </p>
                </div>
                <div class="catalog-controls">
                    <select
                        class="select"
                        aria-label="Filter by category"
                        prop:value=move || category.get().as_str().to_string()
                        on:change=move |ev| {
                            category.set(CategoryFilter::parse(&event_target_value(&ev)));
                        }
                    >
                        {category_option_views}
                    </select>
                    <select
                        class="select"
                        aria-label="Sort products"
                        prop:value=move || sort.get().as_str().to_string()
                        on:change=move |ev| sort.set(SortMode::parse(&event_target_value(&ev)))
                    >
                        {sort_option_views}
                    </select>
                </div>
            </header>

            {move || {
                let current = listing.get();

                if current.is_empty() {
                    view! { <EmptyListing category=category sort=sort /> }.into_any()
                } else {
                    view! {
                        <div class="products-grid">
                            {current
                                .into_iter()
                                .map(|product| view! { <ProductCard product=product /> })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }
            }}

            <section class="category-stats">
                <h3 class="section-title">"Shop by Category"</h3>
                <div class="category-stat-buttons">
                    {counts
                        .into_iter()
                        .map(|CategoryCount { category: name, count }| {
                            let value = name.clone();
                            let label = capitalize(&name);
                            let selected_name = name.clone();

                            view! {
                                <button
                                    type="button"
                                    class=move || {
                                        if category.with(|current| current.as_str() == selected_name) {
                                            "category-stat category-stat-selected"
                                        } else {
                                            "category-stat"
                                        }
                                    }
                                    on:click=move |_| {
                                        category.set(CategoryFilter::Named(value.clone()));
                                    }
                                >
                                    <span class="category-stat-name">{label}</span>
                                    <small class="category-stat-count">"(" {count} " items)"</small>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </section>
    }
}

/// Shown when the current selectors match nothing.
#[component]
fn EmptyListing(category: RwSignal<CategoryFilter>, sort: RwSignal<SortMode>) -> impl IntoView {
    view! {
        <div class="empty-listing">
            <h3>"No products found"</h3>
            <p class="empty-listing-hint">
                "No products match your current filters. Try adjusting your search criteria."
            </p>
            <button
                type="button"
                class="button button-primary"
                on:click=move |_| {
                    category.set(CategoryFilter::All);
                    sort.set(SortMode::Default);
                }
            >
                "Clear Filters"
            </button>
        </div>
    }
}

/// One card in the listing grid.
#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let cart = expect_context::<CartHandle>();

    let details_href = format!("/product/{}", product.id);
    let blurb = truncate_text(&product.description, 80);
    let price = format_usd(product.price);
    let rating = product.rating;
    let title = product.title.clone();
    let image = product.image.clone();
    let image_alt = product.title.clone();
    let category = product.category.clone();
    let product_for_add = product.clone();

    view! {
        <div class="product-card">
            <div class="product-card-media">
                <img src=image alt=image_alt class="product-card-image" />
                <span class="product-card-category">{category}</span>
            </div>
            <div class="product-card-body">
                <h3 class="product-card-title">{title}</h3>
                <p class="product-card-blurb">{blurb}</p>
                <div class="product-card-meta">
                    <span class="product-card-price">{price}</span>
                    <span class="product-card-rating">
                        <StarRow rating=rating />
                        <small class="product-card-review-count">"(" {rating.count} ")"</small>
                    </span>
                </div>
                <div class="product-card-actions">
                    <A href=details_href>"View Details"</A>
                    <button
                        type="button"
                        class="button button-primary"
                        on:click=move |_| cart.add(product_for_add.clone(), 1)
                    >
                        "Add to Cart"
                    </button>
                </div>
            </div>
        </div>
    }
}

