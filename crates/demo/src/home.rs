//! Home page

use leptos::prelude::*;
use leptos_router::components::A;

struct FeaturedCategory {
    name: &'static str,
    icon: &'static str,
    description: &'static str,
}

const FEATURED: [FeaturedCategory; 3] = [
    FeaturedCategory {
        name: "Electronics",
        icon: "📱",
        description: "Latest gadgets and tech",
    },
    FeaturedCategory {
        name: "Fashion",
        icon: "👕",
        description: "Trendy clothing and style",
    },
    FeaturedCategory {
        name: "Jewelry",
        icon: "💎",
        description: "Elegant accessories",
    },
];

/// Landing page: hero plus featured category cards.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <section class="hero">
                <h1 class="hero-title">"Welcome to Vitrine"</h1>
                <p class="hero-lead">"Your one-stop shop for everything you need"</p>
                <p class="hero-tagline">"Quality products · Fast shipping · Great prices"</p>
                <div class="hero-actions">
                    <A href="/products">"Shop Now"</A>
                    <A href="/products">"View Categories"</A>
                </div>
            </section>

            <section class="featured-categories">
                <h2 class="section-title">"Shop by Category"</h2>
                <p class="section-lead">"Find exactly what you're looking for"</p>
                <div class="category-cards">
                    {FEATURED
                        .iter()
                        .map(|category| {
                            view! {
                                <div class="category-card">
                                    <div class="category-icon">{category.icon}</div>
                                    <h3 class="category-name">{category.name}</h3>
                                    <p class="category-description">{category.description}</p>
                                    <A href="/products">"Browse " {category.name}</A>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
