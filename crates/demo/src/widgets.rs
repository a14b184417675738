//! Small view pieces shared across pages.

use leptos::prelude::*;

use vitrine::products::Rating;

/// Centered spinner with a message, shown while a fetch is in flight.
#[component]
pub fn LoadingNotice(message: &'static str) -> impl IntoView {
    view! {
        <div class="loading-notice" role="status">
            <span class="spinner" aria-hidden="true"></span>
            <h4 class="loading-title">{message}</h4>
        </div>
    }
}

/// Star glyph row for a product rating.
#[component]
pub fn StarRow(rating: Rating) -> impl IntoView {
    let stars = rating.stars();

    view! {
        <span class="stars" aria-hidden="true">
            <span class="stars-full">{"★".repeat(stars.full as usize)}</span>
            {stars.half.then(|| view! { <span class="stars-half">"☆"</span> })}
            <span class="stars-empty">{"☆".repeat(stars.empty as usize)}</span>
        </span>
    }
}

/// Uppercase the first character, the way category labels are displayed.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_uppercases_the_first_character_only() {
        assert_eq!(capitalize("electronics"), "Electronics");
        assert_eq!(capitalize("men's clothing"), "Men's clothing");
    }

    #[test]
    fn capitalize_handles_empty_and_unicode_input() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("électronique"), "Électronique");
    }
}
