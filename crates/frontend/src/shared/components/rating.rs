use contracts::domain::a001_product::{star_glyphs, StarGlyph};
use leptos::prelude::*;

/// Five-slot star rating with the numeric value next to it.
#[component]
pub fn RatingStars(
    /// Rating in [0, 5]
    rating: f64,
) -> impl IntoView {
    view! {
        <span class="rating">
            {star_glyphs(rating)
                .into_iter()
                .map(|glyph| {
                    let (class, symbol) = match glyph {
                        StarGlyph::Full => ("rating__star rating__star--full", "★"),
                        StarGlyph::Half => ("rating__star rating__star--half", "★"),
                        StarGlyph::Empty => ("rating__star rating__star--empty", "☆"),
                    };
                    view! { <i class=class>{symbol}</i> }
                })
                .collect_view()}
            <span class="rating__value">{format!("{rating:.1}")}</span>
        </span>
    }
}
