//! CardAnimated — card wrapper with a staggered appear animation.
//!
//! The animation itself lives in `layout.css` (`@keyframes card-appear`);
//! this component only sets the per-card delay so a list of cards fades in
//! one after another.

use leptos::prelude::*;

#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds; pass `index * 100` for the stagger.
    #[prop(optional)]
    delay_ms: u32,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let full_class = if class.is_empty() {
        "card".to_string()
    } else {
        format!("card {class}")
    };
    let style = format!("animation: card-appear 0.6s ease {delay_ms}ms both;");

    view! {
        <div class=full_class style=style>
            {children()}
        </div>
    }
}
