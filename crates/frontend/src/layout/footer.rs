use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <span class="footer__copy">"PartsBay — electronic components marketplace"</span>
        </footer>
    }
}
