use crate::layout::global_context::{AppGlobalContext, Page};
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__title">"PartsBay"</span>
                <nav class="header__nav">
                    {Page::ALL
                        .into_iter()
                        .map(|page| {
                            view! {
                                <button
                                    class=move || {
                                        if ctx.active_page.get() == page {
                                            "header__nav-item header__nav-item--active"
                                        } else {
                                            "header__nav-item"
                                        }
                                    }
                                    on:click=move |_| ctx.navigate(page)
                                >
                                    {page.title()}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>
        </header>
    }
}
