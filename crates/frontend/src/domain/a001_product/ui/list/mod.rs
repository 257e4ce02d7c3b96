use contracts::domain::a001_product::display::{format_price, stock_status, StockSeverity};
use contracts::domain::a001_product::Product;
use leptos::prelude::*;

use crate::domain::a001_product::api;
use crate::domain::a001_product::state::{create_state, ViewMode};
use crate::shared::components::rating::RatingStars;
use crate::shared::components::ui::{Badge, Button, Checkbox, Input};

/// Marketplace page: search bar, category filter sidebar and the product
/// grid. The catalog is fetched once on mount and kept for the session;
/// filtering is a pure derivation over the cached list.
#[component]
pub fn MarketplacePage() -> impl IntoView {
    let state = create_state();

    let load = move || {
        if !state.with_untracked(|s| s.needs_load()) {
            return;
        }
        state.update(|s| s.begin_load());
        leptos::task::spawn_local(async move {
            match api::fetch_products().await {
                Ok(products) => {
                    // The sidebar degrades to an empty list if the category
                    // endpoint fails; the grid is still usable via search.
                    let categories = api::fetch_categories().await.unwrap_or_else(|e| {
                        log::warn!("Failed to load categories: {e}");
                        Vec::new()
                    });
                    state.update(|s| s.finish_load(products, categories));
                }
                Err(e) => {
                    log::error!("Failed to load products: {e}");
                    state.update(|s| s.fail_load(e.to_string()));
                }
            }
        });
    };

    // Load on mount.
    load();

    let filtered = move || state.with(|s| s.filtered());
    let results_count = move || filtered().len();
    let is_filter_active = move || state.with(|s| !s.criteria.is_empty());
    let clear_label =
        move || format!("Clear filters ({})", state.with(|s| s.criteria.active_count()));

    let grid_class = move || {
        state.with(|s| match s.view_mode {
            ViewMode::Grid => "parts-grid parts-grid--cards",
            ViewMode::List => "parts-grid parts-grid--rows",
        })
    };

    view! {
        <div class="marketplace">
            <div class="search-bar">
                <Input
                    value=Signal::derive(move || state.with(|s| s.criteria.search_term.clone()))
                    placeholder="Search parts, manufacturers, categories...".to_string()
                    on_input=Callback::new(move |term: String| {
                        state.update(|s| s.set_search_term(term));
                    })
                />
            </div>

            <div class="marketplace__body">
                <aside class="filters-sidebar">
                    <div class="filters-sidebar__header">
                        <h3>"Categories"</h3>
                        <Show when=is_filter_active>
                            <Button
                                variant="ghost".to_string()
                                on_click=Callback::new(move |_| {
                                    state.update(|s| s.clear_filters());
                                })
                            >
                                {clear_label}
                            </Button>
                        </Show>
                    </div>
                    <For
                        each=move || state.with(|s| s.categories.clone())
                        key=|category| category.clone()
                        let:category
                    >
                        {
                            let name = category.clone();
                            let name_for_toggle = category.clone();
                            view! {
                                <Checkbox
                                    label=Signal::derive({
                                        let name = name.clone();
                                        move || name.clone()
                                    })
                                    checked=Signal::derive({
                                        let name = name.clone();
                                        move || {
                                            state.with(|s| s.criteria.categories.contains(&name))
                                        }
                                    })
                                    on_change=Callback::new(move |_| {
                                        state.update(|s| s.toggle_category(&name_for_toggle));
                                    })
                                />
                            }
                        }
                    </For>
                </aside>

                <section class="marketplace__results">
                    <div class="results-toolbar">
                        <span class="results-info">
                            <strong>{results_count}</strong>
                            " products found"
                        </span>
                        <div class="view-toggle">
                            <button
                                class=move || {
                                    view_btn_class(state.with(|s| s.view_mode), ViewMode::Grid)
                                }
                                on:click=move |_| state.update(|s| s.view_mode = ViewMode::Grid)
                            >
                                "Grid"
                            </button>
                            <button
                                class=move || {
                                    view_btn_class(state.with(|s| s.view_mode), ViewMode::List)
                                }
                                on:click=move |_| state.update(|s| s.view_mode = ViewMode::List)
                            >
                                "List"
                            </button>
                        </div>
                    </div>

                    <Show
                        when=move || state.with(|s| !s.is_loading)
                        fallback=|| view! { <p class="parts-grid__message">"Loading products..."</p> }
                    >
                        {move || {
                            if let Some(error) = state.with(|s| s.error.clone()) {
                                view! {
                                    <div class="parts-grid__message parts-grid__message--error">
                                        <p>"Failed to load products. " {error}</p>
                                        <Button on_click=Callback::new(move |_| load())>
                                            "Try again"
                                        </Button>
                                    </div>
                                }
                                    .into_any()
                            } else if filtered().is_empty() {
                                view! {
                                    <p class="parts-grid__message">"No products found."</p>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <div class=grid_class>
                                        <For
                                            each=filtered
                                            key=|product| product.id
                                            let:product
                                        >
                                            <ProductCard product=product />
                                        </For>
                                    </div>
                                }
                                    .into_any()
                            }
                        }}
                    </Show>
                </section>
            </div>
        </div>
    }
}

fn view_btn_class(current: ViewMode, this: ViewMode) -> &'static str {
    if current == this {
        "view-btn view-btn--active"
    } else {
        "view-btn"
    }
}

#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let status = stock_status(product.stock);
    let badge = status.badge().map(|text| {
        let variant = match status.severity {
            StockSeverity::Low => "warning",
            _ => "success",
        };
        view! { <Badge variant=variant.to_string()>{text}</Badge> }
    });

    let stock_icon = if product.stock > 20 { "✓" } else { "!" };
    let id = product.id;
    let rating = product.vendor.rating;

    let show_details = move |_| {
        leptos::task::spawn_local(async move {
            match crate::domain::a001_product::api::fetch_product(id).await {
                Ok(detail) => {
                    let contact = detail
                        .vendor
                        .email
                        .unwrap_or_else(|| "not listed".to_string());
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message(&format!(
                            "{}\nVendor: {} ({})\nContact: {}",
                            detail.name, detail.vendor.name, detail.vendor.location, contact
                        ));
                    }
                }
                Err(e) => log::error!("Failed to load product {id}: {e}"),
            }
        });
    };

    view! {
        <div class="marketplace-card">
            <div class="marketplace-card__badges">{badge}</div>
            <div class="marketplace-card__image">
                {match product.image_url.clone() {
                    Some(url) => {
                        view! { <img src=url alt=product.name.clone() /> }.into_any()
                    }
                    None => view! { <span class="marketplace-card__placeholder">"⚙"</span> }.into_any(),
                }}
            </div>
            <div class="marketplace-card__content">
                <h3>{product.name.clone()}</h3>
                <p class="marketplace-card__description">{product.description.clone()}</p>
                <div class="marketplace-card__meta">
                    <span>{product.category.clone()}</span>
                    <span>{format!("Stock: {}", product.stock)}</span>
                </div>
                <div class="marketplace-card__vendor">
                    <span class="marketplace-card__vendor-name">{product.vendor.name.clone()}</span>
                    <RatingStars rating=rating />
                </div>
                <div class="marketplace-card__price">{format_price(product.price)}</div>
                <div class="marketplace-card__stock">
                    <span class="marketplace-card__stock-icon">{stock_icon}</span>
                    " "
                    {status.label.clone()}
                </div>
                <Button class="marketplace-card__btn".to_string() on_click=Callback::new(show_details)>
                    "View Details"
                </Button>
            </div>
        </div>
    }
}
