use leptos::prelude::*;

use super::plans::{faq, polyline_points, BillingCycle, PLANS, PRICE_HISTORY};
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::ui::{Badge, Button};

const CHART_WIDTH: f64 = 600.0;
const CHART_HEIGHT: f64 = 200.0;
const CHART_PADDING: f64 = 12.0;

#[component]
pub fn PricingPage() -> impl IntoView {
    let (cycle, set_cycle) = signal(BillingCycle::Monthly);
    let (open_faq, set_open_faq) = signal(Option::<usize>::None);

    let toggle_label = move || match cycle.get() {
        BillingCycle::Monthly => "Billed monthly",
        BillingCycle::Annual => "Billed annually",
    };

    view! {
        <div class="pricing">
            <div class="billing-toggle">
                <label class="form__checkbox-wrapper">
                    <input
                        type="checkbox"
                        class="form__checkbox"
                        checked=move || cycle.get() == BillingCycle::Annual
                        on:change=move |ev| {
                            set_cycle
                                .set(
                                    if event_target_checked(&ev) {
                                        BillingCycle::Annual
                                    } else {
                                        BillingCycle::Monthly
                                    },
                                );
                        }
                    />
                    <span>{toggle_label}</span>
                </label>
            </div>

            <div class="pricing-cards">
                {PLANS
                    .iter()
                    .enumerate()
                    .map(|(i, plan)| {
                        let plan = *plan;
                        let delay = (i as u32) * 100;
                        let name = plan.name;
                        let cta = plan.cta;
                        let class = if plan.highlighted {
                            "pricing-card pricing-card--highlighted"
                        } else {
                            "pricing-card"
                        };
                        view! {
                            <CardAnimated delay_ms=delay class=class.to_string()>
                                <div class="pricing-card__header">
                                    <h3>{name}</h3>
                                    {plan
                                        .highlighted
                                        .then(|| {
                                            view! {
                                                <Badge variant="success".to_string()>"Most popular"</Badge>
                                            }
                                        })}
                                </div>
                                <div class="pricing-card__price">
                                    {move || match plan.price_for(cycle.get()) {
                                        Some(price) if price == 0.0 => "Free".to_string(),
                                        Some(price) => format!("৳{price:.0}/mo"),
                                        None => "Custom".to_string(),
                                    }}
                                </div>
                                <ul class="pricing-card__features">
                                    {plan
                                        .features
                                        .iter()
                                        .map(|feature| view! { <li>{*feature}</li> })
                                        .collect_view()}
                                </ul>
                                <Button on_click=Callback::new(move |_| {
                                    log::info!("Plan selected: {name}");
                                })>{cta}</Button>
                            </CardAnimated>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="price-chart">
                <h3>"Price history — Siemens 6ES7 315-2EH14-0AB0"</h3>
                <svg
                    viewBox=format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}")
                    class="price-chart__svg"
                    preserveAspectRatio="none"
                >
                    <polyline
                        points=polyline_points(
                            &PRICE_HISTORY,
                            CHART_WIDTH,
                            CHART_HEIGHT,
                            CHART_PADDING,
                        )
                        fill="none"
                        stroke="#2563eb"
                        stroke-width="3"
                    ></polyline>
                </svg>
                <div class="price-chart__labels">
                    {PRICE_HISTORY
                        .iter()
                        .map(|point| view! { <span>{point.month}</span> })
                        .collect_view()}
                </div>
            </div>

            <div class="faq">
                <h3>"Frequently asked questions"</h3>
                {faq::ITEMS
                    .iter()
                    .enumerate()
                    .map(|(i, (question, answer))| {
                        view! {
                            <div
                                class=move || {
                                    if open_faq.get() == Some(i) {
                                        "faq-item faq-item--active"
                                    } else {
                                        "faq-item"
                                    }
                                }
                                on:click=move |_| {
                                    set_open_faq
                                        .update(|open| {
                                            *open = if *open == Some(i) { None } else { Some(i) };
                                        });
                                }
                            >
                                <h4>{*question}</h4>
                                <Show when=move || open_faq.get() == Some(i)>
                                    <p>{*answer}</p>
                                </Show>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
