use leptos::prelude::*;

use super::tiers::{BENEFITS, HERO_STATS, TIERS};
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::ui::{Badge, Button};

/// Vendor onboarding page: hero stats, benefits and the three account tiers.
#[component]
pub fn VendorsPage() -> impl IntoView {
    view! {
        <div class="vendors-page">
            <section class="vendors-hero">
                <h2>"Sell industrial parts where buyers already look"</h2>
                <div class="hero-stats">
                    {HERO_STATS
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class="hero-stat">
                                    <span class="hero-stat__value">{stat.value}</span>
                                    <span class="hero-stat__label">{stat.label}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="vendors-benefits">
                {BENEFITS
                    .iter()
                    .enumerate()
                    .map(|(i, benefit)| {
                        let delay = (i as u32) * 100;
                        view! {
                            <CardAnimated
                                delay_ms=delay
                                class="benefit-card".to_string()
                            >
                                <h3>{benefit.title}</h3>
                                <p>{benefit.body}</p>
                            </CardAnimated>
                        }
                    })
                    .collect_view()}
            </section>

            <section class="vendors-tiers">
                <h3>"Choose your account tier"</h3>
                <div class="vendors-tiers__grid">
                    {TIERS
                        .iter()
                        .enumerate()
                        .map(|(i, tier)| {
                            let delay = (i as u32) * 100;
                            let class = if tier.highlighted {
                                "vendor-tier vendor-tier--highlighted"
                            } else {
                                "vendor-tier"
                            };
                            let signup_message = tier.signup_message;
                            let name = tier.name;
                            view! {
                                <CardAnimated delay_ms=delay class=class.to_string()>
                                    <div class="vendor-tier__header">
                                        <h4>{name}</h4>
                                        {tier
                                            .highlighted
                                            .then(|| {
                                                view! {
                                                    <Badge variant="primary".to_string()>
                                                        "Recommended"
                                                    </Badge>
                                                }
                                            })}
                                    </div>
                                    <p class="vendor-tier__commission">
                                        {format!("{:.0}% commission per sale", tier.commission)}
                                    </p>
                                    <ul class="vendor-tier__features">
                                        {tier
                                            .features
                                            .iter()
                                            .map(|feature| view! { <li>{*feature}</li> })
                                            .collect_view()}
                                    </ul>
                                    <Button on_click=Callback::new(move |_| {
                                        log::info!("Vendor tier selected: {name}");
                                        if let Some(window) = web_sys::window() {
                                            let _ = window.alert_with_message(signup_message);
                                        }
                                    })>{tier.cta}</Button>
                                </CardAnimated>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
