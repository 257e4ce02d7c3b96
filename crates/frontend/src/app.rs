use crate::domain::a001_product::ui::list::MarketplacePage;
use crate::layout::footer::Footer;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::layout::header::Header;
use crate::usecases::u101_identify_part::view::IdentifyPage;
use crate::usecases::u102_pricing::view::PricingPage;
use crate::usecases::u103_vendor_onboarding::view::VendorsPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide navigation state to the whole app via context.
    provide_context(AppGlobalContext::new());

    let ctx = expect_context::<AppGlobalContext>();

    view! {
        <Header />
        <main class="page-content">
            {move || match ctx.active_page.get() {
                Page::Marketplace => view! { <MarketplacePage /> }.into_any(),
                Page::Identify => view! { <IdentifyPage /> }.into_any(),
                Page::Pricing => view! { <PricingPage /> }.into_any(),
                Page::Vendors => view! { <VendorsPage /> }.into_any(),
            }}
        </main>
        <Footer />
    }
}
