use leptos::prelude::*;

/// Top-level pages of the site. Navigation is plain client-side page
/// switching, no router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Marketplace,
    Identify,
    Pricing,
    Vendors,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Marketplace, Page::Identify, Page::Pricing, Page::Vendors];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Marketplace => "Marketplace",
            Page::Identify => "Identify a Part",
            Page::Pricing => "Pricing",
            Page::Vendors => "For Vendors",
        }
    }
}

/// App-wide navigation state, provided once from `App` and read through
/// context by the header and the pages.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active_page: RwSignal<Page>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active_page: RwSignal::new(Page::Marketplace),
        }
    }

    pub fn navigate(&self, page: Page) {
        self.active_page.set(page);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
