pub mod tiers;
pub mod view;

pub use view::VendorsPage;
