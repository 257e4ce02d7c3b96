pub mod aggregate;
pub mod display;
pub mod filter;

pub use aggregate::{
    CategoryListResponse, Product, ProductDetailResponse, ProductId, ProductListResponse,
    ProductVendor,
};
pub use display::{star_glyphs, stock_status, StarGlyph, StockSeverity, StockStatus};
pub use filter::FilterCriteria;
