pub mod footer;
pub mod global_context;
pub mod header;
