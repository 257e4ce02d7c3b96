pub mod api;
pub mod api_utils;
pub mod components;
