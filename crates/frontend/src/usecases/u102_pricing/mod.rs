pub mod plans;
pub mod view;
