pub mod card_animated;
pub mod rating;
pub mod ui;
