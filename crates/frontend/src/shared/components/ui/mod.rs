mod badge;
mod button;
mod checkbox;
mod input;

pub use badge::Badge;
pub use button::Button;
pub use checkbox::Checkbox;
pub use input::Input;
