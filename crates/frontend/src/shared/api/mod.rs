pub mod decode;
pub mod error;

pub use error::FetchError;
