pub mod error;

pub use error::CheckoutError;
