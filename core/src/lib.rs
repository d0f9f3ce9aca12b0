pub mod catalog;
pub mod error;
pub mod filter;
pub mod types;
pub mod wishlist;

pub use error::{Error, Result};
