//! Typed HTTP clients for the WooCommerce/WordPress REST APIs.
//!
//! Thin and policy-free: every method issues one request, checks the status,
//! decodes the JSON, and maps failures into [`ClientError`]. Retry and
//! empty-state policy belong to the callers; credentials never leave this
//! crate's request builders.

mod config;
mod error;
mod fetch;
mod newsletter;
mod woo;
mod wp;

pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use newsletter::NewsletterClient;
pub use woo::WooClient;
pub use wp::WpClient;
