//! Clients for external services consumed over HTTP

pub mod advisory;
pub mod retry;

pub use advisory::AdvisoryClient;
pub use retry::{retry_with, RetryPolicy};
