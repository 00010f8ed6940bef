//! Outbound HTTP access with uniform success/failure results.

mod client;
mod endpoints;
mod error;
mod response;

pub use client::{ApiService, RequestOptions, RetryPolicy};
pub use endpoints::Endpoints;
pub use error::ApiError;
pub use response::{ApiResponse, BatchEntry};
