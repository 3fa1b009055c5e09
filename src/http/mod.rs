//! HTTP request execution and error model.

mod client;
mod error;

pub use client::{HttpClient, JSON_MEDIA_TYPE};
pub use error::ApiError;
