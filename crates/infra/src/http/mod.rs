//! HTTP transport shared by the remote integrations.

mod client;

pub use client::{HttpClient, HttpClientBuilder};
