//! HTTP transport
//!
//! A thin client over reqwest for talking to the GraphQL endpoint. One
//! request, one response: a failed or non-success exchange surfaces as a
//! typed error and is never retried here.

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};

#[cfg(test)]
mod tests;
