//! API Layer
//!
//! Typed row models and the HTTP client for the hosted database service.

pub mod client;
pub mod models;

pub use client::*;
