//! Atelier Digital
//!
//! Marketing site and client dashboard for the studio, built with Leptos
//! (WASM).
//!
//! # Features
//!
//! - Marketing pages with ambient canvas effects
//! - Client dashboard over the hosted database service
//! - Resilient lazy route loading with retry and backoff
//! - On-demand icon loading
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles
//! to WebAssembly. All persistence lives in an external hosted database;
//! the app issues HTTP queries and renders results.

use leptos::*;

mod api;
mod app;
mod components;
mod loader;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
