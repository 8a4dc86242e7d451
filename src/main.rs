//! WikiCampaign Tracker
//!
//! Dashboard for browsing campaign and contributor statistics, built with
//! Leptos (WASM).
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Navigation is a page enum held in view state rather than URL
//! routing, and every figure comes from embedded sample data; there is no
//! server.

use leptos::*;

mod app;
mod components;
mod data;
mod export;
mod model;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
