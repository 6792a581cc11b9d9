//! FixItNow Admin Insights
//!
//! Analytics page of the FixItNow admin console, built with Leptos (WASM).
//!
//! # Features
//!
//! - Booking, revenue, service and rating summary cards
//! - Most booked services and location trends as horizontal bars
//! - Top providers table
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Payload types, the Loading/Empty/Ready lifecycle and all
//! scaling and formatting come from the `fixitnow-insights` core crate; this
//! crate only wires them to signals, the router and the browser.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
