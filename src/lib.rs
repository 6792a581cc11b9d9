//! # FixItNow Admin Insights
//!
//! Admin analytics dashboard for the FixItNow services marketplace. The
//! backend precomputes bookings, revenue, top services, top providers and
//! location trends; this crate fetches that payload and renders it.
//!
//! ## Modules
//!
//! - [`analytics`]: Payload wire types
//! - [`dashboard`]: Lifecycle state, render model and collaborator traits
//! - [`error`]: The fetch failure type
//!
//! With the default `native` feature:
//!
//! - [`client`]: HTTP client for the analytics endpoint
//! - [`session`]: File-backed admin session
//! - [`render`]: Terminal renderer
//! - [`fixture`]: Snapshot server for local development
//! - [`config`]: TOML configuration with environment overrides
//! - [`logging`]: `tracing` subscriber setup
//!
//! The core modules build for `wasm32-unknown-unknown`; the Leptos page in
//! `insights-ui/` depends on this crate with `default-features = false`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fixitnow_insights::{AnalyticsClient, ApiConfig, DashboardState, TextRenderer};
//! use fixitnow_insights::dashboard::{load_dashboard, Notifier};
//!
//! struct Stderr;
//!
//! impl Notifier for Stderr {
//!     fn error(&self, message: &str) {
//!         eprintln!("{}", message);
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AnalyticsClient::new(&ApiConfig::default(), Some("admin-token".into()))?;
//!
//!     let state = load_dashboard(&client, &Stderr).await;
//!     print!("{}", TextRenderer::default().render(&state));
//!
//!     if let DashboardState::Ready(payload) = &state {
//!         println!("{} services ranked", payload.top_services.len());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod analytics;
pub mod dashboard;
pub mod error;

#[cfg(feature = "native")]
pub mod client;
#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod fixture;
#[cfg(feature = "native")]
pub mod logging;
#[cfg(feature = "native")]
pub mod render;
#[cfg(feature = "native")]
pub mod session;

pub use analytics::{AnalyticsPayload, LocationTrend, Metrics, TopProvider, TopService};

pub use dashboard::{
    AnalyticsSource, DashboardModel, DashboardState, DashboardView, Navigator, Notifier, Route,
    Session,
};

pub use error::{FetchFailure, FetchResult};

#[cfg(feature = "native")]
pub use client::AnalyticsClient;

#[cfg(feature = "native")]
pub use config::{
    ApiConfig, Config, ConfigError, DisplayConfig, FixtureConfig, LoggingConfig, SessionConfig,
};

#[cfg(feature = "native")]
pub use fixture::{FixtureError, FixtureState};

#[cfg(feature = "native")]
pub use render::TextRenderer;

#[cfg(feature = "native")]
pub use session::{FileSession, SessionError};
