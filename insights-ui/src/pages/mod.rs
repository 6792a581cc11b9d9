//! Pages
//!
//! Top-level page components for each route.

pub mod admin_dashboard;
pub mod admin_insights;
pub mod admin_login;

pub use admin_dashboard::AdminDashboard;
pub use admin_insights::AdminInsights;
pub use admin_login::AdminLogin;
