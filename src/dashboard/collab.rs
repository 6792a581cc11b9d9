//! Collaborators
//!
//! The dashboard owns none of auth, routing, notifications or transport.
//! Each front end plugs its own implementation into these traits.

use async_trait::async_trait;

use crate::analytics::AnalyticsPayload;
use crate::error::FetchResult;

/// Where the analytics payload comes from
///
/// Futures are not required to be `Send` so browser fetches can implement
/// this directly.
#[async_trait(?Send)]
pub trait AnalyticsSource {
    /// Perform one read of the admin analytics
    async fn fetch(&self) -> FetchResult<AnalyticsPayload>;
}

/// Transient, non-blocking user alerts
pub trait Notifier {
    fn error(&self, message: &str);
}

/// External auth context
pub trait Session {
    /// Drop whatever credentials the session holds
    fn logout(&self);
}

/// External navigation mechanism
pub trait Navigator {
    fn navigate(&self, route: Route);
}

/// Screens the dashboard can send the user to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    AdminDashboard,
    AdminInsights,
    AdminLogin,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::AdminDashboard => "/admin/dashboard",
            Route::AdminInsights => "/admin/insights",
            Route::AdminLogin => "/admin-login",
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}
