//! Admin Insights Dashboard
//!
//! The screen itself: fetch the analytics payload once, settle into
//! Loading, Empty or Ready, and derive what to draw.
//!
//! ## Components
//!
//! - [`state`]: the three-way lifecycle
//! - [`model`]: bar scaling and formatted cells
//! - [`format`]: number, currency and rating formatting
//! - [`collab`]: traits for the auth, routing, notification and transport
//!   collaborators
//!
//! Front ends either drive a [`DashboardView`] or call [`load_dashboard`]
//! from their own reactive state.

pub mod collab;
pub mod format;
pub mod model;
pub mod state;

pub use collab::{AnalyticsSource, Navigator, Notifier, Route, Session};
pub use model::{Accent, BarRow, BarScale, DashboardModel, MetricCard, ProviderRow};
pub use state::DashboardState;

/// Notification text for any failed fetch
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load analytics";

/// Run one fetch and settle the result
///
/// Failures are logged, reported once through `notifier`, and turn into
/// [`DashboardState::Empty`].
pub async fn load_dashboard<S, N>(source: &S, notifier: &N) -> DashboardState
where
    S: AnalyticsSource + ?Sized,
    N: Notifier + ?Sized,
{
    let result = source.fetch().await;

    match &result {
        Ok(payload) if payload.is_blank() => {
            tracing::warn!("Analytics payload has no data; showing defaults");
        }
        Ok(payload) => {
            tracing::debug!(
                services = payload.top_services.len(),
                providers = payload.top_providers.len(),
                locations = payload.location_trends.len(),
                "Analytics loaded"
            );
        }
        Err(e) => {
            tracing::error!(error = %e, "Analytics fetch error");
            notifier.error(LOAD_FAILED_MESSAGE);
        }
    }

    DashboardState::settle(&result)
}

/// Clear the session and send the user to the login screen
pub fn logout<S, V>(session: &S, navigator: &V)
where
    S: Session + ?Sized,
    V: Navigator + ?Sized,
{
    session.logout();
    navigator.navigate(Route::AdminLogin);
}

pub fn go_to_dashboard<V: Navigator + ?Sized>(navigator: &V) {
    navigator.navigate(Route::AdminDashboard);
}

/// Dashboard screen bound to its collaborators
pub struct DashboardView<S, N, A, V> {
    source: S,
    notifier: N,
    session: A,
    navigator: V,
    state: DashboardState,
}

impl<S, N, A, V> DashboardView<S, N, A, V>
where
    S: AnalyticsSource,
    N: Notifier,
    A: Session,
    V: Navigator,
{
    pub fn new(source: S, notifier: N, session: A, navigator: V) -> Self {
        Self {
            source,
            notifier,
            session,
            navigator,
            state: DashboardState::Loading,
        }
    }

    /// Mount the screen: enter Loading, fetch, and settle
    ///
    /// Calling this again behaves like a remount; the new result replaces
    /// whatever was there before.
    pub async fn mount(&mut self) -> &DashboardState {
        self.state = DashboardState::Loading;
        self.state = load_dashboard(&self.source, &self.notifier).await;
        &self.state
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Render model for the ready state, recomputed on each call
    pub fn model(&self) -> Option<DashboardModel> {
        self.state.payload().map(DashboardModel::build)
    }

    pub fn logout(&self) {
        logout(&self.session, &self.navigator);
    }

    pub fn go_to_dashboard(&self) {
        go_to_dashboard(&self.navigator);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::{AnalyticsPayload, TopService};
    use crate::error::{FetchFailure, FetchResult};
    use async_trait::async_trait;
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;

    /// Replays queued results, one per fetch
    #[derive(Default)]
    struct ScriptedSource {
        results: RefCell<VecDeque<FetchResult<AnalyticsPayload>>>,
        calls: Cell<usize>,
    }

    impl ScriptedSource {
        fn with(results: Vec<FetchResult<AnalyticsPayload>>) -> Self {
            Self {
                results: RefCell::new(results.into()),
                calls: Cell::new(0),
            }
        }
    }

    #[async_trait(?Send)]
    impl AnalyticsSource for ScriptedSource {
        async fn fetch(&self) -> FetchResult<AnalyticsPayload> {
            self.calls.set(self.calls.get() + 1);
            self.results
                .borrow_mut()
                .pop_front()
                .unwrap_or(Err(FetchFailure::Network("no scripted result".into())))
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        messages: RefCell<Vec<String>>,
    }

    impl Notifier for RecordingNotifier {
        fn error(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }
    }

    #[derive(Default)]
    struct FakeSession {
        logged_out: Cell<bool>,
    }

    impl Session for FakeSession {
        fn logout(&self) {
            self.logged_out.set(true);
        }
    }

    #[derive(Default)]
    struct RecordingNavigator {
        routes: RefCell<Vec<Route>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, route: Route) {
            self.routes.borrow_mut().push(route);
        }
    }

    fn payload_with(title: &str, count: u64) -> AnalyticsPayload {
        AnalyticsPayload {
            top_services: vec![TopService {
                title: title.to_string(),
                booking_count: count,
            }],
            ..Default::default()
        }
    }

    fn view(
        results: Vec<FetchResult<AnalyticsPayload>>,
    ) -> DashboardView<ScriptedSource, RecordingNotifier, FakeSession, RecordingNavigator> {
        DashboardView::new(
            ScriptedSource::with(results),
            RecordingNotifier::default(),
            FakeSession::default(),
            RecordingNavigator::default(),
        )
    }

    #[test]
    fn test_starts_loading() {
        let view = view(vec![]);
        assert!(view.state().is_loading());
        assert!(view.model().is_none());
    }

    #[tokio::test]
    async fn test_successful_load() {
        let mut view = view(vec![Ok(payload_with("Cleaning", 4))]);

        let state = view.mount().await;
        assert!(state.has_payload());
        assert!(view.notifier.messages.borrow().is_empty());

        let model = view.model().unwrap();
        assert_eq!(model.services[0].label, "Cleaning");
        assert_eq!(model.services[0].width_percent, 100.0);
    }

    #[tokio::test]
    async fn test_failed_load_notifies_once() {
        let mut view = view(vec![Err(FetchFailure::Status {
            status: 500,
            message: "boom".into(),
        })]);

        let state = view.mount().await;
        assert_eq!(*state, DashboardState::Empty);
        assert_eq!(
            *view.notifier.messages.borrow(),
            vec![LOAD_FAILED_MESSAGE.to_string()]
        );
        assert_eq!(view.source.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_blank_payload_renders_defaults() {
        let mut view = view(vec![Ok(AnalyticsPayload::from_json("{}").unwrap())]);
        let state = view.mount().await;
        assert!(state.has_payload());
        assert!(view.notifier.messages.borrow().is_empty());

        let model = view.model().unwrap();
        let values: Vec<_> = model.cards.iter().map(|c| c.value.clone()).collect();
        assert_eq!(values, vec!["0", "₹0", "0", "N/A ★"]);
    }

    #[tokio::test]
    async fn test_remount_replaces_payload() {
        let mut view = view(vec![Ok(payload_with("Old", 9)), Ok(payload_with("New", 2))]);

        view.mount().await;
        assert_eq!(view.model().unwrap().services[0].label, "Old");

        view.mount().await;
        let model = view.model().unwrap();
        assert_eq!(model.services.len(), 1);
        assert_eq!(model.services[0].label, "New");
        assert_eq!(model.service_scale.max(), 2);
    }

    #[tokio::test]
    async fn test_failed_remount_drops_stale_payload() {
        let mut view = view(vec![Ok(payload_with("Old", 9)), Err(FetchFailure::Timeout)]);

        view.mount().await;
        assert!(view.state().has_payload());

        view.mount().await;
        assert_eq!(*view.state(), DashboardState::Empty);
        assert_eq!(view.notifier.messages.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_load_dashboard_free_function() {
        let source = ScriptedSource::with(vec![Err(FetchFailure::Decode("bad".into()))]);
        let notifier = RecordingNotifier::default();

        let state = load_dashboard(&source, &notifier).await;
        assert_eq!(state, DashboardState::Empty);
        assert_eq!(notifier.messages.borrow().len(), 1);
    }

    #[test]
    fn test_logout_then_login_route() {
        let view = view(vec![]);
        view.logout();

        assert!(view.session.logged_out.get());
        assert_eq!(*view.navigator.routes.borrow(), vec![Route::AdminLogin]);
    }

    #[test]
    fn test_go_to_dashboard() {
        let view = view(vec![]);
        view.go_to_dashboard();

        assert!(!view.session.logged_out.get());
        assert_eq!(*view.navigator.routes.borrow(), vec![Route::AdminDashboard]);
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::AdminDashboard.path(), "/admin/dashboard");
        assert_eq!(Route::AdminLogin.to_string(), "/admin-login");
    }
}
