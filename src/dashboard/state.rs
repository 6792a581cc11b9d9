//! Dashboard lifecycle state

use crate::analytics::AnalyticsPayload;
use crate::error::FetchResult;

/// Three-way render state of the dashboard
///
/// Priority when rendering is Loading, then Empty, then Ready.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DashboardState {
    /// Fetch in flight
    #[default]
    Loading,
    /// Fetch finished without a payload
    Empty,
    /// Fetch succeeded
    Ready(AnalyticsPayload),
}

impl DashboardState {
    /// Settle a fetch result into a final state
    pub fn settle(result: &FetchResult<AnalyticsPayload>) -> Self {
        match result {
            Ok(payload) => DashboardState::Ready(payload.clone()),
            Err(_) => DashboardState::Empty,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, DashboardState::Loading)
    }

    pub fn has_payload(&self) -> bool {
        matches!(self, DashboardState::Ready(_))
    }

    pub fn payload(&self) -> Option<&AnalyticsPayload> {
        match self {
            DashboardState::Ready(payload) => Some(payload),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchFailure;

    #[test]
    fn test_default_is_loading() {
        let state = DashboardState::default();
        assert!(state.is_loading());
        assert!(!state.has_payload());
    }

    #[test]
    fn test_settle() {
        let ok = DashboardState::settle(&Ok(AnalyticsPayload::default()));
        assert!(ok.has_payload());

        let failed = DashboardState::settle(&Err(FetchFailure::Timeout));
        assert_eq!(failed, DashboardState::Empty);
        assert!(failed.payload().is_none());
    }
}
