//! State Management
//!
//! Global toast state, the admin auth context and router navigation.

pub mod auth;
pub mod global;
pub mod navigation;

pub use auth::{provide_auth, use_auth, AuthContext};
pub use global::{provide_global_state, GlobalState};
pub use navigation::RouterNavigator;
