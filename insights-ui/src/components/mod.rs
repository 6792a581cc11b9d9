//! UI Components
//!
//! Reusable Leptos components for the insights page.

pub mod bar_list;
pub mod loading;
pub mod metric_card;
pub mod nav;
pub mod provider_table;
pub mod toast;

pub use bar_list::BarList;
pub use loading::StatusMessage;
pub use metric_card::SummaryCard;
pub use nav::Nav;
pub use provider_table::ProviderTable;
pub use toast::Toast;
