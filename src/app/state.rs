//! Application State: zentrale Datenhaltung einer Sitzung.

mod app_state;
mod fetch;
mod ui;

pub use app_state::AppState;
pub use fetch::{FetchTracker, ServiceRequest};
pub use ui::UiState;
