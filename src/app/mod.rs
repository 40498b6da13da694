//! Application-Layer: Controller, State, Events und Handler.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod point_selection;
pub mod route_collection;
/// Application State
///
/// Dieses Modul verwaltet den Zustand einer Sitzung (Punkte, Routen, Anfragen).
pub mod state;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use intent_mapping::MISSING_PLACES_STATUS;
pub use point_selection::{PointSelection, SelectionTransition};
pub use route_collection::RouteCollection;
pub use state::{AppState, FetchTracker, ServiceRequest, UiState};
