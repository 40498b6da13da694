//! SafePath Map Client Library.
//! Interaktionslogik (Punktwahl, Normalisierung, Routenauswahl) als Library
//! exportiert für Tests und alternative Hosts.

pub mod api;
pub mod app;
pub mod core;
pub mod session;
pub mod shared;
pub mod ui;
pub mod view;

pub use api::{normalize_routes, Geocoder, RouteRequest, RoutingService};
pub use app::{
    AppCommand, AppController, AppIntent, AppState, PointSelection, RouteCollection,
    ServiceRequest, UiState,
};
pub use core::{ClientError, GeoBounds, GeoPoint, PointRole, Route, SafetyBand, TravelTimes};
pub use session::Session;
pub use shared::{ClientOptions, RouteStyleOptions};
pub use view::{LogMapView, MapView, PolylineHandle, RecordingMapView, ViewCall};
