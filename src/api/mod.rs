//! Anbindung der externen Dienste: Routing, Geocoding und Antwort-Normalisierung.

pub mod geocoding_client;
pub mod normalize;
pub mod payload;
pub mod routing_client;

use crate::core::{ClientError, GeoPoint};
use serde_json::Value;
use std::future::Future;

pub use geocoding_client::GeocodingClient;
pub use normalize::{normalize_routes, RoutePayload};
pub use routing_client::RoutingClient;

/// Start/Ziel-Paar einer Routing-Anfrage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteRequest {
    /// Startpunkt
    pub start: GeoPoint,
    /// Zielpunkt
    pub destination: GeoPoint,
}

/// Routing-Dienst: liefert die rohe Antwort für ein Start/Ziel-Paar.
///
/// Nicht-2xx-Status und Transportfehler sind `ClientError::NetworkFailure`.
pub trait RoutingService {
    /// Fragt Routen zwischen Start und Ziel an.
    fn fetch_routes(
        &self,
        request: RouteRequest,
    ) -> impl Future<Output = Result<Value, ClientError>>;
}

/// Geocoder: löst einen Ortsnamen auf. `Ok(None)` = kein Treffer.
pub trait Geocoder {
    /// Löst `place` auf den ersten Treffer auf.
    fn resolve(&self, place: &str) -> impl Future<Output = Result<Option<GeoPoint>, ClientError>>;
}
