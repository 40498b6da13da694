//! Normalisierung der Routing-Antwort auf eine kanonische Routenliste.
//!
//! Das Backend liefert zwei Formate:
//! - kanonisch: `{ "routes": [ { route_name, coordinates, distance_km, ... } ] }`
//! - legacy: `{ "recommended_safe_route": {..}, "safe_osrm_alternatives": [..] }`
//!
//! Beide werden ausschließlich hier unterschieden; Rendering und
//! Selektion sehen nur noch `Route`.

use super::payload::WireRoute;
use crate::core::{clamp_safety_rating, safety_rating_from_risk, ClientError, Route};
use serde_json::Value;

/// Anzeigename der empfohlenen Route im Legacy-Format.
pub const RECOMMENDED_ROUTE_NAME: &str = "Safest (recommended)";
/// Präfix der Alternativen im Legacy-Format (gefolgt von der 1-basierten Nummer).
pub const ALTERNATIVE_ROUTE_PREFIX: &str = "OSRM alt #";

/// Erkanntes Antwortformat.
#[derive(Debug, Clone, Copy)]
pub enum RoutePayload<'a> {
    /// Nicht-leere `routes`-Liste
    Canonical(&'a [Value]),
    /// Empfohlene Route und/oder Alternativen
    Legacy {
        /// `recommended_safe_route`, falls als Objekt vorhanden
        recommended: Option<&'a Value>,
        /// `safe_osrm_alternatives`
        alternatives: &'a [Value],
    },
}

impl<'a> RoutePayload<'a> {
    /// Kanonisches Format, falls `routes` eine nicht-leere Liste ist.
    pub fn canonical(payload: &'a Value) -> Option<Self> {
        payload
            .get("routes")
            .and_then(Value::as_array)
            .filter(|routes| !routes.is_empty())
            .map(|routes| RoutePayload::Canonical(routes.as_slice()))
    }

    /// Legacy-Format, falls empfohlene Route oder Alternativen vorhanden sind.
    pub fn legacy(payload: &'a Value) -> Option<Self> {
        let recommended = payload
            .get("recommended_safe_route")
            .filter(|value| value.is_object());
        let alternatives = payload
            .get("safe_osrm_alternatives")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();

        if recommended.is_none() && alternatives.is_empty() {
            return None;
        }
        Some(RoutePayload::Legacy {
            recommended,
            alternatives,
        })
    }

    /// Wandelt das Format in kanonische Routen um (Reihenfolge = Priorität).
    pub fn into_routes(self) -> Vec<Route> {
        match self {
            RoutePayload::Canonical(entries) => entries
                .iter()
                .enumerate()
                .map(|(index, entry)| canonical_route(index, WireRoute::from_entry(entry)))
                .collect(),
            RoutePayload::Legacy {
                recommended,
                alternatives,
            } => recommended
                .map(|entry| {
                    legacy_route(
                        RECOMMENDED_ROUTE_NAME.to_string(),
                        WireRoute::from_entry(entry),
                    )
                })
                .into_iter()
                .chain(alternatives.iter().enumerate().map(|(index, entry)| {
                    legacy_route(
                        format!("{ALTERNATIVE_ROUTE_PREFIX}{}", index + 1),
                        WireRoute::from_entry(entry),
                    )
                }))
                .collect(),
        }
    }
}

/// Normalisiert eine rohe Routing-Antwort.
///
/// Kanonisch hat Vorrang; Legacy wird nur versucht, wenn kanonisch keine
/// Route ergibt. Ohne Route: `ClientError::EmptyRouteSet`.
pub fn normalize_routes(payload: &Value) -> Result<Vec<Route>, ClientError> {
    let routes = [RoutePayload::canonical(payload), RoutePayload::legacy(payload)]
        .into_iter()
        .flatten()
        .map(RoutePayload::into_routes)
        .find(|routes| !routes.is_empty())
        .ok_or(ClientError::EmptyRouteSet)?;

    log::debug!("{} Routen normalisiert", routes.len());
    Ok(routes)
}

fn canonical_route(index: usize, mut wire: WireRoute) -> Route {
    let avg_risk = wire.avg_risk.unwrap_or(0.0).max(0.0);
    let safety_rating = match wire.safety_rating {
        Some(rating) => clamp_safety_rating(rating),
        None => safety_rating_from_risk(avg_risk),
    };

    Route {
        name: wire
            .route_name
            .take()
            .unwrap_or_else(|| format!("Route #{}", index + 1)),
        coordinates: wire.canonical_path(),
        distance_km: wire.distance_km.unwrap_or(0.0).max(0.0),
        safety_rating,
        segments: wire.segments.unwrap_or(0),
        avg_risk,
        travel_times: wire.travel_times,
    }
}

fn legacy_route(name: String, mut wire: WireRoute) -> Route {
    let avg_risk = wire.avg_risk.unwrap_or(0.0).max(0.0);

    Route {
        name,
        coordinates: wire.legacy_path(),
        distance_km: wire.distance_km.unwrap_or(0.0).max(0.0),
        safety_rating: safety_rating_from_risk(avg_risk),
        segments: wire.segments.unwrap_or(0),
        avg_risk,
        travel_times: wire.travel_times,
    }
}
