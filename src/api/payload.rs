//! Wire-Format der Routing-Antwort mit feldweise toleranter Dekodierung.
//!
//! Jedes Feld wird einzeln auf einen Default zurückgesetzt, wenn es fehlt
//! oder einen unerwarteten Typ hat. Eine einzelne kaputte Angabe verwirft
//! nie die ganze Route.

use crate::core::{GeoPoint, TravelTimes};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Eine Route im Wire-Format. Kanonisches und Legacy-Format teilen sich
/// die Feldnamen; Legacy liefert den Pfad unter `route`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct WireRoute {
    /// Anzeigename (nur kanonisches Format)
    #[serde(deserialize_with = "lenient_name")]
    pub route_name: Option<String>,
    /// Pfad (kanonisch)
    #[serde(deserialize_with = "lenient_points")]
    pub coordinates: Vec<GeoPoint>,
    /// Pfad (Legacy)
    #[serde(deserialize_with = "lenient_points")]
    pub route: Vec<GeoPoint>,
    /// Länge in Kilometern
    #[serde(deserialize_with = "lenient_number")]
    pub distance_km: Option<f64>,
    /// Direkt gelieferte Sicherheitsbewertung
    #[serde(deserialize_with = "lenient_number")]
    pub safety_rating: Option<f64>,
    /// Segmentanzahl
    #[serde(deserialize_with = "lenient_count")]
    pub segments: Option<u32>,
    /// Mittleres Risiko (Legacy-Backends senden hier auch `null`)
    #[serde(deserialize_with = "lenient_number")]
    pub avg_risk: Option<f64>,
    /// Reisezeiten je Verkehrsmittel
    #[serde(deserialize_with = "lenient_travel_times")]
    pub travel_times: TravelTimes,
}

impl WireRoute {
    /// Dekodiert einen Listeneintrag. Nicht-Objekte ergeben eine Route
    /// mit ausschließlich Default-Feldern.
    pub fn from_entry(entry: &Value) -> Self {
        match WireRoute::deserialize(entry) {
            Ok(route) => route,
            Err(e) => {
                log::debug!("Routen-Eintrag nicht lesbar, verwende Defaults: {e}");
                Self::default()
            }
        }
    }

    /// Bevorzugt `route` und fällt auf `coordinates` zurück.
    pub fn legacy_path(&mut self) -> Vec<GeoPoint> {
        if self.route.is_empty() {
            std::mem::take(&mut self.coordinates)
        } else {
            std::mem::take(&mut self.route)
        }
    }

    /// Bevorzugt `coordinates` und fällt auf `route` zurück.
    pub fn canonical_path(&mut self) -> Vec<GeoPoint> {
        if self.coordinates.is_empty() {
            std::mem::take(&mut self.route)
        } else {
            std::mem::take(&mut self.coordinates)
        }
    }
}

/// Liest eine Zahl aus einer JSON-Zahl oder einem numerischen String.
pub fn number_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

/// Liest einen Punkt aus `[lat, lon, ...]` oder `{ "lat": .., "lon": .. }`.
pub fn point_from_value(value: &Value) -> Option<GeoPoint> {
    match value {
        Value::Array(pair) if pair.len() >= 2 => Some(GeoPoint::new(
            number_from_value(&pair[0])?,
            number_from_value(&pair[1])?,
        )),
        Value::Object(map) => Some(GeoPoint::new(
            number_from_value(map.get("lat")?)?,
            number_from_value(map.get("lon")?)?,
        )),
        _ => None,
    }
}

fn lenient_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(number_from_value(&Value::deserialize(deserializer)?))
}

fn lenient_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    // f64 -> u32 saturiert: negative Werte werden 0
    Ok(number_from_value(&Value::deserialize(deserializer)?).map(|n| n.max(0.0) as u32))
}

fn lenient_name<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let name = match Value::deserialize(deserializer)? {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return Ok(None),
    };
    Ok(Some(name).filter(|n| !n.is_empty()))
}

fn lenient_points<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<GeoPoint>, D::Error> {
    let points = match Value::deserialize(deserializer)? {
        Value::Array(entries) => entries.iter().filter_map(point_from_value).collect(),
        _ => Vec::new(),
    };
    Ok(points)
}

fn lenient_travel_times<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<TravelTimes, D::Error> {
    let value = Value::deserialize(deserializer)?;
    let Some(map) = value.as_object() else {
        return Ok(TravelTimes::UNKNOWN);
    };
    let minutes = |key: &str| map.get(key).and_then(number_from_value);
    Ok(TravelTimes {
        walk: minutes("walk"),
        bike: minutes("bike"),
        car: minutes("car"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn odd_typed_fields_fall_back_individually() {
        let wire = WireRoute::from_entry(&json!({
            "route_name": "Main",
            "distance_km": "3.5",
            "segments": "many",
            "avg_risk": null,
            "coordinates": [[1, 2], "garbage", {"lat": "3", "lon": 4}, [5]],
            "travel_times": {"walk": 40, "bike": "-", "car": "7"}
        }));

        assert_eq!(wire.route_name.as_deref(), Some("Main"));
        assert_eq!(wire.distance_km, Some(3.5));
        assert_eq!(wire.segments, None);
        assert_eq!(wire.avg_risk, None);
        assert_eq!(
            wire.coordinates,
            vec![GeoPoint::new(1.0, 2.0), GeoPoint::new(3.0, 4.0)]
        );
        assert_eq!(wire.travel_times.walk, Some(40.0));
        assert_eq!(wire.travel_times.bike, None);
        assert_eq!(wire.travel_times.car, Some(7.0));
    }

    #[test]
    fn non_object_entry_yields_defaults() {
        let wire = WireRoute::from_entry(&json!("not a route"));

        assert!(wire.route_name.is_none());
        assert!(wire.coordinates.is_empty());
        assert_eq!(wire.travel_times, TravelTimes::UNKNOWN);
    }

    #[test]
    fn negative_segment_count_saturates_to_zero() {
        let wire = WireRoute::from_entry(&json!({ "segments": -4 }));
        assert_eq!(wire.segments, Some(0));
    }
}
