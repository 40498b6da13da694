//! Projektionen, die der Controller an die `MapView` übergibt.
//!
//! Reine Datenobjekte ohne Logik; die Formatierung passiert beim Aufbau.

use crate::core::{Route, TravelTimes};

/// Titel des Stats-Panels, solange keine Route selektiert ist.
pub const DEFAULT_STATS_TITLE: &str = "Select a route";

/// Darstellung einer Polylinie.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolylineStyle {
    /// Linienfarbe (Hex, z.B. "#4CAF50")
    pub color: &'static str,
    /// Linienstärke in Pixeln
    pub weight: f32,
    /// Deckkraft 0..1
    pub opacity: f32,
}

/// Formatierte Kennzahlen einer Route.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteStats {
    pub name: String,
    /// z.B. "2.35 km"
    pub distance: String,
    /// z.B. "4.5/5"
    pub safety: String,
    pub segments: String,
    /// z.B. "0.100"
    pub avg_risk: String,
    /// "<n> min" oder "-"
    pub walk: String,
    pub bike: String,
    pub car: String,
}

impl RouteStats {
    /// Formatiert die Kennzahlen einer Route für die Anzeige.
    pub fn from_route(route: &Route) -> Self {
        let TravelTimes { walk, bike, car } = route.travel_times;
        Self {
            name: route.name.clone(),
            distance: format_distance(route.distance_km),
            safety: format_rating(route.safety_rating),
            segments: route.segments.to_string(),
            avg_risk: format!("{:.3}", route.avg_risk),
            walk: format_minutes(walk),
            bike: format_minutes(bike),
            car: format_minutes(car),
        }
    }
}

/// Stats-Panel: Titel plus optionale Kennzahlen.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsPanel {
    /// Name der selektierten Route oder "Select a route"
    pub title: String,
    /// `None` = leeres Panel
    pub stats: Option<RouteStats>,
}

impl Default for StatsPanel {
    fn default() -> Self {
        Self {
            title: DEFAULT_STATS_TITLE.to_string(),
            stats: None,
        }
    }
}

impl StatsPanel {
    /// Panel für die selektierte Route.
    pub fn for_route(route: &Route) -> Self {
        Self {
            title: route.name.clone(),
            stats: Some(RouteStats::from_route(route)),
        }
    }
}

/// Ein Eintrag der Routenliste.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteListEntry {
    /// "<name> (x.xx km)"
    pub label: String,
    /// Wert für die Sicherheitsanzeige (0..=5)
    pub safety_value: f64,
    /// "x.x/5"
    pub rating_label: String,
    /// Bandfarbe der Route
    pub color: &'static str,
    /// Nur der Eintrag der selektierten Route ist hervorgehoben
    pub highlighted: bool,
}

impl RouteListEntry {
    /// Baut den Listeneintrag einer Route.
    pub fn from_route(route: &Route, highlighted: bool) -> Self {
        Self {
            label: format!("{} ({})", route.name, format_distance(route.distance_km)),
            safety_value: route.safety_rating,
            rating_label: format_rating(route.safety_rating),
            color: route.safety_band().color(),
            highlighted,
        }
    }
}

fn format_distance(km: f64) -> String {
    format!("{km:.2} km")
}

fn format_rating(rating: f64) -> String {
    format!("{rating:.1}/5")
}

/// Minuten ungerundet, wie vom Dienst geliefert (`28` → "28 min", `12.5` → "12.5 min").
fn format_minutes(minutes: Option<f64>) -> String {
    match minutes {
        Some(m) => format!("{m} min"),
        None => "-".to_string(),
    }
}
