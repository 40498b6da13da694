use crate::core::{ClientError, GeoPoint, PointRole};
use serde_json::Value;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Karte auf Startansicht setzen, Panels leeren
    InitializeView,
    /// Standort als Start übernehmen
    SetStartFromLocation { point: GeoPoint },
    /// Fallback-Start verwenden (Geolocation nicht verfügbar)
    UseFallbackLocation { reason: String },
    /// Kartenklick nach Klick-Policy verarbeiten
    SelectPoint { point: GeoPoint },
    /// Punkte, Routen und Selektion zurücksetzen
    ClearSession,
    /// Geocoding für Start- und Zielnamen anfordern
    RequestGeocoding { from: String, to: String },
    /// Beide Punkte direkt setzen (aufgelöste Ortsnamen)
    SetBothPoints {
        lookup: u64,
        start: GeoPoint,
        destination: GeoPoint,
    },
    /// Geocoding einer Seite fehlgeschlagen oder ohne Treffer
    ReportLookupFailure {
        lookup: u64,
        role: PointRole,
        error: ClientError,
    },
    /// Routing-Antwort normalisieren und laden
    ApplyRoutePayload { generation: u64, payload: Value },
    /// Routing-Fehler melden
    ReportFetchFailure { generation: u64, error: ClientError },
    /// Route selektieren
    SelectRoute { index: usize },
    /// Statuszeile setzen
    SetStatus { message: String },
    /// Sitzung beenden
    RequestExit,
}
