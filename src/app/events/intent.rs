use crate::core::{ClientError, GeoPoint};
use serde_json::Value;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Sitzung gestartet (Karte initialisieren, Standort anfragen)
    SessionStarted,
    /// Geolocation erfolgreich
    LocationAcquired { point: GeoPoint },
    /// Geolocation verweigert oder nicht unterstützt
    LocationUnavailable { reason: String },
    /// Klick auf die Karte
    MapClicked { point: GeoPoint },
    /// "Clear" gedrückt
    ClearRequested,
    /// Von/Nach-Formular abgeschickt
    DirectionsSubmitted { from: String, to: String },
    /// Geocoding beider Namen abgeschlossen (Start zuerst prüfen)
    PlacesResolved {
        lookup: u64,
        start: Result<Option<GeoPoint>, ClientError>,
        destination: Result<Option<GeoPoint>, ClientError>,
    },
    /// Routing-Antwort erhalten (roh, noch nicht normalisiert)
    RoutesReceived { generation: u64, payload: Value },
    /// Routing-Anfrage fehlgeschlagen
    RouteFetchFailed { generation: u64, error: ClientError },
    /// Route in Liste oder Karte gewählt (negativ = ungültig)
    RouteSelected { index: i64 },
    /// Sitzung beenden
    ExitRequested,
}
