//! Fehler-Taxonomie des Clients.

use super::PointRole;
use thiserror::Error;

/// Fehler, die an der Interaktionsgrenze als Statusmeldung enden.
///
/// `Clone`, damit Fehler in Intents und im Command-Log mitreisen können.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// Geolocation verweigert oder nicht unterstützt (→ Fallback-Koordinate)
    #[error("location unavailable: {reason}")]
    LocationUnavailable { reason: String },

    /// Nicht-2xx-Status, Transportfehler oder unlesbare Antwort
    #[error("{0}")]
    NetworkFailure(String),

    /// Der Normalizer hat keine verwendbare Route gefunden
    #[error("No routes received")]
    EmptyRouteSet,

    /// Geocoding ohne Treffer für Start oder Ziel
    #[error("{} not found", place_label(.0))]
    PlaceNotFound(PointRole),
}

fn place_label(role: &PointRole) -> &'static str {
    match role {
        PointRole::Start => "Starting location",
        PointRole::Destination => "Destination",
    }
}

impl ClientError {
    /// Kurze, menschenlesbare Statusmeldung für die Oberfläche.
    pub fn status_message(&self) -> String {
        match self {
            ClientError::LocationUnavailable { .. } => "Using default starting location.".into(),
            ClientError::PlaceNotFound(_) => format!("{self}."),
            ClientError::NetworkFailure(_) | ClientError::EmptyRouteSet => {
                format!("Error: {self}")
            }
        }
    }
}

impl ClientError {
    /// Statusmeldung für ein fehlgeschlagenes Geocoding der Seite `role`.
    ///
    /// Kein Treffer bleibt bei "<Seite> not found.", alle anderen Fehler
    /// nennen die Seite vor der Ursache.
    pub fn lookup_status(&self, role: PointRole) -> String {
        match self {
            ClientError::PlaceNotFound(_) => self.status_message(),
            other => format!("{} lookup failed: {other}", place_label(&role)),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(value: reqwest::Error) -> Self {
        ClientError::NetworkFailure(format!("network error: {value}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_not_found_messages_are_role_specific() {
        assert_eq!(
            ClientError::PlaceNotFound(PointRole::Start).status_message(),
            "Starting location not found."
        );
        assert_eq!(
            ClientError::PlaceNotFound(PointRole::Destination).status_message(),
            "Destination not found."
        );
    }

    #[test]
    fn lookup_failures_name_the_side() {
        let timeout = ClientError::NetworkFailure("network error: timeout".into());

        assert_eq!(
            timeout.lookup_status(PointRole::Start),
            "Starting location lookup failed: network error: timeout"
        );
        assert_eq!(
            timeout.lookup_status(PointRole::Destination),
            "Destination lookup failed: network error: timeout"
        );
        assert_eq!(
            ClientError::PlaceNotFound(PointRole::Destination).lookup_status(PointRole::Destination),
            "Destination not found."
        );
    }

    #[test]
    fn route_failures_are_prefixed() {
        assert_eq!(
            ClientError::EmptyRouteSet.status_message(),
            "Error: No routes received"
        );
        assert_eq!(
            ClientError::NetworkFailure("Server error 502".into()).status_message(),
            "Error: Server error 502"
        );
    }
}
