//! Zentrale Konfiguration des SafePath-Clients.
//!
//! `ClientOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Endpunkte ───────────────────────────────────────────────────────

/// Standard-Endpunkt des Routing-Dienstes.
pub const ROUTING_URL: &str = "http://127.0.0.1:8000/api/safe-route/";
/// Standard-Endpunkt des Geocoders (Nominatim-kompatibel).
pub const GEOCODING_URL: &str = "https://nominatim.openstreetmap.org/search";
/// Timeout pro HTTP-Anfrage in Sekunden.
pub const REQUEST_TIMEOUT_SECS: u64 = 15;
/// User-Agent für alle Anfragen (Nominatim verlangt einen).
pub const USER_AGENT: &str = concat!("safepath-map-client/", env!("CARGO_PKG_VERSION"));

// ── Karte ───────────────────────────────────────────────────────────

/// Startpunkt, wenn keine Geolocation verfügbar ist.
pub const FALLBACK_START: [f64; 2] = [28.474780644693578, 77.47638190820159];
/// Kartenmitte beim Start.
pub const INITIAL_CENTER: [f64; 2] = [28.6139, 77.209];
/// Zoomstufe beim Start.
pub const INITIAL_ZOOM: u8 = 13;
/// Zoomstufe nach erfolgreicher Standortbestimmung.
pub const LOCATION_ZOOM: u8 = 15;
/// Zoomstufe nach Auflösung eines Von/Nach-Formulars.
pub const DIRECTIONS_ZOOM: u8 = 13;
/// Innenabstand beim Einpassen aller Routen in Pixeln.
pub const FIT_PADDING_PX: u32 = 50;

// ── Routen-Darstellung ─────────────────────────────────────────────

/// Linienstärke der primären Route nach dem Laden.
pub const PRIMARY_ROUTE_WEIGHT: f32 = 6.0;
/// Deckkraft der primären Route nach dem Laden.
pub const PRIMARY_ROUTE_OPACITY: f32 = 0.9;
/// Linienstärke der Alternativen nach dem Laden.
pub const ALTERNATIVE_ROUTE_WEIGHT: f32 = 4.0;
/// Deckkraft der Alternativen nach dem Laden.
pub const ALTERNATIVE_ROUTE_OPACITY: f32 = 0.5;
/// Linienstärke der selektierten Route.
pub const SELECTED_ROUTE_WEIGHT: f32 = 6.0;
/// Deckkraft der selektierten Route.
pub const SELECTED_ROUTE_OPACITY: f32 = 0.95;
/// Linienstärke nicht selektierter Routen.
pub const UNSELECTED_ROUTE_WEIGHT: f32 = 4.0;
/// Deckkraft nicht selektierter Routen.
pub const UNSELECTED_ROUTE_OPACITY: f32 = 0.4;

/// Strichstärken und Deckkraft der Routen-Polylinien.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteStyleOptions {
    /// Linienstärke der primären Route (Index 0) nach dem Laden
    pub primary_weight: f32,
    /// Deckkraft der primären Route nach dem Laden
    pub primary_opacity: f32,
    /// Linienstärke der Alternativen nach dem Laden
    pub alternative_weight: f32,
    /// Deckkraft der Alternativen nach dem Laden
    pub alternative_opacity: f32,
    /// Linienstärke der selektierten Route
    pub selected_weight: f32,
    /// Deckkraft der selektierten Route
    pub selected_opacity: f32,
    /// Linienstärke nicht selektierter Routen
    pub unselected_weight: f32,
    /// Deckkraft nicht selektierter Routen
    pub unselected_opacity: f32,
    /// Innenabstand beim Einpassen (Pixel)
    pub fit_padding_px: u32,
}

impl Default for RouteStyleOptions {
    fn default() -> Self {
        Self {
            primary_weight: PRIMARY_ROUTE_WEIGHT,
            primary_opacity: PRIMARY_ROUTE_OPACITY,
            alternative_weight: ALTERNATIVE_ROUTE_WEIGHT,
            alternative_opacity: ALTERNATIVE_ROUTE_OPACITY,
            selected_weight: SELECTED_ROUTE_WEIGHT,
            selected_opacity: SELECTED_ROUTE_OPACITY,
            unselected_weight: UNSELECTED_ROUTE_WEIGHT,
            unselected_opacity: UNSELECTED_ROUTE_OPACITY,
            fit_padding_px: FIT_PADDING_PX,
        }
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Client-Optionen.
/// Wird als `safepath_client.toml` neben der Binary gesucht.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientOptions {
    // ── Dienste ─────────────────────────────────────────────────
    /// Routing-Endpunkt (GET mit start_lat/start_lon/end_lat/end_lon)
    pub routing_url: String,
    /// Geocoding-Endpunkt (GET mit format=json&q=…)
    pub geocoding_url: String,
    /// Timeout pro Anfrage in Sekunden
    pub request_timeout_secs: u64,
    /// User-Agent-Header
    pub user_agent: String,

    // ── Karte ───────────────────────────────────────────────────
    /// Fallback-Startpunkt `[lat, lon]` ohne Geolocation
    pub fallback_start: [f64; 2],
    /// Kartenmitte beim Start `[lat, lon]`
    pub initial_center: [f64; 2],
    /// Zoomstufe beim Start
    pub initial_zoom: u8,
    /// Zoomstufe nach Standortbestimmung
    pub location_zoom: u8,
    /// Zoomstufe nach Von/Nach-Auflösung
    pub directions_zoom: u8,

    // ── Routen ──────────────────────────────────────────────────
    /// Darstellung der Routen-Polylinien
    pub route_style: RouteStyleOptions,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            routing_url: ROUTING_URL.to_string(),
            geocoding_url: GEOCODING_URL.to_string(),
            request_timeout_secs: REQUEST_TIMEOUT_SECS,
            user_agent: USER_AGENT.to_string(),

            fallback_start: FALLBACK_START,
            initial_center: INITIAL_CENTER,
            initial_zoom: INITIAL_ZOOM,
            location_zoom: LOCATION_ZOOM,
            directions_zoom: DIRECTIONS_ZOOM,

            route_style: RouteStyleOptions::default(),
        }
    }
}

impl ClientOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("safepath_client"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("safepath_client.toml")
    }

    /// Timeout pro Anfrage als `Duration`.
    pub fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults_for_missing_fields() {
        let opts: ClientOptions = toml::from_str(
            r#"
            routing_url = "http://routing.local/api/safe-route/"

            [route_style]
            selected_weight = 8.0
            "#,
        )
        .expect("TOML sollte lesbar sein");

        assert_eq!(opts.routing_url, "http://routing.local/api/safe-route/");
        assert_eq!(opts.geocoding_url, GEOCODING_URL);
        assert_eq!(opts.fallback_start, FALLBACK_START);
        assert_eq!(opts.route_style.selected_weight, 8.0);
        assert_eq!(opts.route_style.unselected_weight, UNSELECTED_ROUTE_WEIGHT);
    }

    #[test]
    fn options_survive_toml_roundtrip() {
        let mut opts = ClientOptions::default();
        opts.location_zoom = 17;

        let text = toml::to_string_pretty(&opts).expect("Serialisierung");
        let parsed: ClientOptions = toml::from_str(&text).expect("Deserialisierung");

        assert_eq!(parsed, opts);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let opts = ClientOptions::load_from_file(std::path::Path::new(
            "/nonexistent/safepath_client.toml",
        ));
        assert_eq!(opts, ClientOptions::default());
    }
}
