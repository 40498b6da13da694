use crate::app::point_selection::PointSelection;
use crate::app::route_collection::RouteCollection;
use crate::app::CommandLog;
use crate::shared::ClientOptions;

use super::{FetchTracker, UiState};

/// Hauptzustand einer Client-Sitzung
pub struct AppState {
    /// Phase der Start/Ziel-Wahl
    pub selection: PointSelection,
    /// Geladene Routen samt Selektion
    pub routes: RouteCollection,
    /// Generationen und ausstehende Dienst-Anfragen
    pub fetch: FetchTracker,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Endpunkte, Zoomstufen, Linienstile)
    pub options: ClientOptions,
    /// Signalisiert dem Host, die Sitzung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(ClientOptions::default())
    }

    /// Erstellt einen leeren App-State mit den gegebenen Optionen
    pub fn with_options(options: ClientOptions) -> Self {
        Self {
            selection: PointSelection::NoPoints,
            routes: RouteCollection::new(),
            fetch: FetchTracker::new(),
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options,
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der geladenen Routen zurück (für UI-Anzeige)
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
