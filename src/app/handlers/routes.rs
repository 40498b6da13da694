//! Handler für Routing-Antworten und Routenauswahl.

use super::view::set_status;
use crate::api::normalize_routes;
use crate::app::AppState;
use crate::core::ClientError;
use crate::view::MapView;
use serde_json::Value;

/// Normalisiert eine Routing-Antwort und lädt die Routen.
///
/// Antworten einer veralteten Generation werden verworfen.
pub fn apply_payload(state: &mut AppState, view: &mut dyn MapView, generation: u64, payload: &Value) {
    if !state.fetch.is_current_routes(generation) {
        log::debug!("Veraltete Routing-Antwort (Generation {generation}) verworfen");
        return;
    }

    match normalize_routes(payload) {
        Ok(routes) => {
            let count = routes.len();
            state.routes.load(routes, &state.options.route_style, view);
            set_status(
                state,
                view,
                &format!("{count} routes found. Click a route or select from list."),
            );
        }
        Err(error) => report_failure(state, view, generation, &error),
    }
}

/// Meldet einen Routing-Fehler als Status.
pub fn report_failure(
    state: &mut AppState,
    view: &mut dyn MapView,
    generation: u64,
    error: &ClientError,
) {
    if !state.fetch.is_current_routes(generation) {
        log::debug!("Veralteter Routing-Fehler (Generation {generation}) verworfen: {error}");
        return;
    }
    log::warn!("Routing fehlgeschlagen: {error}");
    set_status(state, view, &error.status_message());
}

/// Selektiert eine Route; ungültige Indizes bleiben ohne Wirkung.
pub fn select(state: &mut AppState, view: &mut dyn MapView, index: usize) {
    state.routes.select(index, &state.options.route_style, view);
}
