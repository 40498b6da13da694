//! Handler für Standort, Kartenklicks und Clear.

use super::view::set_status;
use crate::api::RouteRequest;
use crate::app::point_selection::SelectionTransition;
use crate::app::AppState;
use crate::core::{ClientError, GeoPoint, PointRole};
use crate::view::MapView;

/// Ersetzt den Marker einer Rolle (alter Marker wird immer entfernt).
pub(crate) fn replace_marker(view: &mut dyn MapView, point: GeoPoint, role: PointRole) {
    view.remove_marker(role);
    view.place_marker(point, role);
}

/// Reiht die Routing-Anfrage für ein vollständiges Paar ein.
pub(crate) fn request_routes(state: &mut AppState, start: GeoPoint, destination: GeoPoint) {
    let generation = state
        .fetch
        .request_routes(RouteRequest { start, destination });
    log::info!("Routen angefragt: {start} -> {destination} (Generation {generation})");
}

/// Lehnt Punkte mit NaN/∞ ab, bevor sie Auswahl oder Marker erreichen.
pub(crate) fn ensure_valid(point: GeoPoint) -> anyhow::Result<()> {
    anyhow::ensure!(point.is_finite(), "Ungültige Koordinate {point}");
    Ok(())
}

/// Geolocation erfolgreich: Standort wird Start, sofern noch kein Punkt gewählt ist.
pub fn location_acquired(
    state: &mut AppState,
    view: &mut dyn MapView,
    point: GeoPoint,
) -> anyhow::Result<()> {
    if apply_location(state, view, point)? {
        set_status(state, view, "Location acquired.");
    }
    Ok(())
}

/// Geolocation nicht verfügbar: Fallback-Koordinate wird Start.
pub fn location_unavailable(
    state: &mut AppState,
    view: &mut dyn MapView,
    reason: &str,
) -> anyhow::Result<()> {
    let point = GeoPoint::from_pair(state.options.fallback_start);
    if !apply_location(state, view, point)? {
        log::debug!("Geolocation-Fehler ({reason}) ohne Wirkung, Punkte bereits gewählt");
        return Ok(());
    }
    log::warn!("Geolocation nicht verfügbar ({reason}), verwende Fallback-Start");
    let error = ClientError::LocationUnavailable {
        reason: reason.to_string(),
    };
    set_status(state, view, &error.status_message());
    Ok(())
}

fn apply_location(
    state: &mut AppState,
    view: &mut dyn MapView,
    point: GeoPoint,
) -> anyhow::Result<bool> {
    ensure_valid(point)?;
    match state.selection.acquire_location(point) {
        SelectionTransition::Ignored => {
            log::debug!("Standort {point} ignoriert, Punkte bereits gewählt");
            Ok(false)
        }
        _ => {
            replace_marker(view, point, PointRole::Start);
            view.set_center(point, state.options.location_zoom);
            Ok(true)
        }
    }
}

/// Kartenklick: Start, Ziel oder Neustart je nach Phase.
pub fn select(state: &mut AppState, view: &mut dyn MapView, point: GeoPoint) -> anyhow::Result<()> {
    ensure_valid(point)?;
    match state.selection.click(point) {
        SelectionTransition::StartSet { start } => {
            replace_marker(view, start, PointRole::Start);
            set_status(state, view, "Start selected. Now click destination.");
        }
        SelectionTransition::PairCompleted { start, destination } => {
            replace_marker(view, destination, PointRole::Destination);
            request_routes(state, start, destination);
            set_status(state, view, "Destination selected. Fetching routes…");
        }
        SelectionTransition::Restarted { start } => {
            state.fetch.invalidate_routes();
            state.routes.clear(view);
            view.remove_marker(PointRole::Destination);
            replace_marker(view, start, PointRole::Start);
            log::info!("Neustart mit Start {start}");
            set_status(state, view, "Restarted. Start selected – click destination.");
        }
        SelectionTransition::Ignored => {}
    }
    Ok(())
}

/// Setzt Punkte, Routen und Selektion zurück. Laufende Anfragen verfallen.
pub fn clear(state: &mut AppState, view: &mut dyn MapView) {
    state.fetch.invalidate_all();
    state.routes.clear(view);
    state.selection.clear();
    view.remove_marker(PointRole::Start);
    view.remove_marker(PointRole::Destination);
    log::info!("Sitzung zurückgesetzt");
    set_status(
        state,
        view,
        "Cleared. Click map to choose start, then destination.",
    );
}
