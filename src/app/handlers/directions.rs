//! Handler für das Von/Nach-Formular (Geocoding beider Namen).

use super::points::{ensure_valid, replace_marker, request_routes};
use super::view::set_status;
use crate::app::AppState;
use crate::core::{ClientError, GeoPoint, PointRole};
use crate::view::MapView;

/// Reiht das Geocoding beider Namen ein.
pub fn request_geocoding(state: &mut AppState, view: &mut dyn MapView, from: String, to: String) {
    log::info!("Suche Orte: {from:?} -> {to:?}");
    state.fetch.request_geocoding(from, to);
    set_status(state, view, "Finding locations...");
}

/// Beide Orte aufgelöst: Paar direkt setzen und Routen anfragen.
pub fn set_both_points(
    state: &mut AppState,
    view: &mut dyn MapView,
    lookup: u64,
    start: GeoPoint,
    destination: GeoPoint,
) -> anyhow::Result<()> {
    if !state.fetch.is_current_lookup(lookup) {
        log::debug!("Veraltetes Geocoding-Ergebnis {lookup} verworfen");
        return Ok(());
    }
    ensure_valid(start)?;
    ensure_valid(destination)?;

    state.selection.set_both(start, destination);
    state.routes.clear(view);
    replace_marker(view, start, PointRole::Start);
    replace_marker(view, destination, PointRole::Destination);
    view.set_center(start, state.options.directions_zoom);
    request_routes(state, start, destination);
    set_status(state, view, "Fetching routes...");
    Ok(())
}

/// Geocoding einer Seite fehlgeschlagen oder ohne Treffer.
pub fn report_failure(
    state: &mut AppState,
    view: &mut dyn MapView,
    lookup: u64,
    role: PointRole,
    error: &ClientError,
) {
    if !state.fetch.is_current_lookup(lookup) {
        log::debug!("Veralteter Geocoding-Fehler {lookup} verworfen: {error}");
        return;
    }
    log::warn!("Geocoding für {} fehlgeschlagen: {error}", role.title());
    set_status(state, view, &error.lookup_status(role));
}
