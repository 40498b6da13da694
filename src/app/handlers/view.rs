//! Handler für Kartenansicht, Statuszeile und Sitzungsende.

use crate::app::AppState;
use crate::core::GeoPoint;
use crate::shared::StatsPanel;
use crate::view::MapView;

/// Statusmeldung beim Start, solange der Standort angefragt wird.
pub const REQUESTING_LOCATION_STATUS: &str = "Requesting location...";

/// Setzt die Startansicht und leert Routenliste und Stats-Panel.
pub fn initialize(state: &mut AppState, view: &mut dyn MapView) {
    let center = GeoPoint::from_pair(state.options.initial_center);
    view.set_center(center, state.options.initial_zoom);
    view.show_route_list(&[]);
    view.show_stats(&StatsPanel::default());
    set_status(state, view, REQUESTING_LOCATION_STATUS);
}

/// Setzt die Statuszeile in State und View.
pub fn set_status(state: &mut AppState, view: &mut dyn MapView, message: &str) {
    state.ui.status_message = Some(message.to_string());
    view.set_status(message);
}

/// Markiert die Sitzung als beendet.
pub fn request_exit(state: &mut AppState) {
    log::info!("Sitzung wird beendet");
    state.should_exit = true;
}
