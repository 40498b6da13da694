//! Schnittstelle zum Karten-Widget.
//!
//! Der Controller zeichnet ausschließlich über `MapView`; Tile-Rendering
//! und Panels liegen beim Host.

mod log_view;
mod recording;

pub use log_view::LogMapView;
pub use recording::{RecordingMapView, ViewCall};

use crate::core::{GeoBounds, GeoPoint, PointRole};
use crate::shared::{PolylineStyle, RouteListEntry, StatsPanel};

/// Opaker Handle einer gezeichneten Polylinie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PolylineHandle(pub u64);

/// Karten-Widget samt Routenliste, Stats-Panel und Statuszeile.
pub trait MapView {
    /// Setzt den Marker einer Rolle (ersetzt einen vorhandenen nicht automatisch).
    fn place_marker(&mut self, point: GeoPoint, role: PointRole);
    /// Entfernt den Marker einer Rolle, falls vorhanden.
    fn remove_marker(&mut self, role: PointRole);
    /// Zeichnet eine Polylinie und gibt ihren Handle zurück.
    fn draw_polyline(&mut self, points: &[GeoPoint], style: &PolylineStyle) -> PolylineHandle;
    /// Ändert den Stil einer Polylinie, optional in den Vordergrund.
    fn restyle_polyline(&mut self, handle: PolylineHandle, style: &PolylineStyle, bring_to_front: bool);
    /// Entfernt eine Polylinie.
    fn remove_polyline(&mut self, handle: PolylineHandle);
    /// Passt den Ausschnitt an die Bounds an.
    fn fit_bounds(&mut self, bounds: &GeoBounds, padding_px: u32);
    /// Zentriert die Karte.
    fn set_center(&mut self, point: GeoPoint, zoom: u8);
    /// Ersetzt die Routenliste.
    fn show_route_list(&mut self, entries: &[RouteListEntry]);
    /// Ersetzt das Stats-Panel.
    fn show_stats(&mut self, panel: &StatsPanel);
    /// Setzt die Statuszeile.
    fn set_status(&mut self, text: &str);
}
