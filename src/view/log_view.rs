use super::{MapView, PolylineHandle};
use crate::core::{GeoBounds, GeoPoint, PointRole};
use crate::shared::{PolylineStyle, RouteListEntry, StatsPanel};

/// `MapView` für den Headless-Betrieb: jede Anweisung wird geloggt.
///
/// Status, Liste und Stats gehen auf `info`, Geometrie auf `debug`.
#[derive(Debug, Default)]
pub struct LogMapView {
    next_handle: u64,
}

impl LogMapView {
    /// Erstellt eine neue Log-View.
    pub fn new() -> Self {
        Self::default()
    }
}

impl MapView for LogMapView {
    fn place_marker(&mut self, point: GeoPoint, role: PointRole) {
        log::info!("Marker {}: {}", role.title(), point);
    }

    fn remove_marker(&mut self, role: PointRole) {
        log::debug!("Marker {} entfernt", role.title());
    }

    fn draw_polyline(&mut self, points: &[GeoPoint], style: &PolylineStyle) -> PolylineHandle {
        self.next_handle += 1;
        log::debug!(
            "Polylinie #{} gezeichnet: {} Punkte, {} {}/{}",
            self.next_handle,
            points.len(),
            style.color,
            style.weight,
            style.opacity
        );
        PolylineHandle(self.next_handle)
    }

    fn restyle_polyline(&mut self, handle: PolylineHandle, style: &PolylineStyle, bring_to_front: bool) {
        log::debug!(
            "Polylinie #{}: {}/{}{}",
            handle.0,
            style.weight,
            style.opacity,
            if bring_to_front { " (vorne)" } else { "" }
        );
    }

    fn remove_polyline(&mut self, handle: PolylineHandle) {
        log::debug!("Polylinie #{} entfernt", handle.0);
    }

    fn fit_bounds(&mut self, bounds: &GeoBounds, padding_px: u32) {
        log::debug!(
            "Ausschnitt: {} - {} (Padding {padding_px}px)",
            bounds.south_west,
            bounds.north_east
        );
    }

    fn set_center(&mut self, point: GeoPoint, zoom: u8) {
        log::debug!("Kartenmitte: {point} @ Zoom {zoom}");
    }

    fn show_route_list(&mut self, entries: &[RouteListEntry]) {
        for (index, entry) in entries.iter().enumerate() {
            log::info!(
                "{} [{index}] {} {} {}",
                if entry.highlighted { ">" } else { " " },
                entry.label,
                entry.rating_label,
                entry.color
            );
        }
    }

    fn show_stats(&mut self, panel: &StatsPanel) {
        match &panel.stats {
            Some(stats) => log::info!(
                "{}: {} | Sicherheit {} | {} Segmente | Risiko {} | zu Fuß {} | Rad {} | Auto {}",
                panel.title,
                stats.distance,
                stats.safety,
                stats.segments,
                stats.avg_risk,
                stats.walk,
                stats.bike,
                stats.car
            ),
            None => log::info!("{}", panel.title),
        }
    }

    fn set_status(&mut self, text: &str) {
        log::info!("Status: {text}");
    }
}
