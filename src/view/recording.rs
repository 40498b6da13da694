use super::{MapView, PolylineHandle};
use crate::core::{GeoBounds, GeoPoint, PointRole};
use crate::shared::{PolylineStyle, RouteListEntry, StatsPanel};
use std::collections::HashMap;

/// Eine aufgezeichnete `MapView`-Anweisung.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewCall {
    PlaceMarker { point: GeoPoint, role: PointRole },
    RemoveMarker { role: PointRole },
    DrawPolyline { handle: PolylineHandle, points: usize, style: PolylineStyle },
    RestylePolyline { handle: PolylineHandle, style: PolylineStyle, bring_to_front: bool },
    RemovePolyline { handle: PolylineHandle },
    FitBounds { bounds: GeoBounds, padding_px: u32 },
    SetCenter { point: GeoPoint, zoom: u8 },
    ShowRouteList { entries: Vec<RouteListEntry> },
    ShowStats { panel: StatsPanel },
    SetStatus { text: String },
}

/// `MapView`, die alle Aufrufe protokolliert und den sichtbaren Zustand
/// nachführt (Marker, Polylinien, Panels).
#[derive(Debug, Default)]
pub struct RecordingMapView {
    /// Alle Aufrufe in Reihenfolge
    pub calls: Vec<ViewCall>,
    /// Aktuell sichtbare Marker
    pub markers: HashMap<PointRole, GeoPoint>,
    /// Aktuell sichtbare Polylinien mit letztem Stil
    pub polylines: HashMap<PolylineHandle, PolylineStyle>,
    /// Zuletzt in den Vordergrund geholte Polylinie
    pub front: Option<PolylineHandle>,
    /// Zuletzt angezeigte Routenliste
    pub route_list: Vec<RouteListEntry>,
    /// Zuletzt angezeigtes Stats-Panel
    pub stats: StatsPanel,
    /// Letzte Statusmeldung
    pub status: String,
    next_handle: u64,
}

impl RecordingMapView {
    /// Erstellt eine leere Aufzeichnung.
    pub fn new() -> Self {
        Self::default()
    }

    /// Letzter Kartenmittelpunkt samt Zoom.
    pub fn last_center(&self) -> Option<(GeoPoint, u8)> {
        self.calls.iter().rev().find_map(|call| match call {
            ViewCall::SetCenter { point, zoom } => Some((*point, *zoom)),
            _ => None,
        })
    }

    /// Letzter Aufruf von `fit_bounds`.
    pub fn last_fit(&self) -> Option<(GeoBounds, u32)> {
        self.calls.iter().rev().find_map(|call| match call {
            ViewCall::FitBounds { bounds, padding_px } => Some((*bounds, *padding_px)),
            _ => None,
        })
    }

    /// Verwirft die Aufrufliste, der sichtbare Zustand bleibt.
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl MapView for RecordingMapView {
    fn place_marker(&mut self, point: GeoPoint, role: PointRole) {
        self.markers.insert(role, point);
        self.calls.push(ViewCall::PlaceMarker { point, role });
    }

    fn remove_marker(&mut self, role: PointRole) {
        self.markers.remove(&role);
        self.calls.push(ViewCall::RemoveMarker { role });
    }

    fn draw_polyline(&mut self, points: &[GeoPoint], style: &PolylineStyle) -> PolylineHandle {
        self.next_handle += 1;
        let handle = PolylineHandle(self.next_handle);
        self.polylines.insert(handle, *style);
        self.calls.push(ViewCall::DrawPolyline {
            handle,
            points: points.len(),
            style: *style,
        });
        handle
    }

    fn restyle_polyline(&mut self, handle: PolylineHandle, style: &PolylineStyle, bring_to_front: bool) {
        if let Some(current) = self.polylines.get_mut(&handle) {
            *current = *style;
        }
        if bring_to_front {
            self.front = Some(handle);
        }
        self.calls.push(ViewCall::RestylePolyline {
            handle,
            style: *style,
            bring_to_front,
        });
    }

    fn remove_polyline(&mut self, handle: PolylineHandle) {
        self.polylines.remove(&handle);
        if self.front == Some(handle) {
            self.front = None;
        }
        self.calls.push(ViewCall::RemovePolyline { handle });
    }

    fn fit_bounds(&mut self, bounds: &GeoBounds, padding_px: u32) {
        self.calls.push(ViewCall::FitBounds {
            bounds: *bounds,
            padding_px,
        });
    }

    fn set_center(&mut self, point: GeoPoint, zoom: u8) {
        self.calls.push(ViewCall::SetCenter { point, zoom });
    }

    fn show_route_list(&mut self, entries: &[RouteListEntry]) {
        self.route_list = entries.to_vec();
        self.calls.push(ViewCall::ShowRouteList {
            entries: entries.to_vec(),
        });
    }

    fn show_stats(&mut self, panel: &StatsPanel) {
        self.stats = panel.clone();
        self.calls.push(ViewCall::ShowStats {
            panel: panel.clone(),
        });
    }

    fn set_status(&mut self, text: &str) {
        self.status = text.to_string();
        self.calls.push(ViewCall::SetStatus {
            text: text.to_string(),
        });
    }
}
