//! Routenliste samt Selektion und abgeleiteten Projektionen.
//!
//! Hält die normalisierten Routen, den selektierten Index und die Handles
//! der gezeichneten Polylinien. Liste und Stats werden bei jeder
//! Selektion neu aufgebaut.

use crate::core::{GeoBounds, Route};
use crate::shared::{PolylineStyle, RouteListEntry, RouteStyleOptions, StatsPanel};
use crate::view::{MapView, PolylineHandle};

/// Aktuelle Routen mit Selektion. Leer = noch keine Routen.
#[derive(Debug, Default)]
pub struct RouteCollection {
    routes: Vec<Route>,
    selected_index: usize,
    polylines: Vec<PolylineHandle>,
    list: Vec<RouteListEntry>,
    stats: StatsPanel,
}

impl RouteCollection {
    /// Erstellt eine leere Sammlung.
    pub fn new() -> Self {
        Self::default()
    }

    /// Linienfarbe einer Route nach ihrem Sicherheitsband.
    pub fn color_for(route: &Route) -> &'static str {
        route.safety_band().color()
    }

    /// Ersetzt alle Routen, zeichnet sie neu und selektiert Index 0.
    ///
    /// Eine leere Liste verhält sich wie `clear`.
    pub fn load(&mut self, routes: Vec<Route>, style: &RouteStyleOptions, view: &mut dyn MapView) {
        if routes.is_empty() {
            self.clear(view);
            return;
        }

        self.remove_polylines(view);

        self.polylines = routes
            .iter()
            .enumerate()
            .map(|(index, route)| {
                let (weight, opacity) = if index == 0 {
                    (style.primary_weight, style.primary_opacity)
                } else {
                    (style.alternative_weight, style.alternative_opacity)
                };
                view.draw_polyline(
                    &route.coordinates,
                    &PolylineStyle {
                        color: Self::color_for(route),
                        weight,
                        opacity,
                    },
                )
            })
            .collect();

        if let Some(bounds) =
            GeoBounds::from_points(routes.iter().flat_map(|route| route.coordinates.iter()))
        {
            view.fit_bounds(&bounds, style.fit_padding_px);
        }

        log::info!("{} Routen geladen", routes.len());
        self.routes = routes;
        self.selected_index = 0;
        self.select(0, style, view);
    }

    /// Selektiert eine Route. Indizes außerhalb `[0, len)` werden ignoriert.
    ///
    /// Gibt `true` zurück, wenn die Selektion angewendet wurde.
    pub fn select(&mut self, index: usize, style: &RouteStyleOptions, view: &mut dyn MapView) -> bool {
        let Some(route) = self.routes.get(index) else {
            log::debug!("Routen-Index {index} außerhalb von 0..{}", self.routes.len());
            return false;
        };
        self.selected_index = index;

        for (i, (route, handle)) in self.routes.iter().zip(&self.polylines).enumerate() {
            let selected = i == index;
            let (weight, opacity) = if selected {
                (style.selected_weight, style.selected_opacity)
            } else {
                (style.unselected_weight, style.unselected_opacity)
            };
            view.restyle_polyline(
                *handle,
                &PolylineStyle {
                    color: Self::color_for(route),
                    weight,
                    opacity,
                },
                selected,
            );
        }

        self.stats = StatsPanel::for_route(route);
        self.list = self
            .routes
            .iter()
            .enumerate()
            .map(|(i, route)| RouteListEntry::from_route(route, i == index))
            .collect();

        view.show_route_list(&self.list);
        view.show_stats(&self.stats);
        true
    }

    /// Leert die Sammlung und entfernt alle Polylinien.
    pub fn clear(&mut self, view: &mut dyn MapView) {
        self.remove_polylines(view);
        self.routes.clear();
        self.selected_index = 0;
        self.list.clear();
        self.stats = StatsPanel::default();

        view.show_route_list(&self.list);
        view.show_stats(&self.stats);
    }

    fn remove_polylines(&mut self, view: &mut dyn MapView) {
        for handle in self.polylines.drain(..) {
            view.remove_polyline(handle);
        }
    }

    /// Geladene Routen in Anzeigereihenfolge (Index 0 = primäre Route).
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Anzahl der geladenen Routen.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// `true`, solange keine Routen geladen sind.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Selektierter Index; nur gültig, wenn die Sammlung nicht leer ist.
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Selektierte Route, falls vorhanden.
    pub fn selected(&self) -> Option<&Route> {
        self.routes.get(self.selected_index)
    }

    /// Aktuelle Listeneinträge.
    pub fn list_entries(&self) -> &[RouteListEntry] {
        &self.list
    }

    /// Aktuelles Stats-Panel.
    pub fn stats(&self) -> &StatsPanel {
        &self.stats
    }
}

#[cfg(test)]
mod tests;
