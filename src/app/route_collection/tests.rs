use super::*;
use crate::core::{GeoPoint, TravelTimes};
use crate::view::{RecordingMapView, ViewCall};

fn route(name: &str, rating: f64, coordinates: Vec<GeoPoint>) -> Route {
    Route {
        name: name.into(),
        coordinates,
        distance_km: 1.5,
        safety_rating: rating,
        segments: 3,
        avg_risk: (5.0 - rating) / 5.0,
        travel_times: TravelTimes::UNKNOWN,
    }
}

fn three_routes() -> Vec<Route> {
    vec![
        route("A", 4.8, vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 1.0)]),
        route("B", 3.0, vec![GeoPoint::new(-1.0, 0.5)]),
        route("C", 1.0, vec![GeoPoint::new(2.0, -2.0)]),
    ]
}

#[test]
fn load_draws_primary_heavier_and_selects_first() {
    let style = RouteStyleOptions::default();
    let mut view = RecordingMapView::new();
    let mut collection = RouteCollection::new();

    collection.load(three_routes(), &style, &mut view);

    let drawn: Vec<PolylineStyle> = view
        .calls
        .iter()
        .filter_map(|call| match call {
            ViewCall::DrawPolyline { style, .. } => Some(*style),
            _ => None,
        })
        .collect();
    assert_eq!(drawn.len(), 3);
    assert_eq!((drawn[0].weight, drawn[0].opacity), (6.0, 0.9));
    assert_eq!((drawn[1].weight, drawn[1].opacity), (4.0, 0.5));
    assert_eq!(drawn[0].color, "#4CAF50");
    assert_eq!(drawn[2].color, "#E53935");

    assert_eq!(collection.selected_index(), 0);
    assert_eq!(view.stats.title, "A");
    assert!(view.route_list[0].highlighted);
    assert!(!view.route_list[1].highlighted);
}

#[test]
fn load_fits_bounds_over_all_routes() {
    let style = RouteStyleOptions::default();
    let mut view = RecordingMapView::new();
    let mut collection = RouteCollection::new();

    collection.load(three_routes(), &style, &mut view);

    let (bounds, padding) = view.last_fit().expect("fit_bounds erwartet");
    assert_eq!(bounds.south_west, GeoPoint::new(-1.0, -2.0));
    assert_eq!(bounds.north_east, GeoPoint::new(2.0, 1.0));
    assert_eq!(padding, 50);
}

#[test]
fn routes_without_points_skip_fit() {
    let style = RouteStyleOptions::default();
    let mut view = RecordingMapView::new();
    let mut collection = RouteCollection::new();

    collection.load(vec![route("Empty", 2.0, Vec::new())], &style, &mut view);

    assert!(view.last_fit().is_none());
    assert_eq!(collection.len(), 1);
}

#[test]
fn select_restyles_and_brings_selected_to_front() {
    let style = RouteStyleOptions::default();
    let mut view = RecordingMapView::new();
    let mut collection = RouteCollection::new();
    collection.load(three_routes(), &style, &mut view);
    view.clear_calls();

    assert!(collection.select(2, &style, &mut view));

    let restyled: Vec<(PolylineStyle, bool)> = view
        .calls
        .iter()
        .filter_map(|call| match call {
            ViewCall::RestylePolyline {
                style,
                bring_to_front,
                ..
            } => Some((*style, *bring_to_front)),
            _ => None,
        })
        .collect();
    assert_eq!(restyled.len(), 3);
    assert_eq!((restyled[0].0.weight, restyled[0].0.opacity), (4.0, 0.4));
    assert_eq!((restyled[2].0.weight, restyled[2].0.opacity), (6.0, 0.95));
    assert_eq!(
        restyled.iter().filter(|(_, front)| *front).count(),
        1,
        "nur die selektierte Route kommt nach vorne"
    );
    assert!(restyled[2].1);

    assert_eq!(collection.selected().map(|r| r.name.as_str()), Some("C"));
    assert_eq!(view.stats.title, "C");
    assert!(view.route_list[2].highlighted);
}

#[test]
fn out_of_range_select_is_a_no_op() {
    let style = RouteStyleOptions::default();
    let mut view = RecordingMapView::new();
    let mut collection = RouteCollection::new();
    collection.load(three_routes(), &style, &mut view);
    collection.select(1, &style, &mut view);
    view.clear_calls();

    assert!(!collection.select(3, &style, &mut view));
    assert!(!collection.select(usize::MAX, &style, &mut view));

    assert_eq!(collection.selected_index(), 1);
    assert!(view.calls.is_empty());
}

#[test]
fn reload_removes_previous_polylines() {
    let style = RouteStyleOptions::default();
    let mut view = RecordingMapView::new();
    let mut collection = RouteCollection::new();

    collection.load(three_routes(), &style, &mut view);
    collection.select(2, &style, &mut view);
    collection.load(three_routes()[..1].to_vec(), &style, &mut view);

    assert_eq!(view.polylines.len(), 1);
    assert_eq!(collection.selected_index(), 0);
}

#[test]
fn clear_resets_projections() {
    let style = RouteStyleOptions::default();
    let mut view = RecordingMapView::new();
    let mut collection = RouteCollection::new();
    collection.load(three_routes(), &style, &mut view);

    collection.clear(&mut view);

    assert!(collection.is_empty());
    assert!(view.polylines.is_empty());
    assert!(view.route_list.is_empty());
    assert_eq!(view.stats, StatsPanel::default());
    assert!(collection.selected().is_none());
}

#[test]
fn loading_nothing_behaves_like_clear() {
    let style = RouteStyleOptions::default();
    let mut view = RecordingMapView::new();
    let mut collection = RouteCollection::new();
    collection.load(three_routes(), &style, &mut view);

    collection.load(Vec::new(), &style, &mut view);

    assert!(collection.is_empty());
    assert!(view.polylines.is_empty());
}

#[test]
fn color_is_monotonic_in_rating() {
    let ratings = [0.0, 1.49, 1.5, 2.5, 3.5, 4.49, 4.5, 5.0];
    let order = |color: &str| {
        ["#E53935", "#FF9800", "#FFC107", "#8BC34A", "#4CAF50"]
            .iter()
            .position(|c| *c == color)
            .expect("bekannte Farbe")
    };

    for pair in ratings.windows(2) {
        let lower = RouteCollection::color_for(&route("x", pair[0], Vec::new()));
        let higher = RouteCollection::color_for(&route("y", pair[1], Vec::new()));
        assert!(order(higher) >= order(lower), "{} vs {}", pair[0], pair[1]);
    }
}
