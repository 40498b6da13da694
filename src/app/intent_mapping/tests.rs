use crate::app::{AppCommand, AppIntent, AppState};
use crate::core::{ClientError, GeoPoint, PointRole};

use super::map_intent_to_commands;

const A: GeoPoint = GeoPoint::new(28.61, 77.20);
const B: GeoPoint = GeoPoint::new(28.62, 77.21);

fn resolved(
    start: Result<Option<GeoPoint>, ClientError>,
    destination: Result<Option<GeoPoint>, ClientError>,
) -> Vec<AppCommand> {
    let state = AppState::new();
    map_intent_to_commands(
        &state,
        AppIntent::PlacesResolved {
            lookup: 7,
            start,
            destination,
        },
    )
}

#[test]
fn blank_direction_field_maps_to_status_only() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::DirectionsSubmitted {
            from: "Connaught Place".into(),
            to: "   ".into(),
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        &commands[0],
        AppCommand::SetStatus { message } if message == "Please enter both locations."
    ));
}

#[test]
fn direction_fields_are_trimmed() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::DirectionsSubmitted {
            from: "  India Gate ".into(),
            to: "Red Fort".into(),
        },
    );

    assert!(matches!(
        &commands[0],
        AppCommand::RequestGeocoding { from, to } if from == "India Gate" && to == "Red Fort"
    ));
}

#[test]
fn missing_start_is_reported_before_destination() {
    let commands = resolved(Ok(None), Ok(None));

    assert!(matches!(
        commands[0],
        AppCommand::ReportLookupFailure {
            lookup: 7,
            role: PointRole::Start,
            error: ClientError::PlaceNotFound(PointRole::Start)
        }
    ));
}

#[test]
fn missing_destination_is_reported() {
    let commands = resolved(Ok(Some(A)), Ok(None));

    assert!(matches!(
        commands[0],
        AppCommand::ReportLookupFailure {
            role: PointRole::Destination,
            error: ClientError::PlaceNotFound(PointRole::Destination),
            ..
        }
    ));
}

#[test]
fn destination_lookup_error_is_tagged_with_its_side() {
    let commands = resolved(
        Ok(Some(A)),
        Err(ClientError::NetworkFailure("network error: timeout".into())),
    );

    assert!(matches!(
        commands[0],
        AppCommand::ReportLookupFailure {
            role: PointRole::Destination,
            error: ClientError::NetworkFailure(_),
            ..
        }
    ));
}

#[test]
fn lookup_error_wins_over_later_side() {
    let commands = resolved(
        Err(ClientError::NetworkFailure("Server error 503".into())),
        Ok(Some(B)),
    );

    assert!(matches!(
        &commands[0],
        AppCommand::ReportLookupFailure {
            role: PointRole::Start,
            error: ClientError::NetworkFailure(msg),
            ..
        }
            if msg == "Server error 503"
    ));
}

#[test]
fn both_places_resolved_sets_pair_directly() {
    let commands = resolved(Ok(Some(A)), Ok(Some(B)));

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        AppCommand::SetBothPoints { lookup: 7, start, destination } if start == A && destination == B
    ));
}

#[test]
fn negative_route_index_maps_to_nothing() {
    let state = AppState::new();

    assert!(map_intent_to_commands(&state, AppIntent::RouteSelected { index: -1 }).is_empty());
    assert!(matches!(
        map_intent_to_commands(&state, AppIntent::RouteSelected { index: 2 })[0],
        AppCommand::SelectRoute { index: 2 }
    ));
}
