//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::core::{ClientError, PointRole};

/// Statusmeldung bei unvollständigem Von/Nach-Formular.
pub const MISSING_PLACES_STATUS: &str = "Please enter both locations.";

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(_state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::SessionStarted => vec![AppCommand::InitializeView],
        AppIntent::LocationAcquired { point } => vec![AppCommand::SetStartFromLocation { point }],
        AppIntent::LocationUnavailable { reason } => {
            vec![AppCommand::UseFallbackLocation { reason }]
        }
        AppIntent::MapClicked { point } => vec![AppCommand::SelectPoint { point }],
        AppIntent::ClearRequested => vec![AppCommand::ClearSession],
        AppIntent::DirectionsSubmitted { from, to } => {
            let (from, to) = (from.trim(), to.trim());
            if from.is_empty() || to.is_empty() {
                vec![AppCommand::SetStatus {
                    message: MISSING_PLACES_STATUS.to_string(),
                }]
            } else {
                vec![AppCommand::RequestGeocoding {
                    from: from.to_string(),
                    to: to.to_string(),
                }]
            }
        }
        AppIntent::PlacesResolved {
            lookup,
            start,
            destination,
        } => {
            // Start wird zuerst geprüft
            let failure = |role, error| {
                vec![AppCommand::ReportLookupFailure {
                    lookup,
                    role,
                    error,
                }]
            };
            match (start, destination) {
                (Err(error), _) => failure(PointRole::Start, error),
                (Ok(None), _) => failure(
                    PointRole::Start,
                    ClientError::PlaceNotFound(PointRole::Start),
                ),
                (Ok(Some(_)), Err(error)) => failure(PointRole::Destination, error),
                (Ok(Some(_)), Ok(None)) => failure(
                    PointRole::Destination,
                    ClientError::PlaceNotFound(PointRole::Destination),
                ),
                (Ok(Some(start)), Ok(Some(destination))) => vec![AppCommand::SetBothPoints {
                    lookup,
                    start,
                    destination,
                }],
            }
        }
        AppIntent::RoutesReceived {
            generation,
            payload,
        } => vec![AppCommand::ApplyRoutePayload {
            generation,
            payload,
        }],
        AppIntent::RouteFetchFailed { generation, error } => {
            vec![AppCommand::ReportFetchFailure { generation, error }]
        }
        AppIntent::RouteSelected { index } => match usize::try_from(index) {
            Ok(index) => vec![AppCommand::SelectRoute { index }],
            Err(_) => {
                log::debug!("Negativer Routen-Index {index} ignoriert");
                Vec::new()
            }
        },
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

#[cfg(test)]
mod tests;
