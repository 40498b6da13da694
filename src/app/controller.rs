//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};
use crate::view::MapView;

/// Orchestriert Eingaben und Dienst-Ergebnisse auf AppState und MapView.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        state: &mut AppState,
        view: &mut dyn MapView,
        intent: AppIntent,
    ) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, view, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        view: &mut dyn MapView,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Karte & Status ===
            AppCommand::InitializeView => handlers::view::initialize(state, view),
            AppCommand::SetStatus { message } => handlers::view::set_status(state, view, &message),
            AppCommand::RequestExit => handlers::view::request_exit(state),

            // === Punktwahl ===
            AppCommand::SetStartFromLocation { point } => {
                handlers::points::location_acquired(state, view, point)?
            }
            AppCommand::UseFallbackLocation { reason } => {
                handlers::points::location_unavailable(state, view, &reason)?
            }
            AppCommand::SelectPoint { point } => handlers::points::select(state, view, point)?,
            AppCommand::ClearSession => handlers::points::clear(state, view),

            // === Von/Nach-Formular ===
            AppCommand::RequestGeocoding { from, to } => {
                handlers::directions::request_geocoding(state, view, from, to)
            }
            AppCommand::SetBothPoints {
                lookup,
                start,
                destination,
            } => handlers::directions::set_both_points(state, view, lookup, start, destination)?,
            AppCommand::ReportLookupFailure {
                lookup,
                role,
                error,
            } => handlers::directions::report_failure(state, view, lookup, role, &error),

            // === Routen ===
            AppCommand::ApplyRoutePayload {
                generation,
                payload,
            } => handlers::routes::apply_payload(state, view, generation, &payload),
            AppCommand::ReportFetchFailure { generation, error } => {
                handlers::routes::report_failure(state, view, generation, &error)
            }
            AppCommand::SelectRoute { index } => handlers::routes::select(state, view, index),
        }

        Ok(())
    }
}
