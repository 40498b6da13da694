/// UI-bezogener Zustand (Statuszeile)
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Zuletzt gesetzte Statusnachricht
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }
}
