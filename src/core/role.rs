//! Rolle eines gewählten Punkts (Start oder Ziel).

/// Rolle eines Endpunkts, bestimmt auch den zugehörigen Map-Marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointRole {
    /// Startpunkt
    Start,
    /// Zielpunkt
    Destination,
}

impl PointRole {
    /// Anzeigename des Markers
    pub fn title(self) -> &'static str {
        match self {
            PointRole::Start => "Start",
            PointRole::Destination => "Destination",
        }
    }
}
