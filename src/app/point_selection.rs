//! Zustandsautomat für die Wahl von Start und Ziel.
//!
//! `NoPoints → StartChosen → StartAndDestinationChosen → (Klick) → StartChosen`

use crate::core::GeoPoint;

/// Phase der Punktwahl.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PointSelection {
    /// Noch kein Punkt gewählt
    #[default]
    NoPoints,
    /// Start gewählt, Ziel fehlt
    StartChosen {
        /// Startpunkt
        start: GeoPoint,
    },
    /// Start und Ziel gewählt (Routen angefragt)
    StartAndDestinationChosen {
        /// Startpunkt
        start: GeoPoint,
        /// Zielpunkt
        destination: GeoPoint,
    },
}

/// Ergebnis eines Übergangs. Der Aufrufer leitet daraus Marker,
/// Status und Routing-Anfrage ab.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectionTransition {
    /// Erster Punkt gesetzt
    StartSet { start: GeoPoint },
    /// Paar vollständig → Routing-Anfrage auslösen
    PairCompleted {
        start: GeoPoint,
        destination: GeoPoint,
    },
    /// Dritter Klick: alles verworfen, Klickpunkt ist neuer Start
    Restarted { start: GeoPoint },
    /// Ereignis hatte keine Wirkung
    Ignored,
}

impl PointSelection {
    /// Standort (GPS oder Fallback) setzt den Start, aber nur ohne Punkte.
    pub fn acquire_location(&mut self, point: GeoPoint) -> SelectionTransition {
        match self {
            PointSelection::NoPoints => {
                *self = PointSelection::StartChosen { start: point };
                SelectionTransition::StartSet { start: point }
            }
            _ => SelectionTransition::Ignored,
        }
    }

    /// Kartenklick nach der Klick-Policy.
    pub fn click(&mut self, point: GeoPoint) -> SelectionTransition {
        match *self {
            PointSelection::NoPoints => {
                *self = PointSelection::StartChosen { start: point };
                SelectionTransition::StartSet { start: point }
            }
            PointSelection::StartChosen { start } => {
                *self = PointSelection::StartAndDestinationChosen {
                    start,
                    destination: point,
                };
                SelectionTransition::PairCompleted {
                    start,
                    destination: point,
                }
            }
            PointSelection::StartAndDestinationChosen { .. } => {
                *self = PointSelection::StartChosen { start: point };
                SelectionTransition::Restarted { start: point }
            }
        }
    }

    /// Setzt beide Punkte direkt (umgeht die Klick-Policy).
    pub fn set_both(&mut self, start: GeoPoint, destination: GeoPoint) -> SelectionTransition {
        *self = PointSelection::StartAndDestinationChosen { start, destination };
        SelectionTransition::PairCompleted { start, destination }
    }

    /// Zurück auf `NoPoints`.
    pub fn clear(&mut self) {
        *self = PointSelection::NoPoints;
    }

    /// Gewählter Start, sobald mindestens ein Punkt gesetzt ist.
    pub fn start(&self) -> Option<GeoPoint> {
        match *self {
            PointSelection::NoPoints => None,
            PointSelection::StartChosen { start }
            | PointSelection::StartAndDestinationChosen { start, .. } => Some(start),
        }
    }

    /// Gewähltes Ziel; nur im vollständigen Paar vorhanden.
    pub fn destination(&self) -> Option<GeoPoint> {
        match *self {
            PointSelection::StartAndDestinationChosen { destination, .. } => Some(destination),
            _ => None,
        }
    }
}
