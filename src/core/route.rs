//! Kanonisches Routen-Modell und Sicherheits-Klassifizierung.

use super::GeoPoint;

/// Höchste Sicherheitsbewertung.
pub const SAFETY_RATING_MAX: f64 = 5.0;

/// Leitet die Sicherheitsbewertung aus dem mittleren Risiko ab.
///
/// `clamp(5 − avg_risk × 5, 0, 5)`, gleich für beide Antwortformate.
pub fn safety_rating_from_risk(avg_risk: f64) -> f64 {
    clamp_safety_rating(SAFETY_RATING_MAX - avg_risk * SAFETY_RATING_MAX)
}

/// Begrenzt eine Bewertung auf `[0, 5]`.
pub fn clamp_safety_rating(rating: f64) -> f64 {
    rating.clamp(0.0, SAFETY_RATING_MAX)
}

/// Reisezeiten in Minuten je Verkehrsmittel. `None` = unbekannt.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TravelTimes {
    /// Zu Fuß
    pub walk: Option<f64>,
    /// Fahrrad
    pub bike: Option<f64>,
    /// Auto
    pub car: Option<f64>,
}

impl TravelTimes {
    /// Alle Reisezeiten unbekannt.
    pub const UNKNOWN: Self = Self {
        walk: None,
        bike: None,
        car: None,
    };
}

/// Eine Kandidaten-Route zwischen Start und Ziel.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Anzeigename (z.B. "Safest (recommended)", "OSRM alt #2")
    pub name: String,
    /// Pfad in Fahrtrichtung
    pub coordinates: Vec<GeoPoint>,
    /// Länge in Kilometern (≥ 0)
    pub distance_km: f64,
    /// Sicherheitsbewertung, immer in `[0, 5]`
    pub safety_rating: f64,
    /// Anzahl bewerteter Segmente
    pub segments: u32,
    /// Mittleres Risiko (≥ 0)
    pub avg_risk: f64,
    /// Reisezeiten
    pub travel_times: TravelTimes,
}

impl Route {
    /// Gibt das Sicherheitsband dieser Route zurück.
    pub fn safety_band(&self) -> SafetyBand {
        SafetyBand::from_rating(self.safety_rating)
    }
}

/// Fünf feste Sicherheitsbänder, von sicher bis gefährlich.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SafetyBand {
    /// Bewertung ≥ 4.5
    VerySafe,
    /// Bewertung ≥ 3.5
    Safe,
    /// Bewertung ≥ 2.5
    Moderate,
    /// Bewertung ≥ 1.5
    Risky,
    /// Alles darunter
    Dangerous,
}

impl SafetyBand {
    /// Alle Bänder, von sicher nach gefährlich sortiert.
    pub const ALL: [SafetyBand; 5] = [
        SafetyBand::VerySafe,
        SafetyBand::Safe,
        SafetyBand::Moderate,
        SafetyBand::Risky,
        SafetyBand::Dangerous,
    ];

    /// Ordnet eine Bewertung ihrem Band zu.
    pub fn from_rating(rating: f64) -> Self {
        if rating >= 4.5 {
            SafetyBand::VerySafe
        } else if rating >= 3.5 {
            SafetyBand::Safe
        } else if rating >= 2.5 {
            SafetyBand::Moderate
        } else if rating >= 1.5 {
            SafetyBand::Risky
        } else {
            SafetyBand::Dangerous
        }
    }

    /// Feste Linienfarbe des Bands (Hex).
    pub fn color(self) -> &'static str {
        match self {
            SafetyBand::VerySafe => "#4CAF50",
            SafetyBand::Safe => "#8BC34A",
            SafetyBand::Moderate => "#FFC107",
            SafetyBand::Risky => "#FF9800",
            SafetyBand::Dangerous => "#E53935",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn rating_derivation_clamps_to_range() {
        assert_relative_eq!(safety_rating_from_risk(0.0), 5.0);
        assert_relative_eq!(safety_rating_from_risk(0.1), 4.5);
        assert_relative_eq!(safety_rating_from_risk(0.9), 0.5);
        assert_relative_eq!(safety_rating_from_risk(3.0), 0.0);
        assert_relative_eq!(safety_rating_from_risk(-1.0), 5.0);
    }

    #[test]
    fn bands_follow_bin_boundaries() {
        assert_eq!(SafetyBand::from_rating(5.0), SafetyBand::VerySafe);
        assert_eq!(SafetyBand::from_rating(4.5), SafetyBand::VerySafe);
        assert_eq!(SafetyBand::from_rating(4.49), SafetyBand::Safe);
        assert_eq!(SafetyBand::from_rating(3.5), SafetyBand::Safe);
        assert_eq!(SafetyBand::from_rating(2.5), SafetyBand::Moderate);
        assert_eq!(SafetyBand::from_rating(1.5), SafetyBand::Risky);
        assert_eq!(SafetyBand::from_rating(1.49), SafetyBand::Dangerous);
        assert_eq!(SafetyBand::from_rating(0.0), SafetyBand::Dangerous);
    }

    #[test]
    fn higher_rating_never_maps_to_less_safe_band() {
        let ratings: Vec<f64> = (0..=50).map(|i| f64::from(i) / 10.0).collect();
        for pair in ratings.windows(2) {
            assert!(
                SafetyBand::from_rating(pair[1]) <= SafetyBand::from_rating(pair[0]),
                "{} -> {} ist nicht monoton",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn every_band_has_distinct_color() {
        let colors: std::collections::HashSet<_> =
            SafetyBand::ALL.iter().map(|b| b.color()).collect();
        assert_eq!(colors.len(), SafetyBand::ALL.len());
    }
}
