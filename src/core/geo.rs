//! Geografische Grundtypen: Punkt (lat/lon) und Bounding-Box.

use serde::{Deserialize, Serialize};

/// Geografischer Punkt in WGS84-Grad.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Breitengrad
    pub lat: f64,
    /// Längengrad
    pub lon: f64,
}

impl GeoPoint {
    /// Erstellt einen neuen Punkt
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Baut einen Punkt aus einem `[lat, lon]`-Paar (Config-Format).
    pub const fn from_pair(pair: [f64; 2]) -> Self {
        Self::new(pair[0], pair[1])
    }

    /// `true`, wenn beide Koordinaten endliche Zahlen sind.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

/// Achsen-alignierte Lat/Lon-Box über eine Punktmenge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    /// Süd-West-Ecke (minimale lat/lon)
    pub south_west: GeoPoint,
    /// Nord-Ost-Ecke (maximale lat/lon)
    pub north_east: GeoPoint,
}

impl GeoBounds {
    /// Berechnet die Bounds über alle Punkte. `None` bei leerer Menge.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a GeoPoint>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Self {
            south_west: *first,
            north_east: *first,
        };
        for point in iter {
            bounds.extend(point);
        }
        Some(bounds)
    }

    /// Erweitert die Box, sodass `point` enthalten ist.
    pub fn extend(&mut self, point: &GeoPoint) {
        self.south_west.lat = self.south_west.lat.min(point.lat);
        self.south_west.lon = self.south_west.lon.min(point.lon);
        self.north_east.lat = self.north_east.lat.max(point.lat);
        self.north_east.lon = self.north_east.lon.max(point.lon);
    }

    /// Gibt `true` zurück, wenn der Punkt innerhalb (inkl. Rand) liegt.
    pub fn contains(&self, point: &GeoPoint) -> bool {
        (self.south_west.lat..=self.north_east.lat).contains(&point.lat)
            && (self.south_west.lon..=self.north_east.lon).contains(&point.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_of_empty_set_is_none() {
        assert!(GeoBounds::from_points(&Vec::<GeoPoint>::new()).is_none());
    }

    #[test]
    fn bounds_cover_all_points() {
        let points = [
            GeoPoint::new(28.6, 77.2),
            GeoPoint::new(28.4, 77.5),
            GeoPoint::new(28.7, 77.1),
        ];

        let bounds = GeoBounds::from_points(&points).expect("Bounds erwartet");

        assert_eq!(bounds.south_west, GeoPoint::new(28.4, 77.1));
        assert_eq!(bounds.north_east, GeoPoint::new(28.7, 77.5));
        assert!(points.iter().all(|p| bounds.contains(p)));
    }
}
