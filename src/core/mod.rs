//! Core-Domänentypen: Punkte, Routen, Sicherheitsbänder, Fehler.

pub mod error;
pub mod geo;
pub mod role;
pub mod route;

pub use error::ClientError;
pub use geo::{GeoBounds, GeoPoint};
pub use role::PointRole;
pub use route::{
    clamp_safety_rating, safety_rating_from_risk, Route, SafetyBand, TravelTimes,
    SAFETY_RATING_MAX,
};
