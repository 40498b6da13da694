//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Optionen und View-Projektionen, die zwischen `app` und `view`
//! geteilt werden, um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod view_model;

pub use options::{ClientOptions, RouteStyleOptions};
pub use view_model::{PolylineStyle, RouteListEntry, RouteStats, StatsPanel, DEFAULT_STATS_TITLE};
