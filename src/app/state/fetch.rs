use crate::api::RouteRequest;

/// Eine Anfrage an einen externen Dienst, die der Host ausführen soll.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceRequest {
    /// Routen für ein Start/Ziel-Paar abrufen
    Routes {
        /// Generation, unter der die Antwort gilt
        generation: u64,
        /// Start/Ziel-Paar der Anfrage
        request: RouteRequest,
    },
    /// Start- und Zielname auflösen
    Geocode {
        /// Lookup-ID, unter der das Ergebnis gilt
        lookup: u64,
        /// Eingegebener Startname
        from: String,
        /// Eingegebener Zielname
        to: String,
    },
}

/// Vergibt Generationen für Routing- und Geocoding-Anfragen und sammelt
/// ausstehende Anfragen, bis der Host sie abholt.
///
/// Nur Antworten der aktuellen Generation werden angewendet.
#[derive(Debug, Default)]
pub struct FetchTracker {
    route_generation: u64,
    lookup: u64,
    pending: Vec<ServiceRequest>,
}

impl FetchTracker {
    /// Leerer Tracker ohne ausstehende Anfragen (Generation 0).
    pub fn new() -> Self {
        Self::default()
    }

    /// Startet eine neue Routing-Generation und reiht die Anfrage ein.
    pub fn request_routes(&mut self, request: RouteRequest) -> u64 {
        self.route_generation += 1;
        self.pending.push(ServiceRequest::Routes {
            generation: self.route_generation,
            request,
        });
        self.route_generation
    }

    /// Startet einen neuen Lookup und reiht die Anfrage ein.
    pub fn request_geocoding(&mut self, from: String, to: String) -> u64 {
        self.lookup += 1;
        self.pending.push(ServiceRequest::Geocode {
            lookup: self.lookup,
            from,
            to,
        });
        self.lookup
    }

    /// Verwirft laufende Routing-Anfragen (Antworten werden ignoriert).
    pub fn invalidate_routes(&mut self) {
        self.route_generation += 1;
    }

    /// Verwirft laufende Routing- und Geocoding-Anfragen.
    pub fn invalidate_all(&mut self) {
        self.route_generation += 1;
        self.lookup += 1;
    }

    /// Prüft, ob eine Routing-Antwort noch zur laufenden Generation gehört.
    pub fn is_current_routes(&self, generation: u64) -> bool {
        generation == self.route_generation
    }

    /// Prüft, ob ein Geocoding-Ergebnis noch zum letzten Lookup gehört.
    pub fn is_current_lookup(&self, lookup: u64) -> bool {
        lookup == self.lookup
    }

    /// Aktuelle Routing-Generation.
    pub fn route_generation(&self) -> u64 {
        self.route_generation
    }

    /// Ausstehende Anfragen (noch nicht vom Host abgeholt).
    pub fn pending(&self) -> &[ServiceRequest] {
        &self.pending
    }

    /// Übergibt alle ausstehenden Anfragen an den Host.
    pub fn take_pending(&mut self) -> Vec<ServiceRequest> {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GeoPoint;

    fn request() -> RouteRequest {
        RouteRequest {
            start: GeoPoint::new(1.0, 2.0),
            destination: GeoPoint::new(3.0, 4.0),
        }
    }

    #[test]
    fn newer_request_supersedes_older_generation() {
        let mut fetch = FetchTracker::new();
        let first = fetch.request_routes(request());
        let second = fetch.request_routes(request());

        assert!(!fetch.is_current_routes(first));
        assert!(fetch.is_current_routes(second));
        assert_eq!(fetch.take_pending().len(), 2);
        assert!(fetch.pending().is_empty());
    }

    #[test]
    fn invalidation_drops_in_flight_responses() {
        let mut fetch = FetchTracker::new();
        let generation = fetch.request_routes(request());
        let lookup = fetch.request_geocoding("a".into(), "b".into());

        fetch.invalidate_routes();
        assert!(!fetch.is_current_routes(generation));
        assert!(fetch.is_current_lookup(lookup));

        fetch.invalidate_all();
        assert!(!fetch.is_current_lookup(lookup));
    }
}
