//! Host-Glue: verbindet Controller, Dienste und `MapView`.
//!
//! Ein Intent nach dem anderen; Dienst-Aufrufe laufen kooperativ in einem
//! `FuturesUnordered` und kommen als Intents zurück.

use crate::api::{Geocoder, RoutingService};
use crate::app::{AppController, AppIntent, AppState, ServiceRequest};
use crate::shared::ClientOptions;
use crate::view::MapView;
use futures::future::LocalBoxFuture;
use futures::stream::{FuturesUnordered, Stream, StreamExt};
use futures::FutureExt;
use std::rc::Rc;

/// Eine Client-Sitzung mit eigenem State, eigener View und eigenen Diensten.
pub struct Session<R, G, V> {
    routing: Rc<R>,
    geocoder: Rc<G>,
    controller: AppController,
    state: AppState,
    view: V,
    in_flight: FuturesUnordered<LocalBoxFuture<'static, AppIntent>>,
}

impl<R, G, V> Session<R, G, V>
where
    R: RoutingService + 'static,
    G: Geocoder + 'static,
    V: MapView,
{
    /// Erstellt eine Sitzung. Es wird noch nichts angezeigt.
    pub fn new(routing: R, geocoder: G, view: V, options: ClientOptions) -> Self {
        Self {
            routing: Rc::new(routing),
            geocoder: Rc::new(geocoder),
            controller: AppController::new(),
            state: AppState::with_options(options),
            view,
            in_flight: FuturesUnordered::new(),
        }
    }

    /// Verarbeitet einen Intent und startet daraus entstandene Anfragen.
    ///
    /// Fehler beenden die Sitzung nie, sie landen in Log und Statuszeile.
    pub fn dispatch(&mut self, intent: AppIntent) {
        if let Err(e) = self
            .controller
            .handle_intent(&mut self.state, &mut self.view, intent)
        {
            log::error!("Intent konnte nicht verarbeitet werden: {:#}", e);
            let message = format!("Error: {e:#}");
            self.view.set_status(&message);
            self.state.ui.status_message = Some(message);
        }
        self.spawn_pending();
    }

    fn spawn_pending(&mut self) {
        for request in self.state.fetch.take_pending() {
            match request {
                ServiceRequest::Routes {
                    generation,
                    request,
                } => {
                    let routing = Rc::clone(&self.routing);
                    self.in_flight.push(
                        async move {
                            match routing.fetch_routes(request).await {
                                Ok(payload) => AppIntent::RoutesReceived {
                                    generation,
                                    payload,
                                },
                                Err(error) => AppIntent::RouteFetchFailed { generation, error },
                            }
                        }
                        .boxed_local(),
                    );
                }
                ServiceRequest::Geocode { lookup, from, to } => {
                    let geocoder = Rc::clone(&self.geocoder);
                    self.in_flight.push(
                        async move {
                            let (start, destination) =
                                futures::join!(geocoder.resolve(&from), geocoder.resolve(&to));
                            AppIntent::PlacesResolved {
                                lookup,
                                start,
                                destination,
                            }
                        }
                        .boxed_local(),
                    );
                }
            }
        }
    }

    /// Wartet, bis alle laufenden Anfragen beantwortet und verarbeitet sind.
    pub async fn settle(&mut self) {
        while let Some(intent) = self.in_flight.next().await {
            self.dispatch(intent);
        }
    }

    /// Verarbeitet Eingaben und Dienst-Antworten, bis die Eingabe endet
    /// oder die Sitzung beendet wird.
    pub async fn run<S>(&mut self, mut inputs: S)
    where
        S: Stream<Item = AppIntent> + Unpin,
    {
        while !self.state.should_exit {
            tokio::select! {
                Some(intent) = self.in_flight.next(), if !self.in_flight.is_empty() => {
                    self.dispatch(intent);
                }
                input = inputs.next() => match input {
                    Some(intent) => self.dispatch(intent),
                    None => {
                        self.settle().await;
                        break;
                    }
                },
            }
        }
        self.state.command_log.log_summary();
    }

    /// Anzahl laufender Dienst-Anfragen.
    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }
}
