use anyhow::anyhow;
use reqwest::Url;
use serde_json::Value;

use super::{RouteRequest, RoutingService};
use crate::core::ClientError;
use crate::shared::ClientOptions;

/// HTTP-Client des Routing-Dienstes.
#[derive(Clone)]
pub struct RoutingClient {
    inner: reqwest::Client,
    endpoint: Url,
}

impl RoutingClient {
    /// Erstellt den Client aus den Optionen (Endpunkt, Timeout, User-Agent).
    pub fn new(options: &ClientOptions) -> anyhow::Result<Self> {
        let endpoint = Url::parse(&options.routing_url)
            .map_err(|e| anyhow!("{} is not a valid url: {}", options.routing_url, e))?;

        let inner = reqwest::Client::builder()
            .timeout(options.request_timeout())
            .user_agent(options.user_agent.as_str())
            .build()?;

        Ok(Self { inner, endpoint })
    }

    /// Baut die Anfrage-URL mit `start_lat`, `start_lon`, `end_lat`, `end_lon`.
    pub fn request_url(&self, request: &RouteRequest) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("start_lat", &request.start.lat.to_string())
            .append_pair("start_lon", &request.start.lon.to_string())
            .append_pair("end_lat", &request.destination.lat.to_string())
            .append_pair("end_lon", &request.destination.lon.to_string());
        url
    }
}

impl RoutingService for RoutingClient {
    async fn fetch_routes(&self, request: RouteRequest) -> Result<Value, ClientError> {
        let url = self.request_url(&request);
        log::debug!("Routing-Anfrage: {url}");

        let response = self.inner.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::NetworkFailure(format!(
                "Server error {}",
                status.as_u16()
            )));
        }

        Ok(response.json().await?)
    }
}
