use anyhow::anyhow;
use reqwest::Url;
use serde_json::Value;

use super::payload::number_from_value;
use super::Geocoder;
use crate::core::{ClientError, GeoPoint};
use crate::shared::ClientOptions;

/// HTTP-Client eines Nominatim-kompatiblen Geocoders.
#[derive(Clone)]
pub struct GeocodingClient {
    inner: reqwest::Client,
    endpoint: Url,
}

impl GeocodingClient {
    /// Erstellt den Client aus den Optionen (Endpunkt, Timeout, User-Agent).
    pub fn new(options: &ClientOptions) -> anyhow::Result<Self> {
        let endpoint = Url::parse(&options.geocoding_url)
            .map_err(|e| anyhow!("{} is not a valid url: {}", options.geocoding_url, e))?;

        let inner = reqwest::Client::builder()
            .timeout(options.request_timeout())
            .user_agent(options.user_agent.as_str())
            .build()?;

        Ok(Self { inner, endpoint })
    }
}

impl Geocoder for GeocodingClient {
    async fn resolve(&self, place: &str) -> Result<Option<GeoPoint>, ClientError> {
        log::debug!("Geocoding-Anfrage: {place:?}");

        let response = self
            .inner
            .get(self.endpoint.clone())
            .query(&[("format", "json"), ("q", place)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::NetworkFailure(format!(
                "Server error {}",
                status.as_u16()
            )));
        }

        parse_geocoding_response(&response.json().await?)
    }
}

/// Liest den ersten Treffer einer Geocoding-Antwort.
///
/// Leere Liste = kein Treffer. `lat`/`lon` kommen als Strings, Zahlen
/// werden ebenfalls akzeptiert.
pub fn parse_geocoding_response(body: &Value) -> Result<Option<GeoPoint>, ClientError> {
    let malformed = || ClientError::NetworkFailure("malformed geocoding response".into());

    let entries = body.as_array().ok_or_else(malformed)?;
    let Some(first) = entries.first() else {
        return Ok(None);
    };

    let lat = first.get("lat").and_then(number_from_value);
    let lon = first.get("lon").and_then(number_from_value);
    match (lat, lon) {
        (Some(lat), Some(lon)) => Ok(Some(GeoPoint::new(lat, lon))),
        _ => Err(malformed()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn first_hit_is_parsed_from_strings() {
        let body = json!([
            { "lat": "28.6139391", "lon": "77.2090212", "display_name": "New Delhi" },
            { "lat": "1", "lon": "2" }
        ]);

        let point = parse_geocoding_response(&body).expect("Antwort lesbar");

        assert_eq!(point, Some(GeoPoint::new(28.6139391, 77.2090212)));
    }

    #[test]
    fn empty_array_means_not_found() {
        assert_eq!(parse_geocoding_response(&json!([])), Ok(None));
    }

    #[test]
    fn garbage_is_a_network_failure() {
        assert!(matches!(
            parse_geocoding_response(&json!({ "error": "rate limited" })),
            Err(ClientError::NetworkFailure(_))
        ));
        assert!(matches!(
            parse_geocoding_response(&json!([{ "lat": "north" }])),
            Err(ClientError::NetworkFailure(_))
        ));
    }
}
