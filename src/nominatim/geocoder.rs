use crate::app_config::AppConfig;
use crate::domain::{Coordinate, GeocodeError, Geocoder, ReverseGeocodeError};
use crate::nominatim::search_response::{ReverseResponse, SearchResult};
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use tracing::{debug, info, instrument};

#[derive(Debug)]
pub struct NominatimGeocoder {
    client: Client,
    config: Arc<AppConfig>,
}

impl NominatimGeocoder {
    pub fn new(client: Client, config: Arc<AppConfig>) -> Self {
        NominatimGeocoder { client, config }
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    #[instrument(skip(self))]
    async fn geocode(&self, address: &str) -> Result<Coordinate, GeocodeError> {
        info!("🔎 Geocoding address...");

        let results = self
            .client
            .get(format!("{}/search", self.config.geocoding().url()))
            .query(&[("format", "json"), ("q", address)])
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<SearchResult>>()
            .await?;
        debug!("🔸 Received {} geocoding result(s)", results.len());

        let first = results.into_iter().next().ok_or(GeocodeError::NoResults)?;
        let coordinate = match (first.lat.parse::<f64>(), first.lon.parse::<f64>()) {
            (Ok(lat), Ok(lon)) => Coordinate::new(lat, lon),
            _ => return Err(GeocodeError::InvalidCoordinate(format!("{}, {}", first.lat, first.lon))),
        };

        info!(lat = coordinate.lat, lon = coordinate.lon, "🔎 Geocoding address... OK");
        Ok(coordinate)
    }

    #[instrument(skip(self))]
    async fn reverse_geocode(&self, location: &Coordinate) -> Result<String, ReverseGeocodeError> {
        info!("🔎 Reverse geocoding location...");

        let response = self
            .client
            .get(format!("{}/reverse", self.config.geocoding().url()))
            .query(&[
                ("format", "json".to_string()),
                ("lat", location.lat.to_string()),
                ("lon", location.lon.to_string()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json::<ReverseResponse>()
            .await?;

        match response {
            ReverseResponse {
                display_name: Some(display_name),
                address: Some(_),
            } => {
                info!("🔎 Reverse geocoding location... OK");
                Ok(display_name)
            }
            _ => Err(ReverseGeocodeError::MissingAddress),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;
    use mockito::Matcher;
    use pretty_assertions::assert_eq;

    fn geocoder_for(server: &mockito::ServerGuard) -> NominatimGeocoder {
        let config = AppConfigBuilder::new().geocoding_url(server.url()).build();
        NominatimGeocoder::new(Client::new(), Arc::new(config))
    }

    #[tokio::test]
    async fn geocode_returns_the_first_result() -> Result<(), GeocodeError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/search")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("format".into(), "json".into()),
                Matcher::UrlEncoded("q".into(), "Worli, Mumbai".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(include_str!("../../tests/resources/nominatim/search_response.json"))
            .create_async()
            .await;

        let geocoder = geocoder_for(&server);
        let coordinate = geocoder.geocode("Worli, Mumbai").await?;

        mock.assert();
        assert_eq!(coordinate, Coordinate::new(19.0176147, 72.8161859));

        Ok(())
    }

    #[tokio::test]
    async fn geocode_without_results_is_an_error() {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("GET", "/search")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("[]")
            .create_async()
            .await;

        let geocoder = geocoder_for(&server);
        let result = geocoder.geocode("Atlantis").await;

        assert!(matches!(result, Err(GeocodeError::NoResults)), "Expected no results, found {:?}", result);
    }

    #[tokio::test]
    async fn geocode_with_an_unparseable_coordinate_is_an_error() {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("GET", "/search")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{ "lat": "north", "lon": "72.8" }]"#)
            .create_async()
            .await;

        let geocoder = geocoder_for(&server);
        let result = geocoder.geocode("Mumbai").await;

        assert!(
            matches!(result, Err(GeocodeError::InvalidCoordinate(ref value)) if value == "north, 72.8"),
            "Expected an invalid coordinate, found {:?}",
            result
        );
    }

    #[tokio::test]
    async fn geocode_with_a_server_error_is_a_request_error() {
        let mut server = mockito::Server::new_async().await;

        server.mock("GET", "/search").match_query(Matcher::Any).with_status(503).create_async().await;

        let geocoder = geocoder_for(&server);
        let result = geocoder.geocode("Mumbai").await;

        assert!(matches!(result, Err(GeocodeError::Request(_))), "Expected a request error, found {:?}", result);
    }

    #[tokio::test]
    async fn reverse_geocode_returns_the_display_name() -> Result<(), ReverseGeocodeError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/reverse")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("format".into(), "json".into()),
                Matcher::UrlEncoded("lat".into(), "19.0176147".into()),
                Matcher::UrlEncoded("lon".into(), "72.8161859".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(include_str!("../../tests/resources/nominatim/reverse_response.json"))
            .create_async()
            .await;

        let geocoder = geocoder_for(&server);
        let address = geocoder.reverse_geocode(&Coordinate::new(19.0176147, 72.8161859)).await?;

        mock.assert();
        assert_eq!(address, "Worli, Mumbai, Mumbai Suburban, Maharashtra, 400018, India");

        Ok(())
    }

    #[tokio::test]
    async fn reverse_geocode_without_an_address_is_an_error() {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("GET", "/reverse")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{ "error": "Unable to geocode" }"#)
            .create_async()
            .await;

        let geocoder = geocoder_for(&server);
        let result = geocoder.reverse_geocode(&Coordinate::new(0.0, 0.0)).await;

        assert!(matches!(result, Err(ReverseGeocodeError::MissingAddress)), "Expected a missing address, found {:?}", result);
    }
}
