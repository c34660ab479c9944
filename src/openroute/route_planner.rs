use crate::app_config::AppConfig;
use crate::domain::{Coordinate, RoutePlanner, RoutingError, TravelTime};
use crate::openroute::directions::{DirectionsRequest, DirectionsResponse};
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use tracing::{info, instrument};

#[derive(Debug)]
pub struct OpenRouteService {
    client: Client,
    config: Arc<AppConfig>,
}

impl OpenRouteService {
    pub fn new(client: Client, config: Arc<AppConfig>) -> Self {
        OpenRouteService { client, config }
    }
}

#[async_trait]
impl RoutePlanner for OpenRouteService {
    #[instrument(skip(self))]
    async fn travel_time(&self, from: &Coordinate, to: &Coordinate) -> Result<TravelTime, RoutingError> {
        info!("🚗 Requesting directions...");

        let routing = self.config.routing();
        let response = self
            .client
            .post(format!("{}/v2/directions/{}", routing.url(), routing.profile()))
            .json(&DirectionsRequest::new(from, to))
            .send()
            .await?
            .error_for_status()?
            .json::<DirectionsResponse>()
            .await?;

        let route = response.routes.first().ok_or(RoutingError::NoRoutes)?;
        let travel_time = TravelTime::from_seconds(route.summary.duration);

        info!(duration_s = route.summary.duration, "🚗 Requesting directions... OK, {}", travel_time);
        Ok(travel_time)
    }
}
