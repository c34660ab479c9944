use crate::app_config::AppConfig;
use crate::backend::VolunteerBackend;
use crate::directory::load_directory_from;
use crate::matcher::MatchSession;
use crate::nominatim::NominatimGeocoder;
use crate::openroute::OpenRouteService;
use reqwest::Client;
use std::sync::Arc;
use tokio::io::{BufReader, stdin, stdout};
use tracing::{info, warn};

mod app_config;
mod backend;
mod coordinate_deserializer;
mod directory;
mod domain;
mod extensions;
mod matcher;
mod nominatim;
mod openroute;
mod terminal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = Arc::new(AppConfig::load()?);
    info!("✅  Loaded configuration");

    let directory = Arc::new(load_directory_from(config.directory().path()).await?);
    if directory.is_empty() {
        warn!("⚠️ The NGO directory is empty, no volunteer will be matched");
    }
    info!("✅  Loaded {} NGO(s)", directory.len());

    let geocoder = NominatimGeocoder::new(nominatim::new_client(&config)?, config.clone());
    let route_planner = OpenRouteService::new(openroute::new_client(&config)?, config.clone());
    let backend = VolunteerBackend::new(Client::new(), config.clone());
    let mut session = MatchSession::new(directory, Arc::new(geocoder), Arc::new(route_planner), Arc::new(backend));

    info!("🔥 {} is up and running", env!("CARGO_PKG_NAME"));

    terminal::run(&mut session, BufReader::new(stdin()), &mut stdout()).await?;

    Ok(())
}
