use crate::directory::NgoDirectory;
use crate::domain::Ngo;
use std::io;
use thiserror::Error;
use tokio::fs;
use tracing::{info, instrument};

#[instrument]
pub async fn load_directory_from(path: &str) -> Result<NgoDirectory, DirectoryError> {
    info!("📁 Loading NGO directory...");
    let content = fs::read_to_string(path).await.map_err(|e| DirectoryError::Io {
        source: e,
        path: path.to_string(),
    })?;

    let ngos = serde_json::from_str::<Vec<Ngo>>(&content).map_err(|e| DirectoryError::Parse {
        source: e,
        path: path.to_string(),
    })?;

    info!("📁 Loading NGO directory... OK, {} loaded", ngos.len());
    Ok(NgoDirectory::new(ngos))
}

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("unable to read '{path}': {source}")]
    Io { source: io::Error, path: String },
    #[error("unable to parse '{path}': {source}")]
    Parse { source: serde_json::Error, path: String },
}
