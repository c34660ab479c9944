use crate::app_config::AppConfig;
use crate::domain::{ApplicationSink, SubmissionError, VolunteerApplication};
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use tracing::{info, instrument, trace};

#[derive(Debug)]
pub struct VolunteerBackend {
    client: Client,
    config: Arc<AppConfig>,
}

impl VolunteerBackend {
    pub fn new(client: Client, config: Arc<AppConfig>) -> Self {
        VolunteerBackend { client, config }
    }
}

#[async_trait]
impl ApplicationSink for VolunteerBackend {
    #[instrument(skip_all, fields(ngo = %application.applied_ngo))]
    async fn submit(&self, application: &VolunteerApplication) -> Result<(), SubmissionError> {
        info!("📨 Submitting volunteer application...");
        trace!("Volunteer application: {:?}", application);

        let response = self
            .client
            .post(format!("{}/api/volunteer", self.config.backend().url()))
            .json(application)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SubmissionError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        info!(status_code = %status, "📨 Submitting volunteer application... OK");
        Ok(())
    }
}
