use crate::domain::VolunteerApplication;
use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

#[async_trait]
pub trait ApplicationSink: Debug + Send + Sync {
    async fn submit(&self, application: &VolunteerApplication) -> Result<(), SubmissionError>;
}

#[derive(Error, Debug)]
pub enum SubmissionError {
    #[error("application rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
}
