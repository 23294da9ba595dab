//! HTTP client for the feedback endpoint

use reqwest::Client;
use serde::Serialize;
use cli_log::*;

use crate::config::{API_KEY_HEADER, FEEDBACK_PATH};
use crate::error::FeedbackError;

/// Body of `POST /api/feedback`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackSubmission {
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct FeedbackClient {
    base_url: String,
    api_key: String,
    http: Client,
}

impl FeedbackClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            http: Client::new(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, FEEDBACK_PATH)
    }

    /// Send one submission. Any non-2xx status is an error; nothing is retried.
    pub async fn submit(&self, submission: &FeedbackSubmission) -> Result<(), FeedbackError> {
        let url = self.endpoint();
        debug!("POST {url} ({} chars)", submission.message.len());

        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(submission)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Feedback endpoint responded with {status}");
            return Err(FeedbackError::Status(status));
        }
        Ok(())
    }
}
