use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::domain::model::{FeedbackOutcome, FeedbackRecord};
use crate::domain::ports::FeedbackSink;
use crate::utils::error::{Result, SizerError};

/// Posts feedback as an url-encoded form to an external collection script.
#[derive(Debug, Clone)]
pub struct HttpFeedbackSink {
    endpoint: String,
    client: Client,
}

impl HttpFeedbackSink {
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { endpoint, client })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn post(&self, record: &FeedbackRecord) -> Result<()> {
        tracing::debug!("Posting feedback to: {}", self.endpoint);
        let response = self.client.post(&self.endpoint).form(record).send().await?;

        tracing::debug!("Feedback endpoint status: {}", response.status());

        if !response.status().is_success() {
            return Err(SizerError::FeedbackError {
                message: format!("HTTP {}", response.status()),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl FeedbackSink for HttpFeedbackSink {
    async fn submit_feedback(&self, record: &FeedbackRecord) -> FeedbackOutcome {
        match self.post(record).await {
            Ok(()) => FeedbackOutcome::Submitted,
            Err(e) => FeedbackOutcome::Failed {
                message: e.user_friendly_message(),
            },
        }
    }
}

/// Used when feedback collection is turned off.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopFeedbackSink;

#[async_trait]
impl FeedbackSink for NoopFeedbackSink {
    async fn submit_feedback(&self, _record: &FeedbackRecord) -> FeedbackOutcome {
        FeedbackOutcome::Skipped
    }
}

/// Runtime choice between the two sinks, driven by configuration.
#[derive(Debug, Clone)]
pub enum ConfiguredFeedbackSink {
    Http(HttpFeedbackSink),
    Disabled(NoopFeedbackSink),
}

#[async_trait]
impl FeedbackSink for ConfiguredFeedbackSink {
    async fn submit_feedback(&self, record: &FeedbackRecord) -> FeedbackOutcome {
        match self {
            ConfiguredFeedbackSink::Http(sink) => sink.submit_feedback(record).await,
            ConfiguredFeedbackSink::Disabled(sink) => sink.submit_feedback(record).await,
        }
    }
}
