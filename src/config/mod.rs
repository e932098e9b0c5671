#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::AppConfig;

use crate::adapters::{ConfiguredFeedbackSink, HttpFeedbackSink, NoopFeedbackSink};
use crate::utils::error::Result;

/// Builds the feedback collaborator described by the configuration.
pub fn build_feedback_sink(config: &AppConfig) -> Result<ConfiguredFeedbackSink> {
    match (config.feedback_enabled(), config.feedback_endpoint()) {
        (true, Some(endpoint)) => {
            tracing::debug!("Feedback collection enabled: {}", endpoint);
            let sink = HttpFeedbackSink::new(endpoint.to_string(), config.feedback_timeout())?;
            Ok(ConfiguredFeedbackSink::Http(sink))
        }
        _ => Ok(ConfiguredFeedbackSink::Disabled(NoopFeedbackSink)),
    }
}
