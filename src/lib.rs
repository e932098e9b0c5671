pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{HttpFeedbackSink, LocalUserStore, NoopFeedbackSink};
pub use config::AppConfig;
pub use crate::core::advisor::{ClientInfo, Recommendation, SizeAdvisor};
pub use crate::core::chart::{chart_entry, render_size_chart, size_chart, size_description, Language};
pub use crate::core::estimator::{estimate_chest, estimate_size, SizeEstimate};
pub use domain::model::{
    FeedbackOutcome, FeedbackRecord, Gender, Measurement, NewUser, SizeChartEntry, SizeLabel, User,
};
pub use domain::ports::{FeedbackSink, UserStore};
pub use utils::error::{Result, SizerError};
