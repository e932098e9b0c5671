pub mod advisor;
pub mod chart;
pub mod estimator;

pub use crate::domain::model::{Gender, Measurement, SizeChartEntry, SizeLabel};
pub use crate::domain::ports::{FeedbackSink, UserStore};
pub use crate::utils::error::Result;
