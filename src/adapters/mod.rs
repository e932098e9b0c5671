// Adapters layer: concrete implementations of the domain ports (http feedback, local storage).

pub mod http_feedback;
pub mod local_store;

pub use http_feedback::{ConfiguredFeedbackSink, HttpFeedbackSink, NoopFeedbackSink};
pub use local_store::LocalUserStore;
