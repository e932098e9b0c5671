use chrono::Utc;
use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::core::chart::{chart_entry, size_description, Language};
use crate::core::estimator::SizeEstimate;
use crate::domain::model::{
    FeedbackOutcome, FeedbackRecord, Gender, Measurement, SizeChartEntry, SizeLabel,
};
use crate::domain::ports::FeedbackSink;

/// What the caller renders after every input change.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub estimate: SizeEstimate,
    pub description: &'static str,
    pub chart_row: Option<&'static SizeChartEntry>,
}

/// Client details attached to a feedback submission.
#[derive(Debug, Clone, Default)]
pub struct ClientInfo {
    pub ip: Option<String>,
    pub user_agent: Option<String>,
}

/// Glue between the estimator and the feedback collaborator. The estimator
/// never sees the sink; feedback results never change a recommendation.
pub struct SizeAdvisor<F: FeedbackSink> {
    feedback: Arc<F>,
    language: Language,
}

impl<F: FeedbackSink + 'static> SizeAdvisor<F> {
    pub fn new(feedback: F, language: Language) -> Self {
        Self {
            feedback: Arc::new(feedback),
            language,
        }
    }

    pub fn recommend(&self, gender: Gender, measurement: Measurement) -> Recommendation {
        let estimate = SizeEstimate::compute(gender, measurement);
        tracing::debug!(
            "Estimated chest {:.2} cm for {} {}cm/{}kg -> {}",
            estimate.chest_cm,
            gender,
            measurement.height_cm,
            measurement.weight_kg,
            estimate.label
        );
        Recommendation {
            estimate,
            description: size_description(estimate.label, self.language),
            chart_row: chart_entry(gender, estimate.label),
        }
    }

    pub fn feedback_record(
        &self,
        recommendation: &Recommendation,
        actual_size: SizeLabel,
        client: ClientInfo,
    ) -> FeedbackRecord {
        let estimate = &recommendation.estimate;
        FeedbackRecord {
            recommended_size: estimate.label,
            actual_size,
            height_cm: estimate.measurement.height_cm,
            weight_kg: estimate.measurement.weight_kg,
            gender: estimate.gender,
            client_ip: client.ip,
            user_agent: client.user_agent,
            submitted_at: Utc::now(),
        }
    }

    pub async fn submit_feedback(&self, record: &FeedbackRecord) -> FeedbackOutcome {
        let outcome = self.feedback.submit_feedback(record).await;
        log_outcome(&outcome, record);
        outcome
    }

    /// Fire-and-forget submission. The returned handle may be dropped.
    pub fn submit_feedback_detached(&self, record: FeedbackRecord) -> JoinHandle<FeedbackOutcome> {
        let sink = Arc::clone(&self.feedback);
        tokio::spawn(async move {
            let outcome = sink.submit_feedback(&record).await;
            log_outcome(&outcome, &record);
            outcome
        })
    }
}

fn log_outcome(outcome: &FeedbackOutcome, record: &FeedbackRecord) {
    match outcome {
        FeedbackOutcome::Submitted => tracing::info!(
            "📨 Feedback sent (recommended {}, actual {})",
            record.recommended_size,
            record.actual_size
        ),
        FeedbackOutcome::Skipped => tracing::debug!("Feedback collection disabled, skipping"),
        FeedbackOutcome::Failed { message } => {
            tracing::warn!("⚠️ Feedback submission failed: {}", message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use tokio::sync::Mutex;

    struct RecordingSink {
        records: Mutex<Vec<FeedbackRecord>>,
        fail: bool,
    }

    impl RecordingSink {
        fn new(fail: bool) -> Self {
            Self {
                records: Mutex::new(Vec::new()),
                fail,
            }
        }
    }

    #[async_trait]
    impl FeedbackSink for RecordingSink {
        async fn submit_feedback(&self, record: &FeedbackRecord) -> FeedbackOutcome {
            self.records.lock().await.push(record.clone());
            if self.fail {
                FeedbackOutcome::Failed {
                    message: "endpoint down".to_string(),
                }
            } else {
                FeedbackOutcome::Submitted
            }
        }
    }

    #[test]
    fn test_recommend_includes_description_and_chart_row() {
        let advisor = SizeAdvisor::new(RecordingSink::new(false), Language::En);
        let rec = advisor.recommend(Gender::Male, Measurement::default());
        assert_eq!(rec.estimate.label, SizeLabel::M);
        assert_eq!(rec.description, "Medium");
        assert_eq!(rec.chart_row.unwrap().chest, 117.0);
    }

    #[tokio::test]
    async fn test_feedback_record_carries_recommendation() {
        let advisor = SizeAdvisor::new(RecordingSink::new(false), Language::Ar);
        let rec = advisor.recommend(Gender::Female, Measurement::clamped(160.0, 55.0));
        let record = advisor.feedback_record(
            &rec,
            SizeLabel::XS,
            ClientInfo {
                ip: Some("10.0.0.7".to_string()),
                user_agent: None,
            },
        );

        assert_eq!(record.recommended_size, SizeLabel::XXS);
        assert_eq!(record.actual_size, SizeLabel::XS);
        assert_eq!(record.gender, Gender::Female);
        assert!(!record.is_accurate());

        let outcome = advisor.submit_feedback(&record).await;
        assert!(outcome.is_submitted());
        assert_eq!(advisor.feedback.records.lock().await.len(), 1);
    }

    #[tokio::test]
    async fn test_failed_feedback_leaves_recommendation_intact() {
        let advisor = SizeAdvisor::new(RecordingSink::new(true), Language::En);
        let before = advisor.recommend(Gender::Male, Measurement::clamped(220.0, 200.0));
        let record = advisor.feedback_record(&before, SizeLabel::XXL, ClientInfo::default());

        let outcome = advisor.submit_feedback_detached(record).await.unwrap();
        assert!(matches!(outcome, FeedbackOutcome::Failed { .. }));

        let after = advisor.recommend(Gender::Male, Measurement::clamped(220.0, 200.0));
        assert_eq!(before, after);
        assert_eq!(after.estimate.label, SizeLabel::XXXL);
    }
}
