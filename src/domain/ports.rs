use crate::domain::model::{FeedbackOutcome, FeedbackRecord, NewUser, User};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Collects user feedback on recommendations. Implementations must not panic
/// or return errors: failures are reported through [`FeedbackOutcome::Failed`].
#[async_trait]
pub trait FeedbackSink: Send + Sync {
    async fn submit_feedback(&self, record: &FeedbackRecord) -> FeedbackOutcome;
}

pub trait UserStore: Send + Sync {
    fn get_user(&self, id: u32) -> impl std::future::Future<Output = Result<Option<User>>> + Send;
    fn get_user_by_username(
        &self,
        username: &str,
    ) -> impl std::future::Future<Output = Result<Option<User>>> + Send;
    fn create_user(&self, user: NewUser) -> impl std::future::Future<Output = Result<User>> + Send;
}
