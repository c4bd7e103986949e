use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

/// Background job asking the notification system to send a verification email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationEmailJob {
    pub job_id: String,
    pub email: String,
    pub requested_at: DateTime<Utc>,
}

impl VerificationEmailJob {
    /// Create a new job for `email` with a unique job ID.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            job_id: Uuid::new_v4().to_string(),
            email: email.into(),
            requested_at: Utc::now(),
        }
    }
}
