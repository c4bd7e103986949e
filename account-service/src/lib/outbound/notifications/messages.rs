use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::account::jobs::VerificationEmailJob;

/// Serializable envelope for every notification this service emits.
///
/// Consumed by the mailer; the `notification_type` tag selects the template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "notification_type", rename_all = "snake_case")]
pub enum NotificationMessage {
    VerificationEmail(VerificationEmailMessage),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationEmailMessage {
    pub job_id: String,
    pub email: String,
    pub requested_at: DateTime<Utc>,
}

impl From<&VerificationEmailJob> for NotificationMessage {
    fn from(job: &VerificationEmailJob) -> Self {
        NotificationMessage::VerificationEmail(VerificationEmailMessage {
            job_id: job.job_id.clone(),
            email: job.email.clone(),
            requested_at: job.requested_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verification_email_is_tagged() {
        let job = VerificationEmailJob::new("a@b.com");
        let message = NotificationMessage::from(&job);

        let json: serde_json::Value = serde_json::to_value(&message).unwrap();
        assert_eq!(json["notification_type"], "verification_email");
        assert_eq!(json["email"], "a@b.com");
        assert_eq!(json["job_id"], job.job_id.as_str());
    }
}
