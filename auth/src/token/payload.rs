use chrono::DateTime;
use chrono::Duration;
use chrono::SubsecRound;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use super::errors::TokenError;

/// Claims carried inside an encrypted token.
///
/// Built once at issuance and reconstructed verbatim on verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    /// Unique token identifier, fresh for every issuance
    pub id: Uuid,

    /// Subject the token was issued for (the account email)
    pub subject: String,

    pub issued_at: DateTime<Utc>,

    pub expires_at: DateTime<Utc>,
}

impl Payload {
    /// Create a payload that is valid for `duration` starting now.
    ///
    /// Timestamps are kept at microsecond precision so they survive a
    /// round trip through Postgres `TIMESTAMPTZ` unchanged.
    ///
    /// # Arguments
    /// * `subject` - Token subject
    /// * `duration` - Lifetime of the token
    ///
    /// # Errors
    /// * `EncodingFailed` - Expiry does not fit in the supported time range
    pub fn new(subject: impl ToString, duration: Duration) -> Result<Self, TokenError> {
        let issued_at = Utc::now().trunc_subsecs(6);
        let expires_at = issued_at
            .checked_add_signed(duration)
            .ok_or_else(|| {
                TokenError::EncodingFailed(format!("token duration out of range: {}", duration))
            })?
            .trunc_subsecs(6);

        Ok(Self {
            id: Uuid::new_v4(),
            subject: subject.to_string(),
            issued_at,
            expires_at,
        })
    }

    /// Check if the payload is expired at the given instant.
    ///
    /// A payload whose expiry equals `now` counts as expired.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    /// Time between issuance and expiry.
    pub fn lifetime(&self) -> Duration {
        self.expires_at - self.issued_at
    }
}
