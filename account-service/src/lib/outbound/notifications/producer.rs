use std::time::Duration;

use async_trait::async_trait;
use rdkafka::config::ClientConfig;
use rdkafka::producer::FutureProducer;
use rdkafka::producer::FutureRecord;
use rdkafka::util::Timeout;

use crate::config::KafkaConfig;
use crate::domain::account::errors::DispatchError;
use crate::domain::account::jobs::VerificationEmailJob;
use crate::domain::account::ports::NotificationDispatcher;
use crate::outbound::notifications::messages::NotificationMessage;

/// Publishes notification jobs to a Kafka topic for the mailer to consume.
pub struct KafkaNotificationDispatcher {
    producer: FutureProducer,
    topic: String,
    timeout: Duration,
}

impl KafkaNotificationDispatcher {
    /// Create a producer with at-least-once delivery.
    ///
    /// # Notes:
    /// - `acks=all`: Wait for all in-sync replicas to acknowledge
    /// - `enable.idempotence=true`: Broker drops duplicates caused by retries
    pub fn new(config: &KafkaConfig) -> Result<Self, anyhow::Error> {
        tracing::info!(
            brokers = %config.brokers,
            topic = %config.topic,
            "Initializing Kafka notification producer"
        );

        let producer: FutureProducer = ClientConfig::new()
            .set("bootstrap.servers", &config.brokers)
            .set("message.timeout.ms", "30000")
            .set("enable.idempotence", "true")
            .set("acks", "all")
            .set("retries", "10")
            .set("retry.backoff.ms", "100")
            .create()?;

        Ok(Self {
            producer,
            topic: config.topic.clone(),
            timeout: Duration::from_secs(30),
        })
    }

    /// Send one message keyed by recipient so a mailbox's jobs stay ordered.
    async fn publish(&self, key: &str, message: &NotificationMessage) -> Result<(), DispatchError> {
        let payload = serde_json::to_string(message)
            .map_err(|e| DispatchError::SerializationFailed(e.to_string()))?;

        let record = FutureRecord::to(&self.topic).key(key).payload(&payload);

        self.producer
            .send(record, Timeout::After(self.timeout))
            .await
            .map(|_| {
                tracing::debug!(topic = %self.topic, "Notification published");
            })
            .map_err(|(err, _)| DispatchError::PublishFailed(err.to_string()))
    }
}

#[async_trait]
impl NotificationDispatcher for KafkaNotificationDispatcher {
    async fn send_verification_email(
        &self,
        job: &VerificationEmailJob,
    ) -> Result<(), DispatchError> {
        let message = NotificationMessage::from(job);
        self.publish(&job.email, &message).await
    }
}
