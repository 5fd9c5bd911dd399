use std::time::Duration;

use async_trait::async_trait;
use rdkafka::config::ClientConfig;
use rdkafka::producer::FutureProducer;
use rdkafka::producer::FutureRecord;
use rdkafka::util::Timeout;
use serde::Serialize;

use crate::config::Config;
use crate::domain::user::events::UserCreatedEvent;
use crate::outbound::events::messages::UserEventMessage;
use crate::user::errors::EventPublisherError;
use crate::user::ports::EventPublisher;

pub struct KafkaEventProducer {
    producer: FutureProducer,
    topic: String,
    timeout: Duration,
}

impl KafkaEventProducer {
    /// Create a Kafka producer with at-least-once delivery settings.
    ///
    /// `acks=all` with idempotence enabled: the broker confirms every
    /// event, and retries cannot introduce duplicates.
    pub fn new(config: &Config) -> Result<Self, anyhow::Error> {
        tracing::info!(
            brokers = %config.kafka.brokers,
            topic = %config.kafka.topic,
            "Initializing Kafka producer for user events"
        );

        let producer: FutureProducer = ClientConfig::new()
            .set("bootstrap.servers", &config.kafka.brokers)
            .set("message.timeout.ms", "30000")
            .set("compression.type", "gzip")
            .set("enable.idempotence", "true")
            .set("acks", "all")
            .set("retries", "10")
            .set("retry.backoff.ms", "100")
            .create()?;

        Ok(Self {
            producer,
            topic: config.kafka.topic.to_string(),
            timeout: Duration::from_secs(30),
        })
    }

    /// Publish an event, keyed by user id so events for the same user
    /// stay ordered within a partition.
    async fn publish<T: Serialize>(
        &self,
        user_id: &str,
        event: &T,
    ) -> Result<(), EventPublisherError> {
        let payload = serde_json::to_string(event)
            .map_err(|e| EventPublisherError::SerializationFailed(e.to_string()))?;

        let record = FutureRecord::to(&self.topic).key(user_id).payload(&payload);

        self.producer
            .send(record, Timeout::After(self.timeout))
            .await
            .map(|_| {
                tracing::debug!(topic = %self.topic, user_id, "Event published");
            })
            .map_err(|(err, _)| {
                tracing::error!(
                    topic = %self.topic,
                    user_id,
                    error = %err,
                    "Failed to publish event after all retries"
                );
                EventPublisherError::PublishFailed(err.to_string())
            })
    }
}

#[async_trait]
impl EventPublisher for KafkaEventProducer {
    async fn publish_user_created(
        &self,
        event: &UserCreatedEvent,
    ) -> Result<(), EventPublisherError> {
        let message = UserEventMessage::from(event);

        // Failure propagates to the registration flow; the caller must
        // not see a full success when downstream consumers were never
        // notified.
        self.publish(&event.user_id, &message).await
    }
}
