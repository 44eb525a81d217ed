//! Publish request handling and outbox implementations.
//!
//! Modules queue publishes into a `PublishOutbox` while they run. A
//! `BufferedOutbox` holds them until the driver flushes them through a
//! `PublisherHandle` into the channel the MQTT task drains.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::{Channel, Sender};
use heapless::{String, Vec};

use super::traits::PublishOutbox;
use crate::QoS;
use crate::error::HubError;
use crate::topic::sensor_topic;

/// A publish request with inline storage for topic and payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishRequest<const TOPIC_SIZE: usize, const PAYLOAD_SIZE: usize> {
    pub topic: String<TOPIC_SIZE>,
    pub payload: Vec<u8, PAYLOAD_SIZE>,
    pub qos: QoS,
}

impl<const TOPIC_SIZE: usize, const PAYLOAD_SIZE: usize> PublishRequest<TOPIC_SIZE, PAYLOAD_SIZE> {
    /// Copies `topic` and `payload` into a new request.
    pub fn new(topic: &str, payload: &[u8], qos: QoS) -> Result<Self, HubError> {
        let mut owned_topic = String::new();
        owned_topic
            .push_str(topic)
            .map_err(|_| HubError::TopicTooLong {
                len: topic.len(),
                max: TOPIC_SIZE,
            })?;

        let mut owned_payload = Vec::new();
        owned_payload
            .extend_from_slice(payload)
            .map_err(|_| HubError::PayloadTooLarge {
                len: payload.len(),
                max: PAYLOAD_SIZE,
            })?;

        Ok(Self {
            topic: owned_topic,
            payload: owned_payload,
            qos,
        })
    }
}

pub type PublishRequestChannel<
    M,
    const OUTBOX_DEPTH: usize,
    const TOPIC_SIZE: usize,
    const PAYLOAD_SIZE: usize,
> = Channel<M, PublishRequest<TOPIC_SIZE, PAYLOAD_SIZE>, OUTBOX_DEPTH>;

/// A handle that lets tasks publish without access to the MQTT client.
///
/// Wraps a channel sender; copy it freely into as many tasks as needed.
/// The mutex kind `M` is whatever the firmware built the channel with.
pub struct PublisherHandle<
    'a,
    M: RawMutex,
    const OUTBOX_DEPTH: usize,
    const TOPIC_SIZE: usize,
    const PAYLOAD_SIZE: usize,
> {
    tx: Sender<'a, M, PublishRequest<TOPIC_SIZE, PAYLOAD_SIZE>, OUTBOX_DEPTH>,
}

impl<'a, M, const OUTBOX_DEPTH: usize, const TOPIC_SIZE: usize, const PAYLOAD_SIZE: usize>
    PublisherHandle<'a, M, OUTBOX_DEPTH, TOPIC_SIZE, PAYLOAD_SIZE>
where
    M: RawMutex,
{
    /// Create a new `PublisherHandle` from a channel sender.
    pub fn new(tx: Sender<'a, M, PublishRequest<TOPIC_SIZE, PAYLOAD_SIZE>, OUTBOX_DEPTH>) -> Self {
        Self { tx }
    }

    /// Sends an already built request, waiting while the channel is full.
    pub async fn send(&self, req: PublishRequest<TOPIC_SIZE, PAYLOAD_SIZE>) {
        self.tx.send(req).await;
    }

    /// Publish a message, waiting while the channel is full.
    pub async fn publish(&self, topic: &str, payload: &[u8], qos: QoS) -> Result<(), HubError> {
        let req = PublishRequest::new(topic, payload, qos)?;
        self.send(req).await;
        Ok(())
    }

    /// Publish a message without waiting.
    ///
    /// Fails with `OutboxFull` if the channel has no free slot.
    pub fn try_publish(&self, topic: &str, payload: &[u8], qos: QoS) -> Result<(), HubError> {
        let req = PublishRequest::new(topic, payload, qos)?;
        self.tx.try_send(req).map_err(|_| HubError::OutboxFull)
    }
}

impl<'a, M, const OUTBOX_DEPTH: usize, const TOPIC_SIZE: usize, const PAYLOAD_SIZE: usize> Clone
    for PublisherHandle<'a, M, OUTBOX_DEPTH, TOPIC_SIZE, PAYLOAD_SIZE>
where
    M: RawMutex,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, M, const OUTBOX_DEPTH: usize, const TOPIC_SIZE: usize, const PAYLOAD_SIZE: usize> Copy
    for PublisherHandle<'a, M, OUTBOX_DEPTH, TOPIC_SIZE, PAYLOAD_SIZE>
where
    M: RawMutex,
{
}

/// A buffered outbox that collects publish requests during module callbacks.
///
/// # Type Parameters
///
/// - `CAPACITY`: Maximum number of publish requests that can be buffered
/// - `TOPIC_SIZE`: Maximum topic string length
/// - `PAYLOAD_SIZE`: Maximum payload size
pub struct BufferedOutbox<const CAPACITY: usize, const TOPIC_SIZE: usize, const PAYLOAD_SIZE: usize>
{
    requests: Vec<PublishRequest<TOPIC_SIZE, PAYLOAD_SIZE>, CAPACITY>,
}

impl<const CAPACITY: usize, const TOPIC_SIZE: usize, const PAYLOAD_SIZE: usize>
    BufferedOutbox<CAPACITY, TOPIC_SIZE, PAYLOAD_SIZE>
{
    /// Create a new empty buffered outbox.
    pub fn new() -> Self {
        Self {
            requests: Vec::new(),
        }
    }

    /// Takes every buffered request, leaving the outbox empty.
    pub fn drain(&mut self) -> impl Iterator<Item = PublishRequest<TOPIC_SIZE, PAYLOAD_SIZE>> {
        core::mem::take(&mut self.requests).into_iter()
    }

    /// Forwards every buffered request to `handle`, in queue order.
    ///
    /// Returns the number of requests sent.
    pub async fn flush<M: RawMutex, const OUTBOX_DEPTH: usize>(
        &mut self,
        handle: &PublisherHandle<'_, M, OUTBOX_DEPTH, TOPIC_SIZE, PAYLOAD_SIZE>,
    ) -> usize {
        let mut sent = 0;
        for req in self.drain() {
            trace!("flushing publish to {}", req.topic.as_str());
            handle.send(req).await;
            sent += 1;
        }
        sent
    }

    /// Get an iterator over the buffered requests.
    pub fn iter(&self) -> impl Iterator<Item = &PublishRequest<TOPIC_SIZE, PAYLOAD_SIZE>> {
        self.requests.iter()
    }

    /// Clear all buffered requests.
    pub fn clear(&mut self) {
        self.requests.clear();
    }

    /// Check if the outbox is empty.
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Get the number of buffered requests.
    pub fn len(&self) -> usize {
        self.requests.len()
    }
}

impl<const CAPACITY: usize, const TOPIC_SIZE: usize, const PAYLOAD_SIZE: usize> Default
    for BufferedOutbox<CAPACITY, TOPIC_SIZE, PAYLOAD_SIZE>
{
    fn default() -> Self {
        Self::new()
    }
}

impl<const CAPACITY: usize, const TOPIC_SIZE: usize, const PAYLOAD_SIZE: usize> PublishOutbox
    for BufferedOutbox<CAPACITY, TOPIC_SIZE, PAYLOAD_SIZE>
{
    fn publish(&mut self, topic: &str, payload: &[u8], qos: QoS) -> Result<(), HubError> {
        let req = PublishRequest::new(topic, payload, qos)?;
        self.requests.push(req).map_err(|_| {
            warn!("outbox full, rejecting publish to {}", topic);
            HubError::OutboxFull
        })
    }
}

/// Publishes sensed packets under the sensor topic prefix.
///
/// `TOPIC_LEN` bounds the composed topic; see [`sensor_topic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SensorPublisher<const TOPIC_LEN: usize> {
    qos: QoS,
}

impl<const TOPIC_LEN: usize> SensorPublisher<TOPIC_LEN> {
    /// Create a publisher that sends with `qos`.
    pub const fn new(qos: QoS) -> Self {
        Self { qos }
    }

    /// Get the QoS readings are published with.
    pub const fn qos(&self) -> QoS {
        self.qos
    }

    /// Queues `payload` on `sensed/hub/<sensor>`.
    pub fn publish(
        &self,
        outbox: &mut dyn PublishOutbox,
        sensor: &str,
        payload: &[u8],
    ) -> Result<(), HubError> {
        let topic = sensor_topic::<TOPIC_LEN>(sensor)?;
        debug!("sensor packet for {} ({} bytes)", sensor, payload.len());
        outbox.publish(&topic, payload, self.qos)
    }
}
