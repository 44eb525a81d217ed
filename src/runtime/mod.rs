//! Hub Runtime Surfaces
//!
//! Building blocks for composing the hub out of independent modules:
//! - Topic registration for subscriptions
//! - Incoming message handling
//! - Periodic tasks (status publishing, heartbeats)
//!
//! # Publishing Pattern
//!
//! Modules never perform async I/O directly. Instead, they use the
//! `PublishOutbox` trait to queue publish requests. The driver flushes a
//! `BufferedOutbox` through a `PublisherHandle` after the module returns.

pub(crate) mod publisher;
pub(crate) mod registry;
pub(crate) mod traits;

pub use publisher::{
    BufferedOutbox, PublishRequest, PublishRequestChannel, PublisherHandle, SensorPublisher,
};
pub use registry::{MAX_TOPIC_LEN, TopicRegistry};
pub use traits::{HubModule, Message, ModulePair, NoopModule, PublishOutbox, TopicCollector};
