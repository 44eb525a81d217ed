//! Hub module traits.
//!
//! This module defines the object-safe `HubModule` trait that the hub's
//! concerns (status reporting, sensor relays, diagnostics) implement.
//!
//! # Object Safety
//!
//! `HubModule` is dyn-compatible, so modules can live in a `StaticCell` and
//! be handed to an Embassy task as `&mut dyn HubModule` without generic
//! parameters on the task function.
//!
//! # Publishing Pattern
//!
//! Modules never perform async I/O directly. They queue publishes through
//! the `PublishOutbox` trait and whoever drives the module flushes them.

use embassy_time::Duration;

use crate::QoS;
use crate::config::DEFAULT_HEARTBEAT;
use crate::error::HubError;

/// An inbound message as seen by a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Message<'a> {
    pub topic: &'a str,
    pub payload: &'a [u8],
}

impl<'a> Message<'a> {
    /// Create a message view over a received topic and payload.
    pub fn new(topic: &'a str, payload: &'a [u8]) -> Self {
        Self { topic, payload }
    }
}

/// Object-safe trait for queuing publish requests.
///
/// ```ignore
/// fn on_tick(&mut self, outbox: &mut dyn PublishOutbox) -> Duration {
///     let _ = outbox.publish("hub/status", b"BAD_CHECKSUM", QoS::AtMostOnce);
///     Duration::from_secs(30)
/// }
/// ```
pub trait PublishOutbox {
    /// Queue a message for publishing.
    ///
    /// This is synchronous and returns immediately. Fails when the request
    /// does not fit in the outbox.
    fn publish(&mut self, topic: &str, payload: &[u8], qos: QoS) -> Result<(), HubError>;
}

/// Object-safe trait for collecting topics during registration.
pub trait TopicCollector {
    /// Add a topic to subscribe to.
    ///
    /// The topic string is copied internally, so it only needs to live
    /// for the duration of this call.
    ///
    /// Returns `true` if the topic was added, `false` if the collector is full.
    fn add(&mut self, topic: &str) -> bool;
}

/// Object-safe trait for hub modules that handle incoming messages and
/// periodic tasks.
pub trait HubModule {
    /// Register topics that this module wants to subscribe to.
    fn register(&self, collector: &mut dyn TopicCollector);

    /// Handle an incoming message.
    ///
    /// The message borrows the receive buffer, so a module cannot answer from
    /// here. It records what it needs and publishes from `on_tick`, which the
    /// driver calls right away when `needs_immediate_publish` returns `true`.
    fn on_message(&mut self, msg: &Message<'_>);

    /// Perform periodic tasks and return the interval until the next tick.
    fn on_tick(&mut self, _outbox: &mut dyn PublishOutbox) -> Duration {
        DEFAULT_HEARTBEAT
    }

    /// Called once after the connection is up and subscriptions are done.
    fn on_start(&mut self, _outbox: &mut dyn PublishOutbox) {}

    fn needs_immediate_publish(&self) -> bool {
        false
    }
}

/// A module that does nothing.
pub struct NoopModule;

impl HubModule for NoopModule {
    fn register(&self, _collector: &mut dyn TopicCollector) {}

    fn on_message(&mut self, _msg: &Message<'_>) {}
}

/// Two modules driven as one.
///
/// Both modules receive all messages and ticks.
///
/// ```ignore
/// let status = StatusModule::<4>::new(HubConfig::new());
/// let relay = RelayModule::new();
/// let combined = ModulePair::new(status, relay);
/// ```
pub struct ModulePair<M1, M2> {
    pub first: M1,
    pub second: M2,
}

impl<M1, M2> ModulePair<M1, M2> {
    /// Create a new combined module from two modules.
    pub fn new(first: M1, second: M2) -> Self {
        Self { first, second }
    }
}

impl<M1, M2> HubModule for ModulePair<M1, M2>
where
    M1: HubModule,
    M2: HubModule,
{
    fn register(&self, collector: &mut dyn TopicCollector) {
        self.first.register(collector);
        self.second.register(collector);
    }

    fn on_message(&mut self, msg: &Message<'_>) {
        self.first.on_message(msg);
        self.second.on_message(msg);
    }

    fn on_tick(&mut self, outbox: &mut dyn PublishOutbox) -> Duration {
        let d1 = self.first.on_tick(outbox);
        let d2 = self.second.on_tick(outbox);
        // Return the smaller interval so both modules get ticked appropriately
        d1.min(d2)
    }

    fn on_start(&mut self, outbox: &mut dyn PublishOutbox) {
        self.first.on_start(outbox);
        self.second.on_start(outbox);
    }

    fn needs_immediate_publish(&self) -> bool {
        self.first.needs_immediate_publish() || self.second.needs_immediate_publish()
    }
}

impl<M: HubModule + ?Sized> HubModule for &mut M {
    fn register(&self, collector: &mut dyn TopicCollector) {
        (**self).register(collector)
    }

    fn on_message(&mut self, msg: &Message<'_>) {
        (**self).on_message(msg)
    }

    fn on_tick(&mut self, outbox: &mut dyn PublishOutbox) -> Duration {
        (**self).on_tick(outbox)
    }

    fn on_start(&mut self, outbox: &mut dyn PublishOutbox) {
        (**self).on_start(outbox)
    }

    fn needs_immediate_publish(&self) -> bool {
        (**self).needs_immediate_publish()
    }
}
