//! Status reporting.
//!
//! [`StatusModule`] is how the rest of the firmware surfaces the hub's
//! identity and faults upstream. It announces [`version()`] when the
//! connection comes up, answers `VERSION` requests on the command topic,
//! and relays each reported [`ErrorKind`] to the status topic as its fixed
//! token (`BAD_CHECKSUM`, `CRC_ERROR`, ...).
//!
//! ```
//! use sensed_hub::runtime::{BufferedOutbox, HubModule};
//! use sensed_hub::{ErrorKind, HubConfig, StatusModule};
//!
//! let mut status = StatusModule::<4>::new(HubConfig::new());
//! let mut outbox = BufferedOutbox::<4, 32, 32>::new();
//!
//! status.report(ErrorKind::Crc);
//! status.on_tick(&mut outbox);
//!
//! let req = outbox.drain().next().unwrap();
//! assert_eq!(req.topic.as_str(), "hub/status");
//! assert_eq!(req.payload.as_slice(), b"CRC_ERROR");
//! ```

use embassy_time::Duration;
use heapless::Deque;

use crate::config::HubConfig;
use crate::consts::version;
use crate::error::{ErrorKind, HubError};
use crate::runtime::{HubModule, Message, PublishOutbox, TopicCollector};

/// Command payload asking the hub to announce its version again.
pub const VERSION_REQUEST: &[u8] = b"VERSION";

/// Queues fault reports and version announcements for publishing.
///
/// Holds at most `PENDING` unpublished faults. When full, the oldest is
/// discarded and counted in [`StatusModule::dropped`]. Only
/// [`HubError::OutboxFull`] is retried on the next tick; a fault or
/// announce that can never fit the outbox is discarded.
pub struct StatusModule<const PENDING: usize> {
    config: HubConfig,
    pending: Deque<ErrorKind, PENDING>,
    version_requested: bool,
    dropped: u32,
    coalesced: u32,
}

impl<const PENDING: usize> StatusModule<PENDING> {
    /// Create a status module with an empty fault queue.
    pub fn new(config: HubConfig) -> Self {
        Self {
            config,
            pending: Deque::new(),
            version_requested: false,
            dropped: 0,
            coalesced: 0,
        }
    }

    /// Get the configuration this module publishes with.
    pub fn config(&self) -> &HubConfig {
        &self.config
    }

    /// Records a fault to be published on the next tick.
    ///
    /// A fault identical to the most recent unpublished one is merged into
    /// it and counted in [`StatusModule::coalesced`].
    pub fn report(&mut self, kind: ErrorKind) {
        if self.pending.back() == Some(&kind) {
            self.coalesced = self.coalesced.saturating_add(1);
            return;
        }
        if self.pending.is_full() {
            if let Some(oldest) = self.pending.pop_front() {
                warn!("status queue full, dropping {}", oldest);
            }
            self.dropped = self.dropped.saturating_add(1);
        }
        // Cannot fail: a slot was freed above if the queue was full.
        let _ = self.pending.push_back(kind);
        debug!("fault reported: {}", kind);
    }

    /// Faults waiting to be published, oldest first.
    pub fn pending(&self) -> impl Iterator<Item = ErrorKind> + '_ {
        self.pending.iter().copied()
    }

    /// Number of faults discarded, either because the queue was full or
    /// because the outbox could never hold them.
    pub fn dropped(&self) -> u32 {
        self.dropped
    }

    /// Number of repeated faults merged into the one queued before them.
    pub fn coalesced(&self) -> u32 {
        self.coalesced
    }

    /// Asks for the version to be announced on the next tick.
    pub fn request_version(&mut self) {
        self.version_requested = true;
    }

    fn publish_version(&mut self, outbox: &mut dyn PublishOutbox) {
        match outbox.publish(
            self.config.version_topic,
            version().as_bytes(),
            self.config.qos,
        ) {
            Ok(()) => self.version_requested = false,
            Err(HubError::OutboxFull) => {
                warn!("outbox full, version announce deferred");
                self.version_requested = true;
            }
            Err(e) => {
                warn!("version announce discarded: {}", e);
                self.version_requested = false;
            }
        }
    }

    fn publish_faults(&mut self, outbox: &mut dyn PublishOutbox) {
        while let Some(&kind) = self.pending.front() {
            match outbox.publish(
                self.config.status_topic,
                kind.as_str().as_bytes(),
                self.config.qos,
            ) {
                Ok(()) => {}
                Err(HubError::OutboxFull) => {
                    // Leave the rest queued for the next tick.
                    warn!("outbox full, fault publish deferred");
                    break;
                }
                Err(e) => {
                    warn!("fault {} discarded: {}", kind, e);
                    self.dropped = self.dropped.saturating_add(1);
                }
            }
            self.pending.pop_front();
        }
    }
}

impl<const PENDING: usize> HubModule for StatusModule<PENDING> {
    fn register(&self, collector: &mut dyn TopicCollector) {
        if !collector.add(self.config.command_topic) {
            warn!("could not register {}", self.config.command_topic);
        }
    }

    fn on_message(&mut self, msg: &Message<'_>) {
        if msg.topic == self.config.command_topic && msg.payload.trim_ascii() == VERSION_REQUEST {
            self.request_version();
        }
    }

    fn on_tick(&mut self, outbox: &mut dyn PublishOutbox) -> Duration {
        self.publish_faults(outbox);
        if self.version_requested {
            self.publish_version(outbox);
        }
        self.config.heartbeat
    }

    fn on_start(&mut self, outbox: &mut dyn PublishOutbox) {
        self.publish_version(outbox);
    }

    fn needs_immediate_publish(&self) -> bool {
        self.version_requested || !self.pending.is_empty()
    }
}
