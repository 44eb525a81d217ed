//! Hub configuration.
//!
//! Firmware usually fixes these at compile time, so every default is a
//! `const` and [`HubConfig`] can be built in a `const` or `static` item.

use embassy_time::Duration;

use crate::QoS;

/// Topic fault tokens are published to.
pub const DEFAULT_STATUS_TOPIC: &str = "hub/status";
/// Topic the firmware version is announced on.
pub const DEFAULT_VERSION_TOPIC: &str = "hub/version";
/// Topic the hub listens on for commands.
pub const DEFAULT_COMMAND_TOPIC: &str = "hub/cmd";
/// Interval between status ticks when nothing is pending.
pub const DEFAULT_HEARTBEAT: Duration = Duration::from_secs(60);

/// Runtime options for the hub's status reporting.
///
/// ```
/// use embassy_time::Duration;
/// use sensed_hub::{HubConfig, QoS};
///
/// const CONFIG: HubConfig = HubConfig::new()
///     .with_status_topic("plant/hub/status")
///     .with_qos(QoS::AtLeastOnce)
///     .with_heartbeat(Duration::from_secs(10));
///
/// assert_eq!(CONFIG.status_topic, "plant/hub/status");
/// assert_eq!(CONFIG.version_topic, "hub/version");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HubConfig {
    /// Topic fault tokens are published to.
    pub status_topic: &'static str,
    /// Topic the version is announced on.
    pub version_topic: &'static str,
    /// Topic carrying commands such as `VERSION`.
    pub command_topic: &'static str,
    /// QoS used for every status publish.
    pub qos: QoS,
    /// Tick interval returned when nothing is pending.
    pub heartbeat: Duration,
}

impl HubConfig {
    /// Create a configuration with the default topics and timing.
    pub const fn new() -> Self {
        Self {
            status_topic: DEFAULT_STATUS_TOPIC,
            version_topic: DEFAULT_VERSION_TOPIC,
            command_topic: DEFAULT_COMMAND_TOPIC,
            qos: QoS::AtMostOnce,
            heartbeat: DEFAULT_HEARTBEAT,
        }
    }

    /// Set the topic fault tokens are published to.
    pub const fn with_status_topic(mut self, topic: &'static str) -> Self {
        self.status_topic = topic;
        self
    }

    /// Set the topic the version is announced on.
    pub const fn with_version_topic(mut self, topic: &'static str) -> Self {
        self.version_topic = topic;
        self
    }

    /// Set the topic the hub listens on for commands.
    pub const fn with_command_topic(mut self, topic: &'static str) -> Self {
        self.command_topic = topic;
        self
    }

    /// Set the QoS for status publishes.
    pub const fn with_qos(mut self, qos: QoS) -> Self {
        self.qos = qos;
        self
    }

    /// Set the idle tick interval.
    pub const fn with_heartbeat(mut self, heartbeat: Duration) -> Self {
        self.heartbeat = heartbeat;
        self
    }
}

impl Default for HubConfig {
    fn default() -> Self {
        Self::new()
    }
}
