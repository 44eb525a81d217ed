//! # Sensed Hub
//!
//! `sensed-hub` is a `no_std` library for the firmware of an IoT hub that
//! relays "sensed" sensor packets to an MQTT broker. It holds the hub's
//! shared vocabulary and the thin surfaces built around it.
//!
//! ## Core Features
//!
//! - **Constant namespace:** the firmware [`VERSION`], the
//!   [`SENSOR_TOPIC_PREFIX`] and the five fault tokens of [`ErrorKind`],
//!   all `'static` and usable in `const` contexts.
//! - **`no_std` & `no_alloc`:** topics, payloads and queues live in
//!   `heapless` containers sized by const generics.
//! - **Module runtime:** an object-safe [`runtime::HubModule`] trait with
//!   outbox-based publishing, so modules never perform I/O themselves.
//! - **Status reporting:** [`StatusModule`] announces the version and
//!   relays reported faults to a status topic.
//!
//! ## Example
//!
//! ```
//! use sensed_hub::{ErrorKind, error_code, sensor_topic_prefix, version};
//!
//! assert_eq!(version(), "2.0");
//! assert_eq!(error_code(ErrorKind::Checksum), "BAD_CHECKSUM");
//!
//! let topic = sensed_hub::topic::sensor_topic::<32>("device42").unwrap();
//! assert!(topic.starts_with(sensor_topic_prefix()));
//! ```
//!
//! ## Logging
//!
//! Enable one of the `defmt`, `log` or `esp32-log` features to get the
//! crate's diagnostics; without them logging compiles away.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod config;
pub mod consts;
pub mod error;
pub mod qos;
pub mod runtime;
pub mod status;
pub mod topic;

// Re-export key types for easier access at the crate root.
pub use config::HubConfig;
pub use consts::{SENSOR_TOPIC_PREFIX, VERSION, error_code, sensor_topic_prefix, version};
pub use error::{ErrorKind, HubError};
pub use qos::QoS;
pub use status::StatusModule;
