//! # Hub Constants
//!
//! Firmware-wide identifiers shared by every part of the hub: the version
//! tag, the prefix for sensor topics and the vocabulary of fault tokens.
//! Everything here is `'static` and immutable, so it can be read from any
//! task without synchronization.

use crate::error::ErrorKind;

/// Firmware revision reported by the hub.
pub const VERSION: &str = "2.0";

/// Prefix of every topic the hub publishes sensed packets to.
///
/// Ends with `/` so a device or sensor identifier can be appended directly.
pub const SENSOR_TOPIC_PREFIX: &str = "sensed/hub/";

/// Returns the firmware version tag.
pub const fn version() -> &'static str {
    VERSION
}

/// Returns the sensor topic prefix.
///
/// Callers append a device-specific suffix, see [`crate::topic::sensor_topic`].
pub const fn sensor_topic_prefix() -> &'static str {
    SENSOR_TOPIC_PREFIX
}

/// Returns the status token reported for `kind`.
pub const fn error_code(kind: ErrorKind) -> &'static str {
    kind.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_pinned() {
        assert_eq!(version(), "2.0");
        assert_eq!(version(), version());
    }

    #[test]
    fn prefix_is_terminated_for_concatenation() {
        let prefix = sensor_topic_prefix();
        assert!(!prefix.is_empty());
        assert!(prefix.ends_with('/'));
        assert_eq!(prefix.len(), 11);
    }

    #[test]
    fn error_codes_match_firmware_tokens() {
        assert_eq!(error_code(ErrorKind::Checksum), "BAD_CHECKSUM");
        assert_eq!(error_code(ErrorKind::Crc), "CRC_ERROR");
        assert_eq!(error_code(ErrorKind::Payload), "PAYLOAD_ERROR");
        assert_eq!(error_code(ErrorKind::StopByte), "STOP_BYTE_ERROR");
        assert_eq!(error_code(ErrorKind::UnknownSerial), "UNKNOWN_SERIAL_ERROR");
    }

    #[test]
    fn usable_in_const_context() {
        const CODE: &str = error_code(ErrorKind::Crc);
        const PREFIX: &str = sensor_topic_prefix();
        assert_eq!(CODE, "CRC_ERROR");
        assert_eq!(PREFIX, SENSOR_TOPIC_PREFIX);
    }
}
