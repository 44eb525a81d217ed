//! # Error Types
//!
//! Two vocabularies live here. [`ErrorKind`] is the closed set of fault
//! classifications the hub reports upstream as fixed string tokens; the
//! validation pipeline that detects them is outside this crate. [`HubError`]
//! covers the failures of this crate's own operations.

use core::fmt;
use core::str::FromStr;

/// A fault classification reported by the hub.
///
/// Only the string token is meaningful outside the firmware; the
/// discriminant is an in-memory detail and is never put on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ErrorKind {
    /// The packet checksum did not match its contents.
    Checksum,
    /// The packet CRC did not match its contents.
    Crc,
    /// The payload was structurally malformed.
    Payload,
    /// The frame was missing its stop byte or it was wrong.
    StopByte,
    /// The packet came from a serial source the hub does not recognize.
    UnknownSerial,
}

impl ErrorKind {
    /// Every fault kind, in declaration order.
    pub const ALL: [ErrorKind; 5] = [
        ErrorKind::Checksum,
        ErrorKind::Crc,
        ErrorKind::Payload,
        ErrorKind::StopByte,
        ErrorKind::UnknownSerial,
    ];

    /// The status token published for this fault.
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Checksum => "BAD_CHECKSUM",
            ErrorKind::Crc => "CRC_ERROR",
            ErrorKind::Payload => "PAYLOAD_ERROR",
            ErrorKind::StopByte => "STOP_BYTE_ERROR",
            ErrorKind::UnknownSerial => "UNKNOWN_SERIAL_ERROR",
        }
    }

    /// Looks a status token back up. The match is exact and case-sensitive.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == code)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorKind {
    type Err = HubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or(HubError::UnknownErrorCode)
    }
}

impl TryFrom<&str> for ErrorKind {
    type Error = HubError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Errors produced by the hub library itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HubError {
    /// A string did not name any known fault token.
    UnknownErrorCode,
    /// A sensor topic was requested without a suffix.
    EmptySuffix,
    /// A topic contained a wildcard or NUL character.
    InvalidTopicChar(char),
    /// A topic did not fit in its buffer or exceeded the MQTT limit.
    TopicTooLong { len: usize, max: usize },
    /// A payload did not fit in its buffer.
    PayloadTooLarge { len: usize, max: usize },
    /// No room was left to queue a publish request.
    OutboxFull,
    /// A byte did not name an MQTT QoS level.
    InvalidQoS(u8),
}

impl fmt::Display for HubError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HubError::UnknownErrorCode => f.write_str("unknown error code"),
            HubError::EmptySuffix => f.write_str("sensor topic suffix is empty"),
            HubError::InvalidTopicChar(c) => write!(f, "invalid topic character {c:?}"),
            HubError::TopicTooLong { len, max } => {
                write!(f, "topic is {len} bytes, limit is {max}")
            }
            HubError::PayloadTooLarge { len, max } => {
                write!(f, "payload is {len} bytes, limit is {max}")
            }
            HubError::OutboxFull => f.write_str("publish outbox is full"),
            HubError::InvalidQoS(level) => write!(f, "invalid QoS level {level}"),
        }
    }
}

impl core::error::Error for HubError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_distinct() {
        for (i, a) in ErrorKind::ALL.iter().enumerate() {
            for b in ErrorKind::ALL.iter().skip(i + 1) {
                assert_ne!(a.as_str(), b.as_str(), "{a:?} and {b:?} share a token");
            }
        }
    }

    #[test]
    fn reverse_lookup_recovers_every_kind() {
        for kind in ErrorKind::ALL {
            assert_eq!(ErrorKind::from_code(kind.as_str()), Some(kind));
            assert_eq!(kind.as_str().parse::<ErrorKind>(), Ok(kind));
            assert_eq!(ErrorKind::try_from(kind.as_str()), Ok(kind));
        }
    }

    #[test]
    fn reverse_lookup_is_exact() {
        assert_eq!(ErrorKind::from_code("crc_error"), None);
        assert_eq!(ErrorKind::from_code(" CRC_ERROR"), None);
        assert_eq!(ErrorKind::from_code(""), None);
        assert_eq!("CHECKSUM".parse::<ErrorKind>(), Err(HubError::UnknownErrorCode));
    }

    #[test]
    fn display_writes_token() {
        assert_eq!(ErrorKind::StopByte.to_string(), "STOP_BYTE_ERROR");
        assert_eq!(
            HubError::TopicTooLong { len: 130, max: 128 }.to_string(),
            "topic is 130 bytes, limit is 128"
        );
    }
}
