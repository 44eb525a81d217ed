//! Sensor topic composition.
//!
//! Sensed packets are published to `SENSOR_TOPIC_PREFIX` followed by a
//! device or sensor identifier. Topics are built into fixed-capacity
//! `heapless` strings so composing one never allocates.

use heapless::String;

use crate::consts::SENSOR_TOPIC_PREFIX;
use crate::error::HubError;

/// Longest topic name MQTT can encode (2-byte length prefix).
pub const MQTT_MAX_TOPIC_LEN: usize = u16::MAX as usize;

/// Builds `SENSOR_TOPIC_PREFIX + suffix` into a string of capacity `N`.
///
/// The suffix may contain `/` to address a sub-level (`"device42/temp"`),
/// but not the MQTT wildcards `+` and `#`, which are only legal in
/// subscription filters.
///
/// # Example
///
/// ```
/// let topic = sensed_hub::topic::sensor_topic::<32>("device42").unwrap();
/// assert_eq!(topic.as_str(), "sensed/hub/device42");
/// ```
pub fn sensor_topic<const N: usize>(suffix: &str) -> Result<String<N>, HubError> {
    if suffix.is_empty() {
        return Err(HubError::EmptySuffix);
    }
    if let Some(c) = suffix.chars().find(|c| matches!(c, '+' | '#' | '\0')) {
        return Err(HubError::InvalidTopicChar(c));
    }

    let len = SENSOR_TOPIC_PREFIX.len() + suffix.len();
    let max = N.min(MQTT_MAX_TOPIC_LEN);
    if len > max {
        return Err(HubError::TopicTooLong { len, max });
    }

    let mut topic = String::new();
    let overflow = |_| HubError::TopicTooLong { len, max };
    topic.push_str(SENSOR_TOPIC_PREFIX).map_err(overflow)?;
    topic.push_str(suffix).map_err(overflow)?;
    Ok(topic)
}

/// Returns the identifier part of a sensor topic, or `None` when `topic`
/// is not under the sensor prefix or carries no identifier.
pub fn sensor_suffix(topic: &str) -> Option<&str> {
    topic
        .strip_prefix(SENSOR_TOPIC_PREFIX)
        .filter(|suffix| !suffix.is_empty())
}

/// Whether `topic` addresses a sensor.
pub fn is_sensor_topic(topic: &str) -> bool {
    sensor_suffix(topic).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composes_prefix_and_suffix() {
        let topic = sensor_topic::<64>("device42").unwrap();
        assert_eq!(topic.as_str(), "sensed/hub/device42");
        assert_eq!(&topic[..11], SENSOR_TOPIC_PREFIX);
    }

    #[test]
    fn allows_nested_levels() {
        let topic = sensor_topic::<64>("device42/temp").unwrap();
        assert_eq!(topic.as_str(), "sensed/hub/device42/temp");
    }

    #[test]
    fn rejects_empty_suffix() {
        assert_eq!(sensor_topic::<64>(""), Err(HubError::EmptySuffix));
    }

    #[test]
    fn rejects_wildcards() {
        assert_eq!(sensor_topic::<64>("+"), Err(HubError::InvalidTopicChar('+')));
        assert_eq!(
            sensor_topic::<64>("dev/#"),
            Err(HubError::InvalidTopicChar('#'))
        );
        assert_eq!(
            sensor_topic::<64>("dev\0"),
            Err(HubError::InvalidTopicChar('\0'))
        );
    }

    #[test]
    fn rejects_topic_over_capacity() {
        // 11 bytes of prefix + 6 bytes of suffix
        assert_eq!(
            sensor_topic::<16>("sensor"),
            Err(HubError::TopicTooLong { len: 17, max: 16 })
        );
        assert!(sensor_topic::<17>("sensor").is_ok());
    }

    #[test]
    fn splits_suffix_back_out() {
        assert_eq!(sensor_suffix("sensed/hub/device42"), Some("device42"));
        assert_eq!(sensor_suffix("sensed/hub/"), None);
        assert_eq!(sensor_suffix("hub/status"), None);
        assert!(is_sensor_topic("sensed/hub/a"));
        assert!(!is_sensor_topic("sensed/hubx"));
    }
}
