//! Hub constant namespace properties.

use std::collections::HashSet;

use sensed_hub::topic::sensor_topic;
use sensed_hub::{ErrorKind, SENSOR_TOPIC_PREFIX, error_code, sensor_topic_prefix, version};

#[test]
fn version_is_two_point_zero() {
    assert_eq!(version(), "2.0");
    assert_eq!(sensed_hub::VERSION, version());
}

#[test]
fn checksum_and_crc_tokens() {
    assert_eq!(error_code(ErrorKind::Checksum), "BAD_CHECKSUM");
    assert_eq!(error_code(ErrorKind::Crc), "CRC_ERROR");
}

#[test]
fn prefix_concatenation() {
    let topic = format!("{}{}", sensor_topic_prefix(), "device42");
    assert_eq!(topic, "sensed/hub/device42");
    assert_eq!(&topic[..11], SENSOR_TOPIC_PREFIX);

    let composed = sensor_topic::<64>("device42").unwrap();
    assert_eq!(composed.as_str(), topic);
}

#[test]
fn every_suffix_keeps_the_prefix() {
    for suffix in ["a", "node-7", "garage/door", "0123456789"] {
        let topic = sensor_topic::<64>(suffix).unwrap();
        assert_eq!(&topic[..11], "sensed/hub/");
        assert_eq!(sensed_hub::topic::sensor_suffix(&topic), Some(suffix));
    }
}

#[test]
fn five_distinct_tokens() {
    let tokens: HashSet<&str> = ErrorKind::ALL.into_iter().map(error_code).collect();
    assert_eq!(tokens.len(), 5);
}

#[test]
fn token_round_trip() {
    for kind in ErrorKind::ALL {
        let token = error_code(kind);
        assert_eq!(token.parse::<ErrorKind>().unwrap(), kind);
        assert_eq!(kind.to_string(), token);
    }
    assert!("STOP_BYTE".parse::<ErrorKind>().is_err());
}

#[test]
fn constants_are_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| (version(), error_code(ErrorKind::Payload))))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), ("2.0", "PAYLOAD_ERROR"));
    }
}
