//! Topic registration for hub modules.

use heapless::{String, Vec};

use super::traits::TopicCollector;

/// Maximum length for a single topic string.
pub const MAX_TOPIC_LEN: usize = 128;

/// A registry for topics that modules want to subscribe to.
///
/// The registry owns copies of the topic strings, so it works behind the
/// object-safe `TopicCollector` trait.
///
/// ```ignore
/// let mut registry = TopicRegistry::<8>::new();
/// module.register(&mut registry);
///
/// for topic in registry.iter() {
///     client.subscribe(topic, QoS::AtMostOnce).await?;
/// }
/// ```
#[derive(Default)]
pub struct TopicRegistry<const MAX_TOPICS: usize> {
    topics: Vec<String<MAX_TOPIC_LEN>, MAX_TOPICS>,
}

impl<const MAX_TOPICS: usize> TopicRegistry<MAX_TOPICS> {
    /// Create a new empty topic registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a topic to the registry by copying the string.
    ///
    /// A topic already present is not stored twice and counts as added.
    /// Returns `false` if the registry is full or the topic is too long.
    pub fn add_topic(&mut self, topic: &str) -> bool {
        if self.contains(topic) {
            return true;
        }

        let mut owned = String::new();
        if owned.push_str(topic).is_err() {
            warn!("topic too long to register ({} bytes)", topic.len());
            return false;
        }

        if self.topics.push(owned).is_err() {
            warn!("topic registry full, dropping {}", topic);
            return false;
        }
        true
    }

    /// Check if a topic is already registered.
    pub fn contains(&self, topic: &str) -> bool {
        self.iter().any(|t| t == topic)
    }

    /// Get an iterator over the registered topics.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.topics.iter().map(|s| s.as_str())
    }

    /// Get the number of registered topics.
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Clear all registered topics.
    pub fn clear(&mut self) {
        self.topics.clear();
    }
}

impl<const MAX_TOPICS: usize> TopicCollector for TopicRegistry<MAX_TOPICS> {
    fn add(&mut self, topic: &str) -> bool {
        self.add_topic(topic)
    }
}
