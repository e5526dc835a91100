pub mod sns;

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait TopicPublisher {
    /// Publishes `message` to `topic_arn` and returns the id assigned by the broker.
    async fn publish(&self, topic_arn: &str, message: &str, subject: &str)
        -> anyhow::Result<String>;
}

pub type ImplTopicPublisher = Box<dyn TopicPublisher + Send + Sync>;
