use anyhow::Context;
use async_trait::async_trait;

#[derive(Clone)]
pub struct SnsPublisher {
    pub client: aws_sdk_sns::Client,
}

impl SnsPublisher {
    pub fn new(aws_config: &aws_config::SdkConfig) -> Self {
        Self {
            client: aws_sdk_sns::Client::new(aws_config),
        }
    }
}

#[async_trait]
impl crate::services::TopicPublisher for SnsPublisher {
    async fn publish(
        &self,
        topic_arn: &str,
        message: &str,
        subject: &str,
    ) -> anyhow::Result<String> {
        let rsp = self
            .client
            .publish()
            .topic_arn(topic_arn)
            .message(message)
            .subject(subject)
            .send()
            .await
            .with_context(|| format!("sns publish to {topic_arn} failed"))?;

        rsp.message_id
            .context("sns publish response did not include a message id")
    }
}
