use lambda_runtime::{Error, LambdaEvent};
use serde::Serialize;
use serde_json::Value;

use crate::{config::AppConfig, consts, errors::NotifierError, services::ImplTopicPublisher};

#[derive(Serialize, Debug, PartialEq)]
pub struct NotificationResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl NotificationResponse {
    pub fn success() -> Self {
        Self {
            status_code: consts::SUCCESS_STATUS_CODE,
            body: consts::SUCCESS_BODY.into(),
        }
    }
}

pub struct Notifier {
    topic_arn: String,
    publisher: ImplTopicPublisher,
}

impl Notifier {
    pub fn new(config: &AppConfig, publisher: ImplTopicPublisher) -> Self {
        Self {
            topic_arn: config.sns_topic_arn.clone(),
            publisher,
        }
    }

    /// Publishes the fixed notification once. Failures are returned as-is, never retried.
    pub async fn notify(&self) -> Result<NotificationResponse, NotifierError> {
        let message_id = self
            .publisher
            .publish(
                &self.topic_arn,
                consts::NOTIFICATION_MESSAGE,
                consts::NOTIFICATION_SUBJECT,
            )
            .await
            .map_err(|err| NotifierError::PublishFailed(format!("{err:#}")))?;

        tracing::info!(%message_id, "Message sent to SNS");

        Ok(NotificationResponse::success())
    }
}

#[tracing::instrument(skip(notifier, event), fields(req_id = %event.context.request_id))]
pub async fn function_handler(
    notifier: &Notifier,
    event: LambdaEvent<Value>,
) -> Result<NotificationResponse, Error> {
    notifier.notify().await.map_err(|err| {
        tracing::error!(topic_arn = %notifier.topic_arn, "{err}");
        Error::from(err)
    })
}
