/// Body published to the topic on every invocation.
pub const NOTIFICATION_MESSAGE: &str = "A new file was uploaded or API was called!";
pub const NOTIFICATION_SUBJECT: &str = "Notification from your system";

pub const SUCCESS_STATUS_CODE: u16 = 200;
pub const SUCCESS_BODY: &str = "Notification sent successfully";

pub const SNS_TOPIC_ARN_VAR: &str = "SNS_TOPIC_ARN";
