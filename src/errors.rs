use derive_more::{Display, Error};

#[derive(Debug, Display, Error, PartialEq)]
pub enum NotifierError {
    #[display("missing required setting: {_0}")]
    MissingSetting(#[error(not(source))] String),
    #[display("failed to publish notification: {_0}")]
    PublishFailed(#[error(not(source))] String),
}
