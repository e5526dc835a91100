//! Function configuration read from the Lambda environment.
//!
//! The topic is resolved once at cold start and handed to the handler
//! explicitly, so nothing downstream reads the process environment.

use envconfig::Envconfig;
use std::collections::HashMap;

use crate::{consts, errors::NotifierError};

#[derive(Envconfig, Clone, Debug)]
pub struct AppConfig {
    /// Destination topic, e.g. "arn:aws:sns:us-east-1:123456789012:my-topic"
    /// Key must stay equal to `consts::SNS_TOPIC_ARN_VAR`.
    #[envconfig(from = "SNS_TOPIC_ARN")]
    pub sns_topic_arn: String,
}

impl AppConfig {
    /// Loads and validates the configuration from the process environment.
    pub fn load() -> Result<Self, NotifierError> {
        Self::init_from_env()
            .map_err(|_| Self::missing_topic())?
            .validated()
    }

    /// Same as [`AppConfig::load`] but from an explicit set of variables.
    pub fn from_map(vars: &HashMap<String, String>) -> Result<Self, NotifierError> {
        Self::init_from_hashmap(vars)
            .map_err(|_| Self::missing_topic())?
            .validated()
    }

    fn validated(self) -> Result<Self, NotifierError> {
        let sns_topic_arn = self.sns_topic_arn.trim();
        if sns_topic_arn.is_empty() {
            return Err(Self::missing_topic());
        }

        Ok(Self {
            sns_topic_arn: sns_topic_arn.to_string(),
        })
    }

    fn missing_topic() -> NotifierError {
        NotifierError::MissingSetting(consts::SNS_TOPIC_ARN_VAR.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_from_map_reads_topic_arn() {
        let config = AppConfig::from_map(&vars(&[(
            consts::SNS_TOPIC_ARN_VAR,
            "arn:aws:sns:us-east-1:123456789012:my-topic",
        )]))
        .unwrap();

        assert_eq!(
            config.sns_topic_arn,
            "arn:aws:sns:us-east-1:123456789012:my-topic"
        );
    }

    #[test]
    fn test_from_map_missing_topic_arn() {
        let result = AppConfig::from_map(&vars(&[("AWS_REGION", "us-east-1")]));

        assert_eq!(
            result.unwrap_err(),
            NotifierError::MissingSetting(consts::SNS_TOPIC_ARN_VAR.into())
        );
    }

    #[test]
    fn test_from_map_blank_topic_arn() {
        for value in ["", "   "] {
            let result = AppConfig::from_map(&vars(&[(consts::SNS_TOPIC_ARN_VAR, value)]));

            assert!(matches!(result, Err(NotifierError::MissingSetting(_))));
        }
    }

    #[test]
    fn test_from_map_trims_topic_arn() {
        let config =
            AppConfig::from_map(&vars(&[(consts::SNS_TOPIC_ARN_VAR, " arn:aws:sns:eu-west-1:1:t \n")]))
                .unwrap();

        assert_eq!(config.sns_topic_arn, "arn:aws:sns:eu-west-1:1:t");
    }

    #[test]
    fn test_envconfig_key_matches_topic_var_name() {
        assert_eq!(consts::SNS_TOPIC_ARN_VAR, "SNS_TOPIC_ARN");

        let config =
            AppConfig::from_map(&vars(&[("SNS_TOPIC_ARN", "arn:aws:sns:us-east-1:1:t")])).unwrap();
        assert_eq!(config.sns_topic_arn, "arn:aws:sns:us-east-1:1:t");
    }
}
