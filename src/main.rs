use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;

mod config;
mod consts;
mod errors;
mod handler;
mod services;

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_runtime::tracing::init_default_subscriber();

    let app_config = config::AppConfig::load()?;

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let publisher = services::sns::SnsPublisher::new(&aws_config);

    let notifier = handler::Notifier::new(&app_config, Box::new(publisher));
    let notifier = &notifier;

    run(service_fn(move |event: LambdaEvent<Value>| async move {
        handler::function_handler(notifier, event).await
    }))
    .await
}
