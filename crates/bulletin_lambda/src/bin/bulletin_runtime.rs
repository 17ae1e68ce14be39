use aws_sdk_sqs::types::{MessageAttributeValue, QueueAttributeName};
use bulletin_lambda::adapters::delivery::MessagePublisher;
use bulletin_lambda::adapters::provision::QueueProvisioner;
use bulletin_lambda::handlers::publish::handle_publish_event;
use bulletin_lambda::runtime::contract::{
    weekly_bestseller_bulletin, BulletinMessage, InvocationInput, QueueSettings,
};
use lambda_runtime::{service_fn, Error, LambdaEvent};

struct SqsQueueGateway {
    sqs_client: aws_sdk_sqs::Client,
}

impl QueueProvisioner for SqsQueueGateway {
    fn ensure_queue(&self, settings: &QueueSettings) -> Result<String, String> {
        let queue_name = settings.queue_name.clone();
        let delivery_delay = settings.delivery_delay_seconds.to_string();
        let retention_period = settings.retention_period_seconds.to_string();
        let client = self.sqs_client.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                let response = client
                    .create_queue()
                    .queue_name(queue_name)
                    .attributes(QueueAttributeName::DelaySeconds, delivery_delay)
                    .attributes(QueueAttributeName::MessageRetentionPeriod, retention_period)
                    .send()
                    .await
                    .map_err(|error| format!("failed to create queue: {error}"))?;

                response
                    .queue_url()
                    .map(|queue_url| queue_url.to_string())
                    .ok_or_else(|| "create queue response is missing a queue url".to_string())
            })
        })
    }
}

impl MessagePublisher for SqsQueueGateway {
    fn publish(&self, queue_url: &str, message: &BulletinMessage) -> Result<String, String> {
        let target_queue_url = queue_url.to_string();
        let message = message.clone();
        let client = self.sqs_client.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                let mut request = client
                    .send_message()
                    .queue_url(target_queue_url)
                    .message_body(message.body.clone())
                    .delay_seconds(message.publish_delay_seconds);

                for (name, value) in &message.attributes {
                    let attribute = MessageAttributeValue::builder()
                        .data_type(value.data_type())
                        .string_value(value.string_value())
                        .build()
                        .map_err(|error| {
                            format!("failed to build message attribute '{name}': {error}")
                        })?;
                    request = request.message_attributes(name.as_str(), attribute);
                }

                let response = request
                    .send()
                    .await
                    .map_err(|error| format!("failed to send message: {error}"))?;

                response
                    .message_id()
                    .map(|message_id| message_id.to_string())
                    .ok_or_else(|| "send message response is missing a message id".to_string())
            })
        })
    }
}

fn resolve_queue_settings(queue_name_override: Option<String>) -> QueueSettings {
    let mut settings = QueueSettings::default();
    if let Some(queue_name) = queue_name_override {
        let trimmed = queue_name.trim();
        if !trimmed.is_empty() {
            settings.queue_name = trimmed.to_string();
        }
    }
    settings
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let gateway = SqsQueueGateway {
        sqs_client: aws_sdk_sqs::Client::new(&aws_config),
    };
    let settings = resolve_queue_settings(std::env::var("BULLETIN_QUEUE_NAME").ok());
    let bulletin = weekly_bestseller_bulletin();

    let gateway = &gateway;
    let settings = &settings;
    let bulletin = &bulletin;
    lambda_runtime::run(service_fn(
        move |event: LambdaEvent<InvocationInput>| async move {
            handle_publish_event(&event.payload, settings, bulletin, gateway, gateway)
                .map_err(Error::from)
        },
    ))
    .await
}
