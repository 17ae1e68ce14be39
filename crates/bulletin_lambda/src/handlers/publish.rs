use serde_json::json;

use crate::adapters::delivery::MessagePublisher;
use crate::adapters::provision::QueueProvisioner;
use crate::runtime::contract::{
    confirmation_message, publication_fingerprint, BulletinMessage, InvocationInput, QueueSettings,
    ValidationError,
};
use crate::runtime::limits::{validate_bulletin, validate_queue_settings};

/// Runs one publication: ensure the bulletin queue exists, publish the
/// bulletin to the address the service reports, and return the confirmation
/// line. The invocation input is part of the wire contract but carries no
/// meaning here; failures from either port propagate to the caller unchanged.
pub fn handle_publish_event(
    _input: &InvocationInput,
    settings: &QueueSettings,
    bulletin: &BulletinMessage,
    provisioner: &impl QueueProvisioner,
    publisher: &impl MessagePublisher,
) -> Result<String, String> {
    log_publish_info(
        "publish_started",
        json!({
            "queue_name": settings.queue_name.clone(),
            "publication_fingerprint": publication_fingerprint(bulletin),
        }),
    );

    validate_queue_settings(settings).map_err(validation_failure)?;
    validate_bulletin(bulletin).map_err(validation_failure)?;

    let queue_url = match provisioner.ensure_queue(settings) {
        Ok(queue_url) => queue_url,
        Err(error) => {
            log_publish_error(
                "queue_provision_failed",
                json!({
                    "queue_name": settings.queue_name.clone(),
                    "error": error.clone(),
                }),
            );
            return Err(error);
        }
    };

    log_publish_info(
        "queue_ensured",
        json!({
            "queue_name": settings.queue_name.clone(),
            "queue_url": queue_url.clone(),
        }),
    );

    let message_id = match publisher.publish(&queue_url, bulletin) {
        Ok(message_id) => message_id,
        Err(error) => {
            log_publish_error(
                "bulletin_publish_failed",
                json!({
                    "queue_url": queue_url.clone(),
                    "error": error.clone(),
                }),
            );
            return Err(error);
        }
    };

    log_publish_info(
        "bulletin_published",
        json!({
            "queue_url": queue_url.clone(),
            "message_id": message_id.clone(),
        }),
    );

    Ok(confirmation_message(&message_id))
}

fn validation_failure(error: ValidationError) -> String {
    let message = error.message().to_string();
    log_publish_error(
        "validation_failed",
        json!({
            "error": message.clone(),
        }),
    );
    message
}

fn log_publish_info(event: &str, details: serde_json::Value) {
    eprintln!(
        "{}",
        json!({
            "component": "publish_handler",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}

fn log_publish_error(event: &str, details: serde_json::Value) {
    eprintln!(
        "{}",
        json!({
            "component": "publish_handler",
            "level": "error",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}
