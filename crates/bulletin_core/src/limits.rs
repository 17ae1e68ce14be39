use crate::contract::{BulletinMessage, QueueSettings, ValidationError};

pub const MAX_QUEUE_NAME_LENGTH: usize = 80;
pub const MIN_DELAY_SECONDS: i32 = 0;
pub const MAX_DELAY_SECONDS: i32 = 900;
pub const MIN_RETENTION_PERIOD_SECONDS: i32 = 60;
pub const MAX_RETENTION_PERIOD_SECONDS: i32 = 1_209_600;
pub const MAX_MESSAGE_BODY_BYTES: usize = 262_144;
pub const MAX_MESSAGE_ATTRIBUTES: usize = 10;

/// Checks queue settings against the queueing service's documented bounds so
/// a misconfigured deployment fails before any remote call is made.
pub fn validate_queue_settings(settings: &QueueSettings) -> Result<(), ValidationError> {
    if settings.queue_name.is_empty() {
        return Err(ValidationError::new("queue name cannot be empty"));
    }
    if settings.queue_name.len() > MAX_QUEUE_NAME_LENGTH {
        return Err(ValidationError::new(format!(
            "queue name exceeds MAX_QUEUE_NAME_LENGTH={MAX_QUEUE_NAME_LENGTH}"
        )));
    }
    if let Some(invalid) = settings
        .queue_name
        .chars()
        .find(|ch| !is_queue_name_char(*ch))
    {
        return Err(ValidationError::new(format!(
            "queue name contains unsupported character '{invalid}'"
        )));
    }

    validate_delay_seconds(settings.delivery_delay_seconds, "delivery delay")?;

    if !(MIN_RETENTION_PERIOD_SECONDS..=MAX_RETENTION_PERIOD_SECONDS)
        .contains(&settings.retention_period_seconds)
    {
        return Err(ValidationError::new(format!(
            "retention period must be between {MIN_RETENTION_PERIOD_SECONDS} and \
             {MAX_RETENTION_PERIOD_SECONDS} seconds"
        )));
    }

    Ok(())
}

/// Checks a bulletin against the per-message bounds of the queueing service.
pub fn validate_bulletin(message: &BulletinMessage) -> Result<(), ValidationError> {
    if message.body.is_empty() {
        return Err(ValidationError::new("message body cannot be empty"));
    }
    if message.body.len() > MAX_MESSAGE_BODY_BYTES {
        return Err(ValidationError::new(format!(
            "message body exceeds MAX_MESSAGE_BODY_BYTES={MAX_MESSAGE_BODY_BYTES}"
        )));
    }

    validate_delay_seconds(message.publish_delay_seconds, "publish delay")?;

    if message.attributes.len() > MAX_MESSAGE_ATTRIBUTES {
        return Err(ValidationError::new(format!(
            "message carries more than MAX_MESSAGE_ATTRIBUTES={MAX_MESSAGE_ATTRIBUTES} attributes"
        )));
    }
    for (name, value) in &message.attributes {
        if name.trim().is_empty() {
            return Err(ValidationError::new(
                "attribute names must be non-empty strings",
            ));
        }
        if value.string_value().is_empty() {
            return Err(ValidationError::new(format!(
                "attribute '{name}' must carry a non-empty value"
            )));
        }
    }

    Ok(())
}

fn is_queue_name_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '-' || ch == '_'
}

fn validate_delay_seconds(value: i32, label: &str) -> Result<(), ValidationError> {
    if !(MIN_DELAY_SECONDS..=MAX_DELAY_SECONDS).contains(&value) {
        return Err(ValidationError::new(format!(
            "{label} must be between {MIN_DELAY_SECONDS} and {MAX_DELAY_SECONDS} seconds"
        )));
    }
    Ok(())
}
