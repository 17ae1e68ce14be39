use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

pub const DEFAULT_QUEUE_NAME: &str = "Example_Queue";
pub const DEFAULT_DELIVERY_DELAY_SECONDS: i32 = 60;
pub const DEFAULT_RETENTION_PERIOD_SECONDS: i32 = 86_400;
pub const DEFAULT_PUBLISH_DELAY_SECONDS: i32 = 10;
pub const BESTSELLER_BULLETIN_BODY: &str =
    "Information about current NY Times fiction bestseller for week of 12/11/2016.";

pub type MessageAttributes = BTreeMap<String, AttributeValue>;

/// Provisioning request for the bulletin queue. Delay and retention are held
/// as seconds and rendered to strings at the service boundary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueueSettings {
    pub queue_name: String,
    pub delivery_delay_seconds: i32,
    pub retention_period_seconds: i32,
}

impl Default for QueueSettings {
    fn default() -> Self {
        Self {
            queue_name: DEFAULT_QUEUE_NAME.to_string(),
            delivery_delay_seconds: DEFAULT_DELIVERY_DELAY_SECONDS,
            retention_period_seconds: DEFAULT_RETENTION_PERIOD_SECONDS,
        }
    }
}

/// Typed message attribute. The queueing service carries every value as a
/// string and distinguishes kinds through the data type label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "data_type", content = "value")]
pub enum AttributeValue {
    String(String),
    Number(String),
}

impl AttributeValue {
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    pub fn number(value: impl std::fmt::Display) -> Self {
        Self::Number(value.to_string())
    }

    pub fn data_type(&self) -> &'static str {
        match self {
            Self::String(_) => "String",
            Self::Number(_) => "Number",
        }
    }

    pub fn string_value(&self) -> &str {
        match self {
            Self::String(value) | Self::Number(value) => value,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BulletinMessage {
    pub body: String,
    pub publish_delay_seconds: i32,
    pub attributes: MessageAttributes,
}

/// Invocation payload accepted by the function. The fields are part of the
/// invocation contract but carry no meaning for publication; both snake and
/// Pascal casings are accepted.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct InvocationInput {
    #[serde(alias = "Key1")]
    pub key1: Option<String>,
    #[serde(alias = "Key2")]
    pub key2: Option<String>,
    #[serde(alias = "Key3")]
    pub key3: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// The demonstration payload: metadata about the week's NY Times fiction
/// bestseller, delivered with a short per-message delay.
pub fn weekly_bestseller_bulletin() -> BulletinMessage {
    BulletinMessage {
        body: BESTSELLER_BULLETIN_BODY.to_string(),
        publish_delay_seconds: DEFAULT_PUBLISH_DELAY_SECONDS,
        attributes: BTreeMap::from([
            ("Title".to_string(), AttributeValue::string("The Whistler")),
            ("Author".to_string(), AttributeValue::string("John Grisham")),
            ("WeeksOn".to_string(), AttributeValue::number(6)),
        ]),
    }
}

pub fn confirmation_message(message_id: &str) -> String {
    format!("Message sent with ID: {message_id}")
}

pub fn publication_fingerprint(message: &BulletinMessage) -> String {
    let mut hasher = Sha256::new();
    hasher.update(stable_contract_json(message));
    format!("{:x}", hasher.finalize())
}

pub fn stable_contract_json(value: impl Serialize) -> String {
    serde_json::to_string(&value).expect("serialization of contract value should not fail")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_queue_settings_match_provisioning_contract() {
        let settings = QueueSettings::default();
        assert_eq!(settings.queue_name, "Example_Queue");
        assert_eq!(settings.delivery_delay_seconds, 60);
        assert_eq!(settings.retention_period_seconds, 86_400);
    }

    #[test]
    fn weekly_bulletin_carries_the_fixed_payload() {
        let bulletin = weekly_bestseller_bulletin();
        assert_eq!(
            bulletin.body,
            "Information about current NY Times fiction bestseller for week of 12/11/2016."
        );
        assert_eq!(bulletin.publish_delay_seconds, 10);
        assert_eq!(bulletin.attributes.len(), 3);
        assert_eq!(bulletin.attributes["Title"], AttributeValue::string("The Whistler"));
        assert_eq!(bulletin.attributes["Author"], AttributeValue::string("John Grisham"));
        assert_eq!(bulletin.attributes["WeeksOn"], AttributeValue::number(6));
    }

    #[test]
    fn number_attributes_render_as_strings() {
        let weeks_on = AttributeValue::number(6);
        assert_eq!(weeks_on.data_type(), "Number");
        assert_eq!(weeks_on.string_value(), "6");

        let title = AttributeValue::string("The Whistler");
        assert_eq!(title.data_type(), "String");
        assert_eq!(title.string_value(), "The Whistler");
    }

    #[test]
    fn confirmation_embeds_the_identifier_verbatim() {
        assert_eq!(confirmation_message("abc-123"), "Message sent with ID: abc-123");
    }

    #[test]
    fn invocation_input_accepts_both_field_casings() {
        let snake: InvocationInput =
            serde_json::from_str(r#"{"key1":"a","key2":"b","key3":"c"}"#)
                .expect("payload should parse");
        let pascal: InvocationInput =
            serde_json::from_str(r#"{"Key1":"a","Key2":"b","Key3":"c"}"#)
                .expect("payload should parse");

        assert_eq!(snake, pascal);
        assert_eq!(snake.key1.as_deref(), Some("a"));
        assert_eq!(snake.key3.as_deref(), Some("c"));
    }

    #[test]
    fn invocation_input_tolerates_missing_fields() {
        let empty: InvocationInput = serde_json::from_str("{}").expect("payload should parse");
        assert_eq!(empty, InvocationInput::default());
    }

    #[test]
    fn invocation_input_tolerates_unknown_fields() {
        let parsed: InvocationInput =
            serde_json::from_str(r#"{"key1":"a","payload_version":"2"}"#)
                .expect("payload should parse");

        assert_eq!(parsed.key1.as_deref(), Some("a"));
        assert_eq!(parsed.key2, None);
    }

    #[test]
    fn publication_fingerprint_is_stable_for_equal_messages() {
        let first = publication_fingerprint(&weekly_bestseller_bulletin());
        let second = publication_fingerprint(&weekly_bestseller_bulletin());
        assert_eq!(first, second);
        assert_eq!(first.len(), 64);
    }

    #[test]
    fn publication_fingerprint_tracks_message_content() {
        let mut altered = weekly_bestseller_bulletin();
        altered.body.push_str(" Updated edition.");

        assert_ne!(
            publication_fingerprint(&weekly_bestseller_bulletin()),
            publication_fingerprint(&altered)
        );
    }
}
