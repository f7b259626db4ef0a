//! Host-side message model: text plus a free-form property bag.
//!
//! Rich attachments live under the `attachments` property as a JSON array
//! whose entries the host may leave null.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Property carrying the rich attachment list.
pub const ATTACHMENTS_PROP: &str = "attachments";

/// A chat post about to be committed by the host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Post {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub channel_id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub props: Map<String, Value>,
}

impl Post {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn add_prop(&mut self, key: &str, value: impl Into<Value>) {
        self.props.insert(key.to_string(), value.into());
    }

    pub fn prop(&self, key: &str) -> Option<&Value> {
        self.props.get(key)
    }

    /// Attachments as stored; entries that are not objects (null included) come back as `None`.
    pub fn attachments(&self) -> Vec<Option<Attachment>> {
        match self.props.get(ATTACHMENTS_PROP) {
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| match item {
                    Value::Object(fields) => Some(Attachment::from(fields.clone())),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// A rich preview block rendered alongside the message text.
///
/// Fields the host sets beyond these four are kept in `extra`, as is any of
/// the four that is not a string. A null field reads as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct Attachment {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title_link: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub image_url: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<Map<String, Value>> for Attachment {
    fn from(mut fields: Map<String, Value>) -> Self {
        let mut take = |key: &str| match fields.remove(key) {
            Some(Value::String(s)) => s,
            Some(Value::Null) | None => String::new(),
            Some(other) => {
                fields.insert(key.to_string(), other);
                String::new()
            }
        };
        let title = take("title");
        let title_link = take("title_link");
        let image_url = take("image_url");
        let text = take("text");
        Self {
            title,
            title_link,
            image_url,
            text,
            extra: fields,
        }
    }
}

impl From<Attachment> for Value {
    fn from(a: Attachment) -> Self {
        let mut obj = a.extra;
        for (key, field) in [
            ("title", a.title),
            ("title_link", a.title_link),
            ("image_url", a.image_url),
            ("text", a.text),
        ] {
            if !field.is_empty() {
                obj.insert(key.to_string(), Value::String(field));
            }
        }
        Value::Object(obj)
    }
}
