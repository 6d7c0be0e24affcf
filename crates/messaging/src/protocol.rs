//! Message Protocol Types
//!
//! What the iframe posts looks like `{ type, embedId, ...payload }`.
//! Keep parsing tolerant - the channel also carries messages from scripts
//! that have nothing to do with the form.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;
use crate::events::FormEventKind;

/// Raw `message` event as delivered by the host
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageEvent {
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub origin: Option<String>,
}

impl MessageEvent {
    pub fn new(data: Value) -> Self {
        Self { data, origin: None }
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }
}

/// Event-specific fields of a message, i.e. everything but `type` and `embedId`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload(Map<String, Value>);

impl Payload {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    /// Decode the payload into a typed event body
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(Value::Object(self.0.clone()))?)
    }
}

impl From<Map<String, Value>> for Payload {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Message from the form iframe, split into routing fields and payload
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InboundMessage {
    pub event_type: Option<String>,
    pub embed_id: Option<String>,
    pub payload: Payload,
}

impl InboundMessage {
    /// Split raw message data
    ///
    /// Non-object data yields an empty message. `type` and `embedId` are
    /// removed from the payload even when they aren't strings.
    pub fn parse(data: &Value) -> Self {
        let Some(object) = data.as_object() else {
            return Self::default();
        };

        let mut rest = object.clone();
        let event_type = take_string(&mut rest, "type");
        let embed_id = take_string(&mut rest, "embedId");

        Self {
            event_type,
            embed_id,
            payload: Payload(rest),
        }
    }

    /// Known event kind, if any
    pub fn kind(&self) -> Option<FormEventKind> {
        self.event_type.as_deref()?.parse().ok()
    }

    pub fn matches(&self, event_type: &str, embed_id: &str) -> bool {
        self.event_type.as_deref() == Some(event_type)
            && self.embed_id.as_deref() == Some(embed_id)
    }
}

fn take_string(map: &mut Map<String, Value>, key: &str) -> Option<String> {
    match map.remove(key) {
        Some(Value::String(value)) => Some(value),
        _ => None,
    }
}
