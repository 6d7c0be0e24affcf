//! Message Dispatcher - routes host `message` events to embed handlers
//!
//! Design decisions:
//! 1. One dispatcher per page, handlers grouped by embed id
//! 2. Every handler sees every message, handlers do their own filtering
//! 3. Removing an embed drops all of its handlers at once (unmount)

use dashmap::DashMap;
use serde_json::Value;

use crate::error::Result;
use crate::handler::{FormCallbacks, MessageHandler};
use crate::protocol::MessageEvent;

/// Registry of form handlers for all embeds on a page
pub struct MessageDispatcher {
    /// Key: embed id, Value: handlers registered for that embed
    listeners: DashMap<String, Vec<MessageHandler>>,
}

impl MessageDispatcher {
    pub fn new() -> Self {
        Self {
            listeners: DashMap::new(),
        }
    }

    /// Register a handler under an embed id
    pub fn register(&self, embed_id: impl Into<String>, handler: MessageHandler) {
        self.listeners
            .entry(embed_id.into())
            .or_default()
            .push(handler);
    }

    /// Register one handler per configured callback
    pub fn register_all(&self, embed_id: &str, callbacks: &FormCallbacks) {
        let handlers = callbacks.handlers(embed_id);
        tracing::debug!(
            "Registered {} form handlers for embed {}",
            handlers.len(),
            embed_id
        );
        self.listeners
            .entry(embed_id.to_string())
            .or_default()
            .extend(handlers);
    }

    /// Drop every handler of an embed, returns how many were removed
    pub fn remove(&self, embed_id: &str) -> usize {
        let removed = self
            .listeners
            .remove(embed_id)
            .map(|(_, handlers)| handlers.len())
            .unwrap_or(0);
        tracing::debug!("Removed {} form handlers for embed {}", removed, embed_id);
        removed
    }

    /// Number of handlers across all embeds
    pub fn handler_count(&self) -> usize {
        self.listeners.iter().map(|entry| entry.value().len()).sum()
    }

    /// Deliver one event to every registered handler
    pub fn dispatch(&self, event: &MessageEvent) {
        // Handlers run outside the map guards, a callback may remove its own embed
        let handlers: Vec<MessageHandler> = self
            .listeners
            .iter()
            .flat_map(|entry| entry.value().clone())
            .collect();

        for handler in &handlers {
            handler(event);
        }
    }

    /// Deliver a message whose data arrived as JSON text
    pub fn dispatch_json(&self, text: &str) -> Result<()> {
        let data: Value = serde_json::from_str(text).map_err(|e| {
            tracing::warn!("Dropping unparsable message: {}", e);
            e
        })?;
        self.dispatch(&MessageEvent::new(data));
        Ok(())
    }
}

impl Default for MessageDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
