//! Form event handlers
//!
//! A handler is what gets registered on the host's `message` channel. It
//! sees every message posted to the page and only calls back for its own
//! event name and embed id.

use std::sync::Arc;

use crate::events::FormEventKind;
use crate::protocol::{InboundMessage, MessageEvent, Payload};

/// User callback, receives the message payload
pub type Callback = Arc<dyn Fn(Payload) + Send + Sync>;

/// Listener for raw `message` events
pub type MessageHandler = Arc<dyn Fn(&MessageEvent) + Send + Sync>;

/// Wrap a closure as a [`Callback`]
pub fn callback<F>(f: F) -> Callback
where
    F: Fn(Payload) + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Build a handler that calls `callback` for `event_type` messages of one embed
///
/// Without a callback the handler still filters and does nothing.
pub fn form_event_handler(
    event_type: impl Into<String>,
    expected_embed_id: impl Into<String>,
    callback: Option<Callback>,
) -> MessageHandler {
    let event_type = event_type.into();
    let expected_embed_id = expected_embed_id.into();

    Arc::new(move |event: &MessageEvent| {
        let message = InboundMessage::parse(&event.data);
        if !message.matches(&event_type, &expected_embed_id) {
            tracing::trace!(
                "ignoring message {:?} for embed {:?}",
                message.event_type,
                message.embed_id
            );
            return;
        }

        if let Some(callback) = &callback {
            callback(message.payload);
        }
    })
}

fn kind_handler(
    kind: FormEventKind,
    embed_id: impl Into<String>,
    callback: Option<Callback>,
) -> MessageHandler {
    form_event_handler(kind.as_str(), embed_id, callback)
}

pub fn form_ready_handler(
    embed_id: impl Into<String>,
    callback: Option<Callback>,
) -> MessageHandler {
    kind_handler(FormEventKind::FormReady, embed_id, callback)
}

pub fn form_started_handler(
    embed_id: impl Into<String>,
    callback: Option<Callback>,
) -> MessageHandler {
    kind_handler(FormEventKind::FormStarted, embed_id, callback)
}

/// Fires on `form-screen-changed`
pub fn form_question_changed_handler(
    embed_id: impl Into<String>,
    callback: Option<Callback>,
) -> MessageHandler {
    kind_handler(FormEventKind::FormScreenChanged, embed_id, callback)
}

pub fn form_height_changed_handler(
    embed_id: impl Into<String>,
    callback: Option<Callback>,
) -> MessageHandler {
    kind_handler(FormEventKind::FormHeightChanged, embed_id, callback)
}

pub fn form_submit_handler(
    embed_id: impl Into<String>,
    callback: Option<Callback>,
) -> MessageHandler {
    kind_handler(FormEventKind::FormSubmit, embed_id, callback)
}

pub fn welcome_screen_hidden_handler(
    embed_id: impl Into<String>,
    callback: Option<Callback>,
) -> MessageHandler {
    kind_handler(FormEventKind::WelcomeScreenHidden, embed_id, callback)
}

pub fn form_theme_handler(
    embed_id: impl Into<String>,
    callback: Option<Callback>,
) -> MessageHandler {
    kind_handler(FormEventKind::FormTheme, embed_id, callback)
}

pub fn thank_you_screen_button_click_handler(
    embed_id: impl Into<String>,
    callback: Option<Callback>,
) -> MessageHandler {
    kind_handler(FormEventKind::ThankYouScreenButtonClick, embed_id, callback)
}

/// Callbacks an embed can be configured with, one per form event
#[derive(Clone, Default)]
pub struct FormCallbacks {
    pub on_ready: Option<Callback>,
    pub on_started: Option<Callback>,
    pub on_question_changed: Option<Callback>,
    pub on_height_changed: Option<Callback>,
    pub on_submit: Option<Callback>,
    pub on_welcome_screen_hidden: Option<Callback>,
    pub on_theme: Option<Callback>,
    pub on_ending_button_click: Option<Callback>,
}

impl FormCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, kind: FormEventKind) -> &Option<Callback> {
        match kind {
            FormEventKind::FormReady => &self.on_ready,
            FormEventKind::FormStarted => &self.on_started,
            FormEventKind::FormScreenChanged => &self.on_question_changed,
            FormEventKind::FormHeightChanged => &self.on_height_changed,
            FormEventKind::FormSubmit => &self.on_submit,
            FormEventKind::WelcomeScreenHidden => &self.on_welcome_screen_hidden,
            FormEventKind::FormTheme => &self.on_theme,
            FormEventKind::ThankYouScreenButtonClick => &self.on_ending_button_click,
        }
    }

    fn slot_mut(&mut self, kind: FormEventKind) -> &mut Option<Callback> {
        match kind {
            FormEventKind::FormReady => &mut self.on_ready,
            FormEventKind::FormStarted => &mut self.on_started,
            FormEventKind::FormScreenChanged => &mut self.on_question_changed,
            FormEventKind::FormHeightChanged => &mut self.on_height_changed,
            FormEventKind::FormSubmit => &mut self.on_submit,
            FormEventKind::WelcomeScreenHidden => &mut self.on_welcome_screen_hidden,
            FormEventKind::FormTheme => &mut self.on_theme,
            FormEventKind::ThankYouScreenButtonClick => &mut self.on_ending_button_click,
        }
    }

    /// Set the callback for one event kind
    pub fn on<F>(mut self, kind: FormEventKind, f: F) -> Self
    where
        F: Fn(Payload) + Send + Sync + 'static,
    {
        *self.slot_mut(kind) = Some(callback(f));
        self
    }

    /// Whether the host wants ending-button clicks forwarded to it
    pub fn handles_ending_button_click(&self) -> bool {
        self.on_ending_button_click.is_some()
    }

    /// One handler per configured callback
    pub fn handlers(&self, embed_id: &str) -> Vec<MessageHandler> {
        FormEventKind::ALL
            .iter()
            .filter_map(|&kind| {
                let callback = self.slot(kind).clone()?;
                Some(kind_handler(kind, embed_id, Some(callback)))
            })
            .collect()
    }
}
