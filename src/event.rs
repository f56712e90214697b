// Copyright 2025 - Andriel Ferreira
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Event module.
//!
//! The incoming side of the host SDK seam: whatever update the host receives
//! is reduced to an [`Event`] before it enters the dispatcher.

/// An incoming update, as seen by the dispatcher.
#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    /// The type of update.
    kind: EventKind,

    /// The conversation the update belongs to.
    chat_id: i64,
    /// The sender.
    user_id: i64,
    /// The message text, or the callback payload.
    text: String,
}

impl Event {
    /// Creates a new message event.
    pub fn message(chat_id: i64, user_id: i64, text: impl Into<String>) -> Self {
        Self {
            kind: EventKind::Message,

            chat_id,
            user_id,
            text: text.into(),
        }
    }

    /// Creates a new callback query event.
    ///
    /// `data` is the payload attached to the pressed [`Button`].
    ///
    /// [`Button`]: crate::Button
    pub fn callback_query(chat_id: i64, user_id: i64, data: impl Into<String>) -> Self {
        Self {
            kind: EventKind::CallbackQuery,

            chat_id,
            user_id,
            text: data.into(),
        }
    }

    /// Returns the type of the update.
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Returns the conversation id.
    pub fn chat_id(&self) -> i64 {
        self.chat_id
    }

    /// Returns the sender id.
    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    /// Returns the text of the update.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Event type.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum EventKind {
    /// New message event.
    #[default]
    Message,
    /// Callback query event.
    CallbackQuery,
}

impl PartialEq<Event> for EventKind {
    fn eq(&self, other: &Event) -> bool {
        *self == other.kind
    }
}

impl PartialEq<EventKind> for Event {
    fn eq(&self, other: &EventKind) -> bool {
        other == self
    }
}
