// Copyright 2025 - Andriel Ferreira
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Context module.

use std::sync::Arc;

use crate::{Event, OutgoingMessage, Result, Transport};

/// The context of an update.
///
/// Handed to every filter, hook and message provider. Scene names are full
/// names (`"Dialog.scene"`); `next` is only set while a transition is being
/// applied.
#[derive(Clone)]
pub struct Context {
    /// The transport.
    transport: Arc<dyn Transport>,
    /// The update.
    event: Event,

    /// The scene the conversation came from.
    previous: Option<String>,
    /// The scene the conversation is in.
    current: Option<String>,
    /// The scene the conversation is moving to.
    next: Option<String>,
}

impl Context {
    /// Creates a new context.
    pub(crate) fn new(
        transport: Arc<dyn Transport>,
        event: Event,
        previous: Option<String>,
        current: Option<String>,
    ) -> Self {
        Self {
            transport,
            event,
            previous,
            current,
            next: None,
        }
    }

    /// Clones the context with the scene the conversation is moving to.
    pub(crate) fn with_next(&self, next: impl Into<String>) -> Self {
        let mut ctx = self.clone();
        ctx.next = Some(next.into());
        ctx
    }

    /// Returns the transport.
    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// Returns the update.
    pub fn event(&self) -> &Event {
        &self.event
    }

    /// Returns the conversation id.
    pub fn chat_id(&self) -> i64 {
        self.event.chat_id()
    }

    /// Returns the sender id.
    pub fn user_id(&self) -> i64 {
        self.event.user_id()
    }

    /// Returns the text of the update.
    pub fn text(&self) -> &str {
        self.event.text()
    }

    /// Returns the full name of the scene the conversation came from.
    pub fn previous_scene(&self) -> Option<&str> {
        self.previous.as_deref()
    }

    /// Returns the full name of the scene the conversation is in.
    pub fn current_scene(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Returns the full name of the scene the conversation is moving to.
    ///
    /// Only set inside `on_transition` and `on_exit` hooks.
    pub fn next_scene(&self) -> Option<&str> {
        self.next.as_deref()
    }

    /// Sends a text message back to the chat the update came from.
    pub async fn reply(&self, text: impl Into<String>) -> Result<()> {
        self.transport
            .send_message(self.event.chat_id(), &OutgoingMessage::text(text))
            .await
    }

    /// Sends a message back to the chat the update came from.
    pub async fn reply_with(&self, message: &OutgoingMessage) -> Result<()> {
        self.transport
            .send_message(self.event.chat_id(), message)
            .await
    }
}
