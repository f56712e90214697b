// Copyright 2025 - Andriel Ferreira
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Message module.
//!
//! Outbound message specs. A scene declares *what* to send; delivery belongs
//! to the host's [`Transport`] implementation.
//!
//! [`Transport`]: crate::Transport

use async_trait::async_trait;
use futures_util::Future;

use crate::Context;

/// An outbound message spec.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OutgoingMessage {
    /// The text to send.
    text: String,
    /// The keyboard to attach, if any.
    keyboard: Option<Keyboard>,
}

impl OutgoingMessage {
    /// Creates a new text message.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: None,
        }
    }

    /// Attaches a keyboard.
    pub fn keyboard(mut self, keyboard: Keyboard) -> Self {
        self.keyboard = Some(keyboard);
        self
    }

    /// Returns the text.
    pub fn content(&self) -> &str {
        &self.text
    }

    /// Returns the attached keyboard, if any.
    pub fn attached_keyboard(&self) -> Option<&Keyboard> {
        self.keyboard.as_ref()
    }
}

impl From<&str> for OutgoingMessage {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl From<String> for OutgoingMessage {
    fn from(text: String) -> Self {
        Self::text(text)
    }
}

/// A keyboard attached to an outbound message.
///
/// How each variant is rendered is up to the transport.
#[derive(Clone, Debug, PartialEq)]
pub enum Keyboard {
    /// Buttons shown under the message.
    Inline(Vec<Vec<Button>>),
    /// Buttons that replace the user's keyboard.
    Reply(Vec<Vec<Button>>),
    /// Removes a previously sent reply keyboard.
    Remove,
}

/// A keyboard button.
#[derive(Clone, Debug, PartialEq)]
pub struct Button {
    label: String,
    data: Option<String>,
}

impl Button {
    /// Creates a new button.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            data: None,
        }
    }

    /// Creates a new button with a callback payload.
    ///
    /// Pressing it is delivered as [`Event::callback_query`] with `data`.
    ///
    /// [`Event::callback_query`]: crate::Event::callback_query
    pub fn with_data(label: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            data: Some(data.into()),
        }
    }

    /// Returns the label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the callback payload, if any.
    pub fn data(&self) -> Option<&str> {
        self.data.as_deref()
    }
}

/// Where a scene's messages come from.
#[derive(Clone)]
pub(crate) enum MessageSource {
    /// Messages known at registration time.
    Static(Vec<OutgoingMessage>),
    /// Messages computed per update.
    Dynamic(Box<dyn MessageProvider>),
}

impl MessageSource {
    /// Produces the messages for the current update.
    pub(crate) async fn messages(&self, ctx: Context) -> Vec<OutgoingMessage> {
        match self {
            Self::Static(messages) => messages.clone(),
            Self::Dynamic(provider) => provider.messages(ctx).await,
        }
    }
}

/// Produces a scene's messages per update.
///
/// Implemented for any `async fn(Context) -> Vec<OutgoingMessage>`.
#[async_trait]
pub trait MessageProvider: CloneProvider + Send + Sync + 'static {
    /// Produces the messages.
    async fn messages(&self, ctx: Context) -> Vec<OutgoingMessage>;
}

#[async_trait]
impl<T, F> MessageProvider for T
where
    T: Fn(Context) -> F + Clone + Send + Sync + 'static,
    F: Future<Output = Vec<OutgoingMessage>> + Send + 'static,
{
    async fn messages(&self, ctx: Context) -> Vec<OutgoingMessage> {
        self(ctx).await
    }
}

/// A trait that allows cloning the message provider.
pub trait CloneProvider {
    /// Clones the message provider.
    fn clone_provider(&self) -> Box<dyn MessageProvider>;
}

impl<T> CloneProvider for T
where
    T: MessageProvider + Clone,
{
    fn clone_provider(&self) -> Box<dyn MessageProvider> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn MessageProvider> {
    fn clone(&self) -> Self {
        self.clone_provider()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_builder() {
        let message = OutgoingMessage::text("Inside the Scene 2")
            .keyboard(Keyboard::Reply(vec![vec![Button::new("Next")]]));

        assert_eq!(message.content(), "Inside the Scene 2");
        assert!(matches!(
            message.attached_keyboard(),
            Some(Keyboard::Reply(_))
        ));
    }

    #[test]
    fn button_data() {
        let plain = Button::new("Back");
        let with_data = Button::with_data("Next", "next");

        assert_eq!(plain.data(), None);
        assert_eq!(with_data.data(), Some("next"));
    }
}
