// Copyright 2025 - Andriel Ferreira
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Scene module.

use crate::{message::MessageSource, Hook, MessageProvider, OutgoingMessage, Relation};

/// A conversational state.
///
/// A scene holds the messages sent when it is entered and the [`Relation`]s
/// that lead out of it. Its name and namespace are assigned when the owning
/// [`Dialog`] is registered on a dispatcher.
///
/// [`Dialog`]: crate::Dialog
#[derive(Clone)]
pub struct Scene {
    /// The name. Set by [`Dialog::scene`].
    ///
    /// [`Dialog::scene`]: crate::Dialog::scene
    pub(crate) name: Option<String>,
    /// The namespace. Set at registration.
    pub(crate) namespace: Option<String>,

    /// The messages sent when the scene is entered.
    pub(crate) sources: Vec<MessageSource>,
    /// The outgoing transitions.
    pub(crate) relations: Vec<Relation>,

    /// Runned when the scene is entered.
    pub(crate) on_enter: Vec<Box<dyn Hook>>,
    /// Runned when the scene is left.
    pub(crate) on_exit: Vec<Box<dyn Hook>>,

    /// Whether relations are re-checked right after entering.
    pub(crate) transitional: bool,
    /// Whether the scene can be recorded as the current one.
    pub(crate) can_stay: bool,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            name: None,
            namespace: None,

            sources: Vec::new(),
            relations: Vec::new(),

            on_enter: Vec::new(),
            on_exit: Vec::new(),

            transitional: false,
            can_stay: true,
        }
    }
}

impl Scene {
    /// Creates a new scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a message sent when the scene is entered.
    pub fn message(mut self, message: impl Into<OutgoingMessage>) -> Self {
        self.sources
            .push(MessageSource::Static(vec![message.into()]));
        self
    }

    /// Attaches a list of messages sent when the scene is entered.
    pub fn messages<M: Into<OutgoingMessage>>(
        mut self,
        messages: impl IntoIterator<Item = M>,
    ) -> Self {
        self.sources.push(MessageSource::Static(
            messages.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Attaches a message provider, evaluated per update.
    pub fn messages_with<P: MessageProvider>(mut self, provider: P) -> Self {
        self.sources.push(MessageSource::Dynamic(Box::new(provider)));
        self
    }

    /// Attaches an outgoing transition.
    pub fn relation(mut self, relation: Relation) -> Self {
        self.relations.push(relation);
        self
    }

    /// Attaches a hook runned when the scene is entered.
    pub fn on_enter<H: Hook>(mut self, hook: H) -> Self {
        self.on_enter.push(Box::new(hook));
        self
    }

    /// Attaches a hook runned when the scene is left.
    pub fn on_exit<H: Hook>(mut self, hook: H) -> Self {
        self.on_exit.push(Box::new(hook));
        self
    }

    /// Re-check the scene's relations right after entering it.
    ///
    /// The dispatcher caps chains of transitional scenes to avoid cycles.
    pub fn transitional(mut self, transitional: bool) -> Self {
        self.transitional = transitional;
        self
    }

    /// Whether the scene can be recorded as the current one.
    ///
    /// A scene with `can_stay` set to `false` is viewed but the conversation
    /// stays where it was. Defaults to `true`.
    pub fn can_stay(mut self, can_stay: bool) -> Self {
        self.can_stay = can_stay;
        self
    }

    /// Returns `Scene` name with namespace: `{namespace}.{name}`.
    ///
    /// `None` until the scene is registered.
    pub fn full_name(&self) -> Option<String> {
        match (&self.namespace, &self.name) {
            (Some(namespace), Some(name)) => Some(format!("{}.{}", namespace, name)),
            _ => None,
        }
    }
}
