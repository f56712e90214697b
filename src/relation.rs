// Copyright 2025 - Andriel Ferreira
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Relation module.

use crate::{Context, EventKind, Filter, Hook};

/// A transition rule: a trigger and the scene it leads to.
///
/// All attached filters must pass for the relation to match. With no filters
/// the relation matches every update of its event kinds.
#[derive(Clone)]
pub struct Relation {
    /// The scene the relation leads to.
    pub(crate) target: Target,
    /// The trigger.
    pub(crate) filters: Vec<Box<dyn Filter>>,
    /// The event kinds the relation applies to.
    pub(crate) kinds: Vec<EventKind>,
    /// Runned when the relation matches, before the scene change.
    pub(crate) on_transition: Vec<Box<dyn Hook>>,
}

impl Relation {
    /// Creates a new relation leading to the named scene.
    ///
    /// `name` may be a short name (`"scene2"`, resolved within the owning
    /// dialog) or a full name (`"MyDialog.scene2"`). Resolution happens at
    /// registration: an unknown name fails [`DispatcherBuilder::build`].
    ///
    /// [`DispatcherBuilder::build`]: crate::DispatcherBuilder::build
    pub fn to(name: impl Into<String>) -> Self {
        Self::with_target(Target::Scene(name.into()))
    }

    /// Creates a new relation leading back to the current scene.
    ///
    /// Does not match while no scene is active.
    pub fn stay() -> Self {
        Self::with_target(Target::Stay)
    }

    /// Creates a new relation leading to the previous scene in the history.
    ///
    /// Does not match while the history holds less than two scenes.
    pub fn back() -> Self {
        Self::with_target(Target::Back)
    }

    fn with_target(target: Target) -> Self {
        Self {
            target,
            filters: Vec::new(),
            kinds: vec![EventKind::Message],
            on_transition: Vec::new(),
        }
    }

    /// Attaches a filter. All attached filters must pass.
    pub fn filter<F: Filter>(mut self, filter: F) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Replaces the event kinds the relation applies to.
    ///
    /// Defaults to [`EventKind::Message`] only.
    pub fn on_kinds(mut self, kinds: &[EventKind]) -> Self {
        self.kinds = kinds.to_vec();
        self
    }

    /// Attaches a hook runned when the relation matches, before the scene
    /// change.
    pub fn on_transition<H: Hook>(mut self, hook: H) -> Self {
        self.on_transition.push(Box::new(hook));
        self
    }

    /// Checks if the update should trigger this relation.
    pub(crate) async fn matches(&self, ctx: &Context) -> bool {
        if !self.kinds.contains(&ctx.event().kind()) {
            return false;
        }

        for filter in self.filters.iter() {
            if !filter.check(ctx.clone()).await {
                return false;
            }
        }

        true
    }
}

/// The scene a [`Relation`] leads to.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Target {
    /// A named scene, resolved at registration.
    Scene(String),
    /// The current scene, re-entered.
    Stay,
    /// The previous scene in the history; moving back pops the history.
    Back,
}
