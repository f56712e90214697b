// Copyright 2025 - Andriel Ferreira
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Dialog module.

use crate::{Router, Scene};

/// A named aggregate of scenes and a router.
///
/// The dialog's name is the namespace of its scenes: a scene registered as
/// `"start"` on a dialog named `"Quiz"` gets the full name `"Quiz.start"`.
/// Dialogs do nothing by themselves; registering them on a [`Dispatcher`]
/// resolves and validates their relations.
///
/// [`Dispatcher`]: crate::Dispatcher
///
/// # Example
///
/// ```
/// let dialog = Dialog::new("Quiz")
///     .router(Router::new().relation(Relation::to("start").filter(filters::command("start"))))
///     .scene("start", Scene::new().message("Welcome!"));
/// ```
#[derive(Clone, Default)]
pub struct Dialog {
    /// The name, used as the namespace of the scenes.
    pub(crate) name: String,
    /// The entry transition table.
    pub(crate) router: Option<Router>,
    /// The scenes, in registration order.
    pub(crate) scenes: Vec<Scene>,
}

impl Dialog {
    /// Creates a new dialog.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            router: None,
            scenes: Vec::new(),
        }
    }

    /// Attaches the router.
    pub fn router(mut self, router: Router) -> Self {
        self.router = Some(router);
        self
    }

    /// Attaches a named scene.
    pub fn scene(mut self, name: impl Into<String>, mut scene: Scene) -> Self {
        scene.name = Some(name.into());
        self.scenes.push(scene);
        self
    }

    /// Returns the name.
    pub fn name(&self) -> &str {
        &self.name
    }
}
