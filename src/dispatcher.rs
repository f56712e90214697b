// Copyright 2025 - Andriel Ferreira
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Dispatcher module.

use std::{collections::HashMap, sync::Arc};

use crate::{
    relation::Target, storage::MemoryStorage, utils, Context, Dialog, Error, Event, Relation,
    Result, Router, Scene, SceneStorage, Transport,
};

/// How many transitional scenes may be chained on a single update.
const MAX_TRANSITION_HOPS: usize = 8;

/// Dispatcher.
///
/// Owns every registered dialog's scenes and routers, resolved and validated
/// by [`DispatcherBuilder::build`]. The host SDK feeds updates into
/// [`Dispatcher::handle_update`]; everything else (polling, connections,
/// delivery) stays on the host's side of the [`Transport`] seam.
#[derive(Clone)]
pub struct Dispatcher {
    /// The registered scenes.
    scenes: Vec<SceneSlot>,
    /// Scene ids by full name.
    index: HashMap<String, usize>,
    /// The registered routers, in registration order.
    routers: Vec<Router>,
    /// The per-conversation scene state.
    storage: Arc<dyn SceneStorage>,
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("scenes", &self.scenes.len())
            .field("index", &self.index)
            .field("routers", &self.routers.len())
            .finish_non_exhaustive()
    }
}

/// A registered scene.
#[derive(Clone)]
struct SceneSlot {
    full_name: String,
    scene: Scene,
}

impl Dispatcher {
    /// Creates a new dispatcher builder.
    pub fn builder() -> DispatcherBuilder {
        DispatcherBuilder::default()
    }

    /// Returns the scene storage.
    pub fn storage(&self) -> &Arc<dyn SceneStorage> {
        &self.storage
    }

    /// Handle an update sent by the host SDK.
    ///
    /// Looks up the conversation's current scene, scans its relations and
    /// then every router's relations for a matching trigger, and applies the
    /// transition: hooks run, the storage is updated and the target scene's
    /// messages are delivered through `transport`. Transitional scenes are
    /// followed until a resting scene is reached.
    ///
    /// Returns [`Outcome::Unhandled`], leaving the state untouched, when no
    /// relation matches; the host may then fall through to its own handlers.
    pub async fn handle_update(
        &self,
        transport: Arc<dyn Transport>,
        event: Event,
    ) -> Result<Outcome> {
        let chat_id = event.chat_id();
        let user_id = event.user_id();

        let history = self.storage.history(chat_id, user_id).await?;
        let mut current = self.scene_id(history.last());
        let mut previous = self.scene_id(history.len().checked_sub(2).and_then(|i| history.get(i)));

        let mut handled = false;
        let mut hops = 0;

        loop {
            let ctx = Context::new(
                transport.clone(),
                event.clone(),
                previous.map(|id| self.scenes[id].full_name.clone()),
                current.map(|id| self.scenes[id].full_name.clone()),
            );

            let Some((next, relation)) = self.find_transition(current, &ctx).await else {
                break;
            };

            let next_slot = &self.scenes[next];
            log::debug!(
                "moving conversation ({}, {}) to scene \"{}\"",
                chat_id,
                user_id,
                next_slot.full_name
            );

            let ctx_leaving = ctx.with_next(&next_slot.full_name);

            for hook in relation.on_transition.iter() {
                hook.run(ctx_leaving.clone()).await?;
            }

            if let Some(id) = current {
                for hook in self.scenes[id].scene.on_exit.iter() {
                    hook.run(ctx_leaving.clone()).await?;
                }
            }

            if next_slot.scene.can_stay && current != Some(next) {
                if relation.target == Target::Back {
                    // moving back pops the history instead of growing it.
                    let mut history = self.storage.history(chat_id, user_id).await?;
                    history.pop();
                    self.storage.set_history(chat_id, user_id, history).await?;
                } else {
                    self.storage
                        .push_scene(chat_id, user_id, &next_slot.full_name)
                        .await?;
                }
            }

            let ctx_entered = Context::new(
                transport.clone(),
                event.clone(),
                current.map(|id| self.scenes[id].full_name.clone()),
                Some(next_slot.full_name.clone()),
            );

            for hook in next_slot.scene.on_enter.iter() {
                hook.run(ctx_entered.clone()).await?;
            }

            for source in next_slot.scene.sources.iter() {
                for message in source.messages(ctx_entered.clone()).await {
                    transport.send_message(chat_id, &message).await?;
                }
            }

            handled = true;

            if !next_slot.scene.transitional {
                break;
            }

            hops += 1;
            if hops >= MAX_TRANSITION_HOPS {
                log::warn!(
                    "transitional scene limit reached at \"{}\", stopping",
                    next_slot.full_name
                );
                break;
            }

            previous = current;
            current = Some(next);
        }

        if handled {
            Ok(Outcome::Handled)
        } else {
            Ok(Outcome::Unhandled)
        }
    }

    /// Finds the first matching relation: the active scene's relations first,
    /// then every router's, in registration order.
    async fn find_transition(
        &self,
        current: Option<usize>,
        ctx: &Context,
    ) -> Option<(usize, &Relation)> {
        if let Some(id) = current {
            for relation in self.scenes[id].scene.relations.iter() {
                if let Some(next) = self.resolve_target(relation, ctx) {
                    if relation.matches(ctx).await {
                        return Some((next, relation));
                    }
                }
            }
        }

        for router in self.routers.iter() {
            for relation in router.relations.iter() {
                if let Some(next) = self.resolve_target(relation, ctx) {
                    if relation.matches(ctx).await {
                        return Some((next, relation));
                    }
                }
            }
        }

        None
    }

    /// Resolves a relation target to a scene id, against the current update.
    ///
    /// `Scene` targets always resolve after a successful build; `Stay` and
    /// `Back` depend on the conversation state and may not.
    fn resolve_target(&self, relation: &Relation, ctx: &Context) -> Option<usize> {
        match &relation.target {
            Target::Scene(full_name) => self.index.get(full_name).copied(),
            Target::Stay => ctx
                .current_scene()
                .and_then(|full_name| self.index.get(full_name).copied()),
            Target::Back => ctx
                .previous_scene()
                .and_then(|full_name| self.index.get(full_name).copied()),
        }
    }

    /// Looks up a stored scene name, ignoring names no longer registered.
    fn scene_id(&self, full_name: Option<&String>) -> Option<usize> {
        let full_name = full_name?;

        match self.index.get(full_name) {
            Some(id) => Some(*id),
            None => {
                log::warn!("unknown scene \"{}\" in storage, ignoring", full_name);
                None
            }
        }
    }
}

/// The result of handling an update.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// At least one transition ran.
    Handled,
    /// No relation matched; the conversation state is untouched.
    Unhandled,
}

/// [`Dispatcher`] builder.
///
/// Collects dialogs and builds the dispatcher, resolving every relation
/// target. Configuration mistakes (unknown target scenes, duplicate names)
/// fail [`DispatcherBuilder::build`] instead of dead-ending at runtime.
#[derive(Clone, Default)]
pub struct DispatcherBuilder {
    dialogs: Vec<Dialog>,
    storage: Option<Arc<dyn SceneStorage>>,
}

impl DispatcherBuilder {
    /// Attach a new dialog.
    pub fn dialog(mut self, dialog: Dialog) -> Self {
        self.dialogs.push(dialog);
        self
    }

    /// Sets the scene storage.
    ///
    /// Defaults to an empty [`MemoryStorage`].
    pub fn storage<S: SceneStorage>(mut self, storage: S) -> Self {
        self.storage = Some(Arc::new(storage));
        self
    }

    /// Builds the dispatcher.
    ///
    /// Assigns namespaces, interns every scene under `Dialog.scene` and
    /// resolves every relation target, qualifying short names with the
    /// owning dialog's name.
    pub fn build(self) -> Result<Dispatcher> {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut count = 0;

        // first pass: validate and intern the scene names, so that relations
        // may point at scenes of dialogs registered later.
        for dialog in self.dialogs.iter() {
            if !utils::is_valid_name(&dialog.name) {
                return Err(Error::InvalidName(dialog.name.clone()));
            }

            for scene in dialog.scenes.iter() {
                let name = scene.name.clone().unwrap_or_default();
                if !utils::is_valid_name(&name) {
                    return Err(Error::InvalidName(name));
                }

                let full_name = format!("{}.{}", dialog.name, name);
                if index.insert(full_name.clone(), count).is_some() {
                    return Err(Error::DuplicateScene(full_name));
                }

                count += 1;
            }
        }

        // second pass: qualify and check every relation target.
        let mut scenes = Vec::with_capacity(count);
        let mut routers = Vec::new();

        for mut dialog in self.dialogs {
            for mut scene in dialog.scenes {
                Self::resolve_relations(&index, &dialog.name, &mut scene.relations)?;

                scene.namespace = Some(dialog.name.clone());
                let full_name = scene.full_name().expect("scene name is validated");

                scenes.push(SceneSlot { full_name, scene });
            }

            if let Some(mut router) = dialog.router.take() {
                Self::resolve_relations(&index, &dialog.name, &mut router.relations)?;
                routers.push(router);
            }
        }

        log::debug!(
            "registered {} scenes and {} routers",
            scenes.len(),
            routers.len()
        );

        Ok(Dispatcher {
            scenes,
            index,
            routers,
            storage: self
                .storage
                .unwrap_or_else(|| Arc::new(MemoryStorage::new())),
        })
    }

    /// Qualifies the named targets of `relations` with `namespace` and checks
    /// that they are registered.
    fn resolve_relations(
        index: &HashMap<String, usize>,
        namespace: &str,
        relations: &mut [Relation],
    ) -> Result<()> {
        for relation in relations.iter_mut() {
            if let Target::Scene(name) = &relation.target {
                let full_name = utils::qualify(namespace, name);

                if !index.contains_key(&full_name) {
                    return Err(Error::UnknownScene(full_name));
                }

                relation.target = Target::Scene(full_name);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::{filters, OutgoingMessage};

    #[derive(Default)]
    struct RecordingTransport {
        sent: Mutex<Vec<(i64, OutgoingMessage)>>,
    }

    #[async_trait::async_trait]
    impl Transport for RecordingTransport {
        async fn send_message(&self, chat_id: i64, message: &OutgoingMessage) -> Result<()> {
            self.sent.lock().unwrap().push((chat_id, message.clone()));
            Ok(())
        }
    }

    impl RecordingTransport {
        fn texts(&self) -> Vec<String> {
            self.sent
                .lock()
                .unwrap()
                .iter()
                .map(|(_, message)| message.content().to_string())
                .collect()
        }
    }

    fn two_scene_dialog() -> Dialog {
        Dialog::new("MyDialog")
            .router(
                Router::new().relation(Relation::to("scene1").filter(filters::command("start"))),
            )
            .scene(
                "scene1",
                Scene::new()
                    .message("Inside the Scene 1")
                    .relation(Relation::to("scene2").filter(filters::exact(&["scene2"]))),
            )
            .scene("scene2", Scene::new().message("Inside the Scene 2"))
    }

    #[tokio::test]
    async fn transitions_between_scenes() {
        let dispatcher = Dispatcher::builder()
            .dialog(two_scene_dialog())
            .build()
            .unwrap();
        let transport = Arc::new(RecordingTransport::default());

        let outcome = dispatcher
            .handle_update(transport.clone(), Event::message(1, 1, "/start"))
            .await
            .unwrap();
        assert_eq!(outcome, Outcome::Handled);
        assert_eq!(
            dispatcher.storage().current_scene(1, 1).await.unwrap().as_deref(),
            Some("MyDialog.scene1")
        );

        let outcome = dispatcher
            .handle_update(transport.clone(), Event::message(1, 1, "scene2"))
            .await
            .unwrap();
        assert_eq!(outcome, Outcome::Handled);
        assert_eq!(
            dispatcher.storage().current_scene(1, 1).await.unwrap().as_deref(),
            Some("MyDialog.scene2")
        );
        assert_eq!(
            transport.texts(),
            vec!["Inside the Scene 1", "Inside the Scene 2"]
        );
    }

    #[tokio::test]
    async fn unmatched_trigger_leaves_state_unchanged() {
        let dispatcher = Dispatcher::builder()
            .dialog(two_scene_dialog())
            .build()
            .unwrap();
        let transport = Arc::new(RecordingTransport::default());

        dispatcher
            .handle_update(transport.clone(), Event::message(1, 1, "/start"))
            .await
            .unwrap();

        let outcome = dispatcher
            .handle_update(transport.clone(), Event::message(1, 1, "bogus"))
            .await
            .unwrap();
        assert_eq!(outcome, Outcome::Unhandled);
        assert_eq!(
            dispatcher.storage().current_scene(1, 1).await.unwrap().as_deref(),
            Some("MyDialog.scene1")
        );
        assert_eq!(transport.texts(), vec!["Inside the Scene 1"]);
    }

    #[tokio::test]
    async fn scene_relations_win_over_routers() {
        let dialog = Dialog::new("MyDialog")
            .router(Router::new().relation(Relation::to("fallback")))
            .scene(
                "scene1",
                Scene::new().relation(Relation::to("scene2").filter(filters::exact(&["scene2"]))),
            )
            .scene("scene2", Scene::new().message("Inside the Scene 2"))
            .scene("fallback", Scene::new().message("fallback").can_stay(false));

        let dispatcher = Dispatcher::builder().dialog(dialog).build().unwrap();
        let transport = Arc::new(RecordingTransport::default());

        dispatcher
            .storage()
            .push_scene(1, 1, "MyDialog.scene1")
            .await
            .unwrap();

        dispatcher
            .handle_update(transport.clone(), Event::message(1, 1, "scene2"))
            .await
            .unwrap();

        assert_eq!(transport.texts(), vec!["Inside the Scene 2"]);
    }

    #[tokio::test]
    async fn unknown_target_fails_build() {
        let dialog = Dialog::new("MyDialog").scene(
            "scene1",
            Scene::new().relation(Relation::to("missing").filter(filters::always)),
        );

        let err = Dispatcher::builder().dialog(dialog).build().unwrap_err();
        assert!(matches!(err, Error::UnknownScene(name) if name == "MyDialog.missing"));
    }

    #[tokio::test]
    async fn duplicate_scene_fails_build() {
        let dialog = Dialog::new("MyDialog")
            .scene("scene1", Scene::new())
            .scene("scene1", Scene::new());

        let err = Dispatcher::builder().dialog(dialog).build().unwrap_err();
        assert!(matches!(err, Error::DuplicateScene(name) if name == "MyDialog.scene1"));
    }

    #[tokio::test]
    async fn dotted_name_fails_build() {
        let dialog = Dialog::new("My.Dialog").scene("scene1", Scene::new());

        let err = Dispatcher::builder().dialog(dialog).build().unwrap_err();
        assert!(matches!(err, Error::InvalidName(_)));
    }

    #[tokio::test]
    async fn cross_dialog_targets_resolve() {
        let first = Dialog::new("First").scene(
            "start",
            Scene::new().relation(Relation::to("Second.end").filter(filters::exact(&["go"]))),
        );
        let second = Dialog::new("Second").scene("end", Scene::new().message("done"));

        let dispatcher = Dispatcher::builder()
            .dialog(first)
            .dialog(second)
            .build()
            .unwrap();
        let transport = Arc::new(RecordingTransport::default());

        dispatcher
            .storage()
            .push_scene(1, 1, "First.start")
            .await
            .unwrap();
        dispatcher
            .handle_update(transport.clone(), Event::message(1, 1, "go"))
            .await
            .unwrap();

        assert_eq!(
            dispatcher.storage().current_scene(1, 1).await.unwrap().as_deref(),
            Some("Second.end")
        );
    }

    #[tokio::test]
    async fn transitional_scene_is_followed() {
        let dialog = Dialog::new("MyDialog")
            .router(Router::new().relation(Relation::to("greet").filter(filters::command("start"))))
            .scene(
                "greet",
                Scene::new()
                    .message("Welcome!")
                    .relation(Relation::to("question").filter(filters::always))
                    .transitional(true),
            )
            .scene("question", Scene::new().message("2 + 2 = ?"));

        let dispatcher = Dispatcher::builder().dialog(dialog).build().unwrap();
        let transport = Arc::new(RecordingTransport::default());

        dispatcher
            .handle_update(transport.clone(), Event::message(1, 1, "/start"))
            .await
            .unwrap();

        assert_eq!(transport.texts(), vec!["Welcome!", "2 + 2 = ?"]);
        assert_eq!(
            dispatcher.storage().current_scene(1, 1).await.unwrap().as_deref(),
            Some("MyDialog.question")
        );
    }

    #[tokio::test]
    async fn transitional_cycle_is_capped() {
        let dialog = Dialog::new("MyDialog")
            .router(Router::new().relation(Relation::to("ping").filter(filters::command("start"))))
            .scene(
                "ping",
                Scene::new()
                    .message("ping")
                    .relation(Relation::to("pong").filter(filters::always))
                    .transitional(true),
            )
            .scene(
                "pong",
                Scene::new()
                    .message("pong")
                    .relation(Relation::to("ping").filter(filters::always))
                    .transitional(true),
            );

        let dispatcher = Dispatcher::builder().dialog(dialog).build().unwrap();
        let transport = Arc::new(RecordingTransport::default());

        let outcome = dispatcher
            .handle_update(transport.clone(), Event::message(1, 1, "/start"))
            .await
            .unwrap();

        assert_eq!(outcome, Outcome::Handled);
        assert_eq!(transport.texts().len(), MAX_TRANSITION_HOPS);
    }

    #[tokio::test]
    async fn can_stay_scene_does_not_become_current() {
        let dialog = Dialog::new("MyDialog")
            .router(
                Router::new()
                    .relation(Relation::to("score").filter(filters::command("score")))
                    .relation(Relation::to("start").filter(filters::command("start"))),
            )
            .scene("start", Scene::new().message("Welcome!"))
            .scene("score", Scene::new().message("Your score: 0").can_stay(false));

        let dispatcher = Dispatcher::builder().dialog(dialog).build().unwrap();
        let transport = Arc::new(RecordingTransport::default());

        dispatcher
            .handle_update(transport.clone(), Event::message(1, 1, "/start"))
            .await
            .unwrap();
        dispatcher
            .handle_update(transport.clone(), Event::message(1, 1, "/score"))
            .await
            .unwrap();

        assert_eq!(transport.texts(), vec!["Welcome!", "Your score: 0"]);
        assert_eq!(
            dispatcher.storage().current_scene(1, 1).await.unwrap().as_deref(),
            Some("MyDialog.start")
        );
    }

    #[tokio::test]
    async fn back_pops_the_history() {
        let dialog = Dialog::new("Quiz")
            .router(
                Router::new()
                    .relation(Relation::to("q1").filter(filters::command("start")))
                    .relation(Relation::back().filter(filters::command("back"))),
            )
            .scene(
                "q1",
                Scene::new()
                    .message("Question 1")
                    .relation(Relation::to("q2").filter(filters::exact(&["4"]))),
            )
            .scene("q2", Scene::new().message("Question 2"));

        let dispatcher = Dispatcher::builder().dialog(dialog).build().unwrap();
        let transport = Arc::new(RecordingTransport::default());

        dispatcher
            .handle_update(transport.clone(), Event::message(1, 1, "/start"))
            .await
            .unwrap();
        dispatcher
            .handle_update(transport.clone(), Event::message(1, 1, "4"))
            .await
            .unwrap();
        dispatcher
            .handle_update(transport.clone(), Event::message(1, 1, "/back"))
            .await
            .unwrap();

        assert_eq!(
            dispatcher.storage().history(1, 1).await.unwrap(),
            vec!["Quiz.q1"]
        );
        assert_eq!(
            transport.texts(),
            vec!["Question 1", "Question 2", "Question 1"]
        );
    }

    #[tokio::test]
    async fn stay_repeats_the_scene() {
        let dialog = Dialog::new("Quiz")
            .router(
                Router::new()
                    .relation(Relation::to("q1").filter(filters::command("start")))
                    .relation(Relation::stay().filter(filters::command("repeat"))),
            )
            .scene("q1", Scene::new().message("Question 1"));

        let dispatcher = Dispatcher::builder().dialog(dialog).build().unwrap();
        let transport = Arc::new(RecordingTransport::default());

        dispatcher
            .handle_update(transport.clone(), Event::message(1, 1, "/start"))
            .await
            .unwrap();
        dispatcher
            .handle_update(transport.clone(), Event::message(1, 1, "/repeat"))
            .await
            .unwrap();

        assert_eq!(transport.texts(), vec!["Question 1", "Question 1"]);
        assert_eq!(
            dispatcher.storage().history(1, 1).await.unwrap(),
            vec!["Quiz.q1"]
        );
    }

    #[tokio::test]
    async fn stay_does_not_match_without_a_scene() {
        let dialog = Dialog::new("Quiz")
            .router(Router::new().relation(Relation::stay().filter(filters::command("repeat"))));

        let dispatcher = Dispatcher::builder().dialog(dialog).build().unwrap();
        let transport = Arc::new(RecordingTransport::default());

        let outcome = dispatcher
            .handle_update(transport.clone(), Event::message(1, 1, "/repeat"))
            .await
            .unwrap();

        assert_eq!(outcome, Outcome::Unhandled);
    }

    #[tokio::test]
    async fn hooks_run_in_order() {
        let calls = Arc::new(Mutex::new(Vec::new()));

        let on_transition = {
            let calls = calls.clone();
            move |_: Context| {
                let calls = calls.clone();
                async move {
                    calls.lock().unwrap().push("transition");
                    Ok::<(), Error>(())
                }
            }
        };
        let on_exit = {
            let calls = calls.clone();
            move |ctx: Context| {
                let calls = calls.clone();
                async move {
                    assert_eq!(ctx.next_scene(), Some("MyDialog.scene2"));
                    calls.lock().unwrap().push("exit");
                    Ok::<(), Error>(())
                }
            }
        };
        let on_enter = {
            let calls = calls.clone();
            move |ctx: Context| {
                let calls = calls.clone();
                async move {
                    assert_eq!(ctx.previous_scene(), Some("MyDialog.scene1"));
                    assert_eq!(ctx.current_scene(), Some("MyDialog.scene2"));
                    calls.lock().unwrap().push("enter");
                    Ok::<(), Error>(())
                }
            }
        };

        let dialog = Dialog::new("MyDialog")
            .scene(
                "scene1",
                Scene::new()
                    .relation(
                        Relation::to("scene2")
                            .filter(filters::exact(&["scene2"]))
                            .on_transition(on_transition),
                    )
                    .on_exit(on_exit),
            )
            .scene("scene2", Scene::new().on_enter(on_enter));

        let dispatcher = Dispatcher::builder().dialog(dialog).build().unwrap();
        let transport = Arc::new(RecordingTransport::default());

        dispatcher
            .storage()
            .push_scene(1, 1, "MyDialog.scene1")
            .await
            .unwrap();
        dispatcher
            .handle_update(transport.clone(), Event::message(1, 1, "scene2"))
            .await
            .unwrap();

        assert_eq!(*calls.lock().unwrap(), vec!["transition", "exit", "enter"]);
    }

    #[tokio::test]
    async fn stale_storage_names_are_ignored() {
        let dispatcher = Dispatcher::builder()
            .dialog(two_scene_dialog())
            .build()
            .unwrap();
        let transport = Arc::new(RecordingTransport::default());

        dispatcher
            .storage()
            .push_scene(1, 1, "Ghost.scene")
            .await
            .unwrap();

        let outcome = dispatcher
            .handle_update(transport.clone(), Event::message(1, 1, "/start"))
            .await
            .unwrap();

        assert_eq!(outcome, Outcome::Handled);
        assert_eq!(
            dispatcher.storage().current_scene(1, 1).await.unwrap().as_deref(),
            Some("MyDialog.scene1")
        );
    }

    #[tokio::test]
    async fn dynamic_messages_see_the_context() {
        let dialog = Dialog::new("MyDialog")
            .router(Router::new().relation(Relation::to("echo").filter(filters::always)))
            .scene(
                "echo",
                Scene::new().messages_with(|ctx: Context| async move {
                    vec![OutgoingMessage::text(format!("you said: {}", ctx.text()))]
                }),
            );

        let dispatcher = Dispatcher::builder().dialog(dialog).build().unwrap();
        let transport = Arc::new(RecordingTransport::default());

        dispatcher
            .handle_update(transport.clone(), Event::message(1, 1, "hello"))
            .await
            .unwrap();

        assert_eq!(transport.texts(), vec!["you said: hello"]);
    }
}
