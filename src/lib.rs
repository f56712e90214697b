// Copyright 2025 - Andriel Ferreira
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Scenery is a small framework for building scene-based chat bot dialogs.
//!
//! A [`Dialog`] groups named [`Scene`]s and a [`Router`]; scenes declare the
//! messages they send and the [`Relation`]s that lead out of them. The
//! [`Dispatcher`] resolves every relation target at registration time and,
//! for each incoming [`Event`], moves the conversation between scenes and
//! delivers the scene's messages through a host-provided [`Transport`].
//!
//! The main module of the library.

mod context;
mod dialog;
mod dispatcher;
mod error;
mod event;
pub mod filter;
pub(crate) mod filters;
pub mod hook;
mod message;
mod relation;
mod router;
mod scene;
pub mod storage;
mod transport;
pub(crate) mod utils;

pub use context::Context;
pub use dialog::Dialog;
pub use dispatcher::{Dispatcher, DispatcherBuilder, Outcome};
pub use error::Error;
pub use event::{Event, EventKind};
pub use filter::Filter;
pub use hook::Hook;
pub use message::{Button, Keyboard, MessageProvider, OutgoingMessage};
pub use relation::{Relation, Target};
pub use router::Router;
pub use scene::Scene;
pub use storage::{MemoryStorage, SceneStorage};
pub use transport::Transport;

/// Common types and traits.
pub mod prelude {
    pub use crate::{
        filter::{and, not, or},
        *,
    };
}

/// [`Result`] with [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Wait for a `Ctrl+C` signal and keep the process alive.
pub async fn wait_for_ctrl_c() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to listen for Ctrl+C signal");
}

/// Wait for a `Ctrl+C` signal and keep the process alive.
///
/// Same as [`wait_for_ctrl_c`].
pub async fn idle() {
    wait_for_ctrl_c().await
}
