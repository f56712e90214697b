// Copyright 2025 - Andriel Ferreira
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Error module.

/// A boxed error from host code (transports, hooks, storages).
pub type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The error type for this library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A relation points to a scene that was never registered.
    #[error("scene \"{0}\" not found")]
    UnknownScene(String),

    /// Two scenes were registered under the same full name.
    #[error("scene \"{0}\" is already registered")]
    DuplicateScene(String),

    /// A scene or dialog name is empty or contains a `.`.
    #[error("invalid scene or dialog name: \"{0}\"")]
    InvalidName(String),

    /// The scene storage failed.
    #[error("storage: {0}")]
    Storage(#[source] BoxedError),

    /// The transport failed to deliver a message.
    #[error("transport: {0}")]
    Transport(#[source] BoxedError),

    /// A hook or message provider failed.
    #[error("hook: {0}")]
    Hook(#[source] BoxedError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Encode(#[from] bincode::error::EncodeError),

    #[error(transparent)]
    Decode(#[from] bincode::error::DecodeError),
}

impl Error {
    /// Wraps a host storage error.
    pub fn storage<E: Into<BoxedError>>(err: E) -> Self {
        Self::Storage(err.into())
    }

    /// Wraps a host transport error.
    pub fn transport<E: Into<BoxedError>>(err: E) -> Self {
        Self::Transport(err.into())
    }

    /// Wraps a hook error.
    pub fn hook<E: Into<BoxedError>>(err: E) -> Self {
        Self::Hook(err.into())
    }
}
