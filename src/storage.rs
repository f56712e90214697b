// Copyright 2025 - Andriel Ferreira
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Storage module.
//!
//! Per-conversation scene state. Each `(chat_id, user_id)` pair owns a
//! history of scene full names; the last entry is the current scene.

use std::{collections::HashMap, path::Path, sync::Arc};

use async_trait::async_trait;
use bincode::{
    config,
    de::Decoder,
    enc::Encoder,
    error::{DecodeError, EncodeError},
    Decode, Encode,
};
use tokio::sync::RwLock;

use crate::Result;

/// Per-conversation scene history.
///
/// `history` and `set_history` are the storage primitives; everything else
/// has default implementations on top of them. Implementations must be safe
/// for concurrent conversations.
#[async_trait]
pub trait SceneStorage: Send + Sync + 'static {
    /// Returns the scene history of a conversation, oldest first.
    async fn history(&self, chat_id: i64, user_id: i64) -> Result<Vec<String>>;

    /// Replaces the scene history of a conversation.
    async fn set_history(&self, chat_id: i64, user_id: i64, history: Vec<String>) -> Result<()>;

    /// Sets the conversation's current scene: appends the full name to the
    /// history, unless it already is the last entry.
    ///
    /// Returns the updated history.
    async fn push_scene(&self, chat_id: i64, user_id: i64, full_name: &str) -> Result<Vec<String>> {
        let mut history = self.history(chat_id, user_id).await?;

        if history.last().map(String::as_str) != Some(full_name) {
            history.push(full_name.to_string());
        }

        self.set_history(chat_id, user_id, history.clone()).await?;

        Ok(history)
    }

    /// Returns the full name of the conversation's current scene.
    async fn current_scene(&self, chat_id: i64, user_id: i64) -> Result<Option<String>> {
        let mut history = self.history(chat_id, user_id).await?;

        Ok(history.pop())
    }

    /// Returns the full name of the conversation's previous scene.
    async fn previous_scene(&self, chat_id: i64, user_id: i64) -> Result<Option<String>> {
        let mut history = self.history(chat_id, user_id).await?;

        history.pop();
        Ok(history.pop())
    }
}

/// In-memory scene storage.
///
/// The default storage. State dies with the process unless snapshotted with
/// [`MemoryStorage::save_to_file`] and restored with
/// [`MemoryStorage::load_file_or_create`].
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    /// The inner storage.
    inner: Arc<RwLock<InnerStorage>>,
}

impl MemoryStorage {
    /// Creates a new empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a previous storage snapshot from a file or create an empty
    /// storage if it doesn't exist.
    pub fn load_file_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        // try to open the snapshot file.
        if let Ok(mut file) = std::fs::File::open(&path) {
            // get the standard config.
            let config = config::standard();

            // construct the inner storage.
            let inner: InnerStorage = bincode::decode_from_std_read(&mut file, config)?;

            log::debug!("loaded {} conversations from snapshot", inner.histories.len());

            Ok(Self {
                inner: Arc::new(RwLock::new(inner)),
            })
        } else {
            log::debug!("no snapshot was found, starting empty");

            Ok(Self::default())
        }
    }

    /// Try to save the storage to a file.
    pub async fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        // delete the snapshot file if it exists.
        if std::fs::exists(&path)? {
            std::fs::remove_file(&path)?;
        }

        // create the snapshot file.
        let mut file = std::fs::File::create(path)?;

        // get the standard config.
        let config = config::standard();

        // clone the inner.
        let inner = self.inner.read().await.clone();

        // write to the file.
        bincode::encode_into_std_write(inner, &mut file, config)?;

        Ok(())
    }
}

#[async_trait]
impl SceneStorage for MemoryStorage {
    async fn history(&self, chat_id: i64, user_id: i64) -> Result<Vec<String>> {
        let inner = self.inner.read().await;

        Ok(inner
            .histories
            .get(&(chat_id, user_id))
            .cloned()
            .unwrap_or_default())
    }

    async fn set_history(&self, chat_id: i64, user_id: i64, history: Vec<String>) -> Result<()> {
        let mut inner = self.inner.write().await;

        if history.is_empty() {
            inner.histories.remove(&(chat_id, user_id));
        } else {
            inner.histories.insert((chat_id, user_id), history);
        }

        Ok(())
    }
}

/// The inner storage.
#[derive(Clone, Debug, Default)]
struct InnerStorage {
    /// The scene history map.
    histories: HashMap<(i64, i64), Vec<String>>,
}

impl Encode for InnerStorage {
    fn encode<E: Encoder>(&self, encoder: &mut E) -> std::result::Result<(), EncodeError> {
        Encode::encode(&self.histories, encoder)?;

        Ok(())
    }
}

impl<Context> Decode<Context> for InnerStorage {
    fn decode<D: Decoder<Context = Context>>(decoder: &mut D) -> std::result::Result<Self, DecodeError> {
        let histories = Decode::decode(decoder)?;

        Ok(Self { histories })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn push_deduplicates_consecutive() {
        let storage = MemoryStorage::new();

        storage.push_scene(1, 1, "Quiz.q1").await.unwrap();
        storage.push_scene(1, 1, "Quiz.q1").await.unwrap();
        storage.push_scene(1, 1, "Quiz.q2").await.unwrap();
        storage.push_scene(1, 1, "Quiz.q1").await.unwrap();

        assert_eq!(
            storage.history(1, 1).await.unwrap(),
            vec!["Quiz.q1", "Quiz.q2", "Quiz.q1"]
        );
    }

    #[tokio::test]
    async fn current_and_previous() {
        let storage = MemoryStorage::new();

        assert_eq!(storage.current_scene(1, 1).await.unwrap(), None);

        storage.push_scene(1, 1, "Quiz.q1").await.unwrap();
        assert_eq!(storage.previous_scene(1, 1).await.unwrap(), None);

        storage.push_scene(1, 1, "Quiz.q2").await.unwrap();
        assert_eq!(
            storage.current_scene(1, 1).await.unwrap().as_deref(),
            Some("Quiz.q2")
        );
        assert_eq!(
            storage.previous_scene(1, 1).await.unwrap().as_deref(),
            Some("Quiz.q1")
        );
    }

    #[tokio::test]
    async fn conversations_are_isolated() {
        let storage = MemoryStorage::new();

        storage.push_scene(1, 1, "Quiz.q1").await.unwrap();
        storage.push_scene(1, 2, "Quiz.q2").await.unwrap();

        assert_eq!(
            storage.current_scene(1, 1).await.unwrap().as_deref(),
            Some("Quiz.q1")
        );
        assert_eq!(
            storage.current_scene(1, 2).await.unwrap().as_deref(),
            Some("Quiz.q2")
        );
    }

    #[tokio::test]
    async fn snapshot_roundtrip() {
        let path = std::env::temp_dir().join("scenery-storage-test.bin");

        let storage = MemoryStorage::new();
        storage.push_scene(1, 1, "Quiz.q1").await.unwrap();
        storage.push_scene(1, 1, "Quiz.q2").await.unwrap();
        storage.save_to_file(&path).await.unwrap();

        let restored = MemoryStorage::load_file_or_create(&path).unwrap();
        assert_eq!(
            restored.history(1, 1).await.unwrap(),
            vec!["Quiz.q1", "Quiz.q2"]
        );

        std::fs::remove_file(&path).unwrap();
    }

    #[tokio::test]
    async fn load_missing_file_starts_empty() {
        let storage =
            MemoryStorage::load_file_or_create("/nonexistent/scenery-storage.bin").unwrap();

        assert_eq!(storage.history(1, 1).await.unwrap(), Vec::<String>::new());
    }
}
