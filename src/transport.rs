// Copyright 2025 - Andriel Ferreira
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Transport module.
//!
//! The outgoing side of the host SDK seam. The dispatcher never talks to a
//! bot API itself: it hands every [`OutgoingMessage`] to the [`Transport`]
//! the host passed into [`Dispatcher::handle_update`].
//!
//! [`Dispatcher::handle_update`]: crate::Dispatcher::handle_update

use async_trait::async_trait;

use crate::{OutgoingMessage, Result};

/// Delivers outbound messages through the host's bot SDK.
///
/// Implementations wrap whatever client the host already owns and map
/// [`OutgoingMessage`] onto its send calls. SDK failures should be wrapped
/// with [`Error::transport`].
///
/// [`Error::transport`]: crate::Error::transport
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    /// Sends a message to a chat.
    async fn send_message(&self, chat_id: i64, message: &OutgoingMessage) -> Result<()>;
}
