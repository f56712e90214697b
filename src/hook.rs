// Copyright 2025 - Andriel Ferreira
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Hook module.

use async_trait::async_trait;
use futures_util::Future;

use crate::{Context, Result};

/// A scene or relation callback.
///
/// Runned on scene enter/exit and on relation transitions. Implemented for
/// any `async fn(Context) -> Result<()>`.
#[async_trait]
pub trait Hook: CloneHook + Send + Sync + 'static {
    /// Runs the hook.
    async fn run(&self, ctx: Context) -> Result<()>;
}

#[async_trait]
impl<T, F> Hook for T
where
    T: Fn(Context) -> F + Clone + Send + Sync + 'static,
    F: Future<Output = Result<()>> + Send + 'static,
{
    async fn run(&self, ctx: Context) -> Result<()> {
        self(ctx).await
    }
}

/// A trait that allows cloning the hook.
pub trait CloneHook {
    /// Clones the hook.
    fn clone_hook(&self) -> Box<dyn Hook>;
}

impl<T> CloneHook for T
where
    T: Hook + Clone,
{
    fn clone_hook(&self) -> Box<dyn Hook> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn Hook> {
    fn clone(&self) -> Self {
        self.clone_hook()
    }
}
