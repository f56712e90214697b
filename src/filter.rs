// Copyright 2025 - Andriel Ferreira
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Filters module.

use async_trait::async_trait;
use futures_util::Future;

pub use crate::filters::*;
use crate::Context;

/// A filter.
///
/// Decides whether a [`Relation`] matches the current update. Implemented
/// for any `async fn(Context) -> bool`.
///
/// [`Relation`]: crate::Relation
#[async_trait]
pub trait Filter: CloneFilter + Send + Sync + 'static {
    /// Checks if the update should trigger the relation.
    async fn check(&self, ctx: Context) -> bool;

    /// Wrappes `self` and `second` into [`And`] filter.
    fn and<S: Filter>(self, second: S) -> And
    where
        Self: Sized,
    {
        And {
            first: Box::new(self),
            second: Box::new(second),
        }
    }

    /// Wrappes `self` and `other` into [`Or`] filter.
    fn or<O: Filter>(self, other: O) -> Or
    where
        Self: Sized,
    {
        Or {
            first: Box::new(self),
            other: Box::new(other),
        }
    }

    /// Wrappes `self` into [`Not`] filter.
    fn not(self) -> Not
    where
        Self: Sized,
    {
        Not {
            filter: Box::new(self),
        }
    }
}

#[async_trait]
impl<T, F> Filter for T
where
    T: Fn(Context) -> F + Clone + Send + Sync + 'static,
    F: Future<Output = bool> + Send + 'static,
{
    async fn check(&self, ctx: Context) -> bool {
        self(ctx).await
    }
}

/// A trait that allows cloning the filter.
pub trait CloneFilter {
    /// Clones the filter.
    fn clone_filter(&self) -> Box<dyn Filter>;
}

impl<T> CloneFilter for T
where
    T: Filter + Clone + 'static,
{
    fn clone_filter(&self) -> Box<dyn Filter> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn Filter> {
    fn clone(&self) -> Self {
        self.clone_filter()
    }
}
