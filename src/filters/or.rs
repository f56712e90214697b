// Copyright 2025 - Andriel Ferreira
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use async_trait::async_trait;

use crate::{Context, Filter};

#[derive(Clone)]
pub struct Or {
    pub(crate) first: Box<dyn Filter>,
    pub(crate) other: Box<dyn Filter>,
}

#[async_trait]
impl Filter for Or {
    async fn check(&self, ctx: Context) -> bool {
        self.first.check(ctx.clone()).await || self.other.check(ctx).await
    }
}
