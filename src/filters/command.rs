// Copyright 2025 - Andriel Ferreira
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use async_trait::async_trait;

use crate::{Context, EventKind, Filter};

#[derive(Clone)]
pub struct Command {
    pub(crate) prefixes: Vec<String>,
    pub(crate) command: String,
}

#[async_trait]
impl Filter for Command {
    async fn check(&self, ctx: Context) -> bool {
        if ctx.event().kind() != EventKind::Message {
            return false;
        }

        let pre_pat = format!("^({})(?i)", self.prefixes.join("|"));
        let pat = format!(r"{0}({1})($|\s)", pre_pat, self.command);

        regex::Regex::new(&pat).unwrap().is_match(ctx.text())
    }
}
