// Copyright 2025 - Andriel Ferreira
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

mod and;
mod command;
mod not;
mod or;

pub use and::And;
pub use command::Command;
pub use not::Not;
pub use or::Or;

use crate::{Context, EventKind, Filter};

/// Default prefixes for commands.
pub const DEFAULT_PREFIXES: [&str; 2] = ["/", "!"];

/// Always pass.
pub async fn always(_: Context) -> bool {
    true
}

/// Never pass.
pub async fn never(_: Context) -> bool {
    false
}

/// Pass if `first` or `other` pass.
pub fn or<F: Filter, O: Filter>(first: F, other: O) -> impl Filter {
    first.or(other)
}

/// Pass if `first` and `second` pass.
pub fn and<F: Filter, S: Filter>(first: F, second: S) -> impl Filter {
    first.and(second)
}

/// Pass if `filter` don't pass.
pub fn not<F: Filter>(filter: F) -> impl Filter {
    filter.not()
}

/// Pass if the message contains the specified text.
pub fn text(pat: impl Into<String>) -> impl Filter {
    let pat = pat.into();

    move |ctx: Context| {
        let pat = pat.clone();

        async move { ctx.event().kind() == EventKind::Message && ctx.text().contains(&pat) }
    }
}

/// Pass if the message text equals any of the specified options.
pub fn exact(options: &[&str]) -> impl Filter {
    let options = options.iter().map(|o| o.to_string()).collect::<Vec<_>>();

    move |ctx: Context| {
        let options = options.clone();

        async move {
            ctx.event().kind() == EventKind::Message && options.iter().any(|o| o == ctx.text())
        }
    }
}

/// Pass if the message text or query data matches the specified pattern.
///
/// Panics at construction if `pat` is not a valid regex.
pub fn regex(pat: &str) -> impl Filter {
    let re = regex::Regex::new(pat).expect("Invalid regex pattern");

    move |ctx: Context| {
        let re = re.clone();

        async move { re.is_match(ctx.text()) }
    }
}

/// Pass if the message matches the specified command.
///
/// This filter is a custom [`regex`] filter, so it accepts a bit of regex syntax.
pub fn command(pat: &str) -> Command {
    Command {
        prefixes: DEFAULT_PREFIXES.into_iter().map(regex::escape).collect(),
        command: pat.to_owned(),
    }
}

/// Pass if the message matches the specified command with custom prefixes.
///
/// This filter is a custom [`regex`] filter, so it accepts a bit of regex syntax.
pub fn command_with(pres: &[&str], pat: &str) -> Command {
    Command {
        prefixes: pres.iter().map(|pre| regex::escape(pre)).collect(),
        command: pat.to_owned(),
    }
}

/// Pass if the message matches any of the specified commands.
pub fn commands(pats: &[&str]) -> Command {
    Command {
        prefixes: DEFAULT_PREFIXES.into_iter().map(regex::escape).collect(),
        command: pats.join("|"),
    }
}

/// Pass if the message matches any of the specified commands with custom prefixes.
///
/// This filter is a custom [`regex`] filter, so it accepts a bit of regex syntax.
pub fn commands_with(pres: &[&str], pats: &[&str]) -> Command {
    Command {
        prefixes: pres.iter().map(|pre| regex::escape(pre)).collect(),
        command: pats.join("|"),
    }
}

/// Pass if the conversation is in the specified scene.
pub fn in_scene(full_name: impl Into<String>) -> impl Filter {
    let full_name = full_name.into();

    move |ctx: Context| {
        let full_name = full_name.clone();

        async move { ctx.current_scene() == Some(full_name.as_str()) }
    }
}

/// Pass if the conversation is in any scene.
pub async fn any_scene(ctx: Context) -> bool {
    ctx.current_scene().is_some()
}

/// Pass if the conversation is not in a scene yet.
pub async fn no_scene(ctx: Context) -> bool {
    ctx.current_scene().is_none()
}
