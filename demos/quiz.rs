// Copyright 2025 - Andriel Ferreira
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A small quiz bot played in the terminal.
//!
//! The transport prints to stdout instead of talking to a bot API, so the
//! whole dialog can be tried without any token: type `/start` to begin,
//! `/score`, `/repeat` and `/back` while playing, `Ctrl+D` to quit.

use std::{
    io::BufRead,
    sync::{
        atomic::{AtomicI64, Ordering},
        Arc,
    },
};

use scenery::prelude::*;

/// Delivers messages to stdout.
struct ConsoleTransport;

#[async_trait::async_trait]
impl Transport for ConsoleTransport {
    async fn send_message(&self, _chat_id: i64, message: &OutgoingMessage) -> scenery::Result<()> {
        println!("bot: {}", message.content());

        if let Some(Keyboard::Reply(rows)) = message.attached_keyboard() {
            for row in rows {
                let labels = row
                    .iter()
                    .map(|button| format!("[{}]", button.label()))
                    .collect::<Vec<_>>()
                    .join(" ");

                println!("     {}", labels);
            }
        }

        Ok(())
    }
}

fn build_dispatcher(score: Arc<AtomicI64>) -> scenery::Result<Dispatcher> {
    let correct = {
        let score = score.clone();
        move |ctx: Context| {
            let score = score.clone();
            async move {
                score.fetch_add(3, Ordering::Relaxed);
                ctx.reply("Correct! ✅").await
            }
        }
    };

    let incorrect = {
        let score = score.clone();
        move |ctx: Context| {
            let score = score.clone();
            async move {
                score.fetch_sub(3, Ordering::Relaxed);
                ctx.reply("Incorrect! ❌").await
            }
        }
    };

    let score_message = {
        let score = score.clone();
        move |_: Context| {
            let score = score.clone();
            async move {
                vec![OutgoingMessage::text(format!(
                    "Your score: {}",
                    score.load(Ordering::Relaxed)
                ))]
            }
        }
    };

    let end_message = {
        let score = score.clone();
        move |_: Context| {
            let score = score.clone();
            async move {
                vec![OutgoingMessage::text(format!(
                    "Thank you for playing!\nYour score: {} points!",
                    score.load(Ordering::Relaxed)
                ))]
            }
        }
    };

    let quiz = Dialog::new("Quiz")
        .router(
            Router::new()
                .relation(Relation::to("start").filter(filter::command("start")))
                .relation(
                    Relation::to("score")
                        .filter(filter::command("score"))
                        .filter(filter::any_scene),
                )
                .relation(
                    Relation::stay()
                        .filter(filter::command("repeat"))
                        .filter(filter::any_scene),
                )
                .relation(
                    Relation::back()
                        .filter(filter::command("back"))
                        .filter(filter::any_scene),
                )
                .relation(Relation::to("incorrect").filter(filter::any_scene))
                .relation(Relation::to("not_started").filter(filter::no_scene)),
        )
        .scene(
            "start",
            Scene::new()
                .message(OutgoingMessage::text("Welcome to the game!").keyboard(Keyboard::Remove))
                .relation(Relation::to("Questions.q1").filter(filter::always))
                .transitional(true),
        )
        .scene("end", Scene::new().messages_with(end_message))
        .scene(
            "score",
            Scene::new().messages_with(score_message).can_stay(false),
        )
        .scene("incorrect", Scene::new().on_enter(incorrect).can_stay(false))
        .scene(
            "not_started",
            Scene::new()
                .message("You haven't started the game!\nType /start to start the game!")
                .can_stay(false),
        );

    let questions = Dialog::new("Questions")
        .scene(
            "q1",
            Scene::new()
                .message(
                    OutgoingMessage::text("Question 1:\n2 + 2 = ?").keyboard(Keyboard::Reply(
                        vec![vec![Button::new("4"), Button::new("Four")]],
                    )),
                )
                .relation(
                    Relation::to("q2")
                        .filter(filter::exact(&["4", "Four"]))
                        .on_transition(correct.clone()),
                ),
        )
        .scene(
            "q2",
            Scene::new().message("Question 2:\n3 + 3 = ?").relation(
                Relation::to("q3")
                    .filter(filter::exact(&["6", "Six"]))
                    .on_transition(correct.clone()),
            ),
        )
        .scene(
            "q3",
            Scene::new().message("Question 3:\n6 + 3 = ?").relation(
                Relation::to("Quiz.end")
                    .filter(filter::exact(&["9", "Nine"]))
                    .on_transition(correct),
            ),
        );

    Dispatcher::builder().dialog(quiz).dialog(questions).build()
}

#[tokio::main]
async fn main() -> scenery::Result<()> {
    let score = Arc::new(AtomicI64::new(0));
    let dispatcher = build_dispatcher(score)?;
    let transport = Arc::new(ConsoleTransport);

    println!("Quiz bot. Type /start to begin, Ctrl+D to quit.");

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let text = line.trim();

        if text.is_empty() {
            continue;
        }

        dispatcher
            .handle_update(transport.clone(), Event::message(0, 0, text))
            .await?;
    }

    Ok(())
}
