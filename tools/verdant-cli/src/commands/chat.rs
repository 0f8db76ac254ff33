//! Tea sommelier chat command.

use anyhow::Result;
use console::style;
use dialoguer::Input;

use verdant_sommelier::{converse, ScriptedSommelier, Transcript, GREETING};

use super::ChatArgs;
use crate::context::Context;

/// Run the chat command.
///
/// Uses the offline scripted sommelier; a generative backend plugs in
/// through the same [`verdant_sommelier::SommelierBackend`] seam.
pub async fn run(args: ChatArgs, ctx: &mut Context) -> Result<()> {
    let backend = ScriptedSommelier::new();
    let mut transcript = Transcript::new();

    if let Some(message) = args.message {
        let reply = converse(&backend, &mut transcript, message).await;
        if ctx.output.is_json() {
            ctx.output.json(transcript.messages());
        } else {
            say(&reply);
        }
        return Ok(());
    }

    say(GREETING);
    ctx.output.info("Type your question; an empty line ends the session.");

    loop {
        let message: String = Input::new()
            .with_prompt("You")
            .allow_empty(true)
            .interact_text()?;
        if message.trim().is_empty() {
            ctx.output.info("Do return when your cup needs refilling.");
            return Ok(());
        }

        let reply = converse(&backend, &mut transcript, message).await;
        say(&reply);
    }
}

fn say(text: &str) {
    println!("{} {}", style("Sommelier:").green().bold(), text);
}
