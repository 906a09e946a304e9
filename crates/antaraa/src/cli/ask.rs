use anyhow::Result;
use antaraa_core::config::Config;
use std::io::Write;
use std::time::Instant;

use crate::cli::ux::{GenerationSpinner, crisis_panel, format_footer};
use crate::svc::chat::{Chat, Reply};

/// Shares one message with the companion and prints the reply without the
/// typing effect.
pub async fn execute(text: Vec<String>, model: Option<String>, config: &Config) -> Result<()> {
    let text = text.join(" ");
    let mut chat = Chat::new(config, model)?;

    let started = Instant::now();
    let reply = answer(&mut chat, &text, &mut std::io::stdout()).await?;
    eprintln!("{}", format_footer(started.elapsed(), false, reply.degraded));
    Ok(())
}

/// Writes the crisis panel when needed, then waits for the reply and writes it.
async fn answer(chat: &mut Chat, text: &str, out: &mut impl Write) -> Result<Reply> {
    if chat.submit(text) {
        writeln!(out, "{}", crisis_panel())?;
        out.flush()?;
    }

    let spinner = GenerationSpinner::new("Reflecting...");
    let reply = chat.reply().await;
    spinner.clear();

    writeln!(out, "{}\n", reply.text)?;
    Ok(reply)
}
