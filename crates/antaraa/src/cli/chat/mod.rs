use crate::svc::chat::Chat;
use anyhow::{Context, Result};
use antaraa_core::config::Config;
use antaraa_core::typing::TypingPresenter;

mod commands;
mod compl;
mod repl;

/// Executes the chat command, starting an interactive REPL session.
pub async fn execute(model: Option<String>, accept_notice: bool, config: &Config) -> Result<()> {
    let mut chat = Chat::new(config, model).context("Failed to initialize chat service")?;
    if accept_notice {
        chat.session_mut().acknowledge_notice();
    }

    let presenter = TypingPresenter::from(&config.typing);
    repl::run(&mut chat, &presenter).await
}
