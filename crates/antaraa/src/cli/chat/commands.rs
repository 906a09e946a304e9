use crate::cli::ux::{ChatMessageType, crisis_panel, reflection_prompts, style_chat_text};
use crate::svc::chat::Chat;
use anyhow::Result;
use antaraa_core::APP_NAME;
use antaraa_core::completion::{ChatMessage, Role};
use antaraa_core::session::DEFAULT_EXPORT_FILE;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

// -------------
// REPL commands
// -------------
#[derive(Parser, Debug)]
#[command(multicall = true)]
pub struct CliCommand {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Start a new conversation, forgetting the current one
    #[command(alias = "reset")]
    New,
    /// Save the conversation as plain text
    Export {
        /// File to write, defaults to antaraa_session.txt
        path: Option<PathBuf>,
    },
    /// Show the conversation so far
    History,
    /// Show crisis support resources
    Resources,
    /// Show a few prompts for self-reflection
    Prompts,
    /// Exit the chat session
    #[command(alias = "q", alias = "quit")]
    Exit,
}

impl Command {
    /// Executes a REPL command.
    ///
    /// Returns `Ok(false)` if the REPL should exit.
    pub fn execute(self, chat: &mut Chat) -> Result<bool> {
        match self {
            Command::New => {
                chat.new_session();
                println!("Started a new conversation.\n");
                if let Some(greeting) = chat.history().messages().first() {
                    println!("{}", format_message(greeting));
                }
            }
            Command::Export { path } => {
                let path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_FILE));
                match chat.export_to(&path) {
                    Ok(()) => println!("Conversation saved to {}", path.display()),
                    Err(e) => eprintln!(
                        "{}",
                        style_chat_text(&format!("{e:#}"), ChatMessageType::Error)
                    ),
                }
            }
            Command::History => println!("{}", format_history(chat.history().messages())),
            Command::Resources => println!("{}", crisis_panel()),
            Command::Prompts => println!("{}", reflection_prompts()),
            Command::Exit => return Ok(false),
        }
        Ok(true)
    }
}

fn speaker(role: Role) -> &'static str {
    match role {
        Role::User => "You",
        Role::Assistant => APP_NAME,
        Role::System => "System",
    }
}

pub fn format_message(message: &ChatMessage) -> String {
    let label = format!("{}:", speaker(message.role));
    format!(
        "{} {}",
        style_chat_text(&label, ChatMessageType::Prompt),
        message.content
    )
}

pub fn format_history(messages: &[ChatMessage]) -> String {
    messages
        .iter()
        .map(format_message)
        .collect::<Vec<_>>()
        .join("\n\n")
}
