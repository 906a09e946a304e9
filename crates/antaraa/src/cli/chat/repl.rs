use crate::cli::chat::commands::{CliCommand, format_message};
use crate::cli::chat::compl::Repl;
use crate::cli::ux::{
    ChatMessageType, GenerationSpinner, TerminalSink, banner, crisis_panel,
    format_abandoned_footer, format_footer, safety_notice, style_chat_text,
};
use crate::svc::chat::Chat;
use anyhow::Result;
use antaraa_core::completion::CancellationToken;
use antaraa_core::session::SessionState;
use antaraa_core::typing::TypingPresenter;
use clap::{CommandFactory, Parser};
use console::Term;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{CompletionType, Editor};
use std::time::Instant;
use tokio::task::JoinHandle;
use tracing::debug;

const ACKNOWLEDGEMENTS: [&str; 3] = ["i understand", "yes", "y"];

fn is_acknowledgement(line: &str) -> bool {
    let answer = line.trim().to_lowercase();
    ACKNOWLEDGEMENTS.contains(&answer.as_str())
}

/// Shows the safety notice until the person accepts it.
///
/// Returns `Ok(false)` if they leave instead.
fn acknowledge_notice(rl: &mut Editor<Repl, DefaultHistory>) -> Result<bool> {
    println!("\n{}\n", safety_notice());
    loop {
        match rl.readline("Type 'I understand' to continue: ") {
            Ok(line) if is_acknowledgement(&line) => return Ok(true),
            Ok(_) => println!(
                "{}",
                style_chat_text(
                    "Please acknowledge the notice to continue, or press Ctrl-D to leave.",
                    ChatMessageType::Footer
                )
            ),
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => return Ok(false),
            Err(err) => return Err(err.into()),
        }
    }
}

/// Runs the interactive REPL for the chat session.
pub async fn run(chat: &mut Chat, presenter: &TypingPresenter) -> Result<()> {
    println!("{}", banner());

    let config = rustyline::Config::builder()
        .history_ignore_dups(true)?
        .history_ignore_space(true)
        .completion_type(CompletionType::List)
        .build();

    let command_names = CliCommand::command()
        .get_subcommands()
        .flat_map(|c| c.get_name_and_visible_aliases())
        .map(|s| format!("/{s}"))
        .collect::<Vec<_>>();

    let mut rl: Editor<Repl, DefaultHistory> = Editor::with_config(config)?;
    rl.set_helper(Some(Repl { command_names }));

    if !chat.session().is_notice_acknowledged() {
        if !acknowledge_notice(&mut rl)? {
            println!("\nTake care.");
            return Ok(());
        }
        chat.session_mut().acknowledge_notice();
    }

    println!(
        "\n{}",
        style_chat_text(
            "Type '/help' for commands, '/q' to exit.",
            ChatMessageType::Footer
        )
    );
    if let Some(greeting) = chat.history().messages().first() {
        println!("\n{}", format_message(greeting));
    }

    let prompt = format!("\n{}", style_chat_text("> ", ChatMessageType::Prompt));
    loop {
        match rl.readline(&prompt) {
            Ok(line) => {
                rl.add_history_entry(&line)?;
                let trimmed_line = line.trim();

                if trimmed_line.is_empty() {
                    continue;
                }

                if trimmed_line.starts_with('/') {
                    let args = shlex::split(trimmed_line).unwrap_or_default();
                    match CliCommand::try_parse_from(args) {
                        Ok(cli_command) => {
                            if !cli_command.command.execute(chat)? {
                                println!("Bye!");
                                return Ok(());
                            }
                        }
                        Err(e) => {
                            e.print()?;
                        }
                    }
                } else {
                    process_message(chat, presenter, trimmed_line).await?;
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("Type /quit to exit.");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("\nBye!");
                return Ok(());
            }
            Err(err) => {
                return Err(err.into());
            }
        }
    }
}

/// One-line pointer back to the resources once they were shown in this
/// process. Not repeated on the turn that showed the full panel.
fn resources_reminder(session: &SessionState, shown_this_turn: bool) -> Option<String> {
    (session.crisis_surfaced() && !shown_this_turn).then(|| {
        style_chat_text(
            "Support is always available, type /resources to see it again.",
            ChatMessageType::Footer,
        )
        .to_string()
    })
}

/// Cancels the returned token on Ctrl-C. Abort the handle once the turn ends.
fn watch_interrupt() -> (CancellationToken, JoinHandle<()>) {
    let cancel_token = CancellationToken::new();
    let token = cancel_token.clone();
    let handle = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            token.cancel();
        }
    });
    (cancel_token, handle)
}

async fn process_message(chat: &mut Chat, presenter: &TypingPresenter, text: &str) -> Result<()> {
    let crisis_detected = chat.submit(text);
    if crisis_detected {
        println!("\n{}", crisis_panel());
    }

    // Ctrl-C abandons a pending reply, or skips the typing once it arrived
    let (cancel_token, ctrl_c) = watch_interrupt();

    let spinner = GenerationSpinner::new("Reflecting...");
    let started = Instant::now();
    let reply = chat.reply_until(&cancel_token).await;
    let elapsed = started.elapsed();
    spinner.clear();

    let Some(reply) = reply else {
        ctrl_c.abort();
        println!("\n{}", format_abandoned_footer(elapsed));
        return Ok(());
    };

    let term = Term::stdout();
    let label = style_chat_text("Antaraa:", ChatMessageType::Prompt);
    term.write_str(&format!("\n{label} "))?;

    let mut sink = TerminalSink::new(&term, presenter.cursor());
    let skipped = presenter.stream(&reply.text, &mut sink, &cancel_token).await;
    ctrl_c.abort();
    let skipped = skipped?;
    debug!(skipped, "Reply presented");

    println!("\n\n{}", format_footer(elapsed, skipped, reply.degraded));
    if let Some(reminder) = resources_reminder(chat.session(), crisis_detected) {
        println!("{reminder}");
    }
    Ok(())
}
