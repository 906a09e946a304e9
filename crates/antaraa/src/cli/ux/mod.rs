mod panels;
mod presenter;
mod progress;
mod typing;

pub use panels::{banner, crisis_panel, reflection_prompts, safety_notice};
pub use presenter::{ChatMessageType, format_abandoned_footer, format_footer, style_chat_text};
pub use progress::GenerationSpinner;
pub use typing::TerminalSink;

use console::style;

/// Prints a formatted error message to stderr.
pub fn present_error(error: anyhow::Error) {
    let error_text = style("ERROR:").red().bold();
    eprintln!("\n{error_text} {error:#}");
}
