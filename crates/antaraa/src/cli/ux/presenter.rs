use console::{Style, StyledObject};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatMessageType {
    Prompt,
    Title,
    Alert,
    Footer,
    Error,
}

pub fn style_chat_text(text: &str, style: ChatMessageType) -> StyledObject<&str> {
    let style_obj = match style {
        ChatMessageType::Prompt => Style::new().green().bold(),
        ChatMessageType::Title => Style::new().bold(),
        ChatMessageType::Alert => Style::new().red().bold(),
        ChatMessageType::Footer => Style::new().white().dim(),
        ChatMessageType::Error => Style::new().red().bold(),
    };
    style_obj.apply_to(text)
}

/// Summary line printed under each reply.
pub fn format_footer(elapsed: Duration, skipped: bool, degraded: bool) -> String {
    let mut footer = if degraded {
        String::from("◼ Could not reach the model")
    } else {
        String::from("◼ Completed")
    };
    if skipped {
        footer.push_str(" (skipped typing)");
    }
    footer.push('.');
    if !degraded {
        footer.push_str(&format!(" {:.2}s to reply.", elapsed.as_secs_f32()));
    }

    style_chat_text(&footer, ChatMessageType::Footer).to_string()
}

/// Summary line printed when the person stops waiting for a reply.
pub fn format_abandoned_footer(elapsed: Duration) -> String {
    let footer = format!(
        "◼ Stopped waiting after {:.2}s. Your message is kept, share more when ready.",
        elapsed.as_secs_f32()
    );
    style_chat_text(&footer, ChatMessageType::Footer).to_string()
}
