//! Static blocks of text shown around the conversation.
use super::presenter::{ChatMessageType, style_chat_text};
use antaraa_core::crisis::{CRISIS_PANEL_HEADLINE, CRISIS_PANEL_TITLE, CRISIS_RESOURCES};
use antaraa_core::{APP_MEANING, APP_NAME, APP_SUBTITLE};
use console::style;

const REFLECTION_PROMPTS: [&str; 3] = [
    "What am I grateful for today?",
    "What emotions am I currently feeling?",
    "What do I need to let go of?",
];

const NOTICE_LINES: [&str; 3] = [
    "I provide companionship, not medical advice",
    "In emergencies, contact local crisis services",
    "Conversations are private but not clinically secure",
];

pub fn banner() -> String {
    format!(
        "{}\n{}",
        style_chat_text(APP_NAME, ChatMessageType::Title),
        style_chat_text(
            &format!("{APP_MEANING} · {APP_SUBTITLE}"),
            ChatMessageType::Footer
        )
    )
}

pub fn safety_notice() -> String {
    let mut out = format!(
        "{}\nThis is not a substitute for professional therapy.\n\nPlease understand:\n",
        style("Important Notice").yellow().bold()
    );
    for line in NOTICE_LINES {
        out.push_str(&format!("  - {line}\n"));
    }
    out.push_str("\nBy continuing, you acknowledge these boundaries.");
    out
}

pub fn crisis_panel() -> String {
    let mut out = format!(
        "{}\n{}\n",
        style_chat_text(&format!("🚨 {CRISIS_PANEL_TITLE}"), ChatMessageType::Alert),
        style_chat_text(CRISIS_PANEL_HEADLINE, ChatMessageType::Title)
    );
    for resource in CRISIS_RESOURCES.iter() {
        let label = style(resource.label).bold();
        match resource.link {
            Some(link) => out.push_str(&format!("  {label}: {} ({link})\n", resource.detail)),
            None => out.push_str(&format!("  {label}: {}\n", resource.detail)),
        }
    }
    out
}

pub fn reflection_prompts() -> String {
    let mut out = format!(
        "{}\n",
        style_chat_text("Reflection Prompts", ChatMessageType::Title)
    );
    for prompt in REFLECTION_PROMPTS {
        out.push_str(&format!("  {}\n", style_chat_text(prompt, ChatMessageType::Footer)));
    }
    out
}
