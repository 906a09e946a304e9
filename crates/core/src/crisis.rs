//! Keyword based crisis detection and the support resources shown for it.
//!
//! Matching is a case-insensitive substring test with no negation handling,
//! "I would never kill myself" still matches.
use crate::session::ConversationStore;

pub const CRISIS_KEYWORDS: [&str; 5] = [
    "suicide",
    "kill myself",
    "end it all",
    "harm myself",
    "abuse",
];

/// Returns true if the lower-cased `text` contains any crisis keyword.
pub fn scan(text: &str) -> bool {
    let lowered = text.to_lowercase();
    CRISIS_KEYWORDS.iter().any(|kw| lowered.contains(kw))
}

/// Scans the newest message of `history`, only when it was written by the user.
pub fn scan_latest(history: &ConversationStore) -> bool {
    history.last_user_message().is_some_and(scan)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrisisResource {
    pub label: &'static str,
    pub detail: &'static str,
    pub link: Option<&'static str>,
}

pub const CRISIS_PANEL_TITLE: &str = "Immediate Support Resources";
pub const CRISIS_PANEL_HEADLINE: &str = "You're not alone - help is available:";

pub const CRISIS_RESOURCES: [CrisisResource; 4] = [
    CrisisResource {
        label: "International Suicide Hotlines",
        detail: "findahelpline.com",
        link: Some("https://findahelpline.com/"),
    },
    CrisisResource {
        label: "India Crisis Helpline",
        detail: "9152987821 or Vandrevala Foundation",
        link: Some("https://www.vandrevalafoundation.com/"),
    },
    CrisisResource {
        label: "Crisis Text Line",
        detail: "Text HOME to 741741",
        link: None,
    },
    CrisisResource {
        label: "Talk to a licensed therapist",
        detail: "BetterHelp",
        link: Some("https://www.betterhelp.com/"),
    },
];
