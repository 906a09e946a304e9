use anyhow::{Context, Result};
use antaraa_core::completion::{CancellationToken, Role};
use antaraa_core::config::Config;
use antaraa_core::gateway::CompletionGateway;
use antaraa_core::get_completion_llm;
use antaraa_core::session::{ConversationStore, SessionState};
use antaraa_core::{crisis, normalize};
use std::path::Path;
use tracing::{debug, info};

/// Assistant reply, already recorded in the history.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub text: String,
    /// The endpoint failed and `text` is the fallback reply.
    pub degraded: bool,
}

/// Outcome of one user turn.
#[derive(Debug, Clone, PartialEq)]
pub struct Turn {
    pub crisis_detected: bool,
    pub reply: String,
    pub degraded: bool,
}

/// Conversation between a person and the companion.
pub struct Chat {
    session: SessionState,
    gateway: CompletionGateway,
}

impl Chat {
    pub fn new(config: &Config, model: Option<String>) -> Result<Self> {
        let model_config = if let Some(model_name) = model {
            config
                .models
                .get(model_name.as_str())
                .cloned()
                .context(format!("Model '{model_name}' not found in config."))?
        } else {
            config.chat.model.clone()
        };

        let model = get_completion_llm(model_config).context("Failed to initialize chat model")?;
        Ok(Self::with_gateway(CompletionGateway::new(
            model,
            config.chat.profile.clone(),
        )))
    }

    pub fn with_gateway(gateway: CompletionGateway) -> Self {
        Self {
            session: SessionState::new(),
            gateway,
        }
    }

    /// Records the user text and scans it for crisis keywords.
    ///
    /// Returns true when support resources should be shown. Detection never
    /// stops the turn, [`Chat::reply`] is expected to follow.
    pub fn submit(&mut self, text: &str) -> bool {
        self.session.history_mut().append(Role::User, text);

        let crisis_detected = crisis::scan_latest(self.session.history());
        if crisis_detected {
            info!("Crisis keywords found in user message");
            self.session.mark_crisis_surfaced();
        }
        crisis_detected
    }

    /// Asks the model about the conversation so far and records the
    /// normalized reply.
    ///
    /// Never fails, an unreachable endpoint yields the fallback reply which
    /// is recorded like any other.
    pub async fn reply(&mut self) -> Reply {
        let (raw, degraded) = self
            .gateway
            .complete_or_fallback(self.session.history().messages())
            .await;
        self.record_reply(raw, degraded)
    }

    /// Like [`Chat::reply`], but gives up when `cancel_token` fires first.
    ///
    /// An abandoned reply records nothing, the user message stays in the
    /// history unanswered.
    pub async fn reply_until(&mut self, cancel_token: &CancellationToken) -> Option<Reply> {
        let completion = self
            .gateway
            .complete_or_fallback(self.session.history().messages());
        let (raw, degraded) = tokio::select! {
            result = completion => result,
            _ = cancel_token.cancelled() => {
                info!("Reply abandoned before the model answered");
                return None;
            }
        };
        Some(self.record_reply(raw, degraded))
    }

    fn record_reply(&mut self, raw: String, degraded: bool) -> Reply {
        let text = if degraded { raw } else { normalize::clean(&raw) };

        self.session
            .history_mut()
            .append(Role::Assistant, text.as_str());
        debug!(
            history = self.session.history().len(),
            degraded, "Turn complete"
        );

        Reply { text, degraded }
    }

    /// Runs a whole turn, see [`Chat::submit`] and [`Chat::reply`].
    pub async fn respond(&mut self, text: &str) -> Turn {
        let crisis_detected = self.submit(text);
        let Reply { text, degraded } = self.reply().await;
        Turn {
            crisis_detected,
            reply: text,
            degraded,
        }
    }

    /// Starts over with a fresh greeting.
    pub fn new_session(&mut self) {
        self.session.history_mut().reset();
    }

    pub fn history(&self) -> &ConversationStore {
        self.session.history()
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SessionState {
        &mut self.session
    }

    pub fn model_name(&self) -> &str {
        self.gateway.model_name()
    }

    pub fn export_to(&self, path: &Path) -> Result<()> {
        self.session
            .history()
            .save_export(path)
            .with_context(|| format!("Failed to export conversation to {}", path.display()))
    }
}
