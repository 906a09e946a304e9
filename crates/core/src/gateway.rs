//! Boundary to the remote completion endpoint.
use crate::assets::system_directive;
use crate::completion::{ChatMessage, CompletionModel};
use crate::config::ProfileConfig;
use thiserror::Error;
use tracing::{instrument, warn};

/// Reply shown in place of a completion when the endpoint cannot be reached.
pub const FALLBACK_REPLY: &str =
    "I'm having difficulty connecting. Could you please rephrase or try again?";

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Authentication error: {0}")]
    Auth(String),
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// Sends the conversation, prefixed with the companion persona, to a model.
pub struct CompletionGateway {
    model: Box<dyn CompletionModel + Send + Sync>,
    profile: ProfileConfig,
    directive: String,
}

impl CompletionGateway {
    pub fn new(model: Box<dyn CompletionModel + Send + Sync>, profile: ProfileConfig) -> Self {
        Self {
            model,
            profile,
            directive: system_directive().to_string(),
        }
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    /// Returns the trimmed text of the first completion for `history`.
    #[instrument(skip_all, fields(model = self.model.name(), messages = history.len()))]
    pub async fn complete(&self, history: &[ChatMessage]) -> Result<String, GatewayError> {
        let mut messages = Vec::with_capacity(history.len() + 1);
        messages.push(ChatMessage::system(self.directive.as_str()));
        messages.extend_from_slice(history);

        let text = self.model.complete(&messages, &self.profile).await?;
        Ok(text.trim().to_string())
    }

    /// Like [`CompletionGateway::complete`], degrading to [`FALLBACK_REPLY`] on any
    /// failure. Returns whether the fallback was used.
    pub async fn complete_or_fallback(&self, history: &[ChatMessage]) -> (String, bool) {
        match self.complete(history).await {
            Ok(text) => (text, false),
            Err(e) => {
                warn!(error = %e, "Completion failed, replying with fallback");
                (FALLBACK_REPLY.to_string(), true)
            }
        }
    }
}
