//! An offline provider with canned replies.
use crate::completion::{ChatMessage, CompletionModel, Role};
use crate::config::ProfileConfig;
use crate::gateway::GatewayError;
use crate::model::ModelConfig;
use async_trait::async_trait;

const CANNED_REPLY: &str = "1. Take a slow breath. 2. Notice what you are feeling right now.\n\n\nWhatever it is, it is welcome here. What feels most present for you?";

/// A `CompletionModel` that never leaves the machine.
///
/// The `response_mode` setting controls the reply:
/// - `""` (default): a canned reply with a numbered list, useful to see the
///   normalizer at work.
/// - `"echo"`: repeats the last user message.
/// - `"error"`: fails with a transport error.
#[derive(Debug)]
pub struct TestProviderModel {
    config: ModelConfig,
}

impl TestProviderModel {
    pub fn new(config: ModelConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl CompletionModel for TestProviderModel {
    fn name(&self) -> &str {
        &self.config.name
    }

    async fn complete(
        &self,
        messages: &[ChatMessage],
        _profile: &ProfileConfig,
    ) -> Result<String, GatewayError> {
        let response_mode: String = self.config.get_setting("response_mode").unwrap_or_default();

        match response_mode.as_str() {
            "error" => Err(GatewayError::Transport(
                "TestProviderModel error".to_string(),
            )),
            "echo" => Ok(messages
                .iter()
                .rev()
                .find(|m| m.role == Role::User)
                .map(|m| m.content.clone())
                .unwrap_or_default()),
            _ => Ok(CANNED_REPLY.to_string()),
        }
    }
}
