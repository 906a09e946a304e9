use crate::completion::{ChatMessage, CompletionModel};
use crate::config::ProfileConfig;
use crate::gateway::GatewayError;
use crate::model::ModelConfig;
use crate::provider::openai_types::{ChatCompletionRequest, ChatCompletionResponse};
use anyhow::{Result, anyhow};
use async_openai::config::OpenAIConfig;
use async_openai::{Client as OpenAIClient, error::OpenAIError};
use async_trait::async_trait;
use tracing::debug;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct OpenAISettings {
    base_url: String,
    api_key: String,
}

/// Any OpenAI compatible chat completion endpoint, e.g. OpenRouter.
pub struct OpenAIBaseModel {
    config: ModelConfig,
    client: OpenAIClient<OpenAIConfig>,
}

impl OpenAIBaseModel {
    pub fn new(model_config: ModelConfig) -> Result<Self> {
        let settings: OpenAISettings = serde_yaml::to_value(&model_config.settings)
            .and_then(serde_yaml::from_value)
            .map_err(|e| anyhow!("Invalid settings for model '{}': {e}", model_config.name))?;

        // `env:NAME` reads the key from the environment
        let api_key = match settings.api_key.strip_prefix("env:") {
            Some(env_key) => {
                let env_key = env_key.trim();
                std::env::var(env_key)
                    .map_err(|_| anyhow!("Environment variable {env_key} not found"))?
            }
            None => settings.api_key,
        };

        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(settings.base_url);

        Ok(Self {
            config: model_config,
            client: OpenAIClient::with_config(config),
        })
    }
}

fn is_auth_failure(message: &str) -> bool {
    let message = message.to_lowercase();
    [
        "401",
        "api key",
        "api_key",
        "unauthorized",
        "authentication",
        "auth credentials",
    ]
    .iter()
    .any(|marker| message.contains(marker))
}

impl From<OpenAIError> for GatewayError {
    fn from(err: OpenAIError) -> Self {
        match &err {
            OpenAIError::JSONDeserialize(..) => GatewayError::MalformedResponse(err.to_string()),
            OpenAIError::ApiError(_) if is_auth_failure(&err.to_string()) => {
                GatewayError::Auth(err.to_string())
            }
            _ => GatewayError::Transport(err.to_string()),
        }
    }
}

#[async_trait]
impl CompletionModel for OpenAIBaseModel {
    fn name(&self) -> &str {
        &self.config.name
    }

    async fn complete(
        &self,
        messages: &[ChatMessage],
        profile: &ProfileConfig,
    ) -> Result<String, GatewayError> {
        let request = ChatCompletionRequest {
            model: &self.config.name,
            messages,
            temperature: profile.temperature,
            max_tokens: profile.max_tokens,
        };
        debug!(model = %self.config.name, messages = messages.len(), "Sending completion request");

        let response: ChatCompletionResponse = self.client.chat().create_byot(request).await?;

        response.into_first_content().ok_or_else(|| {
            GatewayError::MalformedResponse("completion has no message content".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::mock_openai_model_config;
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    fn completion_body(content: &str) -> serde_json::Value {
        json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "created": 1684,
            "model": "test-model",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": content},
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 20, "completion_tokens": 5, "total_tokens": 25}
        })
    }

    async fn mount(server: &MockServer, response: ResponseTemplate) {
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(response)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_openai_new_model() {
        let model = OpenAIBaseModel::new(mock_openai_model_config("http://localhost:1234")).unwrap();
        assert_eq!(model.name(), "test-model");
    }

    #[test]
    fn test_openai_new_model_missing_env_key() {
        let mut config = mock_openai_model_config("http://localhost:1234");
        config.settings.insert(
            "api_key".to_string(),
            "env:ANTARAA_TEST_KEY_THAT_IS_NOT_SET".into(),
        );

        let err = OpenAIBaseModel::new(config).err().unwrap();
        assert!(
            err.to_string()
                .contains("Environment variable ANTARAA_TEST_KEY_THAT_IS_NOT_SET not found")
        );
    }

    #[tokio::test]
    async fn test_openai_complete_api() {
        let server = MockServer::start().await;
        mount(
            &server,
            ResponseTemplate::new(200).set_body_json(completion_body("Hello there.")),
        )
        .await;
        let model = OpenAIBaseModel::new(mock_openai_model_config(&server.uri())).unwrap();

        let messages = vec![
            ChatMessage::system("Be kind."),
            ChatMessage::user("Hello"),
        ];
        let text = model
            .complete(&messages, &ProfileConfig::default())
            .await
            .unwrap();

        assert_eq!(text, "Hello there.");

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        let body: serde_json::Value = requests[0].body_json().unwrap();
        assert_eq!(body["model"], "test-model");
        assert_eq!(body["temperature"].as_f64(), Some(0.7));
        assert_eq!(body["max_tokens"], 11300);
        assert_eq!(
            body["messages"],
            json!([
                {"role": "system", "content": "Be kind."},
                {"role": "user", "content": "Hello"}
            ])
        );
    }

    #[tokio::test]
    async fn test_openai_complete_auth_error() {
        let server = MockServer::start().await;
        mount(
            &server,
            ResponseTemplate::new(401).set_body_json(json!({
                "error": {
                    "message": "Incorrect API key provided",
                    "type": "invalid_request_error",
                    "param": null,
                    "code": "invalid_api_key"
                }
            })),
        )
        .await;
        let model = OpenAIBaseModel::new(mock_openai_model_config(&server.uri())).unwrap();

        let err = model
            .complete(&[ChatMessage::user("Hello")], &ProfileConfig::default())
            .await
            .unwrap_err();

        assert!(matches!(err, GatewayError::Auth(_)), "{err:?}");
    }

    #[tokio::test]
    async fn test_openai_complete_malformed_body() {
        let server = MockServer::start().await;
        mount(
            &server,
            ResponseTemplate::new(200).set_body_raw("this is not json", "application/json"),
        )
        .await;
        let model = OpenAIBaseModel::new(mock_openai_model_config(&server.uri())).unwrap();

        let err = model
            .complete(&[ChatMessage::user("Hello")], &ProfileConfig::default())
            .await
            .unwrap_err();

        assert!(matches!(err, GatewayError::MalformedResponse(_)), "{err:?}");
    }

    #[tokio::test]
    async fn test_openai_complete_without_choices() {
        let server = MockServer::start().await;
        mount(
            &server,
            ResponseTemplate::new(200).set_body_json(json!({"id": "chatcmpl-1", "choices": []})),
        )
        .await;
        let model = OpenAIBaseModel::new(mock_openai_model_config(&server.uri())).unwrap();

        let err = model
            .complete(&[ChatMessage::user("Hello")], &ProfileConfig::default())
            .await
            .unwrap_err();

        assert!(
            matches!(err, GatewayError::MalformedResponse(msg) if msg.contains("no message content"))
        );
    }

    #[test]
    fn test_is_auth_failure() {
        assert!(is_auth_failure("No cookie auth credentials found"));
        assert!(is_auth_failure("invalid_request_error: Incorrect API key provided"));
        assert!(!is_auth_failure("The model is overloaded"));
    }
}
