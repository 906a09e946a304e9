use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::collections::HashMap;

/// Model configuration for the companion.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ModelConfig {
    #[serde(default)]
    pub name: String,
    #[serde(alias = "type")]
    pub provider: ModelProvider,
    #[serde(default, flatten)]
    pub settings: HashMap<String, serde_yaml::Value>,
}

impl ModelConfig {
    /// Reads a provider specific setting, e.g. `base_url`.
    pub fn get_setting<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.settings
            .get(key)
            .and_then(|v| serde_yaml::from_value(v.clone()).ok())
    }
}

/// Supported model provider integrations (serialized as lowercase strings).
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ModelProvider {
    Openai,
    Test,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_config_flattens_settings() {
        let config: ModelConfig = serde_yaml::from_str(
            r#"
name: deepseek/deepseek-r1-0528-qwen3-8b:free
type: openai
base_url: https://openrouter.ai/api/v1
api_key: env:OPENROUTER_API_KEY
"#,
        )
        .unwrap();

        assert_eq!(config.provider, ModelProvider::Openai);
        assert_eq!(
            config.get_setting::<String>("base_url").as_deref(),
            Some("https://openrouter.ai/api/v1")
        );
        assert_eq!(config.get_setting::<String>("missing"), None);
    }

    #[test]
    fn test_model_provider_accepts_type_alias() {
        let config: ModelConfig = serde_yaml::from_str("type: test").unwrap();
        assert_eq!(config.provider, ModelProvider::Test);
        assert!(serde_yaml::from_str::<ModelConfig>("provider: gguf").is_err());
    }
}
