use std::{
    collections::HashMap,
    fs::{self, File},
    io::Write,
    path::PathBuf,
    time::Duration,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::instrument;

use crate::{
    assets::{get_config_dir, get_default_config},
    model::ModelConfig,
};

#[derive(Error, Debug)]
pub enum AntaraaConfigError {
    #[error("File system error: {0}")]
    IO(#[from] std::io::Error),
    #[error("YAML parsing error: {0}")]
    YAMLError(#[from] serde_yaml::Error),
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Sampling settings sent with every completion request.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct ProfileConfig {
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 11300,
        }
    }
}

/// Pace of the simulated typing effect.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct TypingConfig {
    pub delay_ms: u64,
    pub cursor: String,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            delay_ms: 30,
            cursor: "▌".to_string(),
        }
    }
}

impl TypingConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ChatConfig {
    pub model: ModelConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    pub models: HashMap<String, ModelConfig>,
    pub profiles: HashMap<String, ProfileConfig>,
    pub chat: ChatConfig,
    #[serde(default)]
    pub typing: TypingConfig,
}

#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum StringOrObject<T> {
    String(String),
    Object(T),
}

#[derive(Deserialize, Debug)]
struct RawConfig {
    #[serde(default)]
    models: HashMap<String, ModelConfig>,
    #[serde(default)]
    profiles: HashMap<String, ProfileConfig>,
    chat: RawChatConfig,
    #[serde(default)]
    typing: TypingConfig,
}

#[derive(Deserialize, Debug)]
struct RawChatConfig {
    model: StringOrObject<ModelConfig>,
    #[serde(default)]
    profile: Option<StringOrObject<ProfileConfig>>,
}

impl RawConfig {
    #[instrument]
    fn to_config(&self) -> Result<Config, AntaraaConfigError> {
        let mut models_with_names = HashMap::new();
        for (k, v) in &self.models {
            // The map key doubles as the model name when none is given
            let model_name = if v.name.is_empty() {
                k.clone()
            } else {
                v.name.clone()
            };
            let model = ModelConfig {
                name: model_name,
                ..v.clone()
            };
            models_with_names.insert(k.clone(), model);
        }

        let model = match &self.chat.model {
            StringOrObject::String(s) => models_with_names
                .get(s)
                .cloned()
                .ok_or_else(|| AntaraaConfigError::Config(format!("Model '{s}' not found")))?,
            StringOrObject::Object(m) => m.clone(),
        };

        let profile = match &self.chat.profile {
            Some(StringOrObject::String(s)) => self.profiles.get(s).cloned().ok_or_else(|| {
                AntaraaConfigError::Config(format!("Profile '{s}' not found"))
            })?,
            Some(StringOrObject::Object(p)) => p.clone(),
            None => ProfileConfig::default(),
        };

        if self.typing.cursor.chars().count() > 1 {
            return Err(AntaraaConfigError::Config(format!(
                "Typing cursor must be a single character, got '{}'",
                self.typing.cursor
            )));
        }

        Ok(Config {
            models: models_with_names,
            profiles: self.profiles.clone(),
            chat: ChatConfig { model, profile },
            typing: self.typing.clone(),
        })
    }
}

#[instrument(skip(config_path))]
pub fn create_or_get_config_file(
    config_path: Option<PathBuf>,
) -> Result<(bool, PathBuf), AntaraaConfigError> {
    let actual_path = config_path.unwrap_or_else(|| get_config_dir().join("antaraa.yml"));

    let parent_dir = actual_path.parent().ok_or_else(|| {
        AntaraaConfigError::IO(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "Config path has no parent directory",
        ))
    })?;

    if !parent_dir.exists() {
        fs::create_dir_all(parent_dir)?;
    }

    if actual_path.exists() {
        Ok((true, actual_path))
    } else {
        File::create(&actual_path)?.write_all(get_default_config().as_bytes())?;
        Ok((false, actual_path))
    }
}

#[instrument(skip(config_path))]
pub fn get_config(config_path: Option<PathBuf>) -> Result<Config, AntaraaConfigError> {
    let (_, config_file) = create_or_get_config_file(config_path)?;
    let content = fs::read_to_string(&config_file)?;
    let raw: RawConfig = serde_yaml::from_str(&content)?;
    raw.to_config()
}
