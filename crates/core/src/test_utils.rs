//! Test utilities for antaraa-core crate

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use tempfile::Builder;

/// Creates a temporary config file with the given content.
/// Uses tempfile::Builder to ensure unique directories for parallel tests.
///
/// # Panics
/// Panics if temp directory creation or file writing fails.
pub fn create_temp_config(content: &str) -> PathBuf {
    let temp_dir = Builder::new()
        .prefix("antaraa-test")
        .rand_bytes(8)
        .tempdir()
        .unwrap();
    let config_path = temp_dir.path().join("antaraa.yml");
    File::create(&config_path)
        .unwrap()
        .write_all(content.as_bytes())
        .unwrap();
    // Keep the temp directory alive by leaking it (this is just for tests)
    let _ = Box::leak(Box::new(temp_dir));
    config_path
}

/// Offline model configuration backed by the test provider.
pub fn dummy_model_config(name: &str) -> crate::model::ModelConfig {
    crate::model::ModelConfig {
        name: name.to_string(),
        provider: crate::model::ModelProvider::Test,
        settings: std::collections::HashMap::new(),
    }
}

/// OpenAI compatible model configuration pointing at `server_url`.
pub fn mock_openai_model_config(server_url: &str) -> crate::model::ModelConfig {
    crate::model::ModelConfig {
        name: "test-model".to_string(),
        provider: crate::model::ModelProvider::Openai,
        settings: std::collections::HashMap::from([
            ("base_url".to_string(), server_url.into()),
            ("api_key".to_string(), "MOCK_OPENAI_API_KEY".into()),
        ]),
    }
}
