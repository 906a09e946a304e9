//! Test utilities for antaraa crate

use crate::svc::chat::Chat;
use antaraa_core::config::get_config;
use std::fs;
use tempfile::{Builder, NamedTempFile};

/// Creates a temporary config file pointing the chat model at `server_uri`.
/// An `offline` model backed by the test provider is defined as well.
///
/// # Panics
/// Panics if temp directory creation or file writing fails.
pub fn create_temp_config_file(server_uri: &str) -> NamedTempFile {
    let temp_dir = Builder::new()
        .prefix("antaraa-test")
        .rand_bytes(8)
        .tempdir()
        .unwrap();
    let config_content = format!(
        r#"
models:
  test-model:
    name: test-model
    provider: openai
    base_url: "{server_uri}"
    api_key: "MOCK_OPENAI_API_KEY"
  offline:
    provider: test
profiles: {{}}
chat:
  model: test-model
typing:
  delay_ms: 0
"#,
    );

    let file = NamedTempFile::new_in(temp_dir.path()).unwrap();
    fs::write(file.path(), config_content).unwrap();

    // Keep the temp directory alive by leaking it (this is just for tests)
    let _ = Box::leak(Box::new(temp_dir));
    file
}

/// Chat service talking to the mock server at `server_uri`.
pub fn create_test_chat(server_uri: &str) -> Chat {
    let config_file = create_temp_config_file(server_uri);
    let config = get_config(Some(config_file.path().to_path_buf())).unwrap();
    Chat::new(&config, None).unwrap()
}
