use crate::completion::CompletionModel;
use crate::model::ModelProvider;
use crate::provider::{openai, test_provider};
use anyhow::Result;
use tracing::instrument;

#[instrument(skip(model_config))]
pub fn get_completion_llm(
    model_config: crate::model::ModelConfig,
) -> Result<Box<dyn CompletionModel + Send + Sync>> {
    match model_config.provider {
        ModelProvider::Openai => {
            let model = openai::OpenAIBaseModel::new(model_config)?;
            Ok(Box::new(model))
        }
        ModelProvider::Test => {
            let model = test_provider::TestProviderModel::new(model_config);
            Ok(Box::new(model))
        }
    }
}
