pub(crate) mod llm;
mod openai;
mod openai_types;
mod test_provider;
