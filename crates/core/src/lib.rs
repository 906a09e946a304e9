mod assets;
mod provider;

pub mod completion;
pub mod config;
pub mod crisis;
pub mod gateway;
pub mod model;
pub mod normalize;
pub mod session;
pub mod typing;

#[cfg(test)]
mod test_utils;

pub use crate::assets::{APP_MEANING, APP_NAME, APP_SUBTITLE, get_data_dir, system_directive};
pub use crate::provider::llm::get_completion_llm;
