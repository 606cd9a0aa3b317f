//! Product recommendations from review records via a chat completion service.

pub mod config;
pub mod error;
pub mod llm_client;
pub mod prompt_builder;
pub mod recommender;
pub mod review;

pub use config::LlmConfig;
pub use error::{CompletionError, ConfigError, RecommendError, RecordError};
pub use llm_client::{ChatCompletionResponse, CompletionService, LlmClient};
pub use recommender::{Recommendation, Recommender, FALLBACK_RECOMMENDATION};
pub use review::ReviewRecord;
