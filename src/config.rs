use crate::error::ConfigError;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

const API_KEY_VAR: &str = "OPENAI_API_KEY";
const MODEL_VAR: &str = "OPENAI_MODEL";
const BASE_URL_VAR: &str = "OPENAI_BASE_URL";
const TIMEOUT_VAR: &str = "OPENAI_TIMEOUT_SECS";

/// Connection settings for the completion service.
#[derive(Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub model: String,
    /// Base URL without a trailing slash, e.g. `https://api.openai.com/v1`.
    pub base_url: String,
    /// Request timeout. `None` leaves the transport default in place.
    pub timeout_s: Option<u64>,
}

impl std::fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout_s", &self.timeout_s)
            .finish()
    }
}

impl LlmConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_s: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads settings through `lookup` so tests need not touch the process
    /// environment. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let api_key = read(API_KEY_VAR).ok_or(ConfigError::MissingVar(API_KEY_VAR))?;
        let mut config = Self::new(api_key);

        if let Some(model) = read(MODEL_VAR) {
            config.model = model;
        }
        if let Some(base_url) = read(BASE_URL_VAR) {
            config = config.with_base_url(base_url);
        }
        if let Some(raw) = read(TIMEOUT_VAR) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidVar {
                    name: TIMEOUT_VAR,
                    value: raw.clone(),
                })?;
            config.timeout_s = Some(secs);
        }

        Ok(config)
    }
}
