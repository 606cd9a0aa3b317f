// Turns a review into a single product recommendation.

use crate::{
    error::{CompletionError, RecommendError},
    llm_client::{ChatCompletionResponse, ChatMessage, CompletionRequest, CompletionService},
    prompt_builder,
    review::ReviewRecord,
};
use serde_json::Value;
use tera::Tera;
use tracing::{error, info};

pub const SYSTEM_PROMPT: &str = "You are a helpful assistant.";
pub const FALLBACK_RECOMMENDATION: &str = "No recommendation available due to an error.";

const TEMPERATURE: f64 = 0.7;
const TOP_P: f64 = 1.0;
const CANDIDATES: u32 = 1;

/// Outcome of a recommendation call.
#[derive(Debug)]
pub enum Recommendation {
    /// Trimmed text of the first choice plus the response it came from.
    Generated {
        text: String,
        response: ChatCompletionResponse,
    },
    /// The completion call failed; `text()` yields the fallback message.
    Unavailable { error: CompletionError },
}

impl Recommendation {
    pub fn text(&self) -> &str {
        match self {
            Recommendation::Generated { text, .. } => text,
            Recommendation::Unavailable { .. } => FALLBACK_RECOMMENDATION,
        }
    }

    pub fn response(&self) -> Option<&ChatCompletionResponse> {
        match self {
            Recommendation::Generated { response, .. } => Some(response),
            Recommendation::Unavailable { .. } => None,
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, Recommendation::Generated { .. })
    }

    pub fn into_parts(self) -> (String, Option<ChatCompletionResponse>) {
        match self {
            Recommendation::Generated { text, response } => (text, Some(response)),
            Recommendation::Unavailable { .. } => (FALLBACK_RECOMMENDATION.to_string(), None),
        }
    }
}

pub struct Recommender<S> {
    tera: Tera,
    service: S,
}

impl<S: CompletionService> Recommender<S> {
    pub fn new(service: S) -> Result<Self, RecommendError> {
        let tera = prompt_builder::load_templates()?;
        Ok(Self { tera, service })
    }

    /// Renders the prompt for `review` and asks the service for one completion.
    ///
    /// Completion failures are logged and returned as
    /// `Recommendation::Unavailable`; only prompt rendering errors surface as
    /// `Err`.
    pub async fn generate_recommendation(
        &self,
        review: &ReviewRecord,
    ) -> Result<Recommendation, RecommendError> {
        let prompt = prompt_builder::render_prompt(&self.tera, review)?;
        let request = CompletionRequest {
            messages: vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(prompt)],
            temperature: TEMPERATURE,
            top_p: TOP_P,
            n: CANDIDATES,
        };

        info!("Requesting recommendation for review of {}", review.asin);

        let outcome = self
            .service
            .complete(&request)
            .await
            .and_then(|response| {
                let text = response
                    .first_content()
                    .ok_or(CompletionError::EmptyChoices)?
                    .trim()
                    .to_string();
                Ok(Recommendation::Generated { text, response })
            });

        Ok(outcome.unwrap_or_else(|e| {
            error!("Error occurred while generating product recommendation: {}", e);
            Recommendation::Unavailable { error: e }
        }))
    }

    /// Same as `generate_recommendation`, starting from an untyped record.
    /// A missing field is returned as an error before any request is made.
    pub async fn generate_from_value(&self, value: Value) -> Result<Recommendation, RecommendError> {
        let review = ReviewRecord::from_value(value)?;
        self.generate_recommendation(&review).await
    }
}
