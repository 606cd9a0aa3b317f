use crate::review::ReviewRecord;
use serde_json::Value;
use tera::{Context as TeraContext, Tera};

pub const TEMPLATE_NAME: &str = "recommendation.tera";

const RECOMMENDATION_TEMPLATE: &str = include_str!("../templates/recommendation.tera");

/// Builds the template environment holding the recommendation prompt.
pub fn load_templates() -> tera::Result<Tera> {
    let mut tera = Tera::default();
    tera.autoescape_on(vec![]); // prompt text, not HTML
    tera.add_raw_template(TEMPLATE_NAME, RECOMMENDATION_TEMPLATE)?;
    Ok(tera)
}

/// Text form of a field: strings bare, everything else as JSON.
fn field_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Renders the review into the recommendation prompt. Field values are
/// interpolated unmodified.
pub fn render_prompt(tera: &Tera, review: &ReviewRecord) -> tera::Result<String> {
    let fields = [
        ("rating", &review.rating),
        ("title", &review.title),
        ("text", &review.text),
        ("images", &review.images),
        ("asin", &review.asin),
        ("parent_asin", &review.parent_asin),
        ("user_id", &review.user_id),
        ("timestamp", &review.timestamp),
        ("helpful_vote", &review.helpful_vote),
        ("verified_purchase", &review.verified_purchase),
    ];

    let mut context = TeraContext::new();
    for (name, value) in fields {
        context.insert(name, &field_text(value));
    }

    tera.render(TEMPLATE_NAME, &context)
}
