use crate::error::RecordError;
use serde::Serialize;
use serde_json::Value;

/// Keys a review must carry, in the order they appear in the prompt.
pub const REQUIRED_FIELDS: [&str; 10] = [
    "rating",
    "title",
    "text",
    "images",
    "asin",
    "parent_asin",
    "user_id",
    "timestamp",
    "helpful_vote",
    "verified_purchase",
];

/// A single product review, holding each field exactly as it arrived.
///
/// Only the presence of the ten keys is checked. Types, rating bounds,
/// timestamp sanity and text content are not, so whatever the caller sent is
/// what ends up in the prompt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewRecord {
    pub rating: Value,
    pub title: Value,
    pub text: Value,
    /// Image references: URLs or the dataset's image objects.
    pub images: Value,
    pub asin: Value,
    pub parent_asin: Value,
    pub user_id: Value,
    /// Milliseconds since the Unix epoch, by convention.
    pub timestamp: Value,
    pub helpful_vote: Value,
    pub verified_purchase: Value,
}

impl ReviewRecord {
    /// Builds a record from an untyped JSON object.
    ///
    /// Fails with `MissingField` on the first absent key, checked in
    /// `REQUIRED_FIELDS` order. Extra keys are dropped.
    pub fn from_value(value: Value) -> Result<Self, RecordError> {
        let Value::Object(mut object) = value else {
            return Err(RecordError::NotAnObject);
        };
        if let Some(missing) = REQUIRED_FIELDS
            .into_iter()
            .find(|field| !object.contains_key(*field))
        {
            return Err(RecordError::MissingField(missing));
        }

        let mut take = |field: &str| object.remove(field).unwrap_or(Value::Null);
        Ok(Self {
            rating: take("rating"),
            title: take("title"),
            text: take("text"),
            images: take("images"),
            asin: take("asin"),
            parent_asin: take("parent_asin"),
            user_id: take("user_id"),
            timestamp: take("timestamp"),
            helpful_vote: take("helpful_vote"),
            verified_purchase: take("verified_purchase"),
        })
    }

    pub fn from_json_str(input: &str) -> Result<Self, RecordError> {
        let value: Value = serde_json::from_str(input)?;
        Self::from_value(value)
    }
}
