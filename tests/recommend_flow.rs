use mockito::Matcher;
use review_recommender::{
    CompletionError, LlmClient, LlmConfig, Recommendation, Recommender, ReviewRecord,
    FALLBACK_RECOMMENDATION,
};
use serde_json::json;

const SAMPLE_REVIEW: &str = include_str!("../demos/sample_review.json");

fn recommender_for(server: &mockito::ServerGuard) -> Recommender<LlmClient> {
    let config = LlmConfig::new("sk-test").with_base_url(server.url());
    Recommender::new(LlmClient::new(config).unwrap()).unwrap()
}

#[tokio::test]
async fn sample_review_yields_stubbed_product() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer sk-test")
        .match_body(Matcher::AllOf(vec![
            Matcher::PartialJson(json!({
                "model": "gpt-4o-mini",
                "temperature": 0.7,
                "top_p": 1.0,
                "n": 1
            })),
            Matcher::Regex("- Rating: 4.5".into()),
            Matcher::Regex("- User ID: USER12345".into()),
            Matcher::Regex("- Verified Purchase: true".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "id": "chatcmpl-abc",
                "model": "gpt-4o-mini",
                "choices": [{
                    "index": 0,
                    "message": {"role": "assistant", "content": "Aveeno Daily Moisturizing Lotion"},
                    "finish_reason": "stop"
                }]
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let review = ReviewRecord::from_json_str(SAMPLE_REVIEW).unwrap();
    let (text, response) = recommender_for(&server)
        .generate_recommendation(&review)
        .await
        .unwrap()
        .into_parts();

    assert_eq!(text, "Aveeno Daily Moisturizing Lotion");
    let response = response.expect("raw response should be returned");
    assert_eq!(response.id.as_deref(), Some("chatcmpl-abc"));
    assert_eq!(response.choices.len(), 1);
    mock.assert_async().await;
}

#[tokio::test]
async fn service_error_falls_back() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .with_status(500)
        .with_body(r#"{"error": {"message": "The server had an error"}}"#)
        .expect(1)
        .create_async()
        .await;

    let review = ReviewRecord::from_json_str(SAMPLE_REVIEW).unwrap();
    let recommendation = recommender_for(&server)
        .generate_recommendation(&review)
        .await
        .unwrap();

    assert_eq!(recommendation.text(), FALLBACK_RECOMMENDATION);
    assert!(recommendation.response().is_none());
    assert!(matches!(
        recommendation,
        Recommendation::Unavailable {
            error: CompletionError::Api { status: 500, .. }
        }
    ));
    mock.assert_async().await;
}

#[tokio::test]
async fn each_call_issues_its_own_request() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_body(r#"{"choices": [{"message": {"role": "assistant", "content": "Lotion"}}]}"#)
        .expect(2)
        .create_async()
        .await;

    let review = ReviewRecord::from_json_str(SAMPLE_REVIEW).unwrap();
    let recommender = recommender_for(&server);
    recommender.generate_recommendation(&review).await.unwrap();
    recommender.generate_recommendation(&review).await.unwrap();

    mock.assert_async().await;
}
