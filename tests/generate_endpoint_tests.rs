use std::sync::Arc;

use actix_web::{http::StatusCode, test, web, App};
use async_trait::async_trait;

use coursegen_server::{
    app_state::AppState,
    config::Config,
    errors::{json_error_handler, AppError, AppResult},
    handlers::generate_content,
    services::TextGenerationModel,
};

/// Stand-in for the Gemini client: replays a canned reply or failure.
struct CannedModel {
    reply: AppResult<String>,
}

#[async_trait]
impl TextGenerationModel for CannedModel {
    async fn generate_text(&self, _prompt: &str) -> AppResult<String> {
        self.reply.clone()
    }
}

const MCQ_REPLY: &str = "Question: What pigment captures light during photosynthesis?\n\
    A: Hemoglobin\n\
    B: Melanin\n\
    C: Chlorophyll\n\
    D: Keratin\n\
    Correct Answer: C";

async fn call_generate(
    reply: AppResult<String>,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let state = AppState::with_model(
        Config::test_config(),
        Arc::new(CannedModel { reply }),
    );
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .service(generate_content),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/generate")
        .set_json(&body)
        .to_request();

    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    let bytes = test::read_body(resp).await;
    // Every response, success or error, must be a JSON body.
    let value = serde_json::from_slice(&bytes).expect("response body is not JSON");
    (status, value)
}

#[actix_web::test]
async fn test_generate_paragraph() {
    let (status, body) = call_generate(
        Ok("Photosynthesis is the process by which plants convert light into energy.".to_string()),
        serde_json::json!({"topic": "Photosynthesis", "content_type": "paragraph"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "paragraph");
    assert_eq!(
        body["content"],
        "Photosynthesis is the process by which plants convert light into energy."
    );
}

#[actix_web::test]
async fn test_generate_multiple_choice_question() {
    let (status, body) = call_generate(
        Ok(MCQ_REPLY.to_string()),
        serde_json::json!({
            "topic": "Photosynthesis",
            "content_type": "multiple_choice_question",
            "context": "for beginners"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "multiple_choice_question");
    assert_eq!(body["options"].as_array().unwrap().len(), 4);
    assert_eq!(body["correct_answer_index"], 2);
}

#[actix_web::test]
async fn test_generate_quiz() {
    let reply = format!(
        "Quiz Title: Photosynthesis Basics\n\n1.\n{MCQ_REPLY}\n\n2.\n{MCQ_REPLY}\n\n3.\n{MCQ_REPLY}"
    );
    let (status, body) = call_generate(
        Ok(reply),
        serde_json::json!({"topic": "Photosynthesis", "content_type": "quiz"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "quiz");
    assert_eq!(body["title"], "Photosynthesis Basics");

    let questions = body["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 3);
    assert!(questions[0].get("type").is_none());
}

#[actix_web::test]
async fn test_upstream_failure_returns_503() {
    let (status, body) = call_generate(
        Err(AppError::Upstream("provider unavailable".to_string())),
        serde_json::json!({
            "topic": "Photosynthesis",
            "content_type": "multiple_choice_question"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["code"], "UPSTREAM_ERROR");
}

#[actix_web::test]
async fn test_unparseable_reply_returns_500() {
    let (status, body) = call_generate(
        Ok("Sure! Here is your question: what is photosynthesis?".to_string()),
        serde_json::json!({
            "topic": "Photosynthesis",
            "content_type": "multiple_choice_question"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "PARSE_ERROR");
    // The raw reply is logged, never echoed back to the caller.
    assert!(!body["error"].as_str().unwrap().contains("Sure!"));
}

#[actix_web::test]
async fn test_quiz_with_too_few_questions_returns_500() {
    let reply = format!("Quiz Title: Short Quiz\n\n1.\n{MCQ_REPLY}\n\n2.\n{MCQ_REPLY}");
    let (status, body) = call_generate(
        Ok(reply),
        serde_json::json!({"topic": "Photosynthesis", "content_type": "quiz"}),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "PARSE_ERROR");
}

#[actix_web::test]
async fn test_unknown_content_type_returns_400_with_error_body() {
    let (status, body) = call_generate(
        Ok("unused".to_string()),
        serde_json::json!({"topic": "Photosynthesis", "content_type": "essay"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["error"].as_str().unwrap().contains("essay"));
}

#[actix_web::test]
async fn test_missing_topic_returns_400_with_error_body() {
    let (status, body) = call_generate(
        Ok("unused".to_string()),
        serde_json::json!({"content_type": "paragraph"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[actix_web::test]
async fn test_whitespace_topic_returns_400() {
    let (status, body) = call_generate(
        Ok("unused".to_string()),
        serde_json::json!({"topic": "   ", "content_type": "paragraph"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}
