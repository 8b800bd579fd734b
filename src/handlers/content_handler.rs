use actix_web::{get, post, web, HttpResponse};

use crate::{app_state::AppState, errors::AppError, models::dto::GenerateContentRequestDto};

#[post("/generate")]
async fn generate_content(
    state: web::Data<AppState>,
    request: web::Json<GenerateContentRequestDto>,
) -> Result<HttpResponse, AppError> {
    let result = state.content_service.generate(request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(result))
}

#[get("/")]
async fn index() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Welcome to the AI Content Generation API!"
    }))
}

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
