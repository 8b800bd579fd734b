use std::sync::Arc;

use crate::{
    errors::AppResult,
    generation::{parser, prompts},
    models::{
        domain::{GeneratedContent, GenerationRequest},
        dto::GenerateContentRequestDto,
    },
    services::model_service::TextGenerationModel,
};

pub struct ContentService {
    model: Arc<dyn TextGenerationModel>,
}

impl ContentService {
    pub fn new(model: Arc<dyn TextGenerationModel>) -> Self {
        Self { model }
    }

    /// Runs the full pipeline for one request: validate, render the prompt,
    /// call the model, parse the reply. Invalid input never reaches the model.
    pub async fn generate(&self, dto: GenerateContentRequestDto) -> AppResult<GeneratedContent> {
        let request = GenerationRequest::try_from(dto)?;

        log::info!(
            "Received generation request - Topic: '{}', Type: '{}'",
            request.topic,
            request.content_type
        );

        let prompt = prompts::render(&request);
        let raw_reply = self.model.generate_text(&prompt).await?;

        log::info!(
            "Attempting to parse raw model output for type '{}'",
            request.content_type
        );
        let result = parser::parse(&raw_reply, request.content_type)?;

        log::info!(
            "Successfully processed request for '{}'",
            request.content_type
        );
        Ok(result)
    }
}
