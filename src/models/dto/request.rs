use serde::Deserialize;
use validator::Validate;

use crate::{
    errors::AppError,
    models::domain::{ContentType, GenerationRequest},
};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateContentRequestDto {
    #[validate(length(min = 1, max = 300, message = "topic must be 1-300 characters"))]
    pub topic: String,

    pub content_type: ContentType,

    #[validate(length(max = 2000, message = "context must be at most 2000 characters"))]
    pub context: Option<String>,
}

impl TryFrom<GenerateContentRequestDto> for GenerationRequest {
    type Error = AppError;

    fn try_from(dto: GenerateContentRequestDto) -> Result<Self, Self::Error> {
        dto.validate()?;

        let topic = dto.topic.trim();
        if topic.is_empty() {
            return Err(AppError::Validation(
                "topic must not be empty or whitespace".to_string(),
            ));
        }

        let context = dto
            .context
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        Ok(GenerationRequest {
            topic: topic.to_string(),
            content_type: dto.content_type,
            context,
        })
    }
}
