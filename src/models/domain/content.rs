use serde::{Deserialize, Serialize};

/// Number of options every multiple-choice question carries.
pub const MCQ_OPTION_COUNT: usize = 4;

/// Number of questions every generated quiz carries.
pub const QUIZ_QUESTION_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Paragraph,
    MultipleChoiceQuestion,
    Quiz,
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentType::Paragraph => write!(f, "paragraph"),
            ContentType::MultipleChoiceQuestion => write!(f, "multiple_choice_question"),
            ContentType::Quiz => write!(f, "quiz"),
        }
    }
}

/// A validated, normalized generation request. The topic is trimmed and
/// guaranteed non-empty by the DTO conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub topic: String,
    pub content_type: ContentType,
    pub context: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct McqQuestion {
    pub question_text: String,
    pub options: Vec<String>,
    pub correct_answer_index: usize,
}

/// The structured result of a generation request, serialized directly as the
/// response body. Tagged with a "type" field matching the requested content type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GeneratedContent {
    Paragraph {
        content: String,
    },
    MultipleChoiceQuestion(McqQuestion),
    Quiz {
        title: String,
        questions: Vec<McqQuestion>,
    },
}

impl GeneratedContent {
    pub fn content_type(&self) -> ContentType {
        match self {
            GeneratedContent::Paragraph { .. } => ContentType::Paragraph,
            GeneratedContent::MultipleChoiceQuestion(_) => ContentType::MultipleChoiceQuestion,
            GeneratedContent::Quiz { .. } => ContentType::Quiz,
        }
    }
}
