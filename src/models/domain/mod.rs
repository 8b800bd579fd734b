pub mod content;

pub use content::{
    ContentType, GeneratedContent, GenerationRequest, McqQuestion, MCQ_OPTION_COUNT,
    QUIZ_QUESTION_COUNT,
};
