//! Marker-based parsing of raw model replies into structured content. The
//! markers scanned here are the ones the sibling prompts module instructs the
//! model to emit; keep both sides in sync.

use crate::{
    errors::{AppError, AppResult},
    models::domain::{ContentType, GeneratedContent, McqQuestion, MCQ_OPTION_COUNT,
        QUIZ_QUESTION_COUNT},
};

const QUESTION_MARKER: &str = "Question:";
const ANSWER_MARKER: &str = "Correct Answer:";
const TITLE_MARKER: &str = "Quiz Title:";
const OPTION_MARKERS: [&str; MCQ_OPTION_COUNT] = ["A:", "B:", "C:", "D:"];

pub fn parse(raw: &str, content_type: ContentType) -> AppResult<GeneratedContent> {
    match content_type {
        ContentType::Paragraph => parse_paragraph(raw),
        ContentType::MultipleChoiceQuestion => {
            parse_mcq(raw).map(GeneratedContent::MultipleChoiceQuestion)
        }
        ContentType::Quiz => parse_quiz(raw),
    }
}

fn parse_paragraph(raw: &str) -> AppResult<GeneratedContent> {
    let content = raw.trim();
    if content.is_empty() {
        return Err(parse_error("model returned empty paragraph text", raw));
    }

    Ok(GeneratedContent::Paragraph {
        content: content.to_string(),
    })
}

fn parse_mcq(raw: &str) -> AppResult<McqQuestion> {
    let mut question_text: Option<String> = None;
    let mut options: [Option<String>; MCQ_OPTION_COUNT] = Default::default();
    let mut answer_token: Option<String> = None;

    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(rest) = line.strip_prefix(QUESTION_MARKER) {
            question_text = Some(rest.trim().to_string());
        } else if let Some(rest) = line.strip_prefix(ANSWER_MARKER) {
            answer_token = Some(rest.trim().to_uppercase());
        } else {
            for (index, marker) in OPTION_MARKERS.iter().enumerate() {
                if let Some(rest) = line.strip_prefix(marker) {
                    options[index] = Some(rest.trim().to_string());
                    break;
                }
            }
        }
    }

    let question_text = question_text
        .filter(|q| !q.is_empty())
        .ok_or_else(|| parse_error("question marker not found in MCQ reply", raw))?;

    let found = options.iter().filter(|o| o.is_some()).count();
    if found != MCQ_OPTION_COUNT {
        return Err(parse_error(
            &format!("expected {MCQ_OPTION_COUNT} options, found {found}"),
            raw,
        ));
    }
    let options: Vec<String> = options.into_iter().flatten().collect();

    let token =
        answer_token.ok_or_else(|| parse_error("answer marker not found in MCQ reply", raw))?;
    // Letter-to-index mapping keeps correct_answer_index in 0..MCQ_OPTION_COUNT.
    let correct_answer_index = match token.as_str() {
        "A" => 0,
        "B" => 1,
        "C" => 2,
        "D" => 3,
        other => {
            return Err(parse_error(
                &format!("correct answer '{other}' is not one of A, B, C, D"),
                raw,
            ))
        }
    };

    Ok(McqQuestion {
        question_text,
        options,
        correct_answer_index,
    })
}

fn parse_quiz(raw: &str) -> AppResult<GeneratedContent> {
    let mut lines = raw.trim().lines();

    let title = lines
        .next()
        .and_then(|first| first.trim().strip_prefix(TITLE_MARKER))
        .map(|rest| rest.trim().to_string())
        .ok_or_else(|| parse_error("quiz title marker not found on the first line", raw))?;

    // Question blocks are delimited by numbered lines ("1.", "2.", ...); the
    // numbered line itself carries no content.
    let mut questions = Vec::new();
    let mut current_block: Vec<&str> = Vec::new();

    for line in lines {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if is_question_number(trimmed) {
            if !current_block.is_empty() {
                questions.push(parse_mcq(&current_block.join("\n"))?);
                current_block.clear();
            }
        } else {
            current_block.push(line);
        }
    }

    if !current_block.is_empty() {
        questions.push(parse_mcq(&current_block.join("\n"))?);
    }

    if questions.len() != QUIZ_QUESTION_COUNT {
        return Err(parse_error(
            &format!(
                "expected {QUIZ_QUESTION_COUNT} quiz questions, found {}",
                questions.len()
            ),
            raw,
        ));
    }

    Ok(GeneratedContent::Quiz { title, questions })
}

/// A line like "1." or "2. Something" marks the start of a quiz question block.
fn is_question_number(line: &str) -> bool {
    line.starts_with(|c: char| c.is_ascii_digit())
        && line
            .split_whitespace()
            .next()
            .is_some_and(|token| token.contains('.'))
}

fn parse_error(message: &str, raw: &str) -> AppError {
    let snippet: String = raw.chars().take(200).collect();
    log::error!("Parse error: {message}. Raw reply snippet:\n{snippet}");
    AppError::Parse(message.to_string())
}
