//! Prompt templates for each content type. The literal markers instructed here
//! (`Question:`, `A:`-`D:`, `Correct Answer:`, `Quiz Title:`) are exactly what
//! the sibling parser module scans for, so the two must change together.

use crate::models::domain::{ContentType, GenerationRequest};

/// Rendered into the template when the caller supplies no context.
pub const NO_CONTEXT_PLACEHOLDER: &str = "None provided.";

const PARAGRAPH_PROMPT_TEMPLATE: &str = r#"**Role:** You are an AI assistant specialized in creating clear, concise, and informative educational content for a Learning Management System (LMS). Your default tone should be neutral and objective unless specified otherwise by the context.

**Task:** Generate a single block of text forming one paragraph that explains the specified topic.

**Topic:** "{topic}"

**Context/Instructions:** "{context}"
*   Use this context to adapt the explanation's depth, focus, complexity, or tone (e.g., 'for beginners', 'focus on applications', 'use an engaging tone'). If context is 'None provided.', generate a standard, informative paragraph.

**Output Requirements:**
*   **Strictly Output ONLY the paragraph text.**
*   Do NOT include any titles, headings, labels (like "Paragraph:"), or introductory/concluding phrases (like "Here is the paragraph:", "In summary...", etc.).
*   The output must be suitable for direct insertion into an LMS lesson component.
"#;

const MCQ_PROMPT_TEMPLATE: &str = r#"**Role:** You are an AI expert creating high-quality assessment questions for an educational setting (LMS).

**Task:** Generate **ONE** multiple-choice question based on the specified topic and context.

**Topic:** "{topic}"

**Context/Instructions:** "{context}"
*   Use this context to adjust the question's difficulty (e.g., easy recall, challenging application), specific focus area, or target audience. If 'None provided.', generate a standard question testing basic understanding.

**Question Requirements:**
1.  **Clarity:** The question text must be clear and unambiguous.
2.  **Options:** Provide exactly four options.
3.  **Correctness:** Ensure only ONE option is verifiably correct.
4.  **Distractors:** The incorrect options (distractors) must be plausible but clearly wrong. They should ideally relate to common misconceptions or errors associated with the topic.
5.  **Labels:** Options MUST be labeled precisely `A:`, `B:`, `C:`, `D:`.

**Output Format (CRITICAL):**
*   You MUST provide the output *exactly* in the following format, using these precise keywords and structure:
Question: [The question text goes here]
A: [Option A text]
B: [Option B text]
C: [Option C text]
D: [Option D text]
Correct Answer: [Single uppercase letter: A, B, C, or D]
*   **Strictly adhere to this format.** Do NOT add *any* extra text, explanations, introductions, notes, or formatting (like bullet points) before "Question:" or after the "Correct Answer:" line.
"#;

const QUIZ_PROMPT_TEMPLATE: &str = r#"**Role:** You are an AI instructional designer expert at creating short, effective quizzes for Learning Management Systems (LMS).

**Task:** Generate a complete quiz including a title and exactly 3 multiple-choice questions about the specified topic.

**Topic:** "{topic}"

**Context/Instructions:** "{context}"
*   Use this context to influence the overall difficulty or specific focus areas covered by the quiz questions. If 'None provided.', create a standard quiz testing basic understanding.

**Quiz Requirements:**
1.  **Title:** Include a short, relevant title for the quiz on the very first line, prefixed with `Quiz Title: `.
2.  **Number of Questions:** Generate **exactly 3** multiple-choice questions.
3.  **Question Variety:** Each question should ideally test a different key aspect or sub-topic related to the main Topic.
4.  **MCQ Format (CRITICAL):** Each of the 3 questions must individually and strictly follow the precise format below:
    ```
    Question: [The question text goes here]
    A: [Option A text]
    B: [Option B text]
    C: [Option C text]
    D: [Option D text]
    Correct Answer: [Single uppercase letter: A, B, C, or D]
    ```

**Output Structure (CRITICAL):**
*   The entire output MUST follow this structure precisely:
    1.  `Quiz Title: [Generated Title Here]` (on the first line)
    2.  An empty line.
    3.  `1.` (The number 1 followed by a period)
    4.  The first MCQ block, formatted exactly as specified above (starting with `Question:` and ending with `Correct Answer:`).
    5.  An empty line.
    6.  `2.` (The number 2 followed by a period)
    7.  The second MCQ block, formatted exactly as specified above.
    8.  An empty line.
    9.  `3.` (The number 3 followed by a period)
    10. The third MCQ block, formatted exactly as specified above.

*   **Strictly adhere to this structure.**
*   Do NOT include *any* extra text, introductions, explanations, summaries, or notes before the title, between the questions, or after the last question.
*   Ensure each numbered block (1, 2, 3) contains *only* the question text formatted according to the MCQ format rules.
"#;

/// Renders the prompt for a validated request. Cannot fail: every content type
/// has a template and the topic is guaranteed non-empty.
pub fn render(request: &GenerationRequest) -> String {
    let template = match request.content_type {
        ContentType::Paragraph => PARAGRAPH_PROMPT_TEMPLATE,
        ContentType::MultipleChoiceQuestion => MCQ_PROMPT_TEMPLATE,
        ContentType::Quiz => QUIZ_PROMPT_TEMPLATE,
    };

    let context = request.context.as_deref().unwrap_or(NO_CONTEXT_PLACEHOLDER);

    template
        .replace("{topic}", &request.topic)
        .replace("{context}", context)
}
