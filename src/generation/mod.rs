//! Prompt templates and the reply parser live together because the parser's
//! markers are defined by the wording of the templates.

pub mod parser;
pub mod prompts;
