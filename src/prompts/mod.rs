//! System instructions for each pipeline stage.

pub mod answering;
pub mod direct;
pub mod questions;
pub mod summary;

pub use answering::{COT_FEW_SHOT_PROMPT, COT_LED_CONTEXT_PROMPT, COT_OUTLINE_PROMPT};
pub use direct::DIRECT_ANSWER_PROMPT;
pub use questions::{QUESTION_GENERATION_TEMPLATE, question_generation_prompt};
pub use summary::{SUMMARY_EXPLAIN_PROMPT, SUMMARY_EXTRACT_PROMPT, SUMMARY_REORDER_PROMPT};
