//! Question brainstorming profiles.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::stage::Stage;
use crate::dispatch::RateLimits;
use crate::generation::{
    GenerateContentConfig, display_schema, set_array_length, transform_for_response,
};
use crate::models::{GEMINI_2_0_FLASH, GEMINI_2_5_PRO_PREVIEW_05_06, ModelId};
use crate::prompts::question_generation_prompt;
use crate::{Error, Result};

pub const DEFAULT_NUM_QUESTIONS: usize = 5;

/// Largest question count a brainstorm profile accepts.
pub const MAX_NUM_QUESTIONS: usize = 100;

/// Candidates requested per kept question when over-generating.
pub const CANDIDATE_MULTIPLIER: usize = 3;

const QUESTIONS_FIELD: &str = "questions";

/// Structured output of the brainstorm stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct QuestionResponse {
    /// Summary of the video.
    pub summary: String,
    /// List of questions to ask about the video.
    pub questions: Vec<String>,
}

impl QuestionResponse {
    /// Parse a model reply and check it carries exactly `expected` questions.
    pub fn parse(text: &str, expected: usize) -> Result<Self> {
        let response: Self = serde_json::from_str(text)?;
        if response.questions.len() != expected {
            return Err(Error::Schema(format!(
                "expected {expected} questions, got {}",
                response.questions.len()
            )));
        }
        Ok(response)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionProfile {
    pub key: String,
    pub model: ModelId,
    pub system_prompt: String,
    /// `responseSchema` sent with the request.
    pub schema: Value,
    pub num_questions: usize,
    pub config: GenerateContentConfig,
    pub limits: RateLimits,
}

impl QuestionProfile {
    /// Batch size when asking for a pool of candidates to pick from.
    pub fn candidate_pool_size(&self) -> usize {
        self.num_questions.saturating_mul(CANDIDATE_MULTIPLIER)
    }

    pub fn parse_response(&self, text: &str) -> Result<QuestionResponse> {
        QuestionResponse::parse(text, self.num_questions)
    }
}

/// Select the brainstorm profile for `key`.
pub fn question_profile(key: &str, num_questions: usize) -> Result<QuestionProfile> {
    if !(1..=MAX_NUM_QUESTIONS).contains(&num_questions) {
        return Err(Error::InvalidRequest(format!(
            "num_questions must be between 1 and {MAX_NUM_QUESTIONS}, got {num_questions}"
        )));
    }

    let (model, limits) = match key {
        GEMINI_2_0_FLASH => (GEMINI_2_0_FLASH, RateLimits::new(150, 1, 40)),
        // This key has always been served by flash.
        GEMINI_2_5_PRO_PREVIEW_05_06 => (GEMINI_2_0_FLASH, RateLimits::new(150, 1, 40)),
        _ => {
            return Err(Error::UnknownProfile {
                stage: Stage::QuestionGeneration,
                key: key.to_string(),
            });
        }
    };

    tracing::debug!(key, model, num_questions, "selected question generation profile");
    brainstorm_profile(key, model, num_questions, limits)
}

pub fn question_profile_default(key: &str) -> Result<QuestionProfile> {
    question_profile(key, DEFAULT_NUM_QUESTIONS)
}

/// Full schema for `T` with its `field` array pinned to `len` items.
fn pinned_schema<T: JsonSchema>(field: &str, len: usize) -> Result<Value> {
    let mut schema = display_schema::<T>()?;
    if !set_array_length(&mut schema, field, len) {
        return Err(Error::Schema(format!(
            "schema has no array property '{field}' to size"
        )));
    }
    Ok(schema)
}

fn brainstorm_profile(
    key: &str,
    model: &str,
    num_questions: usize,
    limits: RateLimits,
) -> Result<QuestionProfile> {
    let full_schema = pinned_schema::<QuestionResponse>(QUESTIONS_FIELD, num_questions)?;

    let system_prompt = question_generation_prompt(num_questions, &full_schema);
    let schema = transform_for_response(full_schema);
    let config = GenerateContentConfig::new().with_json_schema(schema.clone());

    Ok(QuestionProfile {
        key: key.to_string(),
        model: model.to_string(),
        system_prompt,
        schema,
        num_questions,
        config,
        limits,
    })
}
