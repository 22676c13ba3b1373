//! Answering profiles: with a written chain of thought, or direct.

use serde::Serialize;

use super::stage::Stage;
use super::templates::PromptTemplates;
use crate::dispatch::RateLimits;
use crate::generation::{GenerateContentConfig, ThinkingConfig};
use crate::models::{
    GEMINI_2_0_FLASH, GEMINI_2_5_FLASH_PREVIEW_04_17, GEMINI_2_5_PRO_EXP_03_25,
    GEMINI_2_5_PRO_PREVIEW_03_25, GEMINI_2_5_PRO_PREVIEW_05_06, ModelId,
};
use crate::prompts::{
    COT_FEW_SHOT_PROMPT, COT_LED_CONTEXT_PROMPT, COT_OUTLINE_PROMPT, DIRECT_ANSWER_PROMPT,
};
use crate::{Error, Result};

/// Thinking tokens granted to the direct flash profile.
pub const DIRECT_FLASH_THINKING_BUDGET: u32 = 8000;

#[derive(Debug, Clone, Serialize)]
pub struct AnswerProfile {
    pub stage: Stage,
    pub key: String,
    pub model: ModelId,
    pub system_prompt: String,
    pub templates: PromptTemplates,
    pub config: GenerateContentConfig,
    pub limits: RateLimits,
}

impl AnswerProfile {
    fn new(stage: Stage, model: &str, system_prompt: &str, limits: RateLimits) -> Self {
        Self {
            stage,
            key: model.to_string(),
            model: model.to_string(),
            system_prompt: system_prompt.to_string(),
            templates: PromptTemplates::passthrough(),
            config: GenerateContentConfig::new().with_system_instruction(system_prompt),
            limits,
        }
    }

    fn with_config(mut self, config: GenerateContentConfig) -> Self {
        self.config = config;
        self
    }

    /// User turn for `question` through the default template.
    pub fn user_prompt(&self, question: &str) -> String {
        self.templates.render(super::DEFAULT_TEMPLATE, question)
    }
}

/// Select the chain-of-thought answering profile for `key`.
pub fn cot_profile(key: &str) -> Result<AnswerProfile> {
    let profile = match key {
        GEMINI_2_0_FLASH => AnswerProfile::new(
            Stage::ChainOfThought,
            GEMINI_2_0_FLASH,
            COT_FEW_SHOT_PROMPT,
            RateLimits::new(150, 1, 40),
        ),
        GEMINI_2_5_PRO_PREVIEW_03_25 => AnswerProfile::new(
            Stage::ChainOfThought,
            GEMINI_2_5_PRO_PREVIEW_03_25,
            COT_LED_CONTEXT_PROMPT,
            RateLimits::new(7, 2, 4),
        ),
        GEMINI_2_5_PRO_PREVIEW_05_06 => AnswerProfile::new(
            Stage::ChainOfThought,
            GEMINI_2_5_PRO_PREVIEW_05_06,
            COT_OUTLINE_PROMPT,
            RateLimits::new(50, 4, 25),
        ),
        _ => {
            return Err(Error::UnknownProfile {
                stage: Stage::ChainOfThought,
                key: key.to_string(),
            });
        }
    };

    tracing::debug!(key, model = %profile.model, "selected chain-of-thought profile");
    Ok(profile)
}

/// Select the direct (no written reasoning) answering profile for `key`.
pub fn direct_profile(key: &str) -> Result<AnswerProfile> {
    let profile = match key {
        GEMINI_2_5_FLASH_PREVIEW_04_17 => {
            let profile = AnswerProfile::new(
                Stage::DirectAnswer,
                GEMINI_2_5_FLASH_PREVIEW_04_17,
                DIRECT_ANSWER_PROMPT,
                RateLimits::new(100, 1, 20),
            );
            let config = profile.config.clone().with_thinking(
                ThinkingConfig::with_budget(DIRECT_FLASH_THINKING_BUDGET).include_thoughts(),
            );
            profile.with_config(config)
        }
        GEMINI_2_5_PRO_EXP_03_25 => AnswerProfile::new(
            Stage::DirectAnswer,
            GEMINI_2_5_PRO_EXP_03_25,
            DIRECT_ANSWER_PROMPT,
            RateLimits::new(7, 1, 4),
        ),
        _ => {
            return Err(Error::UnknownProfile {
                stage: Stage::DirectAnswer,
                key: key.to_string(),
            });
        }
    };

    tracing::debug!(key, model = %profile.model, "selected direct answer profile");
    Ok(profile)
}
