//! Stage profiles: the model, instruction, output contract, request config
//! and budget a pipeline stage runs with.
//!
//! ```rust
//! use vidqa_profiles::profiles::{cot_profile, question_profile};
//!
//! let cot = cot_profile("gemini-2.5-pro-preview-05-06")?;
//! assert_eq!(cot.limits.max_async_workers, 25);
//!
//! let questions = question_profile("gemini-2.0-flash", 3)?;
//! assert_eq!(questions.candidate_pool_size(), 9);
//! # Ok::<(), vidqa_profiles::Error>(())
//! ```

mod answering;
mod pipeline;
mod questions;
mod stage;
mod summary;
mod templates;

pub use answering::{AnswerProfile, DIRECT_FLASH_THINKING_BUDGET, cot_profile, direct_profile};
pub use pipeline::PipelineProfiles;
pub use questions::{
    CANDIDATE_MULTIPLIER, DEFAULT_NUM_QUESTIONS, MAX_NUM_QUESTIONS, QuestionProfile,
    QuestionResponse, question_profile, question_profile_default,
};
pub use stage::{SUMMARY_EXPLAIN, SUMMARY_EXTRACT, SUMMARY_REORDER, Stage};
pub use summary::{SummaryProfile, summary_profile};
pub use templates::{DEFAULT_TEMPLATE, PromptTemplates, QUESTION_PLACEHOLDER};

use crate::dispatch::RateLimits;
use crate::generation::GenerateContentConfig;
use crate::models::registry;
use crate::{Error, Result};

/// Common view over the per-stage profile types.
pub trait Profile: std::fmt::Debug + Send + Sync {
    fn stage(&self) -> Stage;
    fn key(&self) -> &str;
    fn model(&self) -> &str;
    fn system_prompt(&self) -> &str;
    fn config(&self) -> &GenerateContentConfig;

    fn limits(&self) -> Option<RateLimits> {
        None
    }

    /// Check the model is catalogued, the config fits it and the budget is usable.
    fn validate(&self) -> Result<()> {
        let spec = registry().get(self.model()).ok_or_else(|| {
            Error::Config(format!("model '{}' is not in the registry", self.model()))
        })?;
        self.config().validate_for(spec)?;
        if let Some(limits) = self.limits() {
            limits.validate()?;
        }
        Ok(())
    }
}

impl Profile for QuestionProfile {
    fn stage(&self) -> Stage {
        Stage::QuestionGeneration
    }

    fn key(&self) -> &str {
        &self.key
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    fn config(&self) -> &GenerateContentConfig {
        &self.config
    }

    fn limits(&self) -> Option<RateLimits> {
        Some(self.limits)
    }
}

impl Profile for AnswerProfile {
    fn stage(&self) -> Stage {
        self.stage
    }

    fn key(&self) -> &str {
        &self.key
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    fn config(&self) -> &GenerateContentConfig {
        &self.config
    }

    fn limits(&self) -> Option<RateLimits> {
        Some(self.limits)
    }
}

impl Profile for SummaryProfile {
    fn stage(&self) -> Stage {
        Stage::Summary
    }

    fn key(&self) -> &str {
        &self.key
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    fn config(&self) -> &GenerateContentConfig {
        &self.config
    }
}

/// Select the profile for `key` in `stage`; question profiles get the
/// default question count.
pub fn select(stage: Stage, key: &str) -> Result<Box<dyn Profile>> {
    Ok(match stage {
        Stage::QuestionGeneration => Box::new(question_profile_default(key)?),
        Stage::ChainOfThought => Box::new(cot_profile(key)?),
        Stage::DirectAnswer => Box::new(direct_profile(key)?),
        Stage::Summary => Box::new(summary_profile(key)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_known_key_selects_a_valid_profile() {
        for stage in Stage::ALL {
            for key in stage.known_keys() {
                let profile = select(stage, key).unwrap();
                assert_eq!(profile.stage(), stage);
                assert_eq!(profile.key(), *key);
                assert!(!profile.system_prompt().is_empty());
                profile.validate().unwrap();
            }
        }
    }

    #[test]
    fn test_only_summary_lacks_limits() {
        for stage in Stage::ALL {
            let key = stage.known_keys()[0];
            let profile = select(stage, key).unwrap();
            assert_eq!(profile.limits().is_some(), stage.has_rate_limits());
        }
    }

    #[test]
    fn test_unregistered_model_is_not_remapped() {
        let mut profile = direct_profile("gemini-2.5-flash-preview-04-17").unwrap();
        profile.model = "gemini-2.5-flash".to_string();

        let err = profile.validate().unwrap_err();
        assert!(matches!(err, Error::Config(ref m) if m.contains("'gemini-2.5-flash'")));
    }

    #[test]
    fn test_select_unknown_key_lists_known() {
        let err = select(Stage::DirectAnswer, "gemini-2.0-flash").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("direct answer"));
        assert!(message.contains("gemini-2.5-flash-preview-04-17"));
        assert!(message.contains("gemini-2.5-pro-exp-03-25"));
    }
}
