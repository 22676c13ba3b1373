use serde::Serialize;

use super::answering::{AnswerProfile, cot_profile, direct_profile};
use super::questions::{QuestionProfile, question_profile};
use super::summary::{SummaryProfile, summary_profile};
use super::{Profile, Stage};
use crate::Result;
use crate::config::PipelineSettings;

/// Every stage's profile, resolved from one set of settings.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineProfiles {
    pub questions: QuestionProfile,
    pub cot: AnswerProfile,
    pub direct: AnswerProfile,
    pub summary: SummaryProfile,
}

impl PipelineProfiles {
    /// Select and validate all four profiles, applying budget overrides.
    pub fn resolve(settings: &PipelineSettings) -> Result<Self> {
        let mut questions = question_profile(
            settings.model_key(Stage::QuestionGeneration),
            settings.num_questions,
        )?;
        questions.limits = questions
            .limits
            .with_overrides(&settings.limit_overrides(Stage::QuestionGeneration));

        let mut cot = cot_profile(settings.model_key(Stage::ChainOfThought))?;
        cot.limits = cot
            .limits
            .with_overrides(&settings.limit_overrides(Stage::ChainOfThought));

        let mut direct = direct_profile(settings.model_key(Stage::DirectAnswer))?;
        direct.limits = direct
            .limits
            .with_overrides(&settings.limit_overrides(Stage::DirectAnswer));

        let summary = summary_profile(settings.model_key(Stage::Summary))?;

        let profiles = Self {
            questions,
            cot,
            direct,
            summary,
        };
        for profile in profiles.iter() {
            profile.validate()?;
        }

        tracing::info!(
            questions = %profiles.questions.model,
            cot = %profiles.cot.model,
            direct = %profiles.direct.model,
            summary = %profiles.summary.model,
            "resolved pipeline profiles"
        );
        Ok(profiles)
    }

    pub fn get(&self, stage: Stage) -> &dyn Profile {
        match stage {
            Stage::QuestionGeneration => &self.questions,
            Stage::ChainOfThought => &self.cot,
            Stage::DirectAnswer => &self.direct,
            Stage::Summary => &self.summary,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Profile> {
        Stage::ALL.into_iter().map(|stage| self.get(stage))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::dispatch::{LimitOverrides, RateLimits};
    use crate::models::{GEMINI_2_0_FLASH, GEMINI_2_5_FLASH_PREVIEW_04_17};

    #[test]
    fn test_resolve_defaults() {
        let profiles = PipelineProfiles::resolve(&PipelineSettings::default()).unwrap();

        assert_eq!(profiles.questions.model, GEMINI_2_0_FLASH);
        assert_eq!(profiles.questions.num_questions, 5);
        assert_eq!(profiles.cot.model, GEMINI_2_0_FLASH);
        assert_eq!(profiles.direct.model, GEMINI_2_5_FLASH_PREVIEW_04_17);
        assert_eq!(profiles.summary.key, "gemini-2.0-flash-ver3");
    }

    #[test]
    fn test_resolve_applies_overrides() {
        let settings = PipelineSettings {
            cot_limits: LimitOverrides {
                requests_per_minute: Some(10),
                max_async_workers: Some(2),
                ..Default::default()
            },
            ..Default::default()
        };

        let profiles = PipelineProfiles::resolve(&settings).unwrap();
        assert_eq!(profiles.cot.limits, RateLimits::new(10, 1, 2));
        assert_eq!(profiles.direct.limits, RateLimits::new(100, 1, 20));
    }

    #[test]
    fn test_resolve_rejects_zero_override() {
        let settings = PipelineSettings {
            question_limits: LimitOverrides {
                requests_per_minute: Some(0),
                ..Default::default()
            },
            ..Default::default()
        };

        assert!(matches!(
            PipelineProfiles::resolve(&settings),
            Err(Error::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_resolve_rejects_oversized_question_count() {
        let settings = PipelineSettings {
            num_questions: usize::MAX,
            ..Default::default()
        };

        assert!(matches!(
            PipelineProfiles::resolve(&settings),
            Err(Error::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_resolve_unknown_key() {
        let settings = PipelineSettings {
            summary_model: "gemini-2.0-flash-ver9".into(),
            ..Default::default()
        };

        assert!(matches!(
            PipelineProfiles::resolve(&settings),
            Err(Error::UnknownProfile { stage: Stage::Summary, .. })
        ));
    }

    #[test]
    fn test_iter_visits_stages_in_order() {
        let profiles = PipelineProfiles::resolve(&PipelineSettings::default()).unwrap();
        let stages: Vec<Stage> = profiles.iter().map(|p| p.stage()).collect();
        assert_eq!(stages, Stage::ALL.to_vec());
    }
}
