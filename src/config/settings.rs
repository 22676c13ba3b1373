//! Which profile each pipeline stage uses, and budget overrides.

use serde::{Deserialize, Serialize};

use super::env::EnvConfigProvider;
use super::provider::{ConfigProvider, ConfigProviderExt};
use super::{ConfigError, ConfigResult, ValidationErrors};
use crate::dispatch::LimitOverrides;
use crate::models::{GEMINI_2_0_FLASH, GEMINI_2_5_FLASH_PREVIEW_04_17};
use crate::profiles::{DEFAULT_NUM_QUESTIONS, MAX_NUM_QUESTIONS, SUMMARY_REORDER, Stage};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineSettings {
    pub question_model: String,
    pub num_questions: usize,
    pub cot_model: String,
    pub direct_model: String,
    pub summary_model: String,
    pub question_limits: LimitOverrides,
    pub cot_limits: LimitOverrides,
    pub direct_limits: LimitOverrides,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            question_model: GEMINI_2_0_FLASH.to_string(),
            num_questions: DEFAULT_NUM_QUESTIONS,
            cot_model: GEMINI_2_0_FLASH.to_string(),
            direct_model: GEMINI_2_5_FLASH_PREVIEW_04_17.to_string(),
            summary_model: SUMMARY_REORDER.to_string(),
            question_limits: LimitOverrides::default(),
            cot_limits: LimitOverrides::default(),
            direct_limits: LimitOverrides::default(),
        }
    }
}

impl PipelineSettings {
    /// Read settings from `provider`, keeping defaults for absent keys.
    ///
    /// Keys: `<stage>.model`, `questions.count`, and
    /// `<stage>.{requests_per_minute,max_retries,max_async_workers}` where
    /// `<stage>` is `questions`, `cot`, `direct` or `summary`.
    pub async fn load<P: ConfigProvider + ?Sized>(provider: &P) -> ConfigResult<Self> {
        let mut settings = Self::default();

        for stage in Stage::ALL {
            let key = format!("{}.model", stage.config_prefix());
            if let Some(model) = provider.get::<String>(&key).await? {
                *settings.model_key_mut(stage) = model;
            }
        }

        if let Some(count) = provider.get::<usize>("questions.count").await? {
            settings.num_questions = count;
        }

        settings.question_limits = load_overrides(provider, Stage::QuestionGeneration).await?;
        settings.cot_limits = load_overrides(provider, Stage::ChainOfThought).await?;
        settings.direct_limits = load_overrides(provider, Stage::DirectAnswer).await?;

        tracing::debug!(
            provider = provider.name(),
            question_model = %settings.question_model,
            cot_model = %settings.cot_model,
            direct_model = %settings.direct_model,
            summary_model = %settings.summary_model,
            num_questions = settings.num_questions,
            "loaded pipeline settings"
        );
        Ok(settings)
    }

    /// Settings from `VIDQA_*` environment variables.
    pub async fn from_env() -> ConfigResult<Self> {
        Self::load(&EnvConfigProvider::new()).await
    }

    pub fn model_key(&self, stage: Stage) -> &str {
        match stage {
            Stage::QuestionGeneration => &self.question_model,
            Stage::ChainOfThought => &self.cot_model,
            Stage::DirectAnswer => &self.direct_model,
            Stage::Summary => &self.summary_model,
        }
    }

    fn model_key_mut(&mut self, stage: Stage) -> &mut String {
        match stage {
            Stage::QuestionGeneration => &mut self.question_model,
            Stage::ChainOfThought => &mut self.cot_model,
            Stage::DirectAnswer => &mut self.direct_model,
            Stage::Summary => &mut self.summary_model,
        }
    }

    pub fn limit_overrides(&self, stage: Stage) -> LimitOverrides {
        match stage {
            Stage::QuestionGeneration => self.question_limits,
            Stage::ChainOfThought => self.cot_limits,
            Stage::DirectAnswer => self.direct_limits,
            Stage::Summary => LimitOverrides::default(),
        }
    }

    /// Check every stage key and override, reporting all problems at once.
    pub fn validate(&self) -> ConfigResult<()> {
        let mut errors = Vec::new();

        for stage in Stage::ALL {
            let key = self.model_key(stage);
            if !stage.is_known(key) {
                errors.push(ConfigError::InvalidValue {
                    key: format!("{}.model", stage.config_prefix()),
                    message: format!(
                        "unknown {stage} profile '{key}' (known: {})",
                        stage.known_keys().join(", ")
                    ),
                });
            }

            let overrides = self.limit_overrides(stage);
            let prefix = stage.config_prefix();
            if overrides.requests_per_minute == Some(0) {
                errors.push(ConfigError::InvalidValue {
                    key: format!("{prefix}.requests_per_minute"),
                    message: "must be greater than zero".into(),
                });
            }
            if overrides.max_async_workers == Some(0) {
                errors.push(ConfigError::InvalidValue {
                    key: format!("{prefix}.max_async_workers"),
                    message: "must be greater than zero".into(),
                });
            }
        }

        if !(1..=MAX_NUM_QUESTIONS).contains(&self.num_questions) {
            errors.push(ConfigError::InvalidValue {
                key: "questions.count".into(),
                message: format!("must be between 1 and {MAX_NUM_QUESTIONS}"),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::ValidationErrors(ValidationErrors(errors)))
        }
    }
}

async fn load_overrides<P: ConfigProvider + ?Sized>(
    provider: &P,
    stage: Stage,
) -> ConfigResult<LimitOverrides> {
    let prefix = stage.config_prefix();
    Ok(LimitOverrides {
        requests_per_minute: provider
            .get(&format!("{prefix}.requests_per_minute"))
            .await?,
        max_retries: provider.get(&format!("{prefix}.max_retries")).await?,
        max_async_workers: provider
            .get(&format!("{prefix}.max_async_workers"))
            .await?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::memory::MemoryConfigProvider;

    #[tokio::test]
    async fn test_load_defaults_from_empty_provider() {
        let settings = PipelineSettings::load(&MemoryConfigProvider::new())
            .await
            .unwrap();

        assert_eq!(settings, PipelineSettings::default());
        assert!(settings.validate().is_ok());
    }

    #[tokio::test]
    async fn test_load_models_counts_and_overrides() {
        let provider = MemoryConfigProvider::new()
            .value("cot.model", "gemini-2.5-pro-preview-03-25")
            .value("summary.model", "gemini-2.0-flash-ver1")
            .value("questions.count", "10")
            .value("cot.max_async_workers", "2")
            .value("direct.requests_per_minute", "30");

        let settings = PipelineSettings::load(&provider).await.unwrap();

        assert_eq!(settings.cot_model, "gemini-2.5-pro-preview-03-25");
        assert_eq!(settings.model_key(Stage::Summary), "gemini-2.0-flash-ver1");
        assert_eq!(settings.num_questions, 10);
        assert_eq!(settings.cot_limits.max_async_workers, Some(2));
        assert_eq!(settings.direct_limits.requests_per_minute, Some(30));
        assert!(settings.question_limits.is_empty());
    }

    #[tokio::test]
    async fn test_load_rejects_malformed_numbers() {
        let provider = MemoryConfigProvider::new().value("questions.count", "many");
        let err = PipelineSettings::load(&provider).await.unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let settings = PipelineSettings {
            cot_model: "gemini-2.5-pro-exp-03-25".into(),
            summary_model: "gemini-2.0-flash".into(),
            num_questions: 0,
            direct_limits: LimitOverrides {
                max_async_workers: Some(0),
                ..Default::default()
            },
            ..Default::default()
        };

        let Err(ConfigError::ValidationErrors(ValidationErrors(errors))) = settings.validate()
        else {
            panic!("expected validation errors");
        };
        assert_eq!(errors.len(), 4);
    }

    #[tokio::test]
    async fn test_validate_rejects_oversized_question_count() {
        let provider = MemoryConfigProvider::new().value("questions.count", "9223372036854775807");
        let settings = PipelineSettings::load(&provider).await.unwrap();

        let Err(ConfigError::ValidationErrors(ValidationErrors(errors))) = settings.validate()
        else {
            panic!("expected validation errors");
        };
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("questions.count"));
    }

    #[test]
    fn test_settings_deserialize_with_defaults() {
        let settings: PipelineSettings =
            serde_json::from_str(r#"{"direct_model": "gemini-2.5-pro-exp-03-25"}"#).unwrap();

        assert_eq!(settings.direct_model, "gemini-2.5-pro-exp-03-25");
        assert_eq!(settings.num_questions, DEFAULT_NUM_QUESTIONS);
    }
}
