//! Answer post-processing profiles.

use serde::Serialize;

use super::stage::{SUMMARY_EXPLAIN, SUMMARY_EXTRACT, SUMMARY_REORDER, Stage};
use crate::generation::GenerateContentConfig;
use crate::models::{GEMINI_2_0_FLASH, ModelId};
use crate::prompts::{SUMMARY_EXPLAIN_PROMPT, SUMMARY_EXTRACT_PROMPT, SUMMARY_REORDER_PROMPT};
use crate::{Error, Result};

/// Summary profiles carry no request budget of their own.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryProfile {
    pub key: String,
    pub model: ModelId,
    pub system_prompt: String,
    pub config: GenerateContentConfig,
}

/// Select the summary profile for `key`.
///
/// `ver1` extracts the bare answer, `ver2` puts the answer first with a
/// synthesized explanation, `ver3` reorders without rewriting.
pub fn summary_profile(key: &str) -> Result<SummaryProfile> {
    let (system_prompt, config) = match key {
        SUMMARY_EXTRACT => (
            SUMMARY_EXTRACT_PROMPT,
            GenerateContentConfig::new()
                .with_temperature(0.01)
                .with_max_output_tokens(512),
        ),
        SUMMARY_EXPLAIN => (
            SUMMARY_EXPLAIN_PROMPT,
            GenerateContentConfig::new()
                .with_temperature(0.1)
                .with_max_output_tokens(1024),
        ),
        SUMMARY_REORDER => (SUMMARY_REORDER_PROMPT, GenerateContentConfig::new()),
        _ => {
            return Err(Error::UnknownProfile {
                stage: Stage::Summary,
                key: key.to_string(),
            });
        }
    };

    tracing::debug!(key, "selected summary profile");
    Ok(SummaryProfile {
        key: key.to_string(),
        model: GEMINI_2_0_FLASH.to_string(),
        system_prompt: system_prompt.to_string(),
        config: config.with_system_instruction(system_prompt),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_profile() {
        let profile = summary_profile(SUMMARY_EXTRACT).unwrap();

        assert_eq!(profile.model, GEMINI_2_0_FLASH);
        assert_eq!(profile.config.temperature, Some(0.01));
        assert_eq!(profile.config.max_output_tokens, Some(512));
        assert_eq!(
            profile.config.system_instruction.as_deref(),
            Some(SUMMARY_EXTRACT_PROMPT)
        );
    }

    #[test]
    fn test_explain_profile() {
        let profile = summary_profile(SUMMARY_EXPLAIN).unwrap();

        assert_eq!(profile.config.temperature, Some(0.1));
        assert_eq!(profile.config.max_output_tokens, Some(1024));
        assert!(profile.system_prompt.contains("Examiner Note"));
    }

    #[test]
    fn test_reorder_profile_uses_provider_defaults() {
        let profile = summary_profile(SUMMARY_REORDER).unwrap();

        assert!(profile.config.temperature.is_none());
        assert!(profile.config.max_output_tokens.is_none());
        assert_eq!(profile.system_prompt, SUMMARY_REORDER_PROMPT);
    }

    #[test]
    fn test_model_id_is_not_a_summary_key() {
        let err = summary_profile(GEMINI_2_0_FLASH).unwrap_err();
        assert!(err.to_string().contains("gemini-2.0-flash-ver1"));
    }
}
