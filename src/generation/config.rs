//! Generation parameters sent alongside each content request.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::ModelSpec;

pub const JSON_MIME_TYPE: &str = "application/json";
pub const MAX_TEMPERATURE: f32 = 2.0;

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValidationError {
    TemperatureOutOfRange { value: f32 },
    TopPOutOfRange { value: f32 },
    MaxOutputTokensTooHigh { max: u64, actual: u32 },
    ThinkingUnsupported { model: String },
    SchemaWithoutJsonMime,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TemperatureOutOfRange { value } => {
                write!(f, "temperature ({value}) must be within 0.0..={MAX_TEMPERATURE}")
            }
            Self::TopPOutOfRange { value } => {
                write!(f, "top_p ({value}) must be within 0.0..=1.0")
            }
            Self::MaxOutputTokensTooHigh { max, actual } => {
                write!(f, "max_output_tokens ({actual}) exceeds model limit ({max})")
            }
            Self::ThinkingUnsupported { model } => {
                write!(f, "thinking_config set but {model} does not support thinking")
            }
            Self::SchemaWithoutJsonMime => {
                write!(f, "response_schema requires response_mime_type {JSON_MIME_TYPE}")
            }
        }
    }
}

impl std::error::Error for ConfigValidationError {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThinkingConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_thoughts: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thinking_budget: Option<u32>,
}

impl ThinkingConfig {
    pub fn with_budget(budget: u32) -> Self {
        Self {
            include_thoughts: None,
            thinking_budget: Some(budget),
        }
    }

    pub fn include_thoughts(mut self) -> Self {
        self.include_thoughts = Some(true);
        self
    }
}

/// Request-shaping options for a `generateContent` call.
///
/// Unset fields are omitted on the wire so the provider applies its own
/// defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thinking_config: Option<ThinkingConfig>,
}

impl GenerateContentConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }

    pub fn with_top_k(mut self, top_k: u32) -> Self {
        self.top_k = Some(top_k);
        self
    }

    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = Some(max_output_tokens);
        self
    }

    pub fn with_candidate_count(mut self, count: u32) -> Self {
        self.candidate_count = Some(count);
        self
    }

    /// Request JSON output constrained by `schema`.
    pub fn with_json_schema(mut self, schema: Value) -> Self {
        self.response_mime_type = Some(JSON_MIME_TYPE.to_string());
        self.response_schema = Some(schema);
        self
    }

    pub fn with_thinking(mut self, thinking: ThinkingConfig) -> Self {
        self.thinking_config = Some(thinking);
        self
    }

    pub fn is_structured(&self) -> bool {
        self.response_schema.is_some()
    }

    /// Check the config against the target model's limits.
    pub fn validate_for(&self, model: &ModelSpec) -> Result<(), ConfigValidationError> {
        if let Some(value) = self.temperature
            && !(0.0..=MAX_TEMPERATURE).contains(&value)
        {
            return Err(ConfigValidationError::TemperatureOutOfRange { value });
        }

        if let Some(value) = self.top_p
            && !(0.0..=1.0).contains(&value)
        {
            return Err(ConfigValidationError::TopPOutOfRange { value });
        }

        if let Some(actual) = self.max_output_tokens
            && u64::from(actual) > model.capabilities.max_output_tokens
        {
            return Err(ConfigValidationError::MaxOutputTokensTooHigh {
                max: model.capabilities.max_output_tokens,
                actual,
            });
        }

        if self.thinking_config.is_some() && !model.supports_thinking() {
            return Err(ConfigValidationError::ThinkingUnsupported {
                model: model.id.clone(),
            });
        }

        if self.response_schema.is_some()
            && self.response_mime_type.as_deref() != Some(JSON_MIME_TYPE)
        {
            return Err(ConfigValidationError::SchemaWithoutJsonMime);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GEMINI_2_0_FLASH, GEMINI_2_5_FLASH_PREVIEW_04_17, registry};
    use serde_json::json;

    #[test]
    fn test_serializes_camel_case_and_skips_unset() {
        let config = GenerateContentConfig::new()
            .with_system_instruction("be brief")
            .with_max_output_tokens(512);

        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(
            value,
            json!({"systemInstruction": "be brief", "maxOutputTokens": 512})
        );
    }

    #[test]
    fn test_thinking_config_wire_shape() {
        let config = GenerateContentConfig::new()
            .with_thinking(ThinkingConfig::with_budget(8000).include_thoughts());

        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(
            value["thinkingConfig"],
            json!({"includeThoughts": true, "thinkingBudget": 8000})
        );
    }

    #[test]
    fn test_json_schema_sets_mime_type() {
        let config = GenerateContentConfig::new().with_json_schema(json!({"type": "object"}));
        assert!(config.is_structured());
        assert_eq!(config.response_mime_type.as_deref(), Some(JSON_MIME_TYPE));
    }

    #[test]
    fn test_validate_rejects_thinking_on_flash_2_0() {
        let flash = registry().get(GEMINI_2_0_FLASH).unwrap();
        let config = GenerateContentConfig::new().with_thinking(ThinkingConfig::with_budget(1024));

        assert_eq!(
            config.validate_for(flash),
            Err(ConfigValidationError::ThinkingUnsupported {
                model: GEMINI_2_0_FLASH.into()
            })
        );

        let thinking_flash = registry().get(GEMINI_2_5_FLASH_PREVIEW_04_17).unwrap();
        assert!(config.validate_for(thinking_flash).is_ok());
    }

    #[test]
    fn test_validate_ranges() {
        let flash = registry().get(GEMINI_2_0_FLASH).unwrap();

        let hot = GenerateContentConfig::new().with_temperature(2.5);
        assert!(matches!(
            hot.validate_for(flash),
            Err(ConfigValidationError::TemperatureOutOfRange { .. })
        ));

        let long = GenerateContentConfig::new().with_max_output_tokens(100_000);
        assert!(matches!(
            long.validate_for(flash),
            Err(ConfigValidationError::MaxOutputTokensTooHigh { max: 8_192, .. })
        ));

        let mut schema_only = GenerateContentConfig::new();
        schema_only.response_schema = Some(json!({"type": "string"}));
        assert_eq!(
            schema_only.validate_for(flash),
            Err(ConfigValidationError::SchemaWithoutJsonMime)
        );
    }
}
