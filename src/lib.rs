//! # vidqa-profiles
//!
//! Model profiles for a video question-answering pipeline.
//!
//! Each pipeline stage (question generation, chain-of-thought answering,
//! direct answering and answer summarization) is driven by a profile: the
//! model to call, its system instruction, the output contract, the
//! generate-content config and the request budget. Profiles are selected by a
//! string key and never touch the network.
//!
//! ## Selecting profiles
//!
//! ```rust
//! use vidqa_profiles::{Stage, cot_profile, direct_profile, summary_profile};
//!
//! let cot = cot_profile("gemini-2.0-flash")?;
//! assert_eq!(cot.limits.requests_per_minute, 150);
//!
//! let direct = direct_profile("gemini-2.5-flash-preview-04-17")?;
//! assert!(direct.config.thinking_config.is_some());
//!
//! let err = summary_profile("gemini-2.0-flash").unwrap_err();
//! assert!(err.to_string().contains("gemini-2.0-flash-ver1"));
//! # let _ = Stage::Summary;
//! # Ok::<(), vidqa_profiles::Error>(())
//! ```
//!
//! ## Resolving a whole pipeline
//!
//! ```rust,no_run
//! use vidqa_profiles::{PipelineProfiles, PipelineSettings};
//!
//! # async fn run() -> vidqa_profiles::Result<()> {
//! let settings = PipelineSettings::from_env().await?;
//! let profiles = PipelineProfiles::resolve(&settings)?;
//! println!("{}", profiles.questions.system_prompt);
//! # Ok(())
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod dispatch;
pub mod generation;
pub mod models;
pub mod profiles;
pub mod prompts;

pub use config::{
    CompositeConfigProvider, ConfigBuilder, ConfigError, ConfigProvider, ConfigProviderExt,
    EnvConfigProvider, FileConfigProvider, MemoryConfigProvider, PipelineSettings,
};
pub use dispatch::{
    Dispatcher, ExponentialBackoff, LimitOverrides, RateLimits, RequestPacer, Retryable,
};
pub use generation::{
    ConfigValidationError, GenerateContentConfig, ThinkingConfig, display_schema,
    response_schema, set_array_length,
};
pub use models::{
    Capabilities, ModelFamily, ModelId, ModelRegistry, ModelSpec, ModelVersion,
    ReleaseChannel, registry as model_registry,
};
pub use profiles::{
    AnswerProfile, PipelineProfiles, Profile, PromptTemplates, QuestionProfile, QuestionResponse,
    Stage, SummaryProfile, cot_profile, direct_profile, question_profile,
    question_profile_default, summary_profile,
};

/// Error type for profile selection and budget enforcement.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The key is not one of the stage's profiles.
    #[error("Unknown {stage} profile '{key}' (known: {})", stage.known_keys().join(", "))]
    UnknownProfile { stage: profiles::Stage, key: String },

    /// Request parameters are invalid.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// A generate-content config does not fit its model.
    #[error("Generation config rejected: {0}")]
    GenerationConfig(#[from] generation::ConfigValidationError),

    /// Invalid or missing configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization or deserialization failed.
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// File system operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Required environment variable missing or invalid.
    #[error("Environment variable error: {0}")]
    Env(#[from] std::env::VarError),

    /// Error reported by the operation a caller dispatches.
    #[error("API error (HTTP {status}): {message}", status = status.map(|s| s.to_string()).unwrap_or_else(|| "unknown".into()))]
    Api {
        message: String,
        status: Option<u16>,
    },

    /// Rate limit exceeded.
    #[error("Rate limit exceeded{}", match retry_after {
        Some(d) => format!(", retry in {:.0}s", d.as_secs_f64()),
        None => String::new(),
    })]
    RateLimit {
        retry_after: Option<std::time::Duration>,
    },

    /// Operation exceeded timeout.
    #[error("Operation timed out after {:.1}s", .0.as_secs_f64())]
    Timeout(std::time::Duration),

    /// Model output did not match the expected structure.
    #[error("Schema mismatch: {0}")]
    Schema(String),
}

/// Error category for unified error handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Unknown keys, bad settings or configs that do not fit a model
    Configuration,
    /// Rate limits, timeouts and server errors that may succeed on retry
    Transient,
    /// IO, JSON, schema and other unexpected failures
    Internal,
}

impl Error {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::UnknownProfile { .. }
            | Error::InvalidRequest(_)
            | Error::GenerationConfig(_)
            | Error::Config(_)
            | Error::Env(_) => ErrorCategory::Configuration,

            Error::RateLimit { .. } | Error::Timeout(_) => ErrorCategory::Transient,
            Error::Api {
                status: Some(429 | 500..=599),
                ..
            } => ErrorCategory::Transient,

            Error::Io(_) | Error::Json(_) | Error::Schema(_) | Error::Api { .. } => {
                ErrorCategory::Internal
            }
        }
    }

    pub fn is_configuration_error(&self) -> bool {
        self.category() == ErrorCategory::Configuration
    }

    pub fn is_retryable(&self) -> bool {
        self.category() == ErrorCategory::Transient
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => *status,
            _ => None,
        }
    }

    pub fn retry_after(&self) -> Option<std::time::Duration> {
        match self {
            Error::RateLimit { retry_after } => *retry_after,
            _ => None,
        }
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        match err {
            config::ConfigError::InvalidValue { key, message } => {
                Error::Config(format!("Invalid value for {}: {}", key, message))
            }
            config::ConfigError::Serialization(e) => Error::Json(e),
            config::ConfigError::Io(e) => Error::Io(e),
            config::ConfigError::Env(e) => Error::Env(e),
            config::ConfigError::ValidationErrors(errors) => Error::Config(errors.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
