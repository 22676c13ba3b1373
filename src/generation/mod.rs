//! Request shaping: generation config and structured-output schemas.

mod config;
mod schema;

pub use config::{
    ConfigValidationError, GenerateContentConfig, JSON_MIME_TYPE, MAX_TEMPERATURE, ThinkingConfig,
};
pub use schema::{display_schema, response_schema, set_array_length, transform_for_response};
