use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Request budget attached to a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimits {
    pub requests_per_minute: u32,
    /// Retries after the first attempt.
    pub max_retries: u32,
    pub max_async_workers: usize,
}

impl RateLimits {
    pub const fn new(requests_per_minute: u32, max_retries: u32, max_async_workers: usize) -> Self {
        Self {
            requests_per_minute,
            max_retries,
            max_async_workers,
        }
    }

    /// Minimum spacing between request starts.
    pub fn request_interval(&self) -> Duration {
        Duration::from_secs(60) / self.requests_per_minute.max(1)
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    pub fn validate(&self) -> Result<()> {
        if self.requests_per_minute == 0 {
            return Err(Error::InvalidRequest(
                "requests_per_minute must be greater than zero".into(),
            ));
        }
        if self.max_async_workers == 0 {
            return Err(Error::InvalidRequest(
                "max_async_workers must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    pub fn with_overrides(self, overrides: &LimitOverrides) -> Self {
        Self {
            requests_per_minute: overrides
                .requests_per_minute
                .unwrap_or(self.requests_per_minute),
            max_retries: overrides.max_retries.unwrap_or(self.max_retries),
            max_async_workers: overrides
                .max_async_workers
                .unwrap_or(self.max_async_workers),
        }
    }
}

/// Partial replacement for a profile's [`RateLimits`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requests_per_minute: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_retries: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_async_workers: Option<usize>,
}

impl LimitOverrides {
    pub fn is_empty(&self) -> bool {
        self.requests_per_minute.is_none()
            && self.max_retries.is_none()
            && self.max_async_workers.is_none()
    }
}
