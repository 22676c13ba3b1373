use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{
    GEMINI_2_0_FLASH, GEMINI_2_5_FLASH_PREVIEW_04_17, GEMINI_2_5_PRO_EXP_03_25,
    GEMINI_2_5_PRO_PREVIEW_03_25, GEMINI_2_5_PRO_PREVIEW_05_06,
};

pub const SUMMARY_EXTRACT: &str = "gemini-2.0-flash-ver1";
pub const SUMMARY_EXPLAIN: &str = "gemini-2.0-flash-ver2";
pub const SUMMARY_REORDER: &str = "gemini-2.0-flash-ver3";

const QUESTION_KEYS: &[&str] = &[GEMINI_2_0_FLASH, GEMINI_2_5_PRO_PREVIEW_05_06];
const COT_KEYS: &[&str] = &[
    GEMINI_2_0_FLASH,
    GEMINI_2_5_PRO_PREVIEW_03_25,
    GEMINI_2_5_PRO_PREVIEW_05_06,
];
const DIRECT_KEYS: &[&str] = &[GEMINI_2_5_FLASH_PREVIEW_04_17, GEMINI_2_5_PRO_EXP_03_25];
const SUMMARY_KEYS: &[&str] = &[SUMMARY_EXTRACT, SUMMARY_EXPLAIN, SUMMARY_REORDER];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    QuestionGeneration,
    ChainOfThought,
    DirectAnswer,
    Summary,
}

impl Stage {
    pub const ALL: [Stage; 4] = [
        Stage::QuestionGeneration,
        Stage::ChainOfThought,
        Stage::DirectAnswer,
        Stage::Summary,
    ];

    /// Profile keys this stage accepts.
    pub fn known_keys(&self) -> &'static [&'static str] {
        match self {
            Self::QuestionGeneration => QUESTION_KEYS,
            Self::ChainOfThought => COT_KEYS,
            Self::DirectAnswer => DIRECT_KEYS,
            Self::Summary => SUMMARY_KEYS,
        }
    }

    pub fn is_known(&self, key: &str) -> bool {
        self.known_keys().contains(&key)
    }

    /// Prefix for this stage's settings keys, e.g. `cot.model`.
    pub fn config_prefix(&self) -> &'static str {
        match self {
            Self::QuestionGeneration => "questions",
            Self::ChainOfThought => "cot",
            Self::DirectAnswer => "direct",
            Self::Summary => "summary",
        }
    }

    pub fn has_rate_limits(&self) -> bool {
        !matches!(self, Self::Summary)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::QuestionGeneration => "question generation",
            Self::ChainOfThought => "chain-of-thought",
            Self::DirectAnswer => "direct answer",
            Self::Summary => "summary",
        };
        f.write_str(name)
    }
}
