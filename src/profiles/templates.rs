use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const DEFAULT_TEMPLATE: &str = "default";
pub const QUESTION_PLACEHOLDER: &str = "{question}";

/// Named user-turn templates. Each template wraps a question through the
/// `{question}` placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PromptTemplates(BTreeMap<String, String>);

impl PromptTemplates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only a `default` template that forwards the question unchanged.
    pub fn passthrough() -> Self {
        Self::new().with_template(DEFAULT_TEMPLATE, QUESTION_PLACEHOLDER)
    }

    pub fn with_template(mut self, name: impl Into<String>, template: impl Into<String>) -> Self {
        self.0.insert(name.into(), template.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Render `question` through template `name`, falling back to `default`
    /// and then to the bare question.
    pub fn render(&self, name: &str, question: &str) -> String {
        match self.get(name).or_else(|| self.get(DEFAULT_TEMPLATE)) {
            Some(template) => template.replace(QUESTION_PLACEHOLDER, question),
            None => question.to_string(),
        }
    }
}
