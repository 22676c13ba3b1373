use std::collections::HashMap;
use std::sync::OnceLock;

use super::builtin;
use super::spec::{ModelId, ModelSpec};

static REGISTRY: OnceLock<ModelRegistry> = OnceLock::new();

pub fn registry() -> &'static ModelRegistry {
    REGISTRY.get_or_init(ModelRegistry::builtins)
}

/// Exact-id catalog of the models profiles may target.
///
/// Lookups never guess: an id that is not registered is reported as missing
/// rather than mapped onto a neighbouring model of the same family.
#[derive(Debug, Default)]
pub struct ModelRegistry {
    models: HashMap<ModelId, ModelSpec>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builtins() -> Self {
        let mut registry = Self::new();
        builtin::register_all(&mut registry);
        registry
    }

    pub fn register(&mut self, spec: ModelSpec) {
        self.models.insert(spec.id.clone(), spec);
    }

    pub fn get(&self, id: &str) -> Option<&ModelSpec> {
        self.models.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.models.contains_key(id)
    }

    pub fn all(&self) -> impl Iterator<Item = &ModelSpec> {
        self.models.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ModelFamily;
    use crate::models::builtin::{
        GEMINI_2_0_FLASH, GEMINI_2_5_FLASH_PREVIEW_04_17, GEMINI_2_5_PRO_EXP_03_25,
    };

    #[test]
    fn test_registry_builtins() {
        let registry = ModelRegistry::builtins();

        assert_eq!(registry.all().count(), 5);
        assert_eq!(
            registry.get(GEMINI_2_5_PRO_EXP_03_25).unwrap().family,
            ModelFamily::Pro
        );
        assert!(registry.get(GEMINI_2_5_FLASH_PREVIEW_04_17).unwrap().supports_thinking());
        assert!(!registry.get(GEMINI_2_0_FLASH).unwrap().supports_thinking());
    }

    #[test]
    fn test_registry_does_not_guess_unknown_ids() {
        let registry = ModelRegistry::builtins();

        assert!(registry.get("gemini-2.5-flash").is_none());
        assert!(!registry.contains("gemini-2.5-pro"));
        assert!(registry.get("flash").is_none());
    }

    #[test]
    fn test_register_replaces_same_id() {
        let mut registry = ModelRegistry::builtins();
        let mut spec = registry.get(GEMINI_2_0_FLASH).unwrap().clone();
        spec.capabilities.max_output_tokens = 4_096;
        registry.register(spec);

        assert_eq!(registry.all().count(), 5);
        assert_eq!(
            registry.get(GEMINI_2_0_FLASH).unwrap().capabilities.max_output_tokens,
            4_096
        );
    }

    #[test]
    fn test_registry_global() {
        assert!(registry().contains(GEMINI_2_0_FLASH));
    }
}
