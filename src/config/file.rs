//! JSON file configuration provider.
//!
//! Nested objects are addressed with dotted keys:
//! `{"cot": {"model": "gemini-2.0-flash"}}` answers `cot.model`.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tokio::sync::OnceCell;

use super::ConfigResult;
use super::provider::ConfigProvider;

pub struct FileConfigProvider {
    path: PathBuf,
    data: OnceCell<Value>,
}

impl FileConfigProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            data: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file reads as empty configuration.
    async fn load(&self) -> ConfigResult<Value> {
        if !tokio::fs::try_exists(&self.path).await? {
            tracing::debug!(path = %self.path.display(), "config file not found, using defaults");
            return Ok(Value::Object(Map::new()));
        }

        let content = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&content)?)
    }

    async fn data(&self) -> ConfigResult<&Value> {
        self.data.get_or_try_init(|| self.load()).await
    }
}

fn flatten(prefix: &str, value: &Value, out: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            for (k, v) in map {
                let key = if prefix.is_empty() {
                    k.clone()
                } else {
                    format!("{prefix}.{k}")
                };
                flatten(&key, v, out);
            }
        }
        _ => out.push(prefix.to_string()),
    }
}

#[async_trait::async_trait]
impl ConfigProvider for FileConfigProvider {
    fn name(&self) -> &str {
        "file"
    }

    async fn get_raw(&self, key: &str) -> ConfigResult<Option<String>> {
        let mut current = self.data().await?;
        for part in key.split('.') {
            match current.get(part) {
                Some(next) => current = next,
                None => return Ok(None),
            }
        }

        match current {
            Value::String(s) => Ok(Some(s.clone())),
            Value::Null => Ok(None),
            other => Ok(Some(other.to_string())),
        }
    }

    async fn list_keys(&self, prefix: &str) -> ConfigResult<Vec<String>> {
        let mut keys = Vec::new();
        flatten("", self.data().await?, &mut keys);
        keys.retain(|k| k.starts_with(prefix));
        keys.sort();
        Ok(keys)
    }
}

impl std::fmt::Debug for FileConfigProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileConfigProvider")
            .field("path", &self.path)
            .field("loaded", &self.data.initialized())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn write_config(dir: &TempDir, value: Value) -> PathBuf {
        let path = dir.path().join("vidqa.json");
        tokio::fs::write(&path, value.to_string()).await.unwrap();
        path
    }

    #[tokio::test]
    async fn test_file_provider_nested_keys() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(
            &temp_dir,
            serde_json::json!({
                "cot": {"model": "gemini-2.5-pro-preview-03-25", "max_retries": 3},
                "questions": {"count": 8}
            }),
        )
        .await;

        let provider = FileConfigProvider::new(path);

        assert_eq!(
            provider.get_raw("cot.model").await.unwrap(),
            Some("gemini-2.5-pro-preview-03-25".to_string())
        );
        assert_eq!(
            provider.get_raw("cot.max_retries").await.unwrap(),
            Some("3".to_string())
        );
        assert_eq!(provider.get_raw("cot.missing").await.unwrap(), None);
        assert_eq!(provider.get_raw("questions.count.deeper").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_file_provider_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let provider = FileConfigProvider::new(temp_dir.path().join("absent.json"));

        assert_eq!(provider.get_raw("cot.model").await.unwrap(), None);
        assert!(provider.list_keys("").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_file_provider_list_keys() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(
            &temp_dir,
            serde_json::json!({
                "direct": {"model": "gemini-2.5-pro-exp-03-25", "max_async_workers": 2},
                "summary": {"model": "gemini-2.0-flash-ver1"}
            }),
        )
        .await;

        let provider = FileConfigProvider::new(path);
        let keys = provider.list_keys("direct.").await.unwrap();
        assert_eq!(keys, vec!["direct.max_async_workers", "direct.model"]);
    }

    #[tokio::test]
    async fn test_file_provider_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        tokio::fs::write(&path, "{not json").await.unwrap();

        let provider = FileConfigProvider::new(path);
        assert!(provider.get_raw("cot.model").await.is_err());
    }
}
