use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelFamily {
    Flash,
    Pro,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_serde() {
        let json = serde_json::to_string(&ModelFamily::Pro).unwrap();
        assert_eq!(json, "\"pro\"");

        let family: ModelFamily = serde_json::from_str("\"flash\"").unwrap();
        assert_eq!(family, ModelFamily::Flash);
    }
}
