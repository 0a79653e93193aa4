use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Метаданные каталога (только для отображения).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogMeta {
    #[serde(rename = "lastUpdated", default)]
    pub last_updated: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_last_updated() {
        let meta: CatalogMeta =
            serde_json::from_str(r#"{"lastUpdated":"2025-11-03T10:15:00Z"}"#).unwrap();
        assert!(meta.last_updated.is_some());

        // Отсутствующее поле — просто None
        let meta: CatalogMeta = serde_json::from_str("{}").unwrap();
        assert!(meta.last_updated.is_none());
    }
}
