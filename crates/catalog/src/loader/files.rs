//! Чтение источников с диска по конфигурации.
//!
//! Здесь файл просто либо читается, либо нет; обязателен ли источник,
//! решает [`super::load_catalog`].

use std::path::Path;

use super::{
    RawSources, SRC_BASE_PRODUCTS, SRC_BRAND_TIERS, SRC_DESCRIPTIONS, SRC_META,
    SRC_TIER_OVERRIDES, SRC_VARIANTS,
};
use crate::shared::config::{resolve_sources_dir, Config};

/// Читает все источники из каталога данных, указанного в конфиге.
pub fn read_sources(config: &Config) -> anyhow::Result<RawSources> {
    let dir = resolve_sources_dir(config)?;
    tracing::info!("Reading catalog sources from {}", dir.display());

    let s = &config.sources;
    Ok(RawSources {
        base_products: read_source(&dir.join(&s.base_products), SRC_BASE_PRODUCTS),
        tier_overrides: read_source(&dir.join(&s.tier_overrides), SRC_TIER_OVERRIDES),
        brand_tiers: read_source(&dir.join(&s.brand_tiers), SRC_BRAND_TIERS),
        variants: read_source(&dir.join(&s.variants), SRC_VARIANTS),
        descriptions: read_source(&dir.join(&s.descriptions), SRC_DESCRIPTIONS),
        meta: read_source(&dir.join(&s.meta), SRC_META),
    })
}

fn read_source(path: &Path, name: &str) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Some(text),
        Err(e) => {
            tracing::warn!("Source '{}' not readable at {}: {}", name, path.display(), e);
            None
        }
    }
}
