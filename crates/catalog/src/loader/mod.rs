//! Загрузка каталога: разбор источников, join по tier, снимок в памяти.
//!
//! Снимок ([`Catalog`]) строится один раз за сессию и дальше не мутирует.
//! Обязательные источники (базовые изделия, варианты) при недоступности
//! валят всю загрузку; остальные деградируют до «нет данных».

pub mod base_products;
pub mod files;
pub mod variants;

use std::collections::{HashMap, HashSet};

use contracts::catalog::{BaseProduct, CatalogMeta, ProductVariant};
use thiserror::Error;

/// Разделитель полей во всех табличных источниках.
pub const DELIMITER: char = ',';

// Имена источников для сообщений об ошибках и логов.
pub const SRC_BASE_PRODUCTS: &str = "base-products";
pub const SRC_TIER_OVERRIDES: &str = "tier-overrides";
pub const SRC_BRAND_TIERS: &str = "brand-tier-defaults";
pub const SRC_VARIANTS: &str = "product-variants";
pub const SRC_DESCRIPTIONS: &str = "description-overrides";
pub const SRC_META: &str = "catalog-meta";

#[derive(Debug, Error)]
pub enum LoadError {
    /// Обязательный источник не прочитан. Терминально для всей загрузки:
    /// частичного каталога не бывает.
    #[error("source unavailable: {name}")]
    SourceUnavailable { name: String },
}

/// Сырые тексты источников. Чтение (файл, fetch) — вне ядра; `None`
/// означает «источник недоступен».
#[derive(Debug, Clone, Default)]
pub struct RawSources {
    pub base_products: Option<String>,
    pub tier_overrides: Option<String>,
    pub brand_tiers: Option<String>,
    pub variants: Option<String>,
    pub descriptions: Option<String>,
    pub meta: Option<String>,
}

/// Неизменяемый снимок каталога на сессию.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// В порядке исходных строк: порядок значим для выбора по умолчанию.
    pub base_products: Vec<BaseProduct>,
    pub variants: Vec<ProductVariant>,
    pub descriptions: HashMap<String, String>,
    pub meta: Option<CatalogMeta>,
}

impl Catalog {
    pub fn base_by_code(&self, code: &str) -> Option<&BaseProduct> {
        self.base_products.iter().find(|b| b.code == code)
    }

    /// Категории активных изделий, уникальные, в порядке появления.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.base_products
            .iter()
            .filter(|b| b.active)
            .map(|b| b.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }

    /// Активные изделия категории, в порядке исходных строк.
    pub fn bases_in_category(&self, category: &str) -> Vec<&BaseProduct> {
        self.base_products
            .iter()
            .filter(|b| b.active && b.category == category)
            .collect()
    }

    /// Варианты, пригодные к продаже: включён сам вариант и активно
    /// родительское базовое изделие.
    pub fn sellable_variants(&self) -> Vec<&ProductVariant> {
        let active_codes: HashSet<&str> = self
            .base_products
            .iter()
            .filter(|b| b.active)
            .map(|b| b.code.as_str())
            .collect();
        self.variants
            .iter()
            .filter(|v| v.enabled && active_codes.contains(v.base_code.as_str()))
            .collect()
    }

    pub fn description_for(&self, code: &str) -> Option<&str> {
        self.descriptions.get(code).map(String::as_str)
    }
}

/// Строит снимок каталога из сырых источников.
pub fn load_catalog(raw: &RawSources) -> Result<Catalog, LoadError> {
    let base_text = require_source(&raw.base_products, SRC_BASE_PRODUCTS)?;
    let variants_text = require_source(&raw.variants, SRC_VARIANTS)?;

    let tier_overrides = optional_tier_table(&raw.tier_overrides, "code", SRC_TIER_OVERRIDES);
    let brand_tiers = optional_tier_table(&raw.brand_tiers, "brand", SRC_BRAND_TIERS);

    let base_products =
        base_products::parse_base_products(base_text, &tier_overrides, &brand_tiers);
    let variants = variants::parse_variants(variants_text);
    let descriptions = parse_descriptions(&raw.descriptions);
    let meta = parse_meta(&raw.meta);

    tracing::info!(
        "Catalog loaded: {} base products, {} variants, {} description overrides",
        base_products.len(),
        variants.len(),
        descriptions.len()
    );

    Ok(Catalog {
        base_products,
        variants,
        descriptions,
        meta,
    })
}

fn require_source<'a>(source: &'a Option<String>, name: &str) -> Result<&'a str, LoadError> {
    source.as_deref().ok_or_else(|| LoadError::SourceUnavailable {
        name: name.to_string(),
    })
}

fn optional_tier_table(
    source: &Option<String>,
    key_column: &str,
    name: &str,
) -> HashMap<String, String> {
    match source {
        Some(text) => base_products::parse_tier_table(text, key_column),
        None => {
            tracing::warn!("Optional source '{}' unavailable, no overrides applied", name);
            HashMap::new()
        }
    }
}

fn parse_descriptions(source: &Option<String>) -> HashMap<String, String> {
    let Some(text) = source else {
        tracing::warn!(
            "Optional source '{}' unavailable, no description overrides",
            SRC_DESCRIPTIONS
        );
        return HashMap::new();
    };
    match serde_json::from_str::<HashMap<String, String>>(text) {
        Ok(map) => map,
        Err(e) => {
            tracing::warn!("Malformed '{}' source ignored: {}", SRC_DESCRIPTIONS, e);
            HashMap::new()
        }
    }
}

fn parse_meta(source: &Option<String>) -> Option<CatalogMeta> {
    let text = source.as_deref()?;
    match serde_json::from_str::<CatalogMeta>(text) {
        Ok(meta) => Some(meta),
        Err(e) => {
            tracing::warn!("Malformed '{}' source ignored: {}", SRC_META, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_sources() -> RawSources {
        RawSources {
            base_products: Some(
                "code,brand,model_name,label,category,tier,organic,usa_made,active,retail_price,fit_notes\n\
                 X1,Bella,3001,Classic Tee,tee,std,false,false,true,19.99,\n\
                 X2,Comfort,1717,Garment Dyed Tee,tee,,true,TRUE,true,24.50,Relaxed fit\n\
                 X3,AS,5001,Staple Tee,tee,,false,false,false,18.00,\n"
                    .to_string(),
            ),
            tier_overrides: Some("code,tier\nX2,premium\n".to_string()),
            brand_tiers: Some("brand,tier\nAS,core\n".to_string()),
            variants: Some(
                "sku,base_code,title,color,size,image_src,enabled\n\
                 S1,X1,Classic Tee Black M,Black,M,img/s1.png,true\n\
                 S2,X1,Classic Tee Black L,Black,L,img/s2.png,false\n\
                 S3,X3,Staple Tee White M,White,M,img/s3.png,true\n"
                    .to_string(),
            ),
            descriptions: Some(r#"{"X2":"Hand-written copy.\r\n\r\n\r\nSecond paragraph."}"#.to_string()),
            meta: Some(r#"{"lastUpdated":"2025-11-03T10:15:00Z"}"#.to_string()),
        }
    }

    #[test]
    fn test_load_catalog_end_to_end() {
        let catalog = load_catalog(&sample_sources()).unwrap();

        assert_eq!(catalog.base_products.len(), 3);
        assert_eq!(catalog.base_products[0].tier, "std"); // собственное значение строки
        assert_eq!(catalog.base_products[1].tier, "premium"); // override по коду
        assert_eq!(catalog.base_products[2].tier, "core"); // default по бренду

        assert!(catalog.meta.as_ref().unwrap().last_updated.is_some());
        assert!(catalog.description_for("X2").is_some());
    }

    #[test]
    fn test_missing_required_source_fails_entirely() {
        let mut raw = sample_sources();
        raw.base_products = None;
        match load_catalog(&raw) {
            Err(LoadError::SourceUnavailable { name }) => {
                assert_eq!(name, SRC_BASE_PRODUCTS);
            }
            other => panic!("expected SourceUnavailable, got {other:?}"),
        }

        let mut raw = sample_sources();
        raw.variants = None;
        assert!(load_catalog(&raw).is_err());
    }

    #[test]
    fn test_optional_sources_degrade_gracefully() {
        let mut raw = sample_sources();
        raw.tier_overrides = None;
        raw.brand_tiers = None;
        raw.descriptions = None;
        raw.meta = None;

        let catalog = load_catalog(&raw).unwrap();
        // без таблиц override tier у X2/X3 пуст
        assert_eq!(catalog.base_products[1].tier, "");
        assert_eq!(catalog.base_products[2].tier, "");
        assert!(catalog.descriptions.is_empty());
        assert!(catalog.meta.is_none());
    }

    #[test]
    fn test_sellable_requires_both_flags() {
        let catalog = load_catalog(&sample_sources()).unwrap();
        let skus: Vec<&str> = catalog.sellable_variants().iter().map(|v| v.sku.as_str()).collect();
        // S2 выключен сам, S3 принадлежит неактивному X3
        assert_eq!(skus, vec!["S1"]);
    }

    #[test]
    fn test_categories_are_active_only_in_insertion_order() {
        let catalog = load_catalog(&sample_sources()).unwrap();
        assert_eq!(catalog.categories(), vec!["tee"]);
        assert_eq!(
            catalog
                .bases_in_category("tee")
                .iter()
                .map(|b| b.code.as_str())
                .collect::<Vec<_>>(),
            vec!["X1", "X2"]
        );
    }
}
