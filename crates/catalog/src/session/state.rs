//! Эфемерное состояние сессии поверх снимка каталога.
//!
//! Явный объект состояния с чистыми переходами вместо глобальных
//! переменных: переходы тестируются без окружения рендера.

use std::collections::BTreeSet;

use contracts::catalog::BaseProduct;

use super::copy_block;
use super::tags::{self, FeatureToggle};
use crate::loader::Catalog;

#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub category: Option<String>,
    pub selected_code: Option<String>,
    pub toggles: BTreeSet<FeatureToggle>,
    pub filter: String,
}

impl SessionState {
    /// Стартовое состояние: первая категория и её первое изделие
    /// (порядок исходных строк — это и есть выбор по умолчанию).
    pub fn new(catalog: &Catalog) -> Self {
        let mut state = Self::default();
        if let Some(first) = catalog.categories().first() {
            let category = (*first).to_string();
            state.select_category(catalog, &category);
        }
        state
    }

    /// Смена категории: выбор сбрасывается на первое изделие категории,
    /// переключатели, недоступные в новой категории, снимаются.
    pub fn select_category(&mut self, catalog: &Catalog, category: &str) {
        let bases = catalog.bases_in_category(category);
        self.category = Some(category.to_string());
        self.selected_code = bases.first().map(|b| b.code.clone());
        self.toggles
            .retain(|t| tags::feature_available(&bases, *t));
    }

    /// Выбор изделия; код вне текущей категории игнорируется.
    pub fn select_base(&mut self, catalog: &Catalog, code: &str) {
        let in_category = self
            .category
            .as_deref()
            .map(|c| catalog.bases_in_category(c).iter().any(|b| b.code == code))
            .unwrap_or(false);
        if in_category {
            self.selected_code = Some(code.to_string());
        } else {
            tracing::debug!("Ignoring selection of '{}' outside current category", code);
        }
    }

    /// Переключение функции; недоступная в категории функция игнорируется.
    pub fn toggle_feature(&mut self, catalog: &Catalog, feature: FeatureToggle) {
        let Some(category) = self.category.as_deref() else {
            return;
        };
        if !tags::feature_available(&catalog.bases_in_category(category), feature) {
            return;
        }
        if !self.toggles.remove(&feature) {
            self.toggles.insert(feature);
        }
    }

    pub fn set_filter(&mut self, filter: &str) {
        self.filter = filter.to_string();
    }

    /// Изделия текущей категории, прошедшие текстовый фильтр
    /// (подстрока без регистра по label/brand/model_name/code).
    pub fn visible_bases<'a>(&self, catalog: &'a Catalog) -> Vec<&'a BaseProduct> {
        let Some(category) = self.category.as_deref() else {
            return Vec::new();
        };
        let needle = self.filter.trim().to_lowercase();
        catalog
            .bases_in_category(category)
            .into_iter()
            .filter(|b| {
                needle.is_empty()
                    || b.label.to_lowercase().contains(&needle)
                    || b.brand.to_lowercase().contains(&needle)
                    || b.model_name.to_lowercase().contains(&needle)
                    || b.code.to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn selected_base<'a>(&self, catalog: &'a Catalog) -> Option<&'a BaseProduct> {
        catalog.base_by_code(self.selected_code.as_deref()?)
    }

    /// Переключатели текущей категории с признаком доступности —
    /// интерфейсный контракт для UI (недоступные показываются выключенными).
    pub fn available_features(&self, catalog: &Catalog) -> Vec<(FeatureToggle, bool)> {
        let bases = self
            .category
            .as_deref()
            .map(|c| catalog.bases_in_category(c))
            .unwrap_or_default();
        FeatureToggle::all()
            .into_iter()
            .map(|f| (f, tags::feature_available(&bases, f)))
            .collect()
    }

    /// Готовый блок для копирования по текущему выбору.
    pub fn copy_block(&self, catalog: &Catalog) -> Option<String> {
        let base = self.selected_base(catalog)?;
        let merged = tags::merge_tags(base, &self.toggles);
        let body = copy_block::description_body(base, catalog.description_for(&base.code));
        Some(copy_block::render_copy_block(base, &merged, &body))
    }
}
