//! Переключатели функций и слияние тегов.

use std::collections::BTreeSet;

use contracts::catalog::BaseProduct;

use crate::shared::labels;

/// Переключатели функций — небольшой фиксированный словарь.
/// Новая функция — новый вариант enum плюс строка тега.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FeatureToggle {
    Organic,
    UsaMade,
    Triblend,
}

impl FeatureToggle {
    /// Строка тега в итоговом списке.
    pub fn tag(&self) -> &'static str {
        match self {
            FeatureToggle::Organic => "organic",
            FeatureToggle::UsaMade => "usa_made",
            FeatureToggle::Triblend => "triblend",
        }
    }

    pub fn all() -> Vec<FeatureToggle> {
        vec![
            FeatureToggle::Organic,
            FeatureToggle::UsaMade,
            FeatureToggle::Triblend,
        ]
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "organic" => Some(FeatureToggle::Organic),
            "usa_made" => Some(FeatureToggle::UsaMade),
            "triblend" => Some(FeatureToggle::Triblend),
            _ => None,
        }
    }
}

/// Обладает ли изделие признаком (то, что нельзя «выключить» переключателем).
pub fn base_has_feature(base: &BaseProduct, feature: FeatureToggle) -> bool {
    match feature {
        FeatureToggle::Organic => base.organic,
        FeatureToggle::UsaMade => base.usa_made,
        FeatureToggle::Triblend => base.looks_triblend(),
    }
}

/// Доступен ли переключатель: хотя бы одно изделие набора обладает
/// признаком. Недоступный переключатель UI обязан показывать выключенным.
pub fn feature_available(bases: &[&BaseProduct], feature: FeatureToggle) -> bool {
    bases.iter().any(|b| base_has_feature(b, feature))
}

/// Итоговый набор тегов выбранного изделия.
///
/// Tier-тег всегда первый (пустой tier тега не даёт); дальше — лексикографски
/// отсортированное объединение врождённых признаков и включённых
/// переключателей, без дубликатов. Слияние только добавляет теги: признак,
/// которым изделие уже обладает, нельзя «отключить».
pub fn merge_tags(base: &BaseProduct, toggles: &BTreeSet<FeatureToggle>) -> Vec<String> {
    let tier_tag = labels::tier_tag(&base.tier);

    let mut rest: BTreeSet<String> = BTreeSet::new();
    for feature in FeatureToggle::all() {
        let inherent = match feature {
            FeatureToggle::Organic => base.organic,
            FeatureToggle::UsaMade => base.usa_made,
            // triblend — не врождённый флаг записи, только переключатель
            FeatureToggle::Triblend => false,
        };
        if inherent || toggles.contains(&feature) {
            rest.insert(feature.tag().to_string());
        }
    }
    rest.remove(&tier_tag);

    let mut out = Vec::with_capacity(rest.len() + 1);
    if !tier_tag.is_empty() {
        out.push(tier_tag);
    }
    out.extend(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn base(tier: &str, organic: bool, usa_made: bool) -> BaseProduct {
        BaseProduct {
            code: "X1".into(),
            brand: "Bella".into(),
            model_name: "3001".into(),
            label: "Classic Tee".into(),
            category: "tee".into(),
            tier: tier.into(),
            organic,
            usa_made,
            active: true,
            retail_price: Decimal::ZERO,
            fit_notes: String::new(),
        }
    }

    #[test]
    fn test_merge_is_deterministic() {
        // organic врождённый, usa_made включён пользователем
        let b = base("mid", true, false);
        let toggles = BTreeSet::from([FeatureToggle::UsaMade]);
        assert_eq!(merge_tags(&b, &toggles), vec!["mid", "organic", "usa_made"]);
    }

    #[test]
    fn test_inherent_flags_cannot_be_untoggled() {
        let b = base("std", true, true);
        // пользователь ничего не включал — врождённые признаки всё равно в тегах
        assert_eq!(
            merge_tags(&b, &BTreeSet::new()),
            vec!["std", "organic", "usa_made"]
        );
    }

    #[test]
    fn test_tier_tag_is_first_and_deduplicated() {
        let b = base("triblend", false, false);
        let toggles = BTreeSet::from([FeatureToggle::Triblend]);
        // tier «triblend» отображается как "Tri-Blend", переключатель даёт
        // "triblend" — это разные теги, но tier всегда первый
        assert_eq!(merge_tags(&b, &toggles), vec!["Tri-Blend", "triblend"]);
    }

    #[test]
    fn test_empty_tier_yields_no_tier_tag() {
        let b = base("", true, false);
        assert_eq!(merge_tags(&b, &BTreeSet::new()), vec!["organic"]);
    }

    #[test]
    fn test_feature_availability() {
        let plain = base("std", false, false);
        let organic = base("std", true, false);
        let bases: Vec<&BaseProduct> = vec![&plain, &organic];

        assert!(feature_available(&bases, FeatureToggle::Organic));
        assert!(!feature_available(&bases, FeatureToggle::UsaMade));
        assert!(!feature_available(&bases, FeatureToggle::Triblend));

        let mut tri = base("std", false, false);
        tri.fit_notes = "Soft tri-blend hand feel".into();
        let bases: Vec<&BaseProduct> = vec![&plain, &tri];
        assert!(feature_available(&bases, FeatureToggle::Triblend));
    }
}
