//! Рендер текстового блока для копирования.
//!
//! Чистая функция от (запись, теги, тело описания) к строке; никаких
//! побочных эффектов.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use contracts::catalog::BaseProduct;

use crate::shared::{labels, money, text};

/// Фиксированные маркетинговые описания для отдельных кодов.
/// Новый спецслучай — новая строка таблицы, а не новое ветвление.
static FIXED_DESCRIPTIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([(
        "BC3413",
        "Ultra-soft tri-blend tee with a modern retail fit.\n\
         Pre-laundered to minimize shrinkage, side-seamed for structure.\n\
         The go-to blank for premium lines.",
    )])
});

/// Фраза по умолчанию, когда fit_notes пустые.
pub const DEFAULT_FIT_PHRASE: &str = "Comfortable, true-to-size fit.";

/// Тело описания для блока:
/// 1. нормализованный override-текст, если он есть и непуст;
/// 2. фиксированное описание по коду;
/// 3. двухстрочный шаблон из fit_notes и brand/model_name.
pub fn description_body(base: &BaseProduct, override_text: Option<&str>) -> String {
    if let Some(raw) = override_text {
        let normalized = text::normalize_description(raw);
        if !normalized.is_empty() {
            return normalized;
        }
    }

    if let Some(fixed) = FIXED_DESCRIPTIONS.get(base.code.as_str()) {
        return (*fixed).to_string();
    }

    let fit = base.fit_notes.trim();
    let fit = if fit.is_empty() { DEFAULT_FIT_PHRASE } else { fit };
    format!("- {}\n- Printed on {} {}.", fit, base.brand, base.model_name)
}

/// Блок фиксированной формы; каждая строка завершается одним `\n`,
/// шапку от тела отделяет пустая строка.
pub fn render_copy_block(base: &BaseProduct, tags: &[String], body: &str) -> String {
    format!(
        "Base Product Name: {label}\n\
         Base Product Code: {code}\n\
         Retail Price: ${price}\n\
         Tier: {tier}\n\
         Tags used: {tags}\n\
         \n\
         {body}\n",
        label = base.label,
        code = base.code,
        price = money::format_price(base.retail_price),
        tier = labels::tier_display_label(&base.tier),
        tags = tags.join(", "),
        body = body,
    )
}
