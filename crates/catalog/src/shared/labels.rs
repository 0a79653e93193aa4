//! Статические таблицы меток (категории, tier).
//!
//! Новые метки — это строки в таблицах, а не новая логика.

/// Метки категорий для отображения; ключ — значение колонки `category`.
/// Неизвестный ключ проходит как есть.
const CATEGORY_LABELS: &[(&str, &str)] = &[
    ("tee", "T-Shirts"),
    ("longsleeve", "Long Sleeves"),
    ("hoodie", "Hoodies"),
    ("crewneck", "Crewnecks"),
    ("tank", "Tank Tops"),
];

pub fn category_label(key: &str) -> &str {
    CATEGORY_LABELS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
        .unwrap_or(key)
}

/// Человекочитаемые метки tier. Ключи, которых тут нет, обрабатываются
/// фолбэками ниже.
const TIER_LABELS: &[(&str, &str)] = &[
    ("premium", "Premium"),
    ("core", "Core"),
    ("triblend", "Tri-Blend"),
];

/// Tier-тег для списка "Tags used": метка из таблицы, иначе сырой ключ.
pub fn tier_tag(key: &str) -> String {
    TIER_LABELS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| (*v).to_string())
        .unwrap_or_else(|| key.to_string())
}

/// Tier для строки "Tier:": метка из таблицы, иначе сырой ключ
/// с заглавной первой буквой.
pub fn tier_display_label(key: &str) -> String {
    TIER_LABELS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| (*v).to_string())
        .unwrap_or_else(|| capitalize_first(key))
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
