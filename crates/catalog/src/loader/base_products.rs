//! Разбор таблицы базовых изделий и разрешение tier.

use std::collections::{HashMap, HashSet};

use contracts::catalog::BaseProduct;

use super::DELIMITER;
use crate::shared::{delimited, money};

/// Причина исключения строки — явный результат валидации вместо
/// разбросанных «утиных» проверок.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowExclusion {
    /// Все поля пустые (например, артефакт хвостовых переводов строки).
    AllBlank,
    /// Нет ключа записи.
    MissingKey,
}

/// Соответствие имени колонки её индексу, по строке заголовка.
/// Имена сравниваются без регистра и с trim.
pub struct HeaderMap(HashMap<String, usize>);

impl HeaderMap {
    pub fn new(header: &[String]) -> Self {
        let map = header
            .iter()
            .enumerate()
            .map(|(i, name)| (name.trim().to_lowercase(), i))
            .collect();
        Self(map)
    }

    /// Значение поля по имени колонки, с trim; отсутствующая колонка
    /// или короткая строка дают пустую строку.
    pub fn get<'a>(&self, row: &'a [String], name: &str) -> &'a str {
        self.0
            .get(name)
            .and_then(|&i| row.get(i))
            .map(|v| v.trim())
            .unwrap_or("")
    }
}

/// Булево поле: без регистра, литеральное "true"; всё остальное
/// (включая отсутствие колонки) — false.
pub fn parse_bool(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case("true")
}

/// Порядок разрешения tier фиксирован и не переупорядочивается:
/// 1. собственное значение строки, если непустое;
/// 2. override по коду изделия;
/// 3. default по бренду;
/// 4. пустая строка.
pub fn resolve_tier(
    row_tier: &str,
    code: &str,
    brand: &str,
    overrides: &HashMap<String, String>,
    brand_defaults: &HashMap<String, String>,
) -> String {
    if !row_tier.is_empty() {
        return row_tier.to_string();
    }
    if let Some(tier) = overrides.get(code) {
        return tier.clone();
    }
    if let Some(tier) = brand_defaults.get(brand) {
        return tier.clone();
    }
    String::new()
}

/// Одна строка таблицы → типизированная запись, либо причина исключения.
pub fn parse_base_row(
    header: &HeaderMap,
    row: &[String],
    overrides: &HashMap<String, String>,
    brand_defaults: &HashMap<String, String>,
) -> Result<BaseProduct, RowExclusion> {
    if delimited::is_blank_row(row) {
        return Err(RowExclusion::AllBlank);
    }

    let code = header.get(row, "code");
    if code.is_empty() {
        return Err(RowExclusion::MissingKey);
    }

    let brand = header.get(row, "brand").to_string();
    let tier = resolve_tier(header.get(row, "tier"), code, &brand, overrides, brand_defaults);

    Ok(BaseProduct {
        code: code.to_string(),
        brand,
        model_name: header.get(row, "model_name").to_string(),
        label: header.get(row, "label").to_string(),
        category: header.get(row, "category").to_string(),
        tier,
        organic: parse_bool(header.get(row, "organic")),
        usa_made: parse_bool(header.get(row, "usa_made")),
        active: parse_bool(header.get(row, "active")),
        retail_price: money::parse_price(header.get(row, "retail_price")),
        fit_notes: header.get(row, "fit_notes").to_string(),
    })
}

/// Вся таблица базовых изделий в порядке исходных строк.
/// Дубликаты кода: первая строка побеждает, остальные отбрасываются.
pub fn parse_base_products(
    text: &str,
    overrides: &HashMap<String, String>,
    brand_defaults: &HashMap<String, String>,
) -> Vec<BaseProduct> {
    let rows = delimited::parse_delimited(text, DELIMITER);
    let Some((header_row, data_rows)) = rows.split_first() else {
        return Vec::new();
    };
    let header = HeaderMap::new(header_row);

    let mut out = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    for row in data_rows {
        match parse_base_row(&header, row, overrides, brand_defaults) {
            Ok(product) => {
                if !seen.insert(product.code.clone()) {
                    tracing::warn!(
                        "Duplicate base product code '{}', keeping the first row",
                        product.code
                    );
                    continue;
                }
                out.push(product);
            }
            Err(reason) => {
                tracing::debug!("Base product row excluded: {:?}", reason);
            }
        }
    }
    out
}

/// Двухколоночная таблица override'ов (`code,tier` или `brand,tier`)
/// в разреженную мапу ключ → tier. Строки без ключа или tier пропускаются.
pub fn parse_tier_table(text: &str, key_column: &str) -> HashMap<String, String> {
    let rows = delimited::parse_delimited(text, DELIMITER);
    let Some((header_row, data_rows)) = rows.split_first() else {
        return HashMap::new();
    };
    let header = HeaderMap::new(header_row);

    let mut map = HashMap::new();
    for row in data_rows {
        let key = header.get(row, key_column);
        let tier = header.get(row, "tier");
        if key.is_empty() || tier.is_empty() {
            continue;
        }
        map.insert(key.to_string(), tier.to_string());
    }
    map
}
