//! Разбор таблицы вариантов (SKU).

use contracts::catalog::ProductVariant;

use super::base_products::{parse_bool, HeaderMap, RowExclusion};
use super::DELIMITER;
use crate::shared::delimited;

fn parse_variant_row(header: &HeaderMap, row: &[String]) -> Result<ProductVariant, RowExclusion> {
    if delimited::is_blank_row(row) {
        return Err(RowExclusion::AllBlank);
    }

    let sku = header.get(row, "sku");
    let base_code = header.get(row, "base_code");
    if sku.is_empty() || base_code.is_empty() {
        return Err(RowExclusion::MissingKey);
    }

    Ok(ProductVariant {
        sku: sku.to_string(),
        base_code: base_code.to_string(),
        title: header.get(row, "title").to_string(),
        color: header.get(row, "color").to_string(),
        size: header.get(row, "size").to_string(),
        image_src: header.get(row, "image_src").to_string(),
        enabled: parse_bool(header.get(row, "enabled")),
    })
}

/// Вся таблица вариантов в порядке исходных строк.
pub fn parse_variants(text: &str) -> Vec<ProductVariant> {
    let rows = delimited::parse_delimited(text, DELIMITER);
    let Some((header_row, data_rows)) = rows.split_first() else {
        return Vec::new();
    };
    let header = HeaderMap::new(header_row);

    let mut out = Vec::new();
    for row in data_rows {
        match parse_variant_row(&header, row) {
            Ok(variant) => out.push(variant),
            Err(reason) => tracing::debug!("Variant row excluded: {:?}", reason),
        }
    }
    out
}
