//! Разбор и форматирование розничных цен.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Парсит цену из исходного текста. Запятая как десятичный разделитель
/// допускается (европейские выгрузки). Нечисловое или отрицательное
/// значение тихо приводится к нулю — частично грязные данные не должны
/// блокировать весь каталог.
pub fn parse_price(raw: &str) -> Decimal {
    let normalized = raw.trim().replace(',', ".");
    match Decimal::from_str(&normalized) {
        Ok(d) if !d.is_sign_negative() => d,
        _ => Decimal::ZERO,
    }
}

/// Цена с ровно двумя знаками после точки.
///
/// Округление — half away from zero: 19.995 → "20.00".
pub fn format_price(price: Decimal) -> String {
    let rounded = price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("19.99"), Decimal::new(1999, 2));
        assert_eq!(parse_price(" 5309,00 "), Decimal::new(530900, 2));
        assert_eq!(parse_price("free"), Decimal::ZERO);
        assert_eq!(parse_price(""), Decimal::ZERO);
        assert_eq!(parse_price("-3.50"), Decimal::ZERO);
    }

    #[test]
    fn test_format_price_two_decimals() {
        assert_eq!(format_price(Decimal::new(1999, 2)), "19.99");
        assert_eq!(format_price(Decimal::ZERO), "0.00");
        assert_eq!(format_price(Decimal::new(20, 0)), "20.00");
    }

    #[test]
    fn test_format_price_rounds_half_away_from_zero() {
        // 19.995 → 20.00 (правило округления зафиксировано)
        assert_eq!(format_price(Decimal::new(19995, 3)), "20.00");
        assert_eq!(format_price(Decimal::new(19994, 3)), "19.99");
        assert_eq!(format_price(Decimal::new(12345, 3)), "12.35");
    }
}
