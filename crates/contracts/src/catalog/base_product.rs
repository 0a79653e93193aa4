use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Базовое изделие (blank) — заготовка одежды, на основе которой
/// создаются конкретные SKU.
///
/// `tier` здесь всегда уже разрешён загрузчиком (цепочка приоритетов:
/// собственное значение строки → per-code override → per-brand default →
/// пустая строка). Пустая строка означает «tier не задан нигде».
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseProduct {
    pub code: String,

    pub brand: String,

    #[serde(rename = "modelName")]
    pub model_name: String,

    pub label: String,

    pub category: String,

    #[serde(default)]
    pub tier: String,

    #[serde(default)]
    pub organic: bool,

    #[serde(rename = "usaMade", default)]
    pub usa_made: bool,

    #[serde(default)]
    pub active: bool,

    #[serde(rename = "retailPrice", default)]
    pub retail_price: Decimal,

    #[serde(rename = "fitNotes", default)]
    pub fit_notes: String,
}

impl BaseProduct {
    /// Эвристика «похоже на triblend»: явный tier-ключ или подстрока
    /// в label / fit_notes. Хрупко по построению, см. DESIGN.md.
    pub fn looks_triblend(&self) -> bool {
        if self.tier == "triblend" {
            return true;
        }
        let label = self.label.to_lowercase();
        let notes = self.fit_notes.to_lowercase();
        [label, notes]
            .iter()
            .any(|s| s.contains("triblend") || s.contains("tri-blend"))
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.code.trim().is_empty() {
            return Err("Код базового изделия не может быть пустым".into());
        }
        if self.retail_price.is_sign_negative() {
            return Err("Розничная цена не может быть отрицательной".into());
        }
        Ok(())
    }
}
