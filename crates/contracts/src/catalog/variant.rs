use serde::{Deserialize, Serialize};

/// Вариант товара — конкретный продаваемый SKU на основе базового изделия
/// (цвет + размер + изображение).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductVariant {
    pub sku: String,

    #[serde(rename = "baseCode")]
    pub base_code: String,

    pub title: String,

    pub color: String,

    pub size: String,

    #[serde(rename = "imageSrc")]
    pub image_src: String,

    #[serde(default)]
    pub enabled: bool,
}

impl ProductVariant {
    pub fn validate(&self) -> Result<(), String> {
        if self.sku.trim().is_empty() {
            return Err("SKU варианта не может быть пустым".into());
        }
        if self.base_code.trim().is_empty() {
            return Err("Вариант должен ссылаться на базовое изделие".into());
        }
        Ok(())
    }
}
