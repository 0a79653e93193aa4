pub mod base_product;
pub mod meta;
pub mod variant;

pub use base_product::BaseProduct;
pub use meta::CatalogMeta;
pub use variant::ProductVariant;
