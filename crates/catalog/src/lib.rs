//! Ядро каталога базовых изделий.
//!
//! Загружает табличные источники (базовые изделия, overrides по tier,
//! варианты, описания), разрешает tier по цепочке приоритетов, считает
//! набор тегов для выбранного изделия и рендерит текстовый блок для
//! копирования в буфер обмена.

pub mod loader;
pub mod session;
pub mod shared;

pub use loader::{load_catalog, Catalog, LoadError, RawSources};
pub use session::state::SessionState;
