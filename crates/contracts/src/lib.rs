//! Контракты (общие типы данных) каталога базовых изделий.
//!
//! Чистые типы без логики загрузки: они разделяются между ядром каталога
//! и любым потребителем (UI, экспорт).

pub mod catalog;
