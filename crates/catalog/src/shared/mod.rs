pub mod config;
pub mod delimited;
pub mod labels;
pub mod money;
pub mod text;
