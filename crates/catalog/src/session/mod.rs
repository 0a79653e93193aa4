pub mod clipboard;
pub mod copy_block;
pub mod state;
pub mod tags;
