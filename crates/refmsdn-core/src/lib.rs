pub mod config;
pub mod error;
pub mod logging;

// Pipeline, leaf-first
pub mod cache;
pub mod drill_down;
pub mod fetch;
pub mod filter;
pub mod item;
pub mod navigator;
pub mod render;

pub use item::Item;
