// src/lib.rs

pub mod audio;
pub mod core;
pub mod persistence;

pub use crate::core::catalog::Catalog;
pub use crate::core::engine::SearchEngine;
pub use crate::core::types::{SearchResult, ShlokaRecord};
