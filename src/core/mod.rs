// src/core/mod.rs

pub mod catalog;
pub mod classifier;
pub mod engine;
pub mod normalizer;
pub mod translit;
pub mod types;
