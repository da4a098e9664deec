// src/core/mod.rs

pub mod config;
pub mod converter;
pub mod engine;
pub mod filter;
pub mod normalize;
pub mod phrases;
pub mod types;
