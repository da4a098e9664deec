// src/lib.rs

pub mod core;
pub mod error;
pub mod logging;
pub mod persistence;
pub mod wiki;
pub use crate::core::config::FilterConfig;
pub use crate::core::engine::DictionaryEngine;
pub use crate::error::{DictError, DictResult};
