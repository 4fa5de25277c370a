//! # FearStudy Common Library
//!
//! Shared code for the FearStudy crates:
//! - Error types
//! - TOML configuration loading
//! - Dataset path resolution

pub mod config;
pub mod error;

pub use error::{Error, Result};
