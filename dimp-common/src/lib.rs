//! # DIMP Common Library
//!
//! Shared code for the detainee import tooling:
//! - Error types shared by every crate in the workspace
//! - TOML bootstrap configuration and setting resolution

pub mod config;
pub mod error;

pub use error::{Error, Result};
