//! # Common Components
//!
//! Shared utilities used by the library and the command-line client.
//!
//! ## Modules
//!
//! - [`config`]: Configuration structures and TOML parsing

pub mod config;
