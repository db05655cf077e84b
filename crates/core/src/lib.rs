//! Shared foundations for The Find 7 storefront engine
//!
//! This crate provides the pieces every other crate leans on:
//!
//! - **Error handling**: structured errors with codes, context, and recovery suggestions
//! - **Configuration**: TOML-based configuration with per-section defaults
//! - **URL state**: the query-string codec behind `?q=`, `?tier=`, `?collection=`, `?items=`
//!
//! # Example
//!
//! ```rust
//! use find7_core::urlquery::QueryParams;
//!
//! let params = QueryParams::parse("q=wireless%20earbuds&tier=S,A");
//! assert_eq!(params.get("q"), Some("wireless earbuds"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod urlquery;

pub use error::{Error, ErrorCode, Result, ResultExt};
