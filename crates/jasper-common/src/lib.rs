//! # Jasper Common
//!
//! Shared types, error handling and logging for Jasper Bridge.
//!
//! This crate provides the foundational pieces used across all other crates
//! in the Jasper Bridge workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;
pub mod types;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::{JasperError, Result};
pub use types::{GroupingPolicy, LanguageSuffix, PropertiesEncoding};
pub use logging::{init_dev_logging, init_logging, LogFormat, LoggingConfig};
