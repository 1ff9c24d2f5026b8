//! # Jasper Bridge
//!
//! Command line front end for resolving report templates and their
//! translations into files a Jasper server can load.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod commands;
pub mod error;

pub use cli::*;
pub use commands::*;
pub use error::*;
