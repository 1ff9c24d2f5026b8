//! # Jasper Render
//!
//! Runs a report through an external Jasper rendering server.
//!
//! The server itself, and the RPC transport used to reach it, live behind
//! the [`ReportRenderer`] trait. This crate prepares everything the server
//! needs (template, translations, CSV input, connection and report
//! parameters), calls the renderer once and cleans up after itself.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod connection;
pub mod data;
pub mod executor;
pub mod renderer;
pub mod staging;

pub use connection::{
    jdbc_dsn, system_user_name, ConnectionParameters, ReportParameters, SubreportData, STANDARD_DIR,
};
pub use data::{CsvRecordDataGenerator, DataGenerator, RecordSet};
pub use executor::{ReportExecutor, ReportJob, ReportOutput, SubreportSource};
pub use renderer::{RenderOutput, RenderRequest, ReportRenderer};
pub use staging::TemporaryFiles;
