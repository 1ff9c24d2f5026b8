//! The external rendering collaborator.

use crate::connection::{ConnectionParameters, ReportParameters};
use async_trait::async_trait;
use jasper_common::Result;
use serde::Serialize;
use std::path::PathBuf;

/// Everything the rendering server needs for one report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderRequest {
    /// Materialized template file.
    pub template_path: PathBuf,
    /// CSV input staged for the report.
    pub data_file: PathBuf,
    /// How the server reaches its data.
    pub connection: ConnectionParameters,
    /// Values bound to the template's parameters.
    pub parameters: ReportParameters,
}

/// Rendered document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutput {
    /// Document bytes in the requested output format.
    pub bytes: Vec<u8>,
    /// Number of pages produced.
    pub page_count: u32,
}

/// A Jasper rendering server.
///
/// Implementations own the transport; they receive fully staged inputs and
/// must not delete them.
#[async_trait]
pub trait ReportRenderer: Send + Sync {
    /// Renders one report.
    async fn render(&self, request: &RenderRequest) -> Result<RenderOutput>;
}
