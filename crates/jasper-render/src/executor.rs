//! End-to-end execution of one report.

use crate::connection::{ConnectionParameters, ReportParameters, SubreportData};
use crate::data::{CsvRecordDataGenerator, DataGenerator, RecordSet};
use crate::renderer::{RenderRequest, ReportRenderer};
use crate::staging::TemporaryFiles;
use jasper_common::{JasperError, Result};
use jasper_config::ConfigCache;
use jasper_i18n::TranslationEntry;
use jasper_reports::{ReportDefinition, ReportResourceResolver};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

/// Data source of one subreport.
#[derive(Debug, Clone)]
pub struct SubreportSource {
    /// Report parameter receiving the subreport's data source.
    pub parameter: String,
    /// Template file of the subreport.
    pub jrxml_file: String,
    /// Writes the subreport's CSV input.
    pub data: Arc<dyn DataGenerator>,
}

/// A request to print one report.
#[derive(Debug, Clone)]
pub struct ReportJob {
    /// Template and its name.
    pub definition: ReportDefinition,
    /// Translations of the report's strings.
    pub translations: Vec<TranslationEntry>,
    /// Name of the printed document.
    pub title: String,
    /// Output format, e.g. `pdf`.
    pub output_format: String,
    /// Whether the document should go straight to a printer.
    pub direct_print: bool,
    /// Ids of the printed records.
    pub ids: Vec<i64>,
    /// Locale of the requesting user.
    pub locale: Option<String>,
    /// Database to connect to instead of the configured one.
    pub database: Option<String>,
    /// Source of the CSV input, if the report reads one.
    pub data: Option<Arc<dyn DataGenerator>>,
    /// Subreports reading their own CSV input.
    pub subreports: Vec<SubreportSource>,
    /// Extra report parameters, applied last.
    pub parameters: BTreeMap<String, Value>,
}

impl ReportJob {
    /// A job printing `definition` as `output_format`.
    pub fn new(definition: ReportDefinition, output_format: impl Into<String>) -> Self {
        Self {
            title: definition.name.clone(),
            definition,
            translations: Vec::new(),
            output_format: output_format.into(),
            direct_print: false,
            ids: Vec::new(),
            locale: None,
            database: None,
            data: None,
            subreports: Vec::new(),
            parameters: BTreeMap::new(),
        }
    }

    /// Sets the translations.
    #[must_use]
    pub fn with_translations(mut self, translations: Vec<TranslationEntry>) -> Self {
        self.translations = translations;
        self
    }

    /// Sets the record ids.
    #[must_use]
    pub fn with_ids(mut self, ids: Vec<i64>) -> Self {
        self.ids = ids;
        self
    }

    /// Sets the locale.
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Feeds `records` to the report as CSV.
    #[must_use]
    pub fn with_records(self, records: RecordSet) -> Self {
        self.with_data(Arc::new(CsvRecordDataGenerator::new(records)))
    }

    /// Feeds the report from a custom generator.
    #[must_use]
    pub fn with_data(mut self, generator: Arc<dyn DataGenerator>) -> Self {
        self.data = Some(generator);
        self
    }

    /// Feeds the subreport `jrxml_file` from `generator`, passing it to the
    /// main report through `parameter`.
    #[must_use]
    pub fn with_subreport_data(
        mut self,
        parameter: impl Into<String>,
        jrxml_file: impl Into<String>,
        generator: Arc<dyn DataGenerator>,
    ) -> Self {
        self.subreports.push(SubreportSource {
            parameter: parameter.into(),
            jrxml_file: jrxml_file.into(),
            data: generator,
        });
        self
    }

    /// Feeds `records` to a subreport as CSV.
    #[must_use]
    pub fn with_subreport_records(
        self,
        parameter: impl Into<String>,
        jrxml_file: impl Into<String>,
        records: RecordSet,
    ) -> Self {
        self.with_subreport_data(
            parameter,
            jrxml_file,
            Arc::new(CsvRecordDataGenerator::new(records)),
        )
    }

    /// Adds a report parameter.
    #[must_use]
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }

    /// Report parameters as sent to the renderer for a template resolved
    /// into `standard_dir`.
    pub fn report_parameters(&self, standard_dir: &Path) -> ReportParameters {
        let mut params = ReportParameters::standard(self.locale.as_deref(), &self.ids);
        params.set_standard_dir(standard_dir);
        params.merge(self.parameters.clone());
        params
    }
}

/// A rendered report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOutput {
    /// Output format.
    pub format: String,
    /// Document bytes.
    pub bytes: Vec<u8>,
    /// Whether the document should go straight to a printer.
    pub direct_print: bool,
    /// Document name.
    pub name: String,
    /// Number of pages.
    pub pages: u32,
}

/// Inputs staged for one run.
struct Staged {
    template_path: PathBuf,
    data_file: PathBuf,
    subreports: Vec<SubreportData>,
    files: TemporaryFiles,
}

/// Runs report jobs against a renderer.
///
/// Database, staging prefix and unlinking are read from the shared
/// configuration at the start of every run, so a replaced configuration
/// applies to the next job.
pub struct ReportExecutor {
    config: Arc<ConfigCache>,
    resolver: Arc<ReportResourceResolver>,
    renderer: Arc<dyn ReportRenderer>,
}

impl std::fmt::Debug for ReportExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportExecutor")
            .field("config", &self.config)
            .field("resolver", &self.resolver)
            .finish_non_exhaustive()
    }
}

impl ReportExecutor {
    /// Creates an executor sharing `config` and `resolver`.
    pub fn new(
        config: Arc<ConfigCache>,
        resolver: Arc<ReportResourceResolver>,
        renderer: Arc<dyn ReportRenderer>,
    ) -> Self {
        Self {
            config,
            resolver,
            renderer,
        }
    }

    /// The shared configuration.
    pub const fn config(&self) -> &Arc<ConfigCache> {
        &self.config
    }

    /// The shared resolver.
    pub const fn resolver(&self) -> &Arc<ReportResourceResolver> {
        &self.resolver
    }

    /// Resolves, stages, renders and cleans up one job.
    ///
    /// Staged input files are removed whether rendering succeeds or not.
    /// The resolved template stays cached.
    #[instrument(skip(self, job), fields(report = %job.definition.name, format = %job.output_format))]
    pub async fn execute(&self, job: &ReportJob) -> Result<ReportOutput> {
        let config = self.config.snapshot();
        let Staged {
            template_path,
            data_file,
            subreports,
            mut files,
        } = self
            .prepare(
                job,
                config.resolver.temp_dir_prefix.clone(),
                config.storage.unlink_temporary_files,
            )
            .await?;

        let database = &config.database;
        let db_name = job.database.as_deref().unwrap_or(&database.name);
        let standard_dir = template_path.parent().unwrap_or(Path::new("")).to_path_buf();
        let request = RenderRequest {
            template_path,
            data_file: data_file.clone(),
            connection: ConnectionParameters::for_database(
                database,
                db_name,
                job.output_format.as_str(),
                data_file,
            )
            .with_subreports(subreports),
            parameters: job.report_parameters(&standard_dir),
        };

        let started = Instant::now();
        let rendered = self.renderer.render(&request).await;
        let elapsed = started.elapsed();
        let removed = files.cleanup();
        debug!(removed, "Cleaned up staged files");

        match rendered {
            Ok(output) => {
                info!(elapsed = ?elapsed, pages = output.page_count, "Report rendered");
                Ok(ReportOutput {
                    format: job.output_format.clone(),
                    bytes: output.bytes,
                    direct_print: job.direct_print,
                    name: job.title.clone(),
                    pages: output.page_count,
                })
            }
            Err(e) => {
                warn!(elapsed = ?elapsed, category = e.category(), error = %e, "Report rendering failed");
                Err(e)
            }
        }
    }

    /// Resolves the template and stages the data files off the async runtime.
    ///
    /// Files staged before a failure are removed when the set is dropped.
    async fn prepare(&self, job: &ReportJob, prefix: String, unlink: bool) -> Result<Staged> {
        let resolver = Arc::clone(&self.resolver);
        let definition = job.definition.clone();
        let translations = job.translations.clone();
        let data = job.data.clone();
        let sources = job.subreports.clone();
        let mut files = TemporaryFiles::new(unlink);

        tokio::task::spawn_blocking(move || -> Result<Staged> {
            let template_path = resolver.resolve(&definition, &translations, None)?;
            let data_file = files.create(&prefix, ".csv")?;
            if let Some(generator) = data {
                generator.generate(&data_file)?;
            }
            debug!(data_file = %data_file.display(), "Staged report data");

            let mut subreports = Vec::with_capacity(sources.len());
            for source in sources {
                let path = files.create(&prefix, ".csv")?;
                source.data.generate(&path)?;
                debug!(
                    subreport = %source.jrxml_file,
                    data_file = %path.display(),
                    "Staged subreport data"
                );
                subreports.push(SubreportData {
                    parameter: source.parameter,
                    data_file: path,
                    jrxml_file: source.jrxml_file,
                });
            }

            Ok(Staged {
                template_path,
                data_file,
                subreports,
                files,
            })
        })
        .await
        .map_err(|e| JasperError::render_with_source("Report preparation task failed", e))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_job_defaults() {
        let job = ReportJob::new(ReportDefinition::new("sale.order", "<x/>", "sale.jrxml"), "pdf");
        assert_eq!(job.title, "sale.order");
        assert!(!job.direct_print);
        assert!(job.data.is_none());
        assert!(job.subreports.is_empty());
    }

    #[test]
    fn test_caller_parameters_win() {
        let job = ReportJob::new(ReportDefinition::new("r", "<x/>", "r.jrxml"), "pdf")
            .with_ids(vec![4, 5])
            .with_locale("de_DE")
            .with_parameter("REPORT_LOCALE", "fr_FR")
            .with_parameter("COMPANY", 1);

        let params = job.report_parameters(Path::new("/tmp/r"));
        assert_eq!(params.get("REPORT_LOCALE"), Some(&json!("fr_FR")));
        assert_eq!(params.get("STANDARD_DIR"), Some(&json!("/tmp/r")));
        assert_eq!(params.get("IDS"), Some(&json!([4, 5])));
        assert_eq!(params.get("COMPANY"), Some(&json!(1)));
    }

    #[test]
    fn test_subreport_sources_keep_order() {
        let job = ReportJob::new(ReportDefinition::new("r", "<x/>", "r.jrxml"), "pdf")
            .with_subreport_records("LINES", "lines.jrxml", RecordSet::new(["a"]))
            .with_subreport_records("TAXES", "taxes.jrxml", RecordSet::new(["b"]));

        let parameters: Vec<&str> = job.subreports.iter().map(|s| s.parameter.as_str()).collect();
        assert_eq!(parameters, vec!["LINES", "TAXES"]);
        assert_eq!(job.subreports[1].jrxml_file, "taxes.jrxml");
    }
}
