//! Resolution of report definitions to template files on disk.

use crate::cache::{MemoryReportCache, ReportCache};
use crate::definition::ReportDefinition;
use crate::subreport::{find_subreport_references, ReportCatalog};
use jasper_common::{
    GroupingPolicy, JasperError, LanguageSuffix, PropertiesEncoding, Result,
};
use jasper_config::{Config, DEFAULT_CATALOG_NAMESPACE, DEFAULT_TEMP_DIR_PREFIX};
use jasper_i18n::{
    group_translations, properties_file_name, PropertiesFile, PropertiesWriter, PropertyTable,
    TranslationEntry,
};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Settings that shape how reports are materialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverOptions {
    /// Prefix of freshly created working directories.
    pub temp_dir_prefix: String,
    /// How translations are split into properties files.
    pub grouping: GroupingPolicy,
    /// Which part of a language tag names a properties file.
    pub language_suffix: LanguageSuffix,
    /// Encoding of written properties files.
    pub encoding: PropertiesEncoding,
    /// Namespace prepended to subreport names before catalog lookups.
    pub catalog_namespace: String,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            temp_dir_prefix: DEFAULT_TEMP_DIR_PREFIX.to_string(),
            grouping: GroupingPolicy::default(),
            language_suffix: LanguageSuffix::default(),
            encoding: PropertiesEncoding::default(),
            catalog_namespace: DEFAULT_CATALOG_NAMESPACE.to_string(),
        }
    }
}

impl From<&Config> for ResolverOptions {
    fn from(config: &Config) -> Self {
        Self {
            temp_dir_prefix: config.resolver.temp_dir_prefix.clone(),
            grouping: config.resolver.grouping,
            language_suffix: config.resolver.language_suffix,
            encoding: config.properties.encoding,
            catalog_namespace: config.resolver.catalog_namespace.clone(),
        }
    }
}

/// Outcome of a resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Absolute path of the template file.
    pub template_path: PathBuf,
    /// Properties files written by this call, in write order. Empty on a
    /// cache hit. A file written more than once appears once per write,
    /// each time with everything it held after that write.
    pub properties_files: Vec<PropertiesFile>,
    /// Whether the path came from the cache.
    pub cached: bool,
}

/// Writes report templates and their translations to disk, once per report
/// name.
///
/// The resolver never deletes what it writes; the working directory belongs
/// to the caller afterwards.
pub struct ReportResourceResolver {
    options: ResolverOptions,
    cache: Arc<dyn ReportCache>,
    catalog: Option<Arc<dyn ReportCatalog>>,
    lock: Mutex<()>,
}

impl std::fmt::Debug for ReportResourceResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportResourceResolver")
            .field("options", &self.options)
            .field("cache", &self.cache)
            .field("catalog", &self.catalog.is_some())
            .finish()
    }
}

impl ReportResourceResolver {
    /// Creates a resolver with an in-memory cache.
    pub fn new(options: ResolverOptions) -> Self {
        Self::with_cache(options, Arc::new(MemoryReportCache::new()))
    }

    /// Creates a resolver backed by `cache`.
    pub fn with_cache(options: ResolverOptions, cache: Arc<dyn ReportCache>) -> Self {
        Self {
            options,
            cache,
            catalog: None,
            lock: Mutex::new(()),
        }
    }

    /// Creates a resolver from application configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(ResolverOptions::from(config))
    }

    /// Checks subreport references against `catalog` before writing.
    #[must_use]
    pub fn with_catalog(mut self, catalog: Arc<dyn ReportCatalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Resolver settings.
    pub const fn options(&self) -> &ResolverOptions {
        &self.options
    }

    /// The cache holding resolved paths.
    pub fn cache(&self) -> &Arc<dyn ReportCache> {
        &self.cache
    }

    /// Forgets the resolved path of one report.
    pub fn evict(&self, report_name: &str) -> Option<PathBuf> {
        self.cache.remove(report_name)
    }

    /// Forgets every resolved path.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Resolves `definition` to a template path.
    ///
    /// See [`Self::resolve_detailed`].
    pub fn resolve(
        &self,
        definition: &ReportDefinition,
        translations: &[TranslationEntry],
        work_dir: Option<&Path>,
    ) -> Result<PathBuf> {
        self.resolve_detailed(definition, translations, work_dir)
            .map(|resolution| resolution.template_path)
    }

    /// Resolves `definition`, reporting every properties file written.
    ///
    /// A cached report name returns its stored path without touching the
    /// filesystem, even if the content has changed since. Otherwise the
    /// template is written to `work_dir` (or a new temporary directory)
    /// together with one properties file per translation group, and the
    /// path is cached.
    #[instrument(skip(self, definition, translations), fields(report = %definition.name))]
    pub fn resolve_detailed(
        &self,
        definition: &ReportDefinition,
        translations: &[TranslationEntry],
        work_dir: Option<&Path>,
    ) -> Result<Resolution> {
        let _guard = self.lock.lock();

        if let Some(template_path) = self.cache.get(&definition.name) {
            debug!(path = %template_path.display(), "Report already resolved");
            return Ok(Resolution {
                template_path,
                properties_files: Vec::new(),
                cached: true,
            });
        }

        self.check_subreports(definition)?;

        if !definition.has_content() {
            return Err(JasperError::missing_content(&definition.name));
        }

        let (file_name, base_name) = definition
            .template_file_name()
            .zip(definition.base_name())
            .ok_or_else(|| {
                JasperError::Io(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("report '{}' has no template file name", definition.name),
                ))
            })?;

        let dir = self.prepare_work_dir(work_dir)?;
        let template_path = dir.join(file_name);
        fs::write(&template_path, &definition.content)?;
        debug!(path = %template_path.display(), bytes = definition.content.len(), "Wrote report template");

        let properties_files = self.write_translations(&dir, base_name, translations)?;

        self.cache.set(&definition.name, template_path.clone());
        info!(
            path = %template_path.display(),
            properties = properties_files.len(),
            "Resolved report"
        );

        Ok(Resolution {
            template_path,
            properties_files,
            cached: false,
        })
    }

    fn check_subreports(&self, definition: &ReportDefinition) -> Result<()> {
        let Some(catalog) = &self.catalog else {
            return Ok(());
        };

        for reference in find_subreport_references(&definition.content_text()) {
            let name = reference.qualified_name(&self.options.catalog_namespace);
            if !catalog.contains(&name) {
                return Err(JasperError::subreport_not_found(name));
            }
            debug!(subreport = %name, "Found subreport");
        }

        Ok(())
    }

    fn prepare_work_dir(&self, work_dir: Option<&Path>) -> Result<PathBuf> {
        match work_dir {
            Some(dir) => {
                fs::create_dir_all(dir)?;
                Ok(std::path::absolute(dir)?)
            }
            None => {
                let dir = tempfile::Builder::new()
                    .prefix(&self.options.temp_dir_prefix)
                    .keep(true)
                    .tempdir()?;
                debug!(path = %dir.path().display(), "Created working directory");
                Ok(std::path::absolute(dir.path())?)
            }
        }
    }

    fn write_translations(
        &self,
        dir: &Path,
        base_name: &str,
        translations: &[TranslationEntry],
    ) -> Result<Vec<PropertiesFile>> {
        let writer = PropertiesWriter::new(self.options.encoding);
        let groups = group_translations(translations, self.options.grouping);
        let mut written = Vec::with_capacity(groups.len());
        // Pairs written so far per file. A later group on the same file
        // extends it.
        let mut on_disk: HashMap<PathBuf, PropertyTable> = HashMap::new();

        for group in groups {
            let path = dir.join(properties_file_name(
                base_name,
                group.language,
                self.options.language_suffix,
            ));
            let table = on_disk.entry(path.clone()).or_default();
            for (source, value) in group.properties().iter() {
                table.insert(source, value);
            }
            writer.write(&path, table)?;
            written.push(PropertiesFile {
                path,
                language: group.language.to_string(),
                entries: table.clone().into_pairs(),
            });
        }

        Ok(written)
    }
}
