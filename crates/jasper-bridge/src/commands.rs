//! Command implementations.

use crate::cli::ResolveArgs;
use crate::error::{BridgeError, BridgeResult};
use jasper_config::Config;
use jasper_i18n::TranslationEntry;
use jasper_reports::{ReportDefinition, ReportResourceResolver, Resolution, StaticReportCatalog};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Reads a JSON array of translation entries.
pub fn read_translations(path: &Path) -> BridgeResult<Vec<TranslationEntry>> {
    let text = fs::read_to_string(path).map_err(|source| BridgeError::Input {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| BridgeError::Translations {
        path: path.to_path_buf(),
        source,
    })
}

/// Runs `resolve`.
pub fn resolve(args: &ResolveArgs, config: &Config) -> BridgeResult<Resolution> {
    let content = fs::read(&args.template).map_err(|source| BridgeError::Input {
        path: args.template.clone(),
        source,
    })?;
    let file_name = args
        .template
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let definition = ReportDefinition::new(&args.name, content, file_name);

    let translations = match &args.translations {
        Some(path) => read_translations(path)?,
        None => Vec::new(),
    };

    let mut resolver = ReportResourceResolver::from_config(config);
    if !args.subreports.is_empty() {
        let catalog: StaticReportCatalog = args.subreports.iter().cloned().collect();
        resolver = resolver.with_catalog(Arc::new(catalog));
    }

    let resolution =
        resolver.resolve_detailed(&definition, &translations, args.work_dir.as_deref())?;
    info!(
        template = %resolution.template_path.display(),
        properties = resolution.properties_files.len(),
        "Resolved report"
    );
    Ok(resolution)
}

/// Lines printed for a resolution: the template path, then each
/// properties file.
pub fn describe(resolution: &Resolution) -> Vec<String> {
    std::iter::once(resolution.template_path.display().to_string())
        .chain(
            resolution
                .properties_files
                .iter()
                .map(|file| file.path.display().to_string()),
        )
        .collect()
}
