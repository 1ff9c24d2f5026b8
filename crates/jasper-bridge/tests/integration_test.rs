//! Integration tests for the jasper-bridge commands.

use jasper_bridge::{commands, BridgeError, ResolveArgs};
use jasper_common::test_utils::{init_test_logging, SAMPLE_JRXML, SAMPLE_JRXML_WITH_SUBREPORT};
use jasper_common::JasperError;
use jasper_config::Config;
use std::fs;
use std::path::Path;

fn args(dir: &Path, template: &str) -> ResolveArgs {
    ResolveArgs {
        name: "sale.order".to_string(),
        template: dir.join(template),
        translations: None,
        work_dir: Some(dir.join("out")),
        subreports: Vec::new(),
    }
}

#[test]
fn test_resolve_writes_template_and_properties() {
    init_test_logging();
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("sale_order.jrxml"), SAMPLE_JRXML).unwrap();
    fs::write(
        dir.path().join("translations.json"),
        r#"[
            {"language": "en_US", "source": "Total", "value": "Total"},
            {"language": "fr_FR", "source": "Total", "value": "Montant total"},
            {"language": "fr_FR", "source": "Draft", "value": null}
        ]"#,
    )
    .unwrap();

    let mut resolve = args(dir.path(), "sale_order.jrxml");
    resolve.translations = Some(dir.path().join("translations.json"));

    let resolution = commands::resolve(&resolve, &Config::default()).unwrap();
    let lines = commands::describe(&resolution);

    assert_eq!(lines.len(), 3);
    assert!(lines[0].ends_with("sale_order.jrxml"));
    assert!(lines[1].ends_with("sale_order_en_US.properties"));
    assert!(lines[2].ends_with("sale_order_fr_FR.properties"));

    let fr = fs::read_to_string(dir.path().join("out/sale_order_fr_FR.properties")).unwrap();
    assert_eq!(fr, "Total=Montant\\ total\n");
    assert_eq!(
        fs::read_to_string(&resolution.template_path).unwrap(),
        SAMPLE_JRXML
    );
}

#[test]
fn test_resolve_missing_template() {
    let dir = tempfile::tempdir().unwrap();
    let err = commands::resolve(&args(dir.path(), "absent.jrxml"), &Config::default()).unwrap_err();
    assert!(matches!(err, BridgeError::Input { .. }));
}

#[test]
fn test_resolve_invalid_translations() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("sale_order.jrxml"), SAMPLE_JRXML).unwrap();
    fs::write(dir.path().join("translations.json"), "{not json").unwrap();

    let mut resolve = args(dir.path(), "sale_order.jrxml");
    resolve.translations = Some(dir.path().join("translations.json"));

    let err = commands::resolve(&resolve, &Config::default()).unwrap_err();
    assert!(matches!(err, BridgeError::Translations { .. }));
    assert!(!dir.path().join("out").exists());
}

#[test]
fn test_resolve_checks_subreports_when_listed() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("invoice.jrxml"), SAMPLE_JRXML_WITH_SUBREPORT).unwrap();

    let mut resolve = args(dir.path(), "invoice.jrxml");
    resolve.subreports = vec!["jasper_reports.other".to_string()];
    let err = commands::resolve(&resolve, &Config::default()).unwrap_err();
    assert!(matches!(
        err,
        BridgeError::Jasper(JasperError::SubreportNotFound { ref name })
            if name == "jasper_reports.invoice_lines"
    ));

    resolve.subreports = vec!["jasper_reports.invoice_lines".to_string()];
    let resolution = commands::resolve(&resolve, &Config::default()).unwrap();
    assert!(resolution.template_path.ends_with("invoice.jrxml"));
}
