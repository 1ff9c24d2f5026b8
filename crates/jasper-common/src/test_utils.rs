//! Test utilities and shared test helpers for Jasper Bridge.
//!
//! Fixtures used by unit and integration tests across the workspace.

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// Safe to call multiple times; only the first call installs a subscriber.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// A minimal JRXML template used by resolver and executor tests.
pub const SAMPLE_JRXML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<jasperReport name="sale_order" language="xpath">
  <queryString language="xPath"><![CDATA[/data/record]]></queryString>
  <field name="name" class="java.lang.String"/>
  <title><band height="40"/></title>
</jasperReport>
"#;

/// A JRXML template referencing a single subreport.
pub const SAMPLE_JRXML_WITH_SUBREPORT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<jasperReport name="invoice" language="xpath">
  <detail><band height="20"><subreport>
    <subreportExpression><![CDATA[$P{SUBREPORT_DIR} + "invoice_lines.jrxml"]]></subreportExpression>
  </subreport></band></detail>
</jasperReport>
"#;

/// Translation fixtures expressed as `(language, source, value)` triples.
pub mod translation_fixtures {
    /// Two English entries followed by one French entry.
    pub fn sorted_by_language() -> Vec<(&'static str, &'static str, &'static str)> {
        vec![
            ("en", "Hello", "Bonjour"),
            ("en", "Bye", "Au revoir"),
            ("fr", "Hi", "Salut"),
        ]
    }

    /// English, French, then English again.
    pub fn interleaved() -> Vec<(&'static str, &'static str, &'static str)> {
        vec![("en", "A", "1"), ("fr", "B", "2"), ("en", "C", "3")]
    }
}
