//! Connection and report parameters handed to the rendering server.

use jasper_config::DatabaseConfig;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};

/// Parameter carrying the directory of the resolved template, against which
/// reports locate images and other companion files.
pub const STANDARD_DIR: &str = "STANDARD_DIR";

/// Parameter carrying the user's locale.
pub const REPORT_LOCALE: &str = "REPORT_LOCALE";

/// Parameter carrying the ids of the printed records.
pub const IDS: &str = "IDS";

/// How the rendering server reads its input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionParameters {
    /// Output format, e.g. `pdf`.
    pub output: String,
    /// CSV data file.
    pub csv: PathBuf,
    /// JDBC connection string.
    pub dsn: String,
    /// Database user.
    pub user: String,
    /// Database password.
    pub password: String,
    /// CSV inputs of subreports, in template order.
    pub subreports: Vec<SubreportData>,
}

/// CSV input staged for one subreport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubreportData {
    /// Report parameter through which the main report passes the data source.
    pub parameter: String,
    /// Staged CSV file.
    pub data_file: PathBuf,
    /// Template file of the subreport.
    pub jrxml_file: String,
}

impl ConnectionParameters {
    /// Builds connection parameters from database settings.
    pub fn new(
        database: &DatabaseConfig,
        output: impl Into<String>,
        csv: impl Into<PathBuf>,
    ) -> Self {
        Self::for_database(database, &database.name, output, csv)
    }

    /// Like [`Self::new`], connecting to `db_name` instead of the configured
    /// database.
    pub fn for_database(
        database: &DatabaseConfig,
        db_name: &str,
        output: impl Into<String>,
        csv: impl Into<PathBuf>,
    ) -> Self {
        Self {
            output: output.into(),
            csv: csv.into(),
            dsn: Self::dsn(database, db_name),
            user: database
                .user
                .clone()
                .filter(|u| !u.is_empty())
                .unwrap_or_else(system_user_name),
            password: database.password_or_default().to_string(),
            subreports: Vec::new(),
        }
    }

    /// Attaches staged subreport inputs.
    #[must_use]
    pub fn with_subreports(mut self, subreports: Vec<SubreportData>) -> Self {
        self.subreports = subreports;
        self
    }

    /// JDBC connection string for `db_name` on the configured server.
    pub fn dsn(database: &DatabaseConfig, db_name: &str) -> String {
        jdbc_dsn(database.host_or_default(), database.port_or_default(), db_name)
    }
}

/// `jdbc:postgresql://host:port/db`
pub fn jdbc_dsn(host: &str, port: u16, database: &str) -> String {
    format!("jdbc:postgresql://{host}:{port}/{database}")
}

/// Name of the user running this process, empty if unknown.
pub fn system_user_name() -> String {
    env::var("USER")
        .or_else(|_| env::var("USERNAME"))
        .unwrap_or_default()
}

/// Values bound to report parameters, keyed by parameter name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ReportParameters(BTreeMap<String, Value>);

impl ReportParameters {
    /// Standard parameters for a run over `ids` in `locale`.
    pub fn standard(locale: Option<&str>, ids: &[i64]) -> Self {
        let mut params = BTreeMap::new();
        params.insert(
            REPORT_LOCALE.to_string(),
            locale.map_or(Value::Null, |l| Value::String(l.to_string())),
        );
        params.insert(IDS.to_string(), Value::from(ids.to_vec()));
        Self(params)
    }

    /// Adds or replaces one parameter.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    /// Sets [`STANDARD_DIR`] to `dir`.
    pub fn set_standard_dir(&mut self, dir: &Path) {
        self.insert(STANDARD_DIR, dir.to_string_lossy().into_owned());
    }

    /// Adds or replaces parameters.
    pub fn merge<I>(&mut self, extra: I)
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        self.0.extend(extra);
    }

    /// Value of one parameter.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dsn_defaults() {
        let database = DatabaseConfig {
            name: "erp".to_string(),
            user: Some("report".to_string()),
            ..DatabaseConfig::default()
        };
        let params = ConnectionParameters::new(&database, "pdf", "/tmp/data.csv");
        assert_eq!(params.dsn, "jdbc:postgresql://localhost:5432/erp");
        assert_eq!(params.user, "report");
        assert_eq!(params.password, "");
        assert_eq!(params.output, "pdf");
    }

    #[test]
    fn test_dsn_with_host_and_port() {
        let database = DatabaseConfig {
            host: Some("db.internal".to_string()),
            port: Some(6543),
            name: "erp".to_string(),
            ..DatabaseConfig::default()
        };
        assert_eq!(
            ConnectionParameters::dsn(&database, "archive"),
            "jdbc:postgresql://db.internal:6543/archive"
        );

        let params = ConnectionParameters::for_database(&database, "archive", "xls", "/tmp/d.csv");
        assert_eq!(params.dsn, "jdbc:postgresql://db.internal:6543/archive");
    }

    #[test]
    fn test_standard_parameters_and_merge() {
        let mut params = ReportParameters::standard(Some("fr_FR"), &[3, 7]);
        assert_eq!(params.get(REPORT_LOCALE), Some(&json!("fr_FR")));
        assert_eq!(params.get(IDS), Some(&json!([3, 7])));

        params.merge([
            ("IDS".to_string(), json!([1])),
            ("TITLE".to_string(), json!("Quote")),
        ]);
        assert_eq!(params.get(IDS), Some(&json!([1])));
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn test_subreports_serialize_with_renderer_keys() {
        let params = ConnectionParameters::new(&DatabaseConfig::default(), "pdf", "/tmp/main.csv")
            .with_subreports(vec![SubreportData {
                parameter: "LINES".to_string(),
                data_file: PathBuf::from("/tmp/lines.csv"),
                jrxml_file: "invoice_lines.jrxml".to_string(),
            }]);
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(
            value["subreports"],
            json!([{
                "parameter": "LINES",
                "dataFile": "/tmp/lines.csv",
                "jrxmlFile": "invoice_lines.jrxml"
            }])
        );
    }

    #[test]
    fn test_standard_dir_parameter() {
        let mut params = ReportParameters::standard(None, &[]);
        params.set_standard_dir(Path::new("/tmp/jasper-bridge-x"));
        assert_eq!(params.get(STANDARD_DIR), Some(&json!("/tmp/jasper-bridge-x")));
    }

    #[test]
    fn test_parameters_serialize_as_map() {
        let params = ReportParameters::standard(None, &[]);
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value, json!({"IDS": [], "REPORT_LOCALE": null}));
    }
}
