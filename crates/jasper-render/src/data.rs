//! CSV input generation for reports that read from a data file.

use jasper_common::{JasperError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Debug;
use std::path::Path;
use tracing::debug;

/// Writes the input data of a report to a file.
pub trait DataGenerator: Send + Sync + Debug {
    /// Writes data to `path`, replacing any existing content.
    fn generate(&self, path: &Path) -> Result<()>;
}

/// Tabular records, one value per field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordSet {
    /// Column names.
    pub fields: Vec<String>,
    /// Rows, each with one value per field.
    pub rows: Vec<Vec<Value>>,
}

impl RecordSet {
    /// Creates an empty record set with the given columns.
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row.
    ///
    /// Fails when the row width differs from the number of fields.
    pub fn push(&mut self, row: Vec<Value>) -> Result<()> {
        if row.len() != self.fields.len() {
            return Err(JasperError::data_generation(format!(
                "Row has {} values but {} fields are defined",
                row.len(),
                self.fields.len()
            )));
        }
        self.rows.push(row);
        Ok(())
    }
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Writes a [`RecordSet`] as CSV with every cell quoted.
#[derive(Debug, Clone)]
pub struct CsvRecordDataGenerator {
    records: RecordSet,
}

impl CsvRecordDataGenerator {
    /// Creates a generator for `records`.
    pub const fn new(records: RecordSet) -> Self {
        Self { records }
    }
}

impl DataGenerator for CsvRecordDataGenerator {
    fn generate(&self, path: &Path) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .quote_style(csv::QuoteStyle::Always)
            .from_path(path)
            .map_err(|e| JasperError::data_generation_with_source("Cannot open data file", e))?;

        writer
            .write_record(&self.records.fields)
            .map_err(|e| JasperError::data_generation_with_source("Cannot write header", e))?;
        for row in &self.records.rows {
            writer
                .write_record(row.iter().map(cell))
                .map_err(|e| JasperError::data_generation_with_source("Cannot write row", e))?;
        }
        writer.flush()?;

        debug!(
            path = %path.display(),
            rows = self.records.rows.len(),
            "Wrote report data"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;

    #[test]
    fn test_generates_quoted_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");

        let mut records = RecordSet::new(["name", "amount", "note"]);
        records
            .push(vec![json!("Chair"), json!(12.5), Value::Null])
            .unwrap();
        records
            .push(vec![json!("Desk, oak"), json!(3), json!("say \"hi\"")])
            .unwrap();

        CsvRecordDataGenerator::new(records).generate(&path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "\"name\",\"amount\",\"note\"\n\
             \"Chair\",\"12.5\",\"\"\n\
             \"Desk, oak\",\"3\",\"say \"\"hi\"\"\"\n"
        );
    }

    #[test]
    fn test_rejects_ragged_row() {
        let mut records = RecordSet::new(["a", "b"]);
        let err = records.push(vec![json!(1)]).unwrap_err();
        assert_eq!(err.category(), "data_generation");
        assert!(records.rows.is_empty());
    }
}
