use std::io::Write;

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{Answers, AssessmentResult};

/// Durable snapshot of one assessment. `results` is carried unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub timestamp: String,
    pub answers: Answers,
    pub results: AssessmentResult,
}

impl ExportDocument {
    pub fn new(answers: Answers, results: AssessmentResult, generated_at: DateTime<Utc>) -> Self {
        Self {
            timestamp: generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            answers,
            results,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to encode export json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write export csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to write export: {0}")]
    Io(#[from] std::io::Error),
}

pub fn export_file_name(date: NaiveDate) -> String {
    format!("funding-readiness-results-{}.json", date.format("%Y-%m-%d"))
}

pub fn write_json<W: Write>(document: &ExportDocument, writer: W) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(writer, document)?;
    Ok(())
}

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    category: &'a str,
    percent: f64,
    band: &'a str,
}

/// Four category rows in reporting order, then `Overall,<percent>,<profile>`.
pub fn write_category_csv<W: Write>(
    result: &AssessmentResult,
    writer: W,
) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for category in &result.categories {
        csv_writer.serialize(CsvRow {
            category: category.category.label(),
            percent: category.percent,
            band: category.band.label(),
        })?;
    }

    csv_writer.serialize(CsvRow {
        category: "Overall",
        percent: result.overall_percent,
        band: result.profile.label(),
    })?;

    csv_writer.flush()?;
    Ok(())
}
