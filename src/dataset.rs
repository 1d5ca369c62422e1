//! Dataset input/output
//!
//! Reads the tabular review collection from CSV and writes it back with
//! the two derived columns appended. Columns the pipeline does not
//! consume are carried through verbatim, in their original order, so
//! downstream tooling keeps whatever metadata the scrape produced.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use csv::StringRecord;
use tracing::debug;

use crate::errors::{PrepError, Result};
use crate::types::{Annotation, ReviewRecord};

/// Columns every input table must provide.
pub const REQUIRED_COLUMNS: &[&str] = &["app", "content", "score", "date"];

/// A review table: raw rows kept verbatim plus a typed view of the
/// fields the pipeline consumes, aligned by index.
#[derive(Debug, Clone)]
pub struct ReviewTable {
    headers: StringRecord,
    rows: Vec<StringRecord>,
    records: Vec<ReviewRecord>,
}

impl ReviewTable {
    /// Read a table from a CSV file.
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Read a table from any CSV byte stream.
    ///
    /// The header row must contain every column in
    /// [`REQUIRED_COLUMNS`]. Rows shorter than the header are padded
    /// with empty trailing cells; a row longer than the header, or one
    /// whose score or date does not parse, fails the whole read, since
    /// a malformed table should surface before any processing starts.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
        let headers = csv_reader.headers()?.clone();
        let columns = resolve_columns(&headers)?;

        let mut rows = Vec::new();
        let mut records = Vec::new();
        for (index, row) in csv_reader.records().enumerate() {
            let mut row = row?;
            let line = index + 1;
            if row.len() > headers.len() {
                return Err(PrepError::Record {
                    row: line,
                    reason: format!(
                        "{} fields where the header defines {}",
                        row.len(),
                        headers.len()
                    ),
                });
            }
            // Missing trailing cells read as empty; every retained row
            // stays at header width so the appended columns line up on
            // write.
            while row.len() < headers.len() {
                row.push_field("");
            }
            records.push(columns.extract(&row, line)?);
            rows.push(row);
        }
        debug!(rows = rows.len(), "review table loaded");
        Ok(ReviewTable {
            headers,
            rows,
            records,
        })
    }

    /// Typed records aligned with the raw rows by index.
    pub fn records(&self) -> &[ReviewRecord] {
        &self.records
    }

    /// Column headers as read.
    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table holds no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Write the table with `eligible` and `normalized_tokens` columns
    /// appended, to a file.
    pub fn write_annotated_csv(&self, path: &Path, annotations: &[Annotation]) -> Result<()> {
        let file = File::create(path)?;
        self.write_annotated(file, annotations)
    }

    /// Write the table with the derived columns appended.
    ///
    /// `annotations` must align with the rows by index; original cells
    /// are emitted untouched.
    pub fn write_annotated<W: Write>(&self, writer: W, annotations: &[Annotation]) -> Result<()> {
        if annotations.len() != self.rows.len() {
            return Err(PrepError::Config(format!(
                "annotation count {} does not match row count {}",
                annotations.len(),
                self.rows.len()
            )));
        }
        let mut csv_writer = csv::Writer::from_writer(writer);
        let mut headers = self.headers.clone();
        headers.push_field("eligible");
        headers.push_field("normalized_tokens");
        csv_writer.write_record(&headers)?;
        for (row, annotation) in self.rows.iter().zip(annotations) {
            let mut annotated = row.clone();
            annotated.push_field(if annotation.eligible { "true" } else { "false" });
            annotated.push_field(&annotation.joined_tokens());
            csv_writer.write_record(&annotated)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
struct ColumnIndices {
    app: usize,
    content: usize,
    score: usize,
    date: usize,
}

impl ColumnIndices {
    fn extract(&self, row: &StringRecord, line: usize) -> Result<ReviewRecord> {
        let field = |index: usize| row.get(index).unwrap_or("");
        let score: u8 = field(self.score).trim().parse().map_err(|_| PrepError::Record {
            row: line,
            reason: format!("invalid score '{}'", field(self.score)),
        })?;
        let date = parse_date(field(self.date).trim()).ok_or_else(|| PrepError::Record {
            row: line,
            reason: format!("invalid date '{}'", field(self.date)),
        })?;
        Ok(ReviewRecord::new(
            field(self.app),
            field(self.content),
            score,
            date,
        ))
    }
}

fn resolve_columns(headers: &StringRecord) -> Result<ColumnIndices> {
    let position = |name: &str| headers.iter().position(|h| h.trim() == name);
    match (
        position("app"),
        position("content"),
        position("score"),
        position("date"),
    ) {
        (Some(app), Some(content), Some(score), Some(date)) => Ok(ColumnIndices {
            app,
            content,
            score,
            date,
        }),
        (app, content, score, date) => {
            let mut missing = Vec::new();
            for (found, name) in [
                (app, "app"),
                (content, "content"),
                (score, "score"),
                (date, "date"),
            ] {
                if found.is_none() {
                    missing.push(name.to_string());
                }
            }
            Err(PrepError::Schema { missing })
        }
    }
}

/// Accept a bare ISO date or an ISO datetime, keeping the date part.
fn parse_date(value: &str) -> Option<NaiveDate> {
    if let Ok(date) = value.parse::<NaiveDate>() {
        return Some(date);
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(value, format) {
            return Some(datetime.date());
        }
    }
    None
}
