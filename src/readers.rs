// Record Sources - Polymorphic readers for the two statement feeds
//
// Both readers fail soft: any I/O or structural failure is reported through
// the injected logger and degrades to zero records, never to a fault at the
// caller. The CSV feed keeps all fields as text; the XML feed parses its
// balance fields to decimals at read time.

use crate::logger::Logger;
use crate::record::{Balances, StatementRecord};
use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

// ============================================================================
// RECORD SOURCE TRAIT
// ============================================================================

/// Capability: produce statement records from a named external resource,
/// or fail soft.
pub trait RecordSource {
    /// Parse the file, propagating failures with context
    fn try_read(&self, path: &Path) -> Result<Vec<StatementRecord>>;

    /// Source name used in error messages ("CSV", "XML")
    fn source_name(&self) -> &str;

    /// Read the file; on any failure, log it and return no records
    fn read(&self, path: &Path, log: &dyn Logger) -> Vec<StatementRecord> {
        match self.try_read(path) {
            Ok(records) => records,
            Err(e) => {
                log.error(&format!(
                    "Error reading {} file '{}': {e:#}",
                    self.source_name(),
                    path.display()
                ));
                Vec::new()
            }
        }
    }
}

// ============================================================================
// CSV SOURCE
// ============================================================================

/// Wire row for the CSV feed. The header row names these columns; all six
/// are required, and the balance columns stay free-form text.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Reference")]
    reference: String,
    #[serde(rename = "Account Number")]
    account_number: String,
    #[serde(rename = "Description")]
    description: String,
    #[serde(rename = "Start Balance")]
    start_balance: String,
    #[serde(rename = "Mutation")]
    mutation: String,
    #[serde(rename = "End Balance")]
    end_balance: String,
}

pub struct CsvSource;

impl RecordSource for CsvSource {
    fn try_read(&self, path: &Path) -> Result<Vec<StatementRecord>> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open file: {}", path.display()))?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(file);

        let mut records = Vec::new();
        for (line_num, row) in reader.deserialize::<CsvRow>().enumerate() {
            let row = row.with_context(|| {
                // +2: 1-indexed plus the header row
                format!("Failed to parse CSV line {}", line_num + 2)
            })?;

            records.push(StatementRecord {
                reference: row.reference,
                account_number: row.account_number,
                description: row.description,
                balances: Balances::Text {
                    start: row.start_balance,
                    mutation: row.mutation,
                    end: row.end_balance,
                },
            });
        }

        Ok(records)
    }

    fn source_name(&self) -> &str {
        "CSV"
    }
}

// ============================================================================
// XML SOURCE
// ============================================================================

/// Wire shape for the XML feed:
/// <records><record reference="..."><accountNumber/>...</record></records>
#[derive(Debug, Deserialize)]
struct XmlRecord {
    #[serde(rename = "@reference")]
    reference: String,
    #[serde(rename = "accountNumber")]
    account_number: String,
    description: String,
    #[serde(rename = "startBalance", with = "rust_decimal::serde::str")]
    start_balance: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    mutation: Decimal,
    #[serde(rename = "endBalance", with = "rust_decimal::serde::str")]
    end_balance: Decimal,
}

#[derive(Debug, Deserialize)]
struct XmlDocument {
    #[serde(rename = "record", default)]
    records: Vec<XmlRecord>,
}

pub struct XmlSource;

impl RecordSource for XmlSource {
    fn try_read(&self, path: &Path) -> Result<Vec<StatementRecord>> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open file: {}", path.display()))?;

        // A single non-numeric balance fails the whole-file read
        let doc: XmlDocument = quick_xml::de::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse XML from {}", path.display()))?;

        let records = doc
            .records
            .into_iter()
            .map(|r| StatementRecord {
                reference: r.reference,
                account_number: r.account_number,
                description: r.description,
                balances: Balances::Numeric {
                    start: r.start_balance,
                    mutation: r.mutation,
                    end: r.end_balance,
                },
            })
            .collect();

        Ok(records)
    }

    fn source_name(&self) -> &str {
        "XML"
    }
}

// ============================================================================
// TESTS
// ============================================================================
