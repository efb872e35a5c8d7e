// Report Writer and Printer - Emit the failed-record collection
//
// The writer serializes to validation_report_<YYYYMM>.csv in the working
// directory; the printer mirrors the same records to the operational log.
// Both fail soft: errors are logged, never propagated.

use crate::logger::Logger;
use crate::record::StatementRecord;
use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use std::path::Path;

/// Report column order, also used when the collection is empty and no record
/// is available to derive the header from.
pub const REPORT_HEADER: [&str; 6] = [
    "Reference",
    "Account Number",
    "Description",
    "Start Balance",
    "Mutation",
    "End Balance",
];

// ============================================================================
// REPORT DATE
// ============================================================================

/// First day of the month preceding `today`; names the report artifact.
pub fn previous_month(today: NaiveDate) -> NaiveDate {
    let (year, month) = match today.month() {
        1 => (today.year() - 1, 12),
        m => (today.year(), m - 1),
    };
    // Day 1 exists in every month; fall back to the input if chrono disagrees
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(today)
}

/// validation_report_<YYYYMM>.csv
pub fn report_filename(report_date: NaiveDate) -> String {
    format!("validation_report_{}.csv", report_date.format("%Y%m"))
}

// ============================================================================
// REPORT WRITER
// ============================================================================

/// Write the report into the working directory. Returns the generated file
/// name on success; on failure, logs the error and returns None.
pub fn write_report(
    failed_records: &[&StatementRecord],
    report_date: NaiveDate,
    log: &dyn Logger,
) -> Option<String> {
    write_report_in(Path::new("."), failed_records, report_date, log)
}

/// Same as [`write_report`], with an explicit target directory.
///
/// An empty collection still produces a header-only file, so every run
/// leaves an auditable artifact.
pub fn write_report_in(
    dir: &Path,
    failed_records: &[&StatementRecord],
    report_date: NaiveDate,
    log: &dyn Logger,
) -> Option<String> {
    let filename = report_filename(report_date);

    match try_write(&dir.join(&filename), failed_records) {
        Ok(()) => {
            log.info(&format!(
                "Validation report generated successfully: {filename}"
            ));
            Some(filename)
        }
        Err(e) => {
            log.error(&format!("Error writing validation report: {e:#}"));
            None
        }
    }
}

fn try_write(path: &Path, failed_records: &[&StatementRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create report file: {}", path.display()))?;

    writer.write_record(REPORT_HEADER)?;
    for record in failed_records {
        writer.write_record(&record.csv_fields())?;
    }
    writer.flush()?;

    Ok(())
}

// ============================================================================
// REPORT PRINTER
// ============================================================================

/// Mirror the failed records to the log, one info line per record.
pub fn print_report(failed_records: &[&StatementRecord], log: &dyn Logger) {
    if failed_records.is_empty() {
        log.info("No failed records found.");
        return;
    }

    log.info("Validation report:");
    for record in failed_records {
        log.info(&record.to_string());
    }
}

// ============================================================================
// TESTS
// ============================================================================
