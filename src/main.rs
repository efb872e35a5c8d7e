// Monthly validation report - orchestrator binary
//
// Fixed sequence: read both feeds, reconcile, write the dated report, print
// it to the log, then emit one success/failure summary line. Every component
// fails soft, so the run always reaches the summary; success is decided only
// by whether the writer produced a file, and failure maps to exit code 1.

use chrono::Local;
use std::path::Path;
use std::process::ExitCode;

use statement_validator::{
    previous_month, print_report, reconcile, write_report, CsvSource, EnvLogger, Logger,
    RecordSource, XmlSource,
};

const CSV_INPUT: &str = "records.csv";
const XML_INPUT: &str = "records.xml";

fn main() -> ExitCode {
    // Process-wide logging backend, initialized once before any component
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let log = EnvLogger;

    if run(&log) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn run(log: &dyn Logger) -> bool {
    // Reporting period: the calendar month preceding today
    let report_date = previous_month(Local::now().date_naive());

    let csv_records = CsvSource.read(Path::new(CSV_INPUT), log);
    let xml_records = XmlSource.read(Path::new(XML_INPUT), log);

    let failed_records = reconcile(&csv_records, &xml_records);

    let report_filename = write_report(&failed_records, report_date, log);
    print_report(&failed_records, log);

    match report_filename {
        Some(_) => {
            log.info("Monthly validation report process completed successfully.");
            true
        }
        None => {
            log.error("Monthly validation report process failed.");
            false
        }
    }
}
