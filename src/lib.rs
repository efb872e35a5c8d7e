// Customer Statement Validator - Core Library
// Exposes all modules for use in the CLI binary and tests

pub mod logger;
pub mod readers;
pub mod reconcile;
pub mod record;
pub mod report;

// Re-export commonly used types
pub use logger::{EnvLogger, LogLevel, LogLine, Logger, MemoryLogger};
pub use readers::{CsvSource, RecordSource, XmlSource};
pub use reconcile::reconcile;
pub use record::{Balances, StatementRecord};
pub use report::{
    previous_month, print_report, report_filename, write_report, write_report_in, REPORT_HEADER,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
