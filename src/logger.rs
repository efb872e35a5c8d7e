// Logging Collaborator - Injected instead of a global singleton
//
// Every component takes `&dyn Logger`, so tests can capture messages with
// `MemoryLogger` while the binary forwards to the `log` facade (backed by
// env_logger, initialized once in main).

use std::sync::Mutex;

// ============================================================================
// LOGGER TRAIT
// ============================================================================

pub trait Logger {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

// ============================================================================
// ENV LOGGER
// ============================================================================

/// Production logger: forwards to the `log` macros.
///
/// The binary initializes env_logger before constructing any component,
/// so these calls always have a backend.
pub struct EnvLogger;

impl Logger for EnvLogger {
    fn info(&self, message: &str) {
        log::info!("{message}");
    }

    fn error(&self, message: &str) {
        log::error!("{message}");
    }
}

// ============================================================================
// MEMORY LOGGER (test double)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogLine {
    pub level: LogLevel,
    pub message: String,
}

/// Capturing logger for tests: records every line instead of printing.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    lines: Mutex<Vec<LogLine>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<LogLine> {
        self.lock().clone()
    }

    pub fn infos(&self) -> Vec<String> {
        self.messages(LogLevel::Info)
    }

    pub fn errors(&self) -> Vec<String> {
        self.messages(LogLevel::Error)
    }

    /// True if any captured line contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.lock().iter().any(|l| l.message.contains(needle))
    }

    fn messages(&self, level: LogLevel) -> Vec<String> {
        self.lock()
            .iter()
            .filter(|l| l.level == level)
            .map(|l| l.message.clone())
            .collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<LogLine>> {
        // A poisoned lock only means a test thread panicked mid-log;
        // the captured lines are still valid.
        self.lines.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn push(&self, level: LogLevel, message: &str) {
        self.lock().push(LogLine {
            level,
            message: message.to_string(),
        });
    }
}

impl Logger for MemoryLogger {
    fn info(&self, message: &str) {
        self.push(LogLevel::Info, message);
    }

    fn error(&self, message: &str) {
        self.push(LogLevel::Error, message);
    }
}

// ============================================================================
// TESTS
// ============================================================================
