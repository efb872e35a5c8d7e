// Statement Record - The unit of data, regardless of source
//
// CSV-sourced records carry their balance fields as free-form text and are
// never numerically validated. XML-sourced records carry them as parsed
// decimals and are checked for balance consistency. The enum keeps that
// asymmetry explicit instead of hiding it behind a lossy conversion.

use rust_decimal::Decimal;
use std::fmt;

// ============================================================================
// BALANCES
// ============================================================================

/// Balance fields of a statement record, in the representation the source
/// format provided them.
#[derive(Debug, Clone, PartialEq)]
pub enum Balances {
    /// CSV source: balances preserved verbatim as text
    Text {
        start: String,
        mutation: String,
        end: String,
    },

    /// XML source: balances parsed to decimals at read time
    Numeric {
        start: Decimal,
        mutation: Decimal,
        end: Decimal,
    },
}

impl Balances {
    /// Check the balance rule: start + mutation == end.
    ///
    /// Only numeric balances can be checked; text balances always pass,
    /// matching the source asymmetry (XML is the validated ledger feed).
    /// Comparison is exact decimal equality, no tolerance.
    pub fn is_consistent(&self) -> bool {
        match self {
            Balances::Text { .. } => true,
            Balances::Numeric {
                start,
                mutation,
                end,
            } => *start + *mutation == *end,
        }
    }

    /// Render the three fields as text, for the report writer and printer.
    pub fn as_strings(&self) -> (String, String, String) {
        match self {
            Balances::Text {
                start,
                mutation,
                end,
            } => (start.clone(), mutation.clone(), end.clone()),
            Balances::Numeric {
                start,
                mutation,
                end,
            } => (start.to_string(), mutation.to_string(), end.to_string()),
        }
    }
}

// ============================================================================
// STATEMENT RECORD
// ============================================================================

/// One customer statement transaction. Never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct StatementRecord {
    /// Intended unique identifier across both sources
    pub reference: String,
    pub account_number: String,
    pub description: String,
    pub balances: Balances,
}

impl StatementRecord {
    /// Record with text balances, as produced by the CSV reader
    pub fn text(
        reference: impl Into<String>,
        account_number: impl Into<String>,
        description: impl Into<String>,
        start: impl Into<String>,
        mutation: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        StatementRecord {
            reference: reference.into(),
            account_number: account_number.into(),
            description: description.into(),
            balances: Balances::Text {
                start: start.into(),
                mutation: mutation.into(),
                end: end.into(),
            },
        }
    }

    /// Record with parsed balances, as produced by the XML reader
    pub fn numeric(
        reference: impl Into<String>,
        account_number: impl Into<String>,
        description: impl Into<String>,
        start: Decimal,
        mutation: Decimal,
        end: Decimal,
    ) -> Self {
        StatementRecord {
            reference: reference.into(),
            account_number: account_number.into(),
            description: description.into(),
            balances: Balances::Numeric {
                start,
                mutation,
                end,
            },
        }
    }

    /// Fields in report-column order (see [`crate::report::REPORT_HEADER`])
    pub fn csv_fields(&self) -> [String; 6] {
        let (start, mutation, end) = self.balances.as_strings();
        [
            self.reference.clone(),
            self.account_number.clone(),
            self.description.clone(),
            start,
            mutation,
            end,
        ]
    }
}

impl fmt::Display for StatementRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (start, mutation, end) = self.balances.as_strings();
        write!(
            f,
            "Reference: {}, Account Number: {}, Description: {}, \
             Start Balance: {}, Mutation: {}, End Balance: {}",
            self.reference, self.account_number, self.description, start, mutation, end
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================
