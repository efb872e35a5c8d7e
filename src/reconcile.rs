// Reconciler - Duplicate references and balance consistency
//
// The only business rules in the system:
//   1. A Reference must be unique across both feeds combined.
//   2. For XML records, Start Balance + Mutation must equal End Balance.
//
// Pure function of its two inputs: no logging, no I/O. Side effects belong
// to the caller.

use crate::record::StatementRecord;
use std::collections::HashSet;

/// Collect the records violating either rule, in detection order: CSV
/// duplicates first (file order), then XML duplicates and imbalances
/// (file order).
///
/// The reference set is shared across both passes, so a reference first seen
/// in the CSV feed and repeated in the XML feed flags the XML occurrence.
/// A record can appear twice in the output when it is both a duplicate and
/// unbalanced; the output is deliberately not deduplicated. Records are
/// borrowed from the inputs, never cloned or mutated.
pub fn reconcile<'a>(
    csv_records: &'a [StatementRecord],
    xml_records: &'a [StatementRecord],
) -> Vec<&'a StatementRecord> {
    let mut references: HashSet<&str> = HashSet::new();
    let mut failed: Vec<&StatementRecord> = Vec::new();

    for record in csv_records {
        // insert() is false when the reference was already seen; the
        // duplicate is flagged and not re-added
        if !references.insert(record.reference.as_str()) {
            failed.push(record);
        }
    }

    for record in xml_records {
        if !references.insert(record.reference.as_str()) {
            failed.push(record);
        }

        // Checked independently of the duplicate test
        if !record.balances.is_consistent() {
            failed.push(record);
        }
    }

    failed
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::StatementRecord;
    use rust_decimal::Decimal;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str_exact(s).unwrap()
    }

    fn csv_record(reference: &str) -> StatementRecord {
        StatementRecord::text(
            reference,
            "NL91RABO0315273637",
            "Test transaction",
            "100.00",
            "-25.00",
            "75.00",
        )
    }

    fn xml_record(reference: &str, start: &str, mutation: &str, end: &str) -> StatementRecord {
        StatementRecord::numeric(
            reference,
            "NL93ABNA0585619023",
            "Test transaction",
            dec(start),
            dec(mutation),
            dec(end),
        )
    }

    #[test]
    fn test_empty_inputs_yield_empty_output() {
        let failed = reconcile(&[], &[]);
        assert!(failed.is_empty());
    }

    #[test]
    fn test_csv_duplicate_flags_second_occurrence_only() {
        let csv = vec![csv_record("A1"), csv_record("A2"), csv_record("A1")];

        let failed = reconcile(&csv, &[]);

        assert_eq!(failed.len(), 1);
        // Exactly the third record (second occurrence of A1)
        assert!(std::ptr::eq(failed[0], &csv[2]));
    }

    #[test]
    fn test_reference_shared_across_sources() {
        let csv = vec![csv_record("X9")];
        let xml = vec![xml_record("X9", "100.00", "-25.00", "75.00")];

        let failed = reconcile(&csv, &xml);

        assert_eq!(failed.len(), 1);
        assert!(std::ptr::eq(failed[0], &xml[0]));
    }

    #[test]
    fn test_every_occurrence_after_first_is_flagged() {
        let csv = vec![csv_record("R1"), csv_record("R1")];
        let xml = vec![xml_record("R1", "100.00", "-25.00", "75.00")];

        let failed = reconcile(&csv, &xml);

        assert_eq!(failed.len(), 2);
        assert!(std::ptr::eq(failed[0], &csv[1]));
        assert!(std::ptr::eq(failed[1], &xml[0]));
    }

    #[test]
    fn test_balanced_xml_record_not_flagged() {
        let xml = vec![xml_record("B1", "100.00", "-25.00", "75.00")];

        let failed = reconcile(&[], &xml);

        assert!(failed.is_empty());
    }

    #[test]
    fn test_imbalanced_xml_record_flagged_once() {
        let xml = vec![xml_record("B2", "100.00", "-25.00", "80.00")];

        let failed = reconcile(&[], &xml);

        assert_eq!(failed.len(), 1);
        assert!(std::ptr::eq(failed[0], &xml[0]));
    }

    #[test]
    fn test_duplicate_and_imbalanced_record_appears_twice() {
        let csv = vec![csv_record("D1")];
        let xml = vec![xml_record("D1", "100.00", "-25.00", "80.00")];

        let failed = reconcile(&csv, &xml);

        // Once for the duplicate reference, once for the imbalance
        assert_eq!(failed.len(), 2);
        assert!(std::ptr::eq(failed[0], &xml[0]));
        assert!(std::ptr::eq(failed[1], &xml[0]));
    }

    #[test]
    fn test_csv_balances_not_validated() {
        // Text balances are never compared, even when obviously wrong
        let csv = vec![StatementRecord::text(
            "C1",
            "NL91RABO0315273637",
            "Free-form balances",
            "100.00",
            "-25.00",
            "999.99",
        )];

        let failed = reconcile(&csv, &[]);

        assert!(failed.is_empty());
    }

    #[test]
    fn test_detection_order_is_preserved() {
        let csv = vec![csv_record("O1"), csv_record("O1"), csv_record("O2")];
        let xml = vec![
            xml_record("O2", "10.00", "5.00", "15.00"),
            xml_record("O3", "10.00", "5.00", "99.00"),
        ];

        let failed = reconcile(&csv, &xml);

        // CSV duplicates first in file order, then XML violations in file order
        assert_eq!(failed.len(), 3);
        assert!(std::ptr::eq(failed[0], &csv[1]));
        assert!(std::ptr::eq(failed[1], &xml[0]));
        assert!(std::ptr::eq(failed[2], &xml[1]));
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let csv = vec![csv_record("I1"), csv_record("I1")];
        let xml = vec![xml_record("I2", "1.00", "1.00", "3.00")];

        let first = reconcile(&csv, &xml);
        let second = reconcile(&csv, &xml);

        assert_eq!(first, second);
    }

    #[test]
    fn test_inputs_not_mutated() {
        let csv = vec![csv_record("M1"), csv_record("M1")];
        let xml = vec![xml_record("M2", "1.00", "1.00", "2.00")];
        let csv_before = csv.clone();
        let xml_before = xml.clone();

        let _ = reconcile(&csv, &xml);

        assert_eq!(csv, csv_before);
        assert_eq!(xml, xml_before);
    }
}
