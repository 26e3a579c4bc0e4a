//! Stateless helpers shared by the store, renderer and gateway.

use std::collections::BTreeSet;

use chrono::NaiveDateTime;

use crate::conf::{C_FIELD_ACTION, C_FIELD_TIMESTAMP, C_FMT_TIMESTAMP_RECORD, TUP_FIELDS_CHECKBOX};
use crate::spec::SpecSubmissionRecord;

/// Derive the ordered column names for `record`.
///
/// `Timestamp` comes first, then the record keys in encounter order; repeated
/// names keep their first position and the control `action` key is dropped.
pub fn derive_header_sequence(record: &SpecSubmissionRecord) -> Vec<String> {
    let mut set_seen = BTreeSet::new();
    std::iter::once(C_FIELD_TIMESTAMP)
        .chain(record.keys())
        .filter(|key| *key != C_FIELD_ACTION)
        .filter(|key| set_seen.insert(*key))
        .map(ToString::to_string)
        .collect()
}

/// Whether `key` is one of the checkbox-style fields.
pub fn is_checkbox_field(key: &str) -> bool {
    TUP_FIELDS_CHECKBOX.contains(&key)
}

/// Format a record timestamp value.
pub fn format_record_timestamp(dt: &NaiveDateTime) -> String {
    dt.format(C_FMT_TIMESTAMP_RECORD).to_string()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn header_sequence_starts_with_timestamp_and_drops_action() {
        let record = SpecSubmissionRecord::from_pairs([
            ("tipo", "Incidente"),
            ("action", "save"),
            ("descricao", "teste"),
        ]);

        assert_eq!(
            derive_header_sequence(&record),
            vec!["Timestamp", "tipo", "descricao"]
        );
    }

    #[test]
    fn header_sequence_keeps_single_timestamp_at_front() {
        let mut record = SpecSubmissionRecord::from_pairs([("descricao", "x")]);
        record.insert("Timestamp", "2025-01-01 00:00:00");
        record.insert("action", "pdf");

        assert_eq!(derive_header_sequence(&record), vec!["Timestamp", "descricao"]);
    }

    #[test]
    fn header_sequence_of_reserved_only_record() {
        let record = SpecSubmissionRecord::from_pairs([
            ("action", "save"),
            ("Timestamp", "2025-01-01 00:00:00"),
        ]);
        assert_eq!(derive_header_sequence(&record), vec!["Timestamp"]);
        assert_eq!(
            derive_header_sequence(&SpecSubmissionRecord::new()),
            vec!["Timestamp"]
        );
    }

    #[test]
    fn header_sequence_properties_hold_for_varied_records() {
        let l_key_pools = [
            vec!["b", "a", "action", "c"],
            vec!["action"],
            vec!["z", "Timestamp", "y", "z"],
            vec!["mudancas_sgq", "atualizar_riscos", "tipo", "tipo", "action"],
        ];

        for l_keys in l_key_pools {
            let record = SpecSubmissionRecord::from_pairs(l_keys.iter().map(|k| (*k, "v")));
            let l_headers = derive_header_sequence(&record);

            assert_eq!(l_headers[0], "Timestamp");
            assert!(!l_headers.iter().any(|h| h == "action"));
            let set_unique: BTreeSet<_> = l_headers.iter().collect();
            assert_eq!(set_unique.len(), l_headers.len());

            let l_expected_rest: Vec<&str> = record
                .keys()
                .filter(|k| *k != "action" && *k != "Timestamp")
                .collect();
            let l_actual_rest: Vec<&str> = l_headers[1..].iter().map(String::as_str).collect();
            assert_eq!(l_actual_rest, l_expected_rest);
        }
    }

    #[test]
    fn checkbox_fields_are_recognized() {
        assert!(is_checkbox_field("atualizar_riscos"));
        assert!(is_checkbox_field("mudancas_sgq"));
        assert!(!is_checkbox_field("tipo"));
    }

    #[test]
    fn record_timestamp_format() {
        let dt = NaiveDate::from_ymd_opt(2025, 2, 3)
            .and_then(|d| d.and_hms_opt(14, 5, 9))
            .expect("valid datetime");
        assert_eq!(format_record_timestamp(&dt), "2025-02-03 14:05:09");
    }
}
