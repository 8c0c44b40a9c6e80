//! Property-based tests for gradboard using proptest
//!
//! These tests generate random field values and whole input files to check
//! the cleaning invariants and that the CLI never crashes on odd input.

use assert_cmd::prelude::*;
use gradboard::analysis::FrequencyTable;
use gradboard::cleaning::{NameNormalizer, split_address, split_university_country};
use proptest::prelude::*;
use std::io::Write;
use std::process::Command;

const NAME: &str = "gradboard";

/// Text without the `/` separator
fn name_strategy() -> impl Strategy<Value = String> {
    r"[A-Za-z0-9 .,&()-]{0,30}"
}

/// Text without the `,` separator, whitespace included
fn segment_strategy() -> impl Strategy<Value = String> {
    r"[A-Za-z \t]{0,20}"
}

/// Plausible and malformed cells of the composite columns
fn university_country_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (name_strategy(), prop_oneof![Just("US"), Just("IN"), Just("NP"), Just("UK")])
            .prop_map(|(university, country)| format!("{university}/{country}")),
        name_strategy(),
        (name_strategy(), name_strategy(), name_strategy())
            .prop_map(|(a, b, c)| format!("{a}/{b}/{c}")),
    ]
}

fn address_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(segment_strategy(), 1..5).prop_map(|parts| parts.join(","))
}

fn csv_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_university_country_split_rejoins(
        university in name_strategy(),
        country in name_strategy(),
    ) {
        let value = format!("{university}/{country}");
        let (left, right) = split_university_country(&value).unwrap();

        prop_assert_eq!(format!("{left}/{right}"), value);
        prop_assert_eq!(left, university);
        prop_assert_eq!(right, country);
    }

    #[test]
    fn test_university_country_rejects_other_part_counts(value in university_country_strategy()) {
        let parts = value.split('/').count();
        let result = split_university_country(&value);

        if parts == 2 {
            prop_assert!(result.is_ok());
        } else {
            let error = result.unwrap_err();
            prop_assert_eq!(error.expected, 2);
            prop_assert_eq!(error.found, parts);
        }
    }

    #[test]
    fn test_address_requires_three_segments(value in address_strategy()) {
        let segments = value.split(',').count();
        let result = split_address(&value);

        prop_assert_eq!(result.is_ok(), segments == 3);
        if let Ok(address) = result {
            prop_assert!(!address.district.chars().any(char::is_whitespace));
            prop_assert_eq!(address.zone.trim(), address.zone.as_str());
            prop_assert_eq!(address.city.trim(), address.city.as_str());
        }
    }

    #[test]
    fn test_country_normalization_is_idempotent(
        country in prop_oneof![
            Just("NP".to_string()),
            Just("IN".to_string()),
            Just("US".to_string()),
            r"[A-Za-z ]{0,15}",
        ]
    ) {
        let normalizer = NameNormalizer::default();
        let once = normalizer.normalize_country(&country);
        prop_assert_eq!(normalizer.normalize_country(&once), once);
    }

    #[test]
    fn test_university_normalization_is_idempotent(university in name_strategy()) {
        let normalizer = NameNormalizer::default();
        let once = normalizer.normalize_university(&university);

        prop_assert!(!once.contains(','));
        prop_assert_eq!(normalizer.normalize_university(&once), once);
    }

    #[test]
    fn test_top_n_keeps_highest_counts(
        values in prop::collection::vec(prop_oneof![Just("A"), Just("B"), Just("C"), Just("D")], 0..40),
        n in 0usize..6,
    ) {
        let all = FrequencyTable::from_values("Value", values.iter().copied());
        let top = all.clone().top(n);

        prop_assert_eq!(top.len(), n.min(all.len()));
        prop_assert_eq!(all.total(), values.len());

        let smallest_kept = top.counts.iter().map(|c| c.count).min().unwrap_or(usize::MAX);
        for dropped in all.counts.iter().skip(top.len()) {
            prop_assert!(dropped.count <= smallest_kept);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(10))] // each case spawns the binary

    #[test]
    fn test_handles_random_rows(
        rows in prop::collection::vec(
            (university_country_strategy(), address_strategy(), 1990i32..2030, prop_oneof![Just("Male"), Just("Female"), Just("")]),
            0..15,
        )
    ) {
        let mut content = String::from("University/Country,Address,Passout Year,Gender\n");
        for (university_country, address, year, gender) in &rows {
            content.push_str(&format!(
                "{},{},{year},{gender}\n",
                csv_field(university_country),
                csv_field(address)
            ));
        }

        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();

        let well_formed = rows.iter().all(|(university_country, address, _, _)| {
            university_country.split('/').count() == 2 && address.split(',').count() == 3
        });

        let mut cmd = Command::cargo_bin(NAME).unwrap();
        cmd.arg(file.path()).arg("--no-config").arg("--format").arg("minimal");

        // Either a clean summary or a schema error, never a crash
        if well_formed {
            cmd.assert().success();
        } else {
            cmd.assert()
                .failure()
                .stderr(predicates::str::starts_with("Error: Schema mismatch"));
        }
    }
}
