//! Property tests for display formatting.

use proptest::prelude::*;
use serde_json::json;

use zoo_model::{AnimalRecord, NormalizationOptions, RawRecord};
use zoo_transform::{format_text, normalize_record};

const NA: &str = "N/A";

proptest! {
    #[test]
    fn formatting_is_idempotent(
        text in "[a-zA-Z0-9 '\u{2019}\u{00DF}\u{00E9}\u{00C9}\u{01C4}-\u{01CC}\u{FB00}-\u{FB06}-]{0,24}"
    ) {
        let once = format_text(&text, NA);
        let twice = format_text(&once, NA);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn sentinel_passes_through_in_any_case(mask in prop::collection::vec(any::<bool>(), 3)) {
        let sentinel: String = "n/a"
            .chars()
            .zip(mask)
            .map(|(ch, upper)| if upper { ch.to_ascii_uppercase() } else { ch })
            .collect();
        prop_assert_eq!(format_text(&sentinel, NA), sentinel);
    }

    #[test]
    fn titled_possessive_never_survives(word in "[a-z]{1,8}", rest in "[a-z ]{0,12}") {
        let text = format!("{word}\u{2019}s{rest}");
        prop_assert!(!format_text(&text, NA).contains("\u{2019}S"), "titled possessive survived");
    }
}

#[test]
fn ligature_and_digraph_names_title_case_once() {
    assert_eq!(format_text("\u{FB01}sh owl", NA), "Fish Owl");
    assert_eq!(format_text("\u{01C6}ungla cat", NA), "\u{01C5}ungla Cat");
    assert_eq!(format_text("\u{01C5}ungla cat", NA), "\u{01C5}ungla Cat");
}

#[test]
fn darwins_fox_keeps_lowercase_possessive() {
    assert_eq!(format_text("darwin\u{2019}s fox", NA), "Darwin\u{2019}s Fox");
}

#[test]
fn populated_record_fields_are_title_cased() {
    let record: RawRecord = serde_json::from_value(json!({
        "name": "darwin\u{2019}s fox",
        "locations": ["chile"],
        "characteristics": {"diet": "omnivore", "type": "mammal"}
    }))
    .expect("deserialize record");

    let normalized =
        normalize_record(&record, &NormalizationOptions::default()).expect("normalize record");
    assert_eq!(
        normalized,
        AnimalRecord::new("Darwin\u{2019}s Fox", "Omnivore", "Chile", "Mammal")
    );
}

#[test]
fn each_missing_field_becomes_sentinel() {
    let cases = [
        (json!({"locations": ["x"], "characteristics": {"diet": "d", "type": "t"}}), "name"),
        (json!({"name": "n", "characteristics": {"diet": "d", "type": "t"}}), "location"),
        (json!({"name": "n", "locations": ["x"], "characteristics": {"type": "t"}}), "diet"),
        (json!({"name": "n", "locations": ["x"], "characteristics": {"diet": "d"}}), "type"),
    ];

    for (value, field) in cases {
        let record: RawRecord = serde_json::from_value(value).expect("deserialize record");
        let normalized =
            normalize_record(&record, &NormalizationOptions::default()).expect("normalize record");
        let actual = match field {
            "name" => &normalized.name,
            "location" => &normalized.location,
            "diet" => &normalized.diet,
            _ => &normalized.kind,
        };
        assert_eq!(actual, NA, "field {field} should default to the sentinel");
    }
}
