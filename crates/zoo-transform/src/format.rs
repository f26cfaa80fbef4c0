//! Display formatting for animal field values.
//!
//! Values are title-cased for display, except the sentinel, which is passed
//! through untouched. Title-casing capitalizes the letter after a possessive
//! apostrophe (`Darwin’S`); that sequence is lowered back afterwards.

use serde_json::Value;

/// Sequence produced by title-casing a possessive, e.g. `Darwin’S`.
const POSSESSIVE_TITLED: &str = "\u{2019}S";

/// Corrected possessive suffix.
const POSSESSIVE: &str = "\u{2019}s";

/// Title-case `text`.
///
/// A cased character that follows another cased character is lowercased;
/// every other cased character takes its Unicode titlecase mapping, so
/// ligatures and digraphs keep only their first letter capitalized
/// (`ﬁsh` → `Fish`, `ǆungla` → `ǅungla`). Uncased characters (digits,
/// punctuation, whitespace) are copied as-is and start a new word.
///
/// # Example
/// ```
/// use zoo_transform::title_case;
///
/// assert_eq!(title_case("arctic FOX"), "Arctic Fox");
/// assert_eq!(title_case("red-tailed hawk"), "Red-Tailed Hawk");
/// ```
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_cased = false;
    for ch in text.chars() {
        if is_cased(ch) {
            if previous_cased {
                out.extend(ch.to_lowercase());
            } else {
                push_titlecase(&mut out, ch);
            }
            previous_cased = true;
        } else {
            out.push(ch);
            previous_cased = false;
        }
    }
    out
}

/// Lowercase, uppercase and titlecase letters (`ǅ`, `ᾼ`) are all cased.
fn is_cased(ch: char) -> bool {
    ch.is_lowercase() || ch.is_uppercase() || is_titlecase_letter(ch)
}

/// Titlecase letters are neither upper nor lower but map both ways.
fn is_titlecase_letter(ch: char) -> bool {
    !ch.to_lowercase().eq([ch]) && !ch.to_uppercase().eq([ch])
}

fn push_titlecase(out: &mut String, ch: char) {
    let mapped = unicode_case_mapping::to_titlecase(ch);
    if mapped[0] == 0 {
        // no mapping: the character is its own titlecase form
        out.push(ch);
        return;
    }
    out.extend(
        mapped
            .iter()
            .take_while(|&&code| code != 0)
            .filter_map(|&code| char::from_u32(code)),
    );
}

/// True when `value` equals `sentinel`, ignoring case.
pub fn is_sentinel(value: &str, sentinel: &str) -> bool {
    value.to_lowercase() == sentinel.to_lowercase()
}

/// Format a text value for display.
///
/// The sentinel (any casing) is returned unchanged. Anything else is
/// title-cased, then every `’S` is turned back into `’s`.
///
/// # Example
/// ```
/// use zoo_transform::format_text;
///
/// assert_eq!(format_text("darwin\u{2019}s fox", "N/A"), "Darwin\u{2019}s Fox");
/// assert_eq!(format_text("n/a", "N/A"), "n/a");
/// ```
pub fn format_text(text: &str, sentinel: &str) -> String {
    if is_sentinel(text, sentinel) {
        return text.to_string();
    }
    title_case(text).replace(POSSESSIVE_TITLED, POSSESSIVE)
}

/// Format a raw JSON value for display.
///
/// Strings go through [`format_text`]. `null` counts as missing and yields the
/// sentinel. Numbers, booleans, arrays and objects are not strings, so they
/// are rendered unchanged as JSON text.
pub fn format_value(value: &Value, sentinel: &str) -> String {
    match value {
        Value::String(text) => format_text(text, sentinel),
        Value::Null => sentinel.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const NA: &str = "N/A";

    #[test]
    fn test_title_case_words() {
        assert_eq!(title_case("fox"), "Fox");
        assert_eq!(title_case("ARCTIC FOX"), "Arctic Fox");
        assert_eq!(title_case("great  horned owl"), "Great  Horned Owl");
    }

    #[test]
    fn test_title_case_uncased_breaks_words() {
        assert_eq!(title_case("red-tailed hawk"), "Red-Tailed Hawk");
        assert_eq!(title_case("1st place"), "1St Place");
        assert_eq!(title_case("darwin\u{2019}s fox"), "Darwin\u{2019}S Fox");
    }

    #[test]
    fn test_title_case_ligature_capitalizes_first_letter_only() {
        assert_eq!(title_case("\u{FB01}sh"), "Fish");
        assert_eq!(title_case("\u{FB02}amingo"), "Flamingo");
        assert_eq!(title_case("\u{FB03}"), "Ffi");
    }

    #[test]
    fn test_title_case_digraph_uses_titlecase_form() {
        assert_eq!(title_case("\u{01C6}ungla"), "\u{01C5}ungla");
        assert_eq!(title_case("\u{01C4}UNGLA"), "\u{01C5}ungla");
        assert_eq!(title_case("\u{01C9}ubljana"), "\u{01C8}ubljana");
    }

    #[test]
    fn test_title_case_titlecase_letter_is_cased() {
        assert!(is_cased('\u{01C5}'));
        assert!(is_cased('\u{1FBC}'));
        assert!(!is_cased('1'));
        // a titlecase letter continues the word it sits in
        assert_eq!(title_case("a\u{01C5}a"), "A\u{01C6}a");
        assert_eq!(title_case("\u{01C5}ungla"), "\u{01C5}ungla");
    }

    #[test]
    fn test_title_case_sharp_s() {
        assert_eq!(title_case("\u{00DF}"), "Ss");
        assert_eq!(title_case("stra\u{00DF}e"), "Stra\u{00DF}e");
        assert_eq!(title_case(&title_case("\u{00DF}a")), title_case("\u{00DF}a"));
    }

    #[test]
    fn test_title_case_empty() {
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_format_text_corrects_possessive() {
        assert_eq!(format_text("darwin\u{2019}s fox", NA), "Darwin\u{2019}s Fox");
        assert_eq!(format_text("DARWIN\u{2019}S FOX", NA), "Darwin\u{2019}s Fox");
    }

    #[test]
    fn test_format_text_leaves_ascii_apostrophe_alone() {
        assert_eq!(format_text("darwin's fox", NA), "Darwin'S Fox");
    }

    #[test]
    fn test_format_text_sentinel_passthrough() {
        assert_eq!(format_text("N/A", NA), "N/A");
        assert_eq!(format_text("n/a", NA), "n/a");
        assert_eq!(format_text("N/a", NA), "N/a");
    }

    #[test]
    fn test_format_text_custom_sentinel() {
        assert_eq!(format_text("unknown", "Unknown"), "unknown");
        assert_eq!(format_text("n/a", "Unknown"), "N/A");
    }

    #[test]
    fn test_format_text_empty() {
        assert_eq!(format_text("", NA), "");
    }

    #[test]
    fn test_format_value_non_string_unchanged() {
        assert_eq!(format_value(&json!(42), NA), "42");
        assert_eq!(format_value(&json!(true), NA), "true");
        assert_eq!(format_value(&json!(["a"]), NA), r#"["a"]"#);
    }

    #[test]
    fn test_format_value_null_is_sentinel() {
        assert_eq!(format_value(&Value::Null, NA), "N/A");
    }

    #[test]
    fn test_format_value_string() {
        assert_eq!(format_value(&json!("omnivore"), NA), "Omnivore");
    }
}
