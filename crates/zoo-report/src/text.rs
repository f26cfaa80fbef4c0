//! Plain text listing of animal records.

use std::fmt::Write;

use zoo_model::AnimalRecord;

/// Render records as `Name:`/`Diet:`/`Location:`/`Type:` lines.
///
/// Each record is followed by a blank line; records keep their input order.
pub fn render_text(records: &[AnimalRecord]) -> String {
    let mut out = String::new();
    for record in records {
        // Writing to a String cannot fail.
        let _ = write!(
            out,
            "Name: {}\nDiet: {}\nLocation: {}\nType: {}\n\n",
            record.name, record.diet, record.location, record.kind
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_text_single_record() {
        let records = vec![AnimalRecord::new("Fox", "Omnivore", "Forest", "Mammal")];
        assert_eq!(
            render_text(&records),
            "Name: Fox\nDiet: Omnivore\nLocation: Forest\nType: Mammal\n\n"
        );
    }

    #[test]
    fn test_render_text_keeps_order() {
        let records = vec![
            AnimalRecord::new("Owl", "N/A", "N/A", "Bird"),
            AnimalRecord::new("Fox", "Omnivore", "Forest", "Mammal"),
        ];
        let text = render_text(&records);
        let owl = text.find("Name: Owl").unwrap();
        let fox = text.find("Name: Fox").unwrap();
        assert!(owl < fox);
        assert!(text.ends_with("Type: Mammal\n\n"));
    }

    #[test]
    fn test_render_text_empty() {
        assert_eq!(render_text(&[]), "");
    }
}
