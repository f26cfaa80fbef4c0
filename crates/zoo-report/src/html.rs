//! HTML card rendering and template substitution.

use zoo_model::{AnimalRecord, PlaceholderMode, RenderOptions};

/// Separator between two rendered cards.
pub const CARD_SEPARATOR: &str = "\n\n";

/// Render one record as a list-item card.
///
/// Field values are embedded verbatim.
pub fn render_card(record: &AnimalRecord) -> String {
    format!(
        concat!(
            r#"<li class="cards__item">"#,
            r#"<div class="card__title">{name}</div>"#,
            r#"<p class="card__text">"#,
            "<strong>Diet:</strong> {diet}<br/>",
            "<strong>Location:</strong> {location}<br/>",
            "<strong>Type:</strong> {kind}<br/>",
            "</p>",
            "</li>"
        ),
        name = record.name,
        diet = record.diet,
        location = record.location,
        kind = record.kind,
    )
}

/// Render all records as cards joined by a blank line, in input order.
pub fn render_cards(records: &[AnimalRecord]) -> String {
    records
        .iter()
        .map(render_card)
        .collect::<Vec<_>>()
        .join(CARD_SEPARATOR)
}

/// Replace `placeholder` in `template` with `fragment`.
///
/// Returns `None` when the template does not contain the placeholder.
pub fn substitute_placeholder(
    template: &str,
    placeholder: &str,
    fragment: &str,
    mode: PlaceholderMode,
) -> Option<String> {
    if placeholder.is_empty() || !template.contains(placeholder) {
        return None;
    }
    let filled = match mode {
        PlaceholderMode::First => template.replacen(placeholder, fragment, 1),
        PlaceholderMode::All => template.replace(placeholder, fragment),
    };
    Some(filled)
}

/// Render `records` into `template`.
///
/// Returns an empty string when the placeholder is missing from the template,
/// meaning there is nothing to persist.
pub fn render_html(template: &str, records: &[AnimalRecord], options: &RenderOptions) -> String {
    let occurrences = count_occurrences(template, &options.placeholder);
    if occurrences == 0 {
        tracing::warn!(
            placeholder = %options.placeholder,
            "Template does not contain the placeholder"
        );
        return String::new();
    }
    if occurrences > 1 && options.placeholder_mode == PlaceholderMode::First {
        tracing::warn!(
            placeholder = %options.placeholder,
            occurrences,
            "Template contains the placeholder more than once, replacing the first"
        );
    }

    let cards = render_cards(records);
    tracing::debug!(cards = records.len(), bytes = cards.len(), "Rendered cards");
    substitute_placeholder(
        template,
        &options.placeholder,
        &cards,
        options.placeholder_mode,
    )
    .unwrap_or_default()
}

/// Number of non-overlapping occurrences of `placeholder` in `template`.
pub fn count_occurrences(template: &str, placeholder: &str) -> usize {
    if placeholder.is_empty() {
        return 0;
    }
    template.matches(placeholder).count()
}
