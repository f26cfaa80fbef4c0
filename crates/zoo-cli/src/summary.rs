use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use zoo_cli::types::{HtmlRun, IssueKind, PersistStatus, RunIssue};

pub fn print_summary(run: &HtmlRun) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Item"), header_cell("Value")]);
    apply_table_style(&mut table);
    table.add_row(vec![
        Cell::new("Records"),
        Cell::new(run.record_count).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Template"),
        Cell::new(run.template_path.display()),
    ]);
    table.add_row(vec![
        Cell::new("Output"),
        Cell::new(run.output_path.display()),
    ]);
    table.add_row(vec![Cell::new("Status"), status_cell(&run.persist)]);
    println!("{table}");
    print_issues(&run.issues);
}

pub fn print_issues(issues: &[RunIssue]) {
    if issues.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Issue"), header_cell("Message")]);
    apply_issue_table_style(&mut table);
    for issue in issues {
        table.add_row(vec![kind_cell(issue.kind), Cell::new(&issue.message)]);
    }
    eprintln!();
    eprintln!("Issues:");
    eprintln!("{table}");
}

fn status_cell(status: &PersistStatus) -> Cell {
    match status {
        PersistStatus::Written { bytes } => Cell::new(format!("✓ written ({bytes} bytes)"))
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        PersistStatus::Skipped => dim_cell("skipped"),
        PersistStatus::Failed => Cell::new("failed")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
    }
}

fn kind_cell(kind: IssueKind) -> Cell {
    let color = match kind {
        IssueKind::WriteFailure => Color::Red,
        IssueKind::MissingSource
        | IssueKind::MalformedSource
        | IssueKind::MissingTemplate
        | IssueKind::MissingPlaceholder => Color::Yellow,
    };
    Cell::new(kind.label()).fg(color)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
