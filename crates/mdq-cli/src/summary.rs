use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use mdq_check::{CheckOutcome, TableProfile};
use mdq_cli::pipeline::CheckRun;

const SAMPLE_LIMIT: usize = 3;

pub fn print_summary(result: &CheckRun) {
    println!("Source: {} ({} rows)", result.source.display(), result.rows);
    if let Some(path) = &result.written_table {
        println!("Cleaned table: {}", path.display());
    }
    if let Some(path) = &result.written_report {
        println!("Report: {}", path.display());
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Check"),
        header_cell("Column"),
        header_cell("Inspected"),
        header_cell("Valid"),
        header_cell("Corrected"),
        header_cell("Failed"),
        header_cell("Examples"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 2..=5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    let mut total_inspected = 0u64;
    for outcome in &result.report {
        total_inspected += outcome.inspected;
        table.add_row(vec![
            kind_cell(outcome),
            Cell::new(&outcome.column),
            Cell::new(outcome.inspected),
            Cell::new(outcome.valid()),
            count_cell(Some(outcome.corrected), Color::Green),
            count_cell(Some(outcome.failed), Color::Red),
            example_cell(&outcome.samples(SAMPLE_LIMIT)),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} checks", result.report.len()))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_inspected).add_attribute(Attribute::Bold),
        dim_cell("-"),
        count_cell(Some(result.report.total_corrected()), Color::Green)
            .add_attribute(Attribute::Bold),
        count_cell(Some(result.report.total_failed()), Color::Red).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");
    if let Some(profile) = result.report.profile() {
        println!();
        print_profile(profile);
    }
}

pub fn print_profile(profile: &TableProfile) {
    println!("Rows: {}", profile.rows);
    if profile.missing_values.is_empty() {
        println!("Missing values: none");
    } else {
        let mut table = Table::new();
        table.set_header(vec![header_cell("Column"), header_cell("Missing")]);
        apply_table_style(&mut table);
        align_column(&mut table, 1, CellAlignment::Right);
        for missing in &profile.missing_values {
            table.add_row(vec![
                Cell::new(&missing.column),
                count_cell(Some(missing.count), Color::Yellow),
            ]);
        }
        println!("Missing values:");
        println!("{table}");
    }
    if profile.duplicate_rows.is_empty() {
        println!("Duplicate rows: none");
    } else {
        let rows: Vec<String> = profile
            .duplicate_rows
            .iter()
            .map(ToString::to_string)
            .collect();
        println!(
            "Duplicate rows ({}): {}",
            profile.duplicate_rows.len(),
            rows.join(", ")
        );
    }
    if !profile.not_validated.is_empty() {
        println!("Not validated: {}", profile.not_validated.join(", "));
    }
}

fn kind_cell(outcome: &CheckOutcome) -> Cell {
    let cell = Cell::new(outcome.kind);
    if outcome.passed() {
        cell.fg(Color::Green)
    } else {
        cell.fg(Color::Blue).add_attribute(Attribute::Bold)
    }
}

fn count_cell(count: Option<u64>, color: Color) -> Cell {
    match count {
        Some(value) if value > 0 => Cell::new(value).fg(color).add_attribute(Attribute::Bold),
        Some(value) => dim_cell(value),
        None => dim_cell("-"),
    }
}

fn example_cell(samples: &[String]) -> Cell {
    if samples.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(samples.join(", ")).fg(Color::DarkGrey)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
    if table.column_count() >= 7 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(14)),
            ColumnConstraint::UpperBoundary(Width::Percentage(25)),
            ColumnConstraint::LowerBoundary(Width::Fixed(9)),
            ColumnConstraint::LowerBoundary(Width::Fixed(5)),
            ColumnConstraint::LowerBoundary(Width::Fixed(9)),
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
            ColumnConstraint::UpperBoundary(Width::Percentage(35)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).fg(Color::DarkGrey)
}
