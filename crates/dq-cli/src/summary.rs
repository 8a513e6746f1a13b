//! Terminal rendering of the pipeline report.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::CleanResult;

pub fn print_summary(result: &CleanResult) {
    print_quality_table(result);
    print_actions_table(result);
    print_error_summary(result);

    if let Some(outputs) = &result.outputs {
        println!("Cleaning summary: {}", outputs.cleaning_summary.display());
        println!("Validation errors: {}", outputs.validation_errors.display());
        for path in &outputs.cleaned {
            println!("Saved: {}", path.display());
        }
    }
}

fn print_quality_table(result: &CleanResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Dataset"),
        header_cell("Raw rows"),
        header_cell("Clean rows"),
        header_cell("Removed"),
        header_cell("% Removed"),
    ]);
    apply_table_style(&mut table);
    for column in 1..=4 {
        align_column(&mut table, column, CellAlignment::Right);
    }
    for summary in &result.report.summaries {
        table.add_row(vec![
            Cell::new(summary.dataset),
            Cell::new(summary.raw_rows),
            Cell::new(summary.clean_rows),
            Cell::new(summary.removed),
            Cell::new(format!("{:.1}%", summary.pct_removed)),
        ]);
    }
    println!("{table}");
}

fn print_actions_table(result: &CleanResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Dataset"),
        header_cell("Action"),
        header_cell("Rows affected"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for entry in &result.report.cleaning_log {
        let count_cell = if entry.rows_affected > 0 {
            Cell::new(entry.rows_affected).fg(Color::Yellow)
        } else {
            Cell::new(entry.rows_affected)
        };
        table.add_row(vec![
            Cell::new(entry.dataset),
            Cell::new(entry.action),
            count_cell,
        ]);
    }
    println!("{table}");
}

fn print_error_summary(result: &CleanResult) {
    if result.report.error_summary.is_empty() {
        println!("No validation errors found.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Dataset"),
        header_cell("Issue"),
        header_cell("Count"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for entry in &result.report.error_summary {
        table.add_row(vec![
            Cell::new(entry.dataset),
            Cell::new(entry.issue),
            Cell::new(entry.count).fg(Color::Yellow),
        ]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
