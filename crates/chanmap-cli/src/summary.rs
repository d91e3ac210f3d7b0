use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use chanmap_core::{ExportReport, ImportReport, RowOutcome};

pub fn print_import_summary(report: &ImportReport) {
    println!("Provider: {}", report.provider_id);
    let mut table = Table::new();
    table.set_header(vec![header_cell("Item"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Tuner channels"), Cell::new(report.tuner_channels)]);
    table.add_row(vec![
        Cell::new("Provider channels"),
        Cell::new(report.provider_channels),
    ]);
    table.add_row(vec![
        Cell::new("Existing mappings"),
        Cell::new(report.existing_mappings),
    ]);
    table.add_row(vec![
        Cell::new("Tuners already mapped"),
        Cell::new(report.mapped_tuners),
    ]);
    table.add_row(vec![Cell::new("Considered"), Cell::new(report.considered)]);
    table.add_row(vec![
        Cell::new("Proposed").add_attribute(Attribute::Bold),
        Cell::new(report.proposals)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    println!("Provider channel list: {}", report.listing_path.display());
    println!("Mapping file: {}", report.mapping_path.display());
}

pub fn print_export_summary(report: &ExportReport) {
    println!("Provider: {}", report.provider_id);
    println!("Mapping file: {}", report.mapping_path.display());
    println!(
        "Applied {} of {} rows ({} failed)",
        report.applied(),
        report.rows.len(),
        report.failed()
    );
    if report.failed() == 0 {
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Line"),
        header_cell("Tuner channel"),
        header_cell("Provider channel"),
        header_cell("Error"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for row in report.failures() {
        let RowOutcome::Failed { error } = &row.outcome else {
            continue;
        };
        table.add_row(vec![
            Cell::new(row.line),
            Cell::new(&row.tuner_channel_id),
            Cell::new(&row.provider_channel_id),
            Cell::new(error.summary()).fg(Color::Red),
        ]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
