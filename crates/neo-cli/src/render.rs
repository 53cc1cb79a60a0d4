//! Terminal rendering of the dashboard view.

use chrono::DateTime;
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use neo_core::{LoadStatus, ViewSnapshot};
use neo_model::{AggregateSet, COLUMNS, CellValue, ColumnKey, ColumnSpec, ColumnType, SortDirection};

/// How `show` writes the view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewFormat {
    #[default]
    Table,
    Json,
}

/// Writes the view to stdout, or the load failure to stderr.
pub fn print_view(view: &ViewSnapshot<'_>, format: ViewFormat) -> serde_json::Result<()> {
    if let LoadStatus::Failed(error) = view.status {
        eprintln!("error: {}", error.user_message());
        eprintln!("- {error}");
        return Ok(());
    }
    match format {
        ViewFormat::Json => println!("{}", render_json(view)?),
        ViewFormat::Table => {
            println!("{}", view.title);
            for line in summary_lines(view.aggregates) {
                println!("{line}");
            }
            println!("{}", range_line(view));
            if view.rows.is_empty() {
                println!("No close approaches in the selected range.");
            } else {
                println!("{}", rows_table(view));
            }
        }
    }
    Ok(())
}

pub fn render_json(view: &ViewSnapshot<'_>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(view)
}

/// One `name: value` line per aggregate.
pub fn summary_lines(aggregates: &AggregateSet) -> Vec<String> {
    aggregates
        .entries()
        .iter()
        .map(|(label, value)| format!("{label}: {}", format_number(*value)))
        .collect()
}

/// Describes the selected window, e.g. `Range: 2 of 3 days from 2020-01-01`.
pub fn range_line(view: &ViewSnapshot<'_>) -> String {
    format!(
        "Range: {} of {} days from {}",
        view.range,
        view.range_options.len(),
        format_epoch_date(view.min_date)
    )
}

/// Builds the rows table with the active sort column marked.
pub fn rows_table(view: &ViewSnapshot<'_>) -> Table {
    let mut table = Table::new();
    table.set_header(
        view.columns
            .iter()
            .map(|spec| header_cell(&header_label(spec, view.sort_key, view.sort_direction)))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    for (index, spec) in view.columns.iter().enumerate() {
        if spec.kind == ColumnType::Float {
            align_column(&mut table, index, CellAlignment::Right);
        }
    }
    for row in view.rows {
        table.add_row(
            view.columns
                .iter()
                .map(|spec| value_cell(spec.key, &row.cell(spec.key.display_field())))
                .collect::<Vec<_>>(),
        );
    }
    table
}

/// Static column definitions as a table.
pub fn columns_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Key"),
        header_cell("Label"),
        header_cell("Sortable"),
        header_cell("Type"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    for spec in &COLUMNS {
        table.add_row(vec![
            Cell::new(spec.key.as_str())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(spec.label),
            sortable_cell(spec.sortable),
            Cell::new(type_label(spec.kind)),
        ]);
    }
    table
}

/// Formats an aggregate; `-` when there is no value.
pub fn format_number(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |number| number.to_string())
}

/// Formats epoch milliseconds as a UTC calendar date.
pub fn format_epoch_date(epoch_ms: i64) -> String {
    DateTime::from_timestamp_millis(epoch_ms)
        .map_or_else(|| epoch_ms.to_string(), |date| date.format("%Y-%m-%d").to_string())
}

fn header_label(spec: &ColumnSpec, sort_key: ColumnKey, direction: SortDirection) -> String {
    if spec.key != sort_key {
        return spec.label.to_string();
    }
    match direction {
        SortDirection::Asc => format!("{} ▲", spec.label),
        SortDirection::Desc => format!("{} ▼", spec.label),
    }
}

fn value_cell(key: ColumnKey, value: &CellValue) -> Cell {
    if value.is_missing() {
        return dim_cell("-");
    }
    match key {
        ColumnKey::Name => Cell::new(value.as_text())
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        ColumnKey::Url => dim_cell(value.as_text()),
        _ => Cell::new(value.as_text()),
    }
}

fn sortable_cell(sortable: bool) -> Cell {
    if sortable {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    }
}

fn type_label(kind: ColumnType) -> &'static str {
    match kind {
        ColumnType::String => "string",
        ColumnType::Int => "int",
        ColumnType::Float => "float",
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
        .set_content_arrangement(ContentArrangement::Dynamic);
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
    Cell::new(value).fg(Color::DarkGrey)
}
