use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use snape_model::{Category, CategoryCounts};
use snape_state::AppSnapshot;
use snape_state::params::format_mode;
use snape_style::LegendEntry;
use snape_style::palette::category_color;

use snape_cli::tools::LinkResult;

pub fn print_category_counts(counts: &CategoryCounts) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Colour"),
        header_cell("Features"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for category in Category::ALL {
        table.add_row(vec![
            Cell::new(category.as_str()),
            Cell::new(category_color(category)),
            count_cell(counts.get(category)),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(counts.total()).add_attribute(Attribute::Bold),
    ]);
    eprintln!("{table}");
}

pub fn print_link(result: &LinkResult) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Parameter"), header_cell("Value")]);
    apply_table_style(&mut table);
    for (name, value) in snapshot_rows(&result.snapshot) {
        table.add_row(vec![Cell::new(name), Cell::new(value)]);
    }
    println!("{table}");
    println!("URL: {}", result.href);
}

pub fn print_legend(entries: &[LegendEntry<&str>]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("From"),
        header_cell("To"),
        header_cell("Colour"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);
    for entry in entries {
        table.add_row(vec![
            Cell::new(entry.from),
            Cell::new(entry.to),
            Cell::new(entry.color),
        ]);
    }
    eprintln!("{table}");
}

fn snapshot_rows(snapshot: &AppSnapshot) -> Vec<(&'static str, String)> {
    vec![
        ("mode", format_mode(&snapshot.mode)),
        ("profile", snapshot.profile.to_string()),
        ("min_score", snapshot.min_score.to_string()),
        ("max_score", snapshot.max_score.to_string()),
        ("about", snapshot.show_about.to_string()),
    ]
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).add_attribute(Attribute::Dim)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
