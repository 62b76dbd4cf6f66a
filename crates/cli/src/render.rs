//! Terminal output for week views and the work memory

use chrono::NaiveDate;
use claimboard_core::WeekView;
use claimboard_domain::WorkMemory;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

/// Prints one week of claims as a table, one row per claim, with a dim
/// placeholder row for days without claims and a closing total row.
pub fn print_week(view: &WeekView) {
    println!("Week of {} - {}", view.week.monday(), view.week.last_day());
    println!("User: {} <{}>", view.user.name, view.user.email);
    println!("Group: {}", view.group.title);

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Day"),
        header_cell("Date"),
        header_cell("Item"),
        header_cell("Customer"),
        header_cell("Work item"),
        header_cell("Activity"),
        header_cell("Hours"),
        header_cell("Comment"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 6, CellAlignment::Right);

    for (date, entries) in view.index.days() {
        if entries.is_empty() {
            table.add_row(vec![
                Cell::new(day_name(date)),
                Cell::new(date),
                dim_cell("-"),
                dim_cell("-"),
                dim_cell("-"),
                dim_cell("-"),
                dim_cell("-"),
                dim_cell("-"),
            ]);
            continue;
        }
        for entry in entries {
            table.add_row(vec![
                Cell::new(day_name(date)),
                Cell::new(date),
                Cell::new(&entry.id),
                Cell::new(&entry.customer),
                Cell::new(&entry.work_item),
                Cell::new(entry.activity.label()),
                Cell::new(&entry.hours),
                Cell::new(&entry.comment),
            ]);
        }
    }

    table.add_row(vec![
        Cell::new("TOTAL").fg(Color::Cyan).add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
        Cell::new(format_hours(view.index.total_hours())).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);

    println!("{table}");
}

/// Prints the remembered pairs, active first, expired dimmed below them.
pub fn print_memory(memory: &WorkMemory) {
    if memory.active_map().is_empty() && memory.expired_set().is_empty() {
        println!("No remembered customer / work-item pairs yet");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Customer"),
        header_cell("Work item"),
        header_cell("State"),
    ]);
    apply_table_style(&mut table);

    for (customer, work_items) in memory.active_map() {
        for work_item in work_items {
            table.add_row(vec![
                Cell::new(customer),
                Cell::new(work_item),
                Cell::new("active").fg(Color::Green),
            ]);
        }
    }
    for pair in memory.expired_set() {
        table.add_row(vec![
            dim_cell(&pair.customer),
            dim_cell(&pair.work_item),
            dim_cell("expired"),
        ]);
    }

    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).fg(Color::Cyan).add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn day_name(date: NaiveDate) -> String {
    date.format("%a").to_string()
}

/// Formats an hour total without trailing zeros ("8", "7.5", "0.25").
fn format_hours(value: f64) -> String {
    let text = format!("{value:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}
