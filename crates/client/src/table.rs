//! Terminal rendering of records.

use std::io;

use tabled::{
    builder::Builder,
    settings::{Color, Style, Theme, object::Rows},
};
use thiserror::Error;

use sealife_app::domain::records::{
    MarineRecord, time_of_day,
    view::{EmptyView, RecordFilter, RecordStats, RecordsView},
};

/// Errors that can occur while writing output.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The output stream rejected a write.
    #[error("IO error")]
    IO,
}

/// Description cells longer than this are cut short in the list table.
const DESCRIPTION_WIDTH: usize = 40;

/// Write the visible records as a table, or an explanation when there are none.
///
/// The footer counts matches against the whole collection only when `filter`
/// can exclude anything.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn write_records(
    mut out: impl io::Write,
    view: &RecordsView<'_>,
    filter: &RecordFilter,
) -> Result<(), RenderError> {
    match view.empty_reason() {
        Some(EmptyView::NoRecords) => {
            return writeln!(out, "No records yet. Add the first sighting with `sealife add`.")
                .map_err(|_err| RenderError::IO);
        }
        Some(EmptyView::NoMatches) => {
            return writeln!(out, "No records match the current search or category.")
                .map_err(|_err| RenderError::IO);
        }
        None => {}
    }

    let mut builder = Builder::default();

    builder.push_record([
        "Id", "Species", "Category", "Location", "Observed", "Observer", "Notes",
    ]);

    for record in &view.records {
        builder.push_record([
            record.id.to_string(),
            record.species.clone(),
            record.category.display_label().to_owned(),
            record.location.clone(),
            observed(record),
            record.observer_name.clone(),
            truncate(&record.description, DESCRIPTION_WIDTH),
        ]);
    }

    write_table(&mut out, builder)?;

    let footer = if filter.is_active() {
        format!("{} of {} records shown", view.records.len(), view.stats.total)
    } else {
        format!("{} records shown", view.stats.total)
    };

    writeln!(out, "{footer}").map_err(|_err| RenderError::IO)
}

/// Write every field of a single record.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn write_record(mut out: impl io::Write, record: &MarineRecord) -> Result<(), RenderError> {
    let mut builder = Builder::default();

    builder.push_record(["Field", "Value"]);
    builder.push_record(["Id".to_string(), record.id.to_string()]);
    builder.push_record(["Species".to_string(), record.species.clone()]);
    builder.push_record([
        "Category".to_string(),
        record.category.display_label().to_owned(),
    ]);
    builder.push_record(["Location".to_string(), record.location.clone()]);
    builder.push_record(["Observed".to_string(), observed(record)]);
    builder.push_record(["Observer".to_string(), record.observer_name.clone()]);
    builder.push_record(["Description".to_string(), record.description.clone()]);

    if !record.image_url.is_empty() {
        builder.push_record(["Image".to_string(), record.image_url.clone()]);
    }

    builder.push_record(["Recorded".to_string(), record.created_at.to_string()]);

    write_table(&mut out, builder)
}

/// Write collection-wide statistics.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn write_stats(mut out: impl io::Write, stats: &RecordStats) -> Result<(), RenderError> {
    let mut builder = Builder::default();

    builder.push_record(["Total Records", "Species Categories", "Observers"]);
    builder.push_record([
        stats.total.to_string(),
        stats.categories.to_string(),
        stats.observers.to_string(),
    ]);

    write_table(&mut out, builder)
}

fn write_table(out: &mut impl io::Write, builder: Builder) -> Result<(), RenderError> {
    let mut table = builder.build();
    let mut theme = Theme::from(Style::modern_rounded());

    theme.remove_horizontal_lines();

    table.with(theme);
    table.modify(Rows::first(), Color::BOLD);

    writeln!(out, "{table}").map_err(|_err| RenderError::IO)
}

fn observed(record: &MarineRecord) -> String {
    format!("{} {}", record.date, time_of_day::format(record.time))
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_owned();
    }

    let mut cut: String = value.chars().take(width.saturating_sub(1)).collect();

    cut.push('…');
    cut
}
