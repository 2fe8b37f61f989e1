//! Shared formatting helpers for console output

use std::fmt::Display;

use tabled::{Table, builder::Builder, settings::Style};

use crate::db::Project;

/// Format an optional value for display, `-` when unset
pub fn format_optional<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

/// Apply consistent table styling
pub fn apply_table_style(table: &mut Table) {
    table.with(Style::rounded());
}

/// Two-column detail view of every project field
pub fn format_project_detail(project: &Project) -> String {
    let mut builder = Builder::default();

    builder.push_record(["Project ID".to_string(), format_optional(project.id)]);
    builder.push_record(["Name".to_string(), project.name.clone()]);
    builder.push_record([
        "Estimated hours".to_string(),
        format_optional(project.estimated_hours),
    ]);
    builder.push_record([
        "Actual hours".to_string(),
        format_optional(project.actual_hours),
    ]);
    builder.push_record(["Difficulty".to_string(), format_optional(project.difficulty)]);
    builder.push_record([
        "Notes".to_string(),
        format_optional(project.notes.as_deref()),
    ]);

    let mut table = builder.build();
    apply_table_style(&mut table);
    table.to_string()
}
