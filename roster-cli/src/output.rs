//! Rendering fetched records as a text table or JSON

use anyhow::Result;
use clap::ValueEnum;
use roster_db::{Course, Project, User};
use serde::Serialize;

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// A record that can be shown as one table row
pub trait TableRow {
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}

impl TableRow for User {
    const HEADERS: &'static [&'static str] = &["ID", "NAME"];

    fn cells(&self) -> Vec<String> {
        vec![self.id.to_string(), self.name.clone()]
    }
}

impl TableRow for Course {
    const HEADERS: &'static [&'static str] = &["ID", "CREATED", "TITLE", "HASHTAGS"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.created_at.format("%Y-%m-%d %H:%M").to_string(),
            self.title.clone(),
            self.hashtags
                .iter()
                .map(|tag| format!("#{tag}"))
                .collect::<Vec<_>>()
                .join(" "),
        ]
    }
}

impl TableRow for Project {
    const HEADERS: &'static [&'static str] = &["ID", "NAME", "CONTENT"];

    fn cells(&self) -> Vec<String> {
        // keep one record per line
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.content.replace('\n', " "),
        ]
    }
}

pub fn render<T: TableRow + Serialize>(records: &[T], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(records)?),
        OutputFormat::Table => Ok(render_table(records)),
    }
}

fn render_table<T: TableRow>(records: &[T]) -> String {
    let rows: Vec<Vec<String>> = records.iter().map(TableRow::cells).collect();
    let mut widths: Vec<usize> = T::HEADERS.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let headers: Vec<String> = T::HEADERS.iter().map(|h| (*h).to_string()).collect();
    let mut out = format_line(&headers, &widths);
    for row in &rows {
        out.push('\n');
        out.push_str(&format_line(row, &widths));
    }
    out
}

fn format_line(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}
