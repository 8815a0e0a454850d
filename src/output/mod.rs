//! Output formatting module
//!
//! Prints resolved projects and groups as table, CSV, JSON or YAML.

mod common;

use comfy_table::{presets::NOTHING, Table};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::gitlab::{GitlabResource, Group, Project};

pub use common::escape_csv;

/// An entity that can be printed as one table/CSV row
pub trait Row: Serialize {
    /// Column headers for table output
    fn headers() -> Vec<&'static str>;

    /// Column values, in header order
    fn cells(&self) -> Vec<String>;
}

impl Row for Project {
    fn headers() -> Vec<&'static str> {
        vec![
            "ID",
            "Name",
            "Path",
            "Full Path",
            "Web URL",
            "Namespace ID",
            "Description",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name().to_string(),
            self.path().to_string(),
            self.full_path().to_string(),
            self.web_url().to_string(),
            self.namespace_id().map(|id| id.to_string()).unwrap_or_default(),
            self.description().to_string(),
        ]
    }
}

impl Row for Group {
    fn headers() -> Vec<&'static str> {
        vec![
            "ID",
            "Name",
            "Path",
            "Full Path",
            "Parent ID",
            "Web URL",
            "Description",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name().to_string(),
            self.path().to_string(),
            self.full_path().to_string(),
            self.parent_id.map(|id| id.to_string()).unwrap_or_default(),
            self.web_url().to_string(),
            self.description().to_string(),
        ]
    }
}

/// Render rows in the requested format
pub fn render<T: Row>(rows: &[T], format: OutputFormat, no_header: bool) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(rows, no_header)),
        OutputFormat::Csv => Ok(render_csv(rows, no_header)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
        OutputFormat::Yaml => serde_yml::to_string(rows)
            .map_err(|e| crate::GitlabError::Json(format!("YAML serialization failed: {}", e))),
    }
}

fn render_table<T: Row>(rows: &[T], no_header: bool) -> String {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    if !no_header {
        table.set_header(T::headers());
    }
    for row in rows {
        table.add_row(row.cells());
    }
    table.to_string()
}

fn render_csv<T: Row>(rows: &[T], no_header: bool) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    if !no_header {
        lines.push(
            T::headers()
                .iter()
                .map(|h| h.to_lowercase().replace(' ', "_"))
                .collect::<Vec<_>>()
                .join(","),
        );
    }
    for row in rows {
        lines.push(
            row.cells()
                .iter()
                .map(|c| escape_csv(c))
                .collect::<Vec<_>>()
                .join(","),
        );
    }
    lines.join("\n")
}

/// Print projects in the specified format
pub fn output_projects(projects: &[Project], format: OutputFormat, no_header: bool) -> Result<()> {
    println!("{}", render(projects, format, no_header)?);
    if format == OutputFormat::Table && !no_header {
        println!("\nTotal: {} projects", projects.len());
    }
    Ok(())
}

/// Print a single group
pub fn output_group(group: &Group, format: OutputFormat, no_header: bool) -> Result<()> {
    output_single(group, format, no_header)
}

/// Print a single project
pub fn output_project(project: &Project, format: OutputFormat, no_header: bool) -> Result<()> {
    output_single(project, format, no_header)
}

fn output_single<T: Row>(item: &T, format: OutputFormat, no_header: bool) -> Result<()> {
    let rendered = if format.is_structured() {
        match format {
            OutputFormat::Json => serde_json::to_string_pretty(item)?,
            _ => serde_yml::to_string(item).map_err(|e| {
                crate::GitlabError::Json(format!("YAML serialization failed: {}", e))
            })?,
        }
    } else {
        render(std::slice::from_ref(item), format, no_header)?
    };
    println!("{}", rendered);
    Ok(())
}
