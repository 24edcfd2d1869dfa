//! The per-run pipeline: fetch → normalize → aggregate → render, then assemble

use std::path::PathBuf;

use tracing::info;

use crate::core::{ProjectTotals, aggregate, normalize};
use crate::error::RenderError;
use crate::output::print_summary_table;
use crate::render::{PanelSize, RenderedPanel, assemble, render_project};
use crate::source::{Project, TaskSource, fetch_projects, fetch_tasks};

#[derive(Debug, Clone)]
pub(crate) struct RunOptions {
    pub(crate) workspace_id: String,
    pub(crate) output: PathBuf,
    pub(crate) columns: usize,
    pub(crate) dashboard_dpi: f64,
    pub(crate) panel_size: PanelSize,
    pub(crate) print_tables: bool,
}

/// What a run produced
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RunReport {
    /// Captions of the panels placed on the dashboard, in order
    pub(crate) panels: Vec<String>,
    /// Whether the dashboard file was written
    pub(crate) written: bool,
}

/// Build one project's panel. `None` when the project has no tasks.
pub(crate) fn process_project(
    source: &dyn TaskSource,
    project: &Project,
    options: &RunOptions,
) -> Option<RenderedPanel> {
    let tasks = fetch_tasks(source, &project.gid);
    let rows = normalize(&tasks);
    if rows.is_empty() {
        info!("No tasks found for {}", project.name);
        return None;
    }

    let summaries = aggregate(&rows);
    if options.print_tables {
        print_summary_table(&project.name, &summaries, ProjectTotals::from_rows(&rows));
    }

    info!("Rendering panel for {}", project.name);
    render_project(&rows, &summaries, &project.name, options.panel_size)
}

/// Run every project in order and collect the panels that were produced
pub(crate) fn collect_panels(
    source: &dyn TaskSource,
    projects: &[Project],
    options: &RunOptions,
) -> Vec<RenderedPanel> {
    projects
        .iter()
        .filter_map(|project| process_project(source, project, options))
        .collect()
}

pub(crate) fn run(source: &dyn TaskSource, options: &RunOptions) -> Result<RunReport, RenderError> {
    info!("Starting productivity analysis");
    let projects = fetch_projects(source, &options.workspace_id);
    let panels = collect_panels(source, &projects, options);

    info!("Assembling consolidated dashboard from {} panels", panels.len());
    let written = assemble(
        &panels,
        options.columns,
        &options.output,
        options.dashboard_dpi,
    )?;

    Ok(RunReport {
        panels: panels.iter().map(|p| p.caption().to_string()).collect(),
        written,
    })
}
