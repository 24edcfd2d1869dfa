//! Task data source abstraction
//!
//! The Asana client implements `TaskSource`; the pipeline only sees the
//! trait, so tests can run the whole flow against in-memory data.

pub(crate) mod asana;
pub(crate) mod types;

use tracing::{info, warn};

use crate::consts::PAGE_SIZE;
use crate::error::FetchError;

pub(crate) use asana::AsanaClient;
pub(crate) use types::{Project, Task};

use types::Page;

/// Read-only view of a task-tracking service
pub(crate) trait TaskSource {
    /// First page of projects in a workspace
    fn list_projects(&self, workspace_id: &str) -> Result<Page<Project>, FetchError>;

    /// First page of tasks in a project, with the fixed field projection
    fn list_tasks(&self, project_id: &str) -> Result<Page<Task>, FetchError>;
}

/// Unwrap a page, downgrading failures to "no results" and flagging truncation
fn best_effort<T>(result: Result<Page<T>, FetchError>, what: &str) -> Vec<T> {
    match result {
        Ok(page) => {
            if page.has_more(PAGE_SIZE) {
                warn!(
                    "{what}: only the first {PAGE_SIZE} records were fetched; more exist and are ignored"
                );
            }
            page.data
        }
        Err(e) => {
            warn!(
                retryable = e.is_retryable(),
                "Failed to fetch {what}: {e}"
            );
            Vec::new()
        }
    }
}

/// List projects in a workspace. Never fails: errors are logged and yield an empty list.
pub(crate) fn fetch_projects(source: &dyn TaskSource, workspace_id: &str) -> Vec<Project> {
    info!("Listing projects in workspace {workspace_id}");
    let projects = best_effort(
        source.list_projects(workspace_id),
        &format!("projects of workspace {workspace_id}"),
    );
    info!("{} projects found", projects.len());
    projects
}

/// List tasks in a project. Never fails: errors are logged and yield an empty list.
pub(crate) fn fetch_tasks(source: &dyn TaskSource, project_id: &str) -> Vec<Task> {
    info!("Fetching tasks of project {project_id}");
    best_effort(
        source.list_tasks(project_id),
        &format!("tasks of project {project_id}"),
    )
}
