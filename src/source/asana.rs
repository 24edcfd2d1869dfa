use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::consts::{PAGE_SIZE, TASK_OPT_FIELDS};
use crate::error::FetchError;

use super::TaskSource;
use super::types::{Page, Project, Task};

/// Blocking client for the Asana REST API
pub(crate) struct AsanaClient {
    agent: ureq::Agent,
    base_url: String,
    token: Option<String>,
}

impl AsanaClient {
    pub(crate) fn new(base_url: &str, token: Option<String>, timeout: Duration) -> Self {
        // Status codes are classified by FetchError::from_status, not by ureq.
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();

        AsanaClient {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    fn projects_path(workspace_id: &str) -> String {
        format!("workspaces/{workspace_id}/projects")
    }

    fn tasks_path(project_id: &str) -> String {
        format!("projects/{project_id}/tasks")
    }

    fn get_page<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Page<T>, FetchError> {
        let url = format!("{}/{}", self.base_url, path);
        let limit = PAGE_SIZE.to_string();

        let mut request = self
            .agent
            .get(&url)
            .header("Accept", "application/json")
            .query("limit", &limit);
        for (key, value) in query {
            request = request.query(*key, *value);
        }
        // A missing token is not validated up front; the API rejects the call.
        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("Bearer {token}"));
        }

        let response = request
            .call()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::from_status(status.as_u16(), path));
        }

        let mut body = response.into_body();
        serde_json::from_reader(body.as_reader()).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

impl TaskSource for AsanaClient {
    fn list_projects(&self, workspace_id: &str) -> Result<Page<Project>, FetchError> {
        self.get_page(&Self::projects_path(workspace_id), &[("opt_fields", "name")])
    }

    fn list_tasks(&self, project_id: &str) -> Result<Page<Task>, FetchError> {
        self.get_page(
            &Self::tasks_path(project_id),
            &[("opt_fields", TASK_OPT_FIELDS)],
        )
    }
}
