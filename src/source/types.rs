//! Wire types for the Asana REST API
//!
//! Only the fields this tool reads are modelled. Everything is optional or
//! defaulted so a sparse record never fails the whole page.

use serde::Deserialize;

/// A project as returned by `GET /workspaces/{gid}/projects`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub(crate) struct Project {
    #[serde(default)]
    pub(crate) gid: String,
    #[serde(default)]
    pub(crate) name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub(crate) struct Assignee {
    #[serde(default)]
    #[allow(dead_code)]
    pub(crate) gid: Option<String>,
    #[serde(default)]
    pub(crate) name: Option<String>,
}

/// A task as returned by `GET /projects/{gid}/tasks` with the fixed
/// field projection. Dates stay raw strings until normalization.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub(crate) struct Task {
    #[serde(default)]
    pub(crate) gid: Option<String>,
    #[serde(default)]
    pub(crate) name: Option<String>,
    #[serde(default)]
    pub(crate) assignee: Option<Assignee>,
    #[serde(default)]
    pub(crate) completed: Option<bool>,
    #[serde(default)]
    #[allow(dead_code)]
    pub(crate) assignee_status: Option<String>,
    #[serde(default)]
    pub(crate) due_on: Option<String>,
    #[serde(default)]
    pub(crate) created_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct NextPage {
    #[serde(default)]
    #[allow(dead_code)]
    pub(crate) offset: Option<String>,
}

/// Asana list envelope: `{"data": [...], "next_page": {...} | null}`
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Page<T> {
    #[serde(default = "Vec::new")]
    pub(crate) data: Vec<T>,
    #[serde(default)]
    pub(crate) next_page: Option<NextPage>,
}

impl<T> Page<T> {
    #[cfg(test)]
    pub(crate) fn new(data: Vec<T>) -> Self {
        Page {
            data,
            next_page: None,
        }
    }

    /// Whether more records exist past this page.
    /// A full page without a `next_page` marker is treated as truncated too.
    pub(crate) fn has_more(&self, page_size: usize) -> bool {
        self.next_page.is_some() || self.data.len() >= page_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_project_page() {
        let json = r#"{
            "data": [
                {"gid": "1201", "name": "Onboarding", "resource_type": "project"},
                {"gid": "1202", "name": "Roadmap", "resource_type": "project"}
            ],
            "next_page": null
        }"#;
        let page: Page<Project> = serde_json::from_str(json).unwrap();
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.data[0].gid, "1201");
        assert_eq!(page.data[1].name, "Roadmap");
        assert!(!page.has_more(100));
    }

    #[test]
    fn parse_task_page_with_sparse_records() {
        let json = r#"{
            "data": [
                {
                    "gid": "1",
                    "name": "Write report",
                    "assignee": {"gid": "9", "name": "Ana"},
                    "completed": true,
                    "assignee_status": "inbox",
                    "due_on": "2025-03-01",
                    "created_at": "2025-02-01T12:00:00.000Z"
                },
                {"gid": "2", "assignee": null, "completed": false},
                {"gid": "3"}
            ],
            "next_page": {"offset": "eyJ0", "path": "/projects/1/tasks?offset=eyJ0", "uri": "https://app.asana.com"}
        }"#;
        let page: Page<Task> = serde_json::from_str(json).unwrap();
        assert_eq!(page.data.len(), 3);

        let first = &page.data[0];
        assert_eq!(first.name.as_deref(), Some("Write report"));
        assert_eq!(
            first.assignee.as_ref().and_then(|a| a.name.as_deref()),
            Some("Ana")
        );
        assert_eq!(first.completed, Some(true));
        assert_eq!(first.due_on.as_deref(), Some("2025-03-01"));

        assert!(page.data[1].assignee.is_none());
        assert_eq!(page.data[2], Task {
            gid: Some("3".to_string()),
            ..Task::default()
        });

        assert!(page.has_more(100));
        assert_eq!(
            page.next_page.and_then(|n| n.offset).as_deref(),
            Some("eyJ0")
        );
    }

    #[test]
    fn missing_data_defaults_to_empty() {
        let page: Page<Project> = serde_json::from_str("{}").unwrap();
        assert!(page.data.is_empty());
        assert!(!page.has_more(100));
    }

    #[test]
    fn full_page_counts_as_truncated() {
        let page = Page::new(vec![Project::default(); 3]);
        assert!(page.has_more(3));
        assert!(!page.has_more(4));
    }
}
