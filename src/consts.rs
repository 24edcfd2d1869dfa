/// Standard date format for Asana `due_on` values: "2025-01-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Placeholder for tasks that come back without a name
pub(crate) const UNNAMED_TASK: &str = "(unnamed)";

/// Display label of the group holding tasks with no assignee
pub(crate) const UNASSIGNED_LABEL: &str = "Unassigned";

/// Page size for both list endpoints. Only the first page is requested.
pub(crate) const PAGE_SIZE: usize = 100;

/// Field projection requested for every task
pub(crate) const TASK_OPT_FIELDS: &str =
    "name,assignee.name,completed,assignee_status,due_on,created_at";

pub(crate) const DEFAULT_API_URL: &str = "https://app.asana.com/api/1.0";

pub(crate) const DEFAULT_OUTPUT: &str = "dashboard_all_projects.png";
