//! Raw API tasks → flat rows

use chrono::{DateTime, NaiveDate, Utc};
use tracing::{debug, info};

use crate::consts::{DATE_FORMAT, UNNAMED_TASK};
use crate::core::types::{AssigneeKey, Status, TaskRow};
use crate::source::Task;

/// Convert tasks to rows, one per task, in input order.
/// Every field has a default, so this never fails.
pub(crate) fn normalize(tasks: &[Task]) -> Vec<TaskRow> {
    let rows: Vec<TaskRow> = tasks.iter().map(normalize_task).collect();
    info!("{} tasks found", rows.len());
    rows
}

fn normalize_task(task: &Task) -> TaskRow {
    let assignee = match task.assignee.as_ref().and_then(|a| a.name.as_ref()) {
        Some(name) => AssigneeKey::Named(name.clone()),
        None => AssigneeKey::Unassigned,
    };
    let completed = task.completed.unwrap_or(false);

    let row = TaskRow {
        name: task
            .name
            .clone()
            .unwrap_or_else(|| UNNAMED_TASK.to_string()),
        assignee,
        completed,
        status: Status::from_completed(completed),
        due_on: task.due_on.as_deref().and_then(parse_due_date),
        created_at: task.created_at.as_deref().and_then(parse_timestamp),
    };
    debug!(
        gid = task.gid.as_deref().unwrap_or("-"),
        name = %row.name,
        assignee = %row.assignee,
        status = row.status.label(),
        due_on = ?row.due_on,
        created_at = ?row.created_at,
        "task"
    );
    row
}

fn parse_due_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::types::Assignee;
    use chrono::{Datelike, Timelike};

    fn task(name: Option<&str>, assignee: Option<&str>, completed: Option<bool>) -> Task {
        Task {
            name: name.map(str::to_string),
            assignee: assignee.map(|n| Assignee {
                gid: None,
                name: Some(n.to_string()),
            }),
            completed,
            ..Task::default()
        }
    }

    #[test]
    fn missing_fields_get_defaults() {
        let rows = normalize(&[task(None, None, None), task(None, None, Some(false))]);
        for row in rows {
            assert_eq!(row.name, UNNAMED_TASK);
            assert_eq!(row.assignee, AssigneeKey::Unassigned);
            assert!(!row.completed);
            assert_eq!(row.status, Status::Pending);
            assert_eq!(row.due_on, None);
            assert_eq!(row.created_at, None);
        }
    }

    #[test]
    fn assignee_without_name_is_unassigned() {
        let t = Task {
            assignee: Some(Assignee {
                gid: Some("42".to_string()),
                name: None,
            }),
            ..Task::default()
        };
        assert_eq!(normalize(&[t])[0].assignee, AssigneeKey::Unassigned);
    }

    #[test]
    fn completed_task_is_done() {
        let rows = normalize(&[task(Some("Ship"), Some("Ana"), Some(true))]);
        assert_eq!(rows[0].name, "Ship");
        assert_eq!(rows[0].assignee, AssigneeKey::Named("Ana".to_string()));
        assert_eq!(rows[0].status, Status::Done);
    }

    #[test]
    fn preserves_order() {
        let tasks = vec![
            task(Some("a"), None, None),
            task(Some("b"), None, None),
            task(Some("c"), None, None),
        ];
        let names: Vec<String> = normalize(&tasks).into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn is_idempotent() {
        let tasks = vec![
            task(Some("a"), Some("Ana"), Some(true)),
            task(None, None, None),
        ];
        assert_eq!(normalize(&tasks), normalize(&tasks));
    }

    #[test]
    fn parses_dates() {
        let t = Task {
            due_on: Some("2025-03-01".to_string()),
            created_at: Some("2025-02-01T12:30:00.000Z".to_string()),
            ..Task::default()
        };
        let row = &normalize(&[t])[0];
        let due = row.due_on.unwrap();
        assert_eq!((due.year(), due.month(), due.day()), (2025, 3, 1));
        let created = row.created_at.unwrap();
        assert_eq!((created.hour(), created.minute()), (12, 30));
    }

    #[test]
    fn malformed_dates_become_absent() {
        let t = Task {
            due_on: Some("next tuesday".to_string()),
            created_at: Some("2025-02-01".to_string()),
            ..Task::default()
        };
        let row = &normalize(&[t])[0];
        assert_eq!(row.due_on, None);
        assert_eq!(row.created_at, None);
    }
}
