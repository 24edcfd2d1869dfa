//! Normalized task data and per-assignee rollups

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};

use crate::consts::UNASSIGNED_LABEL;

/// Grouping key for a task's owner.
///
/// `Unassigned` is its own variant so it can never collide with a person
/// whose display name happens to be "Unassigned". Named sorts before it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) enum AssigneeKey {
    Named(String),
    Unassigned,
}

impl AssigneeKey {
    pub(crate) fn is_unassigned(&self) -> bool {
        matches!(self, AssigneeKey::Unassigned)
    }

    pub(crate) fn label(&self) -> &str {
        match self {
            AssigneeKey::Named(name) => name,
            AssigneeKey::Unassigned => UNASSIGNED_LABEL,
        }
    }
}

impl fmt::Display for AssigneeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) enum Status {
    Done,
    Pending,
}

impl Status {
    pub(crate) fn from_completed(completed: bool) -> Self {
        if completed {
            Status::Done
        } else {
            Status::Pending
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Status::Done => "done",
            Status::Pending => "pending",
        }
    }
}

/// One task, flattened and defaulted
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TaskRow {
    pub(crate) name: String,
    pub(crate) assignee: AssigneeKey,
    pub(crate) completed: bool,
    pub(crate) status: Status,
    pub(crate) due_on: Option<NaiveDate>,
    pub(crate) created_at: Option<DateTime<Utc>>,
}

/// Completion rollup for one assignee within one project
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AssigneeSummary {
    pub(crate) assignee: AssigneeKey,
    pub(crate) total: u64,
    pub(crate) completed: u64,
    pub(crate) pending: u64,
    /// completed / total * 100, one decimal
    pub(crate) percentage: f64,
}

impl AssigneeSummary {
    pub(crate) fn new(assignee: AssigneeKey, total: u64, completed: u64) -> Self {
        AssigneeSummary {
            assignee,
            total,
            completed,
            pending: total.saturating_sub(completed),
            percentage: completion_percentage(completed, total),
        }
    }
}

/// Project-wide task counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ProjectTotals {
    pub(crate) total: u64,
    pub(crate) completed: u64,
    pub(crate) pending: u64,
}

impl ProjectTotals {
    pub(crate) fn from_rows(rows: &[TaskRow]) -> Self {
        let total = rows.len() as u64;
        let completed = rows.iter().filter(|r| r.completed).count() as u64;
        ProjectTotals {
            total,
            completed,
            pending: total - completed,
        }
    }
}

/// Round to one decimal place, ties to even (6.25 → 6.2)
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

pub(crate) fn completion_percentage(completed: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round1(completed as f64 / total as f64 * 100.0)
}
