//! Per-assignee aggregation within one project

use std::collections::HashMap;

use crate::core::types::{AssigneeKey, AssigneeSummary, Status, TaskRow};

/// Group rows by assignee and roll up completion.
///
/// Sorted by completed count descending, then by assignee ascending
/// (named assignees before the unassigned group).
pub(crate) fn aggregate(rows: &[TaskRow]) -> Vec<AssigneeSummary> {
    let mut groups: HashMap<&AssigneeKey, (u64, u64)> = HashMap::new();

    for row in rows {
        let (total, completed) = groups.entry(&row.assignee).or_default();
        *total += 1;
        if row.completed {
            *completed += 1;
        }
    }

    let mut summaries: Vec<AssigneeSummary> = groups
        .into_iter()
        .map(|(key, (total, completed))| AssigneeSummary::new(key.clone(), total, completed))
        .collect();
    summaries.sort_by(|a, b| {
        b.completed
            .cmp(&a.completed)
            .then_with(|| a.assignee.cmp(&b.assignee))
    });
    summaries
}

/// Task counts per status, largest first (ties: done before pending)
pub(crate) fn status_counts(rows: &[TaskRow]) -> Vec<(Status, u64)> {
    let done = rows.iter().filter(|r| r.status == Status::Done).count() as u64;
    let pending = rows.len() as u64 - done;

    let mut counts: Vec<(Status, u64)> = [(Status::Done, done), (Status::Pending, pending)]
        .into_iter()
        .filter(|(_, n)| *n > 0)
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}
