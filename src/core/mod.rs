//! Core module - normalized task rows and per-assignee statistics

mod aggregator;
mod normalizer;
pub(crate) mod types;

pub(crate) use aggregator::{aggregate, status_counts};
pub(crate) use normalizer::normalize;
pub(crate) use types::{AssigneeSummary, ProjectTotals, TaskRow, completion_percentage};
