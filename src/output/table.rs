use std::io::IsTerminal;

use comfy_table::{Color, Table};

use crate::core::{AssigneeSummary, ProjectTotals, completion_percentage};
use crate::output::format::{
    create_styled_table, format_count, format_percent, header_cell, right_cell, styled_cell,
};

/// Assignee summary table for one project, with a TOTAL row
pub(crate) fn build_summary_table(
    summaries: &[AssigneeSummary],
    totals: ProjectTotals,
    use_color: bool,
) -> Table {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Assignee", use_color),
        header_cell("Total", use_color),
        header_cell("Completed", use_color),
        header_cell("Pending", use_color),
        header_cell("Completion", use_color),
    ]);

    let green = if use_color { Some(Color::Green) } else { None };
    let muted = if use_color { Some(Color::DarkGrey) } else { None };

    for summary in summaries {
        let name_color = if summary.assignee.is_unassigned() {
            muted
        } else {
            None
        };
        table.add_row(vec![
            styled_cell(summary.assignee.label(), name_color, false),
            right_cell(&format_count(summary.total), None, false),
            right_cell(&format_count(summary.completed), None, false),
            right_cell(&format_count(summary.pending), None, false),
            right_cell(&format_percent(summary.percentage), green, false),
        ]);
    }

    let cyan = if use_color { Some(Color::Cyan) } else { None };
    table.add_row(vec![
        styled_cell("TOTAL", cyan, true),
        right_cell(&format_count(totals.total), cyan, true),
        right_cell(&format_count(totals.completed), cyan, true),
        right_cell(&format_count(totals.pending), cyan, true),
        right_cell(
            &format_percent(completion_percentage(totals.completed, totals.total)),
            green,
            true,
        ),
    ]);

    table
}

pub(crate) fn print_summary_table(
    project_name: &str,
    summaries: &[AssigneeSummary],
    totals: ProjectTotals,
) {
    let use_color = std::io::stdout().is_terminal();
    let table = build_summary_table(summaries, totals, use_color);

    println!("\n  {project_name}\n");
    println!("{table}");
    println!(
        "\n  {} assignees, {} tasks\n",
        format_count(summaries.len() as u64),
        format_count(totals.total)
    );
}
