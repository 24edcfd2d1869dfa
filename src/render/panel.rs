use tracing::{debug, info, warn};

use crate::core::{AssigneeSummary, ProjectTotals, TaskRow, status_counts};

use super::canvas::{Canvas, HAlign, TextStyle, VAlign};
use super::chart::{self, Bar, StackedBar};
use super::layout::{GridSpec, Margins};
use super::palette::{SERIES_BLUE, blues};
use super::{MAX_SIDE_PX, PanelSize, RenderedPanel};

const SUPTITLE_PT: f64 = 16.0;
const TOP_N: usize = 5;

const PANEL_MARGINS: Margins = Margins {
    left: 0.03,
    right: 0.97,
    top: 0.95,
    bottom: 0.05,
};

/// Draw the five-chart layout for one project.
///
/// Returns `None` (and draws nothing) when the project has no rows.
/// `summaries` are expected in aggregation order: completed count descending.
pub(crate) fn render_project(
    rows: &[TaskRow],
    summaries: &[AssigneeSummary],
    project_name: &str,
    size: PanelSize,
) -> Option<RenderedPanel> {
    if rows.is_empty() {
        info!("No data to render for {project_name}");
        return None;
    }

    let dpi = size.effective_dpi();
    if dpi < size.dpi {
        warn!(
            "Panel for {project_name} would exceed {MAX_SIDE_PX} px; rendering at {dpi:.0} dpi instead of {:.0}",
            size.dpi
        );
    }
    let (width, height) = size.pixels();
    let mut canvas = Canvas::new(width, height, dpi);
    let page = canvas.bounds();
    let figure = (page.w, page.h);

    let suptitle = TextStyle::new(SUPTITLE_PT)
        .bold()
        .align(HAlign::Center, VAlign::Top);
    let title = format!("PRODUCTIVITY DASHBOARD - {project_name}");
    let title = canvas.fit_text(&title, suptitle, figure.0);
    canvas.draw_text(&title, figure.0 / 2.0, figure.1 * 0.01, suptitle);

    let grid = GridSpec::new(3, 4, figure, PANEL_MARGINS, 0.3, 0.4);

    // Named assignees only, smallest completed count first
    let ascending: Vec<&AssigneeSummary> = summaries
        .iter()
        .rev()
        .filter(|s| !s.assignee.is_unassigned())
        .collect();
    let completed_bars: Vec<Bar> = ascending
        .iter()
        .map(|s| Bar {
            label: s.assignee.label().to_string(),
            value: s.completed,
        })
        .collect();

    chart::hbar_chart(
        &mut canvas,
        grid.span(0..1, 0..2),
        "Completed tasks per assignee",
        &completed_bars,
        &blues(completed_bars.len()),
    );

    let slices: Vec<Bar> = status_counts(rows)
        .into_iter()
        .map(|(status, count)| Bar {
            label: status.label().to_string(),
            value: count,
        })
        .collect();
    chart::pie_chart(&mut canvas, grid.span(0..1, 2..4), "Status distribution", &slices);

    let top = &completed_bars[completed_bars.len().saturating_sub(TOP_N)..];
    chart::bar_chart(
        &mut canvas,
        grid.span(1..2, 0..2),
        "Top 5 assignees",
        top,
        SERIES_BLUE,
    );

    let totals = ProjectTotals::from_rows(rows);
    chart::text_panel(
        &mut canvas,
        grid.span(1..2, 2..4),
        &[
            "PROJECT METRICS".to_string(),
            String::new(),
            format!("Total tasks: {}", totals.total),
            format!("Completed:   {}", totals.completed),
            format!("Pending:     {}", totals.pending),
        ],
    );

    let stacked: Vec<StackedBar> = ascending
        .iter()
        .rev()
        .map(|s| StackedBar {
            label: s.assignee.label().to_string(),
            base: s.completed,
            top: s.pending,
        })
        .collect();
    chart::stacked_bar_chart(
        &mut canvas,
        grid.span(2..3, 0..4),
        "Completed vs pending",
        &stacked,
        ["Completed", "Pending"],
    );

    debug!("Rendered {project_name} panel at {width}x{height}");
    Some(RenderedPanel::new(canvas.into_raster(), project_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::aggregate;
    use crate::core::types::{AssigneeKey, Status};
    use crate::render::palette::{SERIES_ORANGE, WHITE};

    fn row(assignee: Option<&str>, completed: bool) -> TaskRow {
        TaskRow {
            name: "t".to_string(),
            assignee: assignee.map_or(AssigneeKey::Unassigned, |n| AssigneeKey::Named(n.to_string())),
            completed,
            status: Status::from_completed(completed),
            due_on: None,
            created_at: None,
        }
    }

    fn small() -> PanelSize {
        PanelSize::with_dpi(20.0)
    }

    #[test]
    fn empty_rows_produce_no_panel() {
        assert!(render_project(&[], &[], "Empty", small()).is_none());
    }

    #[test]
    fn panel_has_requested_size_and_caption() {
        let rows = vec![row(Some("Ana"), true), row(Some("Bruno"), false), row(None, true)];
        let summaries = aggregate(&rows);
        let panel = render_project(&rows, &summaries, "Roadmap", small()).unwrap();
        assert_eq!(panel.caption(), "Roadmap");
        assert_eq!(panel.image().dimensions(), (400, 240));
        assert!(panel.image().pixels().any(|p| *p != WHITE));
        assert!(panel.image().pixels().any(|p| *p == SERIES_ORANGE));
    }

    #[test]
    fn only_unassigned_tasks_still_render() {
        let rows = vec![row(None, false), row(None, true)];
        let summaries = aggregate(&rows);
        let panel = render_project(&rows, &summaries, "Inbox", small());
        assert!(panel.is_some());
    }

    #[test]
    fn huge_dpi_renders_within_pixel_cap() {
        // a flat strip keeps the capped raster small: 16384 x 8
        let size = PanelSize {
            width_in: 20.0,
            height_in: 0.01,
            dpi: 1e7,
        };
        let rows = vec![row(Some("Ana"), true), row(None, false)];
        let summaries = aggregate(&rows);
        let panel = render_project(&rows, &summaries, "Wide", size).unwrap();
        assert_eq!(panel.image().dimensions(), (16384, 8));
    }

    #[test]
    fn many_assignees_render() {
        let rows: Vec<TaskRow> = (0..12)
            .map(|i| row(Some(&format!("Person {i}")), i % 3 == 0))
            .collect();
        let summaries = aggregate(&rows);
        assert!(render_project(&rows, &summaries, "Big", small()).is_some());
    }
}
