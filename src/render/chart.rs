//! Chart primitives drawn onto a [`Canvas`]
//!
//! Every chart takes the area of its subplot. Empty input draws a centered
//! "No data" placeholder instead of axes.

use image::Rgb;

use super::canvas::{Canvas, HAlign, TextStyle, VAlign};
use super::layout::Area;
use super::palette::{AXIS, GRID, MUTED, SERIES, SERIES_BLUE, SERIES_ORANGE, WHITE};

const TITLE_PT: f64 = 12.0;
const TICK_PT: f64 = 10.0;
const TEXT_PT: f64 = 12.0;
/// Axis range beyond the largest value, leaving room for value labels
const HEADROOM: f64 = 1.15;

pub(crate) const NO_DATA: &str = "No data";

/// A labelled count
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Bar {
    pub(crate) label: String,
    pub(crate) value: u64,
}

/// A labelled pair of counts drawn one on top of the other
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct StackedBar {
    pub(crate) label: String,
    pub(crate) base: u64,
    pub(crate) top: u64,
}

pub(crate) fn no_data(canvas: &mut Canvas, area: Area) {
    let (cx, cy) = area.center();
    let style = TextStyle::new(TEXT_PT)
        .color(MUTED)
        .align(HAlign::Center, VAlign::Middle);
    canvas.draw_text(NO_DATA, cx, cy, style);
}

/// Draw a centered title at the top of `area`; returns the space below it
fn draw_title(canvas: &mut Canvas, area: Area, title: &str) -> Area {
    let style = TextStyle::new(TITLE_PT).align(HAlign::Center, VAlign::Top);
    let (_, h) = canvas.text_size(title, style);
    let text = canvas.fit_text(title, style, area.w);
    canvas.draw_text(&text, area.x + area.w / 2.0, area.y, style);
    area.split_top(h * 1.8).1
}

/// Round tick spacing giving about five ticks up to `max`
fn tick_step(max: f64) -> u64 {
    let raw = (max / 5.0).max(1.0);
    let magnitude = 10f64.powf(raw.log10().floor());
    let norm = raw / magnitude;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    ((nice * magnitude).round() as u64).max(1)
}

/// Plot rectangle with a value axis on the left, categories along the bottom
struct VerticalAxes {
    plot: Area,
    max: f64,
}

impl VerticalAxes {
    fn draw(canvas: &mut Canvas, inner: Area, max_value: u64) -> Option<Self> {
        let tick = TextStyle::new(TICK_PT);
        let max = max_value.max(1) as f64 * HEADROOM;
        let (label_w, tick_h) = canvas.text_size(&(max.ceil() as u64).to_string(), tick);
        let pad = tick_h / 2.0;
        let plot = inner.inset(label_w + pad, 0.0, pad, tick_h + pad);
        if plot.w < 1.0 || plot.h < 1.0 {
            return None;
        }

        let axes = VerticalAxes { plot, max };
        let step = tick_step(max);
        let mut v = 0u64;
        while v as f64 <= max {
            let y = axes.y(v);
            canvas.line((plot.x - pad / 2.0, y), (plot.x, y), AXIS);
            canvas.draw_text(
                &v.to_string(),
                plot.x - pad / 2.0 - 1.0,
                y,
                tick.align(HAlign::Right, VAlign::Middle),
            );
            v += step;
        }
        canvas.stroke_rect(plot, AXIS);
        Some(axes)
    }

    fn y(&self, value: u64) -> f64 {
        self.plot.bottom() - value as f64 / self.max * self.plot.h
    }

    /// Horizontal extent of bar `i` of `n`: (left, width)
    fn slot(&self, i: usize, n: usize) -> (f64, f64) {
        let slot = self.plot.w / n.max(1) as f64;
        (self.plot.x + i as f64 * slot + slot * 0.1, slot * 0.8)
    }

    fn category_label(&self, canvas: &mut Canvas, label: &str, i: usize, n: usize) {
        let tick = TextStyle::new(TICK_PT).align(HAlign::Center, VAlign::Top);
        let (_, tick_h) = canvas.text_size("0", tick);
        let slot_w = self.plot.w / n.max(1) as f64;
        let (left, width) = self.slot(i, n);
        let text = canvas.fit_text(label, tick, slot_w);
        canvas.draw_text(
            &text,
            left + width / 2.0,
            self.plot.bottom() + tick_h / 4.0,
            tick,
        );
    }
}

/// Horizontal bars, first bar at the bottom, value printed at each bar's end
pub(crate) fn hbar_chart(
    canvas: &mut Canvas,
    area: Area,
    title: &str,
    bars: &[Bar],
    colors: &[Rgb<u8>],
) {
    if bars.is_empty() {
        no_data(canvas, area);
        return;
    }
    let inner = draw_title(canvas, area, title);
    let tick = TextStyle::new(TICK_PT);
    let (_, tick_h) = canvas.text_size("0", tick);
    let pad = tick_h / 2.0;
    let label_w = bars
        .iter()
        .map(|b| canvas.text_size(&b.label, tick).0)
        .fold(0.0, f64::max)
        .min(inner.w * 0.3);
    let plot = inner.inset(label_w + pad, 0.0, pad, tick_h + pad);
    if plot.w < 1.0 || plot.h < 1.0 {
        return;
    }

    let max = bars.iter().map(|b| b.value).max().unwrap_or(0).max(1) as f64 * HEADROOM;
    let x_of = |v: f64| plot.x + v / max * plot.w;

    let step = tick_step(max);
    let mut v = 0u64;
    while v as f64 <= max {
        let x = x_of(v as f64);
        canvas.dashed_line((x, plot.y), (x, plot.bottom()), pad, GRID);
        canvas.draw_text(
            &v.to_string(),
            x,
            plot.bottom() + pad / 2.0,
            tick.align(HAlign::Center, VAlign::Top),
        );
        v += step;
    }

    let slot = plot.h / bars.len() as f64;
    for (i, bar) in bars.iter().enumerate() {
        let top = plot.bottom() - (i as f64 + 1.0) * slot + slot * 0.1;
        let mid = top + slot * 0.4;
        let end = x_of(bar.value as f64);
        let color = colors.get(i).copied().unwrap_or(SERIES_BLUE);
        canvas.fill_rect(Area::new(plot.x, top, end - plot.x, slot * 0.8), color);

        let label = canvas.fit_text(&bar.label, tick, label_w);
        canvas.draw_text(
            &label,
            plot.x - pad / 2.0,
            mid,
            tick.align(HAlign::Right, VAlign::Middle),
        );
        canvas.draw_text(
            &bar.value.to_string(),
            end + pad / 2.0,
            mid,
            tick.align(HAlign::Left, VAlign::Middle),
        );
    }
    canvas.stroke_rect(plot, AXIS);
}

/// Vertical bars with the value printed above each bar
pub(crate) fn bar_chart(canvas: &mut Canvas, area: Area, title: &str, bars: &[Bar], color: Rgb<u8>) {
    if bars.is_empty() {
        no_data(canvas, area);
        return;
    }
    let inner = draw_title(canvas, area, title);
    let max = bars.iter().map(|b| b.value).max().unwrap_or(0);
    let Some(axes) = VerticalAxes::draw(canvas, inner, max) else {
        return;
    };

    let value_style = TextStyle::new(TICK_PT).align(HAlign::Center, VAlign::Bottom);
    let n = bars.len();
    for (i, bar) in bars.iter().enumerate() {
        let (left, width) = axes.slot(i, n);
        let top = axes.y(bar.value);
        canvas.fill_rect(
            Area::new(left, top, width, axes.plot.bottom() - top),
            color,
        );
        canvas.draw_text(&bar.value.to_string(), left + width / 2.0, top - 2.0, value_style);
        axes.category_label(canvas, &bar.label, i, n);
    }
}

/// Two-segment stacked bars with a legend naming the segments
pub(crate) fn stacked_bar_chart(
    canvas: &mut Canvas,
    area: Area,
    title: &str,
    bars: &[StackedBar],
    legend_labels: [&str; 2],
) {
    if bars.is_empty() {
        no_data(canvas, area);
        return;
    }
    let inner = draw_title(canvas, area, title);
    let max = bars.iter().map(|b| b.base + b.top).max().unwrap_or(0);
    let Some(axes) = VerticalAxes::draw(canvas, inner, max) else {
        return;
    };

    let n = bars.len();
    for (i, bar) in bars.iter().enumerate() {
        let (left, width) = axes.slot(i, n);
        let base_top = axes.y(bar.base);
        let stack_top = axes.y(bar.base + bar.top);
        canvas.fill_rect(
            Area::new(left, base_top, width, axes.plot.bottom() - base_top),
            SERIES_BLUE,
        );
        canvas.fill_rect(
            Area::new(left, stack_top, width, base_top - stack_top),
            SERIES_ORANGE,
        );
        axes.category_label(canvas, &bar.label, i, n);
    }

    legend(
        canvas,
        axes.plot,
        &[(legend_labels[0], SERIES_BLUE), (legend_labels[1], SERIES_ORANGE)],
    );
}

fn legend(canvas: &mut Canvas, plot: Area, entries: &[(&str, Rgb<u8>)]) {
    let style = TextStyle::new(TICK_PT);
    let (_, h) = canvas.text_size("M", style);
    let text_w = entries
        .iter()
        .map(|(label, _)| canvas.text_size(label, style).0)
        .fold(0.0, f64::max);
    let frame = Area::new(
        plot.right() - (text_w + h * 2.5) - h * 0.5,
        plot.y + h * 0.5,
        text_w + h * 2.5,
        entries.len() as f64 * h * 1.5 + h * 0.5,
    );
    canvas.fill_rect(frame, WHITE);
    canvas.stroke_rect(frame, GRID);
    for (i, (label, color)) in entries.iter().enumerate() {
        let y = frame.y + h * 0.5 + i as f64 * h * 1.5;
        canvas.fill_rect(Area::new(frame.x + h * 0.5, y, h, h), *color);
        canvas.draw_text(label, frame.x + h * 2.0, y, style);
    }
}

/// Pie of slice counts, counter-clockwise from 3 o'clock, with whole-number
/// percentages inside and labels outside. The title is drawn even when empty.
pub(crate) fn pie_chart(canvas: &mut Canvas, area: Area, title: &str, slices: &[Bar]) {
    let inner = draw_title(canvas, area, title);
    let total: u64 = slices.iter().map(|s| s.value).sum();
    if total == 0 {
        no_data(canvas, inner);
        return;
    }

    let tick = TextStyle::new(TICK_PT);
    let center = inner.center();
    let radius = inner.w.min(inner.h) / 2.0 * 0.75;
    let mut start = 0.0;
    for (i, slice) in slices.iter().enumerate() {
        let share = slice.value as f64 / total as f64;
        let sweep = share * 360.0;
        canvas.fill_sector(center, radius, start, start + sweep, SERIES[i % SERIES.len()]);

        let mid = (start + sweep / 2.0).to_radians();
        let (cos, sin) = (mid.cos(), mid.sin());
        canvas.draw_text(
            &format!("{:.0}%", share * 100.0),
            center.0 + radius * 0.6 * cos,
            center.1 - radius * 0.6 * sin,
            tick.align(HAlign::Center, VAlign::Middle),
        );
        let h_align = if cos >= 0.0 { HAlign::Left } else { HAlign::Right };
        canvas.draw_text(
            &slice.label,
            center.0 + radius * 1.1 * cos,
            center.1 - radius * 1.1 * sin,
            tick.align(h_align, VAlign::Middle),
        );
        start += sweep;
    }
}

/// Axis-less block of monospace lines starting near the top-left corner
pub(crate) fn text_panel(canvas: &mut Canvas, area: Area, lines: &[String]) {
    let style = TextStyle::new(TEXT_PT);
    let (_, line_h) = canvas.text_size("M", style);
    let x = area.x + area.w * 0.05;
    let mut y = area.y + area.h * 0.05;
    for line in lines {
        canvas.draw_text(line, x, y, style);
        y += line_h * 1.5;
    }
}
