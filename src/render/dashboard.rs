use std::path::Path;

use image::{ImageFormat, RgbImage};
use tracing::{info, warn};

use crate::error::RenderError;

use super::{MAX_SIDE_PX, RenderedPanel, capped_dpi};
use super::canvas::{Canvas, HAlign, TextStyle, VAlign};
use super::layout::{GridSpec, Margins};

/// Inches of dashboard per pixel of panel
const SIZE_SCALE: f64 = 0.02;
const MIN_WIDTH_IN: f64 = 12.0;
const MIN_HEIGHT_IN: f64 = 8.0;
const CAPTION_PT: f64 = 10.0;

const DASHBOARD_MARGINS: Margins = Margins {
    left: 0.02,
    right: 0.98,
    top: 0.94,
    bottom: 0.04,
};

/// Grid shape and physical size of the composed dashboard
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct DashboardLayout {
    pub(crate) columns: usize,
    pub(crate) rows: usize,
    pub(crate) width_in: f64,
    pub(crate) height_in: f64,
}

impl DashboardLayout {
    /// Layout for the given panels; `None` when there are none.
    /// Size follows the first panel's pixel dimensions.
    pub(crate) fn for_panels(panels: &[RenderedPanel], columns: usize) -> Option<Self> {
        let first = panels.first()?;
        let columns = columns.max(1);
        let rows = panels.len().div_ceil(columns);
        let (first_w, first_h) = first.image().dimensions();
        Some(DashboardLayout {
            columns,
            rows,
            width_in: MIN_WIDTH_IN.max(columns as f64 * f64::from(first_w) * SIZE_SCALE),
            height_in: MIN_HEIGHT_IN.max(rows as f64 * f64::from(first_h) * SIZE_SCALE),
        })
    }

    /// Pixel size at `dpi`, plus the dpi actually used after capping
    pub(crate) fn pixels(&self, dpi: f64) -> ((u32, u32), f64) {
        let dpi = capped_dpi(self.width_in, self.height_in, dpi);
        (
            (
                (self.width_in * dpi).round().max(1.0) as u32,
                (self.height_in * dpi).round().max(1.0) as u32,
            ),
            dpi,
        )
    }
}

/// Tile panels into one image: each occupied cell shows its caption in bold
/// above the panel scaled to fit; surplus cells stay blank.
pub(crate) fn compose(panels: &[RenderedPanel], columns: usize, dpi: f64) -> Option<RgbImage> {
    let layout = DashboardLayout::for_panels(panels, columns)?;
    let ((width, height), effective_dpi) = layout.pixels(dpi);
    if effective_dpi < dpi {
        warn!(
            "Dashboard would exceed {MAX_SIDE_PX} px; rendering at {effective_dpi:.0} dpi instead of {dpi:.0}"
        );
    }

    let mut canvas = Canvas::new(width, height, effective_dpi);
    let grid = GridSpec::new(
        layout.rows,
        layout.columns,
        (f64::from(width), f64::from(height)),
        DASHBOARD_MARGINS,
        0.25,
        0.35,
    );
    let caption_style = TextStyle::new(CAPTION_PT)
        .bold()
        .align(HAlign::Center, VAlign::Top);

    for (idx, panel) in panels.iter().enumerate() {
        let cell = grid.cell(idx / layout.columns, idx % layout.columns);
        let (_, caption_h) = canvas.text_size(panel.caption(), caption_style);
        let (band, body) = cell.split_top(caption_h * 1.5);
        let caption = canvas.fit_text(panel.caption(), caption_style, band.w);
        canvas.draw_text(&caption, band.x + band.w / 2.0, band.y, caption_style);
        canvas.draw_image(panel.image(), body);
    }

    Some(canvas.into_raster())
}

/// Compose and write the dashboard PNG.
///
/// Returns `Ok(false)` without touching the filesystem when there are no panels.
pub(crate) fn assemble(
    panels: &[RenderedPanel],
    columns: usize,
    output: &Path,
    dpi: f64,
) -> Result<bool, RenderError> {
    let Some(image) = compose(panels, columns, dpi) else {
        info!("No panels to assemble; dashboard not written");
        return Ok(false);
    };

    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).map_err(|source| RenderError::CreateDir {
            path: parent.display().to_string(),
            source,
        })?;
    }

    image
        .save_with_format(output, ImageFormat::Png)
        .map_err(|source| RenderError::Encode {
            path: output.display().to_string(),
            source,
        })?;

    info!(
        "Dashboard with {} panels written to {} ({}x{})",
        panels.len(),
        output.display(),
        image.width(),
        image.height()
    );
    Ok(true)
}
