//! Rendering: one raster panel per project, tiled into a single dashboard

mod canvas;
mod chart;
mod dashboard;
mod layout;
mod palette;
mod panel;

use image::RgbImage;

pub(crate) use dashboard::assemble;
pub(crate) use panel::render_project;

/// Longest side of any raster we allocate; larger requests get a lower dpi
pub(crate) const MAX_SIDE_PX: f64 = 16384.0;

/// `dpi` lowered as needed so a `width_in` × `height_in` figure fits within [`MAX_SIDE_PX`]
pub(crate) fn capped_dpi(width_in: f64, height_in: f64, dpi: f64) -> f64 {
    let longest = width_in.max(height_in) * dpi;
    if longest > MAX_SIDE_PX {
        dpi * MAX_SIDE_PX / longest
    } else {
        dpi
    }
}

/// Physical size of a project panel. Pixels are inches × dpi.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PanelSize {
    pub(crate) width_in: f64,
    pub(crate) height_in: f64,
    pub(crate) dpi: f64,
}

impl Default for PanelSize {
    fn default() -> Self {
        PanelSize {
            width_in: 20.0,
            height_in: 12.0,
            dpi: 100.0,
        }
    }
}

impl PanelSize {
    pub(crate) fn with_dpi(dpi: f64) -> Self {
        PanelSize {
            dpi,
            ..PanelSize::default()
        }
    }

    /// Resolution actually used, after the [`MAX_SIDE_PX`] cap
    pub(crate) fn effective_dpi(&self) -> f64 {
        capped_dpi(self.width_in, self.height_in, self.dpi)
    }

    pub(crate) fn pixels(&self) -> (u32, u32) {
        let dpi = self.effective_dpi();
        (
            (self.width_in * dpi).round().max(1.0) as u32,
            (self.height_in * dpi).round().max(1.0) as u32,
        )
    }
}

/// One project's rasterized chart composition, captioned with the project name
#[derive(Debug, Clone)]
pub(crate) struct RenderedPanel {
    image: RgbImage,
    caption: String,
}

impl RenderedPanel {
    pub(crate) fn new(image: RgbImage, caption: impl Into<String>) -> Self {
        RenderedPanel {
            image,
            caption: caption.into(),
        }
    }

    pub(crate) fn image(&self) -> &RgbImage {
        &self.image
    }

    pub(crate) fn caption(&self) -> &str {
        &self.caption
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn default_panel_is_20_by_12_inches_at_100_dpi() {
        assert_eq!(PanelSize::default().pixels(), (2000, 1200));
        assert_eq!(PanelSize::with_dpi(10.0).pixels(), (200, 120));
    }

    #[test]
    fn huge_panel_dpi_is_capped() {
        let size = PanelSize::with_dpi(1e7);
        // 20 in is the longest side: 16384 / 20 = 819.2 dpi
        assert!((size.effective_dpi() - 819.2).abs() < 1e-9);
        assert_eq!(size.pixels(), (16384, 9830));
        assert_eq!(PanelSize::default().effective_dpi(), 100.0);
    }

    #[test]
    fn capped_dpi_only_lowers() {
        assert_eq!(capped_dpi(10.0, 5.0, 100.0), 100.0);
        assert_eq!(capped_dpi(5.0, 16384.0, 2.0), 1.0);
    }
}
