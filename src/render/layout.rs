//! Pixel-space layout: rectangles and a subplot grid

use std::ops::Range;

/// Axis-aligned rectangle in pixels, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Area {
    pub(crate) x: f64,
    pub(crate) y: f64,
    pub(crate) w: f64,
    pub(crate) h: f64,
}

impl Area {
    pub(crate) fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Area {
            x,
            y,
            w: w.max(0.0),
            h: h.max(0.0),
        }
    }

    pub(crate) fn right(&self) -> f64 {
        self.x + self.w
    }

    pub(crate) fn bottom(&self) -> f64 {
        self.y + self.h
    }

    pub(crate) fn center(&self) -> (f64, f64) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Shrink by the given pixel amounts on each side
    pub(crate) fn inset(&self, left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Area::new(
            self.x + left,
            self.y + top,
            self.w - left - right,
            self.h - top - bottom,
        )
    }

    /// Split off a band of height `h` at the top: (band, rest)
    pub(crate) fn split_top(&self, h: f64) -> (Self, Self) {
        let h = h.min(self.h);
        (
            Area::new(self.x, self.y, self.w, h),
            Area::new(self.x, self.y + h, self.w, self.h - h),
        )
    }

    /// Largest rectangle of the given aspect ratio centered inside this one
    pub(crate) fn fit(&self, width: f64, height: f64) -> Self {
        if width <= 0.0 || height <= 0.0 {
            return Area::new(self.x, self.y, 0.0, 0.0);
        }
        let scale = (self.w / width).min(self.h / height);
        let (w, h) = (width * scale, height * scale);
        Area::new(
            self.x + (self.w - w) / 2.0,
            self.y + (self.h - h) / 2.0,
            w,
            h,
        )
    }
}

/// Subplot margins as figure fractions, measured from the left and bottom
/// edges: `top` is the fraction of height below the grid's top edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Margins {
    pub(crate) left: f64,
    pub(crate) right: f64,
    pub(crate) top: f64,
    pub(crate) bottom: f64,
}

impl Margins {
    fn area(&self, width: f64, height: f64) -> Area {
        Area::new(
            self.left * width,
            (1.0 - self.top) * height,
            (self.right - self.left) * width,
            (self.top - self.bottom) * height,
        )
    }
}

/// Uniform grid of cells; spacing is a fraction of the average cell size
#[derive(Debug, Clone, Copy)]
pub(crate) struct GridSpec {
    rows: usize,
    cols: usize,
    area: Area,
    wspace: f64,
    hspace: f64,
}

impl GridSpec {
    pub(crate) fn new(
        rows: usize,
        cols: usize,
        figure: (f64, f64),
        margins: Margins,
        wspace: f64,
        hspace: f64,
    ) -> Self {
        GridSpec {
            rows: rows.max(1),
            cols: cols.max(1),
            area: margins.area(figure.0, figure.1),
            wspace,
            hspace,
        }
    }

    fn cell_size(&self) -> (f64, f64) {
        let cols = self.cols as f64;
        let rows = self.rows as f64;
        (
            self.area.w / (cols + self.wspace * (cols - 1.0)),
            self.area.h / (rows + self.hspace * (rows - 1.0)),
        )
    }

    pub(crate) fn cell(&self, row: usize, col: usize) -> Area {
        self.span(row..row + 1, col..col + 1)
    }

    /// Area covered by a block of cells, including the gaps inside it
    pub(crate) fn span(&self, rows: Range<usize>, cols: Range<usize>) -> Area {
        let (cw, ch) = self.cell_size();
        let ncols = cols.len().max(1) as f64;
        let nrows = rows.len().max(1) as f64;
        Area::new(
            self.area.x + cols.start as f64 * cw * (1.0 + self.wspace),
            self.area.y + rows.start as f64 * ch * (1.0 + self.hspace),
            ncols * cw + (ncols - 1.0) * cw * self.wspace,
            nrows * ch + (nrows - 1.0) * ch * self.hspace,
        )
    }
}
