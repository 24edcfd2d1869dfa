//! Raster drawing surface
//!
//! A `Canvas` owns its pixel buffer. Rendering code creates one, draws into
//! it and finally calls [`Canvas::into_raster`], which consumes the surface;
//! early returns simply drop it.

use font8x8::{BASIC_FONTS, LATIN_FONTS, UnicodeFonts};
use image::{Rgb, RgbImage, imageops};
use imageproc::drawing::{
    draw_filled_circle_mut, draw_filled_rect_mut, draw_hollow_rect_mut, draw_line_segment_mut,
    draw_polygon_mut,
};
use imageproc::point::Point;
use imageproc::rect::Rect;

use super::layout::Area;
use super::palette::{BLACK, WHITE};

/// Side of a font8x8 glyph cell in font units
const GLYPH: u32 = 8;
const POINTS_PER_INCH: f64 = 72.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum VAlign {
    Top,
    Middle,
    Bottom,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct TextStyle {
    size_pt: f64,
    bold: bool,
    color: Rgb<u8>,
    h_align: HAlign,
    v_align: VAlign,
}

impl TextStyle {
    pub(crate) fn new(size_pt: f64) -> Self {
        TextStyle {
            size_pt,
            bold: false,
            color: BLACK,
            h_align: HAlign::Left,
            v_align: VAlign::Top,
        }
    }

    pub(crate) fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub(crate) fn color(mut self, color: Rgb<u8>) -> Self {
        self.color = color;
        self
    }

    pub(crate) fn align(mut self, h_align: HAlign, v_align: VAlign) -> Self {
        self.h_align = h_align;
        self.v_align = v_align;
        self
    }
}

pub(crate) struct Canvas {
    image: RgbImage,
    dpi: f64,
}

impl Canvas {
    /// White surface of the given pixel size; `dpi` converts point sizes to pixels
    pub(crate) fn new(width: u32, height: u32, dpi: f64) -> Self {
        Canvas {
            image: RgbImage::from_pixel(width.max(1), height.max(1), WHITE),
            dpi,
        }
    }

    pub(crate) fn width(&self) -> u32 {
        self.image.width()
    }

    pub(crate) fn height(&self) -> u32 {
        self.image.height()
    }

    /// Whole-surface area
    pub(crate) fn bounds(&self) -> Area {
        Area::new(0.0, 0.0, f64::from(self.width()), f64::from(self.height()))
    }

    /// Hand the pixels over, releasing the surface
    pub(crate) fn into_raster(self) -> RgbImage {
        self.image
    }

    /// Convert a size in points to pixels at this surface's resolution
    pub(crate) fn points(&self, pt: f64) -> f64 {
        pt * self.dpi / POINTS_PER_INCH
    }

    fn glyph_scale(&self, size_pt: f64) -> u32 {
        ((self.points(size_pt) / f64::from(GLYPH)).round() as u32).max(1)
    }

    /// Pixel extent of a single-line string
    pub(crate) fn text_size(&self, text: &str, style: TextStyle) -> (f64, f64) {
        let scale = self.glyph_scale(style.size_pt);
        let chars = text.chars().count() as u32;
        let mut width = chars * GLYPH * scale;
        if style.bold && chars > 0 {
            width += scale.div_ceil(2);
        }
        (f64::from(width), f64::from(GLYPH * scale))
    }

    /// Shorten `text` with a trailing ".." so it fits in `max_width` pixels
    pub(crate) fn fit_text(&self, text: &str, style: TextStyle, max_width: f64) -> String {
        if self.text_size(text, style).0 <= max_width {
            return text.to_string();
        }
        let chars: Vec<char> = text.chars().collect();
        for keep in (0..chars.len()).rev() {
            let candidate: String = chars[..keep].iter().collect::<String>() + "..";
            if self.text_size(&candidate, style).0 <= max_width {
                return candidate;
            }
        }
        String::new()
    }

    /// Draw a single line of text anchored at `(x, y)` per the style's alignment
    pub(crate) fn draw_text(&mut self, text: &str, x: f64, y: f64, style: TextStyle) {
        let (w, h) = self.text_size(text, style);
        let left = match style.h_align {
            HAlign::Left => x,
            HAlign::Center => x - w / 2.0,
            HAlign::Right => x - w,
        };
        let top = match style.v_align {
            VAlign::Top => y,
            VAlign::Middle => y - h / 2.0,
            VAlign::Bottom => y - h,
        };

        let scale = i64::from(self.glyph_scale(style.size_pt));
        let advance = i64::from(GLYPH) * scale;
        // Fake bold: every glyph pixel is widened by half a font unit.
        let stroke = if style.bold { scale + (scale + 1) / 2 } else { scale };
        let (left, top) = (left.round() as i64, top.round() as i64);

        for (i, c) in text.chars().enumerate() {
            let glyph = glyph_for(c);
            let gx = left + i as i64 * advance;
            for (row, bits) in glyph.iter().enumerate() {
                for col in 0..GLYPH {
                    if bits & (1 << col) == 0 {
                        continue;
                    }
                    let px = gx + i64::from(col) * scale;
                    let py = top + row as i64 * scale;
                    self.fill_pixels(px, py, stroke, scale, style.color);
                }
            }
        }
    }

    fn fill_pixels(&mut self, x: i64, y: i64, w: i64, h: i64, color: Rgb<u8>) {
        let (max_x, max_y) = (i64::from(self.width()), i64::from(self.height()));
        for py in y.max(0)..(y + h).min(max_y) {
            for px in x.max(0)..(x + w).min(max_x) {
                self.image.put_pixel(px as u32, py as u32, color);
            }
        }
    }

    pub(crate) fn fill_rect(&mut self, area: Area, color: Rgb<u8>) {
        if let Some(rect) = to_rect(area) {
            draw_filled_rect_mut(&mut self.image, rect, color);
        }
    }

    pub(crate) fn stroke_rect(&mut self, area: Area, color: Rgb<u8>) {
        if let Some(rect) = to_rect(area) {
            draw_hollow_rect_mut(&mut self.image, rect, color);
        }
    }

    pub(crate) fn line(&mut self, from: (f64, f64), to: (f64, f64), color: Rgb<u8>) {
        draw_line_segment_mut(
            &mut self.image,
            (from.0 as f32, from.1 as f32),
            (to.0 as f32, to.1 as f32),
            color,
        );
    }

    /// Dashed straight line with equal dash and gap lengths
    pub(crate) fn dashed_line(&mut self, from: (f64, f64), to: (f64, f64), dash: f64, color: Rgb<u8>) {
        let (dx, dy) = (to.0 - from.0, to.1 - from.1);
        let length = (dx * dx + dy * dy).sqrt();
        if length <= 0.0 || dash <= 0.0 {
            return;
        }
        let (ux, uy) = (dx / length, dy / length);
        let mut t = 0.0;
        while t < length {
            let end = (t + dash).min(length);
            self.line(
                (from.0 + ux * t, from.1 + uy * t),
                (from.0 + ux * end, from.1 + uy * end),
                color,
            );
            t += dash * 2.0;
        }
    }

    /// Filled pie sector. Angles in degrees, counter-clockwise from 3 o'clock.
    pub(crate) fn fill_sector(
        &mut self,
        center: (f64, f64),
        radius: f64,
        start_deg: f64,
        end_deg: f64,
        color: Rgb<u8>,
    ) {
        let sweep = end_deg - start_deg;
        if radius < 1.0 || sweep <= 0.0 {
            return;
        }
        if sweep >= 359.9 {
            draw_filled_circle_mut(
                &mut self.image,
                (center.0.round() as i32, center.1.round() as i32),
                radius.round() as i32,
                color,
            );
            return;
        }

        let steps = (sweep / 2.0).ceil().max(2.0) as usize;
        let mut poly = Vec::with_capacity(steps + 2);
        poly.push(Point::new(center.0.round() as i32, center.1.round() as i32));
        for i in 0..=steps {
            let angle = (start_deg + sweep * i as f64 / steps as f64).to_radians();
            let p = Point::new(
                (center.0 + radius * angle.cos()).round() as i32,
                (center.1 - radius * angle.sin()).round() as i32,
            );
            if poly.last() != Some(&p) {
                poly.push(p);
            }
        }
        // imageproc rejects polygons whose first and last points coincide.
        while poly.len() > 2 && poly.first() == poly.last() {
            poly.pop();
        }
        if poly.len() >= 3 {
            draw_polygon_mut(&mut self.image, &poly, color);
        }
    }

    /// Scale `raster` to fit `area` (aspect preserved, centered) and paint it.
    /// Returns the area actually covered.
    pub(crate) fn draw_image(&mut self, raster: &RgbImage, area: Area) -> Area {
        let placed = area.fit(f64::from(raster.width()), f64::from(raster.height()));
        let (w, h) = (placed.w.round() as u32, placed.h.round() as u32);
        if w == 0 || h == 0 {
            return placed;
        }
        let (x, y) = (placed.x.round() as i64, placed.y.round() as i64);
        if (w, h) == raster.dimensions() {
            imageops::overlay(&mut self.image, raster, x, y);
        } else {
            let scaled = imageops::resize(raster, w, h, imageops::FilterType::Triangle);
            imageops::overlay(&mut self.image, &scaled, x, y);
        }
        placed
    }
}

fn to_rect(area: Area) -> Option<Rect> {
    let (w, h) = (area.w.round(), area.h.round());
    if w < 1.0 || h < 1.0 {
        return None;
    }
    Some(Rect::at(area.x.round() as i32, area.y.round() as i32).of_size(w as u32, h as u32))
}

fn glyph_for(c: char) -> [u8; 8] {
    BASIC_FONTS
        .get(c)
        .or_else(|| LATIN_FONTS.get(c))
        .or_else(|| BASIC_FONTS.get('?'))
        .unwrap_or([0; 8])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::palette::SERIES_BLUE;

    fn count(canvas: &Canvas, color: Rgb<u8>) -> usize {
        canvas.image.pixels().filter(|p| **p == color).count()
    }

    #[test]
    fn new_canvas_is_white() {
        let c = Canvas::new(10, 5, 72.0);
        assert_eq!((c.width(), c.height()), (10, 5));
        assert_eq!(count(&c, WHITE), 50);
    }

    #[test]
    fn zero_size_is_clamped() {
        let c = Canvas::new(0, 0, 72.0);
        assert_eq!((c.width(), c.height()), (1, 1));
    }

    #[test]
    fn text_size_scales_with_points_and_dpi() {
        // 8pt at 72 dpi = 8px = scale 1
        let c = Canvas::new(10, 10, 72.0);
        assert_eq!(c.text_size("abc", TextStyle::new(8.0)), (24.0, 8.0));
        // 16pt at 72 dpi = scale 2
        assert_eq!(c.text_size("abc", TextStyle::new(16.0)), (48.0, 16.0));
        // tiny sizes never drop below one pixel per font unit
        assert_eq!(c.text_size("a", TextStyle::new(1.0)), (8.0, 8.0));
    }

    #[test]
    fn fit_text_truncates() {
        let c = Canvas::new(10, 10, 72.0);
        let style = TextStyle::new(8.0);
        assert_eq!(c.fit_text("abc", style, 100.0), "abc");
        assert_eq!(c.fit_text("abcdefgh", style, 32.0), "ab..");
        assert_eq!(c.fit_text("abcdefgh", style, 4.0), "");
    }

    #[test]
    fn draw_text_paints_pixels() {
        let mut c = Canvas::new(40, 20, 72.0);
        c.draw_text("Hi", 2.0, 2.0, TextStyle::new(8.0));
        assert!(count(&c, BLACK) > 0);
    }

    #[test]
    fn draw_text_off_canvas_is_clipped() {
        let mut c = Canvas::new(10, 10, 72.0);
        c.draw_text("Hello", -100.0, -100.0, TextStyle::new(8.0));
        assert_eq!(count(&c, BLACK), 0);
    }

    #[test]
    fn non_ascii_falls_back_gracefully() {
        let mut c = Canvas::new(40, 20, 72.0);
        c.draw_text("Não ✓", 0.0, 0.0, TextStyle::new(8.0));
        assert!(count(&c, BLACK) > 0);
    }

    #[test]
    fn fill_rect_covers_area() {
        let mut c = Canvas::new(10, 10, 72.0);
        c.fill_rect(Area::new(2.0, 2.0, 3.0, 4.0), SERIES_BLUE);
        assert_eq!(count(&c, SERIES_BLUE), 12);
        c.fill_rect(Area::new(0.0, 0.0, 0.2, 5.0), BLACK);
        assert_eq!(count(&c, BLACK), 0);
    }

    #[test]
    fn full_sector_is_a_disc() {
        let mut c = Canvas::new(41, 41, 72.0);
        c.fill_sector((20.0, 20.0), 10.0, 0.0, 360.0, SERIES_BLUE);
        assert_eq!(*c.image.get_pixel(20, 20), SERIES_BLUE);
        assert_eq!(*c.image.get_pixel(0, 0), WHITE);
    }

    #[test]
    fn quarter_sector_fills_upper_right() {
        let mut c = Canvas::new(41, 41, 72.0);
        c.fill_sector((20.0, 20.0), 15.0, 0.0, 90.0, SERIES_BLUE);
        // upper-right quadrant (y grows downward)
        assert_eq!(*c.image.get_pixel(25, 15), SERIES_BLUE);
        // lower-left stays empty
        assert_eq!(*c.image.get_pixel(15, 25), WHITE);
    }

    #[test]
    fn draw_image_fits_and_centers() {
        let mut c = Canvas::new(20, 20, 72.0);
        let src = RgbImage::from_pixel(10, 5, SERIES_BLUE);
        let placed = c.draw_image(&src, c.bounds());
        assert_eq!(placed, Area::new(0.0, 5.0, 20.0, 10.0));
        assert_eq!(*c.image.get_pixel(10, 10), SERIES_BLUE);
        assert_eq!(*c.image.get_pixel(10, 1), WHITE);
    }
}
