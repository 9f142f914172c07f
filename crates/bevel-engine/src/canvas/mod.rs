//! Software RGBA8 framebuffer.
//!
//! `Canvas` implements [`Surface`] entirely on the CPU: paths are scan-converted
//! at pixel centers, paints are sampled per pixel, and text is blended from
//! glyph coverage. No anti-aliasing is performed.

mod raster;

use crate::coords::{Point, Size, Vec2};
use crate::paint::{Color, Paint};
use crate::path::{FillRule, Path};
use crate::surface::Surface;
use crate::text::FontFace;

/// Straight-alpha RGBA8 pixel buffer, row-major from the top-left.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
}

impl Canvas {
    /// Creates a fully transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, pixels: vec![[0; 4]; width as usize * height as usize] }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Overwrites every pixel with `color`.
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color.to_rgba8());
    }

    /// Pixel at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: i32, y: i32) -> Option<[u8; 4]> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Raw RGBA bytes, row-major.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Composites `src` over this canvas with its top-left at `dst`.
    ///
    /// Parts of `src` falling outside this canvas are dropped.
    pub fn draw_canvas(&mut self, src: &Canvas, dst: Point) {
        for sy in 0..src.height as i32 {
            for sx in 0..src.width as i32 {
                let Some(px) = src.pixel(sx, sy) else { continue };
                let [r, g, b, a] = px;
                if a == 0 {
                    continue;
                }
                self.blend(dst.x + sx, dst.y + sy, Color::from_rgba8(r, g, b, a));
            }
        }
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Source-over blend of `src` into the pixel at `(x, y)`.
    fn blend(&mut self, x: i32, y: i32, src: Color) {
        let Some(i) = self.index(x, y) else { return };
        if src.a <= 0.0 {
            return;
        }
        let [dr, dg, db, da] = self.pixels[i];
        let dst = Color::from_rgba8(dr, dg, db, da);

        let [sr, sg, sb, sa] = src.premultiplied();
        let [pr, pg, pb, pa] = dst.premultiplied();
        let inv = 1.0 - sa;
        let out_a = sa + pa * inv;
        let out = if out_a <= 0.0 {
            Color::transparent()
        } else {
            Color::new(
                (sr + pr * inv) / out_a,
                (sg + pg * inv) / out_a,
                (sb + pb * inv) / out_a,
                out_a,
            )
        };
        self.pixels[i] = out.to_rgba8();
    }
}

impl Surface for Canvas {
    fn size(&self) -> Size {
        Size::new(self.width as i32, self.height as i32)
    }

    fn fill_path(&mut self, path: &Path, rule: FillRule, paint: &Paint) {
        if paint.is_invisible() {
            return;
        }
        let contours = path.contours();
        let size = self.size();
        raster::scan_spans(&contours, rule, size, |x0, x1, y| {
            for x in x0..x1 {
                let c = paint.sample(Vec2::new(x as f32 + 0.5, y as f32 + 0.5));
                self.blend(x, y, c);
            }
        });
    }

    fn draw_text(&mut self, text: &str, face: &dyn FontFace, origin: Vec2, line_height: f32, color: Color) {
        for (row, line) in text.split('\n').enumerate() {
            let baseline = (origin.y + row as f32 * line_height).round() as i32;
            let mut pen = origin.x;

            for ch in line.chars() {
                if let Some(glyph) = face.glyph(ch) {
                    let gx = pen.round() as i32 + glyph.left;
                    let gy = baseline + glyph.top;
                    for y in 0..glyph.height {
                        for x in 0..glyph.width {
                            let cov = glyph.coverage[y * glyph.width + x];
                            if cov == 0 {
                                continue;
                            }
                            let mask = Color::new(1.0, 1.0, 1.0, cov as f32 / 255.0);
                            self.blend(gx + x as i32, gy + y as i32, mask.scale(color));
                        }
                    }
                }
                pen += face.advance(ch);
            }
        }
    }
}
