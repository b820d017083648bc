//! Raster surfaces the pinhole backend paints onto

pub mod braille;
pub mod raster;

pub use self::braille::BrailleCanvas;
pub use self::raster::ImageCanvas;

use crate::style::Rgb;

/// A pixel surface.
pub trait Canvas {
    /// Width and height in pixels.
    fn size(&self) -> (u32, u32);
    fn clear(&mut self, color: Rgb);
    /// Paint one pixel. Out-of-bounds coordinates are ignored.
    fn plot(&mut self, x: i32, y: i32, color: Rgb);
}

/// Bresenham line from `from` to `to`, stamped with a square brush of
/// `thickness` pixels.
///
/// The segment is clipped to the canvas (widened by the brush) before it is
/// rasterized, so far off-canvas endpoints cost nothing.
pub fn line<C: Canvas + ?Sized>(canvas: &mut C, from: (f64, f64), to: (f64, f64), thickness: u32, color: Rgb) {
    let (w, h) = canvas.size();
    if w == 0 || h == 0 {
        return;
    }
    let thickness = thickness.min(w.max(h));
    let pad = thickness as f64;
    let bounds = (-pad, -pad, w as f64 - 1.0 + pad, h as f64 - 1.0 + pad);
    let Some((a, b)) = clip(from, to, bounds) else {
        return;
    };

    let (x0, y0) = (a.0.round() as i32, a.1.round() as i32);
    let (x1, y1) = (b.0.round() as i32, b.1.round() as i32);
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x0, y0);

    loop {
        stamp(canvas, x, y, thickness, color);

        if x == x1 && y == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Liang-Barsky clip of the segment `a`-`b` to `(xmin, ymin, xmax, ymax)`.
type Span = ((f64, f64), (f64, f64));

fn clip(a: (f64, f64), b: (f64, f64), (xmin, ymin, xmax, ymax): (f64, f64, f64, f64)) -> Option<Span> {
    if ![a.0, a.1, b.0, b.1].iter().all(|v| v.is_finite()) {
        return None;
    }
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
    for (p, q) in [(-dx, a.0 - xmin), (dx, xmax - a.0), (-dy, a.1 - ymin), (dy, ymax - a.1)] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            t0 = t0.max(r);
        } else {
            t1 = t1.min(r);
        }
        if t0 > t1 {
            return None;
        }
    }
    Some(((a.0 + t0 * dx, a.1 + t0 * dy), (a.0 + t1 * dx, a.1 + t1 * dy)))
}

fn stamp<C: Canvas + ?Sized>(canvas: &mut C, x: i32, y: i32, thickness: u32, color: Rgb) {
    if thickness <= 1 {
        canvas.plot(x, y, color);
        return;
    }
    let lo = -((thickness as i32 - 1) / 2);
    let hi = thickness as i32 / 2;
    for oy in lo..=hi {
        for ox in lo..=hi {
            canvas.plot(x + ox, y + oy, color);
        }
    }
}

/// Filled disc centered on `center`. A radius below one pixel still paints
/// the center pixel. Only the part on the canvas is visited.
pub fn disc<C: Canvas + ?Sized>(canvas: &mut C, center: (f64, f64), radius: f64, color: Rgb) {
    if !(center.0.is_finite() && center.1.is_finite()) {
        return;
    }
    let (w, h) = canvas.size();
    let (cx, cy) = (center.0.round(), center.1.round());
    let r = radius.max(0.0);
    let reach = r.ceil();
    let (x_lo, x_hi) = ((cx - reach).max(0.0), (cx + reach).min(w as f64 - 1.0));
    let (y_lo, y_hi) = ((cy - reach).max(0.0), (cy + reach).min(h as f64 - 1.0));
    if x_lo > x_hi || y_lo > y_hi {
        return;
    }

    for y in y_lo as i32..=y_hi as i32 {
        for x in x_lo as i32..=x_hi as i32 {
            let (ox, oy) = (x as f64 - cx, y as f64 - cy);
            if ox * ox + oy * oy <= r * r || (ox == 0.0 && oy == 0.0) {
                canvas.plot(x, y, color);
            }
        }
    }
}
