//! RGB raster canvas saved as PNG

use super::Canvas;
use crate::error::Result;
use crate::style::Rgb;
use ::image::{Rgb as Pixel, RgbImage};
use std::path::Path;

pub struct ImageCanvas {
    image: RgbImage,
}

impl ImageCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbImage::new(width, height),
        }
    }

    #[cfg(test)]
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        let Pixel([r, g, b]) = *self.image.get_pixel(x, y);
        Rgb::new(r, g, b)
    }

    /// Write the image; the format follows the file extension.
    pub fn save(&self, path: &Path) -> Result<()> {
        self.image.save(path)?;
        Ok(())
    }
}

impl Canvas for ImageCanvas {
    fn size(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    fn clear(&mut self, color: Rgb) {
        for pixel in self.image.pixels_mut() {
            *pixel = Pixel([color.r, color.g, color.b]);
        }
    }

    fn plot(&mut self, x: i32, y: i32, color: Rgb) {
        let (w, h) = self.image.dimensions();
        if x >= 0 && y >= 0 && (x as u32) < w && (y as u32) < h {
            self.image.put_pixel(x as u32, y as u32, Pixel([color.r, color.g, color.b]));
        }
    }
}
