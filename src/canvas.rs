use crate::color_utils::{BLACK, Color};
use image::{RgbaImage, imageops};
use log::info;
use std::path::Path;

/// A pixel grid that the rasterization routines draw into.
///
/// Coordinates are signed so callers can hand over unclipped points;
/// implementations must ignore writes that fall outside the grid.
pub trait RasterTarget {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn set_pixel(&mut self, x: i32, y: i32, color: Color);
}

/// Image-backed raster target. Origin is bottom-left until [`Canvas::flip_vertically`].
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Creates an opaque black canvas.
    pub fn new(width: usize, height: usize) -> Self {
        Canvas {
            image: RgbaImage::from_pixel(width as u32, height as u32, BLACK),
        }
    }

    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width() && (y as usize) < self.height()
    }

    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        if self.in_bounds(x, y) {
            Some(*self.image.get_pixel(x as u32, y as u32))
        } else {
            None
        }
    }

    /// Converts from the bottom-left origin used while drawing to the
    /// top-left origin image files expect.
    pub fn flip_vertically(&mut self) {
        imageops::flip_vertical_in_place(&mut self.image);
    }

    /// Writes the canvas to disk. The format follows the file extension.
    pub fn write_file<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let path_ref = path.as_ref();
        self.image
            .save(path_ref)
            .map_err(|e| format!("Failed to write image {:?}: {}", path_ref, e))?;
        info!(
            "Image saved to {:?} ({}x{})",
            path_ref,
            self.width(),
            self.height()
        );
        Ok(())
    }

    /// Coordinates of every pixel that differs from the background.
    pub fn painted_pixels(&self) -> Vec<(i32, i32)> {
        self.image
            .enumerate_pixels()
            .filter(|(_, _, p)| **p != BLACK)
            .map(|(x, y, _)| (x as i32, y as i32))
            .collect()
    }
}

impl RasterTarget for Canvas {
    fn width(&self) -> usize {
        self.image.width() as usize
    }

    fn height(&self) -> usize {
        self.image.height() as usize
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if self.in_bounds(x, y) {
            self.image.put_pixel(x as u32, y as u32, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color_utils::{RED, WHITE};

    #[test]
    fn out_of_range_writes_are_skipped() {
        let mut canvas = Canvas::new(4, 3);
        canvas.set_pixel(-1, 0, WHITE);
        canvas.set_pixel(4, 0, WHITE);
        canvas.set_pixel(0, 3, WHITE);
        canvas.set_pixel(i32::MAX, i32::MIN, WHITE);
        assert!(canvas.painted_pixels().is_empty());
        assert_eq!(canvas.get_pixel(4, 0), None);
    }

    #[test]
    fn flip_moves_rows() {
        let mut canvas = Canvas::new(2, 3);
        canvas.set_pixel(1, 0, RED);
        canvas.flip_vertically();
        assert_eq!(canvas.get_pixel(1, 2), Some(RED));
        assert_eq!(canvas.get_pixel(1, 0), Some(BLACK));
    }

    #[test]
    fn writes_tga_file() {
        let mut canvas = Canvas::new(8, 8);
        canvas.set_pixel(3, 3, WHITE);
        let path = std::env::temp_dir().join("rasterizer_canvas_test.tga");
        canvas.write_file(&path).unwrap();
        let reloaded = image::open(&path).unwrap().into_rgba8();
        assert_eq!(reloaded.dimensions(), (8, 8));
        assert_eq!(*reloaded.get_pixel(3, 3), WHITE);
        let _ = std::fs::remove_file(&path);
    }
}
