//! Image buffers and file output.
//!
//! Pixels are stored as linear floating point colors in row-major order,
//! row 0 at the top. Conversion to 8-bit clamps to [0, 1], so negative
//! light contributions show up as black.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::RenderResult;
use crate::renderer::Color;

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Clamp a value to [0, 1] range.
#[inline]
pub fn clamp_01(x: f32) -> f32 {
    x.clamp(0.0, 1.0)
}

/// Convert a color to 8-bit RGBA, optionally gamma corrected.
pub fn color_to_rgba(color: Color, gamma: bool) -> [u8; 4] {
    let encode = |c: f32| {
        let c = if gamma { linear_to_gamma(c) } else { c };
        (255.0 * clamp_01(c)) as u8
    };
    [encode(color.x), encode(color.y), encode(color.z), 255]
}

/// Simple image buffer for storing render output.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.offset(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let offset = self.offset(x, y);
        self.pixels[offset] = color;
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Convert to RGBA bytes (for display or saving).
    pub fn to_rgba(&self, gamma: bool) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgba(*color, gamma));
        }
        bytes
    }

    /// Save as PNG.
    pub fn save_png<P: AsRef<Path>>(&self, path: P, gamma: bool) -> RenderResult<()> {
        image::save_buffer(
            path,
            &self.to_rgba(gamma),
            self.width,
            self.height,
            image::ColorType::Rgba8,
        )?;
        Ok(())
    }

    /// Save as plain-text PPM (P3).
    pub fn save_ppm<P: AsRef<Path>>(&self, path: P, gamma: bool) -> RenderResult<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_ppm(&mut writer, gamma)?;
        writer.flush()?;
        Ok(())
    }

    /// Write plain-text PPM (P3) to any writer.
    pub fn write_ppm<W: Write>(&self, writer: &mut W, gamma: bool) -> std::io::Result<()> {
        writeln!(writer, "P3")?;
        writeln!(writer, "{} {}", self.width, self.height)?;
        writeln!(writer, "255")?;

        for color in &self.pixels {
            let rgba = color_to_rgba(*color, gamma);
            writeln!(writer, "{} {} {}", rgba[0], rgba[1], rgba[2])?;
        }

        Ok(())
    }

    /// Save by file extension: `.ppm` writes PPM, anything else PNG.
    pub fn save<P: AsRef<Path>>(&self, path: P, gamma: bool) -> RenderResult<()> {
        let path = path.as_ref();
        let is_ppm = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("ppm"));

        log::info!("Saving {}x{} image to {}", self.width, self.height, path.display());
        if is_ppm {
            self.save_ppm(path, gamma)
        } else {
            self.save_png(path, gamma)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_to_gamma() {
        assert_eq!(linear_to_gamma(0.0), 0.0);
        assert_eq!(linear_to_gamma(-1.0), 0.0);
        assert!((linear_to_gamma(1.0) - 1.0).abs() < 0.0001);
        assert!((linear_to_gamma(0.25) - 0.5).abs() < 0.0001);
    }

    #[test]
    fn test_color_to_rgba() {
        assert_eq!(color_to_rgba(Color::new(1.0, 0.0, 0.5), false), [255, 0, 127, 255]);
        assert_eq!(color_to_rgba(Color::new(0.25, 0.0, 0.0), true), [127, 0, 0, 255]);

        // Out of range and negative contributions clamp
        assert_eq!(color_to_rgba(Color::new(4.0, -2.0, 0.0), false), [255, 0, 0, 255]);
    }

    #[test]
    fn test_image_buffer_row_major() {
        let mut image = ImageBuffer::new(3, 2);
        image.set(2, 1, Color::ONE);

        assert_eq!(image.pixels[5], Color::ONE);
        assert_eq!(image.get(2, 1), Color::ONE);
        assert_eq!(image.get(0, 0), Color::ZERO);
        assert_eq!(image.to_rgba(false).len(), 3 * 2 * 4);
    }

    #[test]
    fn test_write_ppm() {
        let mut image = ImageBuffer::new(2, 1);
        image.set(0, 0, Color::new(1.0, 0.0, 0.0));

        let mut bytes = Vec::new();
        image.write_ppm(&mut bytes, false).unwrap();

        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text, "P3\n2 1\n255\n255 0 0\n0 0 0\n");
    }

    #[test]
    fn test_save_png_roundtrip_size() {
        use image::GenericImageView;

        let path = std::env::temp_dir().join("umbra_output_test.png");
        let image = ImageBuffer::new(4, 3);

        image.save(&path, true).unwrap();
        let loaded = image::open(&path).unwrap();
        assert_eq!(loaded.dimensions(), (4, 3));

        let _ = std::fs::remove_file(&path);
    }
}
