use std::path::Path;

use crate::foundation::error::{OverlayError, OverlayResult};

/// A rendered overlay image as straight-alpha RGBA8.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major, not premultiplied.
    pub data: Vec<u8>,
}

impl RasterImage {
    /// Take ownership of premultiplied RGBA8 bytes and convert them to straight alpha.
    pub fn from_premul(width: u32, height: u32, mut data: Vec<u8>) -> OverlayResult<Self> {
        let expected = (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4);
        if data.len() != expected {
            return Err(OverlayError::render(format!(
                "pixel buffer is {} bytes, expected {expected} for {width}x{height}",
                data.len()
            )));
        }
        unpremultiply_in_place(&mut data);
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// RGBA of the pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Encode as PNG at `path`, overwriting any existing file.
    pub fn save_png(&self, path: &Path) -> OverlayResult<()> {
        let img = image::RgbaImage::from_raw(self.width, self.height, self.data.clone())
            .ok_or_else(|| OverlayError::render("invalid rgba buffer size"))?;
        img.save_with_format(path, image::ImageFormat::Png)
            .map_err(|e| match e {
                image::ImageError::IoError(io) => OverlayError::io(path, io),
                other => OverlayError::render(format!(
                    "encode png '{}': {other}",
                    path.display()
                )),
            })
    }
}

fn unpremultiply_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[1] = ((px[1] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[2] = ((px[2] as u16 * 255 + a / 2) / a).min(255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
