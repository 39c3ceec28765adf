// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding from various formats (PNG, JPEG, GIF, SVG, etc.).

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use resvg::usvg;
use std::fs;
use std::path::Path;

/// Edge length of the generated sample image.
pub const SAMPLE_IMAGE_SIZE: u32 = 512;

const SAMPLE_GRID_CELLS: u32 = 8;

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }
}

/// Load an image from the given path and return its data.
///
/// Supports common raster formats (PNG, JPEG, GIF, etc.) as well as SVG.
/// SVG files are rasterized with resvg at their intrinsic size.
///
/// # Errors
///
/// - The file cannot be read ([`Error::Io`])
/// - The raster format is invalid or unsupported ([`Error::Image`])
/// - For SVG files: parsing fails or dimensions are zero ([`Error::Svg`])
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let path = path.as_ref();
    let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("");

    let data = if extension.eq_ignore_ascii_case("svg") {
        rasterize_svg(&fs::read(path)?)?
    } else {
        let img_bytes = fs::read(path)?;
        let img = image_rs::load_from_memory(&img_bytes)?;
        let (width, height) = img.dimensions();
        ImageData::from_rgba(width, height, img.to_rgba8().into_vec())
    };

    log::info!(
        "loaded {} ({}x{})",
        path.display(),
        data.width,
        data.height
    );
    Ok(data)
}

fn rasterize_svg(svg_data: &[u8]) -> Result<ImageData> {
    let tree = usvg::Tree::from_data(svg_data, &usvg::Options::default())
        .map_err(|e| Error::Svg(e.to_string()))?;

    let pixmap_size = tree.size().to_int_size();
    let width = pixmap_size.width();
    let height = pixmap_size.height();
    if width == 0 || height == 0 {
        return Err(Error::Svg("SVG has empty dimensions".into()));
    }

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| Error::Svg("Failed to allocate SVG pixmap".into()))?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    // tiny-skia stores premultiplied alpha.
    let pixels = pixmap
        .pixels()
        .iter()
        .flat_map(|pixel| {
            let color = pixel.demultiply();
            [color.red(), color.green(), color.blue(), color.alpha()]
        })
        .collect();
    Ok(ImageData::from_rgba(width, height, pixels))
}

/// Generated picture shown when no file is given: a diagonal gradient with a
/// grid and a marker in each corner, so the zoom anchor is easy to see.
#[must_use]
pub fn sample_image() -> ImageData {
    let size = SAMPLE_IMAGE_SIZE;
    let cell = size / SAMPLE_GRID_CELLS;
    let marker = cell / 2;

    let img = image_rs::RgbaImage::from_fn(size, size, |x, y| {
        let in_corner =
            (x < marker || x >= size - marker) && (y < marker || y >= size - marker);
        if in_corner {
            return image_rs::Rgba([230, 80, 60, 255]);
        }
        if x % cell == 0 || y % cell == 0 {
            return image_rs::Rgba([255, 255, 255, 255]);
        }
        let fx = x as f32 / size as f32;
        let fy = y as f32 / size as f32;
        image_rs::Rgba([
            (40.0 + 120.0 * fx) as u8,
            (90.0 + 100.0 * fy) as u8,
            (200.0 - 80.0 * (fx + fy) / 2.0) as u8,
            255,
        ])
    });

    ImageData::from_rgba(size, size, img.into_vec())
}
