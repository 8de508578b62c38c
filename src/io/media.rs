// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Image loading for display.
//!
//! Object images are decoded and scaled to the object's size before they
//! are handed to egui as textures.

use image::imageops::FilterType;
use std::path::Path;

/// A decoded RGBA image ready to become a texture.
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Largest texture side decoded for display; bigger objects are drawn stretched.
pub const MAX_TEXTURE_SIDE: u32 = 8192;

/// Pixel dimensions for an object size, between 1 and `MAX_TEXTURE_SIDE` per side.
pub fn pixel_size(width: f64, height: f64) -> (u32, u32) {
    let px = |v: f64| {
        if v.is_nan() {
            1
        } else {
            v.round().clamp(1.0, MAX_TEXTURE_SIDE as f64) as u32
        }
    };
    (px(width), px(height))
}

/// Decode `path` and scale it to exactly `width` x `height` pixels.
pub fn load_scaled_image(path: &Path, width: u32, height: u32) -> image::ImageResult<LoadedImage> {
    let img = image::open(path)?;
    let scaled = img.resize_exact(width, height, FilterType::Lanczos3).to_rgba8();
    Ok(LoadedImage {
        width: scaled.width(),
        height: scaled.height(),
        pixels: scaled.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_pixel_size_rounds_and_floors_at_one() {
        assert_eq!(pixel_size(40.0, 80.4), (40, 80));
        assert_eq!(pixel_size(0.2, 10.6), (1, 11));
    }

    #[test]
    fn test_pixel_size_is_capped() {
        assert_eq!(pixel_size(1e12, f64::INFINITY), (MAX_TEXTURE_SIDE, MAX_TEXTURE_SIDE));
        assert_eq!(pixel_size(f64::NAN, 3.0), (1, 3));
    }

    #[test]
    fn test_load_scaled_image_resizes_exactly() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("src.png");
        image::RgbaImage::from_pixel(8, 4, image::Rgba([255, 0, 0, 255]))
            .save(&path)
            .unwrap();

        let loaded = load_scaled_image(&path, 40, 80).unwrap();
        assert_eq!((loaded.width, loaded.height), (40, 80));
        assert_eq!(loaded.pixels.len(), 40 * 80 * 4);
    }

    #[test]
    fn test_missing_file_is_error() {
        let temp = TempDir::new().expect("tempdir");
        assert!(load_scaled_image(&temp.path().join("nope.png"), 4, 4).is_err());
    }
}
