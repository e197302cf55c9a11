// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The pixel grid, and the only place the image codec is touched.
//!
//! Carving works on a plain row-major grid of RGB triples rather than
//! on an `ImageBuffer`, so every stage of the pipeline can build its
//! output with the same index math as the energy and cost maps.  The
//! image crate only appears at the two ends: decoding into a grid and
//! encoding a grid back out.

use crate::error::Result;
use crate::twodmap::TwoDimensionalMap;
use image::{GenericImageView, Pixel, Rgb, RgbImage};
use std::path::Path;

/// Three 8-bit channels: red, green, blue.
pub type Rgb8 = [u8; 3];

/// A rectangular buffer of RGB pixels.
pub type PixelGrid = TwoDimensionalMap<Rgb8>;

/// Copy any 8-bit image into a fresh pixel grid, dropping alpha and
/// expanding greyscale.
pub fn grid_from_image<I, P>(image: &I) -> PixelGrid
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = u8>,
{
    let (width, height) = image.dimensions();
    PixelGrid::from_fn(width, height, |x, y| image.get_pixel(x, y).to_rgb().0)
}

pub fn grid_to_image(grid: &PixelGrid) -> RgbImage {
    RgbImage::from_fn(grid.width, grid.height, |x, y| Rgb(grid[(x, y)]))
}

/// Decode an image file into a pixel grid.
pub fn load_grid<Q: AsRef<Path>>(path: Q) -> Result<PixelGrid> {
    let image = image::open(path)?.to_rgb8();
    Ok(grid_from_image(&image))
}

/// Encode a pixel grid; the format follows the path's extension.
pub fn save_grid<Q: AsRef<Path>>(grid: &PixelGrid, path: Q) -> Result<()> {
    grid_to_image(grid).save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    #[test]
    fn rgb_image_survives_the_trip() {
        let image = RgbImage::from_fn(4, 3, |x, y| Rgb([x as u8, y as u8, (x * y) as u8]));
        let grid = grid_from_image(&image);
        assert_eq!(grid.dimensions(), (4, 3));
        assert_eq!(grid[(3, 2)], [3, 2, 6]);
        assert_eq!(grid_to_image(&grid), image);
    }

    #[test]
    fn greyscale_is_expanded() {
        let image = GrayImage::from_pixel(3, 3, Luma([42]));
        let grid = grid_from_image(&image);
        assert!(grid.values().iter().all(|p| *p == [42, 42, 42]));
    }

    #[test]
    fn files_round_trip_through_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grid.png");
        let grid = PixelGrid::from_fn(5, 4, |x, y| [x as u8 * 40, y as u8 * 60, 7]);
        save_grid(&grid, &path).unwrap();
        assert_eq!(load_grid(&path).unwrap(), grid);
    }

    #[test]
    fn missing_file_is_a_codec_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_grid(dir.path().join("nope.png")).unwrap_err();
        assert!(matches!(err, crate::error::CarveError::Codec(_)));
    }
}
