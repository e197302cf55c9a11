// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Pictures of the carver's intermediate state, for debugging: the
//! energy map as a greyscale image, and a seam painted over the grid.

use crate::energy::EnergyMap;
use crate::error::Result;
use crate::grid::{PixelGrid, Rgb8};
use crate::seamfinder::Seam;
use image::{GrayImage, Luma};
use num_traits::NumCast;

/// Render an energy map as greyscale, scaled so the most energetic
/// pixel is white.  A map with no energy at all is black.
pub fn energy_to_image(energy: &EnergyMap) -> GrayImage {
    let factor = energy.values().iter().copied().fold(0.0, f64::max);
    GrayImage::from_fn(energy.width(), energy.height(), |x, y| {
        if factor == 0.0 {
            return Luma([0]);
        }
        let scaled = (255.0 * energy[(x, y)] / factor).clamp(0.0, 255.0);
        Luma([NumCast::from(scaled).unwrap_or(0)])
    })
}

/// A copy of the grid with every pixel of the seam painted `color`.
pub fn paint_seam(grid: &PixelGrid, seam: &Seam, color: Rgb8) -> Result<PixelGrid> {
    seam.validate(grid.width(), grid.height())?;
    let mut painted = grid.clone();
    for (y, x) in (0u32..).zip(seam.columns()) {
        painted[(*x, y)] = color;
    }
    Ok(painted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn energy_is_scaled_to_the_brightest_pixel() {
        let energy = EnergyMap::from_fn(4, 1, |x, _| x as f64 * 10.0);
        let image = energy_to_image(&energy);
        let levels: Vec<u8> = image.pixels().map(|p| p.0[0]).collect();
        assert_eq!(levels, vec![0, 85, 170, 255]);
    }

    #[test]
    fn flat_energy_is_black() {
        let image = energy_to_image(&EnergyMap::new(3, 3));
        assert!(image.pixels().all(|p| p.0[0] == 0));
    }

    #[test]
    fn seam_is_painted_and_nothing_else() {
        let grid = PixelGrid::new(3, 3);
        let painted = paint_seam(&grid, &Seam::from(vec![0, 1, 2]), [255, 0, 0]).unwrap();
        let red: Vec<(u32, u32)> = (0..3)
            .flat_map(|y| (0..3).map(move |x| (x, y)))
            .filter(|at| painted[*at] == [255, 0, 0])
            .collect();
        assert_eq!(red, vec![(0, 0), (1, 1), (2, 2)]);
        assert!(paint_seam(&grid, &Seam::from(vec![0, 1]), [255, 0, 0]).is_err());
    }
}
