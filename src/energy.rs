// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! Uses the dual-gradient energy function: the square root of the
//! horizontal and vertical squared color gradients summed together.
//!
//! The edges are not handled the textbook way.  Instead of a one-sided
//! or wrapped difference at the border, the *center* of each gradient
//! is clamped one pixel in from the edge, so the pixels of column 0
//! share the horizontal gradient of column 1, and likewise for the
//! last column and for the first and last rows.  Earlier output
//! depends on this, so it stays.

use crate::error::{CarveError, Result, Shortfall};
use crate::grid::PixelGrid;
use crate::pixelpairs::energy_of_pixel_pair;
use crate::twodmap::TwoDimensionalMap;
use tracing::trace;

/// One non-negative energy per pixel; larger means more important.
pub type EnergyMap = TwoDimensionalMap<f64>;

/// The smallest side the gradient clamp can work with.
pub const MIN_SIDE: u32 = 3;

/// Compute the energy of every pixel in a grid.
pub fn calculate_energy(grid: &PixelGrid) -> Result<EnergyMap> {
    let (width, height) = grid.dimensions();
    if width < MIN_SIDE || height < MIN_SIDE {
        return Err(CarveError::InvalidDimension {
            width,
            height,
            shortfall: Shortfall::TooSmall,
        });
    }
    trace!(width, height, "computing energy map");

    let (mw, mh) = (width - 2, height - 2);
    Ok(EnergyMap::from_fn(width, height, |x, y| {
        let (cx, cy) = (x.clamp(1, mw), y.clamp(1, mh));
        let horizontal = energy_of_pixel_pair(&grid[(cx - 1, y)], &grid[(cx + 1, y)]);
        let vertical = energy_of_pixel_pair(&grid[(x, cy - 1)], &grid[(x, cy + 1)]);
        f64::from(horizontal + vertical).sqrt()
    }))
}
