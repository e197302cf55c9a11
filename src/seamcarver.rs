// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main function
//!
//! The main seamcarver routine: remove a vertical seam, repeat until
//! narrow enough, then turn the image on its side and do it again to
//! make it shorter.

use crate::cq;
use crate::energy::MIN_SIDE;
use crate::error::{CarveError, Result, Shortfall};
use crate::flipper::{rotate_clockwise, rotate_counterclockwise};
use crate::grid::PixelGrid;
use crate::seamfinder::{DualGradient, Seam, SeamFinder};
use crate::twodmap::TwoDimensionalMap;
use tracing::{debug, info};

/// Build a copy of `map` one column narrower, with the seam's cell cut
/// out of every row and everything to its right shifted left.
pub fn remove_vertical_seam<P: Default + Copy>(
    map: &TwoDimensionalMap<P>,
    seam: &Seam,
) -> Result<TwoDimensionalMap<P>> {
    let (width, height) = map.dimensions();
    if width == 0 {
        return Err(CarveError::InvalidSeam {
            reason: "the image has no columns left".to_string(),
        });
    }
    seam.validate(width, height)?;
    let columns = seam.columns();
    Ok(TwoDimensionalMap::from_fn(width - 1, height, |x, y| {
        cq!(x < columns[y as usize], map[(x, y)], map[(x + 1, y)])
    }))
}

#[derive(Debug, PartialEq, Copy, Clone)]
enum Carve {
    Width,
    Height,
}

impl Carve {
    fn axis(self) -> &'static str {
        match self {
            Carve::Width => "width",
            Carve::Height => "height",
        }
    }
}

/// Reject a reduction that would leave either side shorter than the
/// energy function can handle.  Runs before any seam is removed, so a
/// failed carve never leaves a half-carved image behind.
pub fn check_reduction(
    (width, height): (u32, u32),
    width_reduction: u32,
    height_reduction: u32,
) -> Result<()> {
    if width < MIN_SIDE || height < MIN_SIDE {
        return Err(CarveError::InvalidDimension {
            width,
            height,
            shortfall: Shortfall::TooSmall,
        });
    }
    for (direction, side, requested) in [
        (Carve::Width, width, width_reduction),
        (Carve::Height, height, height_reduction),
    ] {
        let available = side - MIN_SIDE;
        if requested > available {
            return Err(CarveError::InvalidDimension {
                width,
                height,
                shortfall: Shortfall::ReductionTooLarge {
                    axis: direction.axis(),
                    requested,
                    available,
                },
            });
        }
    }
    Ok(())
}

/// A struct for holding the image to be carved and the seam finder
/// to carve it with.
pub struct SeamCarver<'a, F: SeamFinder = DualGradient> {
    grid: &'a PixelGrid,
    finder: F,
}

impl<'a> SeamCarver<'a> {
    /// Creates a new SeamCarver with an image to be carved.
    pub fn new(grid: &'a PixelGrid) -> Self {
        Self::with_finder(grid, DualGradient)
    }
}

impl<'a, F: SeamFinder> SeamCarver<'a, F> {
    pub fn with_finder(grid: &'a PixelGrid, finder: F) -> Self {
        Self { grid, finder }
    }

    // The entire energy map and cost table are rebuilt for every
    // seam; nothing carries over between iterations.

    /// Remove `width_reduction` vertical seams, then `height_reduction`
    /// horizontal ones, returning the carved copy.
    pub fn carve(&self, width_reduction: u32, height_reduction: u32) -> Result<PixelGrid> {
        check_reduction(self.grid.dimensions(), width_reduction, height_reduction)?;
        info!(
            width = self.grid.width(),
            height = self.grid.height(),
            width_reduction,
            height_reduction,
            "carving"
        );

        let scratch = self.carve_many(self.grid.clone(), width_reduction, Carve::Width)?;
        let scratch = rotate_counterclockwise(&scratch);
        let scratch = self.carve_many(scratch, height_reduction, Carve::Height)?;
        let scratch = rotate_clockwise(&scratch);

        info!(width = scratch.width(), height = scratch.height(), "carved");
        Ok(scratch)
    }

    fn carve_many(&self, grid: PixelGrid, count: u32, direction: Carve) -> Result<PixelGrid> {
        (0..count).try_fold(grid, |scratch, iteration| {
            let seam = self.finder.find_vertical_seam(&scratch)?;
            let carved = remove_vertical_seam(&scratch, &seam)?;
            debug!(
                axis = direction.axis(),
                iteration = iteration + 1,
                remaining = carved.width(),
                "removed seam"
            );
            Ok(carved)
        })
    }
}

/// A convenience wrapper: carve a grid with the dual-gradient finder.
pub fn seamcarve(grid: &PixelGrid, width_reduction: u32, height_reduction: u32) -> Result<PixelGrid> {
    SeamCarver::new(grid).carve(width_reduction, height_reduction)
}
