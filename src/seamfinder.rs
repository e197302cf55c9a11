// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Find the cheapest vertical seam through an energy map.
//!
//! A straightforward top-to-bottom dynamic program: every cell of a
//! cost table holds the cheapest total energy of any 8-connected path
//! from the top row to that cell, plus the column of the row above
//! that path came through.  The seam is read back from the cheapest
//! cell of the bottom row by following those parent columns.
//!
//! Horizontal seams are not searched for here at all; the carver
//! rotates the image and asks for a vertical one.

use crate::cq;
use crate::energy::{calculate_energy, EnergyMap};
use crate::error::{CarveError, Result};
use crate::grid::PixelGrid;
use crate::twodmap::{CostAndParent, TwoDimensionalMap};
use tracing::debug;

/// Where, relative to a pixel, the cheapest path into it came from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Predecessor {
    Left,
    Center,
    Right,
}

/// The order predecessors are considered in.  When costs tie, the
/// earliest candidate in this order wins, which is what makes two
/// runs over the same image carve the same seams.
pub const PREDECESSOR_ORDER: [Predecessor; 3] =
    [Predecessor::Left, Predecessor::Center, Predecessor::Right];

impl Predecessor {
    /// The column in the row above for a pixel at column `x`.  Off the
    /// edge of the map, the neighbour is the edge column itself.
    pub fn column(self, x: u32, maxwidth: u32) -> u32 {
        match self {
            Predecessor::Left => cq!(x == 0, 0, x - 1),
            Predecessor::Center => x,
            Predecessor::Right => cq!(x >= maxwidth, maxwidth, x + 1),
        }
    }
}

/// Pick the predecessor for a cell, given the cumulative costs of the
/// three candidates listed in `PREDECESSOR_ORDER`: the first one whose
/// cost is no greater than the other two.
pub fn choose_predecessor(costs: [f64; 3]) -> Predecessor {
    let mut best = PREDECESSOR_ORDER[0];
    let mut best_cost = costs[0];
    for (candidate, cost) in PREDECESSOR_ORDER.iter().zip(costs.iter()).skip(1) {
        if *cost < best_cost {
            best = *candidate;
            best_cost = *cost;
        }
    }
    best
}

/// One column index per row, top to bottom.  Consecutive rows never
/// differ by more than one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seam(Vec<u32>);

impl Seam {
    pub fn columns(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The summed energy of every pixel on the seam.  Fails if the seam
    /// does not fit the map.
    pub fn cost(&self, energy: &EnergyMap) -> Result<f64> {
        self.validate(energy.width(), energy.height())?;
        Ok(self
            .0
            .iter()
            .zip(0u32..)
            .map(|(x, y)| energy[(*x, y)])
            .sum())
    }

    /// Check that the seam could have come out of a `width` x `height`
    /// map: one in-range column per row, each row within one column of
    /// the last.
    pub fn validate(&self, width: u32, height: u32) -> Result<()> {
        if self.0.len() != height as usize {
            return Err(CarveError::InvalidSeam {
                reason: format!("{} rows in the seam, {} in the image", self.0.len(), height),
            });
        }
        if let Some((y, x)) = self.0.iter().enumerate().find(|(_, x)| **x >= width) {
            return Err(CarveError::InvalidSeam {
                reason: format!("column {} in row {} is outside a width of {}", x, y, width),
            });
        }
        if let Some(y) = self
            .0
            .windows(2)
            .position(|pair| pair[0].abs_diff(pair[1]) > 1)
        {
            return Err(CarveError::InvalidSeam {
                reason: format!("rows {} and {} are not adjacent", y, y + 1),
            });
        }
        Ok(())
    }
}

impl From<Vec<u32>> for Seam {
    fn from(columns: Vec<u32>) -> Self {
        Seam(columns)
    }
}

/// Given an energy map, return the list of x-coordinates that, when
/// mapped with the range (0..height), give the XY coordinates for each
/// pixel in the seam to be removed.
pub fn energy_to_vertical_seam(energy: &EnergyMap) -> Seam {
    let (width, height) = energy.dimensions();
    if width == 0 || height == 0 {
        return Seam(Vec::new());
    }
    let mut target: TwoDimensionalMap<CostAndParent> = TwoDimensionalMap::new(width, height);

    // Populate the first row with their native energies.
    for x in 0..width {
        target[(x, 0)].cost = energy[(x, 0)];
    }

    let maxwidth = width - 1;
    // For every subsequent row, populate the target cell with the sum
    // of the *cheapest upper neighbour's cost* and the *x coordinate
    // of that neighbour*
    for y in 1..height {
        for x in 0..width {
            let costs = PREDECESSOR_ORDER.map(|p| target[(p.column(x, maxwidth), y - 1)].cost);
            let parent = choose_predecessor(costs).column(x, maxwidth);
            let cost = energy[(x, y)] + target[(parent, y - 1)].cost;
            target[(x, y)] = CostAndParent { cost, parent };
        }
    }

    // The cheapest cell of the bottom row, lowest column on a tie.
    let bottom = target.row(height - 1);
    let mut seam_col = (1..width).fold(0, |best, x| {
        cq!(bottom[x as usize].cost < bottom[best as usize].cost, x, best)
    });

    // Working backwards, generate a vec of x coordinates that map to
    // the seam, reverse and return.
    let mut columns: Vec<u32> = (0..height)
        .rev()
        .fold(Vec::with_capacity(height as usize), |mut acc, y| {
            acc.push(seam_col);
            seam_col = target[(seam_col, y)].parent;
            acc
        });
    columns.reverse();
    Seam(columns)
}

/// This trait defines how the carver asks for seams.  It's a
/// primitive interface, just enough to make room for alternative
/// energy functions.
pub trait SeamFinder {
    /// Find the next top-to-bottom seam of a grid.
    fn find_vertical_seam(&self, grid: &PixelGrid) -> Result<Seam>;
}

/// The dual-gradient energy map followed by the cheapest-path search.
#[derive(Debug, Default, Copy, Clone)]
pub struct DualGradient;

impl SeamFinder for DualGradient {
    fn find_vertical_seam(&self, grid: &PixelGrid) -> Result<Seam> {
        let energy = calculate_energy(grid)?;
        let seam = energy_to_vertical_seam(&energy);
        debug!(cost = seam.cost(&energy)?, "found vertical seam");
        Ok(seam)
    }
}
