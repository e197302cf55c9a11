// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Image dimensional flipper
//!
//! Quarter-turn rotations of any two-dimensional map.  Turning the
//! image 90° makes every horizontal seam a vertical one, so the carver
//! only ever needs the vertical seam search: rotate, carve, rotate
//! back.
//!
//! Each rotation reads its source and builds a brand new map; the
//! source is never touched.  No interpolation happens, every cell
//! lands in exactly one place.

use crate::twodmap::TwoDimensionalMap;

/// Turn a map a quarter clockwise.  The cell at `(x, y)` of a map
/// `height` tall lands at `(height - 1 - y, x)`.
pub fn rotate_clockwise<P: Default + Copy>(map: &TwoDimensionalMap<P>) -> TwoDimensionalMap<P> {
    let (width, height) = map.dimensions();
    TwoDimensionalMap::from_fn(height, width, |x, y| map[(y, height - 1 - x)])
}

/// Turn a map a quarter counter-clockwise.  The cell at `(x, y)` of a
/// map `width` wide lands at `(y, width - 1 - x)`.
pub fn rotate_counterclockwise<P: Default + Copy>(
    map: &TwoDimensionalMap<P>,
) -> TwoDimensionalMap<P> {
    let (width, height) = map.dimensions();
    TwoDimensionalMap::from_fn(height, width, |x, y| map[(width - 1 - y, x)])
}
