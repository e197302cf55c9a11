// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of a pixel pair
//!
//! Given two pixels, the energy between them is the squared distance
//! between their colors:
//!
//! ```text
//! |Δ|² = (Δr)² + (Δg)² + (Δb)²
//! ```

use crate::grid::Rgb8;
use num_traits::pow;
use std::iter::zip;

/// (Pixel, Pixel) -> Energy
#[inline]
pub fn energy_of_pixel_pair(p1: &Rgb8, p2: &Rgb8) -> u32 {
    zip(p1, p2)
        .map(|(c1, c2)| pow(u32::from(c1.abs_diff(*c2)), 2))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_pixels_have_no_energy() {
        assert_eq!(energy_of_pixel_pair(&[12, 200, 7], &[12, 200, 7]), 0);
    }

    #[test]
    fn channels_are_summed_and_symmetric() {
        assert_eq!(energy_of_pixel_pair(&[0, 0, 0], &[1, 2, 3]), 14);
        assert_eq!(energy_of_pixel_pair(&[1, 2, 3], &[0, 0, 0]), 14);
        assert_eq!(energy_of_pixel_pair(&[255, 255, 255], &[0, 0, 0]), 3 * 65025);
    }
}
