// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors raised while carving.

use failure::Fail;
use std::fmt;

/// Why a grid's dimensions can't be carved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shortfall {
    /// The grid itself is already narrower or shorter than 3.
    TooSmall,
    /// Removing `requested` seams along `axis` would leave fewer than
    /// 3 pixels; only `available` can go.
    ReductionTooLarge {
        axis: &'static str,
        requested: u32,
        available: u32,
    },
}

impl fmt::Display for Shortfall {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Shortfall::TooSmall => write!(f, "both sides must be at least 3 pixels"),
            Shortfall::ReductionTooLarge {
                axis,
                requested,
                available,
            } => write!(
                f,
                "cannot remove {} pixels of {}, only {} can go before it drops below 3",
                requested, axis, available
            ),
        }
    }
}

/// Everything that can make a carve fail.  Nothing here is retried:
/// the algorithm is deterministic, so the same input fails the same
/// way every time.
#[derive(Debug, Fail)]
pub enum CarveError {
    /// The energy function samples one pixel either side of a clamped
    /// center, so both sides must be at least three pixels long, both
    /// before carving and after the last seam is gone.
    #[fail(display = "image is {}x{}: {}", width, height, shortfall)]
    InvalidDimension {
        width: u32,
        height: u32,
        shortfall: Shortfall,
    },

    #[fail(display = "seam does not fit the image: {}", reason)]
    InvalidSeam { reason: String },

    #[fail(display = "image codec error: {}", _0)]
    Codec(#[cause] image::ImageError),
}

impl From<image::ImageError> for CarveError {
    fn from(err: image::ImageError) -> Self {
        CarveError::Codec(err)
    }
}

pub type Result<T> = std::result::Result<T, CarveError>;
