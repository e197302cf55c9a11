// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware image shrinking by seam carving.
//!
//! ```no_run
//! use seamcarve::{load_grid, save_grid, seamcarve};
//!
//! let grid = load_grid("in.png")?;
//! let carved = seamcarve(&grid, 20, 10)?;
//! save_grid(&carved, "out.png")?;
//! # Ok::<(), seamcarve::CarveError>(())
//! ```

mod ternary;

pub mod dump;
pub mod energy;
pub mod error;
pub mod flipper;
pub mod grid;
pub mod pixelpairs;
pub mod seamcarver;
pub mod seamfinder;
pub mod twodmap;

pub use energy::{calculate_energy, EnergyMap};
pub use error::{CarveError, Result};
pub use grid::{load_grid, save_grid, PixelGrid};
pub use seamcarver::{seamcarve, SeamCarver};
pub use seamfinder::{energy_to_vertical_seam, Seam, SeamFinder};
