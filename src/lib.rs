//! Earth–Mars–Earth round-trip calculator.
//!
//! The physics lives in the workspace crates (Kepler solver, transfer arcs, launch-window
//! search, mission timeline); this crate re-exports them under one roof and adds the
//! calendar and reporting glue shared by the command-line front-ends.

pub mod calendar;
pub mod logging;
pub mod report;

pub use solar_config as config;
pub use solar_core::{angle, constants, time, units, vector};
pub use solar_export as export;
pub use solar_impulsive as impulsive;
pub use solar_orbits as orbits;
pub use solar_transfer as transfer;
