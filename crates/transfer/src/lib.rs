//! Transfer façade crate consolidating mission planning and exposing supporting crates.

pub mod mission;

pub use facade::*;
pub use solar_impulsive as impulsive;
pub use solar_orbits as orbits;

mod facade;
