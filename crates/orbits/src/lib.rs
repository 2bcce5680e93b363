//! Orbit utility helpers: Kepler's equation and idealised circular-orbit bodies.

pub mod circular;
pub mod kepler;

pub use circular::{OrbitalBody, circular_period, synodic_period};
pub use kepler::{KeplerError, KeplerSolver};
