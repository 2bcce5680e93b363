//! Impulsive transfer utilities: Hohmann ellipse geometry and position along a transfer arc.

pub mod arc;
pub mod transfers;

pub use arc::{ArcError, TransferArc, TransferLeg};
pub use transfers::HohmannGeometry;
