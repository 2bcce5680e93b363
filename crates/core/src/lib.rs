//! Core units, constants, and shared primitives for the Solar Round Trip workspace.
//!
//! Everything downstream works in heliocentric astronomical units and Julian years, with
//! the Sun's gravitational parameter expressed as `4π² AU³/yr²` so that a body on a 1 AU
//! circular orbit completes one revolution per year.

/// Physical constants in the AU / year / degree system used across the workspace.
pub mod constants {
    use std::f64::consts::PI;

    /// Heliocentric gravitational parameter (AU³/yr²) under the `GM = 4π²` convention.
    pub const GM_SUN_AU3_YR2: f64 = 4.0 * PI * PI;
    /// Days per Julian year.
    pub const DAYS_PER_YEAR: f64 = 365.25;
    /// Degrees in a full revolution.
    pub const FULL_TURN_DEG: f64 = 360.0;
    /// Kilometres per astronomical unit.
    pub const AU_KM: f64 = 149_597_870.7;
}

/// Basic unit conversion helpers.
pub mod units {
    use super::constants::AU_KM;

    /// Convert astronomical units to kilometres.
    #[inline]
    pub fn au_to_km(v: f64) -> f64 {
        v * AU_KM
    }
}

/// Angle helpers. Phase angles are carried in degrees; trigonometry happens in radians.
pub mod angle {
    use super::constants::FULL_TURN_DEG;

    /// Wrap an angle in degrees into `[0, 360)`.
    #[inline]
    pub fn wrap_deg(deg: f64) -> f64 {
        let wrapped = deg.rem_euclid(FULL_TURN_DEG);
        // rem_euclid can round up to exactly 360.0 for tiny negative inputs
        if wrapped >= FULL_TURN_DEG { 0.0 } else { wrapped }
    }

    /// Shortest angular separation between two angles, in `[0, 180]` degrees.
    #[inline]
    pub fn separation_deg(a: f64, b: f64) -> f64 {
        let diff = wrap_deg(a - b);
        diff.min(FULL_TURN_DEG - diff)
    }
}

/// Lightweight time utilities shared across crates.
pub mod time {
    use super::constants::DAYS_PER_YEAR;

    /// Convert Julian years to days.
    #[inline]
    pub fn years_to_days(years: f64) -> f64 {
        years * DAYS_PER_YEAR
    }

    /// Convert days to Julian years.
    #[inline]
    pub fn days_to_years(days: f64) -> f64 {
        days / DAYS_PER_YEAR
    }
}

/// Minimal vector helpers to avoid ad-hoc `[f64; 3]` math everywhere.
pub mod vector {
    /// Alias for a heliocentric position in AU.
    pub type Vector3 = [f64; 3];

    /// Euclidean norm of a vector.
    #[inline]
    pub fn norm(v: &Vector3) -> f64 {
        dot(v, v).sqrt()
    }

    /// Dot product of two vectors.
    #[inline]
    pub fn dot(a: &Vector3, b: &Vector3) -> f64 {
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
    }

    /// Vector subtraction.
    #[inline]
    pub fn sub(a: &Vector3, b: &Vector3) -> Vector3 {
        [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
    }

    /// Distance between two points.
    #[inline]
    pub fn distance(a: &Vector3, b: &Vector3) -> f64 {
        norm(&sub(a, b))
    }

    /// Point on a circle of `radius` in the reference plane at `angle_rad`.
    #[inline]
    pub fn in_plane(radius: f64, angle_rad: f64) -> Vector3 {
        [radius * angle_rad.cos(), radius * angle_rad.sin(), 0.0]
    }
}
