//! Tolerance defaults.
//!
//! Policy
//! - Low-level predicates take their epsilon as an argument (`*_eps` methods);
//!   the shorthand methods use the constants below.
//! - Higher-level operations (triangulation, sector stitching) read a
//!   `GeomCfg` so callers can tune them in one place.

/// Squared-distance threshold for `Vec4` equality.
pub const VEC_EQ_EPS: f64 = 1e-6;
/// Determinant threshold for infinite 2D line-line intersection.
pub const LINE_DET_EPS: f64 = 1e-8;
/// General-purpose threshold (parallel tests, degenerate denominators, point-on-line).
pub const DEFAULT_EPS: f64 = 1e-6;
/// Twice-area threshold below which three projected vertices count as collinear.
pub const AREA_EPS: f64 = 1e-12;
/// Squared-distance threshold for welding sector edge endpoints.
pub const WELD_EPS: f64 = 1e-6;

/// Geometry configuration (tolerances) for the higher-level operations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// Collinearity threshold used by ear clipping.
    pub eps_area: f64,
    /// Squared-distance threshold for matching shared sector edges.
    pub eps_weld: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_area: AREA_EPS,
            eps_weld: WELD_EPS,
        }
    }
}
