//! Random star-shaped polygons (sorted angles + radial jitter + replay tokens).
//!
//! Purpose
//! - Deterministic, indexable test input for triangulation and point-in-polygon
//!   property tests and for the benchmarks.
//!
//! Model
//! - `n` angles equally spaced on [0, 2π) with bounded angular jitter, sorted,
//!   then each vertex pushed to its own jittered radius. Vertices sorted by
//!   angle always form a simple ring; with enough radial jitter it is concave.
//! - For `n ≥ 4` no angular gap reaches π, so the ring surrounds the center and
//!   runs counter-clockwise. Triangles (`n = 3`) carry no such guarantee.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Polygon, Vec4};

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Star sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct StarCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radii are `base_radius * (1 + u)` with `u ∈ [-radial_jitter, radial_jitter]`.
    /// Clamped to [0, 0.95] so every radius stays positive.
    pub radial_jitter: f64,
    pub base_radius: f64,
    /// Translation applied after sampling.
    pub center: (f64, f64),
}
impl Default for StarCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.5,
            base_radius: 1.0,
            center: (0.0, 0.0),
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a simple star-shaped polygon around `cfg.center` (CCW for `n ≥ 4`).
pub fn draw_star_polygon(cfg: StarCfg, tok: ReplayToken) -> Polygon {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.95);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = std::f64::consts::TAU / n as f64;
    let mut angles: Vec<f64> = (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            k as f64 * delta + jitter
        })
        .collect();
    angles.sort_by(f64::total_cmp);
    let (cx, cy) = cfg.center;
    Polygon::new(
        angles
            .into_iter()
            .map(|th| {
                let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
                let r = (1.0 + u) * r0;
                Vec4::xy(cx + r * th.cos(), cy + r * th.sin())
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replay_is_deterministic() {
        let cfg = StarCfg::default();
        let tok = ReplayToken { seed: 7, index: 3 };
        assert_eq!(draw_star_polygon(cfg, tok), draw_star_polygon(cfg, tok));
        let other = draw_star_polygon(cfg, ReplayToken { seed: 7, index: 4 });
        assert_ne!(draw_star_polygon(cfg, tok), other);
    }

    #[test]
    fn stars_are_ccw_and_sized() {
        let cfg = StarCfg {
            vertex_count: VertexCount::Uniform { min: 5, max: 9 },
            center: (10.0, -3.0),
            ..StarCfg::default()
        };
        for i in 0..20 {
            let p = draw_star_polygon(cfg, ReplayToken { seed: 1, index: i });
            assert!((5..=9).contains(&p.len()));
            assert!(p.is_counter_clockwise());
            assert!(p.point_inside(&Vec4::xy(10.0, -3.0)));
        }
    }
}
