//! Fractal terrain heights: three octaves of OpenSimplex noise sampled on
//! the unit sphere, amplitude halving and frequency doubling per octave.

use crate::vec3::Vec3;
use noise::{NoiseFn, OpenSimplex};

/// Default base scale of the first octave.
pub(crate) const DEFAULT_SCALE: f64 = 1.5;

pub(crate) struct Terrain {
    noise: OpenSimplex,
    scale: f64,
    seed: u32,
}

impl Terrain {
    pub(crate) fn new(seed: u32, scale: f64) -> Self {
        Self {
            noise: OpenSimplex::new(seed),
            scale,
            seed,
        }
    }

    pub(crate) fn seed(&self) -> u32 {
        self.seed
    }

    /// Height at a unit-sphere point, in roughly [-0.875, 0.875]. The sum
    /// is deliberately not renormalized; the biome bands expect this range.
    pub(crate) fn height(&self, p: Vec3) -> f32 {
        let octave = |f: f64| {
            self.noise
                .get([p.x as f64 * f, p.y as f64 * f, p.z as f64 * f])
        };
        let s = self.scale;
        (octave(s) * 0.5 + octave(2.0 * s) * 0.25 + octave(4.0 * s) * 0.125) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sphere_points() -> Vec<Vec3> {
        let mut pts = Vec::new();
        let n = 24;
        for i in 0..n {
            for j in 0..n {
                let lat = (i as f32 / n as f32 - 0.5) * std::f32::consts::PI;
                let lon = j as f32 / n as f32 * std::f32::consts::TAU;
                pts.push(Vec3::new(
                    lat.cos() * lon.cos(),
                    lat.sin(),
                    lat.cos() * lon.sin(),
                ));
            }
        }
        pts
    }

    #[test]
    fn same_seed_same_heights() {
        let a = Terrain::new(1234, DEFAULT_SCALE);
        let b = Terrain::new(1234, DEFAULT_SCALE);
        for p in sphere_points() {
            assert_eq!(a.height(p), b.height(p));
        }
    }

    #[test]
    fn heights_stay_in_expected_range() {
        let t = Terrain::new(99, DEFAULT_SCALE);
        for p in sphere_points() {
            let h = t.height(p);
            assert!(h.abs() <= 0.875 + 1e-6, "height {h} out of range");
        }
    }

    #[test]
    fn different_seeds_differ_somewhere() {
        let a = Terrain::new(1, DEFAULT_SCALE);
        let b = Terrain::new(2, DEFAULT_SCALE);
        assert!(sphere_points().iter().any(|&p| a.height(p) != b.height(p)));
    }
}
