//! Builder configuration.

use crate::geom2::GeomCfg;
use crate::polygon::FilletPolicy;

/// Sampling densities, tolerances and the fillet policy for profile builders.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProfileCfg {
    /// Samples per full turn for ray-sampled and cycloid curves.
    pub angular_steps: usize,
    /// Samples along one involute flank.
    pub involute_steps: usize,
    /// Maximum chord deviation when turning an arc into facets.
    pub facet_epsilon: f64,
    pub geom: GeomCfg,
    pub fillet_policy: FilletPolicy,
}

impl Default for ProfileCfg {
    fn default() -> Self {
        Self {
            angular_steps: 1000,
            involute_steps: 20,
            facet_epsilon: 0.01,
            geom: GeomCfg::default(),
            fillet_policy: FilletPolicy::KeepCorner,
        }
    }
}

impl ProfileCfg {
    /// Facets for a full circle of radius `r` so that no chord strays more than
    /// `facet_epsilon` from the arc. Always at least 1.
    pub fn facets_for_radius(&self, r: f64) -> usize {
        if !(r > self.facet_epsilon) || !self.facet_epsilon.is_finite() || self.facet_epsilon <= 0.0
        {
            return 1;
        }
        let n = std::f64::consts::PI / (1.0 - self.facet_epsilon / r).acos();
        if n.is_finite() {
            (n.floor() as usize).max(1)
        } else {
            1
        }
    }

    /// Facets for an arc sweeping `sweep` radians at radius `r`.
    pub fn facets_for_arc(&self, r: f64, sweep: f64) -> usize {
        let full = self.facets_for_radius(r) as f64;
        ((full * (sweep.abs() / std::f64::consts::TAU)).ceil() as usize).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facets_grow_with_radius() {
        let cfg = ProfileCfg::default();
        let small = cfg.facets_for_radius(1.0);
        let large = cfg.facets_for_radius(100.0);
        assert!(small >= 1);
        assert!(large > small);
        // π / acos(1 - 0.01) for r = 1
        assert_eq!(small, (std::f64::consts::PI / 0.99f64.acos()).floor() as usize);
        assert_eq!(cfg.facets_for_radius(0.0), 1);
        assert_eq!(cfg.facets_for_radius(0.005), 1);
    }

    #[test]
    fn quarter_arc_uses_a_quarter_of_the_facets() {
        let cfg = ProfileCfg::default();
        let full = cfg.facets_for_radius(10.0);
        let quarter = cfg.facets_for_arc(10.0, std::f64::consts::FRAC_PI_2);
        assert_eq!(quarter, (full as f64 / 4.0).ceil() as usize);
    }
}
