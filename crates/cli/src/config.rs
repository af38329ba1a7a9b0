use anyhow::{Context, Result};
use profilegen::{FilletPolicy, ProfileCfg};
use serde::Deserialize;
use std::path::Path;

/// Optional JSON config file. Missing fields keep the library defaults.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CfgFile {
    pub angular_steps: Option<usize>,
    pub involute_steps: Option<usize>,
    pub facet_epsilon: Option<f64>,
    pub zero_tolerance: Option<f64>,
    pub eps_det: Option<f64>,
    /// Abort on infeasible fillets instead of keeping the corner.
    pub strict: Option<bool>,
}

impl CfgFile {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_slice(&raw).with_context(|| format!("parsing {}", path.display()))
    }

    /// Apply the set fields on top of `cfg`.
    pub fn apply(&self, mut cfg: ProfileCfg) -> ProfileCfg {
        if let Some(n) = self.angular_steps {
            cfg.angular_steps = n;
        }
        if let Some(n) = self.involute_steps {
            cfg.involute_steps = n;
        }
        if let Some(e) = self.facet_epsilon {
            cfg.facet_epsilon = e;
        }
        if let Some(t) = self.zero_tolerance {
            cfg.geom.zero_tolerance = t;
        }
        if let Some(e) = self.eps_det {
            cfg.geom.eps_det = e;
        }
        if let Some(strict) = self.strict {
            cfg.fillet_policy = if strict {
                FilletPolicy::Abort
            } else {
                FilletPolicy::KeepCorner
            };
        }
        cfg
    }
}
