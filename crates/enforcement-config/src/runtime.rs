use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Runtime knobs document (`runtime.yaml`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Global halt: every call is answered BLOCK without running evaluators.
    #[serde(default)]
    pub kill_switch: bool,

    /// Global default karma threshold.
    #[serde(default = "default_karma_threshold")]
    pub karma_confidence_threshold: f64,

    /// Per-region karma thresholds.
    #[serde(default)]
    pub karma_confidence_thresholds: BTreeMap<String, f64>,

    /// Active environment name, selects an overlay table.
    #[serde(default)]
    pub env: String,

    /// env → region → threshold; wins over the per-region table.
    #[serde(default)]
    pub karma_confidence_threshold_overlays: BTreeMap<String, BTreeMap<String, f64>>,
}

fn default_karma_threshold() -> f64 {
    -0.5
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            kill_switch: false,
            karma_confidence_threshold: default_karma_threshold(),
            karma_confidence_thresholds: BTreeMap::new(),
            env: String::new(),
            karma_confidence_threshold_overlays: BTreeMap::new(),
        }
    }
}

/// Clamp a threshold into the karma domain [-1, 1].
pub fn clamp_threshold(value: f64) -> f64 {
    value.clamp(-1.0, 1.0)
}

impl RuntimeConfig {
    /// Karma threshold for a region: env overlay, then region table, then
    /// the global default. Always clamped to [-1, 1].
    pub fn karma_threshold_for(&self, region: &str) -> f64 {
        let overlay = self
            .karma_confidence_threshold_overlays
            .get(&self.env)
            .and_then(|regions| regions.get(region));

        let raw = overlay
            .or_else(|| self.karma_confidence_thresholds.get(region))
            .copied()
            .unwrap_or(self.karma_confidence_threshold);

        clamp_threshold(raw)
    }

    /// Reject thresholds that cannot be compared (NaN, infinities).
    ///
    /// Out-of-range but finite values are accepted and clamped at use.
    pub fn validate(&self) -> Result<()> {
        check_finite("karma_confidence_threshold", self.karma_confidence_threshold)?;

        for (region, value) in &self.karma_confidence_thresholds {
            check_finite(&format!("karma_confidence_thresholds.{region}"), *value)?;
        }

        for (env, regions) in &self.karma_confidence_threshold_overlays {
            for (region, value) in regions {
                check_finite(
                    &format!("karma_confidence_threshold_overlays.{env}.{region}"),
                    *value,
                )?;
            }
        }
        Ok(())
    }

    /// Set the kill switch.
    pub fn with_kill_switch(mut self, on: bool) -> Self {
        self.kill_switch = on;
        self
    }

    /// Set the active environment name.
    pub fn with_env(mut self, env: impl Into<String>) -> Self {
        self.env = env.into();
        self
    }

    /// Set the global default karma threshold.
    pub fn with_default_threshold(mut self, threshold: f64) -> Self {
        self.karma_confidence_threshold = threshold;
        self
    }

    /// Set the karma threshold for one region.
    pub fn with_region_threshold(mut self, region: impl Into<String>, threshold: f64) -> Self {
        self.karma_confidence_thresholds
            .insert(region.into(), threshold);
        self
    }

    /// Set an env overlay threshold for one region.
    pub fn with_overlay(
        mut self,
        env: impl Into<String>,
        region: impl Into<String>,
        threshold: f64,
    ) -> Self {
        self.karma_confidence_threshold_overlays
            .entry(env.into())
            .or_default()
            .insert(region.into(), threshold);
        self
    }
}

fn check_finite(field: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field: field.to_string(),
            value,
        })
    }
}
