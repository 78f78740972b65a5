//! Live simulation configuration and partial updates.
//!
//! Both knobs are hot-reconfigurable: a driver merges a [`ConfigPatch`]
//! between ticks and the new values take effect from the next `step()`.
//! Invalid numbers are corrected at the merge site (negative → 0,
//! non-finite → ignored) rather than surfaced as errors.

/// Default ranking bias: halfway between chronological and fully
/// engagement-driven.
pub const DEFAULT_ALGORITHM_BIAS: f64 = 0.5;

/// Default global posting-rate scale.
pub const DEFAULT_POST_RATE_MULTIPLIER: f64 = 1.0;

// ── SimulationConfig ──────────────────────────────────────────────────────────

/// Tunable parameters of a running simulation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationConfig {
    /// Ranking bias: 0 = pure chronological feeds; larger values prefer
    /// extreme-sentiment content.  Nominal range [0, 1]; values up to 2 are
    /// accepted (a steeper weighted sort, same ordering).
    pub algorithm_bias: f64,

    /// Non-negative global multiplier on every agent's effective posting
    /// probability.  0 silences the population.
    pub post_rate_multiplier: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            algorithm_bias:       DEFAULT_ALGORITHM_BIAS,
            post_rate_multiplier: DEFAULT_POST_RATE_MULTIPLIER,
        }
    }
}

impl SimulationConfig {
    /// Return a copy with out-of-domain fields corrected: negatives are
    /// clamped to 0, non-finite values fall back to the defaults.
    pub fn sanitized(self) -> Self {
        Self {
            algorithm_bias:       sanitize(self.algorithm_bias, DEFAULT_ALGORITHM_BIAS),
            post_rate_multiplier: sanitize(self.post_rate_multiplier, DEFAULT_POST_RATE_MULTIPLIER),
        }
    }

    /// Merge `patch` into `self`.  Absent fields are left unchanged;
    /// provided fields pass through the same correction as
    /// [`sanitized`](Self::sanitized), falling back to the current value.
    pub fn apply(&mut self, patch: ConfigPatch) {
        if let Some(bias) = patch.algorithm_bias {
            self.algorithm_bias = sanitize(bias, self.algorithm_bias);
        }
        if let Some(multiplier) = patch.post_rate_multiplier {
            self.post_rate_multiplier = sanitize(multiplier, self.post_rate_multiplier);
        }
    }

    /// `true` if feeds are ranked purely chronologically.
    #[inline]
    pub fn is_chronological(&self) -> bool {
        self.algorithm_bias == 0.0
    }
}

fn sanitize(value: f64, fallback: f64) -> f64 {
    if !value.is_finite() {
        return fallback;
    }
    value.max(0.0)
}

// ── ConfigPatch ───────────────────────────────────────────────────────────────

/// A partial [`SimulationConfig`]: only the fields present are merged.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConfigPatch {
    pub algorithm_bias:       Option<f64>,
    pub post_rate_multiplier: Option<f64>,
}

impl ConfigPatch {
    /// Patch that only changes the ranking bias.
    pub fn bias(value: f64) -> Self {
        Self { algorithm_bias: Some(value), ..Self::default() }
    }

    /// Patch that only changes the posting-rate multiplier.
    pub fn post_rate(value: f64) -> Self {
        Self { post_rate_multiplier: Some(value), ..Self::default() }
    }
}
