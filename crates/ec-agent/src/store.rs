//! Population storage: `AgentStore` (SoA mood data) and `AgentRngs`
//! (per-agent RNG).
//!
//! # Why two structs?
//!
//! The tick loop needs `&mut AgentRngs` (exclusive access to each agent's
//! RNG for the posting roll) while reading `&AgentStore` mood arrays.
//! Keeping RNGs out of the store lets the borrow checker see the two
//! accesses as disjoint without field-by-field gymnastics.

use ec_core::{AgentId, AgentRng, NEUTRAL};

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state, parallel to [`AgentStore`]'s arrays.
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-agent RNGs from `global_seed`.
    pub fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(global_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one agent's RNG.
    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── AgentStore ────────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for all agent mood state.
///
/// Every `Vec` field has exactly `count` elements; the `AgentId` value is
/// the index into all of them:
///
/// ```ignore
/// let h = store.happiness[agent.index()];  // O(1), cache-friendly
/// ```
///
/// Fields are `pub` for direct indexed access by the engine and by tests;
/// the unit-interval invariant is maintained by clamping at every mutation
/// site, not by accessors.
pub struct AgentStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    /// Current mood, in [0, 1].  Evolved every tick by feed consumption and
    /// decay toward [`NEUTRAL`].
    pub happiness: Vec<f64>,

    /// How strongly feed content moves this agent's mood, in [0, 1].
    /// Fixed at creation.
    pub susceptibility: Vec<f64>,

    /// Base probability of posting per tick, in [0, 1].  Fixed at creation;
    /// scaled by arousal and the global rate multiplier at roll time.
    pub post_frequency: Vec<f64>,
}

impl AgentStore {
    /// Allocate storage for `count` agents, all starting at neutral mood
    /// with zeroed traits.  Actual trait values are drawn by the engine's
    /// `initialize`, written directly to the `pub` fields.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            happiness:      vec![NEUTRAL; count],
            susceptibility: vec![0.0; count],
            post_frequency: vec![0.0; count],
        }
    }

    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// `true` if `agent` names a live index.
    #[inline]
    pub fn contains(&self, agent: AgentId) -> bool {
        agent.index() < self.count
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    /// Population mean happiness.
    ///
    /// The mean over zero agents is undefined; the defined fallback is 0.0
    /// so an empty population never faults a summary computation.
    pub fn mean_happiness(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.happiness.iter().sum::<f64>() / self.count as f64
    }
}
