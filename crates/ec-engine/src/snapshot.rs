//! Read-only agent copies handed to drivers and UIs.

use ec_core::AgentId;

/// A point-in-time copy of one agent's state, including its follow lists.
///
/// Snapshots are detached from the engine: mutating the engine afterwards
/// does not invalidate them, and mutating them does nothing to the engine.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentSnapshot {
    pub id: AgentId,
    /// Current mood, in [0, 1].
    pub happiness: f64,
    /// Fixed trait: how strongly feed content moves this agent, in [0, 1].
    pub susceptibility: f64,
    /// Fixed trait: base posting probability per tick, in [0, 1].
    pub post_frequency: f64,
    /// Agents whose posts this agent reads.
    pub following: Vec<AgentId>,
    /// Agents who read this agent's posts.
    pub followers: Vec<AgentId>,
}
