//! Follow-graph representation and random wiring.

use ec_core::{AgentId, SimRng};

/// Directed follow relation over a fixed agent population.
///
/// # Data layout
///
/// Two parallel adjacency lists, both indexed by `AgentId`:
///
/// - `following[a]` — agents whose posts `a` reads,
/// - `followers[a]` — agents who read `a`'s posts.
///
/// Entries appear in acceptance order.  The fields are private: every edge
/// goes through [`add_follow`](Self::add_follow), the single mutation
/// point, so the two directions cannot diverge.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FollowGraph {
    following: Vec<Vec<AgentId>>,
    followers: Vec<Vec<AgentId>>,
    edge_count: usize,
}

impl FollowGraph {
    /// An empty relation over `agent_count` agents.
    pub fn new(agent_count: usize) -> Self {
        Self {
            following:  vec![Vec::new(); agent_count],
            followers:  vec![Vec::new(); agent_count],
            edge_count: 0,
        }
    }

    /// Wire a random graph: for each agent, `average_connections` attempts
    /// at a uniformly random target.  Self-edges and duplicates are
    /// skipped, so `average_connections` is an expected out-degree, not an
    /// exact one; isolated agents are possible and legal.
    pub fn random(agent_count: usize, average_connections: usize, rng: &mut SimRng) -> Self {
        let mut graph = Self::new(agent_count);
        for follower in 0..agent_count as u32 {
            for _ in 0..average_connections {
                let target = AgentId(rng.gen_range(0..agent_count as u32));
                graph.add_follow(AgentId(follower), target);
            }
        }
        graph
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Add the edge `follower → target`, updating both directions
    /// atomically.
    ///
    /// Returns `false` (and changes nothing) for self-edges, duplicate
    /// edges, and out-of-range ids.
    pub fn add_follow(&mut self, follower: AgentId, target: AgentId) -> bool {
        let count = self.following.len();
        if follower == target
            || follower.index() >= count
            || target.index() >= count
            || self.follows(follower, target)
        {
            return false;
        }
        self.following[follower.index()].push(target);
        self.followers[target.index()].push(follower);
        self.edge_count += 1;
        true
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Number of agents the relation was sized for.
    pub fn agent_count(&self) -> usize {
        self.following.len()
    }

    /// Total number of accepted edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Agents whose posts `agent` reads.  Empty for out-of-range ids.
    #[inline]
    pub fn following(&self, agent: AgentId) -> &[AgentId] {
        self.following.get(agent.index()).map_or(&[], Vec::as_slice)
    }

    /// Agents who read `agent`'s posts.  Empty for out-of-range ids.
    #[inline]
    pub fn followers(&self, agent: AgentId) -> &[AgentId] {
        self.followers.get(agent.index()).map_or(&[], Vec::as_slice)
    }

    /// `true` if the edge `follower → target` exists.
    pub fn follows(&self, follower: AgentId, target: AgentId) -> bool {
        self.following(follower).contains(&target)
    }

    /// Out-degree of `agent` (how many it follows).
    pub fn out_degree(&self, agent: AgentId) -> usize {
        self.following(agent).len()
    }

    /// In-degree of `agent` (how many follow it).
    pub fn in_degree(&self, agent: AgentId) -> usize {
        self.followers(agent).len()
    }
}
