//! The `Engine` struct and its tick pipeline.

use ec_agent::{AgentRngs, AgentStore};
use ec_core::{arousal, clamp01, AgentId, ConfigPatch, Post, SimRng, SimulationConfig, Tick, NEUTRAL};
use ec_graph::FollowGraph;

use crate::feed;
use crate::log::PostLog;
use crate::snapshot::AgentSnapshot;

// ── Population trait distributions ────────────────────────────────────────────

/// Half-width of the uniform jitter around neutral for initial happiness.
const HAPPINESS_JITTER: f64 = 0.1;

/// Lower bound of the base posting-probability band.
const POST_FREQUENCY_MIN: f64 = 0.1;

/// Width of the base posting-probability band.
const POST_FREQUENCY_SPAN: f64 = 0.2;

/// Half-width of the uniform jitter applied to a post's sentiment around
/// its author's current happiness.
const SENTIMENT_JITTER: f64 = 0.1;

/// Fraction of the distance back toward neutral every agent's mood travels
/// each tick.
const DECAY_RATE: f64 = 0.05;

// ── TickSummary ───────────────────────────────────────────────────────────────

/// What one [`Engine::step`] call produced, returned so drivers never have
/// to re-derive it from engine state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickSummary {
    /// The tick that just completed.
    pub tick: Tick,
    /// Population mean happiness after the tick (0.0 for an empty
    /// population).
    pub average_happiness: f64,
    /// The posts created this tick, in creation order.
    pub new_posts: Vec<Post>,
}

impl TickSummary {
    /// Number of posts created this tick.
    #[inline]
    pub fn new_post_count(&self) -> usize {
        self.new_posts.len()
    }
}

// ── Engine ────────────────────────────────────────────────────────────────────

/// The simulation engine: owns all state and advances it one tick per
/// [`step`](Self::step) call.
///
/// Fields are `pub` for direct indexed access by drivers and tests; the
/// documented invariants (unit-interval clamping, the follow graph's
/// mirror, the retention cap) are maintained by the mutation sites
/// themselves.
///
/// The engine is a single-writer state machine: every operation runs to
/// completion before returning, and the caller must never overlap
/// invocations.  There is no run/pause state here: a paused simulation is
/// simply a driver that stops calling `step`.
pub struct Engine {
    /// Live configuration.  Replaced pieces take effect from the next
    /// `step`.
    pub config: SimulationConfig,

    /// The last completed tick (`Tick::ZERO` before the first step).
    pub tick: Tick,

    /// SoA mood state for the whole population.
    pub agents: AgentStore,

    /// Per-agent deterministic RNGs, separated for the split-borrow
    /// pattern.
    pub rngs: AgentRngs,

    /// The follow graph.  Fixed after `initialize` in normal operation.
    pub graph: FollowGraph,

    /// Bounded chronological post history.
    pub posts: PostLog,

    /// Root seed — all per-agent RNGs and the graph wiring derive from it.
    seed: u64,

    /// Engine-level RNG (graph wiring).
    rng: SimRng,
}

impl Engine {
    /// Create an engine with an entropy-derived seed (runs are not
    /// reproducible, matching the interactive default).
    pub fn new(config: SimulationConfig) -> Self {
        Self::with_seed(config, rand::random())
    }

    /// Create an engine with a pinned seed: the same seed, configuration,
    /// and call sequence reproduce identical populations, graphs, and
    /// tick outcomes.
    pub fn with_seed(config: SimulationConfig, seed: u64) -> Self {
        Self {
            config: config.sanitized(),
            tick:   Tick::ZERO,
            agents: AgentStore::new(0),
            rngs:   AgentRngs::new(0, seed),
            graph:  FollowGraph::new(0),
            posts:  PostLog::new(),
            seed,
            rng:    SimRng::new(seed),
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Discard all prior state and build a fresh population of
    /// `agent_count` agents wired with an expected out-degree of
    /// `average_connections`.
    ///
    /// Traits are drawn per agent from its own RNG: happiness uniform in
    /// 0.5 ± 0.1, susceptibility uniform in [0, 1], base post frequency
    /// uniform in [0.1, 0.3).  The follow graph is random; isolated agents
    /// are possible and simply see empty feeds.
    pub fn initialize(&mut self, agent_count: usize, average_connections: usize) {
        self.tick = Tick::ZERO;
        self.posts = PostLog::new();
        self.agents = AgentStore::new(agent_count);
        self.rngs = AgentRngs::new(agent_count, self.seed);

        for i in 0..agent_count {
            let rng = self.rngs.get_mut(AgentId(i as u32));
            let jitter = (rng.random::<f64>() - 0.5) * 2.0 * HAPPINESS_JITTER;
            self.agents.happiness[i] = clamp01(NEUTRAL + jitter);
            self.agents.susceptibility[i] = rng.random();
            self.agents.post_frequency[i] =
                POST_FREQUENCY_MIN + rng.random::<f64>() * POST_FREQUENCY_SPAN;
        }

        self.graph = FollowGraph::random(agent_count, average_connections, &mut self.rng);
    }

    /// Advance the simulation by exactly one tick.  See the crate docs for
    /// the five-phase pipeline.
    pub fn step(&mut self) -> TickSummary {
        // ── Phase ①: advance ──────────────────────────────────────────────
        self.tick = self.tick + 1;

        // ── Phase ②: posting pass ─────────────────────────────────────────
        //
        // Posts land in the global log immediately, so the consumption
        // pass below sees this tick's posts and agents react within the
        // tick.
        let multiplier = self.config.post_rate_multiplier;
        let mut new_posts = Vec::new();
        for i in 0..self.agents.count {
            let happiness = self.agents.happiness[i];
            let effective =
                self.agents.post_frequency[i] * (1.0 + arousal(happiness)) * multiplier;

            let rng = self.rngs.get_mut(AgentId(i as u32));
            if rng.random::<f64>() < effective {
                let jitter = (rng.random::<f64>() - 0.5) * 2.0 * SENTIMENT_JITTER;
                new_posts.push(self.posts.append(
                    self.tick,
                    AgentId(i as u32),
                    happiness + jitter,
                ));
            }
        }

        // ── Phase ③: consumption pass ─────────────────────────────────────
        //
        // Feeds depend only on the post log, which is frozen for the rest
        // of the tick, so agent order cannot change any outcome here.
        let bias = self.config.algorithm_bias;
        for i in 0..self.agents.count {
            let reader = AgentId(i as u32);
            let ranked = feed::rank(
                feed::candidates(self.posts.iter(), self.graph.following(reader)),
                bias,
            );
            if ranked.is_empty() {
                continue;
            }
            let susceptibility = self.agents.susceptibility[i];
            let mood_delta: f64 = ranked
                .iter()
                .map(|p| (p.sentiment - NEUTRAL) * susceptibility)
                .sum();
            let happiness = &mut self.agents.happiness[i];
            *happiness = clamp01(*happiness + mood_delta / ranked.len() as f64);
        }

        // ── Phase ④: decay ────────────────────────────────────────────────
        //
        // Applied to every agent, fed or not: without stimulus, moods
        // converge back to neutral instead of freezing at an extreme.
        for happiness in &mut self.agents.happiness {
            *happiness = clamp01(*happiness + (NEUTRAL - *happiness) * DECAY_RATE);
        }

        // ── Phase ⑤: retention ────────────────────────────────────────────
        self.posts.enforce_retention();

        TickSummary {
            tick:              self.tick,
            average_happiness: self.agents.mean_happiness(),
            new_posts,
        }
    }

    // ── Configuration ─────────────────────────────────────────────────────

    /// Merge a partial configuration; absent fields are unchanged.  Takes
    /// effect from the next `step`.
    pub fn set_config(&mut self, patch: ConfigPatch) {
        self.config.apply(patch);
    }

    // ── Direct state mutation (what-if exploration) ───────────────────────

    /// Override one agent's happiness (clamped to [0, 1]).
    ///
    /// Returns `false` and changes nothing if the agent does not exist.
    pub fn set_agent_happiness(&mut self, agent: AgentId, value: f64) -> bool {
        if !self.agents.contains(agent) {
            return false;
        }
        self.agents.happiness[agent.index()] = clamp01(value);
        true
    }

    /// Create a post by `author` with the given sentiment (clamped),
    /// stamped at the current tick, bypassing the probabilistic posting
    /// pass.
    ///
    /// Returns `None` and changes nothing if the agent does not exist.
    pub fn inject_post(&mut self, author: AgentId, sentiment: f64) -> Option<Post> {
        if !self.agents.contains(author) {
            return None;
        }
        Some(self.posts.append(self.tick, author, sentiment))
    }

    // ── Read-only queries ─────────────────────────────────────────────────

    /// Number of agents in the population.
    pub fn agent_count(&self) -> usize {
        self.agents.count
    }

    /// Population mean happiness (0.0 for an empty population).
    pub fn average_happiness(&self) -> f64 {
        self.agents.mean_happiness()
    }

    /// Detached copy of one agent's state, or `None` if it does not exist.
    pub fn snapshot(&self, agent: AgentId) -> Option<AgentSnapshot> {
        if !self.agents.contains(agent) {
            return None;
        }
        let i = agent.index();
        Some(AgentSnapshot {
            id:             agent,
            happiness:      self.agents.happiness[i],
            susceptibility: self.agents.susceptibility[i],
            post_frequency: self.agents.post_frequency[i],
            following:      self.graph.following(agent).to_vec(),
            followers:      self.graph.followers(agent).to_vec(),
        })
    }

    /// Detached copies of every agent, in id order.
    pub fn snapshots(&self) -> Vec<AgentSnapshot> {
        self.agents.agent_ids().filter_map(|a| self.snapshot(a)).collect()
    }

    /// All stored posts by `author`, oldest first.  Empty for unknown ids.
    pub fn posts_by(&self, author: AgentId) -> Vec<Post> {
        self.posts.by_author(author)
    }

    /// The feed `agent` would consume right now — the exact code path the
    /// consumption pass uses, so previews and stepping never diverge.
    ///
    /// Returns `None` if the agent does not exist.
    pub fn feed_for_agent(&self, agent: AgentId) -> Option<Vec<Post>> {
        if !self.agents.contains(agent) {
            return None;
        }
        Some(feed::rank(
            feed::candidates(self.posts.iter(), self.graph.following(agent)),
            self.config.algorithm_bias,
        ))
    }
}
