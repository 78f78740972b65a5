//! The `Post` value type and its identifier.

use std::fmt;

use crate::{AgentId, Tick};

// ── PostId ────────────────────────────────────────────────────────────────────

/// Unique, never-reused post identifier, derived from the creation tick and
/// author.
///
/// `seq` counts the author's posts within that tick: the autonomous posting
/// pass emits at most one post per agent per tick (seq 0), but injected
/// posts can land on the same `(tick, author)` pair and take the next
/// sequence number.  Retention may evict a post, but its ID is never
/// assigned again.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PostId {
    /// Tick the post was created on.
    pub tick: Tick,
    /// The posting agent.
    pub author: AgentId,
    /// Ordinal among the author's posts within `tick`.
    pub seq: u32,
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "post-{}-{}-{}", self.tick.0, self.author.0, self.seq)
    }
}

// ── Post ──────────────────────────────────────────────────────────────────────

/// A single sentiment-bearing message.
///
/// Immutable after creation; all fields are fixed at the creation site and
/// `sentiment` is clamped into [0, 1] there.  The type is `Copy`, so feeds
/// and summaries hand out cheap value copies rather than references into
/// the log.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Post {
    pub id: PostId,
    /// The posting agent.  References an existing agent at creation time.
    pub author: AgentId,
    /// Positivity of the message, in [0, 1] (0.5 = neutral).
    pub sentiment: f64,
    /// Tick the post was created on (same as `id.tick`).
    pub timestamp: Tick,
}

impl Post {
    /// Engagement score: distance of the sentiment from neutral.
    #[inline]
    pub fn engagement(&self) -> f64 {
        crate::mood::engagement(self.sentiment)
    }
}
