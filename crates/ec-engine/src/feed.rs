//! Feed candidate collection and ranking.
//!
//! The same two functions serve the consumption pass and the read-only
//! feed preview query, so what a driver shows and what the engine applies
//! can never diverge.

use ec_core::{AgentId, Post};
use rustc_hash::FxHashSet;

/// Maximum posts in one feed, regardless of candidate count or bias.
pub const FEED_CAPACITY: usize = 5;

/// Collect the candidate set for one reader: every stored post whose
/// author is in `following`, in storage (chronological) order.
///
/// Membership goes through an `FxHashSet` so the per-post check is O(1)
/// even for well-connected readers.
pub(crate) fn candidates<'a, I>(posts: I, following: &[AgentId]) -> Vec<Post>
where
    I: Iterator<Item = &'a Post>,
{
    let followed: FxHashSet<AgentId> = following.iter().copied().collect();
    posts.filter(|p| followed.contains(&p.author)).copied().collect()
}

/// Rank chronologically ordered candidates and return at most
/// [`FEED_CAPACITY`] posts.
///
/// - `bias == 0`: the chronologically most recent posts, unranked.
/// - `bias > 0`: stable ascending sort on `engagement × bias`, then the
///   tail, so the highest-engagement posts win and equal scores keep their
///   chronological order (deterministic for deterministic inputs).
///   Scaling the key by a positive bias never reorders; a weighted sort,
///   not an interpolation.
pub(crate) fn rank(mut candidates: Vec<Post>, bias: f64) -> Vec<Post> {
    if bias != 0.0 {
        candidates
            .sort_by(|a, b| (a.engagement() * bias).total_cmp(&(b.engagement() * bias)));
    }
    let skip = candidates.len().saturating_sub(FEED_CAPACITY);
    candidates.split_off(skip)
}
