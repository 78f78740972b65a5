//! `ec-graph` — the follow graph of the `rust_ec` framework.
//!
//! A directed relation where an edge a→b means "a reads b's posts".  Both
//! adjacency directions are stored, but they can only be mutated through
//! [`FollowGraph::add_follow`], which updates them symmetrically — the
//! mirror invariant (`a.following ∋ t ⟺ t.followers ∋ a`) is therefore
//! structural, not something callers must remember to maintain.

pub mod graph;


pub use graph::FollowGraph;
