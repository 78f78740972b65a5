//! `ec-engine` — the simulation engine of the `rust_ec` framework.
//!
//! # Tick pipeline
//!
//! Every [`Engine::step`] call advances exactly one tick, synchronously and
//! to completion:
//!
//! ```text
//! ① Advance     — increment the tick counter.
//! ② Posting     — per agent (ascending AgentId): roll once against
//!                 post_frequency × (1 + arousal) × post_rate_multiplier;
//!                 on success append a post (sentiment = happiness ± 0.1,
//!                 clamped) to the global log, visible to ③ this same tick.
//! ③ Consumption — per agent: rank a feed of ≤ 5 posts from followed
//!                 authors; shift happiness by the mean susceptibility-
//!                 weighted sentiment offset of the feed.
//! ④ Decay       — every agent drifts 5 % back toward neutral mood.
//! ⑤ Retention   — evict oldest posts beyond the 1000-post cap.
//! ```
//!
//! The engine has no run/pause state and never blocks: pacing, pause, and
//! resume belong to the driver ([`Driver`] or any external loop calling
//! `step` at most once at a time).
//!
//! # Crate layout
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`engine`]   | `Engine`, `TickSummary`                               |
//! | [`feed`]     | candidate collection and ranking, `FEED_CAPACITY`     |
//! | [`log`]      | `PostLog` (chronological, bounded), `RETENTION_CAP`   |
//! | [`snapshot`] | `AgentSnapshot` read-only copies                      |
//! | [`observer`] | `EngineObserver` trait, `NoopObserver`                |
//! | [`driver`]   | `Driver` — paced stepping with observer hooks         |
//! | [`history`]  | `MoodHistory` — bounded mean-happiness window         |

pub mod driver;
pub mod engine;
pub mod feed;
pub mod history;
pub mod log;
pub mod observer;
pub mod snapshot;

#[cfg(test)]
mod tests;

pub use driver::Driver;
pub use engine::{Engine, TickSummary};
pub use feed::FEED_CAPACITY;
pub use history::MoodHistory;
pub use log::{PostLog, RETENTION_CAP};
pub use observer::{EngineObserver, NoopObserver};
pub use snapshot::AgentSnapshot;
