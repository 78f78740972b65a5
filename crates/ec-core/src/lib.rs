//! `ec-core` — foundational types for the `rust_ec` emotional-contagion
//! framework.
//!
//! This crate is a dependency of every other `ec-*` crate.  It intentionally
//! has no `ec-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                          |
//! |------------|---------------------------------------------------|
//! | [`ids`]    | `AgentId`                                         |
//! | [`time`]   | `Tick`                                            |
//! | [`mood`]   | `NEUTRAL`, `clamp01`, `arousal`, `engagement`     |
//! | [`rng`]    | `AgentRng` (per-agent), `SimRng` (engine-level)   |
//! | [`config`] | `SimulationConfig`, `ConfigPatch`                 |
//! | [`post`]   | `Post`, `PostId`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod ids;
pub mod mood;
pub mod post;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{ConfigPatch, SimulationConfig};
pub use ids::AgentId;
pub use mood::{arousal, clamp01, engagement, NEUTRAL};
pub use post::{Post, PostId};
pub use rng::{AgentRng, SimRng};
pub use time::Tick;
