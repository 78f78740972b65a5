//! `ec-agent` — Structure-of-Arrays population storage for the `rust_ec`
//! framework.
//!
//! | Module    | Contents                                               |
//! |-----------|--------------------------------------------------------|
//! | [`store`] | `AgentStore` (SoA mood arrays), `AgentRngs` (per-agent RNG) |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                  |
//! |---------|---------------------------------------------------------|
//! | `serde` | Propagates serde derives to all public types.           |

pub mod store;

#[cfg(test)]
mod tests;

pub use store::{AgentRngs, AgentStore};
