//! `ph-core` — foundational types for the physarum simulation workspace.
//!
//! This crate is a dependency of every other `ph-*` crate.  It has no `ph-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`direction`]   | `Direction` — normalised heading in `[0, 2π)`         |
//! | [`ids`]         | `AgentId`                                             |
//! | [`time`]        | `Tick`                                                |
//! | [`rng`]         | `AgentRng` (per-agent), `SimRng` (global)             |
//! | [`config`]      | `PhysarumConfig`, `AgentParams`, model/policy enums   |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on all public types (JSON configs) |

pub mod config;
pub mod direction;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{AgentParams, BorderMode, DepositPolicy, PhysarumConfig, TickModel};
pub use direction::Direction;
pub use error::{CoreError, CoreResult};
pub use ids::AgentId;
pub use rng::{AgentRng, SimRng};
pub use time::Tick;
