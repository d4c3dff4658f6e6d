//! `ph-sim` — tick loop orchestrator for the physarum simulation.
//!
//! # Tick
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Agents   — every agent senses, turns, moves, and deposits
//!                 (TickModel::Sequential or TickModel::Snapshot).
//!   ② Diffuse  — exactly once, after every agent has moved.
//!   ③ Observe  — on_tick_end, and on_snapshot every N ticks.
//! ```
//!
//! Tick N+1 never starts before tick N's diffusion has finished.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                       |
//! |------------|--------------------------------------------------------------|
//! | `parallel` | Snapshot-model agent phase and diffusion run on Rayon.       |
//! | `serde`    | Serde derives on configuration and state types.              |
//!
//! The sequential model is inherently order dependent and always runs on
//! the calling thread.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ph_core::PhysarumConfig;
//! use ph_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(PhysarumConfig::default()).build()?;
//! sim.run(&mut NoopObserver)?;
//! let view = sim.snapshot();
//! ```

pub mod builder;
pub mod driver;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use driver::{Driver, DriverReport, Frame, RenderControl, Renderer, StopReason, StopSignal};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{Sim, TickSummary};

pub use ph_core::{PhysarumConfig, Tick, TickModel};
