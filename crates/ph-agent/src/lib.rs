//! `ph-agent` — trail-following agents for the physarum simulation.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                    |
//! |----------------|-------------------------------------------------------------|
//! | [`agent`]      | `Agent`, `AgentState`, `Position`                           |
//! | [`steer`]      | `Probes` (three sensor readings), `SteerChoice`             |
//! | [`population`] | `Population` (all agents), `AgentRngs` (per-agent RNG)      |
//! | [`builder`]    | `PopulationBuilder` (fluent construction)                   |
//! | [`error`]      | `AgentError`, `AgentResult<T>`                              |
//!
//! # One step
//!
//! ```text
//! reorient: sample left / centre / right probes → SteerChoice → new heading
//! move:     position += step_size * heading.unit()   (toroidal wrap)
//! deposit:  field[cell(position)] += deposit_amount
//! ```
//!
//! Sensing only needs a [`FieldView`](ph_field::FieldView), so the same
//! agent code runs against the live field or a tick-start snapshot.

pub mod agent;
pub mod builder;
pub mod error;
pub mod population;
pub mod steer;


pub use agent::{Agent, AgentState, Position};
pub use builder::PopulationBuilder;
pub use error::{AgentError, AgentResult};
pub use population::{AgentRngs, Population};
pub use steer::{Probes, SteerChoice};
