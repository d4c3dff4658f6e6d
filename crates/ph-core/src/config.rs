//! Simulation configuration.
//!
//! [`PhysarumConfig::default`] gives the standard parameters: a
//! 500×500 field, 1000 agents, sensor half-angle 0.4 rad at distance 6,
//! rotation step 0.3 rad, step size 3, deposit 0.005 and kernel mass 0.99.
//!
//! Applications typically build a config in code or load one from JSON (with
//! the `serde` feature) and hand it to `ph_sim::SimBuilder`, which calls
//! [`PhysarumConfig::validate`] before allocating anything.

use crate::{CoreError, CoreResult};

// ── Policy enums ──────────────────────────────────────────────────────────────

/// How agents and the field are coupled within one tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TickModel {
    /// Agents step one at a time in ascending `AgentId` order against the
    /// live field.  A deposit is visible to every agent stepped after it in
    /// the same tick.
    #[default]
    Sequential,
    /// All agents sense a copy of the field taken at tick start; deposits are
    /// buffered and committed in ascending `AgentId` order once every agent
    /// has moved.  Order independent, so the agent phase may run in parallel.
    Snapshot,
}

/// Border handling of the diffusion convolution.
///
/// Agent indexing is always toroidal; this only affects `diffuse`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BorderMode {
    /// Mirror across the edge cell without repeating it: index `-1` reads
    /// `1`, index `n` reads `n - 2` (OpenCV's `BORDER_REFLECT_101`).  Leaks
    /// mass at the borders.
    #[default]
    Reflect101,
    /// Toroidal convolution, consistent with agent indexing.  Mass-exact.
    Wrap,
}

/// What happens to a cell value after a deposit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DepositPolicy {
    /// Legacy growth: the deposit is added and never clamped, so hot cells
    /// can exceed 1.0.
    #[default]
    Unclamped,
    /// The cell is clamped into `[0, 1]` after the deposit.
    Clamped,
}

// ── AgentParams ───────────────────────────────────────────────────────────────

/// Sensing and steering constants shared by the whole population.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AgentParams {
    /// Angle between the centre probe and each side probe, radians.
    pub sensor_angle: f64,
    /// Distance from the agent to each probe, in cells.
    pub sensor_distance: f64,
    /// Maximum rotation applied in one reorientation, radians.
    pub rotation_step: f64,
    /// Distance travelled per tick, in cells.
    pub step_size: f64,
}

impl Default for AgentParams {
    fn default() -> Self {
        Self {
            sensor_angle:    0.4,
            sensor_distance: 6.0,
            rotation_step:   0.3,
            step_size:       3.0,
        }
    }
}

impl AgentParams {
    pub fn validate(&self) -> CoreResult<()> {
        finite("sensor_angle", self.sensor_angle)?;
        positive("rotation_step", self.rotation_step)?;
        positive("sensor_distance", self.sensor_distance)?;
        positive("step_size", self.step_size)?;
        Ok(())
    }
}

// ── PhysarumConfig ────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PhysarumConfig {
    /// Field extent along the first axis, in cells.
    pub width: usize,
    /// Field extent along the second axis, in cells.
    pub height: usize,
    /// Number of agents.  Fixed for the whole run.
    pub population: usize,
    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
    pub agent: AgentParams,
    /// Amount each agent adds to its cell per tick.
    pub deposit_amount: f32,
    pub deposit_policy: DepositPolicy,
    /// Total weight of the diffusion kernel; `1 - kernel_mass` is the
    /// per-tick decay.
    pub kernel_mass: f32,
    pub border: BorderMode,
    pub tick_model: TickModel,
    /// Ticks simulated by `Sim::run`.
    pub total_ticks: u64,
    /// Call `on_snapshot` every N ticks.  0 disables snapshots.
    pub snapshot_interval_ticks: u64,
}

impl Default for PhysarumConfig {
    fn default() -> Self {
        Self {
            width:                   500,
            height:                  500,
            population:              1000,
            seed:                    0,
            agent:                   AgentParams::default(),
            deposit_amount:          0.005,
            deposit_policy:          DepositPolicy::Unclamped,
            kernel_mass:             0.99,
            border:                  BorderMode::Reflect101,
            tick_model:              TickModel::Sequential,
            total_ticks:             1000,
            snapshot_interval_ticks: 1,
        }
    }
}

impl PhysarumConfig {
    /// Reject any configuration the simulation cannot run with.
    pub fn validate(&self) -> CoreResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CoreError::Config(format!(
                "field dimensions must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width > i32::MAX as usize || self.height > i32::MAX as usize {
            return Err(CoreError::Config(format!(
                "field dimensions {}x{} exceed {}",
                self.width,
                self.height,
                i32::MAX
            )));
        }
        if self.population == 0 {
            return Err(CoreError::Config("population must be non-zero".into()));
        }
        if u32::try_from(self.population).is_err() {
            return Err(CoreError::Config(format!(
                "population {} exceeds {}",
                self.population,
                u32::MAX
            )));
        }
        self.agent.validate()?;
        positive("deposit_amount", self.deposit_amount as f64)?;
        positive("kernel_mass", self.kernel_mass as f64)?;
        Ok(())
    }

    /// Number of cells in the field.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }
}

fn finite(name: &str, v: f64) -> CoreResult<()> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(CoreError::Config(format!("{name} must be finite, got {v}")))
    }
}

fn positive(name: &str, v: f64) -> CoreResult<()> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(CoreError::Config(format!("{name} must be positive, got {v}")))
    }
}
