//! The `Sim` struct and its tick loop.

use ph_agent::{AgentRngs, Population, SteerChoice};
use ph_core::{PhysarumConfig, Tick, TickModel};
use ph_field::{CellIndex, FieldSnapshot, FieldView, TrailField};
use tracing::debug;

use crate::{SimObserver, SimResult};

/// What happened during one tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TickSummary {
    /// The tick that just completed.
    pub tick:   Tick,
    /// Agents whose heading changed this tick.
    pub turned: usize,
    /// Total trail mass after diffusion.
    pub mass:   f64,
}

/// The main simulation runner.
///
/// `Sim` is the sole owner of the trail field and the agent population.
/// Each [`tick`](Sim::tick) runs the agent phase under the configured
/// [`TickModel`] and then diffuses the field exactly once.
///
/// The field is never handed out mutably; [`snapshot`](Sim::snapshot)
/// returns a borrowed read-only view, which the borrow checker keeps from
/// outliving the next tick.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    pub(crate) config:     PhysarumConfig,
    pub(crate) now:        Tick,
    pub(crate) field:      TrailField,
    pub(crate) population: Population,
    pub(crate) rngs:       AgentRngs,

    /// Tick-start copy of the field, sensed by the snapshot model.
    pub(crate) frozen:     Option<FieldSnapshot>,
    /// Per-agent `(decision, deposit cell)` buffered by the snapshot model.
    pub(crate) moves:      Vec<(SteerChoice, CellIndex)>,
}

impl Sim {
    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &PhysarumConfig {
        &self.config
    }

    /// The next tick to be simulated (equals the number of completed ticks).
    pub fn current_tick(&self) -> Tick {
        self.now
    }

    /// Read-only view of the field as of the last completed tick.
    pub fn snapshot(&self) -> FieldView<'_> {
        self.field.view()
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick to `config.total_ticks`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.now.0 < self.config.total_ticks {
            self.observed_tick(observer);
        }
        observer.on_sim_end(self.now);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores
    /// `total_ticks`).
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.observed_tick(observer);
        }
        Ok(())
    }

    /// Step every agent, then diffuse the field once.
    pub fn tick(&mut self) -> TickSummary {
        let now = self.now;
        let turned = match self.config.tick_model {
            TickModel::Sequential => self.step_sequential(),
            TickModel::Snapshot => self.step_snapshot(),
        };
        self.field.diffuse();
        self.now = now.next();

        let summary = TickSummary { tick: now, turned, mass: self.field.total_mass() };
        debug!(tick = %now, turned, mass = summary.mass, "tick complete");
        summary
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn observed_tick<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.now;
        observer.on_tick_start(now);
        let summary = self.tick();
        observer.on_tick_end(&summary);
        if now.is_on_interval(self.config.snapshot_interval_ticks) {
            observer.on_snapshot(now, &self.field.view());
        }
    }

    /// Agents in ascending id order against the live field.
    fn step_sequential(&mut self) -> usize {
        let amount = self.config.deposit_amount;
        let field = &mut self.field;
        self.population
            .agents_mut()
            .iter_mut()
            .zip(self.rngs.as_mut_slice())
            .map(|(agent, rng)| agent.step(field, rng, amount).turns())
            .filter(|&turned| turned)
            .count()
    }

    /// Every agent senses the tick-start field; deposits land afterwards in
    /// ascending id order, so the result does not depend on scheduling.
    fn step_snapshot(&mut self) -> usize {
        let frozen = match self.frozen.take() {
            Some(mut frozen) => {
                self.field.copy_into(&mut frozen);
                frozen
            }
            None => self.field.snapshot(),
        };
        let view = self.frozen.insert(frozen).view();

        let agents = self.population.agents_mut();
        let rngs = self.rngs.as_mut_slice();
        self.moves.clear();

        #[cfg(not(feature = "parallel"))]
        self.moves.extend(
            agents
                .iter_mut()
                .zip(rngs.iter_mut())
                .map(|(agent, rng)| agent.sense_and_move(&view, rng)),
        );

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            self.moves.par_extend(
                agents
                    .par_iter_mut()
                    .zip(rngs.par_iter_mut())
                    .map(|(agent, rng)| agent.sense_and_move(&view, rng)),
            );
        }

        let amount = self.config.deposit_amount;
        let mut turned = 0;
        for &(choice, cell) in &self.moves {
            turned += usize::from(choice.turns());
            self.field.deposit(cell, amount);
        }
        turned
    }
}
