//! Fluent builder for constructing a [`Sim`].

use ph_agent::{AgentState, PopulationBuilder};
use ph_core::{PhysarumConfig, Tick};
use ph_field::TrailField;
use tracing::info;

use crate::{Sim, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`PhysarumConfig`] — field size, population, steering constants, …
///
/// # Optional inputs (have defaults)
///
/// | Method         | Default                                            |
/// |----------------|----------------------------------------------------|
/// | `.agents(v)`   | Uniformly random positions and headings from seed  |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .agents(initial_states)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config: PhysarumConfig,
    agents: Option<Vec<AgentState>>,
}

impl SimBuilder {
    pub fn new(config: PhysarumConfig) -> Self {
        Self { config, agents: None }
    }

    /// Supply the initial state of every agent (must be length
    /// `config.population`).  Positions outside the field are wrapped.
    pub fn agents(mut self, states: Vec<AgentState>) -> Self {
        self.agents = Some(states);
        self
    }

    /// Validate the configuration, allocate the field, place the population,
    /// and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        let config = self.config;
        config.validate()?;

        let field = TrailField::from_config(&config)?;

        let mut population = PopulationBuilder::new(config.population, config.seed)
            .params(config.agent);
        if let Some(states) = self.agents {
            population = population.states(states);
        }
        let (population, rngs) = population.build(config.width, config.height)?;

        info!(
            width = config.width,
            height = config.height,
            population = population.len(),
            model = ?config.tick_model,
            border = ?config.border,
            policy = ?config.deposit_policy,
            seed = config.seed,
            "simulation built"
        );

        Ok(Sim {
            config,
            now: Tick::ZERO,
            field,
            population,
            rngs,
            frozen: None,
            moves: Vec::new(),
        })
    }
}
