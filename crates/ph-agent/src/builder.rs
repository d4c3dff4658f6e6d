//! Fluent builder for constructing `Population` + `AgentRngs` in one step.
//!
//! # Usage
//!
//! ```rust
//! use ph_agent::PopulationBuilder;
//! use ph_core::AgentParams;
//!
//! let (population, rngs) = PopulationBuilder::new(1_000, /*seed=*/ 42)
//!     .params(AgentParams::default())
//!     .build(500, 500)
//!     .unwrap();
//!
//! assert_eq!(population.len(), 1_000);
//! assert_eq!(rngs.len(), 1_000);
//! ```

use ph_core::{AgentParams, CoreError, Direction, SimRng};

use crate::{Agent, AgentError, AgentResult, AgentRngs, AgentState, Population, Position};

/// Offset mixed into the seed used for placement so that it never shares a
/// stream with `AgentRng::new(seed, AgentId(0))`.
const PLACEMENT_STREAM: u64 = 0x5151_f00d_cafe_d00d;

/// Fluent builder for [`Population`] + [`AgentRngs`].
///
/// Without [`states`](Self::states), every agent gets a uniformly random
/// position inside the field and a uniformly random heading, drawn from a
/// [`SimRng`] derived from `seed`.
pub struct PopulationBuilder {
    count:  usize,
    seed:   u64,
    params: AgentParams,
    states: Option<Vec<AgentState>>,
}

impl PopulationBuilder {
    /// Create a builder for `count` agents using `seed` as the global RNG seed.
    pub fn new(count: usize, seed: u64) -> Self {
        Self {
            count,
            seed,
            params: AgentParams::default(),
            states: None,
        }
    }

    /// Sensing and steering constants applied to every agent.
    pub fn params(mut self, params: AgentParams) -> Self {
        self.params = params;
        self
    }

    /// Place agents explicitly.  Must be length `count`; positions outside
    /// the field are wrapped into it.
    pub fn states(mut self, states: Vec<AgentState>) -> Self {
        self.states = Some(states);
        self
    }

    /// Validate inputs and construct `Population` and `AgentRngs` for a
    /// `width × height` field.
    pub fn build(self, width: usize, height: usize) -> AgentResult<(Population, AgentRngs)> {
        if width == 0 || height == 0 {
            return Err(CoreError::Config(format!(
                "field dimensions must be non-zero, got {width}x{height}"
            ))
            .into());
        }
        if self.count == 0 {
            return Err(CoreError::Config("population must be non-zero".into()).into());
        }
        self.params.validate()?;

        let states = match self.states {
            Some(s) => {
                if s.len() != self.count {
                    return Err(AgentError::CountMismatch { expected: self.count, got: s.len() });
                }
                if let Some((i, bad)) = s.iter().enumerate().find(|(_, st)| !is_finite(st)) {
                    return Err(CoreError::Config(format!(
                        "initial state of agent {i} is not finite: {bad:?}"
                    ))
                    .into());
                }
                s
            }
            None => random_states(self.count, self.seed, width, height),
        };

        let agents = states
            .into_iter()
            .map(|s| Agent::new(s, &self.params, width, height))
            .collect();

        Ok((Population::new(agents), AgentRngs::new(self.count, self.seed)))
    }
}

fn is_finite(state: &AgentState) -> bool {
    state.position.x.is_finite()
        && state.position.y.is_finite()
        && state.heading.radians().is_finite()
}

fn random_states(count: usize, seed: u64, width: usize, height: usize) -> Vec<AgentState> {
    let mut rng = SimRng::new(seed ^ PLACEMENT_STREAM);
    (0..count)
        .map(|_| {
            let x = rng.gen_range(0.0..width as f64);
            let y = rng.gen_range(0.0..height as f64);
            AgentState {
                position: Position::new(x, y),
                heading:  Direction::random(rng.inner()),
            }
        })
        .collect()
}
