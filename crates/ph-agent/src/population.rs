//! Agent storage: `Population` (agents) and `AgentRngs` (per-agent RNG).
//!
//! # Why two structs?
//!
//! The agent phase needs `&mut` access to each agent and to its RNG while the
//! simulation also holds `&mut TrailField` (sequential model) or `&FieldView`
//! (snapshot model).  Keeping RNGs in a separate struct lets the tick loop
//! zip the two slices without fighting the borrow checker:
//!
//! ```ignore
//! // ph-sim snapshot model (simplified):
//! let view = snapshot.view();
//! let cells: Vec<_> = population.agents_mut()
//!     .par_iter_mut()
//!     .zip(rngs.as_mut_slice())
//!     .map(|(agent, rng)| agent.sense_and_move(&view, rng).1)
//!     .collect();
//! ```

use ph_core::{AgentId, AgentRng};

use crate::Agent;

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state, separated from [`Population`].
///
/// Index `i` belongs to `AgentId(i)` for the whole run.
pub struct AgentRngs {
    inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-agent RNGs from `global_seed`.
    pub fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(global_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    /// All RNGs in `AgentId` order.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [AgentRng] {
        &mut self.inner
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── Population ────────────────────────────────────────────────────────────────

/// The fixed set of agents for one run.  No agent is ever added or removed
/// after construction; `AgentId(i)` is always `agents()[i]`.
pub struct Population {
    agents: Vec<Agent>,
}

impl Population {
    pub(crate) fn new(agents: Vec<Agent>) -> Self {
        Self { agents }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    #[inline]
    pub fn get(&self, agent: AgentId) -> Option<&Agent> {
        self.agents.get(agent.index())
    }

    /// Read-only slice of all agents in `AgentId` order.
    #[inline]
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Mutable slice of all agents.  Length is fixed.
    #[inline]
    pub fn agents_mut(&mut self) -> &mut [Agent] {
        &mut self.agents
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.agents.len() as u32).map(AgentId)
    }
}
