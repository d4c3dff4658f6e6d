//! A single trail-following agent.

use ph_core::{AgentParams, AgentRng, Direction};
use ph_field::grid::wrap_coord;
use ph_field::{CellIndex, FieldView, TrailField};

use crate::{Probes, SteerChoice};

/// Continuous position in field coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Move `distance` along `dir` and wrap into `width × height`.
    #[inline]
    pub fn advanced(self, dir: Direction, distance: f64, width: usize, height: usize) -> Self {
        let (ux, uy) = dir.unit();
        Self {
            x: wrap_coord(self.x + distance * ux, width as f64),
            y: wrap_coord(self.y + distance * uy, height as f64),
        }
    }

    /// `true` if inside `[0, width) × [0, height)`.
    #[inline]
    pub fn is_within(self, width: usize, height: usize) -> bool {
        (0.0..width as f64).contains(&self.x) && (0.0..height as f64).contains(&self.y)
    }
}

/// The mutable part of an agent: where it is and where it is facing.
///
/// Supplied to [`PopulationBuilder::states`](crate::PopulationBuilder::states)
/// to place agents explicitly.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentState {
    pub position: Position,
    pub heading:  Direction,
}

/// One mobile particle.
///
/// The four steering constants are fixed at construction.  Each step the
/// agent senses, turns, moves, and reports the cell it now occupies.
#[derive(Clone, Debug, PartialEq)]
pub struct Agent {
    position:        Position,
    heading:         Direction,
    sensor_angle:    Direction,
    sensor_distance: f64,
    rotation_step:   Direction,
    step_size:       f64,
}

impl Agent {
    /// Build an agent at `state` inside a `width × height` field.
    ///
    /// The position is wrapped into the field; `params` are assumed to have
    /// passed [`AgentParams::validate`].
    pub fn new(state: AgentState, params: &AgentParams, width: usize, height: usize) -> Self {
        Self {
            position: Position::new(
                wrap_coord(state.position.x, width as f64),
                wrap_coord(state.position.y, height as f64),
            ),
            heading:         state.heading,
            sensor_angle:    Direction::from_angle(params.sensor_angle),
            sensor_distance: params.sensor_distance,
            rotation_step:   Direction::from_angle(params.rotation_step),
            step_size:       params.step_size,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    #[inline]
    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn state(&self) -> AgentState {
        AgentState { position: self.position, heading: self.heading }
    }

    pub fn sensor_angle(&self) -> Direction {
        self.sensor_angle
    }

    pub fn sensor_distance(&self) -> f64 {
        self.sensor_distance
    }

    pub fn rotation_step(&self) -> Direction {
        self.rotation_step
    }

    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    // ── Behaviour ─────────────────────────────────────────────────────────

    /// Sense, turn, move, and deposit on the live field.
    ///
    /// Returns the steering decision that was taken.
    pub fn step(&mut self, field: &mut TrailField, rng: &mut AgentRng, deposit: f32) -> SteerChoice {
        let (choice, cell) = self.sense_and_move(&field.view(), rng);
        field.deposit(cell, deposit);
        choice
    }

    /// Sense `view`, turn, and move; return the decision and the cell the
    /// agent should deposit into.
    ///
    /// Leaves the deposit to the caller so that sensing can read a tick-start
    /// snapshot while deposits are buffered.
    pub fn sense_and_move(&mut self, view: &FieldView<'_>, rng: &mut AgentRng) -> (SteerChoice, CellIndex) {
        let choice = self.reorient(view, rng);
        self.position = self
            .position
            .advanced(self.heading, self.step_size, view.width(), view.height());
        (choice, view.cell_at(self.position.x, self.position.y))
    }

    /// Read the left, centre and right probes.
    pub fn sense(&self, view: &FieldView<'_>) -> Probes {
        let probe = |dir: Direction| {
            let (ux, uy) = dir.unit();
            view.sample(
                self.position.x + self.sensor_distance * ux,
                self.position.y + self.sensor_distance * uy,
            )
        };
        Probes {
            left:   probe(self.heading + self.sensor_angle),
            center: probe(self.heading),
            right:  probe(self.heading - self.sensor_angle),
        }
    }

    /// Sense and replace the heading according to the steering policy.
    pub fn reorient(&mut self, view: &FieldView<'_>, rng: &mut AgentRng) -> SteerChoice {
        let choice = SteerChoice::decide(self.sense(view));
        match choice {
            SteerChoice::Ahead | SteerChoice::Hold => {}
            SteerChoice::Random => {
                let sign = rng.sign();
                self.heading = self.heading + self.turn(rng).scale(sign);
            }
            SteerChoice::TurnRight => {
                self.heading = self.heading - self.turn(rng);
            }
            SteerChoice::TurnLeft => {
                self.heading = self.heading + self.turn(rng);
            }
        }
        choice
    }

    /// `rotation_step * uniform(0.5, 1.0)`.
    #[inline]
    fn turn(&self, rng: &mut AgentRng) -> Direction {
        self.rotation_step * rng.gen_range(0.5..1.0)
    }
}
