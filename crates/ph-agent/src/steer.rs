//! The steering policy: three sensor readings in, one turn decision out.

/// Field values read at the three sensor probes.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Probes {
    pub left:   f32,
    pub center: f32,
    pub right:  f32,
}

/// What an agent does with its heading after sensing.
///
/// Variants are listed in evaluation order; the first that matches wins.
/// Ties are asymmetric: `left == center < right` is not a local
/// minimum, so it falls through to [`TurnRight`](SteerChoice::TurnRight).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SteerChoice {
    /// Centre is strictly greater than both sides: keep going.
    Ahead,
    /// Centre is strictly less than both sides: turn left or right at random.
    Random,
    /// `left < right`: rotate clockwise (subtract).
    TurnRight,
    /// `right < left`: rotate counter-clockwise (add).
    TurnLeft,
    /// Any remaining tie: keep going.
    Hold,
}

impl SteerChoice {
    pub fn decide(p: Probes) -> Self {
        let Probes { left, center, right } = p;
        if center > left && center > right {
            SteerChoice::Ahead
        } else if center < left && center < right {
            SteerChoice::Random
        } else if left < right {
            SteerChoice::TurnRight
        } else if right < left {
            SteerChoice::TurnLeft
        } else {
            SteerChoice::Hold
        }
    }

    /// `true` if this choice rotates the heading.
    pub fn turns(self) -> bool {
        matches!(self, SteerChoice::Random | SteerChoice::TurnRight | SteerChoice::TurnLeft)
    }
}
