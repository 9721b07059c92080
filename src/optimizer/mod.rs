//! Interface to the external optimization engine.
//!
//! The engine that actually searches for layouts is an opaque collaborator;
//! this crate only consumes it through the narrow query surface below. A
//! best-result grid is read through [`GridSource`](crate::grid::GridSource)
//! and copied into a [`GridSnapshot`](crate::grid::GridSnapshot) before
//! anything downstream touches it.

pub mod session;

pub use session::{BestResult, Session, SessionState};

use crate::grid::GridSource;
use std::fmt;

/// Scalar summary of one evaluated design, consumed verbatim for display.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SampleSummary {
    /// Max power, FE/t.
    pub power: f64,
    /// Heat, H/t.
    pub heat: f64,
    /// Cooling, H/t.
    pub cooling: f64,
    /// Net heat, H/t.
    pub net_heat: f64,
    /// Fraction of time the reactor can run, 0..1.
    pub duty_cycle: f64,
    /// Fuel use rate multiplier.
    pub fuel_use_rate: f64,
    /// Efficiency fraction, 0..1.
    pub efficiency: f64,
    /// Average power over the duty cycle, FE/t.
    pub avg_power: f64,
}

/// One best-so-far design as exposed by the engine.
pub trait ReactorSample: GridSource {
    fn summary(&self) -> SampleSummary;
}

/// Where the engine currently is in its search schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Training,
    Inference,
    Stage(u32),
}

/// Progress counters reported after every step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub episode: u32,
    pub iteration: u32,
    pub phase: Phase,
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.phase {
            Phase::Training => write!(
                f,
                "Episode {}, training iteration {}",
                self.episode, self.iteration
            ),
            Phase::Inference => write!(
                f,
                "Episode {}, inference iteration {}",
                self.episode, self.iteration
            ),
            Phase::Stage(stage) => write!(
                f,
                "Episode {}, stage {}, iteration {}",
                self.episode, stage, self.iteration
            ),
        }
    }
}

/// Handle to a running optimization engine.
///
/// Implementations own the search; callers drive it one interactive slice at
/// a time and poll for newly found best results.
pub trait Optimizer {
    /// Advance the search by one interactive slice.
    fn step(&mut self);

    /// Progress counters for the slice just run.
    fn progress(&self) -> Progress;

    /// True once per newly found best result; reading it latches it off.
    fn best_changed(&mut self) -> bool;

    /// Current best design, if the search has produced one yet.
    fn best(&self) -> Option<&dyn ReactorSample>;
}
