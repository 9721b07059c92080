//! Run/pause/stop session state machine.
//!
//! The engine handle lives exactly as long as the session is running or
//! paused; stopping drops it. Commands that do not apply in the current
//! state are ignored, matching how the tool's front end treats repeated
//! clicks.

use super::{Optimizer, Progress, SampleSummary};
use crate::grid::GridSnapshot;

/// Session lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Running,
    Paused,
}

/// A best design captured out of the engine: an immutable snapshot plus its
/// scalar summary. Each capture fully supersedes the previous one.
#[derive(Debug, Clone)]
pub struct BestResult {
    pub snapshot: GridSnapshot,
    pub summary: SampleSummary,
}

/// Owns the engine handle and the run/pause/stop lifecycle.
pub struct Session<O: Optimizer> {
    state: SessionState,
    engine: Option<O>,
}

impl<O: Optimizer> Session<O> {
    pub fn new() -> Self {
        Session {
            state: SessionState::Idle,
            engine: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Start from idle, constructing the handle, or resume from pause.
    /// Ignored while already running.
    pub fn run<F>(&mut self, build: F)
    where
        F: FnOnce() -> O,
    {
        match self.state {
            SessionState::Idle => {
                self.engine = Some(build());
                self.state = SessionState::Running;
                log::info!("[session] idle -> running");
            }
            SessionState::Paused => {
                self.state = SessionState::Running;
                log::info!("[session] paused -> running");
            }
            SessionState::Running => {}
        }
    }

    /// Suspend stepping, keeping the handle. Ignored unless running.
    pub fn pause(&mut self) {
        if self.state == SessionState::Running {
            self.state = SessionState::Paused;
            log::info!("[session] running -> paused");
        }
    }

    /// Drop the handle and return to idle. Ignored when already idle.
    pub fn stop(&mut self) {
        if self.state != SessionState::Idle {
            self.engine = None;
            self.state = SessionState::Idle;
            log::info!("[session] stopped");
        }
    }

    /// Advance one step while running.
    ///
    /// Returns the engine's progress and, when the best result changed since
    /// the last step, a freshly captured [`BestResult`] superseding any
    /// previous one. Returns `None` while idle or paused.
    pub fn step(&mut self) -> Option<(Progress, Option<BestResult>)> {
        if self.state != SessionState::Running {
            return None;
        }
        let engine = self
            .engine
            .as_mut()
            .expect("running session always holds an engine");
        engine.step();
        let progress = engine.progress();

        let best = if engine.best_changed() {
            engine.best().and_then(|sample| {
                match GridSnapshot::capture(sample) {
                    Ok(snapshot) => Some(BestResult {
                        snapshot,
                        summary: sample.summary(),
                    }),
                    Err(error) => {
                        log::warn!("[session] discarding malformed best result: {}", error);
                        None
                    }
                }
            })
        } else {
            None
        };
        Some((progress, best))
    }
}

impl<O: Optimizer> Default for Session<O> {
    fn default() -> Self {
        Session::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TileId;
    use crate::grid::GridSource;
    use crate::optimizer::{Phase, ReactorSample};

    /// Scripted engine: finds a "best" on a fixed step number.
    struct Scripted {
        steps: u32,
        best_at: u32,
        sample: ScriptedSample,
        pending: bool,
    }

    struct ScriptedSample {
        data: Vec<TileId>,
    }

    impl GridSource for ScriptedSample {
        fn data(&self) -> &[TileId] {
            &self.data
        }
        fn shape(&self, _axis: usize) -> usize {
            1
        }
        fn stride(&self, _axis: usize) -> usize {
            1
        }
    }

    impl ReactorSample for ScriptedSample {
        fn summary(&self) -> SampleSummary {
            SampleSummary {
                power: 420.0,
                ..SampleSummary::default()
            }
        }
    }

    impl Scripted {
        fn new(best_at: u32) -> Self {
            Scripted {
                steps: 0,
                best_at,
                sample: ScriptedSample {
                    data: vec![TileId::AIR],
                },
                pending: false,
            }
        }
    }

    impl Optimizer for Scripted {
        fn step(&mut self) {
            self.steps += 1;
            if self.steps == self.best_at {
                self.pending = true;
            }
        }
        fn progress(&self) -> Progress {
            Progress {
                episode: 1,
                iteration: self.steps,
                phase: Phase::Stage(0),
            }
        }
        fn best_changed(&mut self) -> bool {
            std::mem::take(&mut self.pending)
        }
        fn best(&self) -> Option<&dyn ReactorSample> {
            if self.steps >= self.best_at {
                Some(&self.sample)
            } else {
                None
            }
        }
    }

    #[test]
    fn test_lifecycle_transitions() {
        let mut session: Session<Scripted> = Session::new();
        assert_eq!(session.state(), SessionState::Idle);

        session.run(|| Scripted::new(1));
        assert_eq!(session.state(), SessionState::Running);

        session.pause();
        assert_eq!(session.state(), SessionState::Paused);

        session.run(|| unreachable!("resume must not rebuild the engine"));
        assert_eq!(session.state(), SessionState::Running);

        session.stop();
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn test_inapplicable_commands_are_ignored() {
        let mut session: Session<Scripted> = Session::new();
        session.pause();
        assert_eq!(session.state(), SessionState::Idle);
        session.stop();
        assert_eq!(session.state(), SessionState::Idle);

        session.run(|| Scripted::new(1));
        session.run(|| unreachable!("run while running must be ignored"));
        assert_eq!(session.state(), SessionState::Running);
    }

    #[test]
    fn test_step_only_runs_while_running() {
        let mut session: Session<Scripted> = Session::new();
        assert!(session.step().is_none());

        session.run(|| Scripted::new(2));
        session.pause();
        assert!(session.step().is_none());
    }

    #[test]
    fn test_best_is_captured_once_per_change() {
        let mut session: Session<Scripted> = Session::new();
        session.run(|| Scripted::new(2));

        let (progress, best) = session.step().expect("running");
        assert_eq!(progress.iteration, 1);
        assert!(best.is_none());

        let (_, best) = session.step().expect("running");
        let best = best.expect("new best on step 2");
        assert_eq!(best.summary.power, 420.0);
        assert_eq!(best.snapshot.data(), &[TileId::AIR]);

        // Latched: no new best on the next step.
        let (_, best) = session.step().expect("running");
        assert!(best.is_none());
    }
}
