//! The cook-session state machine.

use std::collections::HashMap;

use log::{debug, warn};
use serde::Serialize;

use super::{
    clock::{Clock, MonotonicClock},
    progress::SessionProgress,
};
use crate::models::Recipe;

/// Live countdown state for one recipe being cooked.
///
/// Step durations are copied out of the recipe when the session starts, so
/// editing the stored recipe afterwards never shifts a running countdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CookSession {
    /// Recipe being cooked
    pub recipe_id: String,
    /// 0-based index of the current step
    pub current_step_index: usize,
    /// Whether the countdown is running
    pub is_running: bool,
    /// Seconds left in the current step
    pub step_remaining_sec: u32,
    /// Seconds left across the whole recipe
    pub overall_remaining_sec: u32,
    /// Clock reading of the last reconciliation
    pub last_tick_ms: u64,
    /// Step durations in seconds, captured at start
    pub timeline: Vec<u32>,
}

impl CookSession {
    /// Number of steps in the captured timeline.
    pub fn step_count(&self) -> usize {
        self.timeline.len()
    }

    /// Full duration of the current step.
    pub fn step_duration_sec(&self) -> u32 {
        self.timeline
            .get(self.current_step_index)
            .copied()
            .unwrap_or(0)
    }

    /// Full duration of the recipe.
    pub fn total_duration_sec(&self) -> u32 {
        self.timeline
            .iter()
            .fold(0u32, |total, sec| total.saturating_add(*sec))
    }

    /// Whether the current step is the final one.
    pub fn is_last_step(&self) -> bool {
        self.current_step_index + 1 >= self.timeline.len()
    }

    /// Running or paused.
    pub fn state(&self) -> SessionState {
        if self.is_running {
            SessionState::Running
        } else {
            SessionState::Paused
        }
    }
}

/// Observable state of an existing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SessionState {
    Running,
    Paused,
}

/// Result of [`CookEngine::start`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum StartOutcome {
    /// A new session was created and is running.
    Started,
    /// A session for this recipe already existed; its progress is untouched.
    AlreadyStarted,
    /// Another recipe is being cooked; nothing changed.
    Conflict { active: String },
    /// The recipe has no steps to cook.
    NoSteps,
}

/// The step to move to in [`CookEngine::advance_step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextStep {
    /// Duration of the next step in seconds
    pub step_duration_sec: u32,
    /// New overall remaining time, or None to keep the current value
    pub overall_remaining_sec: Option<u32>,
}

/// Result of a step transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Advance {
    /// The session moved to `step_index`.
    Moved { step_index: usize },
    /// The session was finished and removed.
    Ended,
    /// No session, or nothing to advance to.
    Ignored,
}

/// Result of [`CookEngine::poll`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PollOutcome {
    /// No session, or the session is paused.
    Idle,
    /// Time was reconciled and the step is still going.
    Ticked { consumed: u32 },
    /// The step ran out and the session moved on.
    Advanced { step_index: usize, consumed: u32 },
    /// The final step ran out and the session ended.
    Finished { consumed: u32 },
}

/// Engine-wide state: every live session plus the one being cooked.
#[derive(Debug, Clone, Default)]
pub struct EngineState {
    active_recipe_id: Option<String>,
    sessions: HashMap<String, CookSession>,
}

/// Owns all cook sessions and drives their countdowns from a [`Clock`].
///
/// Every operation is synchronous and total: a call whose preconditions do
/// not hold changes nothing and says so through its return value.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
///
/// use simmer_core::session::{CookEngine, ManualClock, StartOutcome};
///
/// let clock = ManualClock::new();
/// let mut engine = CookEngine::with_clock(clock.clone());
///
/// assert_eq!(engine.start_timeline("stew", vec![60, 120]), StartOutcome::Started);
/// clock.advance(Duration::from_secs(10));
/// assert_eq!(engine.tick("stew"), 10);
///
/// let session = engine.session("stew").unwrap();
/// assert_eq!(session.step_remaining_sec, 50);
/// assert_eq!(session.overall_remaining_sec, 170);
/// ```
#[derive(Debug, Clone)]
pub struct CookEngine<C: Clock = MonotonicClock> {
    clock: C,
    state: EngineState,
}

impl CookEngine<MonotonicClock> {
    /// Create an engine on the monotonic wall clock.
    pub fn new() -> Self {
        Self::with_clock(MonotonicClock::new())
    }
}

impl Default for CookEngine<MonotonicClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> CookEngine<C> {
    /// Create an engine on the given clock.
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            state: EngineState::default(),
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Start cooking a recipe, capturing its step durations.
    pub fn start(&mut self, recipe: &Recipe) -> StartOutcome {
        self.start_timeline(&recipe.id, recipe.step_durations_sec())
    }

    /// Start a session from explicit step durations in seconds.
    pub fn start_timeline(&mut self, recipe_id: &str, timeline: Vec<u32>) -> StartOutcome {
        if let Some(active) = &self.state.active_recipe_id
            && active != recipe_id
        {
            warn!("Refusing to start {recipe_id}: {active} is already cooking");
            return StartOutcome::Conflict {
                active: active.clone(),
            };
        }
        if self.state.sessions.contains_key(recipe_id) {
            debug!("Session for {recipe_id} already running");
            return StartOutcome::AlreadyStarted;
        }
        let Some(&first) = timeline.first() else {
            warn!("Refusing to start {recipe_id}: recipe has no steps");
            return StartOutcome::NoSteps;
        };

        let session = CookSession {
            recipe_id: recipe_id.to_string(),
            current_step_index: 0,
            is_running: true,
            step_remaining_sec: first,
            overall_remaining_sec: timeline
                .iter()
                .fold(0u32, |total, sec| total.saturating_add(*sec)),
            last_tick_ms: self.clock.now_ms(),
            timeline,
        };
        debug!(
            "Started {recipe_id}: {} steps, {}s total",
            session.step_count(),
            session.overall_remaining_sec
        );

        self.state.sessions.insert(recipe_id.to_string(), session);
        self.state.active_recipe_id = Some(recipe_id.to_string());
        StartOutcome::Started
    }

    /// Reconcile a running session against the clock.
    ///
    /// Whole seconds since the last reconciliation come off both countdowns,
    /// floored at zero. Returns the seconds consumed, 0 when the session is
    /// missing or paused.
    pub fn tick(&mut self, recipe_id: &str) -> u32 {
        let now = self.clock.now_ms();
        let Some(session) = self.state.sessions.get_mut(recipe_id) else {
            return 0;
        };
        if !session.is_running {
            return 0;
        }

        let delta_sec = u32::try_from(now.saturating_sub(session.last_tick_ms) / 1000)
            .unwrap_or(u32::MAX);
        session.last_tick_ms = now;
        if delta_sec == 0 {
            return 0;
        }

        session.step_remaining_sec = session.step_remaining_sec.saturating_sub(delta_sec);
        session.overall_remaining_sec = session.overall_remaining_sec.saturating_sub(delta_sec);
        delta_sec
    }

    /// Pause (`false`) or resume (`true`) a session. The anchor is reset
    /// either way, so time spent paused is never charged. Returns whether the
    /// session exists.
    pub fn pause_resume(&mut self, recipe_id: &str, is_running: bool) -> bool {
        let now = self.clock.now_ms();
        let Some(session) = self.state.sessions.get_mut(recipe_id) else {
            return false;
        };

        session.is_running = is_running;
        session.last_tick_ms = now;
        debug!(
            "{} {recipe_id}",
            if is_running { "Resumed" } else { "Paused" }
        );
        true
    }

    /// Move to the next step, or end the session when `next` is None.
    pub fn advance_step(&mut self, recipe_id: &str, next: Option<NextStep>) -> Advance {
        let now = self.clock.now_ms();
        let Some(next) = next else {
            return if self.end_session(recipe_id) {
                Advance::Ended
            } else {
                Advance::Ignored
            };
        };
        let Some(session) = self.state.sessions.get_mut(recipe_id) else {
            return Advance::Ignored;
        };
        if session.is_last_step() {
            warn!("Ignoring advance past the final step of {recipe_id}");
            return Advance::Ignored;
        }

        session.current_step_index += 1;
        session.step_remaining_sec = next.step_duration_sec;
        if let Some(overall) = next.overall_remaining_sec {
            session.overall_remaining_sec = overall;
        }
        session.is_running = true;
        session.last_tick_ms = now;

        debug!(
            "{recipe_id} moved to step {} ({}s)",
            session.current_step_index, session.step_remaining_sec
        );
        Advance::Moved {
            step_index: session.current_step_index,
        }
    }

    /// Remove a session. Returns whether one was removed.
    pub fn end_session(&mut self, recipe_id: &str) -> bool {
        let removed = self.state.sessions.remove(recipe_id).is_some();
        if self.state.active_recipe_id.as_deref() == Some(recipe_id) {
            self.state.active_recipe_id = None;
        }
        if removed {
            debug!("Ended session for {recipe_id}");
        }
        removed
    }

    /// Whether the session is on its final step. False without a session.
    pub fn is_last_step(&self, recipe_id: &str) -> bool {
        self.state
            .sessions
            .get(recipe_id)
            .is_some_and(CookSession::is_last_step)
    }

    /// End the session on its final step, otherwise move to the next one.
    ///
    /// The unspent remainder of the current step is dropped from the overall
    /// countdown, so a manual skip and a natural expiry land in the same
    /// place.
    pub fn advance_or_end(&mut self, recipe_id: &str) -> Advance {
        let Some(session) = self.state.sessions.get(recipe_id) else {
            return Advance::Ignored;
        };
        if session.is_last_step() {
            return self.advance_step(recipe_id, None);
        }

        let next = NextStep {
            step_duration_sec: session.timeline[session.current_step_index + 1],
            overall_remaining_sec: Some(
                session
                    .overall_remaining_sec
                    .saturating_sub(session.step_remaining_sec),
            ),
        };
        self.advance_step(recipe_id, Some(next))
    }

    /// Tick, then advance or finish while the running step has run out.
    ///
    /// Calls less than a second after the last reconciliation leave the
    /// anchor alone, so a driver may poll at any rate without starving the
    /// countdown. Seconds past the end of a step are charged to the steps
    /// that follow, so one poll after a long gap lands where a steady
    /// ticker would have.
    pub fn poll(&mut self, recipe_id: &str) -> PollOutcome {
        let now = self.clock.now_ms();
        let Some(session) = self.state.sessions.get(recipe_id) else {
            return PollOutcome::Idle;
        };
        if !session.is_running {
            return PollOutcome::Idle;
        }
        if session.step_remaining_sec > 0 && now.saturating_sub(session.last_tick_ms) < 1000 {
            return PollOutcome::Ticked { consumed: 0 };
        }

        let step_before = session.step_remaining_sec;
        let consumed = self.tick(recipe_id);
        let mut overflow = consumed.saturating_sub(step_before);
        let mut moved_to = None;

        loop {
            let expired = self
                .state
                .sessions
                .get(recipe_id)
                .is_some_and(|session| session.step_remaining_sec == 0);
            if !expired {
                break;
            }

            match self.advance_or_end(recipe_id) {
                Advance::Moved { step_index } => {
                    moved_to = Some(step_index);
                    // The overall countdown was already charged by the tick
                    if overflow > 0
                        && let Some(session) = self.state.sessions.get_mut(recipe_id)
                    {
                        let carried = overflow.min(session.step_remaining_sec);
                        session.step_remaining_sec -= carried;
                        overflow -= carried;
                    }
                }
                Advance::Ended => return PollOutcome::Finished { consumed },
                Advance::Ignored => break,
            }
        }

        match moved_to {
            Some(step_index) => {
                debug!("{recipe_id} caught up to step {step_index}");
                PollOutcome::Advanced {
                    step_index,
                    consumed,
                }
            }
            None => PollOutcome::Ticked { consumed },
        }
    }

    pub fn session(&self, recipe_id: &str) -> Option<&CookSession> {
        self.state.sessions.get(recipe_id)
    }

    pub fn active_recipe_id(&self) -> Option<&str> {
        self.state.active_recipe_id.as_deref()
    }

    pub fn active_session(&self) -> Option<&CookSession> {
        self.active_recipe_id().and_then(|id| self.session(id))
    }

    pub fn is_active(&self, recipe_id: &str) -> bool {
        self.active_recipe_id() == Some(recipe_id)
    }

    /// Progress snapshot of a session.
    pub fn progress(&self, recipe_id: &str) -> Option<SessionProgress> {
        self.session(recipe_id).map(SessionProgress::from_session)
    }
}
