//! Cook sessions: timed, step-by-step progress through a recipe.
//!
//! A [`CookEngine`] holds at most one active session. Each session keeps two
//! countdowns, one for the current step and one for the whole recipe, and
//! reconciles them against a [`Clock`] whenever it is ticked. Ticks are
//! delta-based, so a driver may tick late, irregularly, or only when someone
//! asks for the status; the countdowns come out the same.
//!
//! The engine never advances a step on its own during [`CookEngine::tick`].
//! Drivers call [`CookEngine::poll`] to tick and then move on when the step
//! has run out, or [`CookEngine::advance_or_end`] for a manual skip.

mod clock;
mod engine;
mod progress;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use engine::{
    Advance, CookEngine, CookSession, EngineState, NextStep, PollOutcome, SessionState,
    StartOutcome,
};
pub use progress::{SessionProgress, overall_percent, percent_elapsed, step_percent};

#[cfg(test)]
mod tests;
