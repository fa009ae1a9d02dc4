//! Derived progress for presentation.
//!
//! Pure functions over a session's countdown fields. Percentages are rounded
//! half up, and a zero-length denominator reports 0%.

use serde::Serialize;

use super::CookSession;

/// Percentage of `total_sec` already consumed, given what remains.
pub fn percent_elapsed(total_sec: u32, remaining_sec: u32) -> u8 {
    if total_sec == 0 {
        return 0;
    }
    let total = u64::from(total_sec);
    let elapsed = u64::from(total_sec.saturating_sub(remaining_sec));
    ((elapsed * 100 + total / 2) / total) as u8
}

/// `round(100 × (step_duration − step_remaining) / step_duration)`.
pub fn step_percent(step_duration_sec: u32, step_remaining_sec: u32) -> u8 {
    percent_elapsed(step_duration_sec, step_remaining_sec)
}

/// `round(100 × (total_duration − overall_remaining) / total_duration)`.
pub fn overall_percent(total_duration_sec: u32, overall_remaining_sec: u32) -> u8 {
    percent_elapsed(total_duration_sec, overall_remaining_sec)
}

/// Point-in-time view of a session, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionProgress {
    /// Recipe being cooked
    pub recipe_id: String,
    /// 0-based index of the current step
    pub step_index: usize,
    /// Number of steps in the recipe
    pub step_count: usize,
    /// Full duration of the current step
    pub step_duration_sec: u32,
    /// Time left in the current step
    pub step_remaining_sec: u32,
    /// Full duration of the recipe
    pub total_duration_sec: u32,
    /// Time left across the whole recipe
    pub overall_remaining_sec: u32,
    /// Current step completion, 0-100
    pub step_percent: u8,
    /// Whole recipe completion, 0-100
    pub overall_percent: u8,
    /// Whether the countdown is running
    pub is_running: bool,
}

impl SessionProgress {
    /// Derive progress from a session.
    pub fn from_session(session: &CookSession) -> Self {
        let step_duration_sec = session.step_duration_sec();
        let total_duration_sec = session.total_duration_sec();

        Self {
            recipe_id: session.recipe_id.clone(),
            step_index: session.current_step_index,
            step_count: session.step_count(),
            step_duration_sec,
            step_remaining_sec: session.step_remaining_sec,
            total_duration_sec,
            overall_remaining_sec: session.overall_remaining_sec,
            step_percent: step_percent(step_duration_sec, session.step_remaining_sec),
            overall_percent: overall_percent(total_duration_sec, session.overall_remaining_sec),
            is_running: session.is_running,
        }
    }

    /// 1-based step number for display.
    pub fn step_number(&self) -> usize {
        self.step_index + 1
    }
}
