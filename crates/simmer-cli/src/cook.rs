//! Interactive cook-along loop.
//!
//! One task owns the engine and multiplexes three inputs with
//! `tokio::select!`: the refresh ticker, lines typed on stdin, and Ctrl-C.
//! Each ticker fire polls the engine, which reconciles elapsed time and moves
//! to the next step when the current one runs out.

use std::time::Duration;

use anyhow::{Result, bail};
use log::{debug, info};
use simmer_core::{
    Recipe,
    display::{CookScreen, MiniIndicator, OperationStatus},
    session::{Advance, CookEngine, PollOutcome, StartOutcome},
};
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    time::{MissedTickBehavior, interval},
};

use crate::renderer::TerminalRenderer;

const KEY_HELP: &str = "Keys: p pause/resume · n next step · s show step · q quit";

/// A command typed during a cook session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CookKey {
    PauseResume,
    Next,
    Show,
    Quit,
}

impl CookKey {
    fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "p" | "pause" | "resume" => Some(Self::PauseResume),
            "n" | "next" => Some(Self::Next),
            "" | "s" | "show" => Some(Self::Show),
            "q" | "quit" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Whether the loop keeps going after handling an event.
enum Flow {
    Continue,
    Done,
}

struct CookView<'a> {
    recipe: &'a Recipe,
    renderer: &'a TerminalRenderer,
}

impl CookView<'_> {
    fn screen(&self, engine: &CookEngine) -> Result<()> {
        match engine.progress(&self.recipe.id) {
            Some(progress) => self
                .renderer
                .render(&CookScreen::new(self.recipe, &progress).to_string()),
            None => Ok(()),
        }
    }

    fn indicator(&self, engine: &CookEngine) -> Result<()> {
        match engine.progress(&self.recipe.id) {
            Some(progress) => self
                .renderer
                .render_line(&MiniIndicator::new(self.recipe, &progress).to_string()),
            None => Ok(()),
        }
    }

    fn status(&self, status: OperationStatus) -> Result<()> {
        self.renderer.render_line(status.to_string().trim_end())
    }

    fn finished(&self) -> Result<()> {
        self.status(OperationStatus::success(format!(
            "Finished cooking '{}'",
            self.recipe.title
        )))
    }
}

/// Cook `recipe` until it finishes or the user quits.
pub async fn run(recipe: &Recipe, renderer: &TerminalRenderer, tick_ms: u64) -> Result<()> {
    let mut engine = CookEngine::new();
    match engine.start(recipe) {
        StartOutcome::Started => info!("Cooking {}", recipe.id),
        StartOutcome::NoSteps => bail!("Recipe '{}' has no steps to cook", recipe.title),
        other => bail!("Could not start cooking '{}': {other:?}", recipe.title),
    }

    let view = CookView { recipe, renderer };
    view.screen(&engine)?;
    renderer.render_line(KEY_HELP)?;

    let mut ticker = interval(Duration::from_millis(tick_ms));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately; nothing has elapsed yet
    ticker.tick().await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;

    loop {
        let flow = tokio::select! {
            _ = ticker.tick() => on_tick(&mut engine, &view)?,
            line = lines.next_line(), if stdin_open => match line? {
                Some(input) => on_input(&mut engine, &view, &input)?,
                None => {
                    debug!("stdin closed; timers keep running");
                    stdin_open = false;
                    Flow::Continue
                }
            },
            _ = tokio::signal::ctrl_c() => {
                engine.end_session(&recipe.id);
                view.status(OperationStatus::success(format!(
                    "Stopped cooking '{}'",
                    recipe.title
                )))?;
                Flow::Done
            }
        };

        if let Flow::Done = flow {
            return Ok(());
        }
    }
}

fn on_tick(engine: &mut CookEngine, view: &CookView<'_>) -> Result<Flow> {
    match engine.poll(&view.recipe.id) {
        PollOutcome::Idle => Ok(Flow::Continue),
        PollOutcome::Ticked { .. } => {
            view.indicator(engine)?;
            Ok(Flow::Continue)
        }
        PollOutcome::Advanced { step_index, .. } => {
            debug!("Step time is up, moving to step {step_index}");
            view.screen(engine)?;
            Ok(Flow::Continue)
        }
        PollOutcome::Finished { .. } => {
            view.finished()?;
            Ok(Flow::Done)
        }
    }
}

fn on_input(engine: &mut CookEngine, view: &CookView<'_>, input: &str) -> Result<Flow> {
    let recipe_id = view.recipe.id.as_str();
    let Some(key) = CookKey::parse(input) else {
        view.status(OperationStatus::failure(format!(
            "Unknown key '{}'. {KEY_HELP}",
            input.trim()
        )))?;
        return Ok(Flow::Continue);
    };

    match key {
        CookKey::PauseResume => {
            // Charge the time spent so far before the anchor moves
            engine.tick(recipe_id);
            let running = engine
                .session(recipe_id)
                .is_some_and(|session| session.is_running);
            engine.pause_resume(recipe_id, !running);
            let message = if running { "Paused" } else { "Resumed" };
            view.status(OperationStatus::success(message.to_string()))?;
            view.indicator(engine)?;
            Ok(Flow::Continue)
        }
        CookKey::Next => match engine.advance_or_end(recipe_id) {
            Advance::Moved { .. } => {
                view.screen(engine)?;
                Ok(Flow::Continue)
            }
            Advance::Ended | Advance::Ignored => {
                view.finished()?;
                Ok(Flow::Done)
            }
        },
        CookKey::Show => {
            view.screen(engine)?;
            Ok(Flow::Continue)
        }
        CookKey::Quit => {
            engine.end_session(recipe_id);
            view.status(OperationStatus::success(format!(
                "Stopped cooking '{}'",
                view.recipe.title
            )))?;
            Ok(Flow::Done)
        }
    }
}
