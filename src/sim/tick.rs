//! Fixed timestep simulation tick
//!
//! One tick applies input to the paddle, advances the ball, interprets the
//! ball's collision events and recomputes the win condition. Nothing here
//! touches the platform; the shell owns the frame loop and input wiring.

use super::objects::{BallEvent, GameObject};
use super::state::{GamePhase, GameState};

/// Input snapshot for a single tick
///
/// `left`/`right` are held-key flags; `toggle_demo` and `pointer_x` are
/// one-shot and cleared by the shell after the tick consumes them.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Move the paddle left (held)
    pub left: bool,
    /// Move the paddle right (held)
    pub right: bool,
    /// Flip demo mode (edge-triggered)
    pub toggle_demo: bool,
    /// Pointer x in surface coordinates; sets the paddle position directly
    pub pointer_x: Option<f32>,
}

/// Advance the game state by one timestep of `dt` seconds.
///
/// A no-op unless the phase is `Playing`; `Lost` and `Won` freeze gameplay
/// until the shell reconfigures the play field.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.phase() != GamePhase::Playing {
        return;
    }

    let bounds = state.bounds;

    if input.toggle_demo {
        state.demo = !state.demo;
        log::info!("demo mode: {}", state.demo);
    }

    if input.left {
        state.paddle.move_left(&bounds, dt);
    }
    if input.right {
        state.paddle.move_right(&bounds, dt);
    }

    // Pointer tracking bypasses speed-based movement, but never fights the
    // demo autopilot
    if let Some(x) = input.pointer_x
        && !state.demo
    {
        let x = x - state.paddle.bounds().w / 2.0;
        state.paddle.set_pos_in_bounds(&bounds, x);
    }

    // In demo mode the paddle follows the ball instead of the player
    if state.demo {
        let x = state.ball.bounds().x - state.paddle.bounds().w / 2.0;
        state.paddle.set_pos_in_bounds(&bounds, x);
    }

    let events = state
        .ball
        .step(&bounds, &mut state.paddle, &mut state.blocks, dt);

    for event in events {
        match event {
            BallEvent::LifeLost => state.lose_a_life(),
            BallEvent::BlockDestroyed { row, col } => {
                state.score += 1;
                log::debug!("block ({row}, {col}) destroyed, score {}", state.score);
            }
            BallEvent::PaddleHit => log::debug!("paddle bounce"),
        }
    }

    state.won = state.alive_blocks() == 0;
}
