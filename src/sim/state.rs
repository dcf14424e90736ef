//! Game state and lifecycle
//!
//! One `GameState` per play surface. Entities are rebuilt from the surface
//! size by `reconfigure`, which is the only way back to `Playing` once a
//! session has been won or lost.

use super::geom::BoundingBox;
use super::objects::{Ball, Block, BlockGrid, Paddle};
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Out of lives; terminal until reconfigure
    Lost,
    /// Every block destroyed; terminal until reconfigure
    Won,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// The play field
    pub bounds: BoundingBox,
    pub paddle: Paddle,
    pub ball: Ball,
    pub blocks: BlockGrid,
    pub lives: u32,
    pub score: u64,
    pub won: bool,
    /// Demo mode: paddle auto-tracks the ball instead of reading input
    pub demo: bool,
}

impl GameState {
    /// Create a fresh game sized to the play surface
    pub fn new(width: f32, height: f32) -> Self {
        let bounds = BoundingBox::new(0.0, 0.0, width, height);
        Self {
            bounds,
            paddle: Paddle::new(paddle_spawn(&bounds), PADDLE_SPEED),
            ball: Ball::new(ball_spawn(&bounds), BALL_START_VEL),
            blocks: build_block_grid(&bounds),
            lives: INITIAL_LIVES,
            score: 0,
            won: false,
            demo: false,
        }
    }

    /// Full reset against a (possibly changed) surface size: lives, score,
    /// blocks and positions all reinitialize. Called by the shell when the
    /// canvas backing size changes. Demo mode is a session-level toggle and
    /// survives the reset.
    pub fn reconfigure(&mut self, width: f32, height: f32) {
        let demo = self.demo;
        *self = Self::new(width, height);
        self.demo = demo;
        log::info!("play field reconfigured to {width}x{height}");
    }

    /// Derived phase; `Lost` and `Won` freeze gameplay updates
    pub fn phase(&self) -> GamePhase {
        if self.won {
            GamePhase::Won
        } else if self.lives == 0 {
            GamePhase::Lost
        } else {
            GamePhase::Playing
        }
    }

    /// Count of blocks still standing
    pub fn alive_blocks(&self) -> usize {
        self.blocks.alive_count()
    }

    /// Decrement lives; while lives remain, the ball and paddle respawn at
    /// their initial positions (and the ball at its initial velocity).
    /// Score is untouched.
    pub fn lose_a_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        if self.lives > 0 {
            self.paddle.respawn(paddle_spawn(&self.bounds));
            self.ball.respawn(ball_spawn(&self.bounds), BALL_START_VEL);
        } else {
            log::info!("game over with score {}", self.score);
        }
    }
}

fn paddle_spawn(bounds: &BoundingBox) -> BoundingBox {
    BoundingBox::new(
        bounds.x + bounds.w / 2.0 - PADDLE_WIDTH / 2.0,
        bounds.bottom() - PADDLE_FLOOR_OFFSET,
        PADDLE_WIDTH,
        PADDLE_HEIGHT,
    )
}

fn ball_spawn(bounds: &BoundingBox) -> BoundingBox {
    BoundingBox::new(
        bounds.x + bounds.w / 2.0 - BALL_SIZE / 2.0,
        bounds.bottom() - BALL_FLOOR_OFFSET,
        BALL_SIZE,
        BALL_SIZE,
    )
}

/// Lay out the block grid for the given play field.
///
/// As many minimum-width cells (block + margins) as fit decide the column
/// count, then the blocks widen to fill the row exactly.
fn build_block_grid(bounds: &BoundingBox) -> BlockGrid {
    let cell = BLOCK_MIN_WIDTH + 2.0 * BLOCK_MARGIN;
    let cols = ((bounds.w / cell).floor() as usize).max(1);
    let block_width = bounds.w / cols as f32 - 2.0 * BLOCK_MARGIN;

    let mut blocks = Vec::with_capacity(BLOCK_ROWS * cols);
    for row in 0..BLOCK_ROWS {
        for col in 0..cols {
            blocks.push(Block::new(BoundingBox::new(
                bounds.x + BLOCK_MARGIN + (block_width + 2.0 * BLOCK_MARGIN) * col as f32,
                BLOCK_TOP_OFFSET + BLOCK_ROW_STRIDE * row as f32,
                block_width,
                BLOCK_HEIGHT,
            )));
        }
    }
    BlockGrid::new(blocks, BLOCK_ROWS, cols)
}
