//! Brickfall - a classic block breaking game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (AABB collision, entities, game state)
//! - `render`: Drawing-surface abstraction + canvas 2D implementation
//! - `settings`: Key bindings and preferences

pub mod render;
pub mod settings;
pub mod sim;

pub use settings::{KeyBindings, Settings};

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Fixed simulation timestep (120 Hz for smooth physics)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 150.0;
    pub const PADDLE_HEIGHT: f32 = 25.0;
    /// Paddle speed in pixels per second
    pub const PADDLE_SPEED: f32 = 500.0;
    /// Distance from the paddle's top edge to the play field bottom
    pub const PADDLE_FLOOR_OFFSET: f32 = 30.0;

    /// Ball defaults (box is square, drawn as a circle)
    pub const BALL_SIZE: f32 = 25.0;
    /// Distance from the ball's top edge to the play field bottom at spawn
    pub const BALL_FLOOR_OFFSET: f32 = 55.0;
    /// Initial ball velocity, pixels per second (magnitude encodes speed)
    pub const BALL_START_VEL: Vec2 = Vec2::new(150.0, -300.0);

    /// Block layout
    pub const BLOCK_ROWS: usize = 3;
    pub const BLOCK_HEIGHT: f32 = 50.0;
    /// Minimum block width used to compute how many columns fit
    pub const BLOCK_MIN_WIDTH: f32 = 100.0;
    /// Margin on each side of a block
    pub const BLOCK_MARGIN: f32 = 2.0;
    /// Y coordinate of the first block row
    pub const BLOCK_TOP_OFFSET: f32 = 100.0;
    /// Vertical distance between block rows
    pub const BLOCK_ROW_STRIDE: f32 = 54.0;

    pub const INITIAL_LIVES: u32 = 3;
}
