//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Fixed timestep only
//! - Stable iteration order (blocks row-major)
//! - No rendering or platform dependencies beyond the `Surface` trait

pub mod geom;
pub mod objects;
pub mod state;
pub mod tick;

pub use geom::{Axis, BoundingBox, Contact};
pub use objects::{Ball, BallEvent, Block, BlockGrid, GameObject, Paddle};
pub use state::{GamePhase, GameState};
pub use tick::{TickInput, tick};
