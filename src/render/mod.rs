//! Frame rendering
//!
//! The simulation draws through the [`Surface`] trait so it can be exercised
//! headless in tests; [`canvas::CanvasSurface`] implements it over a browser
//! canvas 2D context.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

use crate::sim::{GameObject, GamePhase, GameState};

/// Text alignment relative to the anchor point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Start,
    Center,
}

/// An opaque RGB fill color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255 };

    /// CSS color string for the canvas fill style
    pub fn css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// The drawing operations a rendering target must provide
pub trait Surface {
    /// Backing store size in surface coordinates
    fn size(&self) -> (f32, f32);
    /// Fill the whole surface with `color`
    fn clear(&mut self, color: Color);
    /// Select the fill color for subsequent shapes and text
    fn set_fill(&mut self, color: Color);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn fill_circle(&mut self, cx: f32, cy: f32, r: f32);
    fn fill_text(&mut self, text: &str, x: f32, y: f32, size_px: f32, align: TextAlign);
}

/// HUD layout
const SCORE_POS: (f32, f32) = (15.0, 58.0);
const SCORE_SIZE: f32 = 48.0;
const LIFE_DOT_RADIUS: f32 = 12.5;
const LIFE_DOT_Y: f32 = 25.0;
const LIFE_DOT_SPACING: f32 = 30.0;
const LIFE_DOT_RIGHT_MARGIN: f32 = 15.0;
const OVERLAY_SIZE: f32 = 32.0;

/// Draw one complete frame: background, blocks, paddle, ball (while
/// playing), score, remaining-life dots and the end-state overlay.
pub fn draw_frame(state: &GameState, surface: &mut dyn Surface) {
    surface.clear(Color::BLACK);
    surface.set_fill(Color::WHITE);

    for block in state.blocks.iter() {
        block.draw(surface);
    }

    state.paddle.draw(surface);
    // Hide the ball while the game isn't actively playing
    if state.phase() == GamePhase::Playing {
        state.ball.draw(surface);
    }

    surface.fill_text(
        &state.score.to_string(),
        SCORE_POS.0,
        SCORE_POS.1,
        SCORE_SIZE,
        TextAlign::Start,
    );

    for i in 0..state.lives {
        let x = (state.bounds.right() - LIFE_DOT_RIGHT_MARGIN) - LIFE_DOT_SPACING * i as f32;
        surface.fill_circle(x, LIFE_DOT_Y, LIFE_DOT_RADIUS);
    }

    let center = state.bounds.center();
    match state.phase() {
        GamePhase::Lost => {
            surface.fill_text("Game over!", center.x, center.y, OVERLAY_SIZE, TextAlign::Center);
        }
        GamePhase::Won => {
            surface.fill_text("You Won!", center.x, center.y, OVERLAY_SIZE, TextAlign::Center);
        }
        GamePhase::Playing => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Cmd {
        Clear,
        SetFill,
        Rect,
        Circle,
        Text(String),
    }

    struct RecordingSurface {
        size: (f32, f32),
        cmds: Vec<Cmd>,
    }

    impl RecordingSurface {
        fn new(w: f32, h: f32) -> Self {
            Self { size: (w, h), cmds: Vec::new() }
        }
    }

    impl Surface for RecordingSurface {
        fn size(&self) -> (f32, f32) {
            self.size
        }
        fn clear(&mut self, _color: Color) {
            self.cmds.push(Cmd::Clear);
        }
        fn set_fill(&mut self, _color: Color) {
            self.cmds.push(Cmd::SetFill);
        }
        fn fill_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32) {
            self.cmds.push(Cmd::Rect);
        }
        fn fill_circle(&mut self, _cx: f32, _cy: f32, _r: f32) {
            self.cmds.push(Cmd::Circle);
        }
        fn fill_text(&mut self, text: &str, _x: f32, _y: f32, _size: f32, _align: TextAlign) {
            self.cmds.push(Cmd::Text(text.to_string()));
        }
    }

    #[test]
    fn frame_draws_in_fixed_order() {
        let state = GameState::new(520.0, 500.0);
        let mut surface = RecordingSurface::new(520.0, 500.0);
        draw_frame(&state, &mut surface);

        assert_eq!(surface.cmds[0], Cmd::Clear);
        assert_eq!(surface.cmds[1], Cmd::SetFill);
        // 3 rows x 5 cols of blocks, then the paddle
        let rects = surface.cmds.iter().filter(|c| **c == Cmd::Rect).count();
        assert_eq!(rects, 16);
        // Ball plus one dot per life
        let circles = surface.cmds.iter().filter(|c| **c == Cmd::Circle).count();
        assert_eq!(circles, 4);
        assert!(surface.cmds.contains(&Cmd::Text("0".to_string())));
    }

    #[test]
    fn ball_is_hidden_when_not_playing() {
        let mut state = GameState::new(520.0, 500.0);
        state.lives = 0;
        let mut surface = RecordingSurface::new(520.0, 500.0);
        draw_frame(&state, &mut surface);

        // No ball and no life dots, only the overlay text remains
        let circles = surface.cmds.iter().filter(|c| **c == Cmd::Circle).count();
        assert_eq!(circles, 0);
        assert!(surface.cmds.contains(&Cmd::Text("Game over!".to_string())));
    }

    #[test]
    fn win_overlay_is_drawn() {
        let mut state = GameState::new(520.0, 500.0);
        state.won = true;
        let mut surface = RecordingSurface::new(520.0, 500.0);
        draw_frame(&state, &mut surface);
        assert!(surface.cmds.contains(&Cmd::Text("You Won!".to_string())));
    }

    #[test]
    fn dead_blocks_are_not_drawn() {
        let mut state = GameState::new(520.0, 500.0);
        let probe = *state.blocks.get(0, 0).bounds();
        state.blocks.get_mut(0, 0).intersects(&probe);
        let mut surface = RecordingSurface::new(520.0, 500.0);
        draw_frame(&state, &mut surface);
        let rects = surface.cmds.iter().filter(|c| **c == Cmd::Rect).count();
        assert_eq!(rects, 15);
    }
}
