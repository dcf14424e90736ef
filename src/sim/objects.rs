//! Game entities: blocks, the paddle and the ball
//!
//! Everything that lives on the play field implements [`GameObject`]. The
//! trait is the closed set of capabilities the game loop relies on (draw,
//! collision, intersection); the source material enforced this with runtime
//! abstract-class checks, here it is a compile-time contract.

use glam::Vec2;

use super::geom::{Axis, BoundingBox, Contact};
use crate::render::Surface;

/// Shared contract for everything on the play field
///
/// `collides` and `intersects` default to plain box queries; variants with
/// extra state (blocks) override them. They take `&mut self` because a hit
/// may transition the entity (a block dies on its first contact).
pub trait GameObject {
    fn bounds(&self) -> &BoundingBox;

    fn draw(&self, surface: &mut dyn Surface);

    /// Partial-overlap test against another box
    fn collides(&mut self, other: &BoundingBox) -> bool {
        self.bounds().collides(other)
    }

    /// Rigorous intersection test against another box
    fn intersects(&mut self, other: &BoundingBox) -> Option<Contact> {
        self.bounds().intersects(other)
    }
}

/// Outcome of advancing the ball by one step
///
/// The ball never reaches back into the game controller; it reports what
/// happened and the controller interprets the events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallEvent {
    /// Ball crossed the bottom edge of the play field
    LifeLost,
    /// Ball bounced off the paddle
    PaddleHit,
    /// Ball destroyed the block at (row, col)
    BlockDestroyed { row: usize, col: usize },
}

/// A destroyable block
#[derive(Debug, Clone)]
pub struct Block {
    bx: BoundingBox,
    alive: bool,
}

impl Block {
    pub fn new(bx: BoundingBox) -> Self {
        Self { bx, alive: true }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }
}

impl GameObject for Block {
    fn bounds(&self) -> &BoundingBox {
        &self.bx
    }

    fn draw(&self, surface: &mut dyn Surface) {
        if self.alive {
            surface.fill_rect(self.bx.x, self.bx.y, self.bx.w, self.bx.h);
        }
    }

    /// Dead blocks are inert; a live block dies on its first detected hit
    /// and never reports another.
    fn collides(&mut self, other: &BoundingBox) -> bool {
        if !self.alive {
            return false;
        }
        let hit = self.bx.collides(other);
        if hit {
            self.alive = false;
        }
        hit
    }

    fn intersects(&mut self, other: &BoundingBox) -> Option<Contact> {
        if !self.alive {
            return None;
        }
        let contact = self.bx.intersects(other);
        if contact.is_some() {
            self.alive = false;
        }
        contact
    }
}

/// The block grid, fixed rows x cols at setup, stored row-major
#[derive(Debug, Clone)]
pub struct BlockGrid {
    blocks: Vec<Block>,
    rows: usize,
    cols: usize,
}

impl BlockGrid {
    pub fn new(blocks: Vec<Block>, rows: usize, cols: usize) -> Self {
        debug_assert_eq!(blocks.len(), rows * cols);
        Self { blocks, rows, cols }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> &Block {
        &self.blocks[row * self.cols + col]
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> &mut Block {
        &mut self.blocks[row * self.cols + col]
    }

    /// Row-major iteration with grid coordinates
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, usize, &mut Block)> {
        let cols = self.cols;
        self.blocks
            .iter_mut()
            .enumerate()
            .map(move |(i, b)| (i / cols, i % cols, b))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter()
    }

    /// Number of blocks still standing
    pub fn alive_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.is_alive()).count()
    }
}

/// The player controlled paddle
#[derive(Debug, Clone)]
pub struct Paddle {
    bx: BoundingBox,
    /// Speed the paddle can move, pixels per second
    speed: f32,
}

impl Paddle {
    pub fn new(bx: BoundingBox, speed: f32) -> Self {
        Self { bx, speed }
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    /// Move the paddle to `x`, clamped so it stays inside `bounds`.
    ///
    /// Sole mutation path for the paddle's position; keyboard movement,
    /// mouse tracking and demo mode all route through here.
    pub fn set_pos_in_bounds(&mut self, bounds: &BoundingBox, x: f32) {
        let max_x = bounds.x + bounds.w - self.bx.w;
        self.bx.x = x.min(max_x).max(bounds.x);
    }

    /// Framerate-independent move toward the left bound
    pub fn move_left(&mut self, bounds: &BoundingBox, dt: f32) {
        let x = self.bx.x - self.speed * dt;
        self.set_pos_in_bounds(bounds, x);
    }

    /// Framerate-independent move toward the right bound
    pub fn move_right(&mut self, bounds: &BoundingBox, dt: f32) {
        let x = self.bx.x + self.speed * dt;
        self.set_pos_in_bounds(bounds, x);
    }

    pub(crate) fn respawn(&mut self, bx: BoundingBox) {
        self.bx = bx;
    }
}

impl GameObject for Paddle {
    fn bounds(&self) -> &BoundingBox {
        &self.bx
    }

    fn draw(&self, surface: &mut dyn Surface) {
        surface.fill_rect(self.bx.x, self.bx.y, self.bx.w, self.bx.h);
    }
}

/// The ball
#[derive(Debug, Clone)]
pub struct Ball {
    bx: BoundingBox,
    /// Velocity in pixels per second; magnitude encodes speed directly
    vel: Vec2,
}

impl Ball {
    pub fn new(bx: BoundingBox, vel: Vec2) -> Self {
        Self { bx, vel }
    }

    pub fn velocity(&self) -> Vec2 {
        self.vel
    }

    pub(crate) fn respawn(&mut self, bx: BoundingBox, vel: Vec2) {
        self.bx = bx;
        self.vel = vel;
    }

    /// Advance the ball by `dt` seconds and resolve collisions, in order:
    /// integrate, wall clamp + reflect, bottom-edge life loss, paddle
    /// bounce, then every block row-major.
    ///
    /// Collision checks still run on a life-loss frame; the controller
    /// applies the reset after interpreting the returned events.
    pub fn step(
        &mut self,
        bounds: &BoundingBox,
        paddle: &mut Paddle,
        blocks: &mut BlockGrid,
        dt: f32,
    ) -> Vec<BallEvent> {
        let mut events = Vec::new();

        // Integrate position
        self.bx.x += self.vel.x * dt;
        self.bx.y += self.vel.y * dt;

        // Clamp and reflect against the left/right walls
        if self.bx.x < bounds.x {
            self.bx.x = bounds.x;
            self.vel.x = -self.vel.x;
        } else if self.bx.right() > bounds.right() {
            self.bx.x = bounds.right() - self.bx.w;
            self.vel.x = -self.vel.x;
        }

        // Clamp and reflect against the top wall
        if self.bx.y < bounds.y {
            self.bx.y = bounds.y;
            self.vel.y = -self.vel.y;
        }

        // Past the bottom edge the ball is lost, not clamped
        if self.bx.bottom() > bounds.bottom() {
            events.push(BallEvent::LifeLost);
        }

        // Bounce off the paddle
        if let Some(contact) = paddle.intersects(&self.bx) {
            self.deflect(contact);
            events.push(BallEvent::PaddleHit);
        }

        // Bounce off blocks; no early exit, several blocks can be hit in
        // one frame, but each block only ever registers once
        for (row, col, block) in blocks.iter_mut() {
            if let Some(contact) = block.intersects(&self.bx) {
                self.deflect(contact);
                events.push(BallEvent::BlockDestroyed { row, col });
            }
        }

        events
    }

    /// Snap to the resolved coordinate and invert that axis's velocity
    fn deflect(&mut self, contact: Contact) {
        match contact.axis {
            Axis::X => {
                self.bx.x = contact.pos;
                self.vel.x = -self.vel.x;
            }
            Axis::Y => {
                self.bx.y = contact.pos;
                self.vel.y = -self.vel.y;
            }
        }
    }
}

impl GameObject for Ball {
    fn bounds(&self) -> &BoundingBox {
        &self.bx
    }

    fn draw(&self, surface: &mut dyn Surface) {
        // Assumes the box is square
        let c = self.bx.center();
        surface.fill_circle(c.x, c.y, self.bx.w / 2.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> BoundingBox {
        BoundingBox::new(0.0, 0.0, 500.0, 500.0)
    }

    fn empty_grid() -> BlockGrid {
        BlockGrid::new(Vec::new(), 0, 0)
    }

    fn one_block_grid(bx: BoundingBox) -> BlockGrid {
        BlockGrid::new(vec![Block::new(bx)], 1, 1)
    }

    fn far_paddle() -> Paddle {
        // Off in a corner where the ball won't reach
        Paddle::new(BoundingBox::new(0.0, 600.0, 100.0, 25.0), 50.0)
    }

    #[test]
    fn block_dies_on_first_collision() {
        let mut block = Block::new(BoundingBox::new(1.0, 1.0, 100.0, 50.0));
        let probe = BoundingBox::new(5.0, 5.0, 100.0, 50.0);
        assert!(block.collides(&probe));
        assert!(!block.is_alive());
    }

    #[test]
    fn dead_block_is_inert() {
        let mut block = Block::new(BoundingBox::new(1.0, 1.0, 100.0, 50.0));
        let probe = BoundingBox::new(5.0, 5.0, 100.0, 50.0);
        assert!(block.intersects(&probe).is_some());
        // Every subsequent query on the dead block reports nothing
        assert!(block.intersects(&probe).is_none());
        assert!(!block.collides(&probe));
        assert!(block.intersects(&probe).is_none());
    }

    #[test]
    fn block_survives_a_miss() {
        let mut block = Block::new(BoundingBox::new(1.0, 1.0, 100.0, 50.0));
        let probe = BoundingBox::new(102.0, 150.0, 100.0, 50.0);
        assert!(!block.collides(&probe));
        assert!(block.intersects(&probe).is_none());
        assert!(block.is_alive());
    }

    #[test]
    fn block_intersection_reports_axis() {
        let mut block = Block::new(BoundingBox::new(1.0, 1.0, 100.0, 50.0));
        let probe = BoundingBox::new(5.0, 5.0, 100.0, 50.0);
        assert_eq!(
            block.intersects(&probe),
            Some(Contact { axis: Axis::Y, pos: 52.0 })
        );
    }

    #[test]
    fn paddle_sets_position_inside_bounds() {
        let mut paddle = Paddle::new(BoundingBox::new(1.0, 1.0, 100.0, 50.0), 50.0);
        paddle.set_pos_in_bounds(&field(), 10.0);
        assert_eq!(paddle.bounds().x, 10.0);
    }

    #[test]
    fn paddle_clamps_to_bounds() {
        let mut paddle = Paddle::new(BoundingBox::new(1.0, 1.0, 100.0, 50.0), 50.0);
        paddle.set_pos_in_bounds(&field(), -5.0);
        assert_eq!(paddle.bounds().x, 0.0);
        paddle.set_pos_in_bounds(&field(), 550.0);
        assert_eq!(paddle.bounds().x, 400.0);
    }

    #[test]
    fn paddle_moves_scaled_by_elapsed_time() {
        let mut paddle = Paddle::new(BoundingBox::new(50.0, 1.0, 100.0, 50.0), 50.0);
        paddle.move_left(&field(), 0.5);
        assert!((paddle.bounds().x - 25.0).abs() < 1e-4);
        paddle.move_right(&field(), 0.5);
        assert!((paddle.bounds().x - 50.0).abs() < 1e-4);
    }

    #[test]
    fn paddle_movement_clamps_at_walls() {
        let mut paddle = Paddle::new(BoundingBox::new(1.0, 1.0, 100.0, 50.0), 50.0);
        paddle.move_left(&field(), 0.5);
        assert_eq!(paddle.bounds().x, 0.0);
        let mut paddle = Paddle::new(BoundingBox::new(400.0, 1.0, 100.0, 50.0), 50.0);
        paddle.move_right(&field(), 0.5);
        assert_eq!(paddle.bounds().x, 400.0);
    }

    #[test]
    fn ball_integrates_velocity() {
        let mut ball = Ball::new(
            BoundingBox::new(250.0, 250.0, 25.0, 25.0),
            Vec2::new(50.0, -100.0),
        );
        let events = ball.step(&field(), &mut far_paddle(), &mut empty_grid(), 0.5);
        assert_eq!(ball.bounds().x, 275.0);
        assert_eq!(ball.bounds().y, 200.0);
        assert!(events.is_empty());
    }

    #[test]
    fn ball_reflects_off_walls() {
        let mut ball = Ball::new(
            BoundingBox::new(490.0, 10.0, 25.0, 25.0),
            Vec2::new(50.0, -100.0),
        );
        ball.step(&field(), &mut far_paddle(), &mut empty_grid(), 0.5);
        // Clamped to the right wall and the top, both components flipped
        assert_eq!(ball.bounds().x, 475.0);
        assert_eq!(ball.bounds().y, 0.0);
        assert_eq!(ball.velocity(), Vec2::new(-50.0, 100.0));
    }

    #[test]
    fn ball_reports_life_loss_past_bottom_edge() {
        let mut ball = Ball::new(
            BoundingBox::new(250.0, 250.0, 25.0, 25.0),
            Vec2::new(50.0, -100.0),
        );
        let events = ball.step(&field(), &mut far_paddle(), &mut empty_grid(), 0.5);
        assert!(!events.contains(&BallEvent::LifeLost));

        let mut ball = Ball::new(
            BoundingBox::new(250.0, 490.0, 25.0, 25.0),
            Vec2::new(50.0, 100.0),
        );
        let events = ball.step(&field(), &mut far_paddle(), &mut empty_grid(), 0.5);
        assert!(events.contains(&BallEvent::LifeLost));
    }

    #[test]
    fn ball_bounces_off_paddle() {
        let mut paddle = Paddle::new(BoundingBox::new(11.0, 450.0, 100.0, 50.0), 50.0);
        let mut ball = Ball::new(
            BoundingBox::new(10.0, 400.0, 25.0, 25.0),
            Vec2::new(50.0, 100.0),
        );
        let events = ball.step(&field(), &mut paddle, &mut empty_grid(), 0.5);
        // Stopped one unit above the paddle, vertical velocity inverted
        assert_eq!(ball.bounds().x, 35.0);
        assert_eq!(ball.bounds().y, 424.0);
        assert_eq!(ball.velocity().y, -100.0);
        assert!(events.contains(&BallEvent::PaddleHit));
    }

    #[test]
    fn ball_destroys_block_and_reports_it() {
        let mut blocks = one_block_grid(BoundingBox::new(1.0, 1.0, 100.0, 50.0));
        let mut ball = Ball::new(
            BoundingBox::new(10.0, 65.0, 25.0, 25.0),
            Vec2::new(50.0, -100.0),
        );
        let events = ball.step(&field(), &mut far_paddle(), &mut blocks, 0.5);
        // Stopped one unit below the block, vertical velocity inverted
        assert_eq!(ball.bounds().x, 35.0);
        assert_eq!(ball.bounds().y, 52.0);
        assert_eq!(ball.velocity().y, 100.0);
        assert!(events.contains(&BallEvent::BlockDestroyed { row: 0, col: 0 }));
        assert!(!blocks.get(0, 0).is_alive());
    }

    #[test]
    fn collision_checks_still_run_on_a_life_loss_frame() {
        // Paddle sits below the play field bottom; the ball passes the
        // bottom edge and still registers the paddle hit that frame
        let mut paddle = Paddle::new(BoundingBox::new(200.0, 510.0, 100.0, 25.0), 50.0);
        let mut ball = Ball::new(
            BoundingBox::new(240.0, 480.0, 25.0, 25.0),
            Vec2::new(0.0, 60.0),
        );
        let events = ball.step(&field(), &mut paddle, &mut empty_grid(), 0.5);
        assert!(events.contains(&BallEvent::LifeLost));
        assert!(events.contains(&BallEvent::PaddleHit));
    }
}
