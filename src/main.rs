//! Brickfall entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use brickfall::consts::*;
    use brickfall::render::canvas::CanvasSurface;
    use brickfall::render::draw_frame;
    use brickfall::settings::Settings;
    use brickfall::sim::{GameState, TickInput, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        surface: CanvasSurface,
        canvas: HtmlCanvasElement,
        input: TickInput,
        accumulator: f32,
        last_time: f64,
        settings: Settings,
        // FPS tracking
        frames: u32,
        fps_window_start: f64,
    }

    impl Game {
        fn new(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d, settings: Settings) -> Self {
            let width = canvas.width() as f32;
            let height = canvas.height() as f32;
            Self {
                state: GameState::new(width, height),
                surface: CanvasSurface::new(ctx, width, height),
                canvas,
                input: TickInput::default(),
                accumulator: 0.0,
                last_time: 0.0,
                settings,
                frames: 0,
                fps_window_start: 0.0,
            }
        }

        /// Reset everything when the canvas backing size no longer matches
        /// its layout size. This is the only route back to `Playing` after
        /// a win or loss.
        fn sync_surface_size(&mut self) -> bool {
            let client_w = self.canvas.client_width().max(0) as u32;
            let client_h = self.canvas.client_height().max(0) as u32;
            if self.canvas.width() == client_w && self.canvas.height() == client_h {
                return false;
            }
            self.canvas.set_width(client_w);
            self.canvas.set_height(client_h);
            self.surface.set_size(client_w as f32, client_h as f32);
            self.state.reconfigure(client_w as f32, client_h as f32);
            true
        }

        /// Run simulation ticks from the accumulated frame time
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                let input = self.input.clone();
                tick(&mut self.state, &input, SIM_DT);
                self.accumulator -= SIM_DT;
                substeps += 1;

                // Clear one-shot inputs after processing
                self.input.toggle_demo = false;
                self.input.pointer_x = None;
            }
        }

        fn render(&mut self) {
            draw_frame(&self.state, &mut self.surface);
        }

        fn track_fps(&mut self, time: f64) {
            if !self.settings.show_fps {
                return;
            }
            self.frames += 1;
            if time - self.fps_window_start >= 1000.0 {
                log::info!("fps: {}", self.frames);
                self.frames = 0;
                self.fps_window_start = time;
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Brickfall starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Match the backing store to the layout size before first setup
        canvas.set_width(canvas.client_width().max(0) as u32);
        canvas.set_height(canvas.client_height().max(0) as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("get_context failed")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let settings = Settings::load();
        let game = Rc::new(RefCell::new(Game::new(canvas.clone(), ctx, settings)));

        log::info!(
            "Game initialized at {}x{}",
            canvas.width(),
            canvas.height()
        );

        setup_input_handlers(&canvas, game.clone());

        // Start the frame loop
        request_animation_frame(game);

        log::info!("Brickfall running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        // Key down - held movement flags plus the edge-triggered demo toggle
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                let code = event.code();
                if code == g.settings.bindings.left {
                    g.input.left = true;
                } else if code == g.settings.bindings.right {
                    g.input.right = true;
                } else if code == g.settings.bindings.demo && !event.repeat() {
                    g.input.toggle_demo = true;
                }
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                let code = event.code();
                if code == g.settings.bindings.left {
                    g.input.left = false;
                } else if code == g.settings.bindings.right {
                    g.input.right = false;
                }
            });
            let _ = document
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse move - paddle follows the cursor
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                game.borrow_mut().input.pointer_x = Some(event.offset_x() as f32);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            // A resize restarts the game; skip the normal update that frame
            if !g.sync_surface_size() {
                let dt = if g.last_time > 0.0 {
                    ((time - g.last_time) / 1000.0) as f32
                } else {
                    SIM_DT
                };
                g.update(dt);
            }
            g.last_time = time;

            g.render();
            g.track_fps(time);
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use brickfall::consts::SIM_DT;
    use brickfall::sim::{GamePhase, GameState, TickInput, tick};

    env_logger::init();
    log::info!("Brickfall (native) starting...");
    log::info!("Native mode has no renderer - run with `trunk serve` for the web version");

    // Headless smoke run: let demo mode play for a minute of sim time
    let mut state = GameState::new(1040.0, 600.0);
    state.demo = true;

    let input = TickInput::default();
    for _ in 0..(60 * 120) {
        tick(&mut state, &input, SIM_DT);
        if state.phase() != GamePhase::Playing {
            break;
        }
    }

    log::info!(
        "demo finished: phase {:?}, score {}, lives {}, blocks left {}",
        state.phase(),
        state.score,
        state.lives,
        state.alive_blocks()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
