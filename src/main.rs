//! Vector Rocks entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use vector_rocks::renderer::LineRenderer;
    use vector_rocks::sim::{GameState, Intent, IntentEvent, TickInput};
    use vector_rocks::{RenderError, Tuning};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: LineRenderer,
        input: TickInput,
        canvas: HtmlCanvasElement,
    }

    impl Game {
        /// One display frame: update, build geometry, draw
        fn frame(&mut self, time: f64) {
            self.state.update(&self.input);
            self.input.end_frame();

            // time is ms since page load from requestAnimationFrame
            let elapsed = (time / 1000.0) as f32;
            let vertices = self.state.produce_geometry(elapsed);

            match self.renderer.render(&vertices, elapsed) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    let (w, h) = self.renderer.size;
                    self.renderer.resize(w, h);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }

        fn resize(&mut self) {
            let (width, height) = canvas_size(&self.canvas);
            self.canvas.set_width(width);
            self.canvas.set_height(height);
            self.renderer.resize(width, height);
            self.state.resize(width as f32, height as f32);
        }
    }

    /// Backing-store size of the canvas in device pixels
    fn canvas_size(canvas: &HtmlCanvasElement) -> (u32, u32) {
        let dpr = web_sys::window()
            .map(|w| w.device_pixel_ratio())
            .unwrap_or(1.0);
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        (width.max(1), height.max(1))
    }

    fn key_intent(key: &str) -> Option<Intent> {
        match key {
            "ArrowLeft" | "a" | "A" => Some(Intent::RotateLeft),
            "ArrowRight" | "d" | "D" => Some(Intent::RotateRight),
            "ArrowUp" | "w" | "W" => Some(Intent::Thrust),
            " " => Some(Intent::Fire),
            _ => None,
        }
    }

    /// Static fallback shown when the game cannot start
    fn show_unsupported(err: &RenderError) {
        log::error!("Cannot start: {}", err);
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let message = "WebGPU is not supported on this device or browser.";
        if let Some(el) = document.get_element_by_id("fallback") {
            el.set_text_content(Some(message));
            let _ = el.set_attribute("class", "");
        } else if let Some(body) = document.body() {
            body.set_text_content(Some(message));
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Vector Rocks starting...");

        match start().await {
            Ok(()) => log::info!("Vector Rocks running!"),
            Err(e) => show_unsupported(&e),
        }
    }

    async fn start() -> Result<(), RenderError> {
        let window = web_sys::window().ok_or(RenderError::NoCanvas)?;
        let document = window.document().ok_or(RenderError::NoCanvas)?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game-canvas")
            .and_then(|el| el.dyn_into().ok())
            .ok_or(RenderError::NoCanvas)?;

        let (width, height) = canvas_size(&canvas);
        canvas.set_width(width);
        canvas.set_height(height);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });
        let renderer = LineRenderer::initialize(
            &instance,
            wgpu::SurfaceTarget::Canvas(canvas.clone()),
            width,
            height,
        )
        .await?;

        // Write back the effective tuning so it can be edited in place
        let tuning = Tuning::load();
        tuning.save();

        let seed = js_sys::Date::now() as u64;
        let state = GameState::with_rng(
            width as f32,
            height as f32,
            tuning,
            Box::new(Pcg32::seed_from_u64(seed)),
        );
        log::info!("Game initialized with seed: {}", seed);

        let game = Rc::new(RefCell::new(Game {
            state,
            renderer,
            input: TickInput::default(),
            canvas,
        }));

        setup_input_handlers(game.clone());
        setup_resize_handler(game.clone());
        request_animation_frame(game);

        Ok(())
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        for (event_name, pressed) in [("keydown", true), ("keyup", false)] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(intent) = key_intent(&event.key()) {
                    event.prevent_default();
                    game.borrow_mut()
                        .input
                        .apply(IntentEvent { intent, pressed });
                }
            });
            let _ = window
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            game.borrow_mut().resize();
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Vector Rocks (native) starting...");
    log::info!("Native mode has no window - run with `trunk serve` for the web version");

    run_headless(600);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive the simulation without a GPU and report what it produced
#[cfg(not(target_arch = "wasm32"))]
fn run_headless(frames: u32) {
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use vector_rocks::sim::{GamePhase, GameState, TickInput};

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let mut state = GameState::with_rng(
        800.0,
        600.0,
        vector_rocks::Tuning::load(),
        Box::new(Pcg32::seed_from_u64(seed)),
    );

    let mut vertex_count = 0;
    for frame in 0..frames {
        let input = TickInput {
            rotate_right: frame % 90 < 20,
            thrust: frame % 120 < 30,
            fire: frame % 12 == 0,
            ..Default::default()
        };
        state.update(&input);
        vertex_count = state.produce_geometry(frame as f32 / 60.0).len();

        if state.phase() == GamePhase::GameOver {
            log::info!("Craft lost at frame {}", frame);
            break;
        }
    }

    log::info!(
        "Headless run: score {}, {} obstacles, {} vertices in last frame",
        state.score(),
        state.world.obstacles.len(),
        vertex_count
    );
}
