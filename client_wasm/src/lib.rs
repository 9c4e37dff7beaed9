//! Browser client for canvas Pong
//!
//! Wires the `#main-canvas` 2D context, the `#score` element and the
//! keyboard into `game_core`, then drives it from `requestAnimationFrame`.
//! Note: only builds for the wasm32 target

#![cfg(target_arch = "wasm32")]

mod canvas;
mod input;
mod logger;

use std::cell::RefCell;
use std::rc::Rc;

use canvas::{CanvasSurface, ScoreElement};
use game_core::{run_frame, Config, FrameClock, GameState, Scoreboard, Surface};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, KeyboardEvent, Window};

const CANVAS_ID: &str = "main-canvas";
const SCORE_ID: &str = "score";

/// State shared by the frame callback and the key listeners
struct Client {
    game: GameState,
    clock: FrameClock,
    surface: CanvasSurface,
    scoreboard: ScoreElement,
}

impl Client {
    fn new(document: &Document) -> Result<Self, JsValue> {
        let surface = CanvasSurface::from_document(document, CANVAS_ID)?;
        let mut scoreboard = ScoreElement::from_document(document, SCORE_ID)?;

        // Arena matches the canvas' pixel size
        let config = Config::for_surface(surface.width(), surface.height());
        let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
        let game = GameState::with_seed(config, seed);

        scoreboard.show(&game.score.to_string());

        Ok(Self {
            game,
            clock: FrameClock::new(),
            surface,
            scoreboard,
        })
    }

    fn frame(&mut self, now_ms: f64) {
        run_frame(
            &mut self.game,
            &mut self.clock,
            now_ms,
            &mut self.surface,
            &mut self.scoreboard,
        );
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))?;

    let client = Rc::new(RefCell::new(Client::new(&document)?));

    listen_keys(&document, &client)?;
    start_loop(window, client)?;

    log::info!("Pong ready, press space to serve");
    Ok(())
}

fn listen_keys(document: &Document, client: &Rc<RefCell<Client>>) -> Result<(), JsValue> {
    let down_client = client.clone();
    let on_key_down = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        let Ok(mut client) = down_client.try_borrow_mut() else {
            return;
        };
        if input::handle_key_down(&mut client.game, &event.key()) {
            event.prevent_default();
        }
    });
    document.add_event_listener_with_callback("keydown", on_key_down.as_ref().unchecked_ref())?;
    // Listeners live as long as the page
    on_key_down.forget();

    let up_client = client.clone();
    let on_key_up = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        if let Ok(mut client) = up_client.try_borrow_mut() {
            input::handle_key_up(&mut client.game, &event.key());
        }
    });
    document.add_event_listener_with_callback("keyup", on_key_up.as_ref().unchecked_ref())?;
    on_key_up.forget();

    Ok(())
}

/// Perpetual `requestAnimationFrame` loop; each frame reschedules itself
fn start_loop(window: Window, client: Rc<RefCell<Client>>) -> Result<(), JsValue> {
    let callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let next = callback.clone();
    let frame_window = window.clone();

    *callback.borrow_mut() = Some(Closure::new(move || {
        let now = now_ms(&frame_window);
        match client.try_borrow_mut() {
            Ok(mut client) => client.frame(now),
            Err(_) => log::warn!("Frame skipped, client busy"),
        }

        if let Some(closure) = next.borrow().as_ref() {
            if let Err(e) = request_frame(&frame_window, closure) {
                log::error!("Failed to request animation frame: {:?}", e);
            }
        }
    }));

    let started = match callback.borrow().as_ref() {
        Some(closure) => request_frame(&window, closure),
        None => Ok(()),
    };
    started
}

fn request_frame(window: &Window, closure: &Closure<dyn FnMut()>) -> Result<(), JsValue> {
    window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .map(|_| ())
}

/// Wall clock in milliseconds
fn now_ms(window: &Window) -> f64 {
    window
        .performance()
        .map(|performance| performance.now())
        .unwrap_or_else(js_sys::Date::now)
}
