//! Browser host: canvas, keyboard events and requestAnimationFrame

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, Window};

use super::{CANVAS_ID, SetupError};
use crate::consts::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::game::GameLoop;
use crate::settings::Settings;

/// Game instance plus the surface it draws on
struct Host {
    game: GameLoop,
    ctx: CanvasRenderingContext2d,
}

/// Find and size the canvas, wire input, start the frame loop
pub fn start(settings: &Settings) -> Result<(), SetupError> {
    let window = web_sys::window().ok_or(SetupError::NoWindow)?;
    let document = window.document().ok_or(SetupError::NoDocument)?;

    let canvas: HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .and_then(|el| el.dyn_into().ok())
        .ok_or_else(|| SetupError::NoCanvas(CANVAS_ID.to_string()))?;
    canvas.set_width(BOARD_WIDTH as u32);
    canvas.set_height(BOARD_HEIGHT as u32);

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|obj| obj.dyn_into().ok())
        .ok_or(SetupError::NoContext)?;

    let seed = js_sys::Date::now() as u64;
    let host = Rc::new(RefCell::new(Host {
        game: GameLoop::new(seed, settings),
        ctx,
    }));

    setup_input_handlers(&window, host.clone());
    request_animation_frame(&window, host);

    log::info!("Glow Pong running!");
    Ok(())
}

fn now_ms(window: &Window) -> f64 {
    window
        .performance()
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

fn setup_input_handlers(window: &Window, host: Rc<RefCell<Host>>) {
    // Key down
    {
        let host = host.clone();
        let win = window.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let code = event.code();
            if host.borrow().game.is_bound(&code) {
                event.prevent_default();
            }
            host.borrow_mut().game.key_down(&code, now_ms(&win));
        });
        let _ = window
            .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Key up
    {
        let host = host.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            host.borrow_mut().game.key_up(&event.code());
        });
        let _ =
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Window blur: key-up events are lost while unfocused
    {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            host.borrow_mut().game.release_all();
        });
        let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn request_animation_frame(window: &Window, host: Rc<RefCell<Host>>) {
    let win = window.clone();
    let closure = Closure::once(move |time: f64| {
        game_loop(&win, host, time);
    });
    if window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .is_err()
    {
        log::error!("requestAnimationFrame failed; game loop stopped");
    }
    closure.forget();
}

fn game_loop(window: &Window, host: Rc<RefCell<Host>>, time: f64) {
    {
        let mut h = host.borrow_mut();
        let Host { game, ctx } = &mut *h;
        game.frame(ctx, time);
    }

    request_animation_frame(window, host);
}
