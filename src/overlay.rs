//! Full-viewport matrix-rain canvas overlay.
//!
//! `activate()` builds the canvas, starts the 33ms paint interval and arms a
//! one-shot 10s teardown timer. The live overlay (canvas, interval handle and
//! the paint closure keeping the JS callback alive) sits in a thread-local so
//! `teardown()` can cancel it from either the timer or `teardown_effects()`.

use std::cell::{Cell, RefCell};

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, window};

use crate::rain::{CELL, LIFETIME_MS, RainField, TICK_MS};

const RAIN_COLOR: &str = "#00ff41";
const FADE_FILL: &str = "rgba(0, 0, 0, 0.05)";

struct Overlay {
    canvas: HtmlCanvasElement,
    interval_id: i32,
    // Matches the auto-stop timer armed for this activation; a stale timer
    // left over from an overlay torn down early must not kill its successor.
    token: u32,
    _paint: Closure<dyn FnMut()>,
}

thread_local! {
    static OVERLAY: RefCell<Option<Overlay>> = RefCell::new(None);
    static NEXT_TOKEN: Cell<u32> = Cell::new(0);
}

/// Start the rain. A second trigger while an overlay is already live keeps
/// the running instance instead of stacking another canvas.
pub fn activate() -> Result<(), JsValue> {
    if OVERLAY.with(|o| o.borrow().is_some()) {
        return Ok(());
    }
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win.document().ok_or_else(|| JsValue::from_str("no document"))?;

    let canvas: HtmlCanvasElement = doc.create_element("canvas")?.dyn_into()?;
    let style = canvas.style();
    style.set_property("position", "fixed")?;
    style.set_property("top", "0")?;
    style.set_property("left", "0")?;
    style.set_property("width", "100%")?;
    style.set_property("height", "100%")?;
    style.set_property("pointer-events", "none")?;
    style.set_property("z-index", "9999")?;
    style.set_property("opacity", "0.3")?;
    doc.body()
        .ok_or_else(|| JsValue::from_str("no body"))?
        .append_child(&canvas)?;

    let width = win.inner_width()?.as_f64().unwrap_or(0.0) as u32;
    let height = win.inner_height()?.as_f64().unwrap_or(0.0) as u32;
    canvas.set_width(width);
    canvas.set_height(height);

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into()?;

    // Column positions are sized once from the activation-time viewport and
    // deliberately not recomputed on resize.
    let mut field = RainField::new(width, height);
    let paint = Closure::<dyn FnMut()>::new(move || {
        ctx.set_fill_style_str(FADE_FILL);
        ctx.fill_rect(0.0, 0.0, width as f64, height as f64);

        ctx.set_fill_style_str(RAIN_COLOR);
        ctx.set_font(&format!("{CELL}px monospace"));
        let mut buf = [0u8; 4];
        field.step(js_sys::Math::random, |x, y, glyph| {
            ctx.fill_text(glyph.encode_utf8(&mut buf), x, y).ok();
        });
    });
    let interval_id = win
        .set_interval_with_callback_and_timeout_and_arguments_0(
            paint.as_ref().unchecked_ref(),
            TICK_MS,
        )?;
    let token = NEXT_TOKEN.with(|t| {
        let v = t.get();
        t.set(v.wrapping_add(1));
        v
    });
    OVERLAY.with(|o| {
        o.borrow_mut().replace(Overlay {
            canvas,
            interval_id,
            token,
            _paint: paint,
        })
    });

    let stop = Closure::<dyn FnMut()>::new(move || expire(token));
    win.set_timeout_with_callback_and_timeout_and_arguments_0(
        stop.as_ref().unchecked_ref(),
        LIFETIME_MS,
    )?;
    stop.forget();
    Ok(())
}

// Auto-stop entry: only tears down the overlay the timer was armed for.
fn expire(token: u32) {
    let current = OVERLAY.with(|o| o.borrow().as_ref().map(|ov| ov.token));
    if current == Some(token) {
        teardown();
    }
}

/// Cancel the paint interval, remove the canvas and drop all drawing state.
/// Idempotent: a no-op when no overlay is live.
pub fn teardown() {
    OVERLAY.with(|o| {
        if let Some(overlay) = o.borrow_mut().take() {
            if let Some(win) = window() {
                win.clear_interval_with_handle(overlay.interval_id);
            }
            overlay.canvas.remove();
        }
    });
}
