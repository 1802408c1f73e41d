//! Retro FX core crate.
//!
//! Cosmetic effects for a retro-terminal themed static page, compiled to
//! WASM. `init_effects()` wires everything from JS; the Konami-code matrix
//! rain is the centerpiece, the rest are small one-shot DOM decorations.
//! Sequence matching (`konami`) and drop arithmetic (`rain`) are pure Rust so
//! they also run under native `cargo test`.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, console, window};

mod effects;
pub mod konami;
mod overlay;
pub mod rain;

pub use konami::{KONAMI_SEQUENCE, SequenceDetector};
pub use rain::RainField;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// The keydown closure is kept alive here so `teardown_effects` can unhook it.
struct KonamiWatcher {
    listener: Closure<dyn FnMut(web_sys::KeyboardEvent)>,
}

thread_local! {
    static WATCHER: RefCell<Option<KonamiWatcher>> = RefCell::new(None);
}

/// Wire every page effect. Each one is independent: a failure is logged to
/// the console and the rest still run.
#[wasm_bindgen]
pub fn init_effects() -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win.document().ok_or_else(|| JsValue::from_str("no document"))?;

    for result in [
        effects::wire_typing(&win, &doc),
        effects::wire_fade_in(&doc),
        effects::wire_flicker(&win, &doc),
        effects::wire_click_feedback(&doc),
        effects::wire_smooth_scroll(&doc),
        effects::wire_logo_glitch(&doc),
        wire_konami(&doc),
    ] {
        if let Err(err) = result {
            console::warn_1(&err);
        }
    }
    effects::print_banner();
    Ok(())
}

/// Unhook the Konami listener and remove any live rain overlay. Safe to call
/// more than once or before `init_effects`.
#[wasm_bindgen]
pub fn teardown_effects() {
    WATCHER.with(|w| {
        if let Some(watcher) = w.borrow_mut().take() {
            if let Some(doc) = window().and_then(|w| w.document()) {
                let _ = doc.remove_event_listener_with_callback(
                    "keydown",
                    watcher.listener.as_ref().unchecked_ref(),
                );
            }
        }
    });
    overlay::teardown();
}

fn wire_konami(doc: &Document) -> Result<(), JsValue> {
    let mut detector = SequenceDetector::konami();
    let listener =
        Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |event: web_sys::KeyboardEvent| {
            if detector.handle_key(&event.key()) {
                // Best-effort: an unsupported environment just skips the rain.
                let _ = overlay::activate();
            }
        });
    doc.add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref())?;
    WATCHER.with(|w| w.borrow_mut().replace(KonamiWatcher { listener }));
    Ok(())
}
