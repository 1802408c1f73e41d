//! Decorative page effects outside the rain overlay: typing prompt, fade-in
//! on scroll, CRT flicker, button click feedback, smooth anchor scrolling,
//! logo glitch and the console banner. Each is wired independently by
//! `init_effects`; a page missing the relevant elements gets a silent no-op.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    Window, console, window,
};

/// Delay before the prompt starts typing.
const TYPE_DELAY_MS: i32 = 500;
/// Per-character typing cadence.
const TYPE_SPEED_MS: i32 = 80;
/// Flicker poll period; each poll flickers with probability 1 - FLICKER_BAR.
const FLICKER_POLL_MS: i32 = 100;
const FLICKER_RESTORE_MS: i32 = 50;
const FLICKER_BAR: f64 = 0.97;
/// How long a clicked button stays shrunk.
const CLICK_RESET_MS: i32 = 100;

const GLITCH_KEYFRAMES: &str = "\
@keyframes glitch {
    0% { text-shadow: 0 0 10px var(--terminal-glow); }
    25% { text-shadow: -2px 0 10px var(--terminal-glow), 2px 0 10px var(--magenta); }
    50% { text-shadow: 2px 0 10px var(--terminal-glow), -2px 0 10px var(--cyan); }
    75% { text-shadow: -2px 0 10px var(--cyan), 2px 0 10px var(--amber); }
    100% { text-shadow: 0 0 10px var(--terminal-glow); }
}";

/// Retype the `.typing` element's own text one character at a time, via a
/// self-rescheduling timeout chain (the element keeps its final text as the
/// source, same trick as the original page).
pub(crate) fn wire_typing(win: &Window, doc: &Document) -> Result<(), JsValue> {
    let Some(el) = doc.query_selector(".typing")? else {
        return Ok(());
    };
    let text: Vec<char> = el.text_content().unwrap_or_default().chars().collect();
    el.set_text_content(Some(""));

    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let mut shown = String::with_capacity(text.len() * 4);
    let mut next = 0usize;
    *g.borrow_mut() = Some(Closure::new(move || {
        if let Some(&ch) = text.get(next) {
            shown.push(ch);
            next += 1;
            el.set_text_content(Some(&shown));
        }
        if next < text.len() {
            if let Some(win) = window() {
                let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
                    f.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
                    TYPE_SPEED_MS,
                );
            }
        }
    }));
    win.set_timeout_with_callback_and_timeout_and_arguments_0(
        g.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
        TYPE_DELAY_MS,
    )?;
    Ok(())
}

/// Fade feature boxes in as they scroll into view.
pub(crate) fn wire_fade_in(doc: &Document) -> Result<(), JsValue> {
    let on_intersect = Closure::<dyn FnMut(js_sys::Array)>::new(|entries: js_sys::Array| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if !entry.is_intersecting() {
                continue;
            }
            if let Ok(el) = entry.target().dyn_into::<HtmlElement>() {
                let _ = el.style().set_property("opacity", "1");
                let _ = el.style().set_property("transform", "translateY(0)");
            }
        }
    });
    let opts = IntersectionObserverInit::new();
    opts.set_threshold(&JsValue::from_f64(0.1));
    opts.set_root_margin("0px 0px -50px 0px");
    let observer =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &opts)?;
    on_intersect.forget();

    let nodes = doc.query_selector_all(".feature-box, .example, .step")?;
    for i in 0..nodes.length() {
        let Some(node) = nodes.item(i) else { continue };
        let Ok(el) = node.dyn_into::<HtmlElement>() else {
            continue;
        };
        let style = el.style();
        style.set_property("opacity", "0")?;
        style.set_property("transform", "translateY(20px)")?;
        style.set_property("transition", "opacity 0.6s, transform 0.6s")?;
        observer.observe(&el);
    }
    Ok(())
}

/// Random CRT flicker: briefly dip the whole body's opacity.
pub(crate) fn wire_flicker(win: &Window, doc: &Document) -> Result<(), JsValue> {
    let body = doc.body().ok_or_else(|| JsValue::from_str("no body"))?;
    let restored = body.clone();
    let restore = Closure::<dyn FnMut()>::new(move || {
        let _ = restored.style().set_property("opacity", "1");
    });
    let tick = Closure::<dyn FnMut()>::new(move || {
        if js_sys::Math::random() > FLICKER_BAR {
            let _ = body.style().set_property("opacity", "0.95");
            if let Some(win) = window() {
                let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
                    restore.as_ref().unchecked_ref(),
                    FLICKER_RESTORE_MS,
                );
            }
        }
    });
    win.set_interval_with_callback_and_timeout_and_arguments_0(
        tick.as_ref().unchecked_ref(),
        FLICKER_POLL_MS,
    )?;
    tick.forget();
    Ok(())
}

/// Scale-pulse feedback on retro buttons and links.
pub(crate) fn wire_click_feedback(doc: &Document) -> Result<(), JsValue> {
    let nodes = doc.query_selector_all(".retro-button, .retro-link")?;
    for i in 0..nodes.length() {
        let Some(node) = nodes.item(i) else { continue };
        let Ok(el) = node.dyn_into::<HtmlElement>() else {
            continue;
        };
        let pressed = el.clone();
        let released = el.clone();
        let reset = Closure::<dyn FnMut()>::new(move || {
            let _ = released.style().set_property("transform", "scale(1)");
        });
        let on_click = Closure::<dyn FnMut()>::new(move || {
            let _ = pressed.style().set_property("transform", "scale(0.95)");
            if let Some(win) = window() {
                let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
                    reset.as_ref().unchecked_ref(),
                    CLICK_RESET_MS,
                );
            }
        });
        el.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }
    Ok(())
}

/// Intercept same-page anchor clicks and scroll smoothly instead of jumping.
pub(crate) fn wire_smooth_scroll(doc: &Document) -> Result<(), JsValue> {
    let nodes = doc.query_selector_all(r##"a[href^="#"]"##)?;
    for i in 0..nodes.length() {
        let Some(node) = nodes.item(i) else { continue };
        let Ok(anchor) = node.dyn_into::<Element>() else {
            continue;
        };
        let link = anchor.clone();
        let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            event.prevent_default();
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(doc) = window().and_then(|w| w.document()) else {
                return;
            };
            if let Ok(Some(target)) = doc.query_selector(&href) {
                let opts = ScrollIntoViewOptions::new();
                opts.set_behavior(ScrollBehavior::Smooth);
                opts.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&opts);
            }
        });
        anchor.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }
    Ok(())
}

/// Inject the glitch keyframes and toggle them on logo hover.
pub(crate) fn wire_logo_glitch(doc: &Document) -> Result<(), JsValue> {
    let Some(logo) = doc.query_selector(".ascii-logo")? else {
        return Ok(());
    };
    let logo: HtmlElement = logo.dyn_into()?;

    let style_el = doc.create_element("style")?;
    style_el.set_text_content(Some(GLITCH_KEYFRAMES));
    doc.head()
        .ok_or_else(|| JsValue::from_str("no head"))?
        .append_child(&style_el)?;

    let hovered = logo.clone();
    let on_enter = Closure::<dyn FnMut()>::new(move || {
        let _ = hovered.style().set_property("animation", "glitch 0.3s infinite");
    });
    let left = logo.clone();
    let on_leave = Closure::<dyn FnMut()>::new(move || {
        let _ = left.style().set_property("animation", "none");
    });
    logo.add_event_listener_with_callback("mouseenter", on_enter.as_ref().unchecked_ref())?;
    logo.add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref())?;
    on_enter.forget();
    on_leave.forget();
    Ok(())
}

/// Boxed startup banner in the browser console, with the Konami hint in amber.
pub(crate) fn print_banner() {
    const GREEN: &str = "color: #00ff41; font-size: 14px; font-family: monospace;";
    const AMBER: &str = "color: #ffb000; font-size: 14px; font-family: monospace;";
    let lines = [
        ("┏━━━━━━━━━━━━━━━━━━━━━━━━━━┓", GREEN),
        ("┃  RETRO-FX v0.1.0        ┃", GREEN),
        ("┃  Retro Terminal Effects ┃", GREEN),
        ("┃  Try the Konami code!   ┃", AMBER),
        ("┗━━━━━━━━━━━━━━━━━━━━━━━━━━┛", GREEN),
    ];
    for (line, style) in lines {
        console::log_2(
            &JsValue::from_str(&format!("%c{line}")),
            &JsValue::from_str(style),
        );
    }
}
