//! Page binding for the song sheet
//!
//! `bindSongSheet` finds the sheet's controls, builds a transposition
//! controller from the chord elements' `data-chord` values and wires the
//! page events to it, to the column layout and to auto-scroll. All decisions
//! are made by the pure modules; this file only measures and applies.
//!
//! Controls that are missing from the page are skipped with a warning.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, HtmlInputElement, KeyboardEvent, Window};
use crate::config::SheetConfig;
use crate::error::{SheetError, SheetResult};
use crate::layout::{compute_column_layout, longest_line_length, vertical_toggle_label, ColumnLayout, ColumnLayoutInput, ColumnMode};
use crate::models::{AccidentalPreference, TranspositionState};
use crate::parse::steps::parse_integer_prefix;
use crate::scroll::{reached_bottom, AutoScroll};
use crate::transposition::TranspositionController;
use super::helpers::config_from_js;
use crate::{wasm_error, wasm_info, wasm_log, wasm_warn};

const VERTICAL_MODE_CLASS: &str = "vertical-mode";

struct PageSession {
    config: SheetConfig,
    window: Window,
    document: Document,

    /// Chord elements, parallel to the controller's annotations
    chord_elements: Vec<Element>,
    controller: TranspositionController,
    steps_input: Option<HtmlInputElement>,

    scroll: AutoScroll,
    scroll_label: Option<Element>,
    scroll_timer: Option<i32>,
    scroll_tick: Option<Closure<dyn FnMut()>>,
}

type SharedSession = Rc<RefCell<PageSession>>;

/// Bind the song sheet on the current page
///
/// `config_js` may be `undefined` to use the stock selectors.
#[wasm_bindgen(js_name = bindSongSheet)]
pub fn bind_song_sheet(config_js: JsValue) -> Result<(), JsValue> {
    let config = config_from_js(config_js)?;
    bind(config).map_err(|e| {
        wasm_error!("bindSongSheet failed: {}", e);
        JsValue::from(e)
    })
}

fn bind(config: SheetConfig) -> SheetResult<()> {
    let window = web_sys::window().ok_or_else(|| SheetError::MissingElement("window".to_string()))?;
    let document = window
        .document()
        .ok_or_else(|| SheetError::MissingElement("document".to_string()))?;

    let (chord_elements, originals) = collect_chords(&document, &config)?;
    let initial_steps = read_initial_steps(&window, &config);
    let preference = checked_preference(&document, &config);
    let state = TranspositionState::from_page(initial_steps.as_deref(), preference.as_deref());

    let steps_input = document
        .get_element_by_id(&config.steps_input_id)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
    if steps_input.is_none() {
        wasm_warn!("bindSongSheet: no #{} input, offset will not be shown", config.steps_input_id);
    }

    wasm_info!(
        "bindSongSheet: {} chords, steps={}, preference='{}'",
        originals.len(),
        state.offset(),
        state.preference()
    );

    let session = Rc::new(RefCell::new(PageSession {
        scroll: AutoScroll::from_config(&config),
        controller: TranspositionController::new(state, originals),
        config,
        window,
        document,
        chord_elements,
        steps_input,
        scroll_label: None,
        scroll_timer: None,
        scroll_tick: None,
    }));

    render_chords(&session.borrow());
    bind_transposition(&session)?;
    bind_layout(&session)?;
    bind_auto_scroll(&session)?;
    Ok(())
}

// ============================================================================
// Transposition
// ============================================================================

fn collect_chords(document: &Document, config: &SheetConfig) -> SheetResult<(Vec<Element>, Vec<String>)> {
    let attribute = config.chord_attribute();
    let mut elements = Vec::new();
    let mut originals = Vec::new();

    for el in query_all(document, &config.chord_selector)? {
        match el.get_attribute(&attribute) {
            Some(original) if !original.is_empty() => {
                originals.push(original);
                elements.push(el);
            }
            _ => wasm_warn!("bindSongSheet: chord element without {} skipped", attribute),
        }
    }
    Ok((elements, originals))
}

fn read_initial_steps(window: &Window, config: &SheetConfig) -> Option<String> {
    let value = js_sys::Reflect::get(window, &JsValue::from_str(&config.initial_steps_property)).ok()?;
    value
        .as_string()
        .or_else(|| value.as_f64().filter(|n| n.is_finite()).map(|n| n.trunc().to_string()))
}

fn checked_preference(document: &Document, config: &SheetConfig) -> Option<String> {
    let selector = format!("{}:checked", config.preference_input_selector);
    document
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
}

fn render_chords(session: &PageSession) {
    for update in session.controller.display_updates() {
        if let Some(el) = session.chord_elements.get(update.index) {
            el.set_text_content(Some(&update.text));
        }
    }
    if let Some(input) = &session.steps_input {
        input.set_value(&session.controller.offset().to_string());
    }
}

fn update_transposition<F>(session: &SharedSession, f: F)
where
    F: FnOnce(&mut TranspositionController),
{
    let mut s = session.borrow_mut();
    f(&mut s.controller);
    wasm_log!("steps={}, preference='{}'", s.controller.offset(), s.controller.preference());
    render_chords(&s);
}

fn bind_transposition(session: &SharedSession) -> SheetResult<()> {
    let (document, config) = {
        let s = session.borrow();
        (s.document.clone(), s.config.clone())
    };

    let step_attribute = config.step_attribute();
    for button in query_all(&document, &config.transpose_button_selector)? {
        let Some(delta) = button.get_attribute(&step_attribute).as_deref().and_then(parse_integer_prefix) else {
            wasm_warn!("bindSongSheet: transpose button without numeric {} skipped", step_attribute);
            continue;
        };
        let st = session.clone();
        listen(&button, "click", move |_| {
            update_transposition(&st, |c| {
                c.transpose_by(delta);
            })
        })?;
    }

    for el in query_all(&document, &config.preference_input_selector)? {
        let Ok(input) = el.dyn_into::<HtmlInputElement>() else {
            continue;
        };
        let st = session.clone();
        let source = input.clone();
        listen(&input, "change", move |_| {
            let preference = AccidentalPreference::from_control_value(&source.value());
            update_transposition(&st, |c| c.set_preference(preference))
        })?;
    }

    let steps_input = session.borrow().steps_input.clone();
    if let Some(input) = steps_input {
        let st = session.clone();
        let source = input.clone();
        listen(&input, "change", move |_| {
            let raw = source.value();
            update_transposition(&st, |c| {
                c.set_offset_from_input(&raw);
            })
        })?;

        let st = session.clone();
        let source = input.clone();
        listen(&input, "keydown", move |event| {
            let is_enter = event
                .dyn_ref::<KeyboardEvent>()
                .map_or(false, |e| e.key() == "Enter");
            if is_enter {
                event.prevent_default();
                let raw = source.value();
                update_transposition(&st, |c| {
                    c.set_offset_from_input(&raw);
                })
            }
        })?;
    }

    match query_one(&document, &config.reset_button_selector) {
        Some(reset) => {
            let st = session.clone();
            listen(&reset, "click", move |_| {
                update_transposition(&st, |c| {
                    c.reset();
                })
            })?;
        }
        None => wasm_warn!("bindSongSheet: no {} button", config.reset_button_selector),
    }

    Ok(())
}

// ============================================================================
// Column layout
// ============================================================================

fn bind_layout(session: &SharedSession) -> SheetResult<()> {
    let (window, document, config) = {
        let s = session.borrow();
        (s.window.clone(), s.document.clone(), s.config.clone())
    };

    for event in ["load", "resize"] {
        let st = session.clone();
        listen(&window, event, move |_| refresh_layout(&st))?;
    }
    // The module may be bound after `load` has already fired
    refresh_layout(session);

    let Some(toggle) = document.get_element_by_id(&config.vertical_toggle_id) else {
        wasm_warn!("bindSongSheet: no #{} toggle", config.vertical_toggle_id);
        return Ok(());
    };

    let st = session.clone();
    let button = toggle.clone();
    listen(&toggle, "click", move |_| {
        if let Err(e) = toggle_vertical(&st, &button) {
            wasm_warn!("vertical toggle: {}", e);
        }
    })
}

fn toggle_vertical(session: &SharedSession, button: &Element) -> SheetResult<()> {
    let (window, container) = {
        let s = session.borrow();
        (s.window.clone(), query_one(&s.document, &s.config.container_selector))
    };
    let Some(container) = container else {
        return Ok(());
    };

    let vertical = container
        .class_list()
        .toggle(VERTICAL_MODE_CLASS)
        .map_err(|e| SheetError::dom("toggle vertical-mode", e))?;
    button.set_text_content(Some(vertical_toggle_label(vertical)));

    if vertical {
        refresh_layout(session);
        return Ok(());
    }

    clear_column_styles(&container);

    // Measure again once the cleared styles have been laid out
    let st = session.clone();
    let callback = Closure::once_into_js(move || refresh_layout(&st));
    window
        .request_animation_frame(callback.unchecked_ref())
        .map_err(|e| SheetError::dom("requestAnimationFrame", e))?;
    Ok(())
}

/// Drop the single-column class and inline layout styles; failures are logged
fn clear_column_styles(container: &Element) {
    if let Err(e) = container
        .class_list()
        .remove_1(ColumnMode::SingleColumn.class_name())
        .map_err(|e| SheetError::dom("remove single-column class", e))
    {
        wasm_warn!("vertical toggle: {}", e);
    }

    let Some(html) = container.dyn_ref::<HtmlElement>() else {
        return;
    };
    let style = html.style();
    for property in ["width", "column-count", "margin-left", "margin-right"] {
        if let Err(e) = style
            .remove_property(property)
            .map_err(|e| SheetError::dom(property, e))
        {
            wasm_warn!("vertical toggle: {}", e);
        }
    }
}

fn refresh_layout(session: &SharedSession) {
    let s = session.borrow();
    if let Err(e) = update_column_layout(&s) {
        wasm_warn!("column layout: {}", e);
    }
}

fn update_column_layout(session: &PageSession) -> SheetResult<()> {
    let config = &session.config;
    let Some(container) = query_one(&session.document, &config.container_selector) else {
        return Ok(());
    };

    let lengths: Vec<(usize, usize)> = query_all_in(&container, &config.line_selector)?
        .iter()
        .map(|line| {
            (
                child_text_len(line, &config.chord_line_selector),
                child_text_len(line, &config.lyric_line_selector),
            )
        })
        .collect();
    let Some(longest) = longest_line_length(lengths) else {
        return Ok(());
    };

    let input = ColumnLayoutInput {
        longest_line_chars: longest,
        char_width: measure_char_width(&session.document, &container)?,
        container_width: container.get_bounding_client_rect().width(),
        content_height: f64::from(container.scroll_height()),
        viewport_height: session
            .window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0),
        vertical_mode: container.class_list().contains(VERTICAL_MODE_CLASS),
    };

    let layout = compute_column_layout(&input, config);
    wasm_log!(
        "column layout: {} column(s), width {} (longest line {})",
        layout.column_count,
        layout.width.css(),
        longest
    );
    apply_column_layout(&container, &layout)
}

fn apply_column_layout(container: &Element, layout: &ColumnLayout) -> SheetResult<()> {
    let html = container
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| SheetError::Dom("sheet container is not an HTML element".to_string()))?;
    let style = html.style();
    let margin = if layout.centered { "auto" } else { "" };

    let properties = [
        ("column-count", layout.column_count.to_string()),
        ("width", layout.width.css()),
        ("margin-left", margin.to_string()),
        ("margin-right", margin.to_string()),
    ];
    for (name, value) in properties {
        style
            .set_property(name, &value)
            .map_err(|e| SheetError::dom(name, e))?;
    }

    let classes = container.class_list();
    classes
        .add_1(layout.mode.class_name())
        .map_err(|e| SheetError::dom("add layout class", e))?;
    classes
        .remove_1(layout.mode.other_class_name())
        .map_err(|e| SheetError::dom("remove layout class", e))?;
    Ok(())
}

/// Width of one "M" in the container's font
fn measure_char_width(document: &Document, container: &Element) -> SheetResult<f64> {
    let probe = document
        .create_element("span")
        .map_err(|e| SheetError::dom("create measuring span", e))?;
    probe.set_text_content(Some("M"));
    probe
        .set_attribute("style", "visibility: hidden")
        .map_err(|e| SheetError::dom("style measuring span", e))?;

    container
        .append_child(&probe)
        .map_err(|e| SheetError::dom("append measuring span", e))?;
    let width = probe.get_bounding_client_rect().width();
    container
        .remove_child(&probe)
        .map_err(|e| SheetError::dom("remove measuring span", e))?;
    Ok(width)
}

fn child_text_len(parent: &Element, selector: &str) -> usize {
    parent
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.text_content())
        .map_or(0, |text| text.chars().count())
}

// ============================================================================
// Auto-scroll
// ============================================================================

fn bind_auto_scroll(session: &SharedSession) -> SheetResult<()> {
    let (document, toggle_id) = {
        let s = session.borrow();
        (s.document.clone(), s.config.auto_scroll_toggle_id.clone())
    };
    let Some(label) = document.get_element_by_id(&toggle_id) else {
        wasm_warn!("bindSongSheet: no #{} control, auto-scroll disabled", toggle_id);
        return Ok(());
    };
    let Some(parent) = label.parent_node() else {
        return Ok(());
    };

    let slower = control_button(&document, "−")?;
    let faster = control_button(&document, "+")?;
    let label_node: &web_sys::Node = &label;
    parent
        .insert_before(&slower, Some(label_node))
        .map_err(|e| SheetError::dom("insert slower button", e))?;
    parent
        .insert_before(&faster, label.next_sibling().as_ref())
        .map_err(|e| SheetError::dom("insert faster button", e))?;

    {
        let mut s = session.borrow_mut();
        label.set_text_content(Some(&s.scroll.label()));
        s.scroll_label = Some(label);
    }

    let st = session.clone();
    listen(&slower, "click", move |_| {
        st.borrow_mut().scroll.slow_down();
        restart_scroll(&st);
    })?;

    let st = session.clone();
    listen(&faster, "click", move |_| {
        st.borrow_mut().scroll.speed_up();
        restart_scroll(&st);
    })
}

fn control_button(document: &Document, text: &str) -> SheetResult<Element> {
    let button = document
        .create_element("button")
        .map_err(|e| SheetError::dom("create scroll button", e))?;
    button.set_text_content(Some(text));
    button
        .set_attribute("type", "button")
        .map_err(|e| SheetError::dom("scroll button type", e))?;
    button
        .class_list()
        .add_1("control-btn")
        .map_err(|e| SheetError::dom("scroll button class", e))?;
    Ok(button)
}

/// Cancel any running timer and start one for the current speed
fn restart_scroll(session: &SharedSession) {
    let mut s = session.borrow_mut();
    if let Some(label) = &s.scroll_label {
        label.set_text_content(Some(&s.scroll.label()));
    }
    if let Some(handle) = s.scroll_timer.take() {
        s.window.clear_interval_with_handle(handle);
    }
    if !s.scroll.is_active() {
        s.scroll_tick = None;
        return;
    }

    let step = s.scroll.pixels_per_tick();
    let st = session.clone();
    let tick = Closure::<dyn FnMut()>::new(move || scroll_step(&st, step));
    let started = s.window.set_interval_with_callback_and_timeout_and_arguments_0(
        tick.as_ref().unchecked_ref(),
        s.config.scroll_interval_ms,
    );
    match started {
        Ok(handle) => {
            s.scroll_timer = Some(handle);
            s.scroll_tick = Some(tick);
        }
        Err(e) => wasm_warn!("auto-scroll: {}", SheetError::dom("setInterval", e)),
    }
}

fn scroll_step(session: &SharedSession, step: f64) {
    let mut s = session.borrow_mut();
    s.window.scroll_by_with_x_and_y(0.0, step);

    let inner_height = s.window.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0);
    let scroll_y = s.window.scroll_y().unwrap_or(0.0);
    let body_height = s
        .document
        .body()
        .map_or(0.0, |body| f64::from(body.offset_height()));

    if reached_bottom(inner_height, scroll_y, body_height) {
        if let Some(handle) = s.scroll_timer.take() {
            s.window.clear_interval_with_handle(handle);
        }
    }
}

// ============================================================================
// DOM helpers
// ============================================================================

fn listen<F>(target: &EventTarget, event: &str, handler: F) -> SheetResult<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| SheetError::dom(event, e))?;
    closure.forget();
    Ok(())
}

fn query_one(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

fn query_all(document: &Document, selector: &str) -> SheetResult<Vec<Element>> {
    let list = document
        .query_selector_all(selector)
        .map_err(|e| SheetError::dom(selector, e))?;
    Ok(node_list_elements(&list))
}

fn query_all_in(parent: &Element, selector: &str) -> SheetResult<Vec<Element>> {
    let list = parent
        .query_selector_all(selector)
        .map_err(|e| SheetError::dom(selector, e))?;
    Ok(node_list_elements(&list))
}

fn node_list_elements(list: &web_sys::NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}
