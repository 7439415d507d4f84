//! Shared DOM plumbing for the game pages: lookup-or-create helpers for
//! canvases, overlays and buttons, pointer-to-canvas coordinate mapping, and
//! small drawing helpers. Page elements all use the `da-` id prefix.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    window, CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, HtmlElement,
    MouseEvent, TouchEvent,
};

use crate::geom::Point;

pub type FrameCallback = std::rc::Rc<std::cell::RefCell<Option<Closure<dyn FnMut(f64)>>>>;

pub fn document() -> Result<Document, JsValue> {
    window()
        .ok_or_else(|| JsValue::from_str("no window"))?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

pub fn performance_now() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

/// Whether the page prefers a dark palette. Sampled once per page start.
pub fn prefers_dark() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok())
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// Fetch or create the page canvas with the given id, backing size and inline
/// style.
pub fn ensure_canvas(
    doc: &Document,
    id: &str,
    width: u32,
    height: u32,
    style: &str,
) -> Result<HtmlCanvasElement, JsValue> {
    if let Some(el) = doc.get_element_by_id(id) {
        return Ok(el.dyn_into()?);
    }
    let canvas: HtmlCanvasElement = doc.create_element("canvas")?.dyn_into()?;
    canvas.set_id(id);
    canvas.set_width(width);
    canvas.set_height(height);
    canvas.set_attribute("style", style).ok();
    body(doc)?.append_child(&canvas)?;
    Ok(canvas)
}

pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into()?;
    Ok(ctx)
}

/// Fetch or create an overlay div with inline styling. Returns the element
/// either way so callers can keep its text current.
pub fn ensure_overlay(doc: &Document, id: &str, style: &str) -> Result<Element, JsValue> {
    if let Some(el) = doc.get_element_by_id(id) {
        return Ok(el);
    }
    let div = doc.create_element("div")?;
    div.set_id(id);
    div.set_attribute("style", style).ok();
    body(doc)?.append_child(&div)?;
    Ok(div)
}

/// Fetch or create a button with a label and inline styling.
pub fn ensure_button(
    doc: &Document,
    id: &str,
    label: &str,
    style: &str,
) -> Result<HtmlElement, JsValue> {
    if let Some(el) = doc.get_element_by_id(id) {
        return Ok(el.dyn_into()?);
    }
    let button: HtmlElement = doc.create_element("button")?.dyn_into()?;
    button.set_id(id);
    button.set_text_content(Some(label));
    button.set_attribute("style", style).ok();
    body(doc)?.append_child(&button)?;
    Ok(button)
}

fn body(doc: &Document) -> Result<HtmlElement, JsValue> {
    doc.body().ok_or_else(|| JsValue::from_str("no body"))
}

/// Map a mouse event to canvas pixel coordinates through the bounding rect,
/// so CSS scaling of the canvas does not skew input.
pub fn mouse_canvas_point(canvas: &HtmlCanvasElement, evt: &MouseEvent) -> Point {
    let rect = canvas.get_bounding_client_rect();
    scale_to_canvas(
        canvas,
        &rect,
        evt.client_x() as f64,
        evt.client_y() as f64,
    )
}

/// Same mapping for the first active touch of a touch event, when present.
pub fn touch_canvas_point(canvas: &HtmlCanvasElement, evt: &TouchEvent) -> Option<Point> {
    let touch = evt.touches().get(0)?;
    let rect = canvas.get_bounding_client_rect();
    Some(scale_to_canvas(
        canvas,
        &rect,
        touch.client_x() as f64,
        touch.client_y() as f64,
    ))
}

fn scale_to_canvas(
    canvas: &HtmlCanvasElement,
    rect: &web_sys::DomRect,
    client_x: f64,
    client_y: f64,
) -> Point {
    let scale_x = if rect.width() > 0.0 {
        canvas.width() as f64 / rect.width()
    } else {
        1.0
    };
    let scale_y = if rect.height() > 0.0 {
        canvas.height() as f64 / rect.height()
    } else {
        1.0
    };
    Point::new(
        (client_x - rect.left()) * scale_x,
        (client_y - rect.top()) * scale_y,
    )
}

pub fn line(ctx: &CanvasRenderingContext2d, x1: f64, y1: f64, x2: f64, y2: f64) {
    ctx.begin_path();
    ctx.move_to(x1, y1);
    ctx.line_to(x2, y2);
    ctx.stroke();
}

/// Stroke a dash pattern by hand. `set_line_dash` wants a js_sys array, which
/// this crate otherwise has no use for.
pub fn dashed_line(
    ctx: &CanvasRenderingContext2d,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    dash: f64,
    gap: f64,
) {
    let dx = x2 - x1;
    let dy = y2 - y1;
    let len = (dx * dx + dy * dy).sqrt();
    if len == 0.0 || dash <= 0.0 {
        return;
    }
    let ux = dx / len;
    let uy = dy / len;
    let mut pos = 0.0;
    while pos < len {
        let end = (pos + dash).min(len);
        line(ctx, x1 + ux * pos, y1 + uy * pos, x1 + ux * end, y1 + uy * end);
        pos = end + gap;
    }
}

/// Update an element's text if it exists.
pub fn set_text(doc: &Document, id: &str, text: &str) {
    if let Some(el) = doc.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

/// Rewrite an element's inline style if it exists.
pub fn set_style(doc: &Document, id: &str, style: &str) {
    if let Some(el) = doc.get_element_by_id(id) {
        el.set_attribute("style", style).ok();
    }
}
