//! Collatz visualizer page: a number input with validation, quick-pick
//! buttons for famous starts, and a step animation that reveals the laid-out
//! walk one node at a time.

pub mod sequence;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, CanvasRenderingContext2d, Element, HtmlCanvasElement, HtmlInputElement};

use crate::dom::{
    ensure_canvas, ensure_overlay, line, performance_now, set_style, set_text, FrameCallback,
};

use sequence::{
    collatz_sequence, layout_nodes, sequence_stats, LayoutNode, SequenceStats,
    INTERESTING_STARTS, MAX_START, STEP_INTERVAL_MS,
};

pub const CANVAS_WIDTH: u32 = 1200;
pub const CANVAS_HEIGHT: u32 = 600;
const LAYOUT_PADDING: f64 = 80.0;

const BUTTON_STYLE: &str = "font-family:'Fira Code', monospace; font-size:14px; font-weight:600; padding:8px 14px; background:rgba(0,0,0,0.55); border:1px solid #333; border-radius:8px; color:#ffd166; cursor:pointer;";
const INPUT_STYLE: &str = "width:120px; padding:8px 10px; font-family:'Fira Code', monospace; font-size:14px; border:1px solid #333; border-radius:8px; background:rgba(0,0,0,0.55); color:#ffd166;";
const CONTROLS_STYLE: &str = "position:fixed; top:18px; left:50%; transform:translateX(-50%); display:flex; gap:8px; align-items:center; z-index:30;";
const STATUS_STYLE: &str = "position:fixed; top:66px; left:50%; transform:translateX(-50%); font-family:'Fira Code', monospace; font-size:13px; color:#f87171; z-index:30;";
const STATS_STYLE: &str = "position:fixed; bottom:18px; left:50%; transform:translateX(-50%); font-family:'Fira Code', monospace; font-size:14px; color:#6b7280; z-index:30;";

/// Reveal clock: which node of the walk should be visible at `now`.
struct StepClock {
    start_ms: f64,
    interval_ms: f64,
}

impl StepClock {
    fn new(now: f64, interval_ms: f64) -> Self {
        Self {
            start_ms: now,
            interval_ms,
        }
    }

    fn step_at(&self, now: f64) -> usize {
        if self.interval_ms <= 0.0 {
            return 0;
        }
        let elapsed = now - self.start_ms;
        if elapsed <= 0.0 {
            0
        } else {
            (elapsed / self.interval_ms).floor() as usize
        }
    }
}

struct CollatzState {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    seq: Vec<u64>,
    nodes: Vec<LayoutNode>,
    stats: SequenceStats,
    clock: StepClock,
    current_step: usize,
    animating: bool,
    dark: bool,
}

pub(crate) fn start_collatz_page() -> Result<(), JsValue> {
    let doc = crate::dom::document()?;

    let dark = crate::dom::prefers_dark();
    let canvas = ensure_canvas(
        &doc,
        "da-collatz-canvas",
        CANVAS_WIDTH,
        CANVAS_HEIGHT,
        "position:fixed; left:50%; top:56%; transform:translate(-50%,-50%); width:min(96vw, 1200px); border:2px solid #333; border-radius:12px; z-index:20;",
    )?;
    let ctx = crate::dom::context_2d(&canvas)?;
    ctx.set_font("12px monospace");
    ctx.set_text_align("center");
    ctx.set_text_baseline("bottom");

    // Controls row: input, run/stop, quick picks
    if doc.get_element_by_id("da-collatz-controls").is_none() {
        let controls = doc.create_element("div")?;
        controls.set_id("da-collatz-controls");
        controls.set_attribute("style", CONTROLS_STYLE).ok();

        let input: HtmlInputElement = doc.create_element("input")?.dyn_into()?;
        input.set_id("da-collatz-input");
        input.set_attribute("type", "number")?;
        input.set_attribute("min", "1")?;
        input.set_attribute("max", "10000")?;
        input.set_attribute("placeholder", "Enter a number")?;
        input.set_value("27");
        input.set_attribute("style", INPUT_STYLE).ok();
        controls.append_child(&input)?;

        add_button(&doc, &controls, "da-collatz-run", "Visualize")?;
        let stop = add_button(&doc, &controls, "da-collatz-stop", "Stop")?;
        stop.set_attribute("style", &format!("{BUTTON_STYLE} display:none;"))
            .ok();
        for &n in INTERESTING_STARTS.iter() {
            add_button(&doc, &controls, &format!("da-collatz-pick-{n}"), &n.to_string())?;
        }

        doc.body()
            .ok_or_else(|| JsValue::from_str("no body"))?
            .append_child(&controls)?;
    }
    ensure_overlay(&doc, "da-collatz-status", STATUS_STYLE)?;
    ensure_overlay(&doc, "da-collatz-stats", STATS_STYLE)?;

    let state = CollatzState {
        canvas,
        ctx,
        seq: Vec::new(),
        nodes: Vec::new(),
        stats: sequence_stats(&[]),
        clock: StepClock::new(performance_now(), STEP_INTERVAL_MS),
        current_step: 0,
        animating: false,
        dark,
    };
    COLLATZ_STATE.with(|cell| cell.replace(Some(state)));

    // Run button reads the input fresh on every click
    if let Some(run) = doc.get_element_by_id("da-collatz-run") {
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            let value = window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id("da-collatz-input"))
                .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
                .map(|input| input.value())
                .unwrap_or_default();
            run_visualization(&value);
        }) as Box<dyn FnMut(_)>);
        run.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    if let Some(stop) = doc.get_element_by_id("da-collatz-stop") {
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            COLLATZ_STATE.with(|cell| {
                if let Some(state) = cell.borrow_mut().as_mut() {
                    state.animating = false;
                }
            });
        }) as Box<dyn FnMut(_)>);
        stop.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    for &n in INTERESTING_STARTS.iter() {
        if let Some(pick) = doc.get_element_by_id(&format!("da-collatz-pick-{n}")) {
            let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
                if let Some(input) = window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.get_element_by_id("da-collatz-input"))
                    .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
                {
                    input.set_value(&n.to_string());
                }
                COLLATZ_STATE.with(|cell| {
                    if let Some(state) = cell.borrow_mut().as_mut() {
                        state.seq.clear();
                        state.nodes.clear();
                        state.stats = sequence_stats(&[]);
                        state.current_step = 0;
                        state.animating = false;
                    }
                });
                if let Some(d) = window().and_then(|w| w.document()) {
                    set_text(&d, "da-collatz-status", "");
                }
            }) as Box<dyn FnMut(_)>);
            pick.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
    }

    start_collatz_loop();
    Ok(())
}

fn add_button(
    doc: &web_sys::Document,
    parent: &Element,
    id: &str,
    label: &str,
) -> Result<Element, JsValue> {
    let button = doc.create_element("button")?;
    button.set_id(id);
    button.set_text_content(Some(label));
    button.set_attribute("style", BUTTON_STYLE).ok();
    parent.append_child(&button)?;
    Ok(button)
}

fn run_visualization(raw: &str) {
    let Some(doc) = window().and_then(|w| w.document()) else {
        return;
    };
    let n = match raw.trim().parse::<u64>() {
        Ok(n) if (1..=MAX_START).contains(&n) => n,
        Ok(n) if n > MAX_START => {
            set_text(
                &doc,
                "da-collatz-status",
                "Please enter a number less than 10,000 for better visualization",
            );
            return;
        }
        _ => {
            set_text(&doc, "da-collatz-status", "Please enter a positive integer");
            return;
        }
    };
    set_text(&doc, "da-collatz-status", "");

    COLLATZ_STATE.with(|cell| {
        if let Some(state) = cell.borrow_mut().as_mut() {
            state.seq = collatz_sequence(n);
            state.stats = sequence_stats(&state.seq);
            state.nodes = layout_nodes(
                &state.seq,
                CANVAS_WIDTH as f64,
                CANVAS_HEIGHT as f64,
                LAYOUT_PADDING,
            );
            state.current_step = 0;
            state.clock = StepClock::new(performance_now(), STEP_INTERVAL_MS);
            state.animating = state.seq.len() > 1;
        }
    });
}

thread_local! {
    static COLLATZ_STATE: std::cell::RefCell<Option<CollatzState>> = std::cell::RefCell::new(None);
}

fn start_collatz_loop() {
    let f: FrameCallback = std::rc::Rc::new(std::cell::RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        COLLATZ_STATE.with(|cell| {
            if let Some(state) = cell.borrow_mut().as_mut() {
                collatz_tick(state, ts);
            }
        });
        if let Some(w) = window() {
            let _ =
                w.request_animation_frame(f.borrow().as_ref().unwrap().as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(w) = window() {
        let _ = w.request_animation_frame(g.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

fn collatz_tick(state: &mut CollatzState, now: f64) {
    if state.animating && !state.nodes.is_empty() {
        let last = state.nodes.len() - 1;
        state.current_step = state.clock.step_at(now).min(last);
        if state.current_step == last {
            state.animating = false;
        }
    }
    render_collatz(state);
    update_collatz_overlays(state);
}

fn render_collatz(state: &CollatzState) {
    let ctx = &state.ctx;
    let w = state.canvas.width() as f64;
    let h = state.canvas.height() as f64;
    ctx.set_fill_style_str(if state.dark { "#0a0a0a" } else { "#ffffff" });
    ctx.fill_rect(0.0, 0.0, w, h);
    if state.nodes.is_empty() {
        return;
    }

    let idle_color = if state.dark { "#444444" } else { "#cccccc" };
    let gradient_from = if state.dark { "#60a5fa" } else { "#3b82f6" };
    let gradient_to = if state.dark { "#a78bfa" } else { "#8b5cf6" };

    // Edges up to the reveal front; the edge arriving at the current node
    // gets the gradient highlight
    for i in 0..state.nodes.len() - 1 {
        if i > state.current_step {
            break;
        }
        let a = state.nodes[i];
        let b = state.nodes[i + 1];
        let active = i + 1 == state.current_step;
        if active {
            let gradient = ctx.create_linear_gradient(a.x, a.y, b.x, b.y);
            gradient.add_color_stop(0.0, gradient_from).ok();
            gradient.add_color_stop(1.0, gradient_to).ok();
            ctx.set_stroke_style_canvas_gradient(&gradient);
            ctx.set_line_width(3.0);
        } else {
            ctx.set_stroke_style_str(idle_color);
            ctx.set_line_width(2.0);
        }
        line(ctx, a.x, a.y, b.x, b.y);

        // Arrowhead filled to match the edge so it stays visible
        ctx.set_fill_style_str(if active { gradient_to } else { idle_color });
        let angle = (b.y - a.y).atan2(b.x - a.x);
        let size = 8.0;
        let left = angle - std::f64::consts::FRAC_PI_6;
        let right = angle + std::f64::consts::FRAC_PI_6;
        ctx.begin_path();
        ctx.move_to(b.x, b.y);
        ctx.line_to(b.x - size * left.cos(), b.y - size * left.sin());
        ctx.line_to(b.x - size * right.cos(), b.y - size * right.sin());
        ctx.close_path();
        ctx.fill();
    }

    // Revealed nodes with role colors, value label above each
    for (i, node) in state.nodes.iter().enumerate() {
        if i > state.current_step {
            break;
        }
        let color = if i == 0 {
            if state.dark { "#10b981" } else { "#059669" }
        } else if node.value == 1 {
            if state.dark { "#ef4444" } else { "#dc2626" }
        } else if i == state.current_step {
            if state.dark { "#f59e0b" } else { "#d97706" }
        } else if state.dark {
            "#3b82f6"
        } else {
            "#2563eb"
        };
        ctx.set_fill_style_str(color);
        ctx.begin_path();
        ctx.arc(node.x, node.y, 8.0, 0.0, std::f64::consts::TAU).ok();
        ctx.fill();

        ctx.set_fill_style_str(if state.dark { "#ffffff" } else { "#000000" });
        ctx.fill_text(&node.value.to_string(), node.x, node.y - 12.0)
            .ok();
    }
}

fn update_collatz_overlays(state: &CollatzState) {
    let Some(doc) = window().and_then(|w| w.document()) else {
        return;
    };
    let stats_line = if state.seq.is_empty() {
        String::from("Enter a starting number and press Visualize")
    } else {
        let current = state.seq.get(state.current_step).copied().unwrap_or(1);
        format!(
            "Steps: {} \u{2022} Max: {} \u{2022} Current: {}",
            state.stats.steps, state.stats.max_value, current
        )
    };
    set_text(&doc, "da-collatz-stats", &stats_line);
    set_style(
        &doc,
        "da-collatz-stop",
        &format!(
            "{BUTTON_STYLE} display:{};",
            if state.animating { "inline-block" } else { "none" }
        ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_clock_counts_intervals() {
        let clock = StepClock::new(1_000.0, 300.0);
        assert_eq!(clock.step_at(1_000.0), 0);
        assert_eq!(clock.step_at(1_299.0), 0);
        assert_eq!(clock.step_at(1_300.0), 1);
        assert_eq!(clock.step_at(1_900.0), 3);
    }

    #[test]
    fn test_step_clock_clamps_backwards_time() {
        let clock = StepClock::new(1_000.0, 300.0);
        assert_eq!(clock.step_at(500.0), 0);
        let degenerate = StepClock::new(0.0, 0.0);
        assert_eq!(degenerate.step_at(10_000.0), 0);
    }
}
