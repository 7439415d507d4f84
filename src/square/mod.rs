//! Square-drawing game page. The scoring engine lives in [`scoring`] and the
//! input lifecycle in [`gesture`]; this module owns the canvas, the DOM
//! overlays, the pointer listeners and the frame loop that ties them together.

pub mod gesture;
pub mod palette;
pub mod scoring;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};

use crate::audio;
use crate::dom::{
    dashed_line, ensure_button, ensure_canvas, ensure_overlay, line, set_style, set_text,
    FrameCallback,
};
use crate::geom::Point;
use crate::storage;

use gesture::{Gesture, Phase};
use palette::{accuracy_color, score_color, verdict};
use scoring::segment_accuracy;

/// Backing resolution of the square canvas, both axes.
pub const CANVAS_SIZE: u32 = 600;

const BEST_SCORE_KEY: &str = "drawSquareHighScore";

const SCORE_OVERLAY_BASE: &str = "position:fixed; top:18px; left:50%; transform:translateX(-50%); font-family:'Fira Code', monospace; font-size:48px; font-weight:bold; text-align:center; z-index:30;";
const VERDICT_OVERLAY_STYLE: &str = "position:fixed; top:86px; left:50%; transform:translateX(-50%); font-family:'Fira Code', monospace; font-size:20px; text-align:center; color:#6b7280; z-index:30;";
const STATS_OVERLAY_STYLE: &str = "position:fixed; bottom:18px; left:50%; transform:translateX(-50%); font-family:'Fira Code', monospace; font-size:14px; color:#6b7280; z-index:30;";
const RESET_BUTTON_BASE: &str = "position:fixed; top:24px; right:24px; font-family:'Fira Code', monospace; font-size:14px; font-weight:600; padding:8px 14px; background:rgba(0,0,0,0.55); border:1px solid #333; border-radius:8px; color:#ffd166; cursor:pointer; z-index:40;";

struct SquareState {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    gesture: Gesture,
    attempts: u32,
    best: f64,
    dark: bool,
}

/// Sound cue owed for a finished attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Feedback {
    NewBest,
    Strong,
    Quiet,
    Weak,
}

fn attempt_feedback(score: f64, previous_best: f64) -> Feedback {
    if score > previous_best {
        Feedback::NewBest
    } else if score > 85.0 {
        Feedback::Strong
    } else if score < 50.0 {
        Feedback::Weak
    } else {
        Feedback::Quiet
    }
}

pub(crate) fn start_square_page() -> Result<(), JsValue> {
    let doc = crate::dom::document()?;

    let dark = crate::dom::prefers_dark();
    let canvas_style = format!(
        "position:fixed; left:50%; top:54%; transform:translate(-50%,-50%); background:{}; border-radius:12px; box-shadow:0 0 28px 0 rgba(0,0,0,0.18); cursor:crosshair; touch-action:none; z-index:20;",
        if dark { "#030712" } else { "#ffffff" }
    );
    let canvas = ensure_canvas(&doc, "da-square-canvas", CANVAS_SIZE, CANVAS_SIZE, &canvas_style)?;
    let ctx = crate::dom::context_2d(&canvas)?;

    ensure_overlay(
        &doc,
        "da-square-score",
        &format!("{SCORE_OVERLAY_BASE} color:#9ca3af;"),
    )?;
    ensure_overlay(&doc, "da-square-verdict", VERDICT_OVERLAY_STYLE)?;
    ensure_overlay(&doc, "da-square-stats", STATS_OVERLAY_STYLE)?;
    let reset = ensure_button(
        &doc,
        "da-square-reset",
        "Try Again",
        &format!("{RESET_BUTTON_BASE} display:none;"),
    )?;

    let center = Point::new(CANVAS_SIZE as f64 / 2.0, CANVAS_SIZE as f64 / 2.0);
    let state = SquareState {
        canvas: canvas.clone(),
        ctx,
        gesture: Gesture::new(center),
        attempts: 0,
        best: storage::load_best(BEST_SCORE_KEY),
        dark,
    };
    SQUARE_STATE.with(|cell| cell.replace(Some(state)));

    // Mouse input
    {
        let canvas_down = canvas.clone();
        let closure = Closure::wrap(Box::new(move |evt: web_sys::MouseEvent| {
            evt.prevent_default();
            let point = crate::dom::mouse_canvas_point(&canvas_down, &evt);
            SQUARE_STATE.with(|cell| {
                if let Some(state) = cell.borrow_mut().as_mut() {
                    state.gesture.press(point);
                }
            });
        }) as Box<dyn FnMut(_)>);
        canvas.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    {
        let canvas_move = canvas.clone();
        let closure = Closure::wrap(Box::new(move |evt: web_sys::MouseEvent| {
            evt.prevent_default();
            let point = crate::dom::mouse_canvas_point(&canvas_move, &evt);
            SQUARE_STATE.with(|cell| {
                if let Some(state) = cell.borrow_mut().as_mut() {
                    state.gesture.drag(point);
                }
            });
        }) as Box<dyn FnMut(_)>);
        canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    // Leaving the canvas ends the attempt the same as lifting the button
    for event in ["mouseup", "mouseleave"] {
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            finish_attempt();
        }) as Box<dyn FnMut(_)>);
        canvas.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Touch input
    {
        let canvas_touch = canvas.clone();
        let closure = Closure::wrap(Box::new(move |evt: web_sys::TouchEvent| {
            evt.prevent_default();
            if let Some(point) = crate::dom::touch_canvas_point(&canvas_touch, &evt) {
                SQUARE_STATE.with(|cell| {
                    if let Some(state) = cell.borrow_mut().as_mut() {
                        state.gesture.press(point);
                    }
                });
            }
        }) as Box<dyn FnMut(_)>);
        canvas.add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    {
        let canvas_touch = canvas.clone();
        let closure = Closure::wrap(Box::new(move |evt: web_sys::TouchEvent| {
            evt.prevent_default();
            if let Some(point) = crate::dom::touch_canvas_point(&canvas_touch, &evt) {
                SQUARE_STATE.with(|cell| {
                    if let Some(state) = cell.borrow_mut().as_mut() {
                        state.gesture.drag(point);
                    }
                });
            }
        }) as Box<dyn FnMut(_)>);
        canvas.add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::TouchEvent| {
            evt.prevent_default();
            finish_attempt();
        }) as Box<dyn FnMut(_)>);
        canvas.add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            SQUARE_STATE.with(|cell| {
                if let Some(state) = cell.borrow_mut().as_mut() {
                    state.gesture.reset();
                }
            });
        }) as Box<dyn FnMut(_)>);
        reset.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    start_square_loop();
    Ok(())
}

fn finish_attempt() {
    SQUARE_STATE.with(|cell| {
        if let Some(state) = cell.borrow_mut().as_mut() {
            let Some(score) = state.gesture.release() else {
                return;
            };
            state.attempts += 1;
            let feedback = attempt_feedback(score, state.best);
            if feedback == Feedback::NewBest {
                state.best = score;
                storage::save_best(BEST_SCORE_KEY, score);
            }
            match feedback {
                Feedback::NewBest | Feedback::Strong => audio::play_success(),
                Feedback::Weak => audio::play_error(),
                Feedback::Quiet => {}
            }
        }
    });
}

thread_local! {
    static SQUARE_STATE: std::cell::RefCell<Option<SquareState>> = std::cell::RefCell::new(None);
}

fn start_square_loop() {
    let f: FrameCallback = std::rc::Rc::new(std::cell::RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
        SQUARE_STATE.with(|cell| {
            if let Some(state) = cell.borrow_mut().as_mut() {
                render_square(state);
                update_overlays(state);
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

fn render_square(state: &SquareState) {
    let ctx = &state.ctx;
    let size = state.canvas.width() as f64;
    let center = Point::new(size / 2.0, size / 2.0);
    ctx.clear_rect(0.0, 0.0, size, size);

    // Center marker and crosshair
    ctx.set_fill_style_str(if state.dark { "#888888" } else { "#666666" });
    ctx.begin_path();
    ctx.arc(center.x, center.y, 6.0, 0.0, std::f64::consts::TAU).ok();
    ctx.fill();
    ctx.set_stroke_style_str(if state.dark { "#666666" } else { "#999999" });
    ctx.set_line_width(1.0);
    line(ctx, center.x - 15.0, center.y, center.x + 15.0, center.y);
    line(ctx, center.x, center.y - 15.0, center.x, center.y + 15.0);

    let scored = state.gesture.phase() == Phase::Scored;

    // Reference square: dashed outline while drawing, filled once scored
    if let Some(reference) = state.gesture.reference() {
        let corners = reference.corners;
        if scored {
            ctx.set_fill_style_str(if state.dark {
                "rgba(96, 165, 250, 0.15)"
            } else {
                "rgba(37, 99, 235, 0.1)"
            });
            ctx.set_stroke_style_str(if state.dark {
                "rgba(96, 165, 250, 0.8)"
            } else {
                "rgba(37, 99, 235, 0.8)"
            });
            ctx.set_line_width(3.0);
            ctx.begin_path();
            ctx.move_to(corners[0].x, corners[0].y);
            for corner in &corners[1..] {
                ctx.line_to(corner.x, corner.y);
            }
            ctx.close_path();
            ctx.fill();
            ctx.stroke();

            // Rays out to the corners
            ctx.set_stroke_style_str(if state.dark {
                "rgba(96, 165, 250, 0.3)"
            } else {
                "rgba(37, 99, 235, 0.3)"
            });
            ctx.set_line_width(1.0);
            for corner in &corners {
                line(ctx, center.x, center.y, corner.x, corner.y);
            }
        } else {
            ctx.set_stroke_style_str(if state.dark {
                "rgba(96, 165, 250, 0.4)"
            } else {
                "rgba(37, 99, 235, 0.4)"
            });
            ctx.set_line_width(2.0);
            for (a, b) in reference.edges() {
                dashed_line(ctx, a.x, a.y, b.x, b.y, 5.0, 5.0);
            }
        }
    }

    // Drawn path, one segment per sample so each gets its own accuracy color
    let path = state.gesture.path();
    if path.len() > 1 {
        ctx.set_line_width(5.0);
        ctx.set_line_cap("round");
        ctx.set_line_join("round");
        if let Some(reference) = state.gesture.reference() {
            let max_deviation = state.gesture.deviation_window();
            for i in 1..path.len() {
                let accuracy = segment_accuracy(path[i], reference, max_deviation);
                ctx.set_stroke_style_str(&accuracy_color(accuracy));
                line(ctx, path[i - 1].x, path[i - 1].y, path[i].x, path[i].y);
            }
        } else {
            // No reference yet, draw the whole path in neutral gray
            ctx.set_stroke_style_str(if state.dark { "#666666" } else { "#999999" });
            ctx.begin_path();
            ctx.move_to(path[0].x, path[0].y);
            for p in &path[1..] {
                ctx.line_to(p.x, p.y);
            }
            ctx.stroke();
        }
    }
}

fn update_overlays(state: &SquareState) {
    let Some(doc) = window().and_then(|w| w.document()) else {
        return;
    };

    let (headline, color, caption) = match state.gesture.phase() {
        Phase::Scored => {
            let score = state.gesture.final_score().unwrap_or(0.0);
            (
                format!("{score}%"),
                score_color(score, state.dark),
                verdict(score).to_string(),
            )
        }
        Phase::Drawing if state.gesture.live_score().unwrap_or(0.0) > 0.0 => {
            let score = state.gesture.live_score().unwrap_or(0.0);
            (
                format!("{score:.1}%"),
                score_color(score, state.dark),
                "Keep going...".to_string(),
            )
        }
        _ => (
            "Draw a perfect square".to_string(),
            "#9ca3af",
            if state.attempts > 0 {
                format!("Best: {:.1}%", state.best)
            } else {
                String::new()
            },
        ),
    };

    set_text(&doc, "da-square-score", &headline);
    set_style(
        &doc,
        "da-square-score",
        &format!("{SCORE_OVERLAY_BASE} color:{color};"),
    );
    set_text(&doc, "da-square-verdict", &caption);
    set_text(
        &doc,
        "da-square-stats",
        &if state.attempts > 0 {
            format!(
                "Attempts: {} \u{2022} Best: {:.1}%",
                state.attempts, state.best
            )
        } else {
            String::new()
        },
    );
    set_style(
        &doc,
        "da-square-reset",
        &format!(
            "{RESET_BUTTON_BASE} display:{};",
            if state.gesture.phase() == Phase::Scored {
                "block"
            } else {
                "none"
            }
        ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attempt_feedback_policy() {
        // Beating the saved best always celebrates, even from a low score
        assert_eq!(attempt_feedback(40.0, 30.0), Feedback::NewBest);
        assert_eq!(attempt_feedback(90.0, 95.0), Feedback::Strong);
        assert_eq!(attempt_feedback(85.0, 95.0), Feedback::Quiet);
        assert_eq!(attempt_feedback(60.0, 95.0), Feedback::Quiet);
        assert_eq!(attempt_feedback(49.9, 95.0), Feedback::Weak);
        // Matching the best exactly is not a new best
        assert_eq!(attempt_feedback(95.0, 95.0), Feedback::Strong);
    }
}
