//! Cursor Trail
//!
//! Fading dots that follow the pointer, drawn on a full-screen overlay
//! canvas. Mounted once at the app root.

use leptos::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const DECAY_PER_FRAME: f64 = 0.04;

struct TrailPoint {
    x: f64,
    y: f64,
    life: f64,
}

/// Pointer trail overlay; pointer events pass through it.
#[component]
pub fn CursorTrail() -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let points: Rc<RefCell<Vec<TrailPoint>>> = Rc::new(RefCell::new(Vec::new()));
    let running = Rc::new(Cell::new(true));
    let started = Rc::new(Cell::new(false));

    let listener = {
        let points = Rc::clone(&points);
        window_event_listener(ev::mousemove, move |event| {
            points.borrow_mut().push(TrailPoint {
                x: event.client_x() as f64,
                y: event.client_y() as f64,
                life: 1.0,
            });
        })
    };

    {
        let points = Rc::clone(&points);
        let running = Rc::clone(&running);
        let started = Rc::clone(&started);
        create_effect(move |_| {
            if let Some(canvas) = canvas_ref.get() {
                if !started.replace(true) {
                    size_to_window(&canvas);
                    if let Some(ctx) = context_2d(&canvas) {
                        frame(ctx, Rc::clone(&points), Rc::clone(&running));
                    }
                }
            }
        });
    }

    {
        let running = Rc::clone(&running);
        on_cleanup(move || {
            running.set(false);
            listener.remove();
        });
    }

    view! {
        <canvas
            node_ref=canvas_ref
            class="fixed inset-0 z-30 pointer-events-none"
        />
    }
}

fn size_to_window(canvas: &HtmlCanvasElement) {
    if let Some(window) = web_sys::window() {
        let width = window
            .inner_width()
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or(1280.0);
        let height = window
            .inner_height()
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or(720.0);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

fn frame(
    ctx: CanvasRenderingContext2d,
    points: Rc<RefCell<Vec<TrailPoint>>>,
    running: Rc<Cell<bool>>,
) {
    if !running.get() {
        return;
    }

    {
        let mut points = points.borrow_mut();
        for point in points.iter_mut() {
            point.life -= DECAY_PER_FRAME;
        }
        points.retain(|point| point.life > 0.0);

        let canvas = ctx.canvas();
        let (width, height) = canvas
            .as_ref()
            .map(|canvas| (canvas.width() as f64, canvas.height() as f64))
            .unwrap_or((0.0, 0.0));
        ctx.clear_rect(0.0, 0.0, width, height);

        for point in points.iter() {
            ctx.set_fill_style(&format!("rgba(165, 180, 252, {:.3})", point.life * 0.5).into());
            ctx.begin_path();
            let _ = ctx.arc(point.x, point.y, 3.0 * point.life, 0.0, std::f64::consts::PI * 2.0);
            ctx.fill();
        }
    }

    request_animation_frame(move || frame(ctx, points, running));
}
