//! Particle Background
//!
//! Ambient drifting-particle canvas behind hero sections. Nearby
//! particles are linked with distance-faded lines.

use leptos::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const PARTICLE_COUNT: usize = 60;
const LINK_DISTANCE: f64 = 120.0;

struct Particle {
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
    radius: f64,
}

impl Particle {
    fn random(width: f64, height: f64) -> Self {
        let rand = js_sys::Math::random;
        Self {
            x: rand() * width,
            y: rand() * height,
            vx: (rand() - 0.5) * 0.6,
            vy: (rand() - 0.5) * 0.6,
            radius: 1.0 + rand() * 2.0,
        }
    }

    fn step(&mut self, width: f64, height: f64) {
        self.x += self.vx;
        self.y += self.vy;
        if self.x < 0.0 || self.x > width {
            self.vx = -self.vx;
        }
        if self.y < 0.0 || self.y > height {
            self.vy = -self.vy;
        }
    }
}

/// Decorative particle field; pointer events pass through it.
#[component]
pub fn ParticleField() -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let running = Rc::new(Cell::new(true));
    let started = Rc::new(Cell::new(false));

    {
        let running = Rc::clone(&running);
        let started = Rc::clone(&started);
        create_effect(move |_| {
            if let Some(canvas) = canvas_ref.get() {
                if !started.replace(true) {
                    start_loop(&canvas, Rc::clone(&running));
                }
            }
        });
    }

    {
        let running = Rc::clone(&running);
        on_cleanup(move || running.set(false));
    }

    view! {
        <canvas
            node_ref=canvas_ref
            width="1280"
            height="640"
            class="absolute inset-0 w-full h-full pointer-events-none opacity-60"
        />
    }
}

fn start_loop(canvas: &HtmlCanvasElement, running: Rc<Cell<bool>>) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    let particles: Rc<RefCell<Vec<Particle>>> = Rc::new(RefCell::new(
        (0..PARTICLE_COUNT)
            .map(|_| Particle::random(width, height))
            .collect(),
    ));

    frame(ctx, particles, running, width, height);
}

fn frame(
    ctx: CanvasRenderingContext2d,
    particles: Rc<RefCell<Vec<Particle>>>,
    running: Rc<Cell<bool>>,
    width: f64,
    height: f64,
) {
    if !running.get() {
        return;
    }

    draw(&ctx, &mut particles.borrow_mut(), width, height);

    request_animation_frame(move || frame(ctx, particles, running, width, height));
}

fn draw(ctx: &CanvasRenderingContext2d, particles: &mut [Particle], width: f64, height: f64) {
    ctx.clear_rect(0.0, 0.0, width, height);

    for particle in particles.iter_mut() {
        particle.step(width, height);
    }

    // Link lines, faded by distance
    ctx.set_line_width(1.0);
    for i in 0..particles.len() {
        for j in (i + 1)..particles.len() {
            let dx = particles[i].x - particles[j].x;
            let dy = particles[i].y - particles[j].y;
            let distance = (dx * dx + dy * dy).sqrt();
            if distance < LINK_DISTANCE {
                let alpha = 1.0 - distance / LINK_DISTANCE;
                ctx.set_stroke_style(&format!("rgba(129, 140, 248, {:.3})", alpha * 0.4).into());
                ctx.begin_path();
                ctx.move_to(particles[i].x, particles[i].y);
                ctx.line_to(particles[j].x, particles[j].y);
                ctx.stroke();
            }
        }
    }

    ctx.set_fill_style(&"#818cf8".into());
    for particle in particles.iter() {
        ctx.begin_path();
        let _ = ctx.arc(
            particle.x,
            particle.y,
            particle.radius,
            0.0,
            std::f64::consts::PI * 2.0,
        );
        ctx.fill();
    }
}
