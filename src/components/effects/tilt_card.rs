//! Tilt Card
//!
//! Pointer position over the card maps to a perspective rotation;
//! leaving the card resets it.

use leptos::*;
use wasm_bindgen::JsCast;

const MAX_TILT_DEG: f64 = 16.0;
const REST_TRANSFORM: &str = "perspective(800px)";

/// The transform for a pointer at (x, y) inside a w x h card.
fn tilt_transform(x: f64, y: f64, width: f64, height: f64) -> String {
    if width <= 0.0 || height <= 0.0 {
        return REST_TRANSFORM.to_string();
    }
    let rotate_y = (x / width - 0.5) * MAX_TILT_DEG;
    let rotate_x = (0.5 - y / height) * MAX_TILT_DEG;
    format!(
        "perspective(800px) rotateX({:.2}deg) rotateY({:.2}deg)",
        rotate_x, rotate_y
    )
}

/// Card that tilts toward the pointer.
#[component]
pub fn TiltCard(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    let transform = create_rw_signal(REST_TRANSFORM.to_string());

    let on_mouse_move = move |event: ev::MouseEvent| {
        let target = event
            .current_target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok());
        if let Some(element) = target {
            let rect = element.get_bounding_client_rect();
            let x = event.client_x() as f64 - rect.left();
            let y = event.client_y() as f64 - rect.top();
            transform.set(tilt_transform(x, y, rect.width(), rect.height()));
        }
    };

    view! {
        <div
            class=format!("transition-transform duration-150 will-change-transform {}", class)
            style:transform=move || transform.get()
            on:mousemove=on_mouse_move
            on:mouseleave=move |_| transform.set(REST_TRANSFORM.to_string())
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_is_level() {
        assert_eq!(
            tilt_transform(100.0, 50.0, 200.0, 100.0),
            "perspective(800px) rotateX(0.00deg) rotateY(0.00deg)"
        );
    }

    #[test]
    fn corners_tilt_to_the_limit() {
        let transform = tilt_transform(200.0, 0.0, 200.0, 100.0);
        assert_eq!(
            transform,
            "perspective(800px) rotateX(8.00deg) rotateY(8.00deg)"
        );
    }

    #[test]
    fn degenerate_rect_stays_at_rest() {
        assert_eq!(tilt_transform(10.0, 10.0, 0.0, 0.0), REST_TRANSFORM);
    }
}
