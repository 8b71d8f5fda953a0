use leptos::ev::MouseEvent;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::animation::tilt::{MAX_TILT_DEG, neutral, tilt_transform};

/// Card that leans towards the pointer and settles back on leave.
#[component]
pub fn TiltCard(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    let transform = RwSignal::new(neutral());

    let on_move = move |ev: MouseEvent| {
        let Some(el) = ev.current_target().map(|t| t.unchecked_into::<Element>()) else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        let x = ev.client_x() as f64 - rect.left();
        let y = ev.client_y() as f64 - rect.top();
        transform.set(tilt_transform(x, y, rect.width(), rect.height(), MAX_TILT_DEG));
    };

    view! {
        <div
            class=format!("transform-gpu transition-transform duration-200 ease-out {class}")
            style=move || format!("transform-style:preserve-3d;transform:{};", transform.get())
            on:mousemove=on_move
            on:mouseleave=move |_| transform.set(neutral())
        >
            { children() }
        </div>
    }
}
