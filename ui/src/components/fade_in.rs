use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use super::context::use_animation_config;
use super::in_view::use_in_view;
use crate::animation::Reveal;

/// Fades and lifts its children in once, the first time they scroll into view.
#[component]
pub fn FadeIn(
    #[prop(optional)] delay_ms: u32,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let cfg = use_animation_config();
    let node: NodeRef<html::Div> = NodeRef::new();
    let visible = use_in_view(move || node.get().map(|el| el.unchecked_into()));

    let base = Reveal::new(&cfg, delay_ms);
    let style = move || {
        let mut reveal = base;
        if visible.get() {
            reveal.trigger();
        }
        reveal.css()
    };

    view! {
        <div node_ref=node class=class style=style>
            { children() }
        </div>
    }
}
