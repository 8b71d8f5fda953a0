use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use super::context::use_animation_config;
use super::in_view::use_in_view;
use crate::animation::{CounterDriver, GlooTimers};

/// Stat text that counts up from zero the first time it scrolls into view.
///
/// `value` is display text such as `"96%"` or `"840억원"`; text without digits
/// is shown as is. `delay_ms` staggers siblings.
#[component]
pub fn AnimatedCounter(
    value: &'static str,
    #[prop(optional)] delay_ms: u32,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let cfg = use_animation_config();
    let node: NodeRef<html::Span> = NodeRef::new();

    let text = RwSignal::new(String::new());
    let driver = CounterDriver::new(value, &cfg, delay_ms, GlooTimers, move |t: &str| {
        text.set(t.to_owned())
    });
    text.set(driver.text());
    let driver = StoredValue::new_local(Some(driver));

    let visible = use_in_view(move || node.get().map(|el| el.unchecked_into()));

    Effect::new(move |_| {
        if visible.get() {
            driver.with_value(|d| {
                if let Some(d) = d {
                    d.became_visible();
                }
            });
        }
    });

    // drop before the signals go away so no tick writes into a disposed one
    on_cleanup(move || {
        driver.try_update_value(|d| d.take());
    });

    view! {
        <span node_ref=node class=class>{ move || text.get() }</span>
    }
}
