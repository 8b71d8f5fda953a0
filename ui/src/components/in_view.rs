use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::Closure;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::context::use_animation_config;
use crate::animation::{AnimationConfig, VisibilityState};

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Live browser observer for one element. Disconnects on drop.
struct Watch {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
}

impl Drop for Watch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observer_supported() -> bool {
    web_sys::window()
        .map(|w| js_sys::Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false)
}

impl Watch {
    /// `None` when the browser has no `IntersectionObserver`.
    fn start(el: &Element, cfg: &AnimationConfig, on_visible: impl Fn() + 'static) -> Option<Self> {
        if !observer_supported() {
            return None;
        }

        let latch = Rc::new(RefCell::new(VisibilityState::new(cfg.threshold())));
        latch.borrow_mut().observe();

        let callback: EntriesCallback = Closure::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let ratio = if entry.is_intersecting() { entry.intersection_ratio() } else { 0.0 };
                if latch.borrow_mut().on_intersection(ratio) {
                    log::debug!("in view at ratio {ratio:.3}");
                    observer.disconnect();
                    on_visible();
                    break;
                }
            }
        });

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(cfg.threshold()));
        init.set_root_margin(&cfg.root_margin());

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;
        observer.observe(el);

        Some(Self { observer, _callback: callback })
    }
}

/// One-shot "has this element been on screen" signal.
///
/// `target` is polled inside an effect, so pass something reactive like
/// `move || node_ref.get().map(|el| el.unchecked_into())`. Once true, the
/// signal stays true for the life of the calling component. Without
/// `IntersectionObserver` it turns true as soon as the element exists.
pub fn use_in_view(target: impl Fn() -> Option<Element> + 'static) -> ReadSignal<bool> {
    let cfg = use_animation_config();
    let (visible, set_visible) = signal(false);
    let watch: StoredValue<Option<Watch>, LocalStorage> = StoredValue::new_local(None);

    Effect::new(move |_| {
        let Some(el) = target() else {
            return;
        };
        if visible.get_untracked() || watch.with_value(Option::is_some) {
            return;
        }

        match Watch::start(&el, &cfg, move || set_visible.set(true)) {
            Some(w) => watch.set_value(Some(w)),
            None => {
                log::debug!("no IntersectionObserver, revealing immediately");
                set_visible.set(true);
            }
        }
    });

    on_cleanup(move || {
        watch.try_update_value(|w| w.take());
    });

    visible
}
