//! Leaflo marketing site: a client-rendered Leptos app with scroll-triggered
//! reveals and count-up statistics.

pub mod animation;
pub mod contact;
pub mod content;

#[cfg(feature = "web")]
pub mod app;
#[cfg(feature = "web")]
pub mod components;
#[cfg(feature = "web")]
pub mod pages;
#[cfg(feature = "web")]
pub mod routes;

#[cfg(feature = "web")]
pub use crate::app::App;

#[cfg(feature = "web")]
mod entry {
    use leptos::mount::mount_to_body;
    use leptos::prelude::*;
    use wasm_bindgen::prelude::*;

    use crate::App;

    #[wasm_bindgen(start)]
    pub fn main() {
        console_error_panic_hook::set_once();

        let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
        // a second init (hot reload) is harmless
        let _ = console_log::init_with_level(level);
        log::info!("mounting leaflo ui");

        mount_to_body(|| view! { <App/> });
    }
}
