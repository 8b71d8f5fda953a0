use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;
use leptos_use::use_window_scroll;

use crate::content::{BRAND, Icon, NAV};

const SCROLLED_AFTER_PX: f64 = 50.0;

fn link_class(active: bool) -> &'static str {
    if active {
        "relative text-emerald-600 font-semibold"
    } else {
        "relative text-gray-700 hover:text-emerald-600 transition-colors duration-200"
    }
}

#[component]
pub fn Navigation() -> impl IntoView {
    let pathname = use_location().pathname;
    let (_, scroll_y) = use_window_scroll();
    let menu_open = RwSignal::new(false);

    let is_active = move |href: &str| pathname.get() == href;

    // close the mobile menu whenever the route changes
    Effect::new(move |_| {
        pathname.track();
        menu_open.set(false);
    });

    let bar_class = move || {
        if scroll_y.get() > SCROLLED_AFTER_PX {
            "fixed top-0 inset-x-0 z-50 transition-all duration-300 bg-white/95 backdrop-blur-sm border-b border-gray-100 shadow-sm"
        } else {
            "fixed top-0 inset-x-0 z-50 transition-all duration-300 bg-transparent"
        }
    };

    view! {
        <nav class=bar_class>
            <div class="container mx-auto px-6 py-4 flex items-center justify-between">
                <A href="/" attr:class="flex items-center space-x-2 text-2xl font-bold text-emerald-700">
                    <span aria-hidden="true">{ Icon::Leaf.glyph() }</span>
                    <span>{ BRAND }</span>
                </A>

                <div class="hidden md:flex space-x-8">
                    { NAV.iter().map(|item| {
                        let href = item.href;
                        view! {
                            <A href=href attr:class=move || link_class(is_active(href))>
                                { item.label }
                                <Show when=move || is_active(href)>
                                    <span class="absolute -bottom-1 left-0 right-0 h-0.5 bg-emerald-600 rounded-full"></span>
                                </Show>
                            </A>
                        }
                    }).collect_view() }
                </div>

                <button
                    class="md:hidden text-2xl text-gray-700"
                    aria-label="메뉴"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    { move || if menu_open.get() { "✕" } else { "☰" } }
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <div class="md:hidden bg-white border-t border-gray-100 px-6 py-4 space-y-4">
                    { NAV.iter().map(|item| {
                        let href = item.href;
                        view! {
                            <A href=href attr:class=move || format!("block {}", link_class(is_active(href)))>
                                { item.label }
                            </A>
                        }
                    }).collect_view() }
                </div>
            </Show>
        </nav>
    }
}
