use leptos::prelude::*;
use leptos_meta::{Meta, provide_meta_context};
use leptos_router::components::Router;

use crate::animation::AnimationConfig;
use crate::components::context::provide_animation_config;
use crate::components::{Footer, Navigation};
use crate::content::TAGLINE;
use crate::routes::RoutesMenu;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_animation_config(AnimationConfig::default());

    view! {
        <Meta name="description" content=TAGLINE />

        <Router>
            <div class="min-h-screen bg-white text-gray-800">
                <Navigation />
                <main>
                    <RoutesMenu />
                </main>
                <Footer />
            </div>
        </Router>
    }
}
