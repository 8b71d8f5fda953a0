use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

use crate::pages::{
    about::About, business::Business, contact::Contact, hidden::Hidden, home::Home,
    not_found::NotFound,
};

#[component]
pub fn RoutesMenu() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFound /> }>
            <Route path=path!("")          view=Home     />
            <Route path=path!("/about")    view=About    />
            <Route path=path!("/business") view=Business />
            <Route path=path!("/contact")  view=Contact  />
            <Route path=path!("/hidden")   view=Hidden   />
        </Routes>
    }
}
