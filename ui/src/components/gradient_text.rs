use leptos::prelude::*;

#[component]
pub fn GradientText(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    view! {
        <span class=format!(
            "bg-gradient-to-r from-emerald-600 via-green-500 to-lime-500 bg-clip-text text-transparent {class}"
        )>
            { children() }
        </span>
    }
}
