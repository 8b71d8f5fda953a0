use leptos::prelude::*;

use crate::content::{Icon, Tone};

/// Rounded tile with an icon glyph, tinted by `tone`.
#[component]
pub fn IconBadge(
    icon: Icon,
    tone: Tone,
    #[prop(default = "w-16 h-16 text-3xl")]
    size: &'static str,
) -> impl IntoView {
    view! {
        <div
            class=format!("{size} mx-auto rounded-2xl flex items-center justify-center {}", tone.icon_bg())
            role="img"
            aria-label=icon.label()
        >
            <span aria-hidden="true">{ icon.glyph() }</span>
        </div>
    }
}
