use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <section class="min-h-[60vh] flex flex-col items-center justify-center text-center px-6 pt-24">
            <p class="text-6xl mb-4" aria-hidden="true">"🍂"</p>
            <h1 class="text-3xl font-bold text-gray-800 mb-4">"404 – 페이지를 찾을 수 없습니다"</h1>
            <A href="/" attr:class="text-emerald-600 underline">"홈으로 돌아가기"</A>
        </section>
    }
}
