use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{AnimatedCounter, FadeIn, GradientText, TiltCard};
use crate::content::{HIDDEN_MISSION, HIDDEN_STATS, Icon, TECHNOLOGY};

/// Easter egg: not linked from the navigation.
#[component]
pub fn Hidden() -> impl IntoView {
    view! {
        <Title text="??? | Leaflo"/>
        <main class="min-h-screen bg-gradient-to-br from-gray-50 via-white to-emerald-50">
            <section class="relative min-h-[70vh] flex items-center justify-center overflow-hidden">
                <div class="absolute top-20 left-20 w-72 h-72 bg-emerald-300 rounded-full mix-blend-multiply blur-3xl opacity-30"></div>
                <div class="absolute bottom-20 right-20 w-72 h-72 bg-green-300 rounded-full mix-blend-multiply blur-3xl opacity-30"></div>

                <FadeIn class="relative z-10 text-center px-6 max-w-4xl">
                    <div class="inline-flex items-center gap-2 px-4 py-2 rounded-full bg-emerald-100/80 text-emerald-700 text-sm font-medium mb-8">
                        <span aria-hidden="true">{ Icon::Users.glyph() }</span>
                        "Team Leaflo, after hours"
                    </div>
                    <h1 class="text-5xl md:text-7xl font-bold mb-6">
                        <GradientText>"팀 리플로"</GradientText> "의" <br/>
                        <span class="text-gray-800">"진짜 속사정"</span>
                    </h1>
                    <p class="text-xl text-gray-600 max-w-3xl mx-auto leading-relaxed">
                        "우리는 지구를 위해 기술과 열정을 바칩니다... 그리고 커피도요."
                    </p>
                </FadeIn>
            </section>

            <section class="py-24">
                <div class="container mx-auto px-6">
                    <FadeIn class="text-center mb-16">
                        <h2 class="text-4xl md:text-5xl font-bold">"우리의 " <GradientText>"진짜 미션"</GradientText></h2>
                    </FadeIn>
                    <div class="grid md:grid-cols-3 gap-8 max-w-5xl mx-auto">
                        { HIDDEN_MISSION.iter().enumerate().map(|(i, f)| view! {
                            <FadeIn delay_ms={i as u32 * 100}>
                                <TiltCard class="h-full">
                                    <div class="p-10 h-full rounded-3xl bg-white/70 backdrop-blur-xl border border-white/30 shadow-2xl">
                                        <div class="text-5xl mb-6" aria-hidden="true">{ f.icon.glyph() }</div>
                                        <h3 class="text-2xl font-bold text-gray-800 mb-3">{ f.title }</h3>
                                        <p class="text-gray-600 leading-relaxed">{ f.description }</p>
                                    </div>
                                </TiltCard>
                            </FadeIn>
                        }).collect_view() }
                    </div>
                </div>
            </section>

            <section class="py-24 bg-gradient-to-b from-emerald-50/30 to-transparent">
                <div class="container mx-auto px-6">
                    <FadeIn class="text-center mb-16">
                        <h2 class="text-4xl md:text-5xl font-bold mb-6">
                            <span aria-hidden="true">{ Icon::Sparkles.glyph() }</span>
                            " " <GradientText>"Our True Technology"</GradientText>
                        </h2>
                        <p class="text-xl text-gray-600">"공식 3단계 솔루션, 비공식 주석 포함"</p>
                    </FadeIn>
                    <ol class="max-w-4xl mx-auto space-y-6">
                        { TECHNOLOGY.iter().enumerate().map(|(i, s)| view! {
                            <li>
                                <FadeIn delay_ms={i as u32 * 100} class="p-6 rounded-2xl bg-white/80 border border-gray-100 shadow-xl">
                                    <h3 class="text-xl font-bold text-gray-800">
                                        <GradientText>{ format!("STEP {}", i + 1) }</GradientText> " " { s.title }
                                    </h3>
                                    <p class="text-gray-600 mt-2">{ s.description }</p>
                                </FadeIn>
                            </li>
                        }).collect_view() }
                    </ol>
                </div>
            </section>

            <section class="py-24">
                <div class="container mx-auto px-6 grid md:grid-cols-4 gap-6">
                    { HIDDEN_STATS.iter().enumerate().map(|(i, s)| view! {
                        <FadeIn delay_ms={i as u32 * 100}>
                            <div class="relative p-8 rounded-3xl bg-white/60 backdrop-blur-md border border-gray-200/50 shadow-lg overflow-hidden">
                                <div class=format!(
                                    "absolute -top-12 -right-12 w-32 h-32 rounded-full bg-gradient-to-br {} opacity-10 blur-2xl",
                                    s.tone.gradient()
                                )></div>
                                <div class="text-4xl font-bold text-gray-800 mb-2">
                                    <AnimatedCounter value=s.value delay_ms={i as u32 * 100} />
                                </div>
                                <p class="text-gray-600">{ s.label }</p>
                            </div>
                        </FadeIn>
                    }).collect_view() }
                </div>
            </section>
        </main>
    }
}
