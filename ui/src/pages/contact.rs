use leptos::prelude::*;
use leptos_meta::Title;

use super::sections::{PageHero, SectionHeader};
use crate::components::{ContactForm, FadeIn, IconBadge};
use crate::content::{CONTACT_CHANNELS, CONTACT_CTAS, Tone};

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <Title text="문의하기 | Leaflo"/>
        <PageHero
            title="세상을 바꾸는 혁신에 동참하세요"
            subtitle="Leaflo와 함께 지속가능한 미래를 만들어가세요. 환경을 보호하면서 경제적 가치를 창출하는 새로운 기회를 발견하실 수 있습니다."
        />

        <section class="py-20">
            <div class="container mx-auto px-6">
                <div class="grid md:grid-cols-3 gap-8 max-w-6xl mx-auto mb-20">
                    { CONTACT_CTAS.iter().enumerate().map(|(i, cta)| view! {
                        <FadeIn
                            delay_ms={(i as u32 + 1) * 100}
                            class="p-8 text-center h-full bg-white rounded-2xl border border-gray-100 hover:shadow-lg transition-shadow"
                        >
                            <IconBadge icon=cta.icon tone=cta.tone />
                            <h3 class=format!("text-2xl font-bold mt-4 mb-4 {}", cta.tone.text())>{ cta.title }</h3>
                            <p class="text-gray-600 mb-6">{ cta.description }</p>
                            <a
                                href="#inquiry"
                                class=format!("block w-full py-4 px-6 text-lg font-semibold rounded-lg {}", cta.tone.panel())
                            >
                                { cta.button }
                            </a>
                        </FadeIn>
                    }).collect_view() }
                </div>

                <FadeIn class="bg-gray-50 p-8 rounded-2xl mb-20">
                    <h2 class="text-3xl font-bold text-emerald-800 text-center mb-8">"연락처 정보"</h2>
                    <div class="grid md:grid-cols-3 gap-8">
                        { CONTACT_CHANNELS.iter().map(|c| view! {
                            <div class="text-center">
                                <IconBadge icon=c.icon tone=Tone::Emerald size="w-12 h-12 text-2xl" />
                                <h4 class="font-semibold text-emerald-700 mt-4 mb-2">{ c.title }</h4>
                                { c.lines.iter().map(|l| view! { <p class="text-gray-600">{ *l }</p> }).collect_view() }
                            </div>
                        }).collect_view() }
                    </div>
                </FadeIn>

                <div id="inquiry">
                    <SectionHeader title="온라인 문의" subtitle="문의를 남겨주시면 영업일 기준 2일 이내에 답변드립니다." />
                    <ContactForm/>
                </div>
            </div>
        </section>
    }
}
