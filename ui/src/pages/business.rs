use leptos::prelude::*;
use leptos_meta::Title;

use super::sections::{HighlightList, PageHero, StatGrid, StepList};
use crate::components::{AnimatedCounter, FadeIn, IconBadge};
use crate::content::{
    CARBON_STATS, CARBON_STEPS, Icon, MUNICIPAL_BENEFITS, MUNICIPAL_STATS, PELLET_DETAILS,
    PELLET_STATS, Tone,
};

#[component]
fn Module(
    icon: Icon,
    tone: Tone,
    title: &'static str,
    subtitle: &'static str,
    #[prop(optional)] shaded: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <section class={if shaded { "py-20 bg-gray-50" } else { "py-20" }}>
            <div class="container mx-auto px-6 max-w-6xl">
                <FadeIn class="text-center mb-12">
                    <IconBadge icon tone />
                    <h2 class="text-4xl font-bold text-gray-800 mt-6 mb-4">{ title }</h2>
                    <p class="text-lg text-gray-600">{ subtitle }</p>
                </FadeIn>
                { children() }
            </div>
        </section>
    }
}

#[component]
pub fn Business() -> impl IntoView {
    view! {
        <Title text="비즈니스 | Leaflo"/>
        <PageHero
            title="Leaflo의 3가지 수익 모델"
            subtitle="낙엽 펠릿 제품 판매, 지자체 위탁계약, ESG·탄소저감 크레딧을 통한 지속가능한 수익 구조"
        />

        <Module
            icon=Icon::Coin
            tone=Tone::Emerald
            title="A. 낙엽 펠릿 제품 판매"
            subtitle="B2B 및 B2C 시장을 대상으로 한 다양한 펠릿 제품"
        >
            <div class="grid md:grid-cols-2 gap-8 mb-12">
                <HighlightList highlights=PELLET_DETAILS />
                <FadeIn delay_ms=100 class="bg-amber-50 p-6 rounded-2xl">
                    <p class="text-amber-800 font-semibold mb-1">"💡 손익분기점"</p>
                    <p class="text-gray-700">"21-30톤에서 손익분기점 달성 후 지속적인 수익 창출"</p>
                    <p class="text-green-800 font-semibold mt-4 mb-1">"📦 포장 단위"</p>
                    <p class="text-gray-700">"2kg ~ 20kg 소포장으로 개인고객 맞춤 판매"</p>
                </FadeIn>
            </div>
            <StatGrid stats=PELLET_STATS />
        </Module>

        <Module
            icon=Icon::Building
            tone=Tone::Blue
            title="B. 지자체 수거/위탁 계약 (B2G)"
            subtitle="지자체와의 상생 파트너십을 통한 이중 수익 구조"
            shaded=true
        >
            <div class="grid md:grid-cols-2 gap-8 mb-12">
                <HighlightList highlights=MUNICIPAL_BENEFITS />
                <StatGrid stats=MUNICIPAL_STATS />
            </div>
            <FadeIn class="text-center bg-blue-50 p-6 rounded-2xl text-blue-800 font-semibold">
                "💡 Win-Win 모델: 지자체는 처리비용 절감, Leaflo는 안정적 수익 창출"
            </FadeIn>
        </Module>

        <Module
            icon=Icon::Leaf
            tone=Tone::Green
            title="C. ESG·탄소저감 크레딧 수익"
            subtitle="소각 대비 탄소저감 효과를 통한 탄소배출권 수익"
        >
            <div class="grid md:grid-cols-2 gap-8 mb-12">
                <div>
                    <h3 class="text-xl font-bold text-green-700 mb-6">"탄소저감 과정"</h3>
                    <StepList steps=CARBON_STEPS />
                </div>
                <FadeIn delay_ms=100 class="bg-green-50 p-6 rounded-2xl">
                    <h3 class="text-lg font-bold text-green-700 mb-2">"미래 성장 가능성"</h3>
                    <p class="text-gray-700 mb-4">
                        "친환경 사업을 중시하는 정책 흐름에 따라 탄소배출권 가격 상승 전망"
                    </p>
                    <p class="text-gray-700">
                        "연간 " <AnimatedCounter value="100톤" class="font-bold" />
                        " CO₂ 저감 시 " <AnimatedCounter value="100만원" class="font-bold" delay_ms=100 />
                        " 추가 수익"
                    </p>
                </FadeIn>
            </div>
            <StatGrid stats=CARBON_STATS />
            <FadeIn class="mt-12 text-center bg-green-50 p-8 rounded-2xl">
                <h3 class="text-xl font-bold text-green-800 mb-4">"ESG 경영 및 지속가능성 기여"</h3>
                <div class="flex flex-wrap justify-center gap-6 text-green-700 font-semibold">
                    <span>"♻️ 순환경제 실현"</span>
                    <span>"🌍 탄소중립 기여"</span>
                </div>
            </FadeIn>
        </Module>
    }
}
