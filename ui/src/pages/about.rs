use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use super::sections::{FeatureGrid, PageHero, SectionHeader, StatGrid, StepList, TeamGrid};
use crate::components::FadeIn;
use crate::content::{ABOUT_IMPACT, MISSION, SUPPLY_CHAIN, TEAM, TECHNOLOGY};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <Title text="회사소개 | Leaflo"/>
        <PageHero
            title="낙엽에서 시작하는 에너지 전환"
            subtitle="Leaflo는 도시에서 버려지는 낙엽을 고품질 바이오매스 펠릿으로 바꾸는 순환경제 스타트업입니다."
        />

        <section class="py-20">
            <div class="container mx-auto px-6">
                <SectionHeader
                    title="우리의 미션"
                    subtitle="낙엽 폐기물 문제를 해결하고, 지속가능한 에너지 자원을 만듭니다."
                />
                <FeatureGrid features=MISSION />
            </div>
        </section>

        <section class="py-20 bg-gray-50">
            <div class="container mx-auto px-6">
                <SectionHeader
                    title="우리 팀"
                    subtitle="환경에 진심이고, 혁신에 목마른 다양한 전문가들이 모여 Leaflo를 만들어가고 있습니다."
                />
                <TeamGrid members=TEAM />
            </div>
        </section>

        <section class="py-20">
            <div class="container mx-auto px-6">
                <SectionHeader
                    title="Our Technology"
                    subtitle="검증된 3단계 솔루션으로 낙엽을 고품질 바이오매스 펠릿으로 전환합니다."
                />
                <StepList steps=TECHNOLOGY />
            </div>
        </section>

        <section class="py-20 bg-gray-50">
            <div class="container mx-auto px-6">
                <SectionHeader
                    title="낙엽펠릿, 이렇게 이동합니다"
                    subtitle="버려지던 낙엽이 에너지원으로 변화하는 전체 과정을 소개합니다."
                />
                <StepList steps=SUPPLY_CHAIN />
            </div>
        </section>

        <section class="py-20">
            <div class="container mx-auto px-6">
                <SectionHeader
                    title="Leaflo의 임팩트"
                    subtitle="데이터로 입증된 Leaflo의 혁신적 가치와 시장 잠재력"
                />
                <StatGrid stats=ABOUT_IMPACT />
            </div>
        </section>

        <section class="py-20 bg-emerald-600 text-white text-center">
            <FadeIn class="container mx-auto px-6">
                <h2 class="text-4xl md:text-5xl font-bold mb-6">"함께 지속가능한 미래를 만들어요"</h2>
                <p class="text-xl text-emerald-100 mb-8 max-w-3xl mx-auto leading-relaxed">
                    "파트너십, 구매, 투자 문의 모두 환영합니다."
                </p>
                <A href="/contact" attr:class="inline-block bg-white text-emerald-700 px-10 py-3 text-lg font-semibold rounded-xl shadow-lg">
                    "문의하기 →"
                </A>
            </FadeIn>
        </section>
    }
}
