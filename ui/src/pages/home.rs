use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use super::sections::{FeatureGrid, RevenueCards, SectionHeader, StatGrid};
use crate::components::{FadeIn, GradientText};
use crate::content::{BRAND, HOME_IMPACT, Icon, REVENUE_MODELS, WHY_LEAFLO};

const PRIMARY_BTN: &str = "inline-flex items-center bg-emerald-600 hover:bg-emerald-700 text-white px-8 py-4 text-lg font-semibold rounded-xl shadow-lg transition-all duration-200 hover:-translate-y-1";
const OUTLINE_BTN: &str = "inline-flex items-center border-2 border-emerald-600 text-emerald-600 hover:bg-emerald-50 px-8 py-4 text-lg font-semibold rounded-xl transition-all duration-200 hover:-translate-y-1";

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="relative min-h-screen flex items-center justify-center overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-br from-emerald-50 via-white to-green-50"></div>

            <div class="relative z-10 text-center px-6 max-w-4xl">
                <FadeIn class="mb-6 text-6xl">
                    <span aria-hidden="true">{ Icon::Leaf.glyph() }</span>
                </FadeIn>

                <FadeIn delay_ms=100>
                    <h1 class="text-5xl md:text-7xl font-bold mb-6 leading-tight">
                        "낙엽이 " <GradientText>"에너지"</GradientText> "가 되는"
                        <br/>
                        "혁신적인 순간"
                    </h1>
                </FadeIn>

                <FadeIn delay_ms=200>
                    <p class="text-xl md:text-2xl mb-8 text-gray-600 leading-relaxed">
                        "버려지던 낙엽을 지속가능한 바이오매스 자원으로."
                        <br/>
                        <span class="text-emerald-700 font-semibold">{ BRAND } "는 혁신으로 미래를 만듭니다."</span>
                    </p>
                </FadeIn>

                <FadeIn delay_ms=300 class="flex flex-col sm:flex-row gap-4 justify-center items-center">
                    <A href="/about" attr:class=PRIMARY_BTN>{ BRAND } " 자세히 알아보기 →"</A>
                    <A href="/business" attr:class=OUTLINE_BTN>"비즈니스 모델 보기"</A>
                </FadeIn>
            </div>
        </section>
    }
}

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <Title text="Leaflo - 낙엽을 에너지로"/>
        <Hero/>

        <section class="py-20 bg-white">
            <div class="container mx-auto px-6">
                <SectionHeader
                    title="왜 Leaflo인가요?"
                    subtitle="매년 버려지는 수많은 낙엽을 혁신적인 기술로 고효율 바이오매스 펠릿으로 전환하여 환경 보호와 경제적 가치를 동시에 실현합니다."
                />
                <FeatureGrid features=WHY_LEAFLO />
                <div class="text-center">
                    <A href="/about" attr:class=PRIMARY_BTN>"더 자세히 알아보기 →"</A>
                </div>
            </div>
        </section>

        <section class="py-20 bg-gray-50">
            <div class="container mx-auto px-6">
                <SectionHeader
                    title="3가지 수익 모델"
                    subtitle="지속가능하고 다양한 수익 구조로 안정적인 성장을 실현합니다"
                />
                <RevenueCards models=REVENUE_MODELS />
                <div class="text-center">
                    <A href="/business" attr:class=PRIMARY_BTN>"비즈니스 모델 자세히 보기 →"</A>
                </div>
            </div>
        </section>

        <section class="py-20 bg-emerald-600 text-white">
            <div class="container mx-auto px-6">
                <SectionHeader
                    title="Leaflo의 임팩트"
                    subtitle="환경 보호와 경제적 가치 창출을 동시에 실현하는 혁신적 솔루션"
                    inverted=true
                />
                <StatGrid stats=HOME_IMPACT inverted=true />
            </div>
        </section>
    }
}
