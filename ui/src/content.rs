//! Copy for every page, kept as data so the section components stay generic.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Leaf,
    Tree,
    Coin,
    Bulb,
    Building,
    Target,
    Bolt,
    Chart,
    Users,
    Cart,
    Mail,
    Phone,
    Pin,
    Sparkles,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Leaf => "🍃",
            Icon::Tree => "🌲",
            Icon::Coin => "💰",
            Icon::Bulb => "💡",
            Icon::Building => "🏢",
            Icon::Target => "🎯",
            Icon::Bolt => "⚡",
            Icon::Chart => "📈",
            Icon::Users => "👥",
            Icon::Cart => "🛒",
            Icon::Mail => "✉️",
            Icon::Phone => "📞",
            Icon::Pin => "📍",
            Icon::Sparkles => "✨",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Icon::Leaf => "leaf",
            Icon::Tree => "tree",
            Icon::Coin => "coin",
            Icon::Bulb => "idea",
            Icon::Building => "building",
            Icon::Target => "target",
            Icon::Bolt => "bolt",
            Icon::Chart => "growth",
            Icon::Users => "team",
            Icon::Cart => "store",
            Icon::Mail => "email",
            Icon::Phone => "phone",
            Icon::Pin => "address",
            Icon::Sparkles => "sparkles",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Emerald,
    Blue,
    Green,
    Amber,
    Purple,
}

impl Tone {
    pub fn icon_bg(self) -> &'static str {
        match self {
            Tone::Emerald => "bg-emerald-100",
            Tone::Blue => "bg-blue-100",
            Tone::Green => "bg-green-100",
            Tone::Amber => "bg-amber-100",
            Tone::Purple => "bg-purple-100",
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            Tone::Emerald => "text-emerald-600",
            Tone::Blue => "text-blue-600",
            Tone::Green => "text-green-600",
            Tone::Amber => "text-amber-600",
            Tone::Purple => "text-purple-600",
        }
    }

    pub fn panel(self) -> &'static str {
        match self {
            Tone::Emerald => "bg-emerald-50 text-emerald-700",
            Tone::Blue => "bg-blue-50 text-blue-700",
            Tone::Green => "bg-green-50 text-green-700",
            Tone::Amber => "bg-amber-50 text-amber-700",
            Tone::Purple => "bg-purple-50 text-purple-700",
        }
    }

    pub fn gradient(self) -> &'static str {
        match self {
            Tone::Emerald => "from-emerald-600 to-emerald-400",
            Tone::Blue => "from-blue-600 to-blue-400",
            Tone::Green => "from-green-600 to-green-400",
            Tone::Amber => "from-amber-600 to-amber-400",
            Tone::Purple => "from-purple-600 to-purple-400",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Stat {
    /// Display text; the first digit run is what counts up.
    pub value: &'static str,
    pub label: &'static str,
    pub note: Option<&'static str>,
    pub tone: Tone,
}

#[derive(Clone, Copy, Debug)]
pub struct Highlight {
    pub title: &'static str,
    pub detail: &'static str,
    pub tone: Tone,
}

#[derive(Clone, Copy, Debug)]
pub struct RevenueModel {
    pub icon: Icon,
    pub title: &'static str,
    pub tone: Tone,
    pub highlights: &'static [Highlight],
}

#[derive(Clone, Copy, Debug)]
pub struct Step {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct TeamMember {
    pub role: &'static str,
    pub department: &'static str,
    pub focus: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct ContactChannel {
    pub icon: Icon,
    pub title: &'static str,
    pub lines: &'static [&'static str],
}

#[derive(Clone, Copy, Debug)]
pub struct Cta {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub button: &'static str,
    pub tone: Tone,
}

#[derive(Clone, Copy, Debug)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
}

pub const BRAND: &str = "Leaflo";
pub const TAGLINE: &str = "낙엽을 에너지로, 폐기물을 자원으로.";

pub const NAV: &[NavItem] = &[
    NavItem { href: "/", label: "홈" },
    NavItem { href: "/about", label: "회사소개" },
    NavItem { href: "/business", label: "비즈니스" },
    NavItem { href: "/contact", label: "문의하기" },
];

// ---- home ----

pub const WHY_LEAFLO: &[Feature] = &[
    Feature {
        icon: Icon::Leaf,
        title: "친환경 기술",
        description: "100% 천연 낙엽을 활용한 친환경 에너지 솔루션으로 지구를 보호합니다",
    },
    Feature {
        icon: Icon::Coin,
        title: "비용 효율성",
        description: "기존 연료 대비 경제적이고 효율적인 에너지원을 제공합니다",
    },
    Feature {
        icon: Icon::Bulb,
        title: "혁신적인 솔루션",
        description: "폐기물을 자원으로 전환하는 순환경제 모델을 구현합니다",
    },
];

pub const REVENUE_MODELS: &[RevenueModel] = &[
    RevenueModel {
        icon: Icon::Coin,
        title: "A. 펠릿 제품 판매",
        tone: Tone::Emerald,
        highlights: &[
            Highlight { title: "B2B 산업용", detail: "373원/kg | 21-30톤에서 손익분기", tone: Tone::Emerald },
            Highlight { title: "B2C 생활용", detail: "600-870원/kg | 캠핑·난로·고양이모래", tone: Tone::Blue },
        ],
    },
    RevenueModel {
        icon: Icon::Building,
        title: "B. 지자체 위탁계약",
        tone: Tone::Blue,
        highlights: &[
            Highlight { title: "이중 수익 구조", detail: "위탁비 수입 + 펠릿 판매 수익", tone: Tone::Blue },
            Highlight { title: "지자체 혜택", detail: "톤당 30-50만원 처리비용 절감", tone: Tone::Green },
        ],
    },
    RevenueModel {
        icon: Icon::Leaf,
        title: "C. 탄소저감 크레딧",
        tone: Tone::Green,
        highlights: &[
            Highlight { title: "탄소배출권 판매", detail: "현재 1만원/톤 | 상승 전망", tone: Tone::Green },
            Highlight { title: "ESG 경영 기여", detail: "대기업 ESG 목표 달성 지원", tone: Tone::Amber },
        ],
    },
];

pub const HOME_IMPACT: &[Stat] = &[
    Stat { value: "90%", label: "지자체 처리비용 절감", note: None, tone: Tone::Emerald },
    Stat { value: "21-30톤", label: "B2B 손익분기점", note: None, tone: Tone::Emerald },
    Stat { value: "74%", label: "B2C 이익률 (소매가)", note: None, tone: Tone::Emerald },
    Stat { value: "1만원/톤", label: "탄소배출권 현재가", note: None, tone: Tone::Emerald },
];

// ---- about ----

pub const MISSION: &[Feature] = &[
    Feature {
        icon: Icon::Target,
        title: "명확한 목표",
        description: "2028년까지 연간 10,000톤의 낙엽 펠릿 생산으로 55억원 매출 달성",
    },
    Feature {
        icon: Icon::Bolt,
        title: "혁신적 기술",
        description: "ISO 17225 시리즈 기준 96% 효율의 검증된 에테르 펠릿 기술",
    },
    Feature {
        icon: Icon::Chart,
        title: "지속가능한 성장",
        description: "이중 수익 구조(Dual-Revenue Engine)를 통한 안정적 수익 창출",
    },
];

pub const TEAM: &[TeamMember] = &[
    TeamMember { role: "CEO", department: "대기과학", focus: "탄소중립 정책과 지자체 파트너십" },
    TeamMember { role: "CCO", department: "환경디자인", focus: "설비 설계와 현장 안전 관리" },
    TeamMember { role: "COO", department: "컴퓨터과학", focus: "수거·물류 운영 자동화" },
    TeamMember { role: "COO", department: "컴퓨터과학", focus: "업무 자동화와 데이터 플랫폼" },
    TeamMember { role: "CTO", department: "전기전자공학", focus: "IoT 기반 공정 제어 시스템" },
];

pub const TECHNOLOGY: &[Step] = &[
    Step {
        title: "'깨끗하게' 분류합니다",
        description: "다단 침전 세척 방식으로 흙, 미세먼지 등 회분(Ash)의 직접적인 원인이 되는 잔류물을 제거합니다.",
    },
    Step {
        title: "'똑똑하게' 섞습니다",
        description: "진단 결과에 따라 최적의 연소 효율과 성형성을 구현할 수 있는 천연 유래 바인더를 가장 이상적인 비율로 자동 블렌딩합니다.",
    },
    Step {
        title: "'단단하게' 만듭니다",
        description: "고압 성형으로 내구성이 높은 펠릿을 만들어 운송과 보관 중 손실을 줄입니다.",
    },
];

pub const SUPPLY_CHAIN: &[Step] = &[
    Step {
        title: "낙엽 발생원",
        description: "도심 공원, 가로수, 산림에서 자연 발생하는 낙엽을 체계적으로 수집합니다.",
    },
    Step {
        title: "낙엽 수거",
        description: "지자체와의 위탁계약을 통해 효율적이고 체계적인 낙엽 수거 시스템을 운영합니다.",
    },
    Step {
        title: "전처리 공장",
        description: "3단계 솔루션을 통해 낙엽을 분류, 세척, 건조하여 고품질 펠릿으로 가공합니다.",
    },
    Step {
        title: "에테르 펠릿 수요자",
        description: "B2B 산업용 보일러, B2C 생활용 연료, ESG 탄소저감 크레딧 등 다양한 수요처에 공급합니다.",
    },
];

pub const ABOUT_IMPACT: &[Stat] = &[
    Stat { value: "96%", label: "효율성", note: Some("목재 펠릿 대비"), tone: Tone::Emerald },
    Stat { value: "30만톤", label: "수거 가능량", note: Some("연간 낙엽"), tone: Tone::Blue },
    Stat { value: "840억원", label: "시장 규모", note: Some("블루오션 시장"), tone: Tone::Amber },
    Stat { value: "90%", label: "비용 절감", note: Some("처리비용 절감 효과"), tone: Tone::Purple },
];

// ---- business ----

pub const PELLET_DETAILS: &[Highlight] = &[
    Highlight {
        title: "B2B 산업용",
        detail: "대상: 공장, 제조업체, 바이오매스 연료 사용 기업 | 제조비 450,000원/톤 | 판매가 373원/kg",
        tone: Tone::Emerald,
    },
    Highlight {
        title: "B2C 생활용",
        detail: "대상: 캠핑연료, 난로연료, 고양이모래 사용자 | 도매가 600원/kg | 소매가 870원/kg",
        tone: Tone::Blue,
    },
];

pub const PELLET_STATS: &[Stat] = &[
    Stat { value: "25톤", label: "월 평균 손익분기점", note: None, tone: Tone::Emerald },
    Stat { value: "74%", label: "B2C 이익률 (소매가 기준)", note: None, tone: Tone::Blue },
    Stat { value: "20%", label: "B2C 이익률 (도매가 기준)", note: None, tone: Tone::Amber },
];

pub const MUNICIPAL_BENEFITS: &[Highlight] = &[
    Highlight { title: "지자체 혜택", detail: "기존 소각/매립 비용 대폭 절감 | 환경 친화적 폐기물 처리 | 지역 환경 개선 및 ESG 실현", tone: Tone::Blue },
    Highlight { title: "Leaflo 혜택", detail: "안정적인 원료 공급 확보 | 지자체 위탁비 수익 | 펠릿 제품 별도 판매 수익", tone: Tone::Emerald },
];

pub const MUNICIPAL_STATS: &[Stat] = &[
    Stat { value: "40만원", label: "기존 처리비용", note: Some("톤당 소각/매립 비용"), tone: Tone::Blue },
    Stat { value: "최대 90%", label: "이중 수익 구조", note: Some("위탁비 + 펠릿 판매비"), tone: Tone::Emerald },
];

pub const CARBON_STEPS: &[Step] = &[
    Step { title: "낙엽 소각 → 펠릿 연료화", description: "" },
    Step { title: "탄소저감량 계산 및 인증", description: "" },
    Step { title: "탄소배출권 플랫폼 등록", description: "" },
    Step { title: "대기업 판매 및 수익 창출", description: "" },
];

pub const CARBON_STATS: &[Stat] = &[
    Stat { value: "1만원", label: "현재 탄소배출권 가격", note: Some("톤당 탄소배출권 가격"), tone: Tone::Green },
    Stat { value: "100만원", label: "연간 예상 수익", note: Some("연간 100톤 CO₂ 저감 시"), tone: Tone::Green },
];

// ---- contact ----

pub const CONTACT_CTAS: &[Cta] = &[
    Cta {
        icon: Icon::Building,
        title: "비즈니스 및 지자체 문의",
        description: "대량 구매, 지자체 협력, B2B 파트너십에 관심이 있으시다면 전문 상담을 받아보세요.",
        button: "비즈니스 문의하기",
        tone: Tone::Emerald,
    },
    Cta {
        icon: Icon::Cart,
        title: "온라인 스토어",
        description: "개인 고객을 위한 소포장 제품을 온라인에서 간편하게 주문하실 수 있습니다.",
        button: "온라인 스토어 바로가기",
        tone: Tone::Amber,
    },
    Cta {
        icon: Icon::Chart,
        title: "투자 제안서",
        description: "Leaflo의 성장 가능성과 투자 기회에 대한 상세한 정보를 확인해보세요.",
        button: "투자 제안서 확인하기",
        tone: Tone::Blue,
    },
];

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel { icon: Icon::Mail, title: "이메일", lines: &["info@leaflo.co.kr", "business@leaflo.co.kr"] },
    ContactChannel { icon: Icon::Phone, title: "전화번호", lines: &["02-1234-5678", "평일 09:00 - 18:00"] },
    ContactChannel { icon: Icon::Pin, title: "주소", lines: &["서울특별시 강남구", "테헤란로 123길 45"] },
];

// ---- hidden ----

pub const HIDDEN_MISSION: &[Feature] = &[
    Feature {
        icon: Icon::Target,
        title: "환경 보호",
        description: "버려지는 낙엽을 활용해... 야근하는 팀원의 간식을 따뜻하게 데웁니다.",
    },
    Feature {
        icon: Icon::Bulb,
        title: "혁신 기술",
        description: "최첨단 기술로 펠릿을 만들고... 사무실 난로 온도를 혁신적으로 조절합니다.",
    },
    Feature {
        icon: Icon::Tree,
        title: "지속가능성",
        description: "미래 세대를 위한 지속가능한 커피 셔틀 솔루션을 개발합니다.",
    },
];

pub const HIDDEN_STATS: &[Stat] = &[
    Stat { value: "365일", label: "연중무휴 낙엽 사랑", note: None, tone: Tone::Emerald },
    Stat { value: "1200잔", label: "올해 마신 커피", note: None, tone: Tone::Blue },
    Stat { value: "42번", label: "회의실 화이트보드 교체", note: None, tone: Tone::Purple },
    Stat { value: "∞", label: "낙엽에 대한 열정", note: None, tone: Tone::Amber },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::DisplayValue;

    fn all_stats() -> impl Iterator<Item = &'static Stat> {
        [
            HOME_IMPACT,
            ABOUT_IMPACT,
            PELLET_STATS,
            MUNICIPAL_STATS,
            CARBON_STATS,
            HIDDEN_STATS,
        ]
        .into_iter()
        .flatten()
    }

    #[test]
    fn stats_round_trip_through_counter_display() {
        for stat in all_stats() {
            let v = DisplayValue::parse(stat.value);
            let shown = v.render(v.target().unwrap_or(0));
            assert_eq!(shown, stat.value);
        }
    }

    #[test]
    fn infinity_stat_stays_literal() {
        let inf = HIDDEN_STATS.iter().find(|s| s.value == "∞").unwrap();
        assert!(DisplayValue::parse(inf.value).is_literal());
    }

    #[test]
    fn nav_covers_four_pages() {
        let hrefs: Vec<_> = NAV.iter().map(|n| n.href).collect();
        assert_eq!(hrefs, ["/", "/about", "/business", "/contact"]);
    }
}
