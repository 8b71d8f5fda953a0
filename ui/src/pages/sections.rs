//! Section renderers shared by every page. Each takes a slice from
//! `crate::content` and staggers its items by [`STAGGER_MS`].

use leptos::prelude::*;

use crate::components::{AnimatedCounter, FadeIn, IconBadge};
use crate::content::{Feature, Highlight, RevenueModel, Stat, Step, TeamMember, Tone};

pub const STAGGER_MS: u32 = 100;

fn stagger(i: usize) -> u32 {
    i as u32 * STAGGER_MS
}

#[component]
pub fn PageHero(
    title: &'static str,
    subtitle: &'static str,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <section class="pt-32 pb-16 bg-gradient-to-br from-emerald-50 to-green-50">
            <div class="container mx-auto px-6 text-center">
                <FadeIn>
                    <h1 class="text-5xl md:text-6xl font-bold text-emerald-800 mb-6">{ title }</h1>
                    <p class="text-xl text-gray-600 max-w-3xl mx-auto leading-relaxed">{ subtitle }</p>
                </FadeIn>
                { children.map(|c| c()) }
            </div>
        </section>
    }
}

#[component]
pub fn SectionHeader(
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
    #[prop(optional)] inverted: bool,
) -> impl IntoView {
    let (title_class, sub_class) = if inverted {
        ("text-4xl md:text-5xl font-bold mb-6", "text-xl text-emerald-100 max-w-3xl mx-auto leading-relaxed")
    } else {
        ("text-4xl md:text-5xl font-bold text-gray-800 mb-6", "text-xl text-gray-600 max-w-3xl mx-auto leading-relaxed")
    };

    view! {
        <FadeIn class="text-center mb-16">
            <h2 class=title_class>{ title }</h2>
            { subtitle.map(|s| view! { <p class=sub_class>{ s }</p> }) }
        </FadeIn>
    }
}

#[component]
pub fn FeatureGrid(features: &'static [Feature]) -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-3 gap-12 mb-16">
            { features.iter().enumerate().map(|(i, f)| view! {
                <FadeIn delay_ms=stagger(i) class="text-center">
                    <IconBadge icon=f.icon tone=Tone::Emerald />
                    <h3 class="text-xl font-semibold text-gray-800 mt-4 mb-3">{ f.title }</h3>
                    <p class="text-gray-600 leading-relaxed">{ f.description }</p>
                </FadeIn>
            }).collect_view() }
        </div>
    }
}

#[component]
pub fn HighlightList(highlights: &'static [Highlight]) -> impl IntoView {
    view! {
        <div class="space-y-3 text-gray-600">
            { highlights.iter().map(|h| view! {
                <div class=format!("p-3 rounded-lg {}", h.tone.panel())>
                    <p class="font-semibold">{ h.title }</p>
                    <p class="text-sm text-gray-600">{ h.detail }</p>
                </div>
            }).collect_view() }
        </div>
    }
}

#[component]
pub fn RevenueCards(models: &'static [RevenueModel]) -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-3 gap-8 mb-12">
            { models.iter().enumerate().map(|(i, m)| view! {
                <FadeIn
                    delay_ms=stagger(i)
                    class="bg-white p-8 rounded-2xl shadow-lg border border-gray-100 hover:shadow-xl transition-shadow duration-300"
                >
                    <IconBadge icon=m.icon tone=m.tone />
                    <h3 class="text-2xl font-bold text-gray-800 mt-6 mb-4 text-center">{ m.title }</h3>
                    <HighlightList highlights=m.highlights />
                </FadeIn>
            }).collect_view() }
        </div>
    }
}

/// Grid of count-up stats. `inverted` is for dark section backgrounds.
#[component]
pub fn StatGrid(stats: &'static [Stat], #[prop(optional)] inverted: bool) -> impl IntoView {
    let cols = match stats.len() {
        0..=2 => "md:grid-cols-2",
        3 => "md:grid-cols-3",
        _ => "md:grid-cols-4",
    };

    view! {
        <div class=format!("grid {cols} gap-8")>
            { stats.iter().enumerate().map(|(i, s)| {
                let value_class = if inverted {
                    "text-4xl font-bold mb-2".to_string()
                } else {
                    format!("text-3xl font-bold mb-1 {}", s.tone.text())
                };
                view! {
                    <FadeIn
                        delay_ms=stagger(i)
                        class={if inverted { "text-center" } else { "text-center bg-white p-6 rounded-2xl shadow-lg border border-gray-100" }}
                    >
                        <div class=value_class>
                            <AnimatedCounter value=s.value delay_ms=stagger(i) />
                        </div>
                        <h3 class={if inverted { "text-emerald-100" } else { "text-lg font-semibold text-gray-800 mb-2" }}>
                            { s.label }
                        </h3>
                        { s.note.map(|n| view! { <p class="text-gray-600 text-sm">{ n }</p> }) }
                    </FadeIn>
                }
            }).collect_view() }
        </div>
    }
}

#[component]
pub fn StepList(steps: &'static [Step]) -> impl IntoView {
    view! {
        <ol class="max-w-4xl mx-auto space-y-8">
            { steps.iter().enumerate().map(|(i, s)| view! {
                <li>
                    <FadeIn delay_ms=stagger(i) class="flex gap-6 items-start">
                        <div class="w-14 h-14 shrink-0 rounded-2xl bg-gradient-to-br from-emerald-500 to-green-600 flex items-center justify-center text-white font-bold text-xl shadow-lg">
                            { i + 1 }
                        </div>
                        <div>
                            <h3 class="text-xl font-bold text-gray-800 mb-2">{ s.title }</h3>
                            { (!s.description.is_empty()).then(|| view! {
                                <p class="text-gray-600 leading-relaxed">{ s.description }</p>
                            }) }
                        </div>
                    </FadeIn>
                </li>
            }).collect_view() }
        </ol>
    }
}

#[component]
pub fn TeamGrid(members: &'static [TeamMember]) -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-3 lg:grid-cols-5 gap-6">
            { members.iter().enumerate().map(|(i, m)| view! {
                <FadeIn
                    delay_ms=stagger(i)
                    class="bg-white p-6 rounded-2xl shadow-lg border border-gray-100 text-center"
                >
                    <div class="w-20 h-20 mx-auto mb-4 bg-gradient-to-br from-emerald-100 to-green-100 rounded-full flex items-center justify-center text-2xl font-bold text-emerald-700">
                        { m.role }
                    </div>
                    <p class="text-emerald-600 font-semibold mb-2">{ m.role }</p>
                    <p class="text-gray-600 text-sm mb-3">{ m.department }</p>
                    <p class="text-gray-500 text-xs leading-relaxed">{ m.focus }</p>
                </FadeIn>
            }).collect_view() }
        </div>
    }
}
