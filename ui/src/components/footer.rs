use leptos::prelude::*;

use crate::content::{BRAND, CONTACT_CHANNELS, Icon, TAGLINE};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-50 border-t border-gray-100 py-12">
            <div class="container mx-auto px-6 grid md:grid-cols-4 gap-8 text-gray-600">
                <div>
                    <div class="flex items-center space-x-2 text-xl font-bold text-emerald-700 mb-4">
                        <span aria-hidden="true">{ Icon::Leaf.glyph() }</span>
                        <span>{ BRAND }</span>
                    </div>
                    <p class="leading-relaxed">{ TAGLINE }<br/>"지속가능한 미래를 만들어갑니다."</p>
                </div>

                <div>
                    <h4 class="font-semibold text-gray-800 mb-4">"연락처"</h4>
                    { CONTACT_CHANNELS.iter().take(2).map(|c| view! {
                        <p>{ c.lines[0] }</p>
                    }).collect_view() }
                </div>

                <div>
                    <h4 class="font-semibold text-gray-800 mb-4">"소셜 미디어"</h4>
                    <div class="flex space-x-4">
                        <a href="#" class="hover:text-emerald-600 transition-colors">"Instagram"</a>
                        <a href="#" class="hover:text-emerald-600 transition-colors">"Blog"</a>
                    </div>
                </div>

                <div>
                    <h4 class="font-semibold text-gray-800 mb-4">"법적 고지"</h4>
                    <a href="#" class="block hover:text-emerald-600 transition-colors">"개인정보처리방침"</a>
                    <a href="#" class="block hover:text-emerald-600 transition-colors">"이용약관"</a>
                </div>
            </div>

            <p class="text-center text-sm text-gray-400 mt-10">"© 2025 " { BRAND } ". All rights reserved."</p>
        </footer>
    }
}
