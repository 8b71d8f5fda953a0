use gloo_timers::callback::Timeout;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::contact::{ContactDraft, FieldError, SUBMITTED_FLASH_MS, SubmitStatus};

#[component]
fn Field(
    label: &'static str,
    #[prop(default = "text")] kind: &'static str,
    value: RwSignal<String>,
    #[prop(optional)] error: Option<FieldError>,
    status: RwSignal<SubmitStatus>,
) -> impl IntoView {
    let invalid = move || error.is_some_and(|e| status.with(|s| s.has_error(e)));

    view! {
        <label class="block">
            <span class="block text-sm font-medium text-gray-700 mb-1">{ label }</span>
            <input
                type=kind
                class=move || format!(
                    "w-full rounded-lg border px-4 py-2 focus:outline-none focus:ring-2 focus:ring-emerald-500 {}",
                    if invalid() { "border-red-400" } else { "border-gray-200" }
                )
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <Show when=invalid>
                <span class="text-sm text-red-500">{ move || error.map(|e| e.to_string()) }</span>
            </Show>
        </label>
    }
}

/// Inquiry form. Submitting only validates and shows a thank-you banner for
/// a few seconds; nothing is sent anywhere.
#[component]
pub fn ContactForm() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let organisation = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let status = RwSignal::new(SubmitStatus::default());

    let reset_timer: StoredValue<Option<Timeout>, LocalStorage> = StoredValue::new_local(None);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let draft = ContactDraft {
            name: name.get_untracked(),
            email: email.get_untracked(),
            organisation: organisation.get_untracked(),
            message: message.get_untracked(),
        };

        let next = SubmitStatus::submit(&draft);
        if next.is_submitted() {
            log::info!("contact form submitted locally");
            for field in [name, email, organisation, message] {
                field.set(String::new());
            }
            let timer = Timeout::new(SUBMITTED_FLASH_MS, move || status.set(SubmitStatus::Editing));
            // replacing drops, and so cancels, any earlier timer
            reset_timer.set_value(Some(timer));
        }
        status.set(next);
    };

    on_cleanup(move || {
        reset_timer.try_update_value(|t| t.take());
    });

    view! {
        <form class="space-y-4 max-w-2xl mx-auto" on:submit=on_submit novalidate=true>
            <div class="grid md:grid-cols-2 gap-4">
                <Field label="이름" value=name error=FieldError::MissingName status />
                <Field label="이메일" kind="email" value=email error=FieldError::InvalidEmail status />
            </div>
            <Field label="소속 (선택)" value=organisation status />

            <label class="block">
                <span class="block text-sm font-medium text-gray-700 mb-1">"문의 내용"</span>
                <textarea
                    rows="5"
                    class=move || format!(
                        "w-full rounded-lg border px-4 py-2 focus:outline-none focus:ring-2 focus:ring-emerald-500 {}",
                        if status.with(|s| s.has_error(FieldError::MissingMessage)) { "border-red-400" } else { "border-gray-200" }
                    )
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                ></textarea>
                <Show when=move || status.with(|s| s.has_error(FieldError::MissingMessage))>
                    <span class="text-sm text-red-500">{ FieldError::MissingMessage.to_string() }</span>
                </Show>
            </label>

            <button
                type="submit"
                class="w-full bg-emerald-600 hover:bg-emerald-700 text-white py-3 rounded-lg text-lg font-semibold transition-colors"
            >
                "문의 보내기"
            </button>

            <Show when=move || status.with(SubmitStatus::is_submitted)>
                <p class="text-center text-emerald-700 font-semibold" role="status">
                    "문의가 접수되었습니다. 빠르게 연락드리겠습니다!"
                </p>
            </Show>
        </form>
    }
}
