use leptos::prelude::*;
use leptos_use::{use_timeout_fn, use_window_size, UseTimeoutFnReturn, UseWindowSizeReturn};

use super::theme_toggle::use_theme;
use crate::device::{current_device_is_mobile, PhoneAction, PHONE_TOOLTIP_DURATION};
use crate::motion::CONTACT_CARDS;
use crate::resume::ContactInfo;

#[component]
pub fn ContactSection(contact: &'static ContactInfo) -> impl IntoView {
    let theme = use_theme();
    let dark = move || theme.is_dark();

    // Server and first client render both assume desktop; the real check
    // runs after hydration and again whenever either viewport dimension changes.
    let is_mobile = RwSignal::new(false);
    let UseWindowSizeReturn { width, height, .. } = use_window_size();
    Effect::new(move |_| {
        width.track();
        height.track();
        is_mobile.set(current_device_is_mobile());
    });

    let (tooltip, set_tooltip) = signal(false);
    let UseTimeoutFnReturn {
        start: hide_tooltip_later,
        ..
    } = use_timeout_fn(
        move |_: ()| set_tooltip.set(false),
        PHONE_TOOLTIP_DURATION.as_millis() as f64,
    );

    let phone_action = move || PhoneAction::for_device(is_mobile.get(), &contact.phone);
    let on_phone_click = move |ev: leptos::ev::MouseEvent| {
        if !phone_action().navigates() {
            ev.prevent_default();
            set_tooltip.set(true);
            hide_tooltip_later(());
        }
    };

    let card = move || {
        if dark() {
            "block p-6 rounded-2xl transition-all duration-300 hover-lift glass-dark hover:bg-white/10"
        } else {
            "block p-6 rounded-2xl transition-all duration-300 hover-lift glass hover:bg-white/30"
        }
    };
    let heading = move || {
        if dark() {
            "text-xl font-semibold mb-2 text-white"
        } else {
            "text-xl font-semibold mb-2 text-gray-900"
        }
    };
    let detail = move || if dark() { "text-gray-300" } else { "text-gray-600" };

    view! {
        <section id="contact" class="py-16 px-4 sm:px-6 lg:px-8">
            <div class="max-w-4xl mx-auto">
                <div class="text-center mb-12 fade-up">
                    <h2 class=move || {
                        if dark() {
                            "text-3xl sm:text-4xl lg:text-5xl font-bold mb-4 text-white text-3d-dark"
                        } else {
                            "text-3xl sm:text-4xl lg:text-5xl font-bold mb-4 text-gray-900 text-3d"
                        }
                    }>"Let's Connect"</h2>
                    <p class=move || {
                        if dark() { "text-lg text-gray-300" } else { "text-lg text-gray-600" }
                    }>"Ready to discuss opportunities and collaborate on exciting projects"</p>
                </div>
                <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">
                    <div class="relative fade-up" style=CONTACT_CARDS.style(0)>
                        <a
                            href=move || phone_action().href().to_string()
                            on:click=on_phone_click
                            class=move || format!("{} cursor-pointer", card())
                        >
                            <div class="text-center">
                                <div class="text-4xl mb-4 breathe">"📱"</div>
                                <h3 class=heading>"Phone"</h3>
                                <p class=detail>{contact.phone.as_str()}</p>
                                <Show when=move || !is_mobile.get()>
                                    <p class=move || {
                                        if dark() {
                                            "text-xs mt-2 opacity-70 text-gray-400"
                                        } else {
                                            "text-xs mt-2 opacity-70 text-gray-500"
                                        }
                                    }>"📱 Best on mobile"</p>
                                </Show>
                            </div>
                        </a>
                        <Show when=move || tooltip.get()>
                            <div class=move || {
                                if dark() {
                                    "absolute -top-16 left-1/2 -translate-x-1/2 px-4 py-2 rounded-lg shadow-lg z-50 whitespace-nowrap pop-in bg-gray-800 text-white border border-gray-600"
                                } else {
                                    "absolute -top-16 left-1/2 -translate-x-1/2 px-4 py-2 rounded-lg shadow-lg z-50 whitespace-nowrap pop-in bg-white text-gray-900 border border-gray-200"
                                }
                            }>
                                <p class="text-sm font-medium">"📱 Use mobile to call directly"</p>
                            </div>
                        </Show>
                    </div>
                    <a
                        href=format!("mailto:{}", contact.email)
                        class=move || format!("{} fade-up", card())
                        style=CONTACT_CARDS.style(1)
                    >
                        <div class="text-center">
                            <div class="text-4xl mb-4 breathe">"✉️"</div>
                            <h3 class=heading>"Email"</h3>
                            <p class=move || format!("{} break-all", detail())>
                                {contact.email.as_str()}
                            </p>
                        </div>
                    </a>
                    <div
                        class=move || format!("{} fade-up md:col-span-2 lg:col-span-1", card())
                        style=CONTACT_CARDS.style(2)
                    >
                        <div class="text-center">
                            <div class="text-4xl mb-4 breathe">"📍"</div>
                            <h3 class=heading>"Location"</h3>
                            <p class=detail>{contact.location.as_str()}</p>
                        </div>
                    </div>
                </div>
                <div class="text-center mt-12 fade-up">
                    <p class=move || {
                        if dark() {
                            "text-lg font-medium breathe text-gray-300"
                        } else {
                            "text-lg font-medium breathe text-gray-700"
                        }
                    }>"💼 Open to new opportunities in cloud security and IT operations"</p>
                </div>
            </div>
        </section>
    }
}
