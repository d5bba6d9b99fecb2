use leptos::prelude::*;

use super::theme_toggle::use_theme;
use crate::motion::{delay_style, EASTER_EGG_DELAY};
use crate::resume::roadmap::{roadmap_entries, RoadmapEntry, StepBadge};
use crate::resume::CloudSecurityStep;
use crate::selection::ModalState;

#[component]
pub fn EasterEgg(roadmap: &'static [CloudSecurityStep]) -> impl IntoView {
    let theme = use_theme();
    let modal = RwSignal::new(ModalState::Closed);
    let (hovered, set_hovered) = signal(false);

    let on_close = Callback::new(move |_: ()| modal.update(|m| m.close()));

    view! {
        <div
            class="fixed bottom-6 right-6 z-40 pop-in"
            style=delay_style(EASTER_EGG_DELAY)
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
        >
            <button
                aria-label="Open the cloud security pathway"
                on:click=move |_| modal.update(|m| m.open())
                class=move || {
                    if theme.is_dark() {
                        "relative w-16 h-16 rounded-full shadow-lg transition-all duration-300 hover-grow bg-gradient-to-r from-purple-600 to-blue-600 hover:from-purple-500 hover:to-blue-500"
                    } else {
                        "relative w-16 h-16 rounded-full shadow-lg transition-all duration-300 hover-grow bg-gradient-to-r from-purple-500 to-blue-500 hover:from-purple-600 hover:to-blue-600"
                    }
                }
            >
                <span class="text-2xl spin-slow inline-block">"☁️"</span>
                <span class="absolute inset-0 rounded-full bg-white/20 animate-ping"></span>
            </button>
            <Show when=move || hovered.get()>
                <div class=move || {
                    if theme.is_dark() {
                        "absolute bottom-full right-0 mb-2 px-3 py-2 rounded-lg text-sm whitespace-nowrap fade-in bg-gray-800 text-white border border-gray-600"
                    } else {
                        "absolute bottom-full right-0 mb-2 px-3 py-2 rounded-lg text-sm whitespace-nowrap fade-in bg-white text-gray-900 border border-gray-200"
                    }
                }>"🎯 Discover the Cloud Security Pathway!"</div>
            </Show>
        </div>
        <Show when=move || modal.get().is_open()>
            <RoadmapModal roadmap on_close />
        </Show>
    }
}

#[component]
fn RoadmapModal(
    roadmap: &'static [CloudSecurityStep],
    on_close: Callback<()>,
) -> impl IntoView {
    let theme = use_theme();
    let dark = move || theme.is_dark();

    view! {
        <div class="fixed inset-0 bg-black/60 z-50 fade-in" on:click=move |_| on_close.run(())></div>
        <div class="fixed inset-0 flex items-center justify-center z-50 p-4 pointer-events-none perspective">
            <div class=move || {
                format!(
                    "relative max-w-4xl w-full max-h-[90vh] overflow-y-auto rounded-3xl p-8 shadow-2xl pointer-events-auto balloon-in {}",
                    if dark() { "glass-dark" } else { "glass" },
                )
            }>
                <button
                    aria-label="Close"
                    on:click=move |_| on_close.run(())
                    class=move || {
                        if dark() {
                            "absolute top-4 right-4 p-2 rounded-full transition-colors text-white hover:bg-white/20"
                        } else {
                            "absolute top-4 right-4 p-2 rounded-full transition-colors text-gray-600 hover:bg-black/10"
                        }
                    }
                >
                    "✕"
                </button>
                <div class="text-center mb-8 fade-up">
                    <h2 class=move || {
                        if dark() {
                            "text-3xl sm:text-4xl font-bold mb-4 text-white text-3d-dark"
                        } else {
                            "text-3xl sm:text-4xl font-bold mb-4 text-gray-900 text-3d"
                        }
                    }>"The Cloud Engineer Pathway"</h2>
                    <p class=move || {
                        if dark() { "text-lg text-gray-300" } else { "text-lg text-gray-600" }
                    }>"My roadmap to becoming a Cloud Security Engineer"</p>
                </div>
                <div class="space-y-6">
                    {roadmap_entries(roadmap)
                        .into_iter()
                        .map(|entry| view! { <RoadmapStep entry /> })
                        .collect_view()}
                </div>
                <div class="text-center mt-8 fade-up" style="animation-delay: 1.5s;">
                    <p class=move || {
                        if dark() { "text-lg breathe text-gray-300" } else { "text-lg breathe text-gray-600" }
                    }>"🚀 Building the future of secure cloud infrastructure, one step at a time"</p>
                </div>
            </div>
        </div>
    }
}

#[component]
fn RoadmapStep(entry: RoadmapEntry<'static>) -> impl IntoView {
    let theme = use_theme();
    let dark = move || theme.is_dark();
    let RoadmapEntry {
        number,
        step,
        icon,
        palette,
        badge,
        delay,
        chip_delays,
        badge_delay,
        connector_delay,
    } = entry;
    let badge_class = match badge {
        StepBadge::Completed => {
            "pop-in inline-flex items-center px-3 py-1 rounded-full text-sm font-medium bg-green-100 text-green-800"
        }
        StepBadge::InProgress(_) => {
            "pop-in inline-flex items-center px-3 py-1 rounded-full text-sm font-medium bg-yellow-100 text-yellow-800"
        }
    };

    view! {
        <div class="relative slide-in" style=delay_style(delay)>
            <div class=move || {
                format!(
                    "flex items-start gap-6 p-6 rounded-2xl border-2 hover-lift {} {}",
                    palette.border,
                    if dark() { "bg-gray-800/50" } else { "bg-white/50" },
                )
            }>
                <div class=format!(
                    "flex-shrink-0 w-16 h-16 rounded-full flex flex-col items-center justify-center text-white font-bold shadow-lg bg-gradient-to-r {}",
                    palette.gradient,
                )>
                    <span class="text-xl">{icon}</span>
                    <span class="text-xs">{number}</span>
                </div>
                <div class="flex-1">
                    <h3 class=move || {
                        if dark() {
                            "text-xl font-bold mb-2 text-white"
                        } else {
                            "text-xl font-bold mb-2 text-gray-900"
                        }
                    }>{step.title.as_str()}</h3>
                    <p class=move || {
                        if dark() { "mb-4 text-gray-300" } else { "mb-4 text-gray-600" }
                    }>{step.description.as_str()}</p>
                    <div class="flex flex-wrap gap-2">
                        {step
                            .skills
                            .iter()
                            .zip(chip_delays)
                            .map(|(skill, chip_delay)| {
                                view! {
                                    <span
                                        class=move || {
                                            if dark() {
                                                "pop-in px-3 py-1 rounded-full text-sm font-medium bg-gray-700 text-gray-200"
                                            } else {
                                                "pop-in px-3 py-1 rounded-full text-sm font-medium bg-gray-200 text-gray-700"
                                            }
                                        }
                                        style=delay_style(chip_delay)
                                    >
                                        {skill.as_str()}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="mt-4">
                        <span class=badge_class style=delay_style(badge_delay)>
                            {badge.label()}
                        </span>
                    </div>
                </div>
            </div>
            {connector_delay
                .map(|d| {
                    view! {
                        <div class="flex justify-center my-4">
                            <div
                                class="w-1 h-8 bg-gradient-to-b from-blue-500 to-purple-500 rounded-full grow-down"
                                style=delay_style(d)
                            ></div>
                        </div>
                    }
                })}
        </div>
    }
}
