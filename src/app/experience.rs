use leptos::prelude::*;

use super::theme_toggle::use_theme;
use crate::motion::{BALLOON_BULLETS, BALLOON_SKILLS, EXPERIENCE_CARDS};
use crate::resume::{find_job, JobExperience};
use crate::selection::Selection;

#[component]
pub fn ExperienceSection(experience: &'static [JobExperience]) -> impl IntoView {
    let theme = use_theme();
    let selection = RwSignal::new(Selection::<&'static str>::None);

    let on_select = Callback::new(move |id: &'static str| selection.update(|s| s.select(id)));
    let on_close = Callback::new(move |_: ()| selection.update(|s| s.clear()));

    let selected_job = move || {
        selection
            .get()
            .selected()
            .and_then(|id| find_job(experience, id))
    };

    view! {
        <section id="experience" class="py-16 px-4 sm:px-6 lg:px-8">
            <div class="max-w-4xl mx-auto">
                <div class="text-center mb-12 fade-up">
                    <h2 class=move || {
                        if theme.is_dark() {
                            "text-3xl sm:text-4xl lg:text-5xl font-bold mb-4 text-white text-3d-dark"
                        } else {
                            "text-3xl sm:text-4xl lg:text-5xl font-bold mb-4 text-gray-900 text-3d"
                        }
                    }>"Professional Experience"</h2>
                    <p class=move || {
                        if theme.is_dark() { "text-lg text-gray-300" } else { "text-lg text-gray-600" }
                    }>"Click on any job title to explore the details"</p>
                </div>
                <div class="space-y-6">
                    {experience
                        .iter()
                        .enumerate()
                        .map(|(i, job)| {
                            let active = Signal::derive(move || {
                                selection.get().is_selected(&job.id.as_str())
                            });
                            view! {
                                <div class="slide-in" style=EXPERIENCE_CARDS.style(i)>
                                    <JobTitle job active on_select />
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class=move || {
                    format!(
                        "text-center mt-12 p-6 rounded-2xl fade-up {}",
                        if theme.is_dark() { "glass-dark" } else { "glass" },
                    )
                }>
                    <p class=move || {
                        if theme.is_dark() {
                            "text-base breathe text-gray-300"
                        } else {
                            "text-base breathe text-gray-600"
                        }
                    }>
                        "✨ " <strong>"Hover"</strong> " to see the magic, " <strong>"Click"</strong>
                        " to discover more"
                    </p>
                </div>
            </div>
            {move || selected_job().map(|job| view! { <JobBalloon job on_close /> })}
        </section>
    }
}

#[component]
fn JobTitle(
    job: &'static JobExperience,
    active: Signal<bool>,
    on_select: Callback<&'static str>,
) -> impl IntoView {
    let theme = use_theme();
    let (hovered, set_hovered) = signal(false);

    view! {
        <div
            class="perspective cursor-pointer mb-6"
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
            on:click=move |_| on_select.run(job.id.as_str())
        >
            <div class=move || {
                let surface = if theme.is_dark() {
                    "glass-dark border-blue-400 hover:border-blue-300"
                } else {
                    "glass border-blue-500 hover:border-blue-400"
                };
                let motion = if hovered.get() { "bounce-tilt" } else { "" };
                let ring = if active.get() { "ring-4 ring-blue-400/60" } else { "" };
                format!(
                    "relative p-6 sm:p-8 rounded-2xl border-2 transition-all duration-300 press {surface} {motion} {ring}",
                )
            }>
                <div class=move || {
                    match (hovered.get(), theme.is_dark()) {
                        (true, true) => "absolute inset-0 rounded-2xl transition-shadow duration-300 shadow-[0_0_30px_rgba(147,197,253,0.4),0_0_60px_rgba(147,197,253,0.2)]",
                        (true, false) => "absolute inset-0 rounded-2xl transition-shadow duration-300 shadow-[0_0_30px_rgba(37,99,235,0.4),0_0_60px_rgba(37,99,235,0.2)]",
                        (false, _) => "absolute inset-0 rounded-2xl transition-shadow duration-300",
                    }
                }></div>
                <div class="relative z-10">
                    <h3 class=move || {
                        match (hovered.get(), theme.is_dark()) {
                            (true, true) => "text-xl sm:text-2xl lg:text-3xl font-bold mb-2 transition-colors duration-300 text-blue-300",
                            (true, false) => "text-xl sm:text-2xl lg:text-3xl font-bold mb-2 transition-colors duration-300 text-blue-600",
                            (false, true) => "text-xl sm:text-2xl lg:text-3xl font-bold mb-2 transition-colors duration-300 text-white",
                            (false, false) => "text-xl sm:text-2xl lg:text-3xl font-bold mb-2 transition-colors duration-300 text-gray-900",
                        }
                    }>{job.title.as_str()}</h3>
                    <p class=move || {
                        match (hovered.get(), theme.is_dark()) {
                            (true, true) => "text-base sm:text-lg font-semibold mb-1 transition-colors duration-300 text-violet-400",
                            (true, false) => "text-base sm:text-lg font-semibold mb-1 transition-colors duration-300 text-violet-600",
                            (false, true) => "text-base sm:text-lg font-semibold mb-1 transition-colors duration-300 text-gray-300",
                            (false, false) => "text-base sm:text-lg font-semibold mb-1 transition-colors duration-300 text-gray-600",
                        }
                    }>{job.company.as_str()}</p>
                    <p class=move || {
                        if theme.is_dark() { "text-sm text-gray-400" } else { "text-sm text-gray-500" }
                    }>{job.duration.as_str()}</p>
                    <div class=move || {
                        let color = if theme.is_dark() { "bg-blue-400" } else { "bg-blue-500" };
                        let shown = if hovered.get() { "opacity-100 scale-100" } else { "opacity-0 scale-0" };
                        format!(
                            "absolute -top-2 -right-2 w-6 h-6 rounded-full flex items-center justify-center transition-all duration-200 {color} {shown}",
                        )
                    }>
                        <span class="text-white text-xs font-bold">"!"</span>
                    </div>
                    <div class=move || {
                        let color = if theme.is_dark() { "text-gray-400" } else { "text-gray-500" };
                        let shown = if hovered.get() { "opacity-100" } else { "opacity-0" };
                        format!(
                            "absolute bottom-0 right-0 text-xs transition-opacity duration-300 {color} {shown}",
                        )
                    }>"Click to expand"</div>
                </div>
            </div>
        </div>
    }
}

/// Detail overlay for one job. Unmounted on close, so each open replays
/// the entrance sequence.
#[component]
fn JobBalloon(job: &'static JobExperience, on_close: Callback<()>) -> impl IntoView {
    let theme = use_theme();
    let dark = move || theme.is_dark();

    view! {
        <div class="fixed inset-0 bg-black/50 z-50 fade-in" on:click=move |_| on_close.run(())></div>
        <div class="fixed inset-0 flex items-center justify-center z-50 p-4 pointer-events-none perspective">
            <div class=move || {
                format!(
                    "relative max-w-2xl w-full mx-auto rounded-3xl p-8 shadow-2xl pointer-events-auto balloon-in {}",
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
                <h3
                    class=move || {
                        if dark() {
                            "fade-up text-2xl sm:text-3xl font-bold mb-2 text-white"
                        } else {
                            "fade-up text-2xl sm:text-3xl font-bold mb-2 text-gray-900"
                        }
                    }
                    style="animation-delay: 0.2s;"
                >
                    {job.title.as_str()}
                </h3>
                <div
                    class=move || {
                        if dark() {
                            "fade-up flex flex-col sm:flex-row sm:items-center sm:justify-between mb-6 text-gray-300"
                        } else {
                            "fade-up flex flex-col sm:flex-row sm:items-center sm:justify-between mb-6 text-gray-600"
                        }
                    }
                    style="animation-delay: 0.3s;"
                >
                    <span class="text-lg font-semibold">
                        {job.company.as_str()}
                        {job.location.as_deref().map(|l| format!(" · {l}"))}
                    </span>
                    <span class="text-sm sm:text-base">{job.duration.as_str()}</span>
                </div>
                {job
                    .summary
                    .as_deref()
                    .map(|summary| {
                        view! {
                            <p class="fade-up italic mb-6 opacity-80" style="animation-delay: 0.35s;">
                                {summary}
                            </p>
                        }
                    })}
                <div class="fade-up mb-6" style="animation-delay: 0.4s;">
                    <h4 class=move || {
                        if dark() {
                            "text-lg font-semibold mb-3 text-blue-300"
                        } else {
                            "text-lg font-semibold mb-3 text-blue-600"
                        }
                    }>"Key Responsibilities:"</h4>
                    <ul class=move || {
                        if dark() { "space-y-2 text-gray-200" } else { "space-y-2 text-gray-700" }
                    }>
                        {job
                            .description
                            .iter()
                            .enumerate()
                            .map(|(i, item)| {
                                view! {
                                    <li class="slide-in flex items-start" style=BALLOON_BULLETS.style(i)>
                                        <span class="text-blue-500 mr-2">"•"</span>
                                        <span>{item.as_str()}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
                <div class="fade-up" style="animation-delay: 0.6s;">
                    <h4 class=move || {
                        if dark() {
                            "text-lg font-semibold mb-3 text-purple-300"
                        } else {
                            "text-lg font-semibold mb-3 text-purple-600"
                        }
                    }>"Skills Demonstrated:"</h4>
                    <div class="flex flex-wrap gap-2">
                        {job
                            .skills
                            .iter()
                            .enumerate()
                            .map(|(i, skill)| {
                                view! {
                                    <span
                                        class=move || {
                                            if dark() {
                                                "pop-in hover-grow px-3 py-1 rounded-full text-sm font-medium bg-purple-600/30 text-purple-200 border border-purple-400"
                                            } else {
                                                "pop-in hover-grow px-3 py-1 rounded-full text-sm font-medium bg-purple-100 text-purple-700 border border-purple-300"
                                            }
                                        }
                                        style=BALLOON_SKILLS.style(i)
                                    >
                                        {skill.as_str()}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="absolute -top-2 left-8 w-4 h-4 bg-current rotate-45 opacity-20"></div>
                <div class="absolute -bottom-2 right-8 w-6 h-6 bg-current rotate-45 opacity-10"></div>
            </div>
        </div>
    }
}
