use leptos::prelude::*;

use super::theme_toggle::use_theme;
use crate::motion::SKILL_PILLS;
use crate::resume::{group_by_category, CategoryStyle, Skill, SkillCategory};

// Tailwind only ships classes it can see spelled out, so every color
// family gets its literal class list here.
fn pill_gradient(color: &str) -> &'static str {
    match color {
        "green" => "from-green-400 to-emerald-500 border-green-300",
        "purple" => "from-purple-400 to-violet-500 border-purple-300",
        "orange" => "from-orange-400 to-amber-500 border-orange-300",
        "teal" => "from-teal-400 to-cyan-500 border-teal-300",
        _ => "from-blue-400 to-indigo-500 border-blue-300",
    }
}

fn legend_dot(color: &str) -> &'static str {
    match color {
        "green" => "w-4 h-4 rounded-full bg-green-500",
        "purple" => "w-4 h-4 rounded-full bg-purple-500",
        "orange" => "w-4 h-4 rounded-full bg-orange-500",
        "teal" => "w-4 h-4 rounded-full bg-teal-500",
        _ => "w-4 h-4 rounded-full bg-blue-500",
    }
}

#[component]
pub fn SkillsSection(skills: &'static [Skill]) -> impl IntoView {
    let theme = use_theme();
    let dark = move || theme.is_dark();
    let groups = group_by_category(skills);

    view! {
        <section id="skills" class="py-16 px-4 sm:px-6 lg:px-8">
            <div class="max-w-6xl mx-auto">
                <div class="text-center mb-12 fade-up">
                    <h2 class=move || {
                        if dark() {
                            "text-3xl sm:text-4xl lg:text-5xl font-bold mb-4 text-white text-3d-dark"
                        } else {
                            "text-3xl sm:text-4xl lg:text-5xl font-bold mb-4 text-gray-900 text-3d"
                        }
                    }>"Skills & Expertise"</h2>
                    <p class=move || {
                        if dark() { "text-lg text-gray-300" } else { "text-lg text-gray-600" }
                    }>"A comprehensive toolkit built through years of hands-on experience"</p>
                </div>
                <div class="grid gap-8 md:grid-cols-2">
                    {groups
                        .into_iter()
                        .map(|group| {
                            let style = CategoryStyle::for_tag(group.tag);
                            view! {
                                <div class=move || {
                                    format!(
                                        "p-6 rounded-2xl fade-up hover-lift {}",
                                        if dark() { "glass-dark" } else { "glass" },
                                    )
                                }>
                                    <h3 class=move || {
                                        if dark() {
                                            "text-xl font-bold mb-4 flex items-center gap-2 text-white"
                                        } else {
                                            "text-xl font-bold mb-4 flex items-center gap-2 text-gray-900"
                                        }
                                    }>
                                        <span class="text-2xl">{style.icon}</span>
                                        {style.title}
                                    </h3>
                                    <div class="flex flex-wrap gap-3">
                                        {group
                                            .skills
                                            .into_iter()
                                            .enumerate()
                                            .map(|(i, skill)| {
                                                view! { <SkillPill skill color=style.color index=i /> }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class=move || {
                    format!(
                        "mt-12 p-6 rounded-2xl fade-up {}",
                        if dark() { "glass-dark" } else { "glass" },
                    )
                }>
                    <h3 class=move || {
                        if dark() {
                            "text-lg font-semibold mb-4 text-center text-white"
                        } else {
                            "text-lg font-semibold mb-4 text-center text-gray-900"
                        }
                    }>"Skill Categories"</h3>
                    <div class="flex flex-wrap justify-center gap-4">
                        {SkillCategory::ALL
                            .into_iter()
                            .map(|category| {
                                view! {
                                    <div class="flex items-center gap-2 hover-grow">
                                        <div class=legend_dot(category.color())></div>
                                        <span class=move || {
                                            if dark() {
                                                "text-sm font-medium text-gray-300"
                                            } else {
                                                "text-sm font-medium text-gray-700"
                                            }
                                        }>{category.short_name()}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class=move || {
                    format!(
                        "text-center mt-8 p-6 rounded-2xl fade-up {}",
                        if dark() { "glass-dark" } else { "glass" },
                    )
                }>
                    <p class=move || {
                        if dark() { "text-base breathe text-gray-300" } else { "text-base breathe text-gray-600" }
                    }>
                        "🌟 Hover over each skill to see it come alive"
                    </p>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillPill(skill: &'static Skill, color: &'static str, index: usize) -> impl IntoView {
    let (hovered, set_hovered) = signal(false);
    let gradient = pill_gradient(color);

    view! {
        <div
            class=move || {
                let lifted = if hovered.get() {
                    "scale-110 -translate-y-1 shadow-xl"
                } else {
                    "shadow-md"
                };
                format!(
                    "pop-in relative px-4 py-2 rounded-full text-white font-medium text-sm cursor-default select-none border-2 bg-gradient-to-r transition-all duration-200 {gradient} {lifted}",
                )
            }
            style=SKILL_PILLS.style(index)
            title=skill.level.as_deref()
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
        >
            <span class="relative z-10">{skill.name.as_str()}</span>
            <Show when=move || hovered.get()>
                <div class="absolute inset-0 rounded-full bg-gradient-to-r from-white/20 to-transparent fade-in"></div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_literal_classes() {
        for category in SkillCategory::ALL {
            assert!(pill_gradient(category.color()).contains(category.color()));
            assert!(legend_dot(category.color()).contains(category.color()));
        }
    }

    #[test]
    fn test_unknown_color_uses_default_palette() {
        let default = SkillCategory::DEFAULT.color();
        assert_eq!(pill_gradient("magenta"), pill_gradient(default));
        assert_eq!(
            pill_gradient(CategoryStyle::for_tag("leadership").color),
            pill_gradient(default)
        );
    }
}
