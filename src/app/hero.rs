use leptos::prelude::*;

use super::theme_toggle::use_theme;
use crate::motion::HERO_ITEMS;

#[component]
pub fn HeroSection(
    name: &'static str,
    title: &'static str,
    location: &'static str,
    summary: &'static str,
) -> impl IntoView {
    let theme = use_theme();
    let dark = move || theme.is_dark();

    view! {
        <section class="min-h-screen flex flex-col justify-center items-center relative px-4 sm:px-6 lg:px-8">
            <div class="absolute inset-0 animated-gradient opacity-20"></div>
            <div class=move || {
                format!(
                    "relative z-10 {} rounded-3xl p-8 sm:p-12 lg:p-16 max-w-4xl mx-auto text-center perspective",
                    if dark() { "glass-dark" } else { "glass" },
                )
            }>
                <h1
                    class=move || {
                        if dark() {
                            "fade-up tilt text-5xl sm:text-6xl lg:text-7xl font-bold mb-4 text-white text-3d-dark"
                        } else {
                            "fade-up tilt text-5xl sm:text-6xl lg:text-7xl font-bold mb-4 text-gray-900 text-3d"
                        }
                    }
                    style=HERO_ITEMS.style(0)
                >
                    {name}
                </h1>
                <p
                    class=move || {
                        if dark() {
                            "fade-up text-xl sm:text-2xl lg:text-3xl font-semibold mb-2 text-blue-300 glow-text-dark"
                        } else {
                            "fade-up text-xl sm:text-2xl lg:text-3xl font-semibold mb-2 text-blue-600 glow-text"
                        }
                    }
                    style=HERO_ITEMS.style(1)
                >
                    {title}
                </p>
                <p
                    class=move || {
                        if dark() {
                            "fade-up text-lg sm:text-xl mb-6 text-gray-300"
                        } else {
                            "fade-up text-lg sm:text-xl mb-6 text-gray-600"
                        }
                    }
                    style=HERO_ITEMS.style(2)
                >
                    "📍 "
                    {location}
                </p>
                <p
                    class=move || {
                        if dark() {
                            "fade-up text-base sm:text-lg lg:text-xl leading-relaxed max-w-3xl mx-auto text-gray-200"
                        } else {
                            "fade-up text-base sm:text-lg lg:text-xl leading-relaxed max-w-3xl mx-auto text-gray-700"
                        }
                    }
                    style=HERO_ITEMS.style(3)
                >
                    {summary}
                </p>
                <div class="fade-up mt-8" style=HERO_ITEMS.style(4)>
                    <a
                        href="#experience"
                        class=move || {
                            if dark() {
                                "inline-block px-8 py-4 rounded-full font-semibold text-lg hover-grow shadow-[0_10px_30px_rgba(0,0,0,0.2)] bg-gradient-to-r from-blue-600 to-purple-600 text-white hover:from-blue-500 hover:to-purple-500"
                            } else {
                                "inline-block px-8 py-4 rounded-full font-semibold text-lg hover-grow shadow-[0_10px_30px_rgba(0,0,0,0.2)] bg-gradient-to-r from-blue-500 to-purple-500 text-white hover:from-blue-600 hover:to-purple-600"
                            }
                        }
                    >
                        "Explore My Journey"
                    </a>
                </div>
            </div>
            <a
                href="#experience"
                class=move || {
                    if dark() {
                        "absolute bottom-8 left-1/2 -translate-x-1/2 flex flex-col items-center bob hover-grow text-white"
                    } else {
                        "absolute bottom-8 left-1/2 -translate-x-1/2 flex flex-col items-center bob hover-grow text-gray-800"
                    }
                }
            >
                <span class="text-sm mb-2 font-medium">"Scroll Down"</span>
                <span class="text-xl animate-bounce">"⌄"</span>
            </a>
        </section>
    }
}
