mod background;
mod contact;
mod easter_egg;
mod experience;
mod hero;
mod skills;
mod theme_toggle;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::motion::{delay_style, SCROLL_TOP_DELAY, THEME_TOGGLE_DELAY};
use crate::resume::resume;

use background::ParticleBackground;
use contact::ContactSection;
use easter_egg::EasterEgg;
use experience::ExperienceSection;
use hero::HeroSection;
use skills::SkillsSection;
use theme_toggle::{provide_theme, use_theme, DarkModeToggle};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/resume-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_theme();

    let data = resume();

    view! {
        <Title text=format!("{} - {}", data.name, data.title) />
        <Meta name="description" content=data.summary.clone() />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    let theme = use_theme();
    let data = resume();

    view! {
        <div
            id="top"
            class=move || {
                if theme.is_dark() {
                    "page-enter min-h-screen transition-colors duration-500 bg-gradient-to-br from-gray-900 via-blue-900 to-purple-900"
                } else {
                    "page-enter min-h-screen transition-colors duration-500 bg-gradient-to-br from-blue-50 via-indigo-50 to-purple-50"
                }
            }
        >
            <ParticleBackground />
            <div class="fixed top-6 right-6 z-40 pop-in" style=delay_style(THEME_TOGGLE_DELAY)>
                <DarkModeToggle />
            </div>
            <main class="relative z-10">
                <HeroSection
                    name=data.name.as_str()
                    title=data.title.as_str()
                    location=data.location.as_str()
                    summary=data.summary.as_str()
                />
                <ExperienceSection experience=data.experience.as_slice() />
                <SkillsSection skills=data.skills.as_slice() />
                <ContactSection contact=&data.contact />
                <Footer owner=data.name.as_str() />
            </main>
            <EasterEgg roadmap=data.cloud_roadmap.as_slice() />
            <ScrollToTop />
        </div>
    }
}

#[component]
fn Footer(owner: &'static str) -> impl IntoView {
    let theme = use_theme();
    let built = chrono::DateTime::parse_from_rfc3339(env!("BUILD_TIME")).ok();

    view! {
        <footer class=move || {
            if theme.is_dark() {
                "py-12 px-4 sm:px-6 lg:px-8 text-center text-gray-400"
            } else {
                "py-12 px-4 sm:px-6 lg:px-8 text-center text-gray-600"
            }
        }>
            <div class="max-w-4xl mx-auto">
                <div class=move || {
                    if theme.is_dark() {
                        "glass-dark p-6 rounded-2xl mb-6 hover-lift"
                    } else {
                        "glass p-6 rounded-2xl mb-6 hover-lift"
                    }
                }>
                    <p class="text-lg font-medium mb-2">
                        "✨ Built with Rust, Leptos & Tailwind CSS"
                    </p>
                    <p class="text-sm">
                        "Server-rendered, hydrated to WebAssembly, animated with plain CSS"
                    </p>
                </div>
                <p class="text-sm breathe">
                    {built
                        .map(|b| format!("© {} {owner}. ", b.format("%Y")))
                        .unwrap_or_else(|| format!("© {owner}. "))}
                    "Made with 💙 for the cloud security community."
                </p>
                {built
                    .map(|b| {
                        view! {
                            <p class="text-xs mt-2 opacity-70">
                                {format!("Last built {}", b.format("%b %e %Y"))}
                            </p>
                        }
                    })}
            </div>
        </footer>
    }
}

#[component]
fn ScrollToTop() -> impl IntoView {
    let theme = use_theme();

    view! {
        <button
            aria-label="Scroll to top"
            class=move || {
                if theme.is_dark() {
                    "fixed bottom-6 left-6 p-3 rounded-full z-40 pop-in hover-grow glass-dark border border-gray-600 text-white hover:border-gray-500"
                } else {
                    "fixed bottom-6 left-6 p-3 rounded-full z-40 pop-in hover-grow glass border border-gray-300 text-gray-700 hover:border-gray-400"
                }
            }
            style=delay_style(SCROLL_TOP_DELAY)
            on:click=move |_| window().scroll_to_with_x_and_y(0.0, 0.0)
        >
            <div class="bob">"↑"</div>
        </button>
    }
}
