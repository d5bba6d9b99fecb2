use std::sync::{Arc, Mutex};

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use leptos_use::use_preferred_dark;

#[cfg(feature = "hydrate")]
use crate::theme::BrowserStore;
use crate::theme::{MemoryStore, ThemeController};

/// Dark mode flag shared with every component that styles itself by theme.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    dark: RwSignal<bool>,
    persistent: RwSignal<bool>,
    controller: StoredValue<Arc<Mutex<ThemeController>>>,
}

impl ThemeContext {
    pub fn is_dark(&self) -> bool {
        self.dark.get()
    }

    /// False once the browser has refused to store the preference.
    pub fn is_persistent(&self) -> bool {
        self.persistent.get()
    }

    pub fn toggle(&self) {
        let (dark, persistent) = self.controller.with_value(|c| {
            let mut c = c.lock().expect("should be able to lock theme controller");
            (c.toggle(), c.is_persistent())
        });
        self.dark.set(dark);
        self.persistent.set(persistent);
    }
}

/// Installs the theme context. The server always renders light; the
/// browser swaps in localStorage and the color scheme once hydrated.
pub fn provide_theme() -> ThemeContext {
    let ctx = ThemeContext {
        dark: RwSignal::new(false),
        persistent: RwSignal::new(true),
        controller: StoredValue::new(Arc::new(Mutex::new(ThemeController::new(
            Box::new(MemoryStore::default()),
            false,
        )))),
    };

    #[cfg(feature = "hydrate")]
    {
        let prefers_dark = use_preferred_dark();
        Effect::watch(
            || (),
            move |_, _, _| {
                let browser =
                    ThemeController::new(Box::new(BrowserStore), prefers_dark.get_untracked());
                ctx.dark.set(browser.is_dark());
                ctx.controller.with_value(|c| {
                    *c.lock().expect("should be able to lock theme controller") = browser;
                });
            },
            true,
        );

        Effect::new(move |_| apply_document_marker(ctx.dark.get()));
    }

    provide_context(ctx);
    ctx
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

#[cfg(feature = "hydrate")]
fn apply_document_marker(dark: bool) {
    let Some(root) = document().document_element() else {
        return;
    };
    if let Err(e) = root.class_list().toggle_with_force("dark", dark) {
        log::warn!("couldn't update document theme class: {e:?}");
    }
}

#[component]
pub fn DarkModeToggle() -> impl IntoView {
    let theme = use_theme();
    let (hovered, set_hovered) = signal(false);

    view! {
        <div
            class="relative"
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
        >
            <button
                aria-label="Toggle dark mode"
                on:click=move |_| theme.toggle()
                class=move || {
                    if theme.is_dark() {
                        "relative w-14 h-8 rounded-full p-1 transition-colors duration-300 focus:outline-none focus:ring-4 focus:ring-blue-500/50 bg-slate-800 shadow-[0_0_20px_rgba(59,130,246,0.3)] hover-grow"
                    } else {
                        "relative w-14 h-8 rounded-full p-1 transition-colors duration-300 focus:outline-none focus:ring-4 focus:ring-yellow-500/50 bg-amber-500 shadow-[0_0_20px_rgba(245,158,11,0.3)] hover-grow"
                    }
                }
            >
                <div class="absolute inset-0 flex items-center justify-between px-2 text-xs">
                    <span class=move || if theme.is_dark() { "opacity-20 scale-75" } else { "opacity-60" }>
                        "☀️"
                    </span>
                    <span class=move || if theme.is_dark() { "opacity-60" } else { "opacity-20 scale-75" }>
                        "🌙"
                    </span>
                </div>
                <div class=move || {
                    if theme.is_dark() {
                        "relative z-10 w-6 h-6 bg-white rounded-full shadow-lg flex items-center justify-center text-sm transition-transform duration-300 translate-x-6 rotate-[360deg]"
                    } else {
                        "relative z-10 w-6 h-6 bg-white rounded-full shadow-lg flex items-center justify-center text-sm transition-transform duration-300 translate-x-0"
                    }
                }>{move || if theme.is_dark() { "🌙" } else { "☀️" }}</div>
            </button>
            <Show when=move || hovered.get()>
                <div class="absolute top-full left-1/2 -translate-x-1/2 mt-2 px-3 py-1 rounded-lg text-xs whitespace-nowrap bg-gray-900 text-white fade-in">
                    {move || {
                        if theme.is_dark() { "Switch to Light Mode" } else { "Switch to Dark Mode" }
                    }}
                    <Show when=move || !theme.is_persistent()>
                        <span class="block opacity-70">"Won't be remembered on this browser"</span>
                    </Show>
                </div>
            </Show>
        </div>
    }
}
