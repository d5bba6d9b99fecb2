#[cfg(feature = "hydrate")]
mod webgl;

use leptos::prelude::*;

use crate::device::{BackgroundLayer, RenderStrategy};
use crate::particles::{Starfield, STAR_SEED};

#[cfg(feature = "hydrate")]
use accelerated::AcceleratedStarfield;

/// Dots drawn by the CSS fallback. The GL field uses the full count.
const CSS_STAR_COUNT: usize = 150;
const TWINKLE_PERIOD_SECS: f32 = 3.0;

/// Decorative layer behind the page. Renders nothing until the client has
/// picked a strategy, so server and first client render always agree.
#[component]
pub fn ParticleBackground() -> impl IntoView {
    let strategy = RwSignal::new(None::<RenderStrategy>);

    Effect::new(move |_| {
        if strategy.get_untracked().is_none() {
            strategy.set(Some(probe()));
        }
    });

    view! {
        <div class="fixed inset-0 z-0 pointer-events-none overflow-hidden" aria-hidden="true">
            {move || match BackgroundLayer::for_strategy(strategy.get()) {
                #[cfg(feature = "hydrate")]
                BackgroundLayer::Accelerated => {
                    view! { <AcceleratedStarfield strategy /> }.into_any()
                }
                #[cfg(not(feature = "hydrate"))]
                BackgroundLayer::Accelerated => view! { <CssStarfield /> }.into_any(),
                BackgroundLayer::Css => view! { <CssStarfield /> }.into_any(),
                BackgroundLayer::Pending => ().into_any(),
            }}
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn probe() -> RenderStrategy {
    use wasm_bindgen::JsCast;
    use web_sys::HtmlCanvasElement;

    RenderStrategy::probe(|| {
        let canvas = document()
            .create_element("canvas")
            .map_err(|e| crate::device::RenderError::Acquire(format!("{e:?}")))?
            .unchecked_into::<HtmlCanvasElement>();
        webgl::context(&canvas)
    })
}

#[cfg(not(feature = "hydrate"))]
fn probe() -> RenderStrategy {
    RenderStrategy::Fallback
}

#[cfg(feature = "hydrate")]
mod accelerated {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use leptos::html::Canvas;
    use leptos::prelude::*;
    use leptos_use::{use_raf_fn, UseRafFnCallbackArgs};

    use super::webgl::StarfieldRenderer;
    use crate::device::{RenderError, RenderStrategy};
    use crate::particles::{Starfield, STAR_COUNT, STAR_SEED};

    #[component]
    pub fn AcceleratedStarfield(strategy: RwSignal<Option<RenderStrategy>>) -> impl IntoView {
        let canvas = NodeRef::<Canvas>::new();
        let renderer: Rc<RefCell<Option<StarfieldRenderer>>> = Rc::default();
        let started_at = Rc::new(Cell::new(None::<f64>));

        // Runs outside the frame that failed so the swap can unmount us.
        let demote = move |fault: RenderError| {
            request_animation_frame(move || {
                strategy.update(|s| *s = s.map(|current| current.demote(&fault)));
            });
        };

        Effect::new({
            let renderer = renderer.clone();
            move |_| {
                let Some(el) = canvas.get() else {
                    return;
                };
                if renderer.borrow().is_some() {
                    return;
                }
                match StarfieldRenderer::new(el, &Starfield::generate(STAR_COUNT, STAR_SEED)) {
                    Ok(r) => *renderer.borrow_mut() = Some(r),
                    Err(e) => demote(e),
                }
            }
        });

        use_raf_fn(move |args: UseRafFnCallbackArgs| {
            let mut slot = renderer.borrow_mut();
            let Some(r) = slot.as_ref() else {
                return;
            };
            let start = started_at.get().unwrap_or(args.timestamp);
            started_at.set(Some(start));
            if let Err(e) = r.draw((args.timestamp - start) / 1000.0) {
                slot.take();
                demote(e);
            }
        });

        view! { <canvas node_ref=canvas class="w-full h-full block"></canvas> }
    }
}

#[component]
fn CssStarfield() -> impl IntoView {
    let field = Starfield::generate(CSS_STAR_COUNT, STAR_SEED);

    view! {
        <div class="absolute inset-0 starfield">
            {field
                .screen_points()
                .map(|(left, top, depth)| {
                    let size = 1.0 + depth * 2.0;
                    view! {
                        <span
                            class="absolute rounded-full bg-blue-500 twinkle"
                            style=format!(
                                "left: {left:.2}%; top: {top:.2}%; width: {size:.1}px; height: {size:.1}px; opacity: {:.2}; animation-delay: {:.2}s;",
                                0.3 + depth * 0.5,
                                depth * TWINKLE_PERIOD_SECS,
                            )
                        ></span>
                    }
                })
                .collect_view()}
        </div>
    }
}
