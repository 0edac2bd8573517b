use crate::layout::ViewportClass;
use crate::theme::use_theme;
use leptos::prelude::*;
use serde::Deserialize;

/// Root font size used to convert `em` breakpoints into pixels.
pub const PX_PER_EM: f64 = 16.0;

/// Breakpoint thresholds in `em`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Breakpoints {
    pub xs: f64,
    pub sm: f64,
    pub md: f64,
    pub lg: f64,
    pub xl: f64,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            xs: 36.0,
            sm: 48.0,
            md: 62.0,
            lg: 75.0,
            xl: 88.0,
        }
    }
}

pub fn max_width_query(threshold_em: f64) -> String {
    format!("(max-width: {threshold_em}em)")
}

impl ViewportClass {
    /// Classifies a viewport width against a `max-width` threshold. The bound
    /// is inclusive, like the media query it mirrors.
    pub fn from_width(width_px: f64, threshold_em: f64) -> Self {
        if width_px <= threshold_em * PX_PER_EM {
            ViewportClass::Narrow
        } else {
            ViewportClass::Wide
        }
    }
}

/// Tracks whether `query` currently matches.
///
/// The server has no viewport, so server rendering and the first client pass
/// report [`ViewportClass::Wide`]; once hydrated, a `MediaQueryList` change
/// listener keeps the signal current until the owning scope is disposed.
pub fn use_viewport_class(query: String) -> Signal<ViewportClass> {
    let (narrow, set_narrow) = signal(false);

    #[cfg(not(all(feature = "hydrate", target_arch = "wasm32")))]
    {
        let _ = query;
        let _ = set_narrow;
    }

    #[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
    {
        use wasm_bindgen::closure::Closure;
        use web_sys::wasm_bindgen::JsCast;

        Effect::new(move |_| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let list = match window.match_media(&query) {
                Ok(Some(list)) => list,
                _ => {
                    tracing::warn!(query = %query, "media query not supported");
                    return;
                }
            };
            set_narrow.set(list.matches());

            let watched = query.clone();
            let callback = Closure::wrap(Box::new(move |event: web_sys::MediaQueryListEvent| {
                tracing::debug!(query = %watched, matches = event.matches(), "viewport changed");
                set_narrow.set(event.matches());
            })
                as Box<dyn FnMut(web_sys::MediaQueryListEvent)>);

            if list
                .add_event_listener_with_callback("change", callback.as_ref().unchecked_ref())
                .is_err()
            {
                tracing::warn!(query = %query, "failed to watch media query");
                return;
            }

            let handle = MediaQueryHandle { list, callback };
            on_cleanup(move || drop(handle));
        });
    }

    Signal::derive(move || {
        if narrow.get() {
            ViewportClass::Narrow
        } else {
            ViewportClass::Wide
        }
    })
}

#[derive(Clone, Copy)]
struct SharedViewport(Signal<ViewportClass>);

/// Watches the theme's `sm` breakpoint once and shares the result with every
/// descendant, so the header and the page offset read the same signal.
pub fn provide_viewport() -> Signal<ViewportClass> {
    let viewport = use_viewport_class(max_width_query(use_theme().breakpoints.sm));
    provide_viewport_signal(viewport);
    viewport
}

pub fn provide_viewport_signal(viewport: Signal<ViewportClass>) {
    provide_context(SharedViewport(viewport));
}

/// The shared viewport signal, or a freshly watched one when no ancestor
/// provides it.
pub fn use_viewport() -> Signal<ViewportClass> {
    match use_context::<SharedViewport>() {
        Some(SharedViewport(viewport)) => viewport,
        None => use_viewport_class(max_width_query(use_theme().breakpoints.sm)),
    }
}

#[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
struct MediaQueryHandle {
    list: web_sys::MediaQueryList,
    callback: wasm_bindgen::closure::Closure<dyn FnMut(web_sys::MediaQueryListEvent)>,
}

#[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
impl Drop for MediaQueryHandle {
    fn drop(&mut self) {
        use web_sys::wasm_bindgen::JsCast;
        let _ = self
            .list
            .remove_event_listener_with_callback("change", self.callback.as_ref().unchecked_ref());
    }
}

#[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
unsafe impl Send for MediaQueryHandle {}
#[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
unsafe impl Sync for MediaQueryHandle {}
