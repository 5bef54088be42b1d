//! Decorative parallax backdrop for the sign-in screen.
//!
//! A single window `mousemove` listener lives exactly as long as the backdrop
//! is mounted. It only feeds a local signal; the sign-in form never sees it.

use leptos::prelude::*;

use crate::core::{ParallaxLayer, PointerPosition, Viewport};

/// Slow blob in the upper left
const LEFT_BLOB: ParallaxLayer = ParallaxLayer::new(2.0);
/// Faster blob in the lower right
const RIGHT_BLOB: ParallaxLayer = ParallaxLayer::new(3.0);

#[cfg(not(feature = "ssr"))]
mod window_source {
    use leptos::prelude::*;

    use crate::core::{PointerPosition, PointerSource, Viewport};

    /// The browser window as a source of pointer moves
    pub struct WindowPointerSource;

    impl PointerSource for WindowPointerSource {
        type Handle = Box<dyn FnOnce() + Send + Sync>;

        fn subscribe(&self, on_move: Box<dyn Fn(PointerPosition, Viewport)>) -> Self::Handle {
            let handle = window_event_listener(leptos::ev::mousemove, move |ev| {
                let window = window();
                let viewport = Viewport::new(
                    window.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or_default(),
                    window.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or_default(),
                );
                on_move(
                    PointerPosition::new(f64::from(ev.page_x()), f64::from(ev.page_y())),
                    viewport,
                );
            });
            Box::new(move || handle.remove())
        }

        fn unsubscribe(&self, handle: Self::Handle) {
            handle();
        }
    }
}

/// Gradient blobs that drift against the pointer
#[component]
pub fn ParallaxBackdrop() -> impl IntoView {
    let pointer = RwSignal::new(None::<(PointerPosition, Viewport)>);

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::PointerSubscription;
        use window_source::WindowPointerSource;

        let subscription = PointerSubscription::attach(WindowPointerSource, move |position, viewport| {
            pointer.set(Some((position, viewport)));
        });

        on_cleanup(move || drop(subscription));
    }

    let transform = move |layer: ParallaxLayer| {
        move || {
            pointer
                .get()
                .map(|(position, viewport)| layer.transform(position, viewport))
                .unwrap_or_default()
        }
    };

    view! {
        <div class="absolute inset-0 pointer-events-none" aria-hidden="true">
            <div class="absolute inset-0 grid-animation opacity-10"></div>
            <div class="particles-container"></div>
            <div
                class="absolute left-1/4 top-1/4 h-48 w-48 rounded-full bg-gradient-to-r from-[#FF0000] to-[#FF8938] opacity-20 blur-3xl animate-morph"
                style:transform=transform(LEFT_BLOB)
            ></div>
            <div
                class="absolute right-1/4 bottom-1/3 h-64 w-64 rounded-full bg-gradient-to-r from-[#FF8938] to-[#E6A623] opacity-20 blur-3xl animate-morph-delayed"
                style:transform=transform(RIGHT_BLOB)
            ></div>
        </div>
    }
}
