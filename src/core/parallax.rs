//! Pointer-driven parallax for the decorative background.
//!
//! Purely visual: nothing here reads or writes sign-in state.

/// Pointer coordinates relative to the page
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Inner size of the browser window
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A decorative element that drifts with the pointer at its own speed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxLayer {
    speed: f64,
}

impl ParallaxLayer {
    pub const fn new(speed: f64) -> Self {
        Self { speed }
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Translation in pixels for the given pointer and viewport
    pub fn offset(&self, pointer: PointerPosition, viewport: Viewport) -> (f64, f64) {
        let x = (viewport.width - pointer.x * self.speed) / 100.0;
        let y = (viewport.height - pointer.y * self.speed) / 100.0;
        (x, y)
    }

    /// CSS `transform` value for the given pointer and viewport
    pub fn transform(&self, pointer: PointerPosition, viewport: Viewport) -> String {
        let (x, y) = self.offset(pointer, viewport);
        format!("translateX({x}px) translateY({y}px)")
    }
}

/// Something that can deliver pointer-move events (the browser window in the UI).
pub trait PointerSource {
    /// Token returned on registration, needed to deregister
    type Handle;

    fn subscribe(&self, on_move: Box<dyn Fn(PointerPosition, Viewport)>) -> Self::Handle;
    fn unsubscribe(&self, handle: Self::Handle);
}

/// One registered pointer-move listener.
///
/// Registers on `attach` and deregisters exactly once when dropped, so tying
/// the value to a component's lifetime scopes the listener to that mount.
pub struct PointerSubscription<S: PointerSource> {
    source: S,
    handle: Option<S::Handle>,
}

impl<S: PointerSource> PointerSubscription<S> {
    pub fn attach(source: S, on_move: impl Fn(PointerPosition, Viewport) + 'static) -> Self {
        let handle = source.subscribe(Box::new(on_move));
        Self {
            source,
            handle: Some(handle),
        }
    }

    pub fn is_attached(&self) -> bool {
        self.handle.is_some()
    }

    /// Deregister now instead of waiting for drop
    pub fn detach(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.source.unsubscribe(handle);
        }
    }
}

impl<S: PointerSource> Drop for PointerSubscription<S> {
    fn drop(&mut self) {
        self.detach();
    }
}
