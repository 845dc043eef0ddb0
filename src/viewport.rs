//! Viewport width tracking and the compact/expansive breakpoint.
//!
//! Components never read the window directly. They receive a
//! [`ViewportObserver`] through context and subscribe to it; the window
//! bridge in [`crate::ui::ViewportProvider`] feeds a [`SharedViewport`] from the
//! real window, tests feed it by hand.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::ops::Deref;
use std::rc::{Rc, Weak};
use tracing::{debug, trace};

/// Widths at or below this many pixels get the compact layout.
pub const COMPACT_BREAKPOINT_PX: f64 = 1024.0;

/// Width assumed when nothing has reported a real one yet.
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 1280.0;

/// Which of the two movie page layouts to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Narrow viewports, stacked single column
    Compact,
    /// Wide viewports, full-screen banner with overlaid details
    Expansive,
}

impl LayoutMode {
    pub fn for_width(width: f64) -> Self {
        if width <= COMPACT_BREAKPOINT_PX {
            LayoutMode::Compact
        } else {
            LayoutMode::Expansive
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LayoutMode::Compact => "compact",
            LayoutMode::Expansive => "expansive",
        }
    }
}

/// Callback invoked with the new width on every resize signal
pub type ResizeListener = Box<dyn Fn(f64)>;

/// Source of the current viewport width and of resize signals.
pub trait ViewportObserver {
    /// Last known viewport width in CSS pixels
    fn width(&self) -> f64;

    /// Register `listener` for resize signals. The listener stays registered
    /// for as long as the returned subscription is alive.
    fn subscribe(&self, listener: ResizeListener) -> ResizeSubscription;
}

/// Shared handle to a viewport observer, suitable for Dioxus context.
#[derive(Clone)]
pub struct ViewportHandle(Rc<dyn ViewportObserver>);

impl ViewportHandle {
    pub fn new(observer: impl ViewportObserver + 'static) -> Self {
        ViewportHandle(Rc::new(observer))
    }
}

impl Deref for ViewportHandle {
    type Target = dyn ViewportObserver;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

struct Listeners {
    width: f64,
    next_id: u64,
    entries: BTreeMap<u64, Rc<dyn Fn(f64)>>,
}

/// Registration guard returned by [`ViewportObserver::subscribe`].
///
/// Dropping it unregisters the listener.
pub struct ResizeSubscription {
    listeners: Weak<RefCell<Listeners>>,
    id: u64,
}

impl ResizeSubscription {
    /// A subscription that was never attached to anything
    pub fn detached() -> Self {
        ResizeSubscription {
            listeners: Weak::new(),
            id: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        match self.listeners.upgrade() {
            Some(listeners) => {
                let active = listeners.borrow().entries.contains_key(&self.id);
                active
            }
            None => false,
        }
    }
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.borrow_mut().entries.remove(&self.id);
            trace!("Resize listener {} removed", self.id);
        }
    }
}

/// Push-driven viewport: whoever owns it reports widths with
/// [`SharedViewport::set_width`] and every subscriber is notified.
#[derive(Clone)]
pub struct SharedViewport {
    listeners: Rc<RefCell<Listeners>>,
}

impl SharedViewport {
    pub fn new(width: f64) -> Self {
        SharedViewport {
            listeners: Rc::new(RefCell::new(Listeners {
                width,
                next_id: 1,
                entries: BTreeMap::new(),
            })),
        }
    }

    /// Record a resize signal and notify every listener, even if the width
    /// did not change.
    pub fn set_width(&self, width: f64) {
        // Listeners may subscribe or drop subscriptions while being notified,
        // so the borrow must end before any of them runs.
        let to_notify: Vec<Rc<dyn Fn(f64)>> = {
            let mut listeners = self.listeners.borrow_mut();
            listeners.width = width;
            listeners.entries.values().cloned().collect()
        };

        trace!("Viewport resized to {}px, {} listeners", width, to_notify.len());
        for listener in to_notify {
            listener(width);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().entries.len()
    }
}

impl ViewportObserver for SharedViewport {
    fn width(&self) -> f64 {
        self.listeners.borrow().width
    }

    fn subscribe(&self, listener: ResizeListener) -> ResizeSubscription {
        let mut listeners = self.listeners.borrow_mut();
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.entries.insert(id, Rc::from(listener));

        ResizeSubscription {
            listeners: Rc::downgrade(&self.listeners),
            id,
        }
    }
}

/// A viewport that never resizes. Used for static rendering and as the
/// fallback when no viewport was provided.
#[derive(Debug, Clone, Copy)]
pub struct FixedViewport {
    width: f64,
}

impl FixedViewport {
    pub fn new(width: f64) -> Self {
        FixedViewport { width }
    }
}

impl ViewportObserver for FixedViewport {
    fn width(&self) -> f64 {
        self.width
    }

    fn subscribe(&self, _listener: ResizeListener) -> ResizeSubscription {
        ResizeSubscription::detached()
    }
}

/// Tracks the layout mode of one viewport.
///
/// The mode is evaluated synchronously on creation, then again on every
/// resize signal; `on_change` only runs when the mode actually flips.
/// Dropping the watch releases its subscription.
pub struct LayoutWatch {
    mode: Rc<Cell<LayoutMode>>,
    subscription: ResizeSubscription,
}

impl LayoutWatch {
    pub fn new(viewport: &dyn ViewportObserver, on_change: impl Fn(LayoutMode) + 'static) -> Self {
        let mode = Rc::new(Cell::new(LayoutMode::for_width(viewport.width())));

        let subscription = viewport.subscribe(Box::new({
            let mode = mode.clone();
            move |width| {
                let next = LayoutMode::for_width(width);
                if mode.replace(next) != next {
                    debug!("Layout switched to {} at {}px", next.as_str(), width);
                    on_change(next);
                }
            }
        }));

        LayoutWatch { mode, subscription }
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode.get()
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_active()
    }
}
