use crate::viewport::{FixedViewport, SharedViewport, ViewportHandle, DEFAULT_VIEWPORT_WIDTH};
use dioxus::prelude::*;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, warn};

static NEXT_PROVIDER_ID: AtomicU64 = AtomicU64::new(0);

/// Script reporting window.innerWidth once right away and again on every
/// resize. The listener is stored under `id` so each provider removes only
/// its own.
fn watch_script(id: u64) -> String {
    format!(
        r#"
    const report = () => dioxus.send(window.innerWidth);
    window.__reelViewportListeners = window.__reelViewportListeners || {{}};
    window.__reelViewportListeners[{id}] = report;
    window.addEventListener("resize", report);
    report();
"#
    )
}

fn unwatch_script(id: u64) -> String {
    format!(
        r#"
    const listeners = window.__reelViewportListeners || {{}};
    if (listeners[{id}]) {{
        window.removeEventListener("resize", listeners[{id}]);
        delete listeners[{id}];
    }}
"#
    )
}

/// Provider component that feeds the real window width into a shared viewport
/// and makes it available to every component below it.
///
/// `initial_width` is used until the window reports its first width.
#[component]
pub fn ViewportProvider(initial_width: f64, children: Element) -> Element {
    let viewport = use_hook(|| SharedViewport::new(initial_width));
    let id = use_hook(|| NEXT_PROVIDER_ID.fetch_add(1, Ordering::Relaxed));
    use_context_provider(|| ViewportHandle::new(viewport.clone()));

    use_effect({
        let viewport = viewport.clone();
        move || {
            let viewport = viewport.clone();
            spawn(async move {
                let mut widths = document::eval(&watch_script(id));
                loop {
                    match widths.recv::<f64>().await {
                        Ok(width) => viewport.set_width(width),
                        Err(e) => {
                            warn!("Window width bridge stopped: {:?}", e);
                            break;
                        }
                    }
                }
            });
        }
    });

    use_drop(move || {
        debug!("Removing window resize listener {}", id);
        let _ = document::eval(&unwatch_script(id));
    });

    rsx! {
        {children}
    }
}

/// Hook to access the viewport observer.
/// Without a provider above, the viewport is fixed at the default width.
pub fn use_viewport() -> ViewportHandle {
    try_use_context::<ViewportHandle>()
        .unwrap_or_else(|| ViewportHandle::new(FixedViewport::new(DEFAULT_VIEWPORT_WIDTH)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripts_use_the_provider_key() {
        let watch = watch_script(7);
        assert!(watch.contains("__reelViewportListeners[7] = report"));
        assert!(watch.contains("dioxus.send(window.innerWidth)"));

        let unwatch = unwatch_script(7);
        assert!(unwatch.contains(r#"removeEventListener("resize", listeners[7])"#));
        assert!(unwatch.contains("delete listeners[7]"));
    }

    #[test]
    fn test_providers_do_not_share_a_listener() {
        assert_ne!(watch_script(0), watch_script(1));
        assert!(!unwatch_script(1).contains("listeners[0]"));
    }
}
