use crate::models::Movie;
use crate::ui::components::viewport_hooks::use_viewport;
use crate::viewport::{LayoutMode, LayoutWatch};
use dioxus::prelude::*;
use std::rc::Rc;
use tracing::{debug, warn};

use super::compact::CompactLayout;
use super::expansive::ExpansiveLayout;
use super::utils::TitleMeasure;
use super::view::MovieView;

/// Movie detail page with a banner, switching between the compact and the
/// expansive layout as the viewport crosses the breakpoint
#[component]
pub fn MoviePage(movie: Movie) -> Element {
    let viewport = use_viewport();
    let layout = use_signal(|| LayoutMode::for_width(viewport.width()));
    let mut title_width = use_signal(TitleMeasure::default);

    // Kept for the lifetime of the component; dropping it on unmount
    // unsubscribes from the viewport
    use_hook(|| {
        Rc::new(LayoutWatch::new(&*viewport, move |mode| {
            let mut layout = layout;
            layout.set(mode);
        }))
    });

    // Each layout reports which title mounted; only the expansive one counts
    let record_title_width = move |mode: LayoutMode, element: MountedEvent| {
        if !title_width.peek().is_pending(mode) {
            return;
        }
        spawn(async move {
            match element.get_client_rect().await {
                Ok(rect) => {
                    let mut measure = *title_width.peek();
                    if measure.record(mode, rect.size.width) {
                        debug!("Title measured at {}px", rect.size.width);
                        title_width.set(measure);
                    }
                }
                Err(e) => {
                    warn!("Failed to measure title: {:?}", e);
                }
            }
        });
    };

    let view = MovieView::from(&movie);
    debug!("Rendering {:?} with {} layout", view.title, layout().as_str());

    match layout() {
        LayoutMode::Compact => rsx! {
            CompactLayout {
                view,
                on_title_mounted: move |element: MountedEvent| {
                    record_title_width(LayoutMode::Compact, element)
                },
            }
        },
        LayoutMode::Expansive => rsx! {
            ExpansiveLayout {
                view,
                title_width: title_width(),
                on_title_mounted: move |element: MountedEvent| {
                    record_title_width(LayoutMode::Expansive, element)
                },
            }
        },
    }
}
