use dioxus::prelude::*;

use super::metadata_row::MetadataRow;
use super::view::MovieView;
use super::watch_now_button::WatchNowButton;

/// Narrow layout: banner on top, everything else stacked below it at full width
#[component]
pub fn CompactLayout(view: MovieView, on_title_mounted: EventHandler<MountedEvent>) -> Element {
    rsx! {
        div { class: "movie-page movie-page-compact",
            div { class: "w-full rounded-lg px-2 pt-3",
                img {
                    class: "w-full rounded-lg backdrop-contrast-[150%]",
                    src: "{view.banner}",
                    alt: "banner",
                }
            }

            div { class: "w-full pt-3 px-2",
                h1 { class: "sm:text-xl md:text-3xl font-bold uppercase mb-2", "{view.original_title}" }
                h1 {
                    class: "text-3xl md:text-5xl mb-3 font-bold uppercase",
                    onmounted: move |element| on_title_mounted.call(element),
                    "{view.title}"
                }

                MetadataRow {
                    release_date: view.release_date.clone(),
                    director: view.director.clone(),
                    running_time: view.running_time.clone(),
                    rt_score: view.rt_score.clone(),
                    row_class: "w-full flex items-center justify-between gap-x-4 sm:text-sm md:text-base text-gray-300 my-3 px-2",
                    icon_size: 18,
                }

                WatchNowButton {
                    button_class: "w-full flex items-center justify-center gap-x-2 bg-gray-200 hover:bg-gray-300 text-gray-800 text-xl font-bold py-4 px-8 rounded-lg",
                    icon_class: "w-6 h-6",
                }

                p { class: "text-justify text-xl text-gray-300 mb-2 pt-4", "{view.description}" }
            }
        }
    }
}
