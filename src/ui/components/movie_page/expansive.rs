use dioxus::prelude::*;

use super::metadata_row::MetadataRow;
use super::utils::TitleMeasure;
use super::view::MovieView;
use super::watch_now_button::WatchNowButton;

/// Wide layout: full-screen banner with the details overlaid on the left half.
/// Description, metadata row and button are pinned to the measured title width.
#[component]
pub fn ExpansiveLayout(
    view: MovieView,
    title_width: TitleMeasure,
    on_title_mounted: EventHandler<MountedEvent>,
) -> Element {
    let width_style = title_width.width_style();

    rsx! {
        div { class: "movie-page movie-page-expansive",
            div { class: "absolute w-full z-0 h-60 bg-gradient-to-b from-black",
                img {
                    class: "w-screen h-screen backdrop-contrast-[150%]",
                    src: "{view.banner}",
                    alt: "banner",
                }
            }

            div { class: "absolute w-full z-10 h-full bg-gradient-to-r from-black",
                div { class: "w-1/2 my-20 px-10",
                    h1 { class: "lg:text-3xl xl:text-6xl font-bold uppercase mb-2", "{view.original_title}" }
                    h1 {
                        class: "w-fit lg:text-5xl xl:text-7xl mb-3 font-bold uppercase",
                        onmounted: move |element| on_title_mounted.call(element),
                        "{view.title}"
                    }

                    p {
                        class: "line-clamp-4 text-justify lg:text-xl xl:text-3xl mb-2",
                        style: "{width_style}",
                        "{view.description}"
                    }

                    MetadataRow {
                        release_date: view.release_date.clone(),
                        director: view.director.clone(),
                        running_time: view.running_time.clone(),
                        rt_score: view.rt_score.clone(),
                        row_class: "flex items-center gap-x-4 text-base font-semibold mb-3",
                        style: width_style.clone(),
                        icon_size: 24,
                    }

                    WatchNowButton {
                        button_class: "flex items-center justify-center gap-x-2 bg-gray-200 hover:bg-gray-300 text-gray-800 lg:text-xl xl:text-4xl font-bold py-4 px-8 rounded-lg",
                        icon_class: "w-6 h-6 xl:w-8 xl:h-8 text-gray-800",
                        style: width_style.clone(),
                    }
                }
            }
        }
    }
}
