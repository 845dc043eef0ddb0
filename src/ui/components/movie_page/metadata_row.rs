use dioxus::prelude::*;

const RT_ICON_URL: &str = "https://upload.wikimedia.org/wikipedia/commons/5/5b/Rotten_Tomatoes.svg";

/// Release date · director · running time · Rotten Tomatoes score
#[component]
pub fn MetadataRow(
    release_date: String,
    director: String,
    running_time: String,
    rt_score: String,
    row_class: String,
    #[props(default)] style: String,
    icon_size: u32,
) -> Element {
    rsx! {
        div { class: "{row_class}", style: "{style}",
            h2 { class: "rounded-full backdrop-blur-lg", "{release_date}" }
            div { "·" }
            h2 { class: "rounded-full backdrop-blur-[2px]", "{director}" }
            div { "·" }
            h2 { class: "rounded-full backdrop-blur-[2px]", "{running_time}" }
            div { "·" }
            div { class: "flex items-center gap-x-2",
                img {
                    src: RT_ICON_URL,
                    width: "{icon_size}",
                    height: "{icon_size}",
                    alt: "rt",
                }
                p { class: "rt-score", "{rt_score}" }
            }
        }
    }
}
