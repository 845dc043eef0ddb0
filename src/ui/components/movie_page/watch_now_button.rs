use dioxus::prelude::*;

/// The WATCH NOW call to action. It has no action wired to it yet.
#[component]
pub fn WatchNowButton(button_class: String, icon_class: String, #[props(default)] style: String) -> Element {
    rsx! {
        button { class: "{button_class}", style: "{style}",
            svg {
                class: "{icon_class}",
                fill: "currentColor",
                view_box: "0 0 16 16",
                path { d: "m11.596 8.697-6.363 3.692c-.54.313-1.233-.066-1.233-.697V4.308c0-.63.692-1.01 1.233-.696l6.363 3.692a.802.802 0 0 1 0 1.393z" }
            }
            "WATCH NOW"
        }
    }
}
