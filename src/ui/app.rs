use dioxus::prelude::*;

#[cfg(feature = "desktop")]
use crate::config::Config;
#[cfg(feature = "desktop")]
use dioxus::desktop::{Config as DioxusConfig, WindowBuilder};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[cfg(feature = "desktop")]
pub fn make_config(config: &Config) -> DioxusConfig {
    DioxusConfig::default().with_window(make_window(config))
}

#[cfg(feature = "desktop")]
fn make_window(config: &Config) -> WindowBuilder {
    WindowBuilder::new()
        .with_title("reel")
        .with_always_on_top(false)
        .with_inner_size(dioxus::desktop::LogicalSize::new(
            config.window_width,
            config.window_height,
        ))
}
