use dioxus::prelude::*;
use std::path::PathBuf;
use tracing::{info, warn};

use crate::viewport::DEFAULT_VIEWPORT_WIDTH;

const DEFAULT_WINDOW_HEIGHT: f64 = 800.0;

/// Application configuration
/// In debug builds: a .env file is loaded first if present
/// Values come from REEL_* environment variables
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Catalog file to load; None means the bundled sample
    pub catalog_path: Option<PathBuf>,
    /// Initial window width, also the viewport width until the window reports one
    pub window_width: f64,
    /// Initial window height
    pub window_height: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            catalog_path: None,
            window_width: DEFAULT_VIEWPORT_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

impl Config {
    /// Load configuration based on build mode
    pub fn load() -> Self {
        #[cfg(debug_assertions)]
        {
            if dotenvy::dotenv().is_ok() {
                info!("Config: Dev mode - loaded .env file");
            }
        }

        Self::from_env()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key/value source. Unparsable sizes fall back
    /// to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Config::default();

        let catalog_path = lookup("REEL_CATALOG_PATH")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from)
            .or_else(default_catalog_path);

        let window_width = parse_size(&lookup, "REEL_WINDOW_WIDTH", defaults.window_width);
        let window_height = parse_size(&lookup, "REEL_WINDOW_HEIGHT", defaults.window_height);

        if let Some(path) = &catalog_path {
            info!("Config: Catalog path: {}", path.display());
        } else {
            info!("Config: Using bundled sample catalog");
        }

        Config {
            catalog_path,
            window_width,
            window_height,
        }
    }
}

/// ~/.reel/films.json, only when it exists
fn default_catalog_path() -> Option<PathBuf> {
    let path = dirs::home_dir()?.join(".reel").join("films.json");
    path.is_file().then_some(path)
}

fn parse_size(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: f64) -> f64 {
    match lookup(key) {
        None => default,
        Some(raw) => match raw.trim().parse::<f64>() {
            Ok(size) if size.is_finite() && size > 0.0 => size,
            _ => {
                warn!("Config: Ignoring {}={:?}, using {}", key, raw, default);
                default
            }
        },
    }
}

/// Hook to access the application configuration
pub fn use_config() -> Config {
    use_context::<Config>()
}
