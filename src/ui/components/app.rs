use crate::catalog::Catalog;
use crate::config::{use_config, Config};
use crate::models::Movie;
use crate::ui::{MAIN_CSS, TAILWIND_CSS};
use dioxus::prelude::*;
use std::rc::Rc;
use tracing::{debug, info, warn};

use super::movie_page::MoviePage;
use super::search_box::SearchBox;
use super::viewport_hooks::ViewportProvider;

/// Load the configured catalog, falling back to the bundled films
pub fn load_catalog(config: &Config) -> Catalog {
    match &config.catalog_path {
        Some(path) => match Catalog::load(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!("{}, using the bundled films instead", e);
                Catalog::sample()
            }
        },
        None => Catalog::sample(),
    }
}

/// Select the first film matching `query`. Without a match the selection is
/// left alone and the notice to show is returned.
pub fn apply_search(catalog: &Catalog, query: &str, selected: &mut Option<Movie>) -> Option<String> {
    match catalog.search(query).first() {
        Some(movie) => {
            *selected = Some((*movie).clone());
            None
        }
        None => Some(format!("No films match \"{}\"", query)),
    }
}

#[component]
pub fn App() -> Element {
    debug!("Rendering app component");

    let config = use_config();
    let catalog = use_hook(|| Rc::new(load_catalog(&config)));
    let mut selected = use_signal({
        let catalog = catalog.clone();
        move || catalog.movies().first().cloned()
    });
    let mut notice = use_signal(|| None::<String>);

    let on_search = move |query: String| {
        info!("Searching films for {:?}", query);
        let message = apply_search(&catalog, &query, &mut *selected.write());
        notice.set(message);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        ViewportProvider { initial_width: config.window_width,
            div { class: "min-h-screen bg-black text-white",
                SearchBox { on_search }
                if let Some(message) = notice() {
                    p { class: "mx-6 text-gray-400", "{message}" }
                }
                // Keyed so that picking another film mounts a fresh page and re-measures its title
                for movie in selected().into_iter() {
                    MoviePage { key: "{movie.key()}", movie: movie.clone() }
                }
                if selected().is_none() {
                    p { class: "mx-6 text-gray-400", "The catalog is empty." }
                }
            }
        }
    }
}
