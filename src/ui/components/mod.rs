pub mod app;
pub mod movie_page;
pub mod search_box;
pub mod viewport_hooks;

pub use app::App;
pub use movie_page::MoviePage;
pub use search_box::SearchBox;
pub use viewport_hooks::{use_viewport, ViewportProvider};
