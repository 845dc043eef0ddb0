mod compact;
mod expansive;
mod metadata_row;
mod page;
pub mod utils;
mod view;
mod watch_now_button;

pub use compact::CompactLayout;
pub use expansive::ExpansiveLayout;
pub use page::MoviePage;
pub use view::MovieView;
