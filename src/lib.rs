// Library exports for integration tests and reusable components

pub mod catalog;
pub mod config;
pub mod models;
pub mod ui;
pub mod viewport;

pub use ui::App;
