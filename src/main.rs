use reel::config::Config;
use reel::ui::App;
use tracing::info;

fn main() {
    // Use RUST_LOG env var if set, otherwise default to info level
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(log_filter).init();

    let config = Config::load();
    info!("Starting reel");

    let launcher = dioxus::LaunchBuilder::new().with_context(config.clone());

    #[cfg(feature = "desktop")]
    let launcher = launcher.with_cfg(reel::ui::make_config(&config));

    launcher.launch(App);
}
