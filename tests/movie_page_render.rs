mod support;

use dioxus::prelude::*;
use dioxus::dioxus_core::NoOpMutations;
use reel::models::Movie;
use reel::ui::movie_page::utils::TitleMeasure;
use reel::ui::movie_page::{CompactLayout, ExpansiveLayout, MovieView};
use reel::ui::MoviePage;
use reel::viewport::{FixedViewport, LayoutMode, SharedViewport, ViewportHandle};

use crate::support::{render_to_html, tracing_init};

#[component]
fn MoviePageHarness() -> Element {
    let movie = use_context::<Movie>();
    rsx! {
        MoviePage { movie }
    }
}

#[component]
fn CompactHarness() -> Element {
    let view = use_context::<MovieView>();
    rsx! {
        CompactLayout { view, on_title_mounted: move |_: MountedEvent| {} }
    }
}

#[component]
fn ExpansiveHarness() -> Element {
    let view = use_context::<MovieView>();
    let title_width = use_context::<TitleMeasure>();
    rsx! {
        ExpansiveLayout { view, title_width, on_title_mounted: move |_: MountedEvent| {} }
    }
}

fn castle_in_the_sky() -> Movie {
    Movie {
        id: Some("2baf70d1-42bb-4437-b551-e5fed5a87abe".to_string()),
        original_title: Some("天空の城ラピュタ".to_string()),
        title: Some("Castle in the Sky".to_string()),
        release_date: Some("1986".to_string()),
        director: Some("Hayao Miyazaki".to_string()),
        running_time: Some(124),
        rt_score: Some("95".to_string()),
        description: Some("The orphan Sheeta inherited a mysterious crystal.".to_string()),
        movie_banner: Some("https://example.com/laputa-banner.jpg".to_string()),
    }
}

fn render_page_at(width: f64, movie: Movie) -> String {
    tracing_init();
    let dom = VirtualDom::new(MoviePageHarness)
        .with_root_context(ViewportHandle::new(FixedViewport::new(width)))
        .with_root_context(movie);
    render_to_html(dom)
}

#[test]
fn test_wide_viewport_renders_expansive_layout() {
    let html = render_page_at(1440.0, castle_in_the_sky());

    assert!(html.contains("movie-page-expansive"));
    assert!(!html.contains("movie-page-compact"));
    assert!(html.contains("Castle in the Sky"));
    assert!(html.contains("天空の城ラピュタ"));
    assert!(html.contains("https://example.com/laputa-banner.jpg"));
}

#[test]
fn test_breakpoint_width_renders_compact_layout() {
    let html = render_page_at(1024.0, castle_in_the_sky());

    assert!(html.contains("movie-page-compact"));
    assert!(!html.contains("movie-page-expansive"));
}

#[test]
fn test_running_time_is_shown_as_hours_and_minutes() {
    let html = render_page_at(800.0, castle_in_the_sky());
    assert!(html.contains("2h 4m"));
}

#[test]
fn test_missing_fields_render_empty() {
    let movie = Movie {
        title: Some("Pom Poko".to_string()),
        ..Default::default()
    };

    for width in [600.0, 1600.0] {
        let html = render_page_at(width, movie.clone());
        assert!(html.contains("Pom Poko"));
        assert!(html.contains("rt-score"));
        assert!(!html.contains("None"));
        assert!(!html.contains("0h 0m"));
    }
}

#[test]
fn test_unmeasured_title_adds_no_width() {
    let html = render_page_at(1600.0, castle_in_the_sky());
    assert!(!html.contains("width:"));
}

#[test]
fn test_expansive_layout_pins_details_to_title_width() {
    tracing_init();
    let mut title_width = TitleMeasure::default();
    title_width.record(LayoutMode::Expansive, 318.0);

    let dom = VirtualDom::new(ExpansiveHarness)
        .with_root_context(MovieView::from(&castle_in_the_sky()))
        .with_root_context(title_width);
    let html = render_to_html(dom);

    // Description, metadata row and button
    assert_eq!(html.matches("width: 318px;").count(), 3);
}

#[test]
fn test_compact_layout_ignores_title_width() {
    tracing_init();
    let dom = VirtualDom::new(CompactHarness)
        .with_root_context(MovieView::from(&castle_in_the_sky()));
    let html = render_to_html(dom);

    assert!(html.contains("WATCH NOW"));
    assert!(!html.contains("width:"));
}

#[test]
fn test_page_follows_resize_across_the_breakpoint() {
    tracing_init();
    let viewport = SharedViewport::new(1280.0);

    let mut dom = VirtualDom::new(MoviePageHarness)
        .with_root_context(ViewportHandle::new(viewport.clone()))
        .with_root_context(castle_in_the_sky());
    dom.rebuild_in_place();
    assert!(dioxus_ssr::render(&dom).contains("movie-page-expansive"));

    dom.in_runtime(|| viewport.set_width(640.0));
    dom.render_immediate(&mut NoOpMutations);
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("movie-page-compact"));
    assert!(!html.contains("movie-page-expansive"));

    // Exactly on the breakpoint stays compact
    dom.in_runtime(|| viewport.set_width(1024.0));
    dom.render_immediate(&mut NoOpMutations);
    assert!(dioxus_ssr::render(&dom).contains("movie-page-compact"));

    dom.in_runtime(|| viewport.set_width(1600.0));
    dom.render_immediate(&mut NoOpMutations);
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("movie-page-expansive"));
    assert!(!html.contains("movie-page-compact"));
    assert!(html.contains("2h 4m"));
}

#[test]
fn test_page_subscribes_while_mounted_and_releases_on_drop() {
    tracing_init();
    let viewport = SharedViewport::new(1280.0);

    let mut dom = VirtualDom::new(MoviePageHarness)
        .with_root_context(ViewportHandle::new(viewport.clone()))
        .with_root_context(castle_in_the_sky());
    dom.rebuild_in_place();

    assert_eq!(viewport.listener_count(), 1);
    assert!(dioxus_ssr::render(&dom).contains("movie-page-expansive"));

    drop(dom);
    assert_eq!(viewport.listener_count(), 0);

    // Nothing left to notify
    viewport.set_width(640.0);
}
