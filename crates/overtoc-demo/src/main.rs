#![forbid(unsafe_code)]

//! Drives the panel against a simulated streaming chat transcript.
//!
//! The demo plays the full lifecycle in compressed time: mount with
//! persisted geometry, stream headings in while the debounce holds fire,
//! resync after the quiet window, click an entry, drag the panel across the
//! midpoint and watch it snap, toggle collapse, then "reload" and show the
//! geometry surviving.
//!
//! Run with `RUST_LOG=debug` to see the panel's internal spans.

use overtoc_core::document::HeadingLevel;
use overtoc_core::event::PointerEvent;
use overtoc_core::geometry::{PanelFrame, Point, Size, Viewport};
use overtoc_core::memory::MemoryDocument;
use overtoc_panel::{FileStore, OutlineView, PanelConfig, Placement, TocPanel};
use web_time::{Duration, Instant};

const VIEWPORT: Viewport = Viewport::new(1920.0, 1080.0);

fn print_view(view: &OutlineView) {
    match view {
        OutlineView::Placeholder(message) => println!("  [ {message} ]"),
        OutlineView::Rows(rows) => {
            for row in rows {
                let indent = if row.level.depth() == 3 { "    " } else { "  " };
                let marker = if row.active { ">" } else { " " };
                println!("{marker}{indent}{} ({})", row.text, row.id);
            }
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let store_path = std::env::temp_dir().join("overtoc-demo-geometry.json");
    let mut doc = MemoryDocument::new();
    let mut panel = TocPanel::new(PanelConfig::default(), FileStore::new(&store_path));

    let t0 = Instant::now();
    let restored = panel.mount(t0, false).expect("first mount");
    tracing::info!(?restored, "mounted with persisted geometry");

    println!("-- before any content --");
    print_view(&panel.view());

    // A transcript streams in. Each mutation re-arms the debounce, so the
    // debounced path stays quiet while content flows.
    let mut now = t0;
    for (level, text) in [
        (HeadingLevel::H2, "## Problem Statement"),
        (HeadingLevel::H3, "### Constraints"),
        (HeadingLevel::H2, "## Proposed Approach"),
    ] {
        doc.push_heading(level, text);
        now += Duration::from_millis(400);
        panel.on_mutation(now);
        panel.tick(now, &mut doc);
    }

    // The one-shot bootstrap fires 2s after mount, independent of the
    // mutation stream, and populates the outline unconditionally.
    now = t0 + Duration::from_millis(2000);
    if let Some(view) = panel.tick(now, &mut doc) {
        println!("-- initial population (bootstrap) --");
        print_view(&view);
    }

    // More content arrives, including a duplicate heading that dedups away.
    for (level, text) in [
        (HeadingLevel::H3, "### Constraints"), // duplicate, deduped
        (HeadingLevel::H2, "## Results"),
    ] {
        doc.push_heading(level, text);
        now += Duration::from_millis(400);
        panel.on_mutation(now);
        panel.tick(now, &mut doc);
    }

    // Quiet window elapses; the debounced resync sees a changed count.
    now += Duration::from_millis(1500);
    if let Some(view) = panel.tick(now, &mut doc) {
        println!("-- after stream settles --");
        print_view(&view);
    }

    // Click the third entry: highlight moves, host scrolls.
    if let Some(view) = panel.click_entry(&mut doc, 2) {
        println!("-- after clicking row 2 --");
        print_view(&view);
        println!("  scrolled to: {:?}", doc.scrolled());
    }

    // Drag the panel from the right side across the midpoint.
    let start = PanelFrame::new(1660.0, 200.0, Size::new(240.0, 400.0));
    panel.pointer(
        &PointerEvent::header_down(Point::new(1700.0, 220.0)),
        &start,
        &VIEWPORT,
    );
    panel.pointer(&PointerEvent::moved(Point::new(400.0, 340.0)), &start, &VIEWPORT);
    let snapped = panel.pointer(
        &PointerEvent::released(Point::new(400.0, 340.0)),
        &start,
        &VIEWPORT,
    );
    if let Some(Placement::Snapped { side, top, .. }) = snapped {
        println!("-- drag released: snapped {side:?} at top {top}px --");
    }

    let collapsed = panel.toggle_collapsed();
    println!("-- collapse toggled: now collapsed={collapsed} --");

    // "Reload": a second panel over the same store file.
    let mut reloaded = TocPanel::new(PanelConfig::default(), FileStore::new(&store_path));
    let restored = reloaded
        .mount(Instant::now(), false)
        .expect("reloaded mount");
    println!(
        "-- after reload: side={:?} top={:?} collapsed={} --",
        restored.side, restored.top, restored.collapsed
    );
}
