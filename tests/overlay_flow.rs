use chrono::NaiveTime;
use eframe::egui::{self, Color32};
use float_clock::gui::OverlayApp;
use float_clock::layout;
use float_clock::menu::MenuAction;
use float_clock::settings::Settings;
use std::time::{Duration, Instant};

#[path = "mock_ctx.rs"]
mod mock_ctx;
use fakes::{FixedClock, ScriptedCounters};
use mock_ctx::MockCtx;

fn new_app(clock: FixedClock, counters: ScriptedCounters) -> OverlayApp<FixedClock, ScriptedCounters> {
    OverlayApp::new(&Settings::default(), egui::pos2(0.0, 5.0), clock, counters)
}

#[test]
fn clock_network_and_exit_scenario() {
    let ctx = MockCtx::default();
    let clock = FixedClock::at(14, 3, 7);
    let counters = ScriptedCounters::default();
    let mut app = new_app(clock.clone(), counters.clone());

    app.start(&ctx, Some(1920.0));
    assert_eq!(
        app.state().position,
        egui::pos2(1920.0 - layout::WINDOW_WIDTH - 300.0, 5.0)
    );
    assert!(!app.state().network_panel_visible);
    assert!(!app.state().color_panel_visible);

    let t0 = Instant::now();
    counters.push(10_000, 4_000);
    app.tick_at(&ctx, t0);
    assert_eq!(app.state().clock_label.text, "14:03:07");
    let width = 8.0 * 8.0;
    assert_eq!(app.state().clock_label.pos.x, (layout::WINDOW_WIDTH - width) / 2.0);
    assert_eq!(app.state().clock_label.pos.y, layout::CLOCK_LABEL_Y);

    app.secondary_click(egui::pos2(40.0, 12.0));
    assert_eq!(app.state().menu.anchor, Some(egui::pos2(40.0, 12.0)));
    app.menu_action(&ctx, MenuAction::ToggleNetworkPanel);
    assert!(app.state().menu.anchor.is_none());
    assert!(app.state().network_label.visible);

    clock.0.set(NaiveTime::from_hms_opt(14, 3, 8).unwrap());
    counters.push(10_000 + 5 * 1024, 4_000 + 512);
    app.tick_at(&ctx, t0 + Duration::from_secs(1));
    assert_eq!(app.state().clock_label.text, "14:03:08");
    assert_eq!(app.state().network_label.text, "↓ 5.0 KB/s ↑ 0.5 KB/s");

    app.escape(&ctx);
    assert!(app.exit_requested());
    let cmds = ctx.commands.lock().unwrap();
    assert!(matches!(cmds.last(), Some(egui::ViewportCommand::Close)));
}

#[test]
fn first_tick_after_start_shows_zero_rates() {
    let ctx = MockCtx::default();
    let counters = ScriptedCounters::default();
    let mut app = new_app(FixedClock::at(0, 0, 0), counters.clone());
    app.start(&ctx, None);
    app.menu_action(&ctx, MenuAction::ToggleNetworkPanel);
    counters.push(123_456, 654_321);
    app.tick(&ctx);
    assert_eq!(app.state().network_label.text, "↓ 0.0 KB/s ↑ 0.0 KB/s");
    assert_eq!(app.state().clock_label.text, "00:00:00");
}

#[test]
fn native_close_is_suppressed() {
    let ctx = MockCtx::default();
    let mut app = new_app(FixedClock::at(9, 0, 0), ScriptedCounters::default());
    app.close_requested(&ctx);
    assert!(!app.exit_requested());
    assert!(matches!(
        ctx.commands.lock().unwrap().last(),
        Some(egui::ViewportCommand::CancelClose)
    ));
}

#[test]
fn close_after_escape_is_allowed() {
    let ctx = MockCtx::default();
    let mut app = new_app(FixedClock::at(9, 0, 0), ScriptedCounters::default());
    app.escape(&ctx);
    app.close_requested(&ctx);
    let cmds = ctx.commands.lock().unwrap();
    assert!(!cmds
        .iter()
        .any(|c| matches!(c, egui::ViewportCommand::CancelClose)));
}

#[test]
fn drag_from_any_surface_moves_window() {
    let ctx = MockCtx::default();
    let mut app = new_app(FixedClock::at(9, 0, 0), ScriptedCounters::default());
    app.pointer_pressed(egui::pos2(70.0, 15.0));
    app.pointer_moved(&ctx, egui::pos2(80.0, 25.0), true);
    assert_eq!(app.state().position, egui::pos2(10.0, 15.0));
    app.pointer_released();
    app.pointer_moved(&ctx, egui::pos2(150.0, 25.0), true);
    assert_eq!(app.state().position, egui::pos2(10.0, 15.0));
}

#[test]
fn pressing_the_overlay_closes_menu() {
    let ctx = MockCtx::default();
    let mut app = new_app(FixedClock::at(9, 0, 0), ScriptedCounters::default());
    app.secondary_click(egui::pos2(20.0, 10.0));
    app.pointer_pressed(egui::pos2(5.0, 5.0));
    assert!(app.state().menu.anchor.is_none());
    app.menu_action(&ctx, MenuAction::SelectColor(Color32::YELLOW));
    assert_eq!(app.state().clock_label.color, Color32::YELLOW);
}

#[test]
fn start_with_network_setting_reveals_panel() {
    let ctx = MockCtx::default();
    let settings = Settings {
        start_with_network: true,
        ..Settings::default()
    };
    let mut app = OverlayApp::new(
        &settings,
        egui::pos2(0.0, 5.0),
        FixedClock::at(9, 0, 0),
        ScriptedCounters::default(),
    );
    app.start(&ctx, None);
    assert!(app.state().network_panel_visible);
    assert_eq!(ctx.last_size().map(|s| s.y), Some(layout::window_height(true, false)));
    // a second start is a no-op
    app.start(&ctx, None);
    assert!(app.state().network_panel_visible);
}

#[test]
fn window_moved_frame_without_pointer_event_stays_put() {
    let ctx = MockCtx::default();
    let mut app = new_app(FixedClock::at(9, 0, 0), ScriptedCounters::default());
    app.pointer_frame(&ctx, Some(egui::pos2(0.0, 0.0)), None, false);
    app.pointer_pressed(egui::pos2(10.0, 10.0));
    app.pointer_frame(&ctx, Some(egui::pos2(0.0, 0.0)), Some(egui::pos2(20.0, 10.0)), true);
    assert_eq!(app.state().position, egui::pos2(10.0, 0.0));

    // the host applies the move and repaints; the pointer has not moved
    for _ in 0..4 {
        app.pointer_frame(&ctx, Some(egui::pos2(10.0, 0.0)), None, true);
        assert_eq!(app.state().position, egui::pos2(10.0, 0.0));
    }
    let moves = ctx
        .commands
        .lock()
        .unwrap()
        .iter()
        .filter(|c| matches!(c, egui::ViewportCommand::OuterPosition(_)))
        .count();
    assert_eq!(moves, 1);

    // next real pointer event, relative to the moved window
    app.pointer_frame(&ctx, Some(egui::pos2(10.0, 0.0)), Some(egui::pos2(15.0, 10.0)), true);
    assert_eq!(app.state().position, egui::pos2(15.0, 0.0));
}

#[test]
fn tick_rates_follow_configured_interval() {
    let ctx = MockCtx::default();
    let counters = ScriptedCounters::default();
    let settings = Settings {
        tick_interval_ms: 500,
        ..Settings::default()
    };
    let mut app = OverlayApp::new(
        &settings,
        egui::pos2(0.0, 5.0),
        FixedClock::at(9, 0, 0),
        counters.clone(),
    );
    let t0 = Instant::now();
    counters.push(0, 0);
    app.tick_at(&ctx, t0);
    counters.push(512, 0);
    app.tick_at(&ctx, t0 + Duration::from_millis(500));
    assert_eq!(app.state().network_label.text, "↓ 1.0 KB/s ↑ 0.0 KB/s");
}

#[test]
fn background_alpha_moves_to_window_when_host_fades_it() {
    let mut app = new_app(FixedClock::at(9, 0, 0), ScriptedCounters::default());
    assert_eq!(app.background().a(), 153);
    app.window_alpha_applied();
    assert_eq!(app.background(), layout::BACKGROUND);
}
