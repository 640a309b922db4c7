use crate::clock::{ClockSource, ClockTicker, SystemClock};
use crate::drag::DragController;
use crate::host::HostSurface;
use crate::layout;
use crate::menu::{MenuAction, MenuController};
use crate::network::{CounterSource, NetworkSampler, SysinfoCounters};
use crate::settings::Settings;
use crate::state::{LabelState, WidgetState};
use crate::ticker::Ticker;
use crate::window_manager;
use eframe::egui::{self, Color32, Pos2, Sense, Stroke};
use std::time::Instant;

const MENU_SIZE: [f32; 2] = [130.0, 64.0];

enum MenuOutcome {
    Action(MenuAction),
    Dismiss,
}

/// The overlay application: routes window events to the controllers and
/// draws whatever [`WidgetState`] describes.
pub struct OverlayApp<C: ClockSource = SystemClock, S: CounterSource = SysinfoCounters> {
    state: WidgetState,
    drag: DragController,
    menu: MenuController,
    clock: ClockTicker<C>,
    network: NetworkSampler<S>,
    ticker: Ticker,
    opacity: f32,
    background: Color32,
    screen_margin: f32,
    top_offset: f32,
    show_network_on_start: bool,
    started: bool,
    exit_requested: bool,
}

impl OverlayApp {
    pub fn with_system_sources(settings: &Settings, position: Pos2) -> Self {
        Self::new(settings, position, SystemClock, SysinfoCounters::new())
    }
}

impl<C: ClockSource, S: CounterSource> OverlayApp<C, S> {
    pub fn new(settings: &Settings, position: Pos2, clock: C, counters: S) -> Self {
        Self {
            state: WidgetState::new(position),
            drag: DragController,
            menu: MenuController,
            clock: ClockTicker::new(clock),
            network: NetworkSampler::new(counters),
            ticker: Ticker::new(settings.tick_interval()),
            opacity: settings.opacity(),
            background: layout::background_fill(settings.opacity(), false),
            screen_margin: settings.screen_margin,
            top_offset: settings.top_offset,
            show_network_on_start: settings.start_with_network,
            started: false,
            exit_requested: false,
        }
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    /// The host faded the whole window, so the fill no longer needs alpha.
    pub fn window_alpha_applied(&mut self) {
        self.background = layout::background_fill(self.opacity, true);
    }

    /// One scheduler period: refresh the clock and the network readout.
    pub fn tick_at<H: HostSurface + ?Sized>(&mut self, host: &H, now: Instant) {
        self.clock.tick(&mut self.state, host);
        self.network.tick_at(&mut self.state, host, now);
        host.request_repaint();
    }

    pub fn tick<H: HostSurface + ?Sized>(&mut self, host: &H) {
        self.tick_at(host, Instant::now());
    }

    pub fn pointer_pressed(&mut self, local: Pos2) {
        self.menu.close(&mut self.state);
        self.drag.pointer_down(&mut self.state, local);
    }

    pub fn pointer_moved<H: HostSurface + ?Sized>(
        &mut self,
        host: &H,
        local: Pos2,
        primary_held: bool,
    ) {
        self.drag
            .pointer_move(&mut self.state, host, local, primary_held);
    }

    /// Per-frame drag input. `window` is where the host says the window is
    /// now; `pointer_moved` is the newest pointer position reported this
    /// frame, if any. A frame caused only by the window moving carries a
    /// stale window-local pointer and must not move the window again.
    pub fn pointer_frame<H: HostSurface + ?Sized>(
        &mut self,
        host: &H,
        window: Option<Pos2>,
        pointer_moved: Option<Pos2>,
        primary_held: bool,
    ) {
        if let Some(pos) = window {
            self.drag.window_moved(&mut self.state, pos);
        }
        if let Some(local) = pointer_moved {
            self.pointer_moved(host, local, primary_held);
        }
    }

    pub fn pointer_released(&mut self) {
        self.drag.pointer_up(&mut self.state);
    }

    /// Right click on the clock label.
    pub fn secondary_click(&mut self, local: Pos2) {
        self.menu.open(&mut self.state, local);
    }

    pub fn menu_action<H: HostSurface + ?Sized>(&mut self, host: &H, action: MenuAction) {
        if !matches!(action, MenuAction::SelectColor(_)) {
            self.menu.close(&mut self.state);
        }
        self.menu.apply(&mut self.state, host, action);
    }

    /// Escape is the only way out.
    pub fn escape<H: HostSurface + ?Sized>(&mut self, host: &H) {
        tracing::info!("escape pressed, exiting");
        self.exit_requested = true;
        host.send_viewport_cmd(egui::ViewportCommand::Close);
    }

    /// Native close requests are ignored unless Escape asked for the exit.
    pub fn close_requested<H: HostSurface + ?Sized>(&mut self, host: &H) {
        if !self.exit_requested {
            tracing::debug!("close request suppressed");
            host.send_viewport_cmd(egui::ViewportCommand::CancelClose);
        }
    }

    /// Pin the window near the right edge of the work area once its width is
    /// known and apply any startup toggles.
    pub fn start<H: HostSurface + ?Sized>(&mut self, host: &H, work_area_width: Option<f32>) {
        if self.started {
            return;
        }
        self.started = true;
        if let Some(width) = work_area_width {
            let pos = layout::initial_position(width, self.screen_margin, self.top_offset);
            self.state.position = pos;
            host.move_window(pos);
        }
        host.resize_window(self.state.size);
        if self.show_network_on_start {
            self.menu
                .apply(&mut self.state, host, MenuAction::ToggleNetworkPanel);
        }
        tracing::info!(
            x = self.state.position.x,
            y = self.state.position.y,
            "overlay started"
        );
    }

    fn draw(&mut self, ctx: &egui::Context) {
        let frame = egui::Frame::none().fill(self.background);
        let (bg, clock, picked) = egui::CentralPanel::default()
            .frame(frame)
            .show(ctx, |ui| {
                let bg = ui.interact(
                    ui.max_rect(),
                    ui.id().with("background"),
                    Sense::click_and_drag(),
                );
                let painter = ui.painter().clone();
                let clock_rect = paint_label(&painter, &self.state.clock_label);
                let clock = ui.interact(
                    clock_rect,
                    ui.id().with("clock_label"),
                    Sense::click_and_drag(),
                );
                if self.state.network_label.visible {
                    paint_label(&painter, &self.state.network_label);
                }
                let mut picked = None;
                for (i, swatch) in self.state.swatches.iter().enumerate() {
                    let rect = swatch.rect();
                    let resp = ui.interact(rect, ui.id().with(("swatch", i)), Sense::click());
                    painter.rect_filled(rect, 2.0, swatch.color);
                    let stroke = if resp.hovered() {
                        Stroke::new(1.5, Color32::WHITE)
                    } else {
                        Stroke::new(1.0, Color32::from_gray(90))
                    };
                    painter.rect_stroke(rect, 2.0, stroke);
                    if resp.clicked() {
                        picked = Some(swatch.color);
                    }
                }
                (bg, clock, picked)
            })
            .inner;

        let (pressed, held, released, latest, moved_to, window) = ctx.input(|i| {
            let moved_to = i.events.iter().rev().find_map(|e| match e {
                egui::Event::PointerMoved(pos) => Some(*pos),
                _ => None,
            });
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_down(),
                i.pointer.primary_released(),
                i.pointer.latest_pos(),
                moved_to,
                i.viewport().outer_rect.map(|r| r.min),
            )
        });
        // background and clock label share one drag controller
        if pressed && (bg.is_pointer_button_down_on() || clock.is_pointer_button_down_on()) {
            if let Some(pos) = latest {
                self.pointer_pressed(pos);
            }
        }
        self.pointer_frame(ctx, window, moved_to, held);
        if released {
            self.pointer_released();
        }
        if clock.secondary_clicked() {
            if let Some(pos) = clock.interact_pointer_pos() {
                self.secondary_click(pos);
            }
        }
        if let Some(color) = picked {
            self.menu_action(ctx, MenuAction::SelectColor(color));
        }
    }

    fn show_menu(&mut self, ctx: &egui::Context) {
        let Some(anchor) = self.state.menu.anchor else {
            return;
        };
        let screen = self.state.position + anchor.to_vec2();
        let network_item = self.state.menu.network_item.clone();
        let color_item = self.state.menu.color_item.clone();
        let outcome = ctx.show_viewport_immediate(
            egui::ViewportId::from_hash_of("feature_menu"),
            egui::ViewportBuilder::default()
                .with_title("float_clock menu")
                .with_decorations(false)
                .with_always_on_top()
                .with_taskbar(false)
                .with_resizable(false)
                .with_position(screen)
                .with_inner_size(MENU_SIZE),
            |ctx, class| {
                let mut outcome = None;
                let body = |ui: &mut egui::Ui, outcome: &mut Option<MenuOutcome>| {
                    if ui.button(&network_item).clicked() {
                        *outcome = Some(MenuOutcome::Action(MenuAction::ToggleNetworkPanel));
                    }
                    if ui.button(&color_item).clicked() {
                        *outcome = Some(MenuOutcome::Action(MenuAction::ToggleColorPanel));
                    }
                };
                match class {
                    egui::ViewportClass::Embedded => {
                        egui::Window::new("feature_menu")
                            .title_bar(false)
                            .resizable(false)
                            .fixed_pos(anchor)
                            .show(ctx, |ui| body(ui, &mut outcome));
                    }
                    _ => {
                        egui::CentralPanel::default().show(ctx, |ui| body(ui, &mut outcome));
                        if ctx.input(|i| {
                            i.viewport().close_requested() || i.key_pressed(egui::Key::Escape)
                        }) {
                            outcome = Some(MenuOutcome::Dismiss);
                        }
                    }
                }
                outcome
            },
        );
        match outcome {
            Some(MenuOutcome::Action(action)) => self.menu_action(ctx, action),
            Some(MenuOutcome::Dismiss) => self.menu.close(&mut self.state),
            None => {}
        }
    }
}

fn paint_label(painter: &egui::Painter, label: &LabelState) -> egui::Rect {
    painter.text(
        label.pos,
        egui::Align2::LEFT_TOP,
        &label.text,
        label.font(),
        label.color,
    )
}

impl<C: ClockSource, S: CounterSource> eframe::App for OverlayApp<C, S> {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        if !self.started {
            if let Some(hwnd) = window_manager::get_hwnd(frame) {
                window_manager::set_tool_window_style(hwnd);
                if window_manager::set_window_opacity(hwnd, self.opacity) {
                    self.window_alpha_applied();
                }
            }
            let ppp = ctx.pixels_per_point();
            let width = window_manager::work_area_width()
                .map(|w| w / ppp)
                .or_else(|| ctx.input(|i| i.viewport().monitor_size.map(|s| s.x)));
            self.start(ctx, width);
        }

        if ctx.input(|i| i.viewport().close_requested()) {
            self.close_requested(ctx);
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.escape(ctx);
        }

        let now = Instant::now();
        if self.ticker.poll(now) {
            self.tick_at(ctx, now);
        }
        ctx.request_repaint_after(self.ticker.remaining(now));

        self.draw(ctx);
        self.show_menu(ctx);
    }

    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        [0.0, 0.0, 0.0, 0.0]
    }
}
