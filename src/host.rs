use eframe::egui;

/// Window surface the overlay core drives.
///
/// Everything the controllers do to the native window goes through this
/// trait, which keeps them testable without a real viewport.
pub trait HostSurface {
    fn send_viewport_cmd(&self, cmd: egui::ViewportCommand);
    fn request_repaint(&self);
    /// Width in points of `text` laid out on a single line with `font`.
    fn text_width(&self, text: &str, font: &egui::FontId) -> f32;

    fn move_window(&self, pos: egui::Pos2) {
        self.send_viewport_cmd(egui::ViewportCommand::OuterPosition(pos));
    }

    fn resize_window(&self, size: egui::Vec2) {
        self.send_viewport_cmd(egui::ViewportCommand::InnerSize(size));
    }
}

impl HostSurface for egui::Context {
    fn send_viewport_cmd(&self, cmd: egui::ViewportCommand) {
        egui::Context::send_viewport_cmd(self, cmd);
    }

    fn request_repaint(&self) {
        egui::Context::request_repaint(self);
    }

    fn text_width(&self, text: &str, font: &egui::FontId) -> f32 {
        self.fonts(|f| {
            f.layout_no_wrap(text.to_owned(), font.clone(), egui::Color32::WHITE)
                .size()
                .x
        })
    }
}
