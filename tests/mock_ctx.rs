#![allow(dead_code)]

use eframe::egui;
use std::sync::{Arc, Mutex};

/// Host surface that records every command instead of driving a window.
/// Text is measured as eight points per character.
#[derive(Clone, Default)]
pub struct MockCtx {
    pub commands: Arc<Mutex<Vec<egui::ViewportCommand>>>,
    pub repaints: Arc<Mutex<usize>>,
}

impl MockCtx {
    pub fn last_size(&self) -> Option<egui::Vec2> {
        self.commands.lock().unwrap().iter().rev().find_map(|c| match c {
            egui::ViewportCommand::InnerSize(size) => Some(*size),
            _ => None,
        })
    }

    pub fn last_position(&self) -> Option<egui::Pos2> {
        self.commands.lock().unwrap().iter().rev().find_map(|c| match c {
            egui::ViewportCommand::OuterPosition(pos) => Some(*pos),
            _ => None,
        })
    }
}

impl float_clock::host::HostSurface for MockCtx {
    fn send_viewport_cmd(&self, cmd: egui::ViewportCommand) {
        self.commands.lock().unwrap().push(cmd);
    }

    fn request_repaint(&self) {
        *self.repaints.lock().unwrap() += 1;
    }

    fn text_width(&self, text: &str, _font: &egui::FontId) -> f32 {
        text.chars().count() as f32 * 8.0
    }
}
