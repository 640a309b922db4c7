//! Fixed geometry of the overlay.
//!
//! Every window height the widget ever takes is derived from these values by
//! [`window_height`], so showing and hiding panels always lands on the same
//! numbers.

use eframe::egui::{self, Color32, Pos2, Vec2};

pub const WINDOW_WIDTH: f32 = 180.0;

pub const CLOCK_LABEL_Y: f32 = 8.0;
pub const CLOCK_LABEL_HEIGHT: f32 = 22.0;
pub const CLOCK_FONT_SIZE: f32 = 18.0;

pub const NETWORK_LABEL_Y: f32 = 32.0;
pub const NETWORK_LABEL_HEIGHT: f32 = 16.0;
pub const NETWORK_FONT_SIZE: f32 = 11.0;

/// Space kept below the lowest visible panel.
pub const BOTTOM_MARGIN: f32 = 10.0;

/// Extra height added while the colour panel is shown.
pub const COLOR_PANEL_HEIGHT: f32 = 24.0;
pub const SWATCH_SIZE: f32 = 16.0;
pub const SWATCH_GAP: f32 = 6.0;
pub const SWATCH_TOP_PADDING: f32 = 4.0;

pub const BACKGROUND: Color32 = Color32::from_rgb(40, 40, 40);
pub const DEFAULT_TEXT_COLOR: Color32 = Color32::from_rgb(211, 211, 211);

/// Ordered swatch palette offered by the colour panel.
pub const PALETTE: [Color32; 5] = [
    Color32::WHITE,
    Color32::GREEN,
    Color32::RED,
    Color32::YELLOW,
    Color32::BLUE,
];

/// Panel fill for the given opacity. When the host fades the whole window
/// the fill stays opaque; otherwise the fill alone carries the alpha.
pub fn background_fill(opacity: f32, whole_window_alpha: bool) -> Color32 {
    if whole_window_alpha {
        return BACKGROUND;
    }
    let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(BACKGROUND.r(), BACKGROUND.g(), BACKGROUND.b(), alpha)
}

pub fn clock_label_bottom() -> f32 {
    CLOCK_LABEL_Y + CLOCK_LABEL_HEIGHT
}

pub fn network_label_bottom() -> f32 {
    NETWORK_LABEL_Y + NETWORK_LABEL_HEIGHT
}

/// Bottom edge of the lowest visible text label.
pub fn text_bottom(network_visible: bool) -> f32 {
    if network_visible {
        network_label_bottom()
    } else {
        clock_label_bottom()
    }
}

/// Height of the window for the given combination of visible panels.
pub fn window_height(network_visible: bool, color_visible: bool) -> f32 {
    let color = if color_visible { COLOR_PANEL_HEIGHT } else { 0.0 };
    text_bottom(network_visible) + color + BOTTOM_MARGIN
}

pub fn window_size(network_visible: bool, color_visible: bool) -> Vec2 {
    egui::vec2(WINDOW_WIDTH, window_height(network_visible, color_visible))
}

/// Left edge that centres something `item_width` wide inside the window.
pub fn centered_x(item_width: f32) -> f32 {
    (WINDOW_WIDTH - item_width) / 2.0
}

/// Top-left corners of `count` swatches, evenly spaced and centred as a row
/// just below the lowest visible text label.
pub fn swatch_positions(count: usize, network_visible: bool) -> Vec<Pos2> {
    if count == 0 {
        return Vec::new();
    }
    let row_width = count as f32 * SWATCH_SIZE + (count - 1) as f32 * SWATCH_GAP;
    let start = centered_x(row_width);
    let y = text_bottom(network_visible) + SWATCH_TOP_PADDING;
    (0..count)
        .map(|i| egui::pos2(start + i as f32 * (SWATCH_SIZE + SWATCH_GAP), y))
        .collect()
}

/// Initial top-left corner: pinned near the right edge of the work area.
pub fn initial_position(work_area_width: f32, right_margin: f32, top_offset: f32) -> Pos2 {
    egui::pos2(
        (work_area_width - WINDOW_WIDTH - right_margin).max(0.0),
        top_offset,
    )
}
