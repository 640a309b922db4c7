use crate::layout;
use eframe::egui::{self, Color32, FontId, Pos2, Vec2};

/// A text label drawn inside the overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelState {
    pub text: String,
    pub pos: Pos2,
    pub visible: bool,
    pub color: Color32,
    pub font_size: f32,
}

impl LabelState {
    fn new(y: f32, font_size: f32, visible: bool) -> Self {
        Self {
            text: String::new(),
            pos: egui::pos2(0.0, y),
            visible,
            color: layout::DEFAULT_TEXT_COLOR,
            font_size,
        }
    }

    pub fn font(&self) -> FontId {
        FontId::proportional(self.font_size)
    }
}

/// A clickable colour swatch in the colour panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swatch {
    pub color: Color32,
    pub pos: Pos2,
}

impl Swatch {
    pub fn rect(&self) -> egui::Rect {
        egui::Rect::from_min_size(self.pos, egui::Vec2::splat(layout::SWATCH_SIZE))
    }
}

/// The feature popup menu.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuState {
    /// Window-local anchor while the menu is open.
    pub anchor: Option<Pos2>,
    pub network_item: String,
    pub color_item: String,
}

impl Default for MenuState {
    fn default() -> Self {
        Self {
            anchor: None,
            network_item: "Show Network".into(),
            color_item: "Show Colors".into(),
        }
    }
}

/// All mutable state of the overlay, owned by the app for its whole life.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetState {
    /// Top-left corner of the window in screen coordinates.
    pub position: Pos2,
    pub size: Vec2,
    /// Pointer offset inside the window captured when a drag starts.
    pub drag_anchor: Option<Vec2>,
    pub network_panel_visible: bool,
    pub color_panel_visible: bool,
    pub text_color: Color32,
    pub clock_label: LabelState,
    pub network_label: LabelState,
    pub swatches: Vec<Swatch>,
    pub menu: MenuState,
}

impl WidgetState {
    pub fn new(position: Pos2) -> Self {
        Self {
            position,
            size: layout::window_size(false, false),
            drag_anchor: None,
            network_panel_visible: false,
            color_panel_visible: false,
            text_color: layout::DEFAULT_TEXT_COLOR,
            clock_label: LabelState::new(layout::CLOCK_LABEL_Y, layout::CLOCK_FONT_SIZE, true),
            network_label: LabelState::new(
                layout::NETWORK_LABEL_Y,
                layout::NETWORK_FONT_SIZE,
                false,
            ),
            swatches: Vec::new(),
            menu: MenuState::default(),
        }
    }

    /// Height the window must have for the currently visible panels.
    pub fn expected_height(&self) -> f32 {
        layout::window_height(self.network_panel_visible, self.color_panel_visible)
    }
}

impl Default for WidgetState {
    fn default() -> Self {
        Self::new(Pos2::ZERO)
    }
}

/// Centre `label` horizontally inside the window, keeping its row.
pub(crate) fn center_label<H: crate::host::HostSurface + ?Sized>(host: &H, label: &mut LabelState) {
    let width = host.text_width(&label.text, &label.font());
    label.pos.x = layout::centered_x(width);
}
