use crate::host::HostSurface;
use crate::layout;
use crate::state::{Swatch, WidgetState};
use eframe::egui::{Color32, Pos2};

/// Effects the popup menu and the swatch panel can have on the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ToggleNetworkPanel,
    ToggleColorPanel,
    SelectColor(Color32),
}

/// Owns the panel flags and what flipping them does to the layout.
#[derive(Debug, Default, Clone, Copy)]
pub struct MenuController;

impl MenuController {
    /// Show the menu at a window-local point.
    pub fn open(&self, state: &mut WidgetState, at: Pos2) {
        state.menu.anchor = Some(at);
    }

    pub fn close(&self, state: &mut WidgetState) {
        state.menu.anchor = None;
    }

    pub fn apply<H: HostSurface + ?Sized>(
        &self,
        state: &mut WidgetState,
        host: &H,
        action: MenuAction,
    ) {
        match action {
            MenuAction::ToggleNetworkPanel => self.toggle_network(state, host),
            MenuAction::ToggleColorPanel => self.toggle_colors(state, host),
            MenuAction::SelectColor(color) => self.select_color(state, host, color),
        }
    }

    fn toggle_network<H: HostSurface + ?Sized>(&self, state: &mut WidgetState, host: &H) {
        state.network_panel_visible = !state.network_panel_visible;
        state.network_label.visible = state.network_panel_visible;
        state.menu.network_item = if state.network_panel_visible {
            "Hide Network".into()
        } else {
            "Show Network".into()
        };
        if state.color_panel_visible {
            // the swatch row sits under whichever label is lowest
            let positions = layout::swatch_positions(state.swatches.len(), state.network_panel_visible);
            for (swatch, pos) in state.swatches.iter_mut().zip(positions) {
                swatch.pos = pos;
            }
        }
        tracing::debug!(visible = state.network_panel_visible, "network panel toggled");
        self.resize(state, host);
    }

    fn toggle_colors<H: HostSurface + ?Sized>(&self, state: &mut WidgetState, host: &H) {
        state.color_panel_visible = !state.color_panel_visible;
        if state.color_panel_visible {
            state.swatches = layout::PALETTE
                .iter()
                .zip(layout::swatch_positions(
                    layout::PALETTE.len(),
                    state.network_panel_visible,
                ))
                .map(|(&color, pos)| Swatch { color, pos })
                .collect();
            state.menu.color_item = "Hide Colors".into();
        } else {
            state.swatches.clear();
            state.menu.color_item = "Show Colors".into();
        }
        tracing::debug!(visible = state.color_panel_visible, "colour panel toggled");
        self.resize(state, host);
    }

    fn select_color<H: HostSurface + ?Sized>(
        &self,
        state: &mut WidgetState,
        host: &H,
        color: Color32,
    ) {
        state.text_color = color;
        state.clock_label.color = color;
        state.network_label.color = color;
        tracing::debug!(?color, "text colour changed");
        host.request_repaint();
    }

    fn resize<H: HostSurface + ?Sized>(&self, state: &mut WidgetState, host: &H) {
        state.size = layout::window_size(state.network_panel_visible, state.color_panel_visible);
        host.resize_window(state.size);
    }
}
