use crate::host::HostSurface;
use crate::state::WidgetState;
use eframe::egui::Pos2;

/// Moves the window while the primary button is held.
///
/// The window background and the clock label both feed the same instance so
/// a drag that starts on one and continues over the other stays consistent.
#[derive(Debug, Default, Clone, Copy)]
pub struct DragController;

impl DragController {
    /// Record where inside the window the pointer went down.
    pub fn pointer_down(&self, state: &mut WidgetState, local: Pos2) {
        state.drag_anchor = Some(local.to_vec2());
    }

    /// Follow the pointer. Returns `true` when the window was moved.
    pub fn pointer_move<H: HostSurface + ?Sized>(
        &self,
        state: &mut WidgetState,
        host: &H,
        local: Pos2,
        primary_held: bool,
    ) -> bool {
        if !primary_held {
            return false;
        }
        let Some(anchor) = state.drag_anchor else {
            return false;
        };
        let screen = state.position + local.to_vec2();
        let next = screen - anchor;
        if next == state.position {
            return false;
        }
        state.position = next;
        host.move_window(next);
        true
    }

    /// Adopt the position the host reports for the window. Pointer events
    /// are window-local, so this keeps screen coordinates right while a move
    /// is still in flight.
    pub fn window_moved(&self, state: &mut WidgetState, actual: Pos2) {
        state.position = actual;
    }

    pub fn pointer_up(&self, state: &mut WidgetState) {
        if state.drag_anchor.take().is_some() {
            tracing::debug!(x = state.position.x, y = state.position.y, "drag finished");
        }
    }
}
