//! Window-style capability calls that egui does not cover.

#[cfg(target_os = "windows")]
use raw_window_handle::{HasWindowHandle, RawWindowHandle};
#[cfg(target_os = "windows")]
use windows::Win32::Foundation::HWND;

/// Extract the HWND from an eframe [`Frame`](eframe::Frame).
#[cfg(target_os = "windows")]
pub fn get_hwnd(frame: &eframe::Frame) -> Option<HWND> {
    frame
        .window_handle()
        .ok()
        .and_then(|wh| match wh.as_raw() {
            RawWindowHandle::Win32(handle) => {
                Some(HWND(handle.hwnd.get() as *mut core::ffi::c_void))
            }
            _ => None,
        })
}

#[cfg(not(target_os = "windows"))]
pub fn get_hwnd(_frame: &eframe::Frame) -> Option<()> {
    None
}

/// Mark the window as a tool window so it stays out of the taskbar and the
/// Alt+Tab list.
#[cfg(target_os = "windows")]
pub fn set_tool_window_style(hwnd: HWND) {
    use windows::Win32::UI::WindowsAndMessaging::{
        GetWindowLongPtrW, SetWindowLongPtrW, GWL_EXSTYLE, WS_EX_APPWINDOW, WS_EX_TOOLWINDOW,
    };
    unsafe {
        let style = GetWindowLongPtrW(hwnd, GWL_EXSTYLE);
        let style = (style | WS_EX_TOOLWINDOW.0 as isize) & !(WS_EX_APPWINDOW.0 as isize);
        SetWindowLongPtrW(hwnd, GWL_EXSTYLE, style);
    }
    tracing::debug!("tool window style applied");
}

#[cfg(not(target_os = "windows"))]
pub fn set_tool_window_style<T>(_hwnd: T) {}

/// Fade the whole window, text included, through a layered window.
/// Returns `true` when the alpha was applied.
#[cfg(target_os = "windows")]
pub fn set_window_opacity(hwnd: HWND, opacity: f32) -> bool {
    use windows::Win32::Foundation::COLORREF;
    use windows::Win32::UI::WindowsAndMessaging::{
        GetWindowLongPtrW, SetLayeredWindowAttributes, SetWindowLongPtrW, GWL_EXSTYLE, LWA_ALPHA,
        WS_EX_LAYERED,
    };
    let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    let applied = unsafe {
        let style = GetWindowLongPtrW(hwnd, GWL_EXSTYLE);
        SetWindowLongPtrW(hwnd, GWL_EXSTYLE, style | WS_EX_LAYERED.0 as isize);
        SetLayeredWindowAttributes(hwnd, COLORREF(0), alpha, LWA_ALPHA).is_ok()
    };
    if !applied {
        tracing::warn!(opacity, "layered window alpha rejected");
    }
    applied
}

#[cfg(not(target_os = "windows"))]
pub fn set_window_opacity<T>(_hwnd: T, _opacity: f32) -> bool {
    false
}

/// Width in physical pixels of the primary monitor's work area.
#[cfg(target_os = "windows")]
pub fn work_area_width() -> Option<f32> {
    use windows::Win32::Foundation::RECT;
    use windows::Win32::UI::WindowsAndMessaging::{
        SystemParametersInfoW, SPI_GETWORKAREA, SYSTEM_PARAMETERS_INFO_UPDATE_FLAGS,
    };
    let mut rect = RECT::default();
    let ok = unsafe {
        SystemParametersInfoW(
            SPI_GETWORKAREA,
            0,
            Some(&mut rect as *mut RECT as *mut core::ffi::c_void),
            SYSTEM_PARAMETERS_INFO_UPDATE_FLAGS(0),
        )
        .is_ok()
    };
    if ok {
        Some((rect.right - rect.left) as f32)
    } else {
        None
    }
}

#[cfg(not(target_os = "windows"))]
pub fn work_area_width() -> Option<f32> {
    None
}
