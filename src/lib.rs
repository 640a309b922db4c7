pub mod clock;
pub mod drag;
pub mod gui;
pub mod host;
pub mod layout;
pub mod logging;
pub mod menu;
pub mod network;
pub mod settings;
pub mod state;
pub mod ticker;
pub mod window_manager;
