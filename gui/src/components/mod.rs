// GUI components module
pub mod converter_panel;
pub mod notification;
pub mod theme_switcher;
