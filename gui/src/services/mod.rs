// GUI services module
pub mod clipboard;
pub mod preferences;
