pub mod confirm;
pub mod dashboard;
pub mod editor;
pub mod ports;
pub mod profile_editor;
pub mod upload;
