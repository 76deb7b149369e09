pub mod images;
pub mod loader;
pub mod navigation;
pub mod ui;
pub mod view_model;
