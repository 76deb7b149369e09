pub mod a001_menu_catalog;
pub mod a002_specials;
