pub mod hero;
pub mod navbar;
