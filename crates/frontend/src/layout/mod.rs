pub mod navbar;
pub mod shell;
pub mod sidebar;
