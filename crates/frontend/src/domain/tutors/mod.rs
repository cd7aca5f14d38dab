pub mod api;
pub mod availability;
pub mod ui;
