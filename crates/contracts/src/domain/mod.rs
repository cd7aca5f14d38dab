pub mod admin;
pub mod booking;
pub mod category;
pub mod review;
pub mod tutor;
pub mod user;
