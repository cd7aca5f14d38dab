pub mod admin;
pub mod auth;
pub mod bookings;
pub mod categories;
pub mod reviews;
pub mod tutors;
