mod booking_form;
mod list;

pub use booking_form::BookingForm;
pub use list::MyBookingsPage;
