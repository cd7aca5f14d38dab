mod bookings;
mod categories;
mod dashboard;
mod users;

pub use bookings::AdminBookingsPage;
pub use categories::AdminCategoriesPage;
pub use dashboard::AdminDashboardPage;
pub use users::AdminUsersPage;
