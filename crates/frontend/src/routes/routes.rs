use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::domain::admin::ui::{
    AdminBookingsPage, AdminCategoriesPage, AdminDashboardPage, AdminUsersPage,
};
use crate::domain::auth::ui::{LoginPage, ProfileSettingsPage, RegisterPage};
use crate::domain::bookings::ui::MyBookingsPage;
use crate::domain::tutors::ui::{
    AvailabilityPage, TutorDetailsPage, TutorProfileEditorPage, TutorsPage,
};
use crate::layout::navbar::Navbar;
use crate::system::pages::{HomePage, NotFoundPage};

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Navbar />
            <main class="app-main">
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/register") view=RegisterPage />
                    <Route path=path!("/tutors") view=TutorsPage />
                    <Route path=path!("/tutors/:id") view=TutorDetailsPage />
                    <Route path=path!("/dashboard/bookings") view=MyBookingsPage />
                    <Route path=path!("/dashboard/profile") view=ProfileSettingsPage />
                    <Route path=path!("/tutor/profile") view=TutorProfileEditorPage />
                    <Route path=path!("/tutor/availability") view=AvailabilityPage />
                    <Route path=path!("/admin") view=AdminDashboardPage />
                    <Route path=path!("/admin/users") view=AdminUsersPage />
                    <Route path=path!("/admin/bookings") view=AdminBookingsPage />
                    <Route path=path!("/admin/categories") view=AdminCategoriesPage />
                </Routes>
            </main>
        </Router>
    }
}
