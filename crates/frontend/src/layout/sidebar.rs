use contracts::domain::user::UserRole;
use leptos::prelude::*;
use leptos_router::components::A;

fn links_for(role: UserRole) -> Vec<(&'static str, &'static str)> {
    match role {
        UserRole::Student => vec![
            ("/dashboard/bookings", "My Bookings"),
            ("/dashboard/profile", "Profile"),
        ],
        UserRole::Tutor => vec![
            ("/tutor/profile", "Profile"),
            ("/tutor/availability", "Availability"),
        ],
        UserRole::Admin => vec![
            ("/admin", "Dashboard"),
            ("/admin/users", "Users"),
            ("/admin/bookings", "Bookings"),
            ("/admin/categories", "Categories"),
        ],
    }
}

fn role_label(role: UserRole) -> &'static str {
    match role {
        UserRole::Student => "Student",
        UserRole::Tutor => "Tutor",
        UserRole::Admin => "Admin",
    }
}

#[component]
pub fn Sidebar(role: UserRole) -> impl IntoView {
    view! {
        <aside class="sidebar">
            <A href="/" attr:class="sidebar__brand">"SkillBridge"</A>
            <div class="sidebar__role">{role_label(role)}" Dashboard"</div>
            <nav class="sidebar__nav">
                {links_for(role)
                    .into_iter()
                    .map(|(href, label)| {
                        view! { <A href=href attr:class="sidebar__link">{label}</A> }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}
