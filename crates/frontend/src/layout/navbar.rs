use contracts::domain::user::UserRole;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::system::session::context::{do_logout, use_session};

/// Landing path of the dashboard for a role.
pub fn dashboard_path(role: UserRole) -> &'static str {
    match role {
        UserRole::Student => "/dashboard/bookings",
        UserRole::Tutor => "/tutor/profile",
        UserRole::Admin => "/admin",
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let (session, set_session) = use_session();
    let navigate = use_navigate();

    let on_logout = move |_| {
        do_logout(set_session);
        navigate("/login", Default::default());
    };

    view! {
        <header class="navbar">
            <A href="/" attr:class="navbar__brand">"SkillBridge"</A>
            <nav class="navbar__links">
                <A href="/">"Home"</A>
                <A href="/tutors">"Find Tutors"</A>
            </nav>
            <div class="navbar__session">
                {move || match session.get().user {
                    Some(user) => {
                        let on_logout = on_logout.clone();
                        view! {
                            <A href=dashboard_path(user.role)>"Dashboard"</A>
                            <span class="navbar__user">{user.name.clone()}</span>
                            <button class="button button--secondary" on:click=on_logout>
                                "Log out"
                            </button>
                        }
                        .into_any()
                    }
                    None => view! {
                        <A href="/login">"Log in"</A>
                        <A href="/register" attr:class="button button--primary">"Sign up"</A>
                    }
                    .into_any(),
                }}
            </div>
        </header>
    }
}
