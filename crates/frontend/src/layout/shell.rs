use contracts::domain::user::UserRole;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::sidebar::Sidebar;
use crate::system::session::context::use_session;

/// Gate for role-bound routes: unauthenticated visitors go to the login
/// screen, authenticated ones with the wrong role go home. Children render
/// only once the session carries a matching user.
#[component]
pub fn RequireRole(role: UserRole, children: ChildrenFn) -> impl IntoView {
    let (session, _) = use_session();
    let navigate = use_navigate();

    Effect::new(move |_| {
        let state = session.get();
        if state.token.is_none() {
            navigate("/login", Default::default());
        } else if state.user.as_ref().is_some_and(|u| u.role != role) {
            navigate("/", Default::default());
        }
    });

    view! {
        <Show
            when=move || session.get().role() == Some(role)
            fallback=|| view! { <div class="page-loading">"Loading..."</div> }
        >
            {children()}
        </Show>
    }
}

/// Role-gated dashboard frame: sidebar on the left, page content on the right.
#[component]
pub fn DashboardShell(role: UserRole, children: ChildrenFn) -> impl IntoView {
    view! {
        <RequireRole role=role>
            <div class="dashboard">
                <Sidebar role=role />
                <main class="dashboard__content">{children()}</main>
            </div>
        </RequireRole>
    }
}
