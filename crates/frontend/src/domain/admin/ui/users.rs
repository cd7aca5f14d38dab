use contracts::domain::admin::{AdminUserQuery, AdminUserSummary};
use contracts::domain::user::{UserRole, UserStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

use crate::domain::admin::api as admin_api;
use crate::layout::shell::DashboardShell;
use crate::shared::date_utils::format_day;
use crate::shared::request_guard::RequestGuard;

#[component]
pub fn AdminUsersPage() -> impl IntoView {
    let (users, set_users) = signal::<Vec<AdminUserSummary>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let role_text = RwSignal::new(String::new());
    let search = RwSignal::new(String::new());
    let (query, set_query) = signal(AdminUserQuery::default());
    let (reload, set_reload) = signal(0u32);

    let guard = RequestGuard::new();

    Effect::new(move |_| {
        reload.track();
        let query = query.get();
        let generation = guard.begin();
        let task_guard = guard.clone();
        set_loading.set(true);
        spawn_local(async move {
            let result = admin_api::fetch_users(&query).await;
            if !task_guard.is_current(generation) {
                return;
            }
            match result {
                Ok(list) => set_users.set(list),
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    });

    let apply = move |_| {
        let search_text = search.get().trim().to_string();
        set_query.set(AdminUserQuery {
            role: UserRole::parse(&role_text.get()),
            search: (!search_text.is_empty()).then_some(search_text),
        });
    };

    let toggle_status = move |id: Uuid, status: UserStatus| {
        let next = match status {
            UserStatus::Active => UserStatus::Blocked,
            UserStatus::Blocked => UserStatus::Active,
        };
        spawn_local(async move {
            match admin_api::update_user_status(id, next).await {
                Ok(()) => set_reload.update(|n| *n += 1),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    view! {
        <DashboardShell role=UserRole::Admin>
            <div class="page">
                <h1>"Manage Users"</h1>

                {move || {
                    error
                        .get()
                        .map(|e| view! { <div class="notice notice--error">{e}</div> })
                }}

                <div class="card filter-bar">
                    <select on:change=move |ev| role_text.set(event_target_value(&ev))>
                        <option value="">"All Roles"</option>
                        <option value="STUDENT">"Students"</option>
                        <option value="TUTOR">"Tutors"</option>
                        <option value="ADMIN">"Admins"</option>
                    </select>
                    <input
                        type="text"
                        placeholder="Search name or email..."
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                    <button class="button button--primary" on:click=apply>
                        "Apply"
                    </button>
                </div>

                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <div class="page-loading">"Loading..."</div> }
                >
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Email"</th>
                                <th>"Role"</th>
                                <th>"Joined"</th>
                                <th>"Status"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || users.get()
                                key=|user| (user.id, user.status)
                                children=move |user| {
                                    let status = user.status;
                                    let user_id = user.id;
                                    let action_label = match status {
                                        UserStatus::Active => "Block",
                                        UserStatus::Blocked => "Activate",
                                    };
                                    view! {
                                        <tr>
                                            <td>{user.name.clone()}</td>
                                            <td>{user.email.clone()}</td>
                                            <td>{user.role.as_str()}</td>
                                            <td>{format_day(user.created_at)}</td>
                                            <td>
                                                <span class=format!(
                                                    "status status--{}",
                                                    status.as_str().to_lowercase(),
                                                )>{status.as_str()}</span>
                                            </td>
                                            <td>
                                                <button
                                                    class="button button--secondary"
                                                    on:click=move |_| toggle_status(user_id, status)
                                                >
                                                    {action_label}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </Show>
            </div>
        </DashboardShell>
    }
}
