use contracts::domain::admin::PlatformStatistics;
use contracts::domain::user::UserRole;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::admin::api as admin_api;
use crate::layout::shell::DashboardShell;
use crate::shared::date_utils::format_instant;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let (stats, set_stats) = signal::<Option<PlatformStatistics>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    spawn_local(async move {
        match admin_api::fetch_statistics().await {
            Ok(statistics) => set_stats.set(Some(statistics)),
            Err(e) => set_error.set(Some(e)),
        }
    });

    view! {
        <DashboardShell role=UserRole::Admin>
            <div class="page">
                <h1>"Platform Overview"</h1>

                {move || {
                    error
                        .get()
                        .map(|e| view! { <div class="notice notice--error">{e}</div> })
                }}

                <Show
                    when=move || stats.get().is_some()
                    fallback=|| view! { <div class="page-loading">"Loading..."</div> }
                >
                    {move || {
                        stats
                            .get()
                            .map(|s| {
                                view! {
                                    <div class="stat-cards">
                                        <StatCard label="Users" value=s.total_users />
                                        <StatCard label="Students" value=s.total_students />
                                        <StatCard label="Tutors" value=s.total_tutors />
                                        <StatCard label="Bookings" value=s.total_bookings />
                                        <StatCard
                                            label="Completed Sessions"
                                            value=s.total_completed_bookings
                                        />
                                        <StatCard label="Categories" value=s.total_categories />
                                    </div>

                                    <div class="card">
                                        <h2>"Recent Bookings"</h2>
                                        <Show
                                            when={
                                                let empty = s.recent_bookings.is_empty();
                                                move || !empty
                                            }
                                            fallback=|| {
                                                view! { <p class="empty-state">"No recent activity"</p> }
                                            }
                                        >
                                            <table class="table">
                                                <thead>
                                                    <tr>
                                                        <th>"Student"</th>
                                                        <th>"Tutor"</th>
                                                        <th>"Booked at"</th>
                                                    </tr>
                                                </thead>
                                                <tbody>
                                                    {s
                                                        .recent_bookings
                                                        .iter()
                                                        .map(|booking| {
                                                            view! {
                                                                <tr>
                                                                    <td>{booking.student.name.clone()}</td>
                                                                    <td>{booking.tutor.name.clone()}</td>
                                                                    <td>{format_instant(booking.created_at)}</td>
                                                                </tr>
                                                            }
                                                        })
                                                        .collect_view()}
                                                </tbody>
                                            </table>
                                        </Show>
                                    </div>
                                }
                            })
                    }}
                </Show>
            </div>
        </DashboardShell>
    }
}

#[component]
fn StatCard(label: &'static str, value: u64) -> impl IntoView {
    view! {
        <div class="card stat-card">
            <span class="stat-card__label">{label}</span>
            <span class="stat-card__value">{value}</span>
        </div>
    }
}
