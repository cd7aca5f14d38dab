use contracts::domain::admin::AdminBookingQuery;
use contracts::domain::booking::{Booking, BookingStatus};
use contracts::domain::user::UserRole;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

use crate::domain::admin::api as admin_api;
use crate::domain::bookings::api as bookings_api;
use crate::layout::shell::DashboardShell;
use crate::shared::date_utils::format_session;
use crate::shared::request_guard::RequestGuard;

#[component]
pub fn AdminBookingsPage() -> impl IntoView {
    let (bookings, set_bookings) = signal::<Vec<Booking>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (status_filter, set_status_filter) = signal::<Option<BookingStatus>>(None);
    let (reload, set_reload) = signal(0u32);

    let guard = RequestGuard::new();

    Effect::new(move |_| {
        reload.track();
        let query = AdminBookingQuery {
            status: status_filter.get(),
            ..Default::default()
        };
        let generation = guard.begin();
        let task_guard = guard.clone();
        set_loading.set(true);
        spawn_local(async move {
            let result = admin_api::fetch_bookings(&query).await;
            if !task_guard.is_current(generation) {
                return;
            }
            match result {
                Ok(list) => set_bookings.set(list),
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    });

    let set_status = move |id: Uuid, status: BookingStatus| {
        spawn_local(async move {
            match bookings_api::update_booking_status(id, status).await {
                Ok(_) => set_reload.update(|n| *n += 1),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    view! {
        <DashboardShell role=UserRole::Admin>
            <div class="page">
                <h1>"All Bookings"</h1>

                {move || {
                    error
                        .get()
                        .map(|e| view! { <div class="notice notice--error">{e}</div> })
                }}

                <div class="card filter-bar">
                    <select on:change=move |ev| {
                        set_status_filter.set(BookingStatus::parse(&event_target_value(&ev)))
                    }>
                        <option value="">"All Statuses"</option>
                        <option value="PENDING">"Pending"</option>
                        <option value="CONFIRMED">"Confirmed"</option>
                        <option value="COMPLETED">"Completed"</option>
                        <option value="CANCELLED">"Cancelled"</option>
                    </select>
                </div>

                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <div class="page-loading">"Loading..."</div> }
                >
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Student"</th>
                                <th>"Tutor"</th>
                                <th>"Session"</th>
                                <th>"Status"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || bookings.get()
                                key=|booking| (booking.id, booking.status)
                                children=move |booking| {
                                    let student_name = booking
                                        .student
                                        .as_ref()
                                        .map(|s| s.name.clone())
                                        .unwrap_or_else(|| "Unknown".to_string());
                                    let tutor_name = booking
                                        .tutor
                                        .as_ref()
                                        .map(|t| t.name.clone())
                                        .unwrap_or_else(|| "Unknown".to_string());
                                    let session =
                                        format_session(booking.start_time, booking.end_time);
                                    let status = booking.status;
                                    let booking_id = booking.id;
                                    let open = status.cancellable();
                                    view! {
                                        <tr>
                                            <td>{student_name}</td>
                                            <td>{tutor_name}</td>
                                            <td>{session}</td>
                                            <td>
                                                <span class=format!(
                                                    "status status--{}",
                                                    status.as_str().to_lowercase(),
                                                )>{status.as_str()}</span>
                                            </td>
                                            <td>
                                                <Show when=move || open>
                                                    <button
                                                        class="button button--secondary"
                                                        on:click=move |_| {
                                                            set_status(booking_id, BookingStatus::Completed)
                                                        }
                                                    >
                                                        "Complete"
                                                    </button>
                                                    <button
                                                        class="button button--danger"
                                                        on:click=move |_| {
                                                            set_status(booking_id, BookingStatus::Cancelled)
                                                        }
                                                    >
                                                        "Cancel"
                                                    </button>
                                                </Show>
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
