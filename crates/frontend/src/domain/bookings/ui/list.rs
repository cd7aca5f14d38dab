use contracts::domain::booking::Booking;
use contracts::domain::user::UserRole;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::bookings::api as bookings_api;
use crate::layout::shell::DashboardShell;
use crate::shared::date_utils::format_session;

#[component]
pub fn MyBookingsPage() -> impl IntoView {
    let (bookings, set_bookings) = signal::<Vec<Booking>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (reload, set_reload) = signal(0u32);

    Effect::new(move |_| {
        reload.track();
        set_loading.set(true);
        spawn_local(async move {
            match bookings_api::fetch_my_bookings().await {
                Ok(list) => set_bookings.set(list),
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    });

    let cancel = move |id: uuid::Uuid| {
        spawn_local(async move {
            match bookings_api::cancel_booking(id).await {
                Ok(_) => set_reload.update(|n| *n += 1),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    view! {
        <DashboardShell role=UserRole::Student>
            <div class="page">
                <h1>"My Bookings"</h1>

                {move || {
                    error
                        .get()
                        .map(|e| view! { <div class="notice notice--error">{e}</div> })
                }}

                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <div class="page-loading">"Loading..."</div> }
                >
                    <Show
                        when=move || !bookings.get().is_empty()
                        fallback=|| {
                            view! {
                                <div class="empty-state">
                                    <p>"You have no bookings yet."</p>
                                    <p class="empty-state__hint">
                                        "Find a tutor and book your first session."
                                    </p>
                                </div>
                            }
                        }
                    >
                        <table class="table">
                            <thead>
                                <tr>
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
                                        let tutor_name = booking
                                            .tutor
                                            .as_ref()
                                            .map(|t| t.name.clone())
                                            .unwrap_or_else(|| "Unknown".to_string());
                                        let session =
                                            format_session(booking.start_time, booking.end_time);
                                        let status = booking.status;
                                        let booking_id = booking.id;
                                        view! {
                                            <tr>
                                                <td>{tutor_name}</td>
                                                <td>{session}</td>
                                                <td>
                                                    <span class=format!(
                                                        "status status--{}",
                                                        status.as_str().to_lowercase(),
                                                    )>{status.as_str()}</span>
                                                </td>
                                                <td>
                                                    <Show when=move || status.cancellable()>
                                                        <button
                                                            class="button button--danger"
                                                            on:click=move |_| cancel(booking_id)
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
                </Show>
            </div>
        </DashboardShell>
    }
}
