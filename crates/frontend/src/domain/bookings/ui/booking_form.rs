use chrono::{NaiveDate, Utc};
use contracts::domain::booking::CreateBookingRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use uuid::Uuid;

use crate::domain::bookings::api as bookings_api;
use crate::domain::bookings::logic::{
    combine_date_time, end_time_selectable, session_cost, session_hours, TIME_SLOTS,
};

/// Sidebar booking card on the tutor details page. Date plus hourly start/end
/// selects, with a live duration and cost readout.
#[component]
pub fn BookingForm(tutor_id: Uuid, tutor_name: String, hourly_rate: f64) -> impl IntoView {
    let navigate = use_navigate();
    let date_text = RwSignal::new(String::new());
    let start = RwSignal::new(String::new());
    let end = RwSignal::new(String::new());
    let (submitting, set_submitting) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let today = Utc::now().date_naive().to_string();
    let hours = move || session_hours(&start.get(), &end.get());
    let cost = move || session_cost(&start.get(), &end.get(), hourly_rate);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let navigate = navigate.clone();

        let Ok(date) = NaiveDate::parse_from_str(&date_text.get(), "%Y-%m-%d") else {
            set_error.set(Some("Pick a date for your session".to_string()));
            return;
        };
        let (Some(start_time), Some(end_time)) = (
            combine_date_time(date, &start.get()),
            combine_date_time(date, &end.get()),
        ) else {
            set_error.set(Some("Pick a start and end time".to_string()));
            return;
        };
        if end_time <= start_time {
            set_error.set(Some("End time must be after the start time".to_string()));
            return;
        }

        let request = CreateBookingRequest {
            tutor_id,
            start_time,
            end_time,
        };
        set_submitting.set(true);
        set_error.set(None);
        spawn_local(async move {
            match bookings_api::create_booking(&request).await {
                Ok(_) => navigate("/dashboard/bookings", Default::default()),
                Err(e) => {
                    set_error.set(Some(e));
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <form class="card booking-form" on:submit=on_submit>
            <h2 class="booking-form__title">{format!("Book a session with {}", tutor_name)}</h2>

            {move || {
                error
                    .get()
                    .map(|e| view! { <div class="notice notice--error">{e}</div> })
            }}

            <div class="form-group">
                <label for="booking-date">"Date"</label>
                <input
                    type="date"
                    id="booking-date"
                    min=today.clone()
                    prop:value=move || date_text.get()
                    on:input=move |ev| date_text.set(event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label for="booking-start">"Start time"</label>
                <select
                    id="booking-start"
                    on:change=move |ev| {
                        start.set(event_target_value(&ev));
                        // A stale end selection may now sit before the start.
                        if !end_time_selectable(&end.get(), &start.get()) {
                            end.set(String::new());
                        }
                    }
                >
                    <option value="">"Select..."</option>
                    {TIME_SLOTS
                        .into_iter()
                        .map(|slot| view! { <option value=slot>{slot}</option> })
                        .collect_view()}
                </select>
            </div>

            <div class="form-group">
                <label for="booking-end">"End time"</label>
                <select id="booking-end" on:change=move |ev| end.set(event_target_value(&ev))>
                    <option value="">"Select..."</option>
                    {TIME_SLOTS
                        .into_iter()
                        .map(|slot| {
                            view! {
                                <option
                                    value=slot
                                    disabled=move || !end_time_selectable(slot, &start.get())
                                >
                                    {slot}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <Show when=move || { hours() > 0 }>
                <div class="booking-form__summary">
                    <div class="booking-form__row">
                        <span>"Duration"</span>
                        <span>{move || format!("{} hour(s)", hours())}</span>
                    </div>
                    <div class="booking-form__row">
                        <span>"Rate"</span>
                        <span>{format!("${:.0}/hr", hourly_rate)}</span>
                    </div>
                    <div class="booking-form__row booking-form__row--total">
                        <span>"Total"</span>
                        <span>{move || format!("${:.2}", cost())}</span>
                    </div>
                </div>
            </Show>

            <button
                type="submit"
                class="button button--primary button--block"
                disabled=move || submitting.get()
            >
                {move || if submitting.get() { "Booking..." } else { "Book Session" }}
            </button>
        </form>
    }
}
