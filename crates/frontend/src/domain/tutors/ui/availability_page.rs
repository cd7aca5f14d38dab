use std::collections::BTreeMap;

use contracts::domain::tutor::{AvailabilityMap, UpdateAvailabilityRequest};
use contracts::domain::user::UserRole;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::tutors::api as tutors_api;
use crate::domain::tutors::availability::{self, DAYS};
use crate::layout::shell::DashboardShell;

/// Weekly availability editor. Edits stay local until "Save Availability"
/// pushes the whole map to the server.
#[component]
pub fn AvailabilityPage() -> impl IntoView {
    let (availability, set_availability) = signal(AvailabilityMap::new());
    let (drafts, set_drafts) = signal::<BTreeMap<String, String>>(BTreeMap::new());
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (saved, set_saved) = signal(false);

    spawn_local(async move {
        match tutors_api::fetch_tutor("me").await {
            Ok(profile) => set_availability.set(profile.availability.unwrap_or_default()),
            // No profile yet is fine; the tutor starts from an empty week.
            Err(e) => log::warn!("Could not load availability: {}", e),
        }
    });

    let add = move |day: &'static str| {
        let slot = drafts.with(|d| d.get(day).cloned().unwrap_or_default());
        let mut added = false;
        set_availability.update(|map| {
            added = availability::add_slot(map, day, &slot);
        });
        if added {
            set_drafts.update(|d| {
                d.remove(day);
            });
            set_error.set(None);
            set_saved.set(false);
        } else {
            set_error.set(Some("Enter a time slot before adding it".to_string()));
        }
    };

    let remove = move |day: &'static str, index: usize| {
        set_availability.update(|map| availability::remove_slot(map, day, index));
        set_saved.set(false);
    };

    let on_save = move |_| {
        let request = UpdateAvailabilityRequest {
            availability: availability.get(),
        };
        set_saving.set(true);
        set_error.set(None);
        spawn_local(async move {
            match tutors_api::update_availability(&request).await {
                Ok(profile) => {
                    set_availability.set(profile.availability.unwrap_or_default());
                    set_saved.set(true);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_saving.set(false);
        });
    };

    view! {
        <DashboardShell role=UserRole::Tutor>
            <div class="page">
                <h1>"Manage Availability"</h1>
                <p class="page__subtitle">
                    "Add time slots like 09:00-12:00 for each day you can teach."
                </p>

                {move || {
                    error
                        .get()
                        .map(|e| view! { <div class="notice notice--error">{e}</div> })
                }}
                <Show when=move || saved.get()>
                    <div class="notice notice--success">"Availability saved"</div>
                </Show>

                <div class="availability">
                    {DAYS
                        .into_iter()
                        .map(|day| {
                            view! {
                                <div class="card availability__day">
                                    <h3>{availability::day_label(day)}</h3>
                                    <ul class="availability__slots">
                                        {move || {
                                            availability
                                                .with(|map| map.get(day).cloned().unwrap_or_default())
                                                .into_iter()
                                                .enumerate()
                                                .map(|(index, slot)| {
                                                    view! {
                                                        <li class="availability__slot">
                                                            <span>{slot}</span>
                                                            <button
                                                                type="button"
                                                                class="button button--ghost"
                                                                on:click=move |_| remove(day, index)
                                                            >
                                                                "Remove"
                                                            </button>
                                                        </li>
                                                    }
                                                })
                                                .collect_view()
                                        }}
                                    </ul>
                                    <div class="availability__add">
                                        <input
                                            type="text"
                                            placeholder="09:00-12:00"
                                            prop:value=move || {
                                                drafts.with(|d| d.get(day).cloned().unwrap_or_default())
                                            }
                                            on:input=move |ev| {
                                                let value = event_target_value(&ev);
                                                set_drafts.update(|d| {
                                                    d.insert(day.to_string(), value);
                                                });
                                            }
                                        />
                                        <button
                                            type="button"
                                            class="button button--secondary"
                                            on:click=move |_| add(day)
                                        >
                                            "Add"
                                        </button>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <button
                    class="button button--primary"
                    on:click=on_save
                    disabled=move || saving.get()
                >
                    {move || if saving.get() { "Saving..." } else { "Save Availability" }}
                </button>
            </div>
        </DashboardShell>
    }
}
