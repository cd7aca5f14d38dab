use contracts::domain::tutor::UpsertTutorProfileRequest;
use contracts::domain::user::UserRole;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::tutors::api as tutors_api;
use crate::layout::shell::DashboardShell;

/// Create-or-edit form for the tutor's own marketplace profile.
#[component]
pub fn TutorProfileEditorPage() -> impl IntoView {
    let bio = RwSignal::new(String::new());
    let rate_text = RwSignal::new(String::new());
    let subjects_text = RwSignal::new(String::new());
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (saved, set_saved) = signal(false);

    let populate = move |profile: &contracts::domain::tutor::TutorProfile| {
        bio.set(profile.bio.clone().unwrap_or_default());
        rate_text.set(format!("{}", profile.hourly_rate));
        subjects_text.set(profile.subjects.join(", "));
    };

    // First-time tutors have no profile yet; a load failure just leaves the
    // form blank.
    spawn_local(async move {
        match tutors_api::fetch_tutor("me").await {
            Ok(profile) => populate(&profile),
            Err(e) => log::warn!("No existing tutor profile: {}", e),
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_saved.set(false);

        let hourly_rate = match rate_text.get().trim().parse::<f64>() {
            Ok(rate) if rate > 0.0 => rate,
            _ => {
                set_error.set(Some("Enter a positive hourly rate".to_string()));
                return;
            }
        };
        let bio_text = bio.get().trim().to_string();
        let request = UpsertTutorProfileRequest {
            bio: (!bio_text.is_empty()).then_some(bio_text),
            hourly_rate,
            subjects: subjects_text
                .get()
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        };

        set_saving.set(true);
        set_error.set(None);
        spawn_local(async move {
            match tutors_api::upsert_profile(&request).await {
                Ok(profile) => {
                    populate(&profile);
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
                <h1>"My Tutor Profile"</h1>

                {move || {
                    error
                        .get()
                        .map(|e| view! { <div class="notice notice--error">{e}</div> })
                }}
                <Show when=move || saved.get()>
                    <div class="notice notice--success">"Profile saved"</div>
                </Show>

                <form class="card form" on:submit=on_submit>
                    <div class="form-group">
                        <label for="profile-bio">"Bio"</label>
                        <textarea
                            id="profile-bio"
                            rows="5"
                            placeholder="Tell students about your background and teaching style"
                            prop:value=move || bio.get()
                            on:input=move |ev| bio.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="profile-rate">"Hourly rate ($)"</label>
                        <input
                            type="number"
                            id="profile-rate"
                            min="1"
                            step="1"
                            prop:value=move || rate_text.get()
                            on:input=move |ev| rate_text.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="profile-subjects">"Subjects (comma separated)"</label>
                        <input
                            type="text"
                            id="profile-subjects"
                            placeholder="Mathematics, Physics"
                            prop:value=move || subjects_text.get()
                            on:input=move |ev| subjects_text.set(event_target_value(&ev))
                        />
                    </div>

                    <button
                        type="submit"
                        class="button button--primary"
                        disabled=move || saving.get()
                    >
                        {move || if saving.get() { "Saving..." } else { "Save Profile" }}
                    </button>
                </form>
            </div>
        </DashboardShell>
    }
}
