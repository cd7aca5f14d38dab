use contracts::auth::UpdateProfileRequest;
use contracts::domain::user::UserRole;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::domain::auth::{api, validate};
use crate::layout::shell::DashboardShell;
use crate::system::session::context::{do_logout, use_session};

/// A session update may only fill the form while both fields are still blank.
fn should_prefill(name: &str, email: &str) -> bool {
    name.is_empty() && email.is_empty()
}

#[component]
pub fn ProfileSettingsPage() -> impl IntoView {
    view! {
        <DashboardShell role=UserRole::Student>
            <ProfileSettingsForm />
        </DashboardShell>
    }
}

/// Edit the caller's own name and email. The token is bound to the account
/// identity, so a successful save forces a fresh login.
#[component]
fn ProfileSettingsForm() -> impl IntoView {
    let (session, set_session) = use_session();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    // Prefill from the cached user. The session signal settles again after
    // the startup revalidation lands, so only untouched fields are filled;
    // in-progress edits stay put.
    Effect::new(move |_| {
        if let Some(user) = session.get().user {
            if should_prefill(&name.get_untracked(), &email.get_untracked()) {
                name.set(user.name);
                email.set(user.email);
            }
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let validated = validate::validate_name(&name.get())
            .and_then(|_| validate::validate_email(&email.get()));
        if let Err(e) = validated {
            set_error_message.set(Some(e));
            return;
        }

        let request = UpdateProfileRequest {
            name: name.get().trim().to_string(),
            email: email.get().trim().to_string(),
        };

        set_is_loading.set(true);
        set_error_message.set(None);

        let navigate = navigate.clone();
        spawn_local(async move {
            match api::update_profile(&request).await {
                Ok(_) => {
                    do_logout(set_session);
                    navigate("/login", Default::default());
                }
                Err(e) => {
                    set_error_message.set(Some(e));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Profile Settings"</h1>
                    <p class="header__subtitle">
                        "Update your account details. You will need to log in again after saving."
                    </p>
                </div>
            </div>

            <Show when=move || error_message.get().is_some()>
                <div class="notice notice--error">
                    {move || error_message.get().unwrap_or_default()}
                </div>
            </Show>

            <div class="card">
                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="name">"Full Name"</label>
                        <input
                            type="text"
                            id="name"
                            value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="email">"Email Address"</label>
                        <input
                            type="email"
                            id="email"
                            value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label>"Role"</label>
                        <div class="form-static">
                            {move || {
                                session
                                    .get()
                                    .role()
                                    .map(|r| r.as_str())
                                    .unwrap_or("-")
                            }}
                        </div>
                    </div>

                    <button
                        type="submit"
                        class="button button--primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Saving..." } else { "Save Changes" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefill_only_while_blank() {
        assert!(should_prefill("", ""));
        // A revalidated session arriving mid-edit must not overwrite input.
        assert!(!should_prefill("Ada L", ""));
        assert!(!should_prefill("", "ada@example.com"));
        assert!(!should_prefill("Ada", "ada@example.com"));
    }
}
