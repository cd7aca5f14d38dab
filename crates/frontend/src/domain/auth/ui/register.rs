use contracts::auth::RegisterRequest;
use contracts::domain::user::UserRole;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::domain::auth::{api, validate};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (role_text, set_role_text) = signal("STUDENT".to_string());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let validated = validate::validate_name(&name.get())
            .and_then(|_| validate::validate_email(&email.get()))
            .and_then(|_| validate::validate_password(&password.get()));
        if let Err(e) = validated {
            set_error_message.set(Some(e));
            return;
        }
        let Some(role) = UserRole::parse(&role_text.get()) else {
            set_error_message.set(Some("Please choose a role".to_string()));
            return;
        };

        let request = RegisterRequest {
            name: name.get().trim().to_string(),
            email: email.get().trim().to_string(),
            password: password.get(),
            role,
        };

        set_is_loading.set(true);
        set_error_message.set(None);

        let navigate = navigate.clone();
        spawn_local(async move {
            match api::register(&request).await {
                Ok(_) => navigate("/login", Default::default()),
                Err(e) => {
                    set_error_message.set(Some(format!("Registration failed: {}", e)));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Create your account"</h1>

                <Show when=move || error_message.get().is_some()>
                    <div class="notice notice--error">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="name">"Full Name"</label>
                        <input
                            type="text"
                            id="name"
                            placeholder="Ada Lovelace"
                            value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="name@example.com"
                            value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="role">"I want to"</label>
                        <select
                            id="role"
                            on:change=move |ev| set_role_text.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        >
                            <option value="STUDENT" selected>"Learn with a tutor"</option>
                            <option value="TUTOR">"Teach as a tutor"</option>
                        </select>
                    </div>

                    <button
                        type="submit"
                        class="button button--primary button--block"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Creating account..." } else { "Sign up" }}
                    </button>
                </form>

                <p class="auth-card__switch">
                    "Already registered? " <A href="/login">"Log in"</A>
                </p>
            </div>
        </div>
    }
}
