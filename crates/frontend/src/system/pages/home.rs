use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="hero">
            <h1 class="hero__title">"Learn anything, one session at a time"</h1>
            <p class="hero__subtitle">
                "Browse expert tutors, compare rates and reviews, and book a session that fits your week."
            </p>
            <div class="hero__actions">
                <A href="/tutors" attr:class="button button--primary">"Find Tutors"</A>
                <A href="/register" attr:class="button button--secondary">"Get Started"</A>
            </div>
        </section>
    }
}
