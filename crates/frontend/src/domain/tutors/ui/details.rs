use contracts::domain::review::Review;
use contracts::domain::tutor::TutorProfile;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

use crate::domain::bookings::ui::BookingForm;
use crate::domain::reviews::api as reviews_api;
use crate::domain::tutors::api as tutors_api;
use crate::shared::date_utils::format_day;

#[component]
pub fn TutorDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let (tutor, set_tutor) = signal::<Option<TutorProfile>>(None);
    let (reviews, set_reviews) = signal::<Vec<Review>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        let id = params.read().get("id").unwrap_or_default();
        if id.is_empty() {
            return;
        }
        set_loading.set(true);
        spawn_local(async move {
            match tutors_api::fetch_tutor(&id).await {
                Ok(profile) => {
                    // Reviews are keyed inconsistently upstream; try the
                    // profile id first, then the user id.
                    let candidates = [profile.id, profile.user_id];
                    set_tutor.set(Some(profile));
                    set_reviews.set(reviews_api::fetch_tutor_reviews(&candidates).await);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="page">
            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="page-loading">"Loading..."</div> }
            >
                {move || {
                    error
                        .get()
                        .map(|e| view! { <div class="notice notice--error">{e}</div> })
                }}
                {move || tutor.get().map(|profile| view! { <TutorDetails profile=profile reviews=reviews /> })}
            </Show>
        </div>
    }
}

#[component]
fn TutorDetails(
    profile: TutorProfile,
    #[prop(into)] reviews: Signal<Vec<Review>>,
) -> impl IntoView {
    let name = profile
        .user
        .as_ref()
        .map(|u| u.name.clone())
        .unwrap_or_else(|| "Anonymous Tutor".to_string());
    let email = profile.user.as_ref().and_then(|u| u.email.clone());
    let rating = profile.average_rating.unwrap_or(0.0);
    let review_count = profile.total_reviews.unwrap_or(0);
    let bio = profile
        .bio
        .clone()
        .unwrap_or_else(|| "This tutor hasn't added a bio yet.".to_string());

    view! {
        <div class="tutor-details">
            <div class="tutor-details__main">
                <div class="card tutor-details__header">
                    <h1 class="tutor-details__name">{name.clone()}</h1>
                    <div class="tutor-details__meta">
                        <span>{format!("\u{2605} {:.1} ({} reviews)", rating, review_count)}</span>
                        {email.map(|e| view! { <span class="tutor-details__email">{e}</span> })}
                    </div>
                    <div class="tutor-details__subjects">
                        {profile
                            .subjects
                            .iter()
                            .map(|subject| view! { <span class="badge">{subject.clone()}</span> })
                            .collect_view()}
                    </div>
                </div>

                <div class="card">
                    <h2>"About"</h2>
                    <p class="tutor-details__bio">{bio}</p>
                </div>

                <div class="stat-cards">
                    <div class="card stat-card">
                        <span class="stat-card__label">"Hourly Rate"</span>
                        <span class="stat-card__value">{format!("${:.0}", profile.hourly_rate)}</span>
                    </div>
                    <div class="card stat-card">
                        <span class="stat-card__label">"Rating"</span>
                        <span class="stat-card__value">{format!("{:.1}", rating)}</span>
                    </div>
                    <div class="card stat-card">
                        <span class="stat-card__label">"Reviews"</span>
                        <span class="stat-card__value">{review_count}</span>
                    </div>
                </div>

                <div class="card">
                    <h2>"Reviews"</h2>
                    <Show
                        when=move || !reviews.get().is_empty()
                        fallback=|| view! { <p class="empty-state">"No reviews yet"</p> }
                    >
                        <For
                            each=move || reviews.get()
                            key=|review| review.id
                            children=move |review| view! { <ReviewItem review=review /> }
                        />
                    </Show>
                </div>
            </div>

            <aside class="tutor-details__sidebar">
                <BookingForm
                    tutor_id=profile.user_id
                    tutor_name=name
                    hourly_rate=profile.hourly_rate
                />
            </aside>
        </div>
    }
}

#[component]
fn ReviewItem(review: Review) -> impl IntoView {
    let author = review
        .student
        .as_ref()
        .map(|s| s.name.clone())
        .unwrap_or_else(|| "Anonymous".to_string());
    let stars: String = (0..5u8)
        .map(|i| if i < review.rating { '\u{2605}' } else { '\u{2606}' })
        .collect();

    view! {
        <div class="review">
            <div class="review__head">
                <span class="review__author">{author}</span>
                <span class="review__stars">{stars}</span>
            </div>
            {review
                .comment
                .clone()
                .map(|comment| view! { <p class="review__comment">{comment}</p> })}
            <span class="review__date">{format_day(review.created_at)}</span>
        </div>
    }
}
