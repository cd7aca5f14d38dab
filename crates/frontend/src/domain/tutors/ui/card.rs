use contracts::domain::tutor::TutorProfile;
use leptos::prelude::*;
use leptos_router::components::A;

/// Tutors at or above this average rating get a badge on their card.
const TOP_RATED_THRESHOLD: f64 = 4.5;

#[component]
pub fn TutorCard(tutor: TutorProfile) -> impl IntoView {
    let name = tutor
        .user
        .as_ref()
        .map(|u| u.name.clone())
        .unwrap_or_else(|| "Anonymous Tutor".to_string());
    let rating = tutor.average_rating.unwrap_or(0.0);
    let review_count = tutor.total_reviews.unwrap_or(0);
    let top_rated = rating >= TOP_RATED_THRESHOLD;
    let href = format!("/tutors/{}", tutor.id);

    view! {
        <div class="card tutor-card">
            <div class="tutor-card__head">
                <h3 class="tutor-card__name">{name}</h3>
                {top_rated.then(|| view! { <span class="badge badge--accent">"Top rated"</span> })}
            </div>
            <div class="tutor-card__rating">
                {format!("\u{2605} {:.1} ({})", rating, review_count)}
            </div>
            {tutor
                .bio
                .clone()
                .map(|bio| view! { <p class="tutor-card__bio">{bio}</p> })}
            <div class="tutor-card__subjects">
                {tutor
                    .subjects
                    .iter()
                    .map(|subject| view! { <span class="badge">{subject.clone()}</span> })
                    .collect_view()}
            </div>
            <div class="tutor-card__footer">
                <span class="tutor-card__rate">
                    {format!("${:.0}", tutor.hourly_rate)} <small>"/hr"</small>
                </span>
                <A href=href attr:class="button button--primary">"View Profile"</A>
            </div>
        </div>
    }
}
