use contracts::domain::review::{Review, ReviewPage};
use uuid::Uuid;

use crate::shared::api::{self, RequestConfig};

/// Tutor reviews are keyed inconsistently upstream (profile id vs. user id).
/// Probe each candidate id in order and take the first non-empty result; a
/// failed probe falls through to the next one.
pub async fn fetch_tutor_reviews(candidates: &[Uuid]) -> Vec<Review> {
    for id in candidates {
        match api::get::<ReviewPage>(&format!("/reviews/tutor/{}", id), &RequestConfig::default())
            .await
        {
            Ok(response) => {
                let reviews = response.data.map(|page| page.reviews).unwrap_or_default();
                if !reviews.is_empty() {
                    return reviews;
                }
            }
            Err(e) => log::error!("Review lookup for {} failed: {}", id, e),
        }
    }
    Vec::new()
}
