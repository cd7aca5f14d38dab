use contracts::domain::tutor::{
    TutorProfile, TutorSearchParams, UpdateAvailabilityRequest, UpsertTutorProfileRequest,
};

use crate::shared::api::{self, RequestConfig};

/// Tutor listing with optional search/category/rate filters.
pub async fn fetch_tutors(params: &TutorSearchParams) -> Result<Vec<TutorProfile>, String> {
    let config = RequestConfig::with_query(params)?;
    let response = api::get::<Vec<TutorProfile>>("/tutors", &config).await?;
    Ok(response.data.unwrap_or_default())
}

/// Single tutor profile. The backend also accepts the literal id "me" for the
/// caller's own profile.
pub async fn fetch_tutor(id: &str) -> Result<TutorProfile, String> {
    let response =
        api::get::<TutorProfile>(&format!("/tutors/{}", id), &RequestConfig::default()).await?;
    response
        .data
        .ok_or_else(|| "Tutor not found".to_string())
}

pub async fn upsert_profile(request: &UpsertTutorProfileRequest) -> Result<TutorProfile, String> {
    let response =
        api::put::<TutorProfile, _>("/tutors/profile", request, &RequestConfig::default()).await?;
    response
        .data
        .ok_or_else(|| "Empty response from server".to_string())
}

pub async fn update_availability(
    request: &UpdateAvailabilityRequest,
) -> Result<TutorProfile, String> {
    let response =
        api::put::<TutorProfile, _>("/tutors/availability", request, &RequestConfig::default())
            .await?;
    response
        .data
        .ok_or_else(|| "Empty response from server".to_string())
}
