use contracts::domain::admin::{
    AdminBookingQuery, AdminUserQuery, AdminUserSummary, PlatformStatistics,
    UpdateUserStatusRequest,
};
use contracts::domain::booking::Booking;
use contracts::domain::user::UserStatus;
use uuid::Uuid;

use crate::shared::api::{self, RequestConfig};

pub async fn fetch_statistics() -> Result<PlatformStatistics, String> {
    let response =
        api::get::<PlatformStatistics>("/admin/statistics", &RequestConfig::default()).await?;
    response
        .data
        .ok_or_else(|| "Empty response from server".to_string())
}

pub async fn fetch_users(query: &AdminUserQuery) -> Result<Vec<AdminUserSummary>, String> {
    let config = RequestConfig::with_query(query)?;
    let response = api::get::<Vec<AdminUserSummary>>("/admin/users", &config).await?;
    Ok(response.data.unwrap_or_default())
}

pub async fn fetch_bookings(query: &AdminBookingQuery) -> Result<Vec<Booking>, String> {
    let config = RequestConfig::with_query(query)?;
    let response = api::get::<Vec<Booking>>("/admin/bookings", &config).await?;
    Ok(response.data.unwrap_or_default())
}

pub async fn update_user_status(id: Uuid, status: UserStatus) -> Result<(), String> {
    let request = UpdateUserStatusRequest { status };
    api::patch::<serde_json::Value, _>(
        &format!("/admin/users/{}", id),
        &request,
        &RequestConfig::default(),
    )
    .await?;
    Ok(())
}
