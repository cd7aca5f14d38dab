use contracts::domain::booking::{
    Booking, BookingStatus, CreateBookingRequest, UpdateBookingStatusRequest,
};
use uuid::Uuid;

use crate::shared::api::{self, RequestConfig};

pub async fn create_booking(request: &CreateBookingRequest) -> Result<Booking, String> {
    let response = api::post::<Booking, _>("/bookings", request, &RequestConfig::default()).await?;
    response
        .data
        .ok_or_else(|| "Empty response from server".to_string())
}

/// Bookings of the calling user (student or tutor side).
pub async fn fetch_my_bookings() -> Result<Vec<Booking>, String> {
    let response = api::get::<Vec<Booking>>("/bookings", &RequestConfig::default()).await?;
    Ok(response.data.unwrap_or_default())
}

pub async fn fetch_booking(id: Uuid) -> Result<Booking, String> {
    let response =
        api::get::<Booking>(&format!("/bookings/{}", id), &RequestConfig::default()).await?;
    response
        .data
        .ok_or_else(|| "Booking not found".to_string())
}

pub async fn update_booking_status(id: Uuid, status: BookingStatus) -> Result<Booking, String> {
    let request = UpdateBookingStatusRequest { status };
    let response = api::patch::<Booking, _>(
        &format!("/bookings/{}", id),
        &request,
        &RequestConfig::default(),
    )
    .await?;
    response
        .data
        .ok_or_else(|| "Empty response from server".to_string())
}

/// Convenience alias: a cancellation is just a status change.
pub async fn cancel_booking(id: Uuid) -> Result<Booking, String> {
    update_booking_status(id, BookingStatus::Cancelled).await
}

/// Convenience alias: completion is just a status change.
pub async fn complete_booking(id: Uuid) -> Result<Booking, String> {
    update_booking_status(id, BookingStatus::Completed).await
}
