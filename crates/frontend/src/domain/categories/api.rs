use contracts::domain::category::{Category, UpsertCategoryRequest};
use uuid::Uuid;

use crate::shared::api::{self, RequestConfig};

pub async fn fetch_categories() -> Result<Vec<Category>, String> {
    let response = api::get::<Vec<Category>>("/categories", &RequestConfig::default()).await?;
    Ok(response.data.unwrap_or_default())
}

pub async fn create_category(name: &str) -> Result<Category, String> {
    let request = UpsertCategoryRequest {
        name: name.to_string(),
    };
    let response =
        api::post::<Category, _>("/categories", &request, &RequestConfig::default()).await?;
    response
        .data
        .ok_or_else(|| "Empty response from server".to_string())
}

pub async fn update_category(id: Uuid, name: &str) -> Result<Category, String> {
    let request = UpsertCategoryRequest {
        name: name.to_string(),
    };
    let response = api::put::<Category, _>(
        &format!("/categories/{}", id),
        &request,
        &RequestConfig::default(),
    )
    .await?;
    response
        .data
        .ok_or_else(|| "Empty response from server".to_string())
}

pub async fn delete_category(id: Uuid) -> Result<(), String> {
    api::delete::<serde_json::Value>(&format!("/categories/{}", id), &RequestConfig::default())
        .await?;
    Ok(())
}
