use crate::models::MessageResponse;
use rocket::get;
use rocket::serde::json::Json;

/// Nothing is persisted between requests, so there is no history to list.
#[get("/videos")]
pub async fn list_videos() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Real-time analysis only. Use /analyze for competitor data.".to_string(),
    })
}
