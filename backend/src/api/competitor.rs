use crate::error::AnalyzeError;
use crate::models::{AnalyzeRequest, AnalyzeResponse};
use crate::services::analysis_service::analyze_competitor;
use crate::AppState;
use log::{error, warn};
use rand::rngs::{OsRng, StdRng};
use rand::SeedableRng;
use rocket::serde::json::{self, Json};
use rocket::{post, State};

#[post("/analyze", data = "<request>")]
pub async fn analyze(
    state: &State<AppState>,
    request: Result<Json<AnalyzeRequest>, json::Error<'_>>,
) -> Result<Json<AnalyzeResponse>, AnalyzeError> {
    let username = match request {
        Ok(request) => request.into_inner().username.unwrap_or_default(),
        Err(e) => {
            warn!("Unreadable analyze request body: {e:?}");
            String::new()
        }
    };

    let mut rng = StdRng::from_rng(OsRng)
        .map_err(|e| AnalyzeError::Internal(anyhow::anyhow!("Failed to seed RNG: {e}")))?;

    match analyze_competitor(state, &username, &mut rng).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            match &e {
                AnalyzeError::Internal(source) => error!("Error analyzing competitor: {source:?}"),
                other => warn!("Analyze request for '{username}' rejected: {other}"),
            }
            Err(e)
        }
    }
}
