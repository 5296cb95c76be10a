use crate::analysis::build_analysis;
use crate::error::AnalyzeError;
use crate::models::{AnalysisResult, AnalyzeResponse, VideoSummary};
use crate::services::trends_service::{fetch_trending_keywords, TrendsClient};
use crate::services::youtube_service::{get_channel_data, get_latest_videos};
use crate::AppState;
use anyhow::{Context, Result};
use chrono::Datelike;
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rocket::tokio::task;

/// Keyword analysis of `videos`, enriched with today's trending searches.
///
/// The analysis itself (topic sampling included) runs on the blocking pool
/// with its own generator seeded from `rng`.
pub async fn analyze_keywords<R: Rng>(
    videos: &[VideoSummary],
    trends: &TrendsClient,
    rng: &mut R,
) -> Result<AnalysisResult> {
    let trending_keywords = fetch_trending_keywords(trends).await;
    let year = chrono::Utc::now().year();
    let videos = videos.to_vec();
    let mut analysis_rng = StdRng::seed_from_u64(rng.gen());

    task::spawn_blocking(move || {
        build_analysis(&videos, trending_keywords, year, &mut analysis_rng)
    })
    .await
    .context("Keyword analysis task failed")
}

/// Channel lookup, latest uploads and keyword analysis for one competitor.
pub async fn analyze_competitor<R: Rng>(
    state: &AppState,
    username: &str,
    rng: &mut R,
) -> Result<AnalyzeResponse, AnalyzeError> {
    let username = username.trim();
    if username.is_empty() {
        return Err(AnalyzeError::Validation);
    }

    let channel_data = get_channel_data(&state.youtube, username)
        .await
        .ok_or(AnalyzeError::NotFound)?;
    info!(
        "Analyzing channel {} ({})",
        channel_data.title, channel_data.channel_id
    );

    let videos = get_latest_videos(&state.youtube, &channel_data.channel_id).await;
    let keyword_analysis = analyze_keywords(&videos, &state.trends, rng).await?;

    Ok(AnalyzeResponse {
        channel_data,
        videos,
        keyword_analysis,
    })
}
