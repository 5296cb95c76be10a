use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const MISSING_COUNT: &str = "N/A";
pub const MISSING_TITLE: &str = "No Title";
pub const MISSING_DESCRIPTION: &str = "No Description";

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub username: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelProfile {
    pub channel_id: String,
    pub title: String,
    pub subscriber_count: String, // numeric string, "0" when hidden
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSummary {
    pub video_id: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub views: String,
    pub likes: String,
    pub comments: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub keywords: Vec<String>,
    pub bigrams: Vec<String>,
    pub trigrams: Vec<String>,
    pub tfidf_scores: BTreeMap<String, f64>,
    pub trending_keywords: Vec<String>,
    pub avg_sentiment: f64,
    pub topics: Vec<String>,
    pub suggested_title: String,
    pub suggested_tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub channel_data: ChannelProfile,
    pub videos: Vec<VideoSummary>,
    pub keyword_analysis: AnalysisResult,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
